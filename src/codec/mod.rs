//! Container I/O.

/// GIF decode and encode built on the `gif` crate.
pub mod gif_codec;
