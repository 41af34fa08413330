//! Loop editing: every transform between decode and encode.
//!
//! [`pipeline::Editor`] runs the stages in a fixed order: flatten, reverse,
//! reduce, stitch, retime, then shuffle or shift and fade.

/// User-facing options and their validated form.
pub mod config;
pub mod fade;
/// The end-to-end editor.
pub mod pipeline;
/// Trimming, windowing and cutting.
pub mod reduce;
pub mod shift;
/// Stitch modes and sequence expansion.
pub mod stitch;
/// Delay scaling.
pub mod timing;
