//! Loopsmith turns animated GIFs into seamless loops.
//!
//! An edit decodes the source with [`decode`], flattens every frame onto one
//! canvas, and then reshapes the sequence through an [`Editor`] before
//! writing it back with [`encode`].
//!
//! # Pipeline overview
//!
//! 1. **Decode**: GIF bytes -> [`Animation`] of palette-indexed frames
//! 2. **Flatten**: composite onto the union canvas and requantize
//! 3. **Reduce**: trims, window and cut interval
//! 4. **Stitch**: mirror, flip, pan or shuffle around the loop seam
//! 5. **Retime and seam**: delay scaling, start shift and palette fade
//! 6. **Encode**: [`Animation`] -> GIF bytes with per-frame palettes
//!
//! Editing parameters arrive as [`EditOptions`] (JSON or CLI) and are checked
//! once into an immutable [`EditConfig`].
#![forbid(unsafe_code)]

pub mod codec;
pub mod edit;
pub mod foundation;
pub mod render;
pub mod sequence;

pub use crate::codec::gif_codec::{decode, decode_file, encode, encode_file};
pub use crate::edit::config::{EditConfig, EditOptions, parse_hex_rgb};
pub use crate::edit::fade::Fade;
pub use crate::edit::pipeline::Editor;
pub use crate::edit::reduce::Reduction;
pub use crate::edit::stitch::Stitch;
pub use crate::foundation::core::{Bounds, Disposal, LoopCount, Rgba8, TRANSPARENT};
pub use crate::foundation::error::{LoopError, LoopResult};
pub use crate::foundation::math::wrap;
pub use crate::render::composite::Compositor;
pub use crate::render::quantize::{ExactQuantizer, NeuQuantizer, Quantizer};
pub use crate::sequence::animation::Animation;
pub use crate::sequence::cel::{Cel, Sequence};
pub use crate::sequence::frame::IndexedFrame;
