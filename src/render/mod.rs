//! Canvas flattening and color quantization.

/// Premultiplied source-over compositing onto a shared canvas.
pub mod composite;
/// Full-color to palette reduction.
pub mod quantize;
