//! Frame containers: indexed rasters, timed cels and whole animations.

pub mod animation;
/// Ordered frames with their delays and disposals.
pub mod cel;
/// Palette-indexed rasters.
pub mod frame;
