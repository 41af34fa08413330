use crate::foundation::error::{LoopError, LoopResult};

/// Straight (non-premultiplied) RGBA8 palette entry.
pub type Rgba8 = [u8; 4];

/// Fully transparent black.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

/// How the area of a frame is treated before the next frame is drawn.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Disposal {
    /// No disposal specified.
    #[default]
    Any,
    /// Leave the frame in place.
    Keep,
    /// Clear the frame area to the background.
    Background,
    /// Restore whatever was there before the frame was drawn.
    Previous,
}

impl From<gif::DisposalMethod> for Disposal {
    fn from(value: gif::DisposalMethod) -> Self {
        match value {
            gif::DisposalMethod::Any => Self::Any,
            gif::DisposalMethod::Keep => Self::Keep,
            gif::DisposalMethod::Background => Self::Background,
            gif::DisposalMethod::Previous => Self::Previous,
        }
    }
}

impl From<Disposal> for gif::DisposalMethod {
    fn from(value: Disposal) -> Self {
        match value {
            Disposal::Any => Self::Any,
            Disposal::Keep => Self::Keep,
            Disposal::Background => Self::Background,
            Disposal::Previous => Self::Previous,
        }
    }
}

/// How many times a player should run the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopCount {
    /// Play once; no looping extension is written.
    Once,
    /// Loop forever.
    #[default]
    Infinite,
    /// Play `1 + n` times.
    Finite(u16),
}

impl LoopCount {
    /// Interpret the conventional integer flag: `-1` plays once, `0` loops
    /// forever, `N` repeats `N` extra times.
    pub fn from_flag(flag: i64) -> LoopResult<Self> {
        match flag {
            -1 => Ok(Self::Once),
            0 => Ok(Self::Infinite),
            n if n > 0 => u16::try_from(n).map(Self::Finite).map_err(|_| {
                LoopError::configuration(format!(
                    "loop count must be at most {}, got {n}",
                    u16::MAX
                ))
            }),
            n => Err(LoopError::configuration(format!(
                "loop count must be -1 or greater, got {n}"
            ))),
        }
    }

    pub fn as_flag(self) -> i64 {
        match self {
            Self::Once => -1,
            Self::Infinite => 0,
            Self::Finite(n) => i64::from(n),
        }
    }
}

/// Axis-aligned pixel rectangle, `max` exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + i64::from(width),
            max_y: y + i64::from(height),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(self) -> u32 {
        u32::try_from(self.max_x - self.min_x).unwrap_or(0)
    }

    pub fn height(self) -> u32 {
        u32::try_from(self.max_y - self.min_y).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
