use crate::edit::fade::Fade;
use crate::edit::reduce::Reduction;
use crate::edit::stitch::Stitch;
use crate::foundation::core::LoopCount;
use crate::foundation::error::{LoopError, LoopResult};

/// Raw editing options as they arrive from a config file or the command line.
///
/// Nothing here is trusted; [`EditOptions::validate`] turns it into an
/// [`EditConfig`] once, before any frame is processed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditOptions {
    /// Keep transparency instead of flattening onto an opaque canvas.
    pub transparent: bool,
    /// Added to both `trim_start` and `trim_end`.
    pub trim_edges: i64,
    pub trim_start: i64,
    pub trim_end: i64,
    /// Drop every nth frame; 0 disables.
    pub cut_interval: i64,
    /// Fixed sequence length after trimming; 0 disables.
    pub window: i64,
    /// Rotate the final sequence leftward.
    pub shift: i64,
    pub stitch: String,
    /// `RRGGBB`, optionally prefixed with `#` or `0x`. Fading is off when unset.
    pub fade_color: Option<String>,
    pub fade_rate: f64,
    /// Delay multiplier; negative reverses the sequence.
    pub scale_delay: f64,
    /// Pixels per frame for the pan stitches.
    pub pan_velocity: f64,
    /// -1 plays once, 0 loops forever, N repeats N extra times.
    pub loop_count: i64,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            transparent: false,
            trim_edges: 0,
            trim_start: 0,
            trim_end: 0,
            cut_interval: 0,
            window: 0,
            shift: 0,
            stitch: Stitch::default().name().to_string(),
            fade_color: None,
            fade_rate: 1.0,
            scale_delay: 1.0,
            pan_velocity: 1.0,
            loop_count: 0,
        }
    }
}

/// Validated, immutable editing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct EditConfig {
    pub transparent: bool,
    pub reduction: Reduction,
    /// Play the source backwards (from a negative delay scale).
    pub reverse: bool,
    /// Always positive.
    pub delay_factor: f64,
    pub shift: i64,
    pub stitch: Stitch,
    pub fade: Option<Fade>,
    pub pan_velocity: f64,
    pub loop_count: LoopCount,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            reduction: Reduction::default(),
            reverse: false,
            delay_factor: 1.0,
            shift: 0,
            stitch: Stitch::default(),
            fade: None,
            pan_velocity: 1.0,
            loop_count: LoopCount::Infinite,
        }
    }
}

fn non_negative(value: i64, what: &str) -> LoopResult<usize> {
    usize::try_from(value)
        .map_err(|_| LoopError::configuration(format!("{what} cannot be negative")))
}

/// Parse `RRGGBB`, `#RRGGBB` or `0xRRGGBB`.
pub fn parse_hex_rgb(s: &str) -> LoopResult<[u8; 3]> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LoopError::configuration(format!(
            "fade color must be a hex RRGGBB value, got '{s}'"
        )));
    }
    let v = u32::from_str_radix(digits, 16)
        .map_err(|e| LoopError::configuration(format!("fade color '{s}': {e}")))?;
    Ok([(v >> 16) as u8, (v >> 8) as u8, v as u8])
}

impl EditOptions {
    pub fn validate(&self) -> LoopResult<EditConfig> {
        let trim_edges = non_negative(self.trim_edges, "trim edges")?;
        let trim_start = non_negative(self.trim_start, "trim start")?;
        let trim_end = non_negative(self.trim_end, "trim end")?;
        let window = non_negative(self.window, "window")?;

        if self.cut_interval < 0 || self.cut_interval == 1 {
            return Err(LoopError::configuration(
                "cut interval cannot be less than two",
            ));
        }
        let cut_interval = self.cut_interval as usize;

        let stitch: Stitch = self.stitch.parse()?;

        if !self.scale_delay.is_finite() || self.scale_delay == 0.0 {
            return Err(LoopError::configuration(format!(
                "scale delay must be finite and non-zero, got {}",
                self.scale_delay
            )));
        }
        if !self.pan_velocity.is_finite() {
            return Err(LoopError::configuration("pan velocity must be finite"));
        }

        let fade = match &self.fade_color {
            None => None,
            Some(color) => {
                if !self.fade_rate.is_finite() || self.fade_rate < 0.0 {
                    return Err(LoopError::configuration(format!(
                        "fade rate must be finite and non-negative, got {}",
                        self.fade_rate
                    )));
                }
                Some(Fade {
                    color: parse_hex_rgb(color)?,
                    rate: self.fade_rate,
                })
            }
        };

        Ok(EditConfig {
            transparent: self.transparent,
            reduction: Reduction {
                trim_start: trim_start.saturating_add(trim_edges),
                trim_end: trim_end.saturating_add(trim_edges),
                window,
                cut_interval,
            },
            reverse: self.scale_delay < 0.0,
            delay_factor: self.scale_delay.abs(),
            shift: self.shift,
            stitch,
            fade,
            pan_velocity: self.pan_velocity,
            loop_count: LoopCount::from_flag(self.loop_count)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/config.rs"]
mod tests;
