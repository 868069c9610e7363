use crate::foundation::core::Millis;
use crate::foundation::error::{RavenError, RavenResult};

/// Phase switches from charge to burst.
pub const BURST_DELAY: Millis = Millis(600);
/// Target image becomes visible.
pub const REVEAL_DELAY: Millis = Millis(1100);
/// Whole run; the silhouette flight lasts this long.
pub const RAVEN_DURATION: Millis = Millis(2800);
/// Spacing of frame boundaries (~60 Hz).
pub const FRAME_INTERVAL: Millis = Millis(16);

/// Timing of one transition run, relative to the `play()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    /// Delay until the aura bursts.
    pub burst_delay: Millis,
    /// Delay until the target image is shown.
    pub reveal_delay: Millis,
    /// Length of the whole run.
    pub duration: Millis,
    /// Spacing of frame boundaries for deferred replays.
    pub frame_interval: Millis,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            burst_delay: BURST_DELAY,
            reveal_delay: REVEAL_DELAY,
            duration: RAVEN_DURATION,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

impl TimelineConfig {
    /// Parse a JSON object; omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> RavenResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Cue delays must be strictly increasing and non-zero.
    pub fn validate(&self) -> RavenResult<()> {
        if self.burst_delay == Millis::ZERO {
            return Err(RavenError::validation("burst_delay must be > 0"));
        }
        if self.reveal_delay <= self.burst_delay {
            return Err(RavenError::validation(
                "reveal_delay must be greater than burst_delay",
            ));
        }
        if self.duration <= self.reveal_delay {
            return Err(RavenError::validation(
                "duration must be greater than reveal_delay",
            ));
        }
        if self.frame_interval == Millis::ZERO {
            return Err(RavenError::validation("frame_interval must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
