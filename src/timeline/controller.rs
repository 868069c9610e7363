use smallvec::SmallVec;

use crate::foundation::core::Millis;
use crate::timeline::config::TimelineConfig;
use crate::timeline::scheduler::{Scheduler, TimerId};

/// Visual stage of the portal aura.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPhase {
    /// No run in progress.
    #[default]
    Idle,
    /// Aura gathering before the burst.
    Charge,
    /// Aura burst open.
    Burst,
}

/// Flags the renderer reads on every paint.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineState {
    /// Silhouette and aura are on screen.
    pub is_animating: bool,
    /// Target image replaces the source.
    pub show_target: bool,
    /// Aura stage.
    pub phase: AnimationPhase,
}

/// Scheduled transition of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimelineCue {
    /// `phase = burst`
    Burst,
    /// `show_target = true`
    Reveal,
    /// `is_animating = false, phase = idle`
    Finish,
}

/// Owns the timeline state and the tokens of every cue it has scheduled but not yet seen fire.
#[derive(Debug)]
pub struct TimelineController {
    config: TimelineConfig,
    state: TimelineState,
    pending: SmallVec<[TimerId; 3]>,
    started_at: Option<Millis>,
    runs: u64,
}

impl TimelineController {
    /// Idle controller; nothing is scheduled until [`play`](Self::play).
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            config,
            state: TimelineState::default(),
            pending: SmallVec::new(),
            started_at: None,
            runs: 0,
        }
    }

    /// Timings used by every run.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Current flags.
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Outstanding cues of the current run.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Number of `play()` calls so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Time since the current run started, while it is animating.
    pub fn elapsed(&self, now: Millis) -> Option<Millis> {
        if !self.state.is_animating {
            return None;
        }
        self.started_at.map(|start| now.since(start))
    }

    /// Restart the sequence from the scheduler's current instant.
    ///
    /// Every cue of a previous run is cancelled before the new ones are scheduled, so a superseded
    /// run can never touch the state again.
    #[tracing::instrument(level = "debug", skip_all, fields(now = scheduler.now().0))]
    pub fn play<T>(&mut self, scheduler: &mut Scheduler<T>)
    where
        T: From<TimelineCue>,
    {
        let superseded = self.cancel_pending(scheduler);
        if superseded > 0 {
            tracing::debug!(superseded, "replacing in-flight run");
        }

        self.state = TimelineState {
            is_animating: true,
            show_target: false,
            phase: AnimationPhase::Charge,
        };
        self.started_at = Some(scheduler.now());
        self.runs += 1;

        for (delay, cue) in [
            (self.config.burst_delay, TimelineCue::Burst),
            (self.config.reveal_delay, TimelineCue::Reveal),
            (self.config.duration, TimelineCue::Finish),
        ] {
            self.pending.push(scheduler.set_timeout(delay, T::from(cue)));
        }
    }

    /// Apply a fired cue. Cues whose token is not outstanding are ignored and return `false`.
    pub fn apply(&mut self, id: TimerId, cue: TimelineCue) -> bool {
        let Some(pos) = self.pending.iter().position(|p| *p == id) else {
            tracing::debug!(?id, ?cue, "ignoring stale cue");
            return false;
        };
        self.pending.remove(pos);

        match cue {
            TimelineCue::Burst => self.state.phase = AnimationPhase::Burst,
            TimelineCue::Reveal => self.state.show_target = true,
            TimelineCue::Finish => {
                self.state.is_animating = false;
                self.state.phase = AnimationPhase::Idle;
            }
        }
        tracing::trace!(?cue, state = ?self.state, "cue applied");
        true
    }

    /// Cancel every outstanding cue; returns how many were cancelled.
    pub fn cancel_pending<T>(&mut self, scheduler: &mut Scheduler<T>) -> usize {
        self.pending
            .drain(..)
            .filter(|id| scheduler.cancel(*id))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
