use crate::animation::aura::AuraLevels;
use crate::animation::flight::{RavenFlight, SilhouettePose};
use crate::assets::file::ImageFile;
use crate::assets::manager::{ImageResourceManager, ResolvedImage};
use crate::foundation::core::{Millis, Slot};
use crate::foundation::error::RavenResult;
use crate::timeline::config::TimelineConfig;
use crate::timeline::controller::{AnimationPhase, TimelineController, TimelineCue, TimelineState};
use crate::timeline::scheduler::{Fired, Scheduler, TimerId};

/// Work queued on the component's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// A timeline transition scheduled by `play()`.
    Cue(TimelineCue),
    /// Restart the timeline after an image substitution.
    Replay,
}

impl From<TimelineCue> for Task {
    fn from(cue: TimelineCue) -> Self {
        Self::Cue(cue)
    }
}

/// Everything a renderer needs for one paint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RenderState {
    /// Silhouette and aura are on screen.
    pub is_animating: bool,
    /// Target image replaces the source.
    pub show_target: bool,
    /// Aura stage.
    pub phase: AnimationPhase,
    /// Image shown before the burst.
    pub source: ResolvedImage,
    /// Image revealed by the burst.
    pub target: ResolvedImage,
}

impl RenderState {
    /// Serialize for a view layer.
    pub fn to_json(&self) -> RavenResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Derived visual values for one paint.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Presentation {
    /// Raven pose and opacity.
    pub silhouette: SilhouettePose,
    /// Portal glow levels.
    pub aura: AuraLevels,
    /// Opacity of the source image.
    pub source_opacity: f64,
    /// Opacity of the target image.
    pub target_opacity: f64,
}

/// What a teardown freed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Scheduled tasks dropped before firing.
    pub timers_cancelled: usize,
    /// Image handles freed.
    pub handles_released: usize,
}

/// The raven portal transition: a timeline plus the images it moves between.
///
/// Time only moves through [`advance_to`](Self::advance_to) / [`advance_by`](Self::advance_by);
/// every state change happens while those dispatch due tasks, or synchronously in
/// [`play`](Self::play).
#[derive(Debug)]
pub struct RavenTransition {
    scheduler: Scheduler<Task>,
    timeline: TimelineController,
    images: ImageResourceManager,
    flight: RavenFlight,
    replay_request: Option<TimerId>,
    disposed: bool,
}

impl RavenTransition {
    /// Mount with a validated config. Mounting starts the first run at t=0.
    pub fn new(config: TimelineConfig) -> RavenResult<Self> {
        config.validate()?;
        Ok(Self::mount(config))
    }

    /// Mount with the stock 600/1100/2800 ms timings.
    pub fn with_defaults() -> Self {
        Self::mount(TimelineConfig::default())
    }

    fn mount(config: TimelineConfig) -> Self {
        let mut this = Self {
            scheduler: Scheduler::new(config.frame_interval),
            timeline: TimelineController::new(config),
            images: ImageResourceManager::new(),
            flight: RavenFlight::new(),
            replay_request: None,
            disposed: false,
        };
        tracing::debug!(?config, "transition mounted");
        this.play();
        this
    }

    /// Current clock reading.
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    /// Current timeline flags.
    pub fn state(&self) -> TimelineState {
        self.timeline.state()
    }

    /// The timeline controller.
    pub fn timeline(&self) -> &TimelineController {
        &self.timeline
    }

    /// The image resource manager.
    pub fn images(&self) -> &ImageResourceManager {
        &self.images
    }

    /// `true` after [`dispose`](Self::dispose).
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tasks still waiting on the clock, including a pending replay.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Number of unreleased image handles.
    pub fn live_handles(&self) -> usize {
        self.images.blobs().live_count()
    }

    /// Restart the sequence now, superseding any run in flight.
    pub fn play(&mut self) {
        if self.disposed {
            tracing::warn!("play() after dispose ignored");
            return;
        }
        self.timeline.play(&mut self.scheduler);
    }

    /// Swap in a user-picked image, then replay at the next frame boundary.
    ///
    /// `None` (picker closed without a selection) changes nothing and returns `false`.
    /// Several swaps before the same boundary share one replay.
    pub fn set_image(&mut self, slot: Slot, file: Option<ImageFile>) -> bool {
        if self.disposed {
            tracing::warn!(%slot, "set_image() after dispose ignored");
            return false;
        }
        if !self.images.set_image(slot, file.as_ref()) {
            return false;
        }

        let replay_queued = self
            .replay_request
            .is_some_and(|id| self.scheduler.is_pending(id));
        if !replay_queued {
            self.replay_request = Some(self.scheduler.request_frame(Task::Replay));
        }
        true
    }

    /// Run every task due at or before `t`, in order, then park the clock at `t`.
    pub fn advance_to(&mut self, t: Millis) {
        while let Some(fired) = self.scheduler.pop_due(t) {
            self.dispatch(fired);
        }
        self.scheduler.settle(t);
    }

    /// [`advance_to`](Self::advance_to) `delta` past the current clock.
    pub fn advance_by(&mut self, delta: Millis) {
        self.advance_to(self.now() + delta);
    }

    fn dispatch(&mut self, fired: Fired<Task>) {
        match fired.task {
            Task::Cue(cue) => {
                self.timeline.apply(fired.id, cue);
            }
            Task::Replay => {
                if self.replay_request == Some(fired.id) {
                    self.replay_request = None;
                }
                tracing::debug!(at = fired.at.0, "replaying after image swap");
                self.timeline.play(&mut self.scheduler);
            }
        }
    }

    /// Image currently displayed in `slot`.
    pub fn resolve(&self, slot: Slot) -> ResolvedImage {
        self.images.resolve(slot)
    }

    /// Flags and image urls for the next paint.
    pub fn render_state(&self) -> RenderState {
        let state = self.timeline.state();
        RenderState {
            is_animating: state.is_animating,
            show_target: state.show_target,
            phase: state.phase,
            source: self.images.resolve(Slot::Source),
            target: self.images.resolve(Slot::Target),
        }
    }

    /// Derived visual values for the next paint.
    pub fn presentation(&self) -> Presentation {
        let state = self.timeline.state();
        let silhouette = match self.timeline.elapsed(self.now()) {
            Some(elapsed) => self
                .flight
                .sample(elapsed, self.timeline.config().duration),
            None => self.flight.hidden(),
        };
        let (source_opacity, target_opacity) = if state.show_target {
            (0.0, 1.0)
        } else {
            (1.0, 0.0)
        };
        Presentation {
            silhouette,
            aura: AuraLevels::for_state(state),
            source_opacity,
            target_opacity,
        }
    }

    /// Cancel every pending task and release every image handle.
    ///
    /// Later calls to `play`/`set_image` are ignored; a second dispose reports nothing.
    pub fn dispose(&mut self) -> TeardownReport {
        if self.disposed {
            return TeardownReport::default();
        }
        self.disposed = true;

        let mut timers_cancelled = self.timeline.cancel_pending(&mut self.scheduler);
        if let Some(id) = self.replay_request.take()
            && self.scheduler.cancel(id)
        {
            timers_cancelled += 1;
        }
        timers_cancelled += self.scheduler.cancel_all();

        let report = TeardownReport {
            timers_cancelled,
            handles_released: self.images.teardown(),
        };
        tracing::debug!(?report, "transition disposed");
        report
    }
}

impl Drop for RavenTransition {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../tests/unit/component.rs"]
mod tests;
