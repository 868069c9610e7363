//! Raven portal is the state core of a two-image transition: a raven silhouette sweeps across the
//! frame, a portal aura charges and bursts, and the view switches from a source still to a target
//! still.
//!
//! # Pieces
//!
//! - [`TimelineController`]: phase/visibility state plus the cancellation tokens of the cues it
//!   scheduled. [`TimelineController::play`] restarts the run and cancels any run in flight.
//! - [`ImageResourceManager`]: user-supplied images per [`Slot`], at most one live
//!   [`ImageHandle`] per slot, everything released on teardown.
//! - [`Scheduler`]: single-threaded timers over a virtual clock, with frame-aligned requests.
//! - [`RavenTransition`]: the component tying them together and exposing [`RenderState`] and
//!   [`Presentation`] for each paint.
//!
//! # Getting started
//!
//! ```
//! use raven_portal::{AnimationPhase, Millis, RavenTransition};
//!
//! let mut t = RavenTransition::with_defaults();
//! t.advance_to(Millis(900));
//! assert_eq!(t.state().phase, AnimationPhase::Burst);
//! t.advance_to(Millis(3000));
//! assert!(!t.state().is_animating);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod component;
mod foundation;
mod timeline;

pub use animation::aura::{AuraLevels, GlowLevel};
pub use animation::ease::Ease;
pub use animation::flight::{FlightPose, RavenFlight, SilhouettePose};
pub use animation::keyframes::{Keyframe, Lerp, Track};
pub use assets::blob::{BlobStats, BlobStore, HandleId, ImageHandle};
pub use assets::file::ImageFile;
pub use assets::manager::{ImageResourceManager, ResolvedImage, SlotMap};
pub use component::{Presentation, RavenTransition, RenderState, Task, TeardownReport};
pub use foundation::core::{
    Affine, FALLBACK_SOURCE, FALLBACK_TARGET, FallbackImage, Millis, Slot, Vec2,
};
pub use foundation::error::{RavenError, RavenResult};
pub use timeline::config::{
    BURST_DELAY, FRAME_INTERVAL, RAVEN_DURATION, REVEAL_DELAY, TimelineConfig,
};
pub use timeline::controller::{AnimationPhase, TimelineController, TimelineCue, TimelineState};
pub use timeline::scheduler::{Fired, Scheduler, TimerId, TimerKind};
