use crate::animation::ease::Ease;
use crate::animation::keyframes::{Keyframe, Lerp, Track};
use crate::foundation::core::{Affine, Millis, Vec2};

/// Silhouette transform relative to its own box, pivoting on the box center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightPose {
    /// Offset as a fraction of the box size (`-1.2` = 120% to the left).
    pub translate: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Clockwise rotation in degrees.
    pub rotate_deg: f64,
}

impl FlightPose {
    const fn new(tx: f64, ty: f64, scale: f64, rotate_deg: f64) -> Self {
        Self {
            translate: Vec2::new(tx, ty),
            scale,
            rotate_deg,
        }
    }

    /// Resolve into an affine transform for a silhouette box of `box_size` pixels.
    ///
    /// Applied as translate, then scale, then rotate.
    pub fn to_affine(self, box_size: Vec2) -> Affine {
        let offset = Vec2::new(self.translate.x * box_size.x, self.translate.y * box_size.y);
        Affine::translate(offset)
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotate_deg.to_radians())
    }
}

impl Lerp for FlightPose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: a.scale + (b.scale - a.scale) * t,
            rotate_deg: a.rotate_deg + (b.rotate_deg - a.rotate_deg) * t,
        }
    }
}

/// Where the silhouette is and how visible it is at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SilhouettePose {
    /// Transform relative to the silhouette box.
    pub pose: FlightPose,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

const TAKEOFF: FlightPose = FlightPose::new(-1.2, 0.1, 0.75, -6.0);
const GLIDE: FlightPose = FlightPose::new(-0.06, -0.05, 0.96, 2.0);
const EXIT: FlightPose = FlightPose::new(1.1, -0.18, 1.15, 6.0);

/// The silhouette's path across the frame over one run of the timeline.
#[derive(Clone, Debug)]
pub struct RavenFlight {
    transform: Track<FlightPose>,
    opacity: Track<f64>,
}

impl Default for RavenFlight {
    fn default() -> Self {
        Self::new()
    }
}

impl RavenFlight {
    /// Flight with the stock keyframes and easing.
    pub fn new() -> Self {
        Self {
            transform: Track {
                keys: vec![
                    Keyframe { at: 0.0, value: TAKEOFF },
                    Keyframe { at: 0.52, value: GLIDE },
                    Keyframe { at: 1.0, value: EXIT },
                ],
                ease: Ease::RAVEN_FLIGHT,
            },
            opacity: Track {
                keys: vec![
                    Keyframe { at: 0.0, value: 0.0 },
                    Keyframe { at: 0.2, value: 1.0 },
                    Keyframe { at: 1.0, value: 0.0 },
                ],
                ease: Ease::RAVEN_FLIGHT,
            },
        }
    }

    /// Pose `elapsed` into a flight lasting `duration`.
    pub fn sample(&self, elapsed: Millis, duration: Millis) -> SilhouettePose {
        let p = elapsed.progress_of(duration);
        SilhouettePose {
            pose: self.transform.sample(p),
            opacity: self.opacity.sample(p),
        }
    }

    /// Pose while no run is in progress.
    pub fn hidden(&self) -> SilhouettePose {
        SilhouettePose {
            pose: TAKEOFF,
            opacity: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/flight.rs"]
mod tests;
