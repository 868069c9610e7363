use crate::animation::ease::Ease;
use crate::foundation::error::{RavenError, RavenResult};

/// Values that can be interpolated between two keyframes.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` by `t` (`0` yields `a`, `1` yields `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for kurbo::Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        kurbo::Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// A value pinned at a normalized offset (`0.0` = start, `1.0` = end) of an animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Normalized offset in `[0, 1]`.
    pub at: f64,
    /// Value at `at`.
    pub value: T,
}

/// Keyframed property whose easing restarts on every segment, the way CSS applies
/// `animation-timing-function` between consecutive keyframes.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    /// Keys sorted by offset.
    pub keys: Vec<Keyframe<T>>,
    /// Per-segment easing.
    pub ease: Ease,
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Build a track and check its keys.
    pub fn new(keys: Vec<Keyframe<T>>, ease: Ease) -> RavenResult<Self> {
        let track = Self { keys, ease };
        track.validate()?;
        Ok(track)
    }

    /// Keys must exist, lie in `[0, 1]` and be sorted.
    pub fn validate(&self) -> RavenResult<()> {
        if self.keys.is_empty() {
            return Err(RavenError::validation("track must have at least one key"));
        }
        if !self
            .keys
            .iter()
            .all(|k| k.at.is_finite() && (0.0..=1.0).contains(&k.at))
        {
            return Err(RavenError::validation("key offsets must be within [0, 1]"));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(RavenError::validation("track keys must be sorted by offset"));
        }
        Ok(())
    }

    /// Sample the track at normalized `progress`; values outside the keyed range hold.
    pub fn sample(&self, progress: f64) -> T {
        let p = progress.clamp(0.0, 1.0);
        let idx = self.keys.partition_point(|k| k.at <= p);
        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return b.value.clone();
        }
        let local = self.ease.apply((p - a.at) / span);
        T::lerp(&a.value, &b.value, local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
