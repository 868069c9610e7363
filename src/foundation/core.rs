use std::ops::{Add, Sub};

pub use kurbo::{Affine, Vec2};

/// Monotonic time in milliseconds on the transition's clock.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Saturating difference `self - earlier`.
    pub fn since(self, earlier: Self) -> Self {
        Self(self.0.saturating_sub(earlier.0))
    }

    /// Smallest multiple of `interval` strictly greater than `self`.
    ///
    /// A zero interval returns `self` unchanged.
    pub fn next_multiple_of(self, interval: Self) -> Self {
        if interval.0 == 0 {
            return self;
        }
        Self((self.0 / interval.0 + 1).saturating_mul(interval.0))
    }

    /// Fraction of `total` covered by `self`, clamped to `[0, 1]`.
    pub fn progress_of(self, total: Self) -> f64 {
        if total.0 == 0 {
            return 1.0;
        }
        (self.0 as f64 / total.0 as f64).clamp(0.0, 1.0)
    }
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Millis {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.since(rhs)
    }
}

/// Static image shown for a slot until the user substitutes one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackImage {
    /// Asset path served alongside the page.
    pub src: &'static str,
    /// Accessible description.
    pub alt: &'static str,
}

/// Fallback for [`Slot::Source`].
pub const FALLBACK_SOURCE: FallbackImage = FallbackImage {
    src: "/images/source-scene.svg",
    alt: "Original frame",
};

/// Fallback for [`Slot::Target`].
pub const FALLBACK_TARGET: FallbackImage = FallbackImage {
    src: "/images/target-scene.svg",
    alt: "Transformed frame",
};

/// One of the two image positions of the transition.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Still shown before the burst.
    Source,
    /// Still revealed by the burst.
    Target,
}

impl Slot {
    /// Both slots in display order.
    pub const ALL: [Slot; 2] = [Slot::Source, Slot::Target];

    /// Default asset for this slot.
    pub fn fallback(self) -> FallbackImage {
        match self {
            Self::Source => FALLBACK_SOURCE,
            Self::Target => FALLBACK_TARGET,
        }
    }

    /// Label of the control that opens the file picker for this slot.
    pub fn picker_label(self) -> &'static str {
        match self {
            Self::Source => "Set Source Image",
            Self::Target => "Set Target Image",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
