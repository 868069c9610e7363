use crate::timeline::controller::{AnimationPhase, TimelineState};

/// Scale and opacity of one glow layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlowLevel {
    /// Scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl GlowLevel {
    const fn new(scale: f64, opacity: f64) -> Self {
        Self { scale, opacity }
    }
}

/// Portal aura levels for the current timeline state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AuraLevels {
    /// Opacity of the whole aura layer; zero outside a run.
    pub layer_opacity: f64,
    /// Wide gradient wake.
    pub wake: GlowLevel,
    /// Concentrated core flash.
    pub core: GlowLevel,
    /// Energy pulse animation active.
    pub pulsing: bool,
}

impl AuraLevels {
    /// Levels the aura shows for `state`.
    pub fn for_state(state: TimelineState) -> Self {
        let wake = match state.phase {
            AnimationPhase::Idle => GlowLevel::new(1.0, 1.0),
            AnimationPhase::Charge => GlowLevel::new(0.95, 0.7),
            AnimationPhase::Burst => GlowLevel::new(1.1, 1.0),
        };
        let core = match state.phase {
            AnimationPhase::Burst => GlowLevel::new(1.25, 0.7),
            _ => GlowLevel::new(1.0, 0.0),
        };
        Self {
            layer_opacity: if state.is_animating { 1.0 } else { 0.0 },
            wake,
            core,
            pulsing: state.phase != AnimationPhase::Idle,
        }
    }
}
