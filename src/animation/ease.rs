/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed endpoints `(0,0)` and `(1,1)`.
    CubicBezier {
        /// First control point x, clamped to `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, clamped to `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// Timing curve of the silhouette flight.
    pub const RAVEN_FLIGHT: Ease = Ease::CubicBezier {
        x1: 0.32,
        y1: 0.01,
        x2: 0.15,
        y2: 0.99,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let x1 = x1.clamp(0.0, 1.0);
                let x2 = x2.clamp(0.0, 1.0);
                let u = solve_bezier_param(t, x1, x2);
                bezier_axis(u, y1, y2)
            }
        }
    }
}

fn bezier_axis(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn bezier_axis_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`.
///
/// With both control x values in `[0, 1]` the x axis is monotonic, so Newton steps are tried first
/// and bisection takes over when the slope flattens out.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-9;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let slope = bezier_axis_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    u = x;
    for _ in 0..64 {
        let cur = bezier_axis(u, x1, x2);
        if (cur - x).abs() < EPS {
            break;
        }
        if cur < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
