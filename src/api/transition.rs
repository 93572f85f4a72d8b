use serde::{Deserialize, Serialize};

/// The animated attributes of one mark, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkAttrs {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl MarkAttrs {
    pub const ZERO: Self = Self {
        cx: 0.0,
        cy: 0.0,
        radius: 0.0,
    };

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            cx: self.cx + (other.cx - self.cx) * t,
            cy: self.cy + (other.cy - self.cy) * t,
            radius: self.radius + (other.radius - self.radius) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    InOutCubic,
}

impl Ease {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Tuning for mark attribute animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Animation length; non-positive durations settle immediately.
    pub duration_seconds: f64,
    pub ease: Ease,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.1,
            ease: Ease::InOutCubic,
        }
    }
}

/// One in-flight interpolation of mark attributes.
///
/// Transitions are plain data advanced by the host clock; a new render may
/// replace a transition before it settles, re-anchoring at the current
/// interpolated attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: MarkAttrs,
    to: MarkAttrs,
    ease: Ease,
    duration_seconds: f64,
    elapsed_seconds: f64,
}

impl Transition {
    #[must_use]
    pub fn new(from: MarkAttrs, to: MarkAttrs, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            ease: config.ease,
            duration_seconds: config.duration_seconds,
            elapsed_seconds: 0.0,
        }
    }

    pub fn advance(&mut self, delta_seconds: f64) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        self.elapsed_seconds = (self.elapsed_seconds + delta_seconds).min(self.duration_seconds);
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_seconds <= 0.0 {
            return 1.0;
        }
        (self.elapsed_seconds / self.duration_seconds).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn current(&self) -> MarkAttrs {
        self.from.lerp(self.to, self.ease.apply(self.progress()))
    }

    #[must_use]
    pub fn target(&self) -> MarkAttrs {
        self.to
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.elapsed_seconds >= self.duration_seconds
    }
}
