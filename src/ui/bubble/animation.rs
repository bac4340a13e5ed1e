// SPDX-License-Identifier: MPL-2.0
//! Opacity fades driven by explicit ticks.
//!
//! A [`Fade`] holds no timer of its own. The owner feeds it the current
//! instant through [`Fade::sample`]; the first sample starts the clock, so a
//! fade scheduled between two frames begins on the next frame.

use crate::config::defaults::DEFAULT_FADE_MS;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Timing curve applied to fade progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Slow start and end.
    #[default]
    EaseInOut,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    EaseOut,
    Linear,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Direction of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeKind {
    /// Towards full opacity.
    In,
    /// Towards full transparency.
    Out,
}

impl FadeKind {
    /// Opacity reached when the fade completes.
    #[must_use]
    pub fn target(self) -> f32 {
        match self {
            FadeKind::In => 1.0,
            FadeKind::Out => 0.0,
        }
    }
}

/// Duration, delay and curve of a fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub fn new(duration: Duration, delay: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay,
            easing,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_FADE_MS),
            delay: Duration::ZERO,
            easing: Easing::default(),
        }
    }
}

/// Opacity value produced by one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub alpha: f32,
    pub finished: bool,
}

/// An in-flight opacity fade.
#[derive(Debug, Clone, PartialEq)]
pub struct Fade {
    kind: FadeKind,
    from: f32,
    timing: Timing,
    started_at: Option<Instant>,
}

impl Fade {
    #[must_use]
    pub fn new(kind: FadeKind, from: f32, timing: Timing) -> Self {
        Self {
            kind,
            from,
            timing,
            started_at: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FadeKind {
        self.kind
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Whether the fade is still waiting out its delay at `now`.
    ///
    /// A fade whose clock has not started yet counts as delayed.
    #[must_use]
    pub fn in_delay(&self, now: Instant) -> bool {
        self.started_at
            .is_none_or(|started_at| now.saturating_duration_since(started_at) < self.timing.delay)
    }

    /// Advances the fade to `now` and returns the opacity at that point.
    pub fn sample(&mut self, now: Instant) -> Sample {
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started_at);

        if elapsed < self.timing.delay {
            return Sample {
                alpha: self.from,
                finished: false,
            };
        }

        let running = elapsed - self.timing.delay;
        let progress = if self.timing.duration.is_zero() {
            1.0
        } else {
            (running.as_secs_f32() / self.timing.duration.as_secs_f32()).min(1.0)
        };

        let target = self.kind.target();
        let eased = self.timing.easing.apply(progress);
        let finished = progress >= 1.0;

        Sample {
            alpha: if finished {
                target
            } else {
                self.from + (target - self.from) * eased
            },
            finished,
        }
    }
}
