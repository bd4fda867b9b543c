//! Host-ticked reference implementation of [`SheetAnimator`].
//!
//! The host drives it from its frame loop: call [`FrameAnimator::tick`] with
//! the elapsed seconds, push the returned offset to the layout and back into
//! [`CabinetSheet::sync_offset`], feed the dimming fraction to the backdrop,
//! and call [`CabinetSheet::settle_finished`] once `primary_finished` is
//! reported.
//!
//! The primary spring integrates a damped harmonic oscillator in progress
//! space with semi-implicit Euler and a fixed sub-step for stability.
//!
//! [`CabinetSheet::sync_offset`]: crate::sheet::CabinetSheet::sync_offset
//! [`CabinetSheet::settle_finished`]: crate::sheet::CabinetSheet::settle_finished

use smallvec::SmallVec;

use crate::animator::{SheetAnimator, SpringSpec};
use crate::gesture_constants::FEEDBACK_FADE_MS;

/// Integration sub-step in seconds (~one 60 fps frame).
const SUBSTEP: f32 = 0.016;

/// Spring rest thresholds: progress velocity (units/sec) and distance to the
/// target in logical pixels.
const REST_VELOCITY: f32 = 0.05;
const REST_DISTANCE: f32 = 0.5;

/// Primary offset animation.
struct SpringAnimation {
    start: f32,
    target: f32,
    current: f32,
    /// Velocity in progress units per second.
    velocity: f32,
    spec: SpringSpec,
}

impl SpringAnimation {
    fn new(from: f32, to: f32, spec: SpringSpec) -> Self {
        Self {
            start: from,
            target: to,
            current: from,
            velocity: spec.initial_velocity,
            spec,
        }
    }

    /// Advances the spring by `dt` seconds. Returns true once at rest.
    fn step(&mut self, dt: f32) -> bool {
        let span = self.target - self.start;
        if span.abs() < f32::EPSILON {
            self.current = self.target;
            return true;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let step = SUBSTEP.min(remaining);
            let progress = (self.current - self.start) / span;
            // The target sits at progress 1.0.
            let displacement = progress - 1.0;
            let accel = (-self.spec.stiffness * displacement - self.spec.damping * self.velocity)
                / self.spec.mass;
            self.velocity += accel * step;
            let next = progress + self.velocity * step;
            self.current = self.start + span * next.clamp(0.0, 2.0);
            remaining -= step;
        }

        let at_rest = self.velocity.abs() < REST_VELOCITY
            && (self.current - self.target).abs() < REST_DISTANCE;
        if at_rest {
            self.current = self.target;
        }
        at_rest
    }
}

/// Auxiliary fade (the backdrop dimming), tracked as a bare fraction.
struct FeedbackAnimation {
    fraction: f32,
    reversed: bool,
}

impl FeedbackAnimation {
    /// Advances by `dt` seconds toward the direction's end. Returns true when
    /// the fade has completed at either end.
    fn advance(&mut self, dt: f32) -> bool {
        let rate = 1_000.0 / FEEDBACK_FADE_MS as f32;
        if self.reversed {
            self.fraction = (self.fraction - rate * dt).max(0.0);
            self.fraction == 0.0
        } else {
            self.fraction = (self.fraction + rate * dt).min(1.0);
            self.fraction == 1.0
        }
    }
}

/// What changed during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// New sheet offset to assign, when the primary animation advanced.
    pub offset: Option<f32>,
    /// Current dimming fraction (0 = clear, 1 = fully dimmed).
    pub dimming: f32,
    /// True on the frame the primary animation came to rest.
    pub primary_finished: bool,
}

/// Frame-driven animator holding at most one primary spring and a bounded
/// set of feedback fades.
pub struct FrameAnimator {
    primary: Option<SpringAnimation>,
    feedback: SmallVec<[FeedbackAnimation; 1]>,
    /// Dimming value left behind by the last completed fade. A discarded
    /// animation keeps its end value applied, it just stops running.
    resting_dimming: f32,
    paused: bool,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self {
            primary: None,
            feedback: SmallVec::new(),
            resting_dimming: 0.0,
            paused: false,
        }
    }

    /// Advances all animations by `dt` seconds. Paused animators keep their
    /// fractions and report no movement.
    pub fn tick(&mut self, dt: f32) -> FrameUpdate {
        if self.paused {
            return FrameUpdate {
                offset: None,
                dimming: self.dimming_fraction(),
                primary_finished: false,
            };
        }

        let mut offset = None;
        let mut primary_finished = false;
        if let Some(spring) = self.primary.as_mut() {
            let finished = spring.step(dt);
            offset = Some(spring.current);
            if finished {
                self.primary = None;
                primary_finished = true;
            }
        }

        let mut resting = self.resting_dimming;
        // smallvec's retain hands out &mut, so the fade can advance in place.
        self.feedback.retain(|fade| {
            if fade.advance(dt) {
                resting = fade.fraction;
                false
            } else {
                true
            }
        });
        self.resting_dimming = resting;

        FrameUpdate {
            offset,
            dimming: self.dimming_fraction(),
            primary_finished,
        }
    }

    /// Current dimming fraction. Falls back to the value left by the last
    /// completed fade when none is active.
    pub fn dimming_fraction(&self) -> f32 {
        if self.feedback.is_empty() {
            self.resting_dimming
        } else {
            self.feedback
                .iter()
                .map(|fade| fade.fraction)
                .fold(0.0, f32::max)
        }
    }

    /// Target of the in-flight primary animation, if any.
    pub fn primary_target(&self) -> Option<f32> {
        self.primary.as_ref().map(|spring| spring.target)
    }
}

impl Default for FrameAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetAnimator for FrameAnimator {
    fn cancel_primary(&mut self) {
        self.primary = None;
    }

    fn animate_primary(&mut self, from: f32, to: f32, spring: SpringSpec) {
        self.primary = Some(SpringAnimation::new(from, to, spring));
    }

    fn start_feedback(&mut self) {
        if self.feedback.is_empty() {
            self.feedback.push(FeedbackAnimation {
                fraction: 0.0,
                reversed: false,
            });
        } else {
            self.set_feedback_reversed(false);
        }
    }

    fn scrub_feedback(&mut self, fraction: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        for fade in &mut self.feedback {
            fade.fraction = fraction;
        }
    }

    fn set_feedback_reversed(&mut self, reversed: bool) {
        for fade in &mut self.feedback {
            fade.reversed = reversed;
        }
    }

    fn pause_all(&mut self) {
        self.paused = true;
    }

    fn continue_all(&mut self) {
        self.paused = false;
    }

    fn is_empty(&self) -> bool {
        self.primary.is_none() && self.feedback.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/frame_animator_tests.rs"]
mod tests;
