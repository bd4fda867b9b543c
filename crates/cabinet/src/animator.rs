//! Animation boundary between the sheet and its host.
//!
//! The sheet never inspects animation internals; it issues the commands below
//! and is told about completion through [`CabinetSheet::settle_finished`].
//! [`FrameAnimator`](crate::frame_animator::FrameAnimator) is a host-ticked
//! reference implementation.
//!
//! [`CabinetSheet::settle_finished`]: crate::sheet::CabinetSheet::settle_finished

/// Spring parameters for the settle animation.
///
/// Mass, stiffness, and damping are fixed per animation; the initial
/// velocity is derived from the release velocity, normalized to progress
/// units per second (1.0 = the remaining travel distance per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub mass: f32,
    pub stiffness: f32,
    /// Damping coefficient (not a ratio). The settle spring is heavily
    /// overdamped, so it glides to the anchor without oscillating.
    pub damping: f32,
    /// Initial velocity in progress units per second, toward the target.
    pub initial_velocity: f32,
}

impl SpringSpec {
    /// The sheet's settle spring.
    pub fn settle() -> Self {
        Self {
            mass: 4.5,
            stiffness: 300.0,
            damping: 300.0,
            initial_velocity: 0.0,
        }
    }

    pub fn with_initial_velocity(mut self, initial_velocity: f32) -> Self {
        self.initial_velocity = initial_velocity;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::settle()
    }
}

/// Commands the sheet issues to its animation collaborator.
///
/// "Primary" is the sheet-offset animation; "feedback" covers the bounded set
/// of auxiliary animations (the dimming fade) that are scrubbed during a drag
/// and played forward or in reverse on settle.
pub trait SheetAnimator {
    /// Stop the in-flight primary animation, abandoning its target.
    fn cancel_primary(&mut self);

    /// Animate the sheet offset from `from` to `to` with the given spring.
    fn animate_primary(&mut self, from: f32, to: f32, spring: SpringSpec);

    /// Create and start the feedback fade. Called only when [`is_empty`]
    /// reports true.
    ///
    /// [`is_empty`]: SheetAnimator::is_empty
    fn start_feedback(&mut self);

    /// Scrub paused feedback animations to `fraction` (clamped by the
    /// implementation).
    fn scrub_feedback(&mut self, fraction: f32);

    /// Set the playback direction of feedback animations. Reversed feedback
    /// runs back toward its starting point.
    fn set_feedback_reversed(&mut self, reversed: bool);

    /// Pause every running animation, keeping current fractions.
    fn pause_all(&mut self);

    /// Resume paused animations toward their (possibly reversed) end.
    fn continue_all(&mut self);

    /// True when no animations are running or paused.
    fn is_empty(&self) -> bool;
}
