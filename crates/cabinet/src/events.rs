//! Gesture phase events consumed by the sheet.
//!
//! The sheet assumes a single linear drag axis and a pre-filtered event
//! stream: one `Began`, zero or more `Moved`, then exactly one terminal
//! phase. Cancellation and failure carry the same semantics as a normal end.

/// Phase of a drag gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Moved,
    Ended,
    Cancelled,
    Failed,
}

/// One gesture sample: phase, translation delta since the previous sample,
/// and the current velocity estimate, all along the drag axis.
///
/// Positive values point toward `Closed` (downward travel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    /// Translation since the previous sample, in logical pixels.
    pub translation: f32,
    /// Velocity estimate in logical pixels per second.
    pub velocity: f32,
}

impl GestureEvent {
    pub fn began() -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: 0.0,
            velocity: 0.0,
        }
    }

    pub fn moved(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Moved,
            translation,
            velocity: 0.0,
        }
    }

    pub fn moved_with_velocity(translation: f32, velocity: f32) -> Self {
        Self {
            phase: GesturePhase::Moved,
            translation,
            velocity,
        }
    }

    pub fn ended(velocity: f32) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation: 0.0,
            velocity,
        }
    }

    /// Cancellation carries no velocity of its own; the sheet settles using
    /// the last move sample.
    pub fn cancelled() -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            translation: 0.0,
            velocity: 0.0,
        }
    }

    pub fn failed() -> Self {
        Self {
            phase: GesturePhase::Failed,
            translation: 0.0,
            velocity: 0.0,
        }
    }
}
