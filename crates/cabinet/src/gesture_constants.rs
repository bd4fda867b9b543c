//! Shared interaction constants for the sheet drag.
//!
//! Values are in logical pixels along the drag axis unless noted otherwise.

/// Fraction of a drag delta applied once the prospective offset leaves the
/// sheet's travel bounds.
///
/// Pulling past the fully opened or closed anchor still moves the sheet, but
/// only by a tenth of the finger's travel, so the overshoot reads as elastic
/// resistance and stays small enough to settle back quickly.
pub const OVERDRAG_RESISTANCE: f32 = 0.1;

/// Cap on the normalized initial velocity handed to the settle spring.
///
/// The spring's initial velocity is expressed in progress units per second
/// (release velocity divided by the remaining travel distance). Short
/// remaining distances can blow the ratio up; anything above this cap just
/// makes the spring overshoot harshly.
pub const MAX_INITIAL_SPRING_VELOCITY: f32 = 18.0;

/// Duration of the auxiliary dimming fade in milliseconds.
pub const FEEDBACK_FADE_MS: u64 = 300;
