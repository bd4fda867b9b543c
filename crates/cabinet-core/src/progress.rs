//! Clamped fractional progress between two reference offsets.

use crate::anchors::SheetAnchors;
use crate::state::SheetState;

/// Fraction of `value` between `start` and `end`, clamped to `[0, 1]`.
///
/// The interval may run in either direction (`start` greater or smaller than
/// `end`). A zero-length interval has no meaningful fraction and returns
/// `0.0` rather than dividing by zero.
pub fn progress(value: f32, start: f32, end: f32) -> f32 {
    if start == end {
        return 0.0;
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

/// The three feedback fractions recomputed on every drag sample.
///
/// These drive ancillary visuals (the dimming fade in particular); reading
/// them never mutates sheet state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragProgress {
    /// Progress of the closed → half-opened leg.
    pub closed_to_half: f32,
    /// Progress of the half-opened → opened leg.
    pub half_to_open: f32,
    /// Progress across the whole closed → opened range.
    pub whole: f32,
}

impl DragProgress {
    /// Computes the fractions for `offset` against the current anchors.
    pub fn at(anchors: &SheetAnchors, offset: f32) -> Self {
        let closed = anchors.offset_for(SheetState::Closed);
        let half = anchors.offset_for(SheetState::HalfOpened);
        let opened = anchors.offset_for(SheetState::Opened);
        Self {
            closed_to_half: progress(offset, closed, half),
            half_to_open: progress(offset, half, opened),
            whole: progress(offset, closed, opened),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_half() {
        assert_eq!(progress(50.0, 0.0, 100.0), 0.5);
    }

    #[test]
    fn clamps_outside_the_interval() {
        assert_eq!(progress(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(progress(110.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn descending_interval_measures_toward_end() {
        // The drag axis runs downward, so most legs are descending.
        assert_eq!(progress(250.0, 300.0, 100.0), 0.25);
        assert_eq!(progress(100.0, 300.0, 100.0), 1.0);
        assert_eq!(progress(300.0, 300.0, 100.0), 0.0);
    }

    #[test]
    fn zero_length_interval_is_zero() {
        assert_eq!(progress(5.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn drag_progress_tracks_all_three_legs() {
        let anchors = SheetAnchors::new(300.0, 100.0, 0.0);
        let p = DragProgress::at(&anchors, 50.0);
        assert_eq!(p.closed_to_half, 1.0);
        assert_eq!(p.half_to_open, 0.5);
        assert!((p.whole - 250.0 / 300.0).abs() < 1e-6);

        let p = DragProgress::at(&anchors, 200.0);
        assert_eq!(p.closed_to_half, 0.5);
        assert_eq!(p.half_to_open, 0.0);
    }
}
