//! Per-state resting offsets ("anchors") of the sheet.
//!
//! Anchors are rebuilt from scratch whenever the container's extent changes;
//! they are never mutated incrementally.

use crate::state::SheetState;

/// Distance from the container's bottom edge to the closed sheet's top, in
/// logical pixels. Keeps a grab handle visible when the sheet is closed.
pub const CLOSED_BOTTOM_INSET: f32 = 88.0;

/// Offset of the fully opened sheet from the container's top edge.
pub const OPENED_TOP_OFFSET: f32 = 44.0;

/// Distance from the container's bottom edge to the half-opened sheet's top.
pub const HALF_OPENED_BOTTOM_INSET: f32 = 240.0;

/// Resting offset for each [`SheetState`] along the drag axis.
///
/// Invariant: `opened < half_opened < closed` (smaller offset = more
/// visible). The invariant is checked at construction; violating it is a
/// programmer error, not a runtime condition, so construction panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetAnchors {
    closed: f32,
    half_opened: f32,
    opened: f32,
}

impl SheetAnchors {
    /// Creates anchors from explicit offsets.
    ///
    /// # Panics
    ///
    /// Panics unless `opened < half_opened < closed`.
    pub fn new(closed: f32, half_opened: f32, opened: f32) -> Self {
        assert!(
            opened < half_opened && half_opened < closed,
            "anchor offsets out of order: opened={opened}, half_opened={half_opened}, closed={closed}"
        );
        Self {
            closed,
            half_opened,
            opened,
        }
    }

    /// Derives anchors from the container height using the fixed layout
    /// insets.
    ///
    /// # Panics
    ///
    /// Panics when the container is too short for the three anchors to stay
    /// ordered (`height` must exceed `OPENED_TOP_OFFSET +
    /// HALF_OPENED_BOTTOM_INSET`).
    pub fn for_container_height(height: f32) -> Self {
        Self::new(
            height - CLOSED_BOTTOM_INSET,
            height - HALF_OPENED_BOTTOM_INSET,
            OPENED_TOP_OFFSET,
        )
    }

    /// Resting offset for `state`. Total by construction.
    pub fn offset_for(&self, state: SheetState) -> f32 {
        match state {
            SheetState::Closed => self.closed,
            SheetState::HalfOpened => self.half_opened,
            SheetState::Opened => self.opened,
        }
    }

    /// Smallest reachable offset (fully opened).
    pub fn min_offset(&self) -> f32 {
        self.opened
    }

    /// Largest reachable offset (closed).
    pub fn max_offset(&self) -> f32 {
        self.closed
    }

    /// Whether `offset` lies within the sheet's travel bounds.
    pub fn contains(&self, offset: f32) -> bool {
        (self.min_offset()..=self.max_offset()).contains(&offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_height_yields_fixed_inset_anchors() {
        let anchors = SheetAnchors::for_container_height(568.0);
        assert_eq!(anchors.offset_for(SheetState::Closed), 480.0);
        assert_eq!(anchors.offset_for(SheetState::HalfOpened), 328.0);
        assert_eq!(anchors.offset_for(SheetState::Opened), 44.0);
    }

    #[test]
    fn travel_bounds_are_the_outer_anchors() {
        let anchors = SheetAnchors::for_container_height(568.0);
        assert_eq!(anchors.min_offset(), 44.0);
        assert_eq!(anchors.max_offset(), 480.0);
    }

    #[test]
    fn contains_is_inclusive_at_both_bounds() {
        let anchors = SheetAnchors::new(300.0, 100.0, 0.0);
        assert!(anchors.contains(0.0));
        assert!(anchors.contains(300.0));
        assert!(!anchors.contains(-0.1));
        assert!(!anchors.contains(300.1));
    }

    #[test]
    #[should_panic(expected = "anchor offsets out of order")]
    fn closed_below_half_opened_panics() {
        let _ = SheetAnchors::new(100.0, 100.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "anchor offsets out of order")]
    fn half_opened_below_opened_panics() {
        let _ = SheetAnchors::new(300.0, 10.0, 20.0);
    }

    #[test]
    #[should_panic(expected = "anchor offsets out of order")]
    fn too_short_container_panics() {
        let _ = SheetAnchors::for_container_height(200.0);
    }
}
