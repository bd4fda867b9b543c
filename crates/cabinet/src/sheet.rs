//! The drag-and-settle state machine.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use cabinet_core::{settle_target, DragProgress, SheetAnchors, SheetState};

use crate::animator::{SheetAnimator, SpringSpec};
use crate::events::{GestureEvent, GesturePhase};
use crate::gesture_constants::{MAX_INITIAL_SPRING_VELOCITY, OVERDRAG_RESISTANCE};

/// Phase of the interaction machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture and no settle animation.
    Idle,
    /// A gesture is active; the offset tracks the finger.
    Dragging,
    /// The gesture ended; a spring animation is running toward the committed
    /// state's anchor.
    Settling,
}

/// Ephemeral bookkeeping for one gesture, created on begin and consumed on
/// the terminal phase.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Offset at the moment the sheet was grabbed.
    start_offset: f32,
    /// Most recent velocity sample; stands in for the terminal velocity when
    /// the gesture is cancelled rather than ended.
    last_velocity: f32,
}

/// The sheet's interactive state machine.
///
/// Owns the authoritative offset and settled state. Consumes gesture phase
/// events, updates the offset live while dragging, and on release resolves a
/// settle target and issues one spring command to the animator. The host
/// reads [`offset`](CabinetSheet::offset) after each event to position the
/// sheet, mirrors the animator's per-frame offset back through
/// [`sync_offset`](CabinetSheet::sync_offset) while a settle is in flight,
/// and calls [`settle_finished`](CabinetSheet::settle_finished) when the
/// animator reports completion.
///
/// The settled state is committed optimistically at end-of-gesture: it names
/// the intended destination, not the animation's completion.
pub struct CabinetSheet {
    anchors: SheetAnchors,
    animator: Rc<RefCell<dyn SheetAnimator>>,
    state: SheetState,
    offset: f32,
    phase: DragPhase,
    session: Option<DragSession>,
}

impl CabinetSheet {
    /// Creates a sheet pinned to `initial_state` inside a container of the
    /// given height.
    ///
    /// # Panics
    ///
    /// Panics when the container is too short to hold ordered anchors (see
    /// [`SheetAnchors::for_container_height`]).
    pub fn new(
        container_height: f32,
        initial_state: SheetState,
        animator: Rc<RefCell<dyn SheetAnimator>>,
    ) -> Self {
        let anchors = SheetAnchors::for_container_height(container_height);
        let offset = anchors.offset_for(initial_state);
        Self {
            anchors,
            animator,
            state: initial_state,
            offset,
            phase: DragPhase::Idle,
            session: None,
        }
    }

    /// Rebuilds the anchors for a new container height.
    ///
    /// While idle the offset is re-pinned to the settled state's anchor so
    /// the sheet tracks the resize. While settling, the in-flight spring is
    /// re-aimed at the committed state's relocated anchor so it does not come
    /// to rest on a stale one. Mid-gesture the offset is left alone; the
    /// release resolves against the new anchors.
    pub fn set_container_height(&mut self, height: f32) {
        self.anchors = SheetAnchors::for_container_height(height);
        match self.phase {
            DragPhase::Idle => self.offset = self.anchors.offset_for(self.state),
            DragPhase::Settling => {
                let target_offset = self.anchors.offset_for(self.state);
                self.animator.borrow_mut().animate_primary(
                    self.offset,
                    target_offset,
                    SpringSpec::settle(),
                );
            }
            DragPhase::Dragging => {}
        }
    }

    /// Adopts the animator's reported offset for the current frame.
    ///
    /// Only meaningful while settling, where the spring owns the sheet's
    /// visible position; syncing keeps the machine's offset current so a grab
    /// mid-flight resumes the drag from where the sheet actually is. In the
    /// other phases the finger or the anchor is authoritative and the call is
    /// ignored.
    pub fn sync_offset(&mut self, offset: f32) {
        if self.phase == DragPhase::Settling {
            self.offset = offset;
        }
    }

    /// Feeds one gesture sample through the machine.
    ///
    /// Returns the feedback fractions for phases that moved the offset
    /// (`Began` applies its translation like a move). Samples that are
    /// invalid for the current phase are ignored and return `None`.
    pub fn handle_event(&mut self, event: GestureEvent) -> Option<DragProgress> {
        match event.phase {
            GesturePhase::Began => self.on_began(event),
            GesturePhase::Moved => self.on_moved(event),
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                self.on_terminal(event)
            }
        }
    }

    /// Signals that the settle animation reached its target. Ignored unless
    /// the machine is settling.
    pub fn settle_finished(&mut self) {
        if self.phase != DragPhase::Settling {
            return;
        }
        self.offset = self.anchors.offset_for(self.state);
        self.phase = DragPhase::Idle;
        debug!("settled at {:?} (offset {})", self.state, self.offset);
    }

    /// The authoritative "where is the sheet" value. Reflects the intended
    /// destination while settling.
    pub fn current_state(&self) -> SheetState {
        self.state
    }

    /// Current offset along the drag axis.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn anchors(&self) -> &SheetAnchors {
        &self.anchors
    }

    fn on_began(&mut self, event: GestureEvent) -> Option<DragProgress> {
        if self.phase == DragPhase::Dragging {
            trace!("ignoring Began while already dragging");
            return None;
        }

        // Grabbing a settling sheet abandons the in-flight spring; the
        // feedback fade is created on a fresh grab or re-aimed forward on a
        // grab mid-flight, then everything holds for the drag.
        {
            let mut animator = self.animator.borrow_mut();
            animator.cancel_primary();
            if animator.is_empty() {
                animator.start_feedback();
            } else {
                animator.set_feedback_reversed(false);
            }
            animator.pause_all();
        }

        self.session = Some(DragSession {
            start_offset: self.offset,
            last_velocity: event.velocity,
        });
        self.phase = DragPhase::Dragging;

        // The begin sample carries its own translation.
        self.apply_move(event)
    }

    fn on_moved(&mut self, event: GestureEvent) -> Option<DragProgress> {
        if self.phase != DragPhase::Dragging {
            trace!("ignoring Moved outside of a drag");
            return None;
        }
        self.apply_move(event)
    }

    fn apply_move(&mut self, event: GestureEvent) -> Option<DragProgress> {
        let prospective = self.offset + event.translation;
        if self.anchors.contains(prospective) {
            self.offset = prospective;
        } else {
            // Soft resistance past the travel bounds.
            self.offset += event.translation * OVERDRAG_RESISTANCE;
        }

        if let Some(session) = self.session.as_mut() {
            session.last_velocity = event.velocity;
        }

        let progress = DragProgress::at(&self.anchors, self.offset);
        trace!(
            "drag offset {} progress: half->open {} closed->half {} whole {}",
            self.offset,
            progress.half_to_open,
            progress.closed_to_half,
            progress.whole
        );
        self.animator
            .borrow_mut()
            .scrub_feedback(progress.half_to_open);

        Some(progress)
    }

    fn on_terminal(&mut self, event: GestureEvent) -> Option<DragProgress> {
        if self.phase != DragPhase::Dragging {
            trace!("ignoring terminal event outside of a drag");
            return None;
        }

        // A cancelled or failed gesture settles exactly like an ended one,
        // but carries no velocity of its own; reuse the last drag sample.
        let velocity = match event.phase {
            GesturePhase::Ended => event.velocity,
            _ => self.session.map_or(0.0, |s| s.last_velocity),
        };

        let target = settle_target(&self.anchors, self.offset, velocity);
        let target_offset = self.anchors.offset_for(target);
        let spring = SpringSpec::settle()
            .with_initial_velocity(initial_spring_velocity(velocity, target_offset - self.offset));

        let start_offset = self.session.map_or(self.offset, |s| s.start_offset);
        debug!(
            "drag {} -> {} (velocity {}): settling {:?} -> {:?}",
            start_offset, self.offset, velocity, self.state, target
        );

        {
            let mut animator = self.animator.borrow_mut();
            animator.animate_primary(self.offset, target_offset, spring);
            animator.set_feedback_reversed(feedback_reversed(self.state, target));
            animator.continue_all();
        }

        // Optimistic commit: the state names the destination immediately,
        // before the spring finishes.
        self.state = target;
        self.phase = DragPhase::Settling;
        self.session = None;
        None
    }
}

/// Normalized spring initial velocity: release velocity over the remaining
/// travel distance, capped, with non-finite ratios sanitized to zero (the
/// release offset can coincide with the target anchor).
fn initial_spring_velocity(velocity: f32, distance: f32) -> f32 {
    let ratio = (velocity / distance).abs();
    if ratio.is_finite() {
        ratio.min(MAX_INITIAL_SPRING_VELOCITY)
    } else {
        0.0
    }
}

/// Playback direction for the feedback fade, per (settled state, target)
/// pair. Forward when the sheet ends up fully opened, or stays half-opened;
/// reversed for every transition that ends at or moves toward the bottom.
fn feedback_reversed(from: SheetState, to: SheetState) -> bool {
    use SheetState::{Closed, HalfOpened, Opened};
    match (from, to) {
        (Closed, Closed)
        | (Opened, Closed)
        | (Opened, HalfOpened)
        | (HalfOpened, Closed)
        | (Closed, HalfOpened) => true,
        (HalfOpened, HalfOpened)
        | (Opened, Opened)
        | (Closed, Opened)
        | (HalfOpened, Opened) => false,
    }
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
