//! Settle-target decision for the end of a drag.

use crate::anchors::SheetAnchors;
use crate::state::SheetState;

/// Velocity magnitude (units/second) below which a release carries no
/// directional intent and the target is picked by proximity instead.
///
/// The bound is inclusive: a release at exactly the threshold still falls in
/// the dead zone.
pub const VELOCITY_DEAD_ZONE: f32 = 20.0;

/// Decides which state a drag released at `offset` with `velocity` settles
/// into.
///
/// Positive velocity moves toward `Closed`, negative toward `Opened`. The
/// decision table:
///
/// - at or past an outer anchor, the outer state wins regardless of velocity;
/// - between two anchors, a velocity beyond the dead zone picks the state it
///   points at;
/// - inside the dead zone, the nearer anchor wins, measured against the
///   midpoint of the interval (exactly on the midpoint resolves to the more
///   open state).
///
/// The partition over `offset` is exhaustive given ordered anchors, so every
/// `(offset, velocity)` pair resolves to exactly one state.
pub fn settle_target(anchors: &SheetAnchors, offset: f32, velocity: f32) -> SheetState {
    let opened = anchors.offset_for(SheetState::Opened);
    let half = anchors.offset_for(SheetState::HalfOpened);
    let closed = anchors.offset_for(SheetState::Closed);

    if offset <= opened {
        SheetState::Opened
    } else if offset < half {
        resolve_between(offset, velocity, opened, half, SheetState::Opened, SheetState::HalfOpened)
    } else if offset < closed {
        resolve_between(offset, velocity, half, closed, SheetState::HalfOpened, SheetState::Closed)
    } else {
        SheetState::Closed
    }
}

/// Picks between the states bounding the `[lo, hi]` interval.
fn resolve_between(
    offset: f32,
    velocity: f32,
    lo: f32,
    hi: f32,
    lo_state: SheetState,
    hi_state: SheetState,
) -> SheetState {
    if velocity.abs() <= VELOCITY_DEAD_ZONE {
        let midpoint = (lo + hi) / 2.0;
        if offset > midpoint {
            hi_state
        } else {
            lo_state
        }
    } else if velocity < 0.0 {
        lo_state
    } else {
        hi_state
    }
}

#[cfg(test)]
#[path = "tests/target_tests.rs"]
mod tests;
