//! Core geometry for the Cabinet bottom sheet: state anchors, drag progress,
//! and the velocity-aware settle-target decision.
//!
//! Everything in this crate is pure. The stateful drag machine and the
//! animation boundary live in the `cabinet` crate.

pub mod anchors;
pub mod progress;
pub mod state;
pub mod target;

pub use anchors::SheetAnchors;
pub use progress::{progress, DragProgress};
pub use state::SheetState;
pub use target::{settle_target, VELOCITY_DEAD_ZONE};
