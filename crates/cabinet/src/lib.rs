//! Interactive drag-and-settle machine for the Cabinet bottom sheet.
//!
//! [`CabinetSheet`] consumes a pre-filtered stream of single-axis gesture
//! phase events, tracks the sheet offset live while dragging, and on release
//! resolves a settle target and issues one spring command to a
//! [`SheetAnimator`]. Geometry and the settle decision itself live in
//! `cabinet-core`.

pub mod animator;
pub mod events;
pub mod frame_animator;
pub mod gesture_constants;
pub mod sheet;

pub use animator::{SheetAnimator, SpringSpec};
pub use events::{GestureEvent, GesturePhase};
pub use frame_animator::{FrameAnimator, FrameUpdate};
pub use sheet::{CabinetSheet, DragPhase};

pub mod prelude {
    pub use crate::animator::{SheetAnimator, SpringSpec};
    pub use crate::events::{GestureEvent, GesturePhase};
    pub use crate::frame_animator::{FrameAnimator, FrameUpdate};
    pub use crate::sheet::{CabinetSheet, DragPhase};
    pub use cabinet_core::{
        progress, settle_target, DragProgress, SheetAnchors, SheetState, VELOCITY_DEAD_ZONE,
    };
}
