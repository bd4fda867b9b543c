//! Named resting positions of the sheet.

/// Resting position of the sheet along the drag axis.
///
/// Ordered by offset: `Opened` sits at the smallest offset (most visible),
/// `Closed` at the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetState {
    Closed,
    HalfOpened,
    Opened,
}

impl SheetState {
    /// All states, ordered from most to least visible.
    pub const ALL: [SheetState; 3] = [
        SheetState::Opened,
        SheetState::HalfOpened,
        SheetState::Closed,
    ];
}
