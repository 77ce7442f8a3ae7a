//! Pure selection math for the console (Functional Core)
//!
//! No I/O, no mutation, no widget types. The imperative shell (app.rs,
//! events.rs) calls these and owns the state they compute.

/// New selected index after moving up.
pub fn move_selection_up(current: usize) -> usize {
    current.saturating_sub(1)
}

/// New selected index after moving down.
pub fn move_selection_down(current: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        (current + 1).min(max - 1)
    }
}

/// New selected index after page down.
pub fn page_down(current: usize, page_size: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        (current + page_size).min(max - 1)
    }
}

/// New selected index after page up.
pub fn page_up(current: usize, page_size: usize) -> usize {
    current.saturating_sub(page_size)
}

/// Clamp a selection index to a list of `max` rows.
pub fn clamp_selection(selected: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        selected.min(max - 1)
    }
}
