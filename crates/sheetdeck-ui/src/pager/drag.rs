use super::state::{PagerMode, PagerState};

/// Outcome of a displacement update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragUpdate {
    /// State changed; the host should repaint.
    Moved,
    /// Boundary no-op (or zero displacement): state untouched.
    Ignored,
}

/// Map a horizontal displacement from the press position onto the pager
/// state.
///
/// A rightward drag (`delta_x > 0`) reveals the previous panel: the previous
/// panel slides in as `front`, the current one recedes as `back`, and
/// `progress = delta_x / width` grows from 0. A leftward drag reveals the
/// next panel with the roles flipped, `progress = 1 + delta_x / width`
/// shrinking from 1.
///
/// At the first/last panel the displacement has nowhere to go and is
/// ignored outright; no rubber-banding, no clamped pseudo-transition.
/// Before layout (`width <= 0`) the displacement contributes zero progress
/// instead of dividing by zero.
pub fn apply_displacement(
    state: &mut PagerState,
    delta_x: f32,
    width: f32,
    panel_count: usize,
) -> DragUpdate {
    let normalized = if width > 0.0 {
        delta_x / width
    } else {
        log::warn!("displacement before layout; treating width {width} as zero progress");
        0.0
    };

    if delta_x > 0.0 && state.current_index > 0 {
        state.front_index = state.current_index - 1;
        state.back_index = state.current_index;
        state.progress = normalized;
        state.mode = PagerMode::Dragging;
        DragUpdate::Moved
    } else if delta_x < 0.0 && state.current_index + 1 < panel_count {
        state.front_index = state.current_index;
        state.back_index = state.current_index + 1;
        state.progress = 1.0 + normalized;
        state.mode = PagerMode::Dragging;
        DragUpdate::Moved
    } else {
        DragUpdate::Ignored
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
