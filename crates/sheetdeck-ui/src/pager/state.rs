#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerMode {
    Idle,
    Dragging,
    Animating,
}

/// The single mutable state record of a pager.
///
/// `front_index`/`back_index`/`progress` are only meaningful while
/// `mode != Idle`; when a transition ends they are reset to the settled
/// index / 0.0 rather than left dangling. `current_index` is the only field
/// other components should read while idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerState {
    /// The settled, fully visible panel when idle.
    pub current_index: usize,
    /// Panel sliding toward full visibility as progress approaches 1.
    pub front_index: usize,
    /// Panel receding underneath as progress approaches 1.
    pub back_index: usize,
    /// Normalized transition position: 0 = back settled, 1 = front settled.
    pub progress: f32,
    pub mode: PagerMode,
}

impl PagerState {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            front_index: 0,
            back_index: 0,
            progress: 0.0,
            mode: PagerMode::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.mode == PagerMode::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == PagerMode::Dragging
    }

    pub fn is_animating(&self) -> bool {
        self.mode == PagerMode::Animating
    }

    /// Drop the transition fields back to their inactive values and return
    /// to idle. Does not touch `current_index`.
    pub(crate) fn reset_transition(&mut self) {
        self.front_index = self.current_index;
        self.back_index = self.current_index;
        self.progress = 0.0;
        self.mode = PagerMode::Idle;
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new()
    }
}
