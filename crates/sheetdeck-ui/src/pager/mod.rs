//! Pager state and the pure transition functions over it.

pub mod animator;
pub mod commit;
pub mod drag;
pub mod state;
