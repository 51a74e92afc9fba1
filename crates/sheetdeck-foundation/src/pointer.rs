use sheetdeck_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer lifecycle event.
///
/// The pager only ever looks at one pointer, so there is no pointer id here;
/// multi-touch streams are the host's problem to collapse before dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub position: Point,
    pub timestamp_millis: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_millis: u64) -> Self {
        Self {
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            position,
            timestamp_millis,
        }
    }

    pub fn down(x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), timestamp_millis)
    }

    pub fn moved(x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), timestamp_millis)
    }

    pub fn up(x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), timestamp_millis)
    }

    pub fn cancel(x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), timestamp_millis)
    }

    /// Copy of this event rewritten as a Cancel.
    ///
    /// Used when a container claims a stream mid-gesture: the child that saw
    /// the earlier events must observe a synthetic cancel rather than a
    /// truncated sequence.
    pub fn as_cancel(&self) -> Self {
        Self::new(PointerEventKind::Cancel, self.position, self.timestamp_millis)
    }
}
