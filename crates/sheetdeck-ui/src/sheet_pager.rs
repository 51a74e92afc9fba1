use std::cell::RefCell;
use std::rc::Rc;

use sheetdeck_animation::{AnimationSpec, Easing};
use sheetdeck_core::FrameClock;
use sheetdeck_foundation::{GestureRecognizer, PointerEvent, PointerEventKind, VelocityTracker};
use sheetdeck_graphics::Size;

use crate::pager::animator::{finalize_settle, TransitionAnimator};
use crate::pager::commit::decide;
use crate::pager::drag::{apply_displacement, DragUpdate};
use crate::pager::state::{PagerMode, PagerState};
use crate::render::RenderScene;
use crate::style::SheetStyle;

/// The settle tween: half a second, decelerating, the velocity high at the
/// start and approaching zero at the end.
pub const SETTLE_SPEC: AnimationSpec = AnimationSpec::tween(500, Easing::Decelerate);

/// Receives events the pager passes through to a panel's own content.
pub type ChildSink = Rc<dyn Fn(usize, PointerEvent)>;
/// Invoked synchronously whenever the pager wants to be repainted.
pub type RepaintRequest = Rc<dyn Fn()>;
/// Tells the host to stop ancestors from re-claiming the current stream.
pub type InterceptGate = Rc<dyn Fn(bool)>;

/// Horizontally-paged sheet container.
///
/// Holds `panel_count` full-size panels of which exactly one is frontmost.
/// Raw pointer events go through [`dispatch_pointer_event`]: until the
/// stream is claimed they are forwarded to the frontmost panel, and on the
/// move that claims it the panel sees one synthetic cancel. While claimed,
/// moves track the finger as a normalized transition progress; release runs
/// the velocity/position commit rule and an eased settle animation on the
/// host-pumped [`FrameClock`].
///
/// Single-threaded by construction: everything happens on the host's event
/// dispatch thread, and the `Animating` mode guard is the only mutual
/// exclusion the design needs.
///
/// [`dispatch_pointer_event`]: SheetPager::dispatch_pointer_event
#[derive(Clone)]
pub struct SheetPager {
    inner: Rc<RefCell<PagerInner>>,
}

struct PagerInner {
    style: SheetStyle,
    clock: FrameClock,
    panel_count: usize,
    size: Size,
    state: PagerState,
    recognizer: GestureRecognizer,
    velocity: VelocityTracker,
    animator: TransitionAnimator,
    child_sink: Option<ChildSink>,
    on_repaint: Option<RepaintRequest>,
    on_disallow_intercept: Option<InterceptGate>,
}

/// Side effects collected under the state borrow and run after it, so a
/// callback re-entering the pager never observes a held `RefCell`.
#[derive(Default)]
struct Effects {
    disallow_intercept: bool,
    synthetic_cancel: Option<(usize, PointerEvent)>,
    forward: Option<(usize, PointerEvent)>,
    start_settle: bool,
    repaint: bool,
}

impl SheetPager {
    pub fn new(panel_count: usize, style: SheetStyle, clock: FrameClock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PagerInner {
                recognizer: GestureRecognizer::new(style.touch_slop),
                style,
                clock,
                panel_count,
                size: Size::ZERO,
                state: PagerState::new(),
                velocity: VelocityTracker::new(),
                animator: TransitionAnimator::new(),
                child_sink: None,
                on_repaint: None,
                on_disallow_intercept: None,
            })),
        }
    }

    /// Report the laid-out container size. Until this is called with a
    /// positive width, drags produce zero progress.
    pub fn set_size(&self, size: Size) {
        self.inner.borrow_mut().size = size;
    }

    pub fn set_child_sink(&self, sink: impl Fn(usize, PointerEvent) + 'static) {
        self.inner.borrow_mut().child_sink = Some(Rc::new(sink));
    }

    pub fn set_on_repaint(&self, callback: impl Fn() + 'static) {
        self.inner.borrow_mut().on_repaint = Some(Rc::new(callback));
    }

    pub fn set_on_disallow_intercept(&self, callback: impl Fn(bool) + 'static) {
        self.inner.borrow_mut().on_disallow_intercept = Some(Rc::new(callback));
    }

    /// Entry point for the raw pointer stream.
    pub fn dispatch_pointer_event(&self, event: &PointerEvent) {
        let mut effects = Effects::default();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.panel_count == 0 {
                return;
            }
            let current = inner.state.current_index;
            match event.kind {
                PointerEventKind::Down => {
                    inner.recognizer.on_down(event.position);
                    inner.velocity.add_movement(event);
                    effects.forward = Some((current, *event));
                }
                PointerEventKind::Move => {
                    inner.velocity.add_movement(event);
                    if inner.state.is_animating() {
                        // Dragging is disabled while a settle animation owns
                        // the transition; the stream stays with the panel.
                        effects.forward = Some((current, *event));
                    } else if inner.recognizer.is_claimed() {
                        Self::update_drag(&mut inner, event, &mut effects);
                    } else if inner.recognizer.on_move(event.position) {
                        effects.disallow_intercept = true;
                        effects.synthetic_cancel = Some((current, event.as_cancel()));
                        Self::update_drag(&mut inner, event, &mut effects);
                    } else {
                        effects.forward = Some((current, *event));
                    }
                }
                PointerEventKind::Up => {
                    inner.velocity.add_movement(event);
                    if inner.recognizer.is_claimed() && !inner.state.is_animating() {
                        if inner.state.is_dragging() {
                            let velocity_x =
                                inner.velocity.x_velocity(inner.style.max_fling_velocity);
                            let target = decide(velocity_x, inner.state.progress);
                            log::trace!(
                                "commit: velocity={velocity_x:.0} progress={:.3} -> target={target}",
                                inner.state.progress
                            );
                            inner.state.mode = PagerMode::Animating;
                            let from = inner.state.progress;
                            inner.animator.begin(from, target, SETTLE_SPEC);
                            effects.start_settle = true;
                        }
                        // A claimed gesture that never moved the transition
                        // (boundary drag) has nothing to settle.
                    } else if !inner.recognizer.is_claimed() {
                        effects.forward = Some((current, *event));
                    }
                    inner.recognizer.reset();
                    inner.velocity.clear();
                }
                PointerEventKind::Cancel => {
                    if inner.recognizer.is_claimed() {
                        // Abort without committing: no commit decision, no
                        // settle animation, buffered velocity discarded.
                        if inner.state.is_dragging() {
                            inner.state.reset_transition();
                            effects.repaint = true;
                        }
                    } else {
                        effects.forward = Some((current, *event));
                    }
                    inner.recognizer.reset();
                    inner.velocity.clear();
                }
            }
        }
        self.run_effects(effects);
    }

    fn update_drag(inner: &mut PagerInner, event: &PointerEvent, effects: &mut Effects) {
        let Some(delta_x) = inner.recognizer.displacement(event.position) else {
            return;
        };
        let width = inner.size.width;
        let panel_count = inner.panel_count;
        if apply_displacement(&mut inner.state, delta_x, width, panel_count) == DragUpdate::Moved {
            effects.repaint = true;
        }
    }

    fn run_effects(&self, effects: Effects) {
        if effects.disallow_intercept {
            let gate = self.inner.borrow().on_disallow_intercept.clone();
            if let Some(gate) = gate {
                gate(true);
            }
        }
        let sink = self.inner.borrow().child_sink.clone();
        if let Some(sink) = &sink {
            if let Some((index, cancel)) = effects.synthetic_cancel {
                sink(index, cancel);
            }
            if let Some((index, event)) = effects.forward {
                sink(index, event);
            }
        }
        if effects.start_settle {
            Self::schedule_frame(&self.inner);
        }
        if effects.repaint {
            Self::emit_repaint(&self.inner);
        }
    }

    fn schedule_frame(inner: &Rc<RefCell<PagerInner>>) {
        let clock = inner.borrow().clock.clone();
        let weak = Rc::downgrade(inner);
        let registration = clock.with_frame_millis(move |time_millis| {
            if let Some(strong) = weak.upgrade() {
                Self::on_animation_frame(&strong, time_millis);
            }
        });
        inner.borrow_mut().animator.hold_registration(registration);
    }

    fn on_animation_frame(inner: &Rc<RefCell<PagerInner>>, time_millis: u64) {
        let finished = {
            let mut guard = inner.borrow_mut();
            let Some(tick) = guard.animator.tick(time_millis) else {
                return;
            };
            guard.state.progress = tick.progress;
            if tick.finished {
                finalize_settle(&mut guard.state, tick.target);
            }
            tick.finished
        };
        if !finished {
            Self::schedule_frame(inner);
        }
        Self::emit_repaint(inner);
    }

    fn emit_repaint(inner: &Rc<RefCell<PagerInner>>) {
        let callback = inner.borrow().on_repaint.clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Direct progress seam, for host-driven custom transitions and tests.
    /// Triggers a repaint even when the value is unchanged; refused while
    /// the settle animation owns `progress`.
    pub fn set_progress(&self, progress: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.state.is_animating() {
                log::warn!("set_progress ignored: settle animation owns progress");
                return;
            }
            inner.state.progress = progress;
        }
        Self::emit_repaint(&self.inner);
    }

    /// Whether a page exists in direction `d`: negative for the previous
    /// panel, positive for the next. Used by ancestor scroll-conflict
    /// resolution.
    pub fn can_page(&self, direction: i32) -> bool {
        let inner = self.inner.borrow();
        (direction < 0 && inner.state.current_index > 0)
            || (direction > 0 && inner.state.current_index + 1 < inner.panel_count)
    }

    /// Interrupt any running settle (e.g. the container is being detached).
    /// Still routes through the end transition with the committed target, so
    /// the mode can never stick at `Animating`.
    pub fn detach(&self) {
        let target = self.inner.borrow_mut().animator.interrupt();
        if let Some(target) = target {
            {
                let mut inner = self.inner.borrow_mut();
                finalize_settle(&mut inner.state, target);
            }
            Self::emit_repaint(&self.inner);
        }
    }

    /// Snapshot for the render adapter.
    pub fn scene(&self) -> RenderScene {
        let inner = self.inner.borrow();
        match inner.state.mode {
            PagerMode::Idle => RenderScene::Idle {
                current: inner.state.current_index,
            },
            PagerMode::Dragging | PagerMode::Animating => RenderScene::Transition {
                front: inner.state.front_index,
                back: inner.state.back_index,
                progress: inner.state.progress,
            },
        }
    }

    pub fn state(&self) -> PagerState {
        self.inner.borrow().state
    }

    pub fn mode(&self) -> PagerMode {
        self.inner.borrow().state.mode
    }

    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current_index
    }

    pub fn progress(&self) -> f32 {
        self.inner.borrow().state.progress
    }

    pub fn panel_count(&self) -> usize {
        self.inner.borrow().panel_count
    }

    pub fn style(&self) -> SheetStyle {
        self.inner.borrow().style
    }

    pub fn is_gesture_claimed(&self) -> bool {
        self.inner.borrow().recognizer.is_claimed()
    }
}

#[cfg(test)]
#[path = "tests/sheet_pager_tests.rs"]
mod tests;
