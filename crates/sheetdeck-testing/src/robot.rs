use std::cell::RefCell;
use std::rc::Rc;

use sheetdeck_core::FrameClock;
use sheetdeck_foundation::{PointerEvent, PointerEventKind};
use sheetdeck_graphics::Size;
use sheetdeck_ui::{PagerMode, RenderScene, SheetPager, SheetStyle};

/// Milliseconds between synthetic frames while settling.
const FRAME_MILLIS: u64 = 16;

/// Cap on settle pumping; well past the 500 ms settle duration.
const MAX_SETTLE_FRAMES: usize = 128;

/// Programmatic gesture driver for a [`SheetPager`] under test.
///
/// All gestures run along the vertical middle of the container and advance
/// an internal millisecond timeline, so velocity-sensitive behavior is
/// reproducible: "slow" gestures end with a stationary hold (release
/// velocity zero) and flings compress the same travel into a couple of
/// frames.
pub struct SwipeRobot {
    pager: SheetPager,
    clock: FrameClock,
    width: f32,
    now: u64,
    scenes: Rc<RefCell<Vec<RenderScene>>>,
    forwarded: Rc<RefCell<Vec<(usize, PointerEventKind)>>>,
}

impl SwipeRobot {
    pub fn new(panel_count: usize, width: f32) -> Self {
        Self::with_style(panel_count, width, SheetStyle::default())
    }

    pub fn with_style(panel_count: usize, width: f32, style: SheetStyle) -> Self {
        let clock = FrameClock::new();
        let pager = SheetPager::new(panel_count, style, clock.clone());
        pager.set_size(Size::new(width, width * 1.6));

        let scenes: Rc<RefCell<Vec<RenderScene>>> = Rc::new(RefCell::new(Vec::new()));
        let scene_log = Rc::clone(&scenes);
        let scene_source = pager.clone();
        pager.set_on_repaint(move || scene_log.borrow_mut().push(scene_source.scene()));

        let forwarded: Rc<RefCell<Vec<(usize, PointerEventKind)>>> =
            Rc::new(RefCell::new(Vec::new()));
        let forward_log = Rc::clone(&forwarded);
        pager.set_child_sink(move |index, event| forward_log.borrow_mut().push((index, event.kind)));

        Self {
            pager,
            clock,
            width,
            now: 1_000,
            scenes,
            forwarded,
        }
    }

    pub fn pager(&self) -> &SheetPager {
        &self.pager
    }

    /// Every scene snapshot captured at a repaint request, in order.
    pub fn scenes(&self) -> Vec<RenderScene> {
        self.scenes.borrow().clone()
    }

    /// Events the pager passed through to panel content.
    pub fn forwarded_events(&self) -> Vec<(usize, PointerEventKind)> {
        self.forwarded.borrow().clone()
    }

    pub fn clear_logs(&self) {
        self.scenes.borrow_mut().clear();
        self.forwarded.borrow_mut().clear();
    }

    // ---- raw events ------------------------------------------------------

    pub fn press(&mut self, x: f32) {
        let y = self.mid_y();
        self.pager
            .dispatch_pointer_event(&PointerEvent::down(x, y, self.now));
    }

    pub fn move_to(&mut self, x: f32, dt_millis: u64) {
        self.now += dt_millis;
        let y = self.mid_y();
        self.pager
            .dispatch_pointer_event(&PointerEvent::moved(x, y, self.now));
    }

    pub fn release(&mut self, x: f32) {
        let y = self.mid_y();
        self.pager
            .dispatch_pointer_event(&PointerEvent::up(x, y, self.now));
    }

    pub fn cancel(&mut self, x: f32) {
        let y = self.mid_y();
        self.pager
            .dispatch_pointer_event(&PointerEvent::cancel(x, y, self.now));
    }

    // ---- gestures --------------------------------------------------------

    /// Slow drag by `fraction` of the width (positive = leftward = reveal
    /// next), held stationary before release so the commit decision is
    /// purely positional.
    pub fn swipe_left_slow(&mut self, fraction: f32) {
        let from = self.width * 0.95;
        let to = from - self.width * fraction;
        self.drag_slow(from, to);
        self.release(to);
    }

    /// Slow rightward drag by `fraction` of the width (reveal previous).
    pub fn swipe_right_slow(&mut self, fraction: f32) {
        let from = self.width * 0.05;
        let to = from + self.width * fraction;
        self.drag_slow(from, to);
        self.release(to);
    }

    /// Drag without releasing; the gesture stays open for `cancel` or
    /// `release`.
    pub fn drag_slow(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x);
        let steps = 8;
        for step in 1..=steps {
            let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
            self.move_to(x, 20);
        }
        self.move_to(to_x, 60);
        self.move_to(to_x, 60);
    }

    /// Fast swipe: the travel happens in two 8 ms frames, so the release
    /// velocity is `travel / 16ms`.
    pub fn fling(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x);
        self.move_to(from_x + (to_x - from_x) * 0.5, 8);
        self.move_to(to_x, 8);
        self.release(to_x);
    }

    pub fn fling_left(&mut self, fraction: f32) {
        let from = self.width * 0.9;
        self.fling(from, from - self.width * fraction);
    }

    pub fn fling_right(&mut self, fraction: f32) {
        let from = self.width * 0.1;
        self.fling(from, from + self.width * fraction);
    }

    // ---- clock -----------------------------------------------------------

    /// Pump one synthetic frame.
    pub fn advance_frame(&mut self) {
        self.now += FRAME_MILLIS;
        self.clock.drain_frame_callbacks(self.now);
    }

    /// Pump frames until the pager leaves `Animating`.
    ///
    /// # Panics
    /// If the pager is still animating after a generous frame budget.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.pager.mode() != PagerMode::Animating {
                return;
            }
            self.advance_frame();
        }
        panic!("pager did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    fn mid_y(&self) -> f32 {
        self.width * 0.8
    }
}
