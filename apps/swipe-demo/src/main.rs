//! Headless SheetDeck demo.
//!
//! Builds a three-panel pager, scripts a few gestures against it, and logs
//! every repaint the way a real render adapter would consume it. Run with
//! `RUST_LOG=info` (or `trace` to watch the state machine itself).

use log::info;

use sheetdeck_core::FrameClock;
use sheetdeck_foundation::PointerEvent;
use sheetdeck_graphics::{Color, Size};
use sheetdeck_ui::{PagerMode, RenderScene, SheetPager, SheetStyle};

const WIDTH: f32 = 400.0;
const MID_Y: f32 = 320.0;

fn main() {
    env_logger::init();

    let clock = FrameClock::new();
    let style = SheetStyle::default().with_shade_color(Color::BLACK.with_alpha(0.6));
    let pager = SheetPager::new(3, style, clock.clone());
    pager.set_size(Size::new(WIDTH, 640.0));

    let adapter_view = pager.clone();
    pager.set_on_repaint(move || paint(&adapter_view));
    pager.set_child_sink(|index, event| info!("panel {index} content sees {:?}", event.kind));

    let mut now = 0u64;

    info!("-- slow swipe left, released past half: advances to panel 1 --");
    drag(&pager, &mut now, WIDTH * 0.95, WIDTH * 0.25, 8, 20);
    settle(&pager, &clock, &mut now);

    info!("-- slow swipe right, released under half: snaps back --");
    drag(&pager, &mut now, WIDTH * 0.05, WIDTH * 0.35, 8, 20);
    settle(&pager, &clock, &mut now);

    info!("-- fast rightward fling: reveals the previous panel anyway --");
    drag(&pager, &mut now, WIDTH * 0.1, WIDTH * 0.2, 2, 8);
    settle(&pager, &clock, &mut now);

    info!("-- vertical-ish wiggle: passes through to panel content --");
    let events = [
        PointerEvent::down(200.0, 100.0, now),
        PointerEvent::moved(204.0, 180.0, now + 16),
        PointerEvent::up(204.0, 180.0, now + 32),
    ];
    for event in &events {
        pager.dispatch_pointer_event(event);
    }

    println!("settled on panel {}", pager.current_index());
}

fn paint(pager: &SheetPager) {
    let scene = pager.scene();
    match scene {
        RenderScene::Idle { current } => info!("paint: panel {current} settled"),
        RenderScene::Transition {
            front,
            back,
            progress,
        } => {
            let frame = scene
                .transition_frame(&pager.style(), WIDTH)
                .expect("transition scene resolves a frame");
            info!(
                "paint: front {front} at x{:+.1}, back {back} scaled {:.2}, shade alpha {:.2} (progress {progress:.3})",
                frame.front_offset_x, frame.back_scale, frame.shade.a()
            );
        }
    }
}

fn drag(pager: &SheetPager, now: &mut u64, from_x: f32, to_x: f32, steps: u32, step_millis: u64) {
    pager.dispatch_pointer_event(&PointerEvent::down(from_x, MID_Y, *now));
    for step in 1..=steps {
        *now += step_millis;
        let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
        pager.dispatch_pointer_event(&PointerEvent::moved(x, MID_Y, *now));
    }
    pager.dispatch_pointer_event(&PointerEvent::up(to_x, MID_Y, *now));
}

fn settle(pager: &SheetPager, clock: &FrameClock, now: &mut u64) {
    for _ in 0..128 {
        if pager.mode() != PagerMode::Animating {
            return;
        }
        *now += 16;
        clock.drain_frame_callbacks(*now);
    }
}
