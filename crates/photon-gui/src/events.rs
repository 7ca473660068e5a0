//! Translation from egui's per-frame input to viewer input events.

use photon_core::consts::PAN_STEP;
use photon_core::input::InputEvent;

/// Collect this frame's pending events in the order they apply.
///
/// Window resizes are polled by the viewport panel (the drawable area is
/// only known there), and drag-to-pan comes from the panel's own
/// response; everything keyboard- and wheel-shaped lands here.
pub fn collect(ctx: &egui::Context) -> Vec<InputEvent> {
    let mut events = Vec::new();

    ctx.input(|input| {
        if input.viewport().close_requested() {
            events.push(InputEvent::Quit);
        }

        if input.key_pressed(egui::Key::Escape) {
            events.push(InputEvent::Quit);
        }
        if input.key_pressed(egui::Key::Plus) || input.key_pressed(egui::Key::Equals) {
            events.push(InputEvent::ZoomIn);
        }
        if input.key_pressed(egui::Key::Minus) {
            events.push(InputEvent::ZoomOut);
        }
        if input.key_pressed(egui::Key::F) {
            events.push(InputEvent::FitToWindow);
        }
        if input.key_pressed(egui::Key::Num1) {
            events.push(InputEvent::ActualSize);
        }
        if input.key_pressed(egui::Key::I) {
            events.push(InputEvent::ToggleInfo);
        }

        if input.key_pressed(egui::Key::ArrowLeft) {
            events.push(InputEvent::Pan {
                dx: -PAN_STEP,
                dy: 0,
            });
        }
        if input.key_pressed(egui::Key::ArrowRight) {
            events.push(InputEvent::Pan { dx: PAN_STEP, dy: 0 });
        }
        if input.key_pressed(egui::Key::ArrowUp) {
            events.push(InputEvent::Pan {
                dx: 0,
                dy: -PAN_STEP,
            });
        }
        if input.key_pressed(egui::Key::ArrowDown) {
            events.push(InputEvent::Pan { dx: 0, dy: PAN_STEP });
        }

        let scroll = input.raw_scroll_delta.y;
        if scroll != 0.0 {
            events.push(InputEvent::Wheel {
                delta: scroll.signum() as i32,
            });
        }
    });

    events
}
