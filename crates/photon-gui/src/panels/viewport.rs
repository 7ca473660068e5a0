use photon_core::input::InputEvent;
use photon_core::viewport::{self, Rect};

use crate::app::PhotonApp;

pub fn show(ctx: &egui::Context, app: &mut PhotonApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let panel_rect = ui.available_rect_before_wrap();
            paint_background(ui, panel_rect);

            // The geometry engine works in drawable-area coordinates, so
            // the panel size is what "window size" means to the state.
            sync_window_size(app, panel_rect);

            let Some([image_w, image_h]) = app.image_size else {
                show_placeholder(ui);
                return;
            };
            let Some(texture_id) = app.texture.as_ref().map(|t| t.id()) else {
                show_placeholder(ui);
                return;
            };

            let response = ui.allocate_rect(panel_rect, egui::Sense::drag());
            handle_pan(app, &response);

            let Some(rect) = viewport::compute_rect(&app.state, image_w, image_h) else {
                return;
            };
            let dest = to_screen_rect(rect, panel_rect.min);

            draw_shadow(ui, dest);
            draw_image(ui, texture_id, dest);
            draw_border(ui, dest);
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_rgb(25, 25, 35));
}

fn sync_window_size(app: &mut PhotonApp, panel_rect: egui::Rect) {
    let width = panel_rect.width().round() as u32;
    let height = panel_rect.height().round() as u32;
    if width > 0
        && height > 0
        && (width != app.state.window_width || height != app.state.window_height)
    {
        app.state.apply(InputEvent::Resized { width, height });
    }
}

fn handle_pan(app: &mut PhotonApp, response: &egui::Response) {
    // Dragging pans in free mode only; fit mode ignores pan anyway.
    if !response.dragged() || app.state.fit_to_window {
        return;
    }
    let delta = response.drag_delta();
    if delta != egui::Vec2::ZERO {
        app.state.apply(InputEvent::Pan {
            dx: delta.x.round() as i32,
            dy: delta.y.round() as i32,
        });
    }
}

fn to_screen_rect(rect: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

fn draw_shadow(ui: &egui::Ui, dest: egui::Rect) {
    ui.painter().rect_filled(
        dest.translate(egui::vec2(3.0, 3.0)),
        0.0,
        egui::Color32::from_black_alpha(50),
    );
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, dest: egui::Rect) {
    ui.painter().image(
        texture_id,
        dest,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_border(ui: &egui::Ui, dest: egui::Rect) {
    ui.painter().rect_stroke(
        dest,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_rgb(80, 80, 100)),
        egui::epaint::StrokeKind::Outside,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
