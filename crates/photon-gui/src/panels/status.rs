use crate::app::PhotonApp;

pub fn show(ctx: &egui::Context, app: &mut PhotonApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some([width, height]) = app.image_size {
                ui.label(format!("{width}x{height}"));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.state.zoom * 100.0));
            ui.separator();
            ui.label(if app.state.fit_to_window { "Fit" } else { "Free" });

            if let Some(ref meta) = app.metadata {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&meta.filename);
                });
            }
        });
    });
}
