use photon_core::metadata::format_file_size;

use crate::app::PhotonApp;

/// Metadata overlay, toggled with `i`. Shown only while an image is
/// actually displayed.
pub fn show(ctx: &egui::Context, app: &mut PhotonApp) {
    if !app.state.show_info || app.texture.is_none() {
        return;
    }
    let Some(ref meta) = app.metadata else {
        return;
    };

    egui::Window::new("Image Info")
        .anchor(egui::Align2::LEFT_TOP, [15.0, 15.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("metadata")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("File");
                    ui.label(&meta.filename);
                    ui.end_row();

                    ui.label("Format");
                    ui.label(meta.format.as_str());
                    ui.end_row();

                    ui.label("Dimensions");
                    ui.label(format!("{}x{}", meta.width, meta.height));
                    ui.end_row();

                    ui.label("Size");
                    ui.label(format_file_size(meta.file_size));
                    ui.end_row();

                    ui.label("Color depth");
                    ui.label(format!("{} bpp", meta.bits_per_pixel));
                    ui.end_row();

                    if let Some(modified) = meta.modified {
                        ui.label("Modified");
                        ui.label(modified.format("%Y-%m-%d %H:%M").to_string());
                        ui.end_row();
                    }

                    ui.label("Zoom");
                    ui.label(format!("{:.1}x", app.state.zoom));
                    ui.end_row();
                });
        });
}
