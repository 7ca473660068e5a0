use photon_core::input::InputEvent;

use crate::app::PhotonApp;

pub fn show(ctx: &egui::Context, app: &mut PhotonApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open...").clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text("Esc"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::Quit);
                }
            });

            ui.menu_button("View", |ui| {
                if ui
                    .add(egui::Button::new("Zoom In").shortcut_text("+"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::ZoomIn);
                }
                if ui
                    .add(egui::Button::new("Zoom Out").shortcut_text("-"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::ZoomOut);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Fit to Window").shortcut_text("F"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::FitToWindow);
                }
                if ui
                    .add(egui::Button::new("Actual Size").shortcut_text("1"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::ActualSize);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Image Info").shortcut_text("I"))
                    .clicked()
                {
                    ui.close();
                    app.state.apply(InputEvent::ToggleInfo);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });
    });
}

fn open_file(ctx: &egui::Context, app: &mut PhotonApp) {
    // Loading is synchronous by design, so the blocking dialog on the UI
    // thread is consistent with the rest of the load path.
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.load_image(ctx, &path);
    }
}
