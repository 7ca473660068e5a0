use std::path::{Path, PathBuf};

use photon_core::input::ViewerState;
use photon_core::loader;
use photon_core::metadata::{self, ImageMetadata};

use crate::convert::decoded_to_color_image;
use crate::events;
use crate::panels;

pub struct PhotonApp {
    pub state: ViewerState,
    /// The single live texture; replaced wholesale on every load.
    pub texture: Option<egui::TextureHandle>,
    /// Source dimensions of the loaded image.
    pub image_size: Option<[u32; 2]>,
    pub metadata: Option<ImageMetadata>,
    pub show_about: bool,
}

impl PhotonApp {
    pub fn new(ctx: &egui::Context, initial_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: ViewerState::default(),
            texture: None,
            image_size: None,
            metadata: None,
            show_about: false,
        };

        match initial_path {
            Some(path) => app.load_image(ctx, &path),
            None => {
                tracing::info!("no image specified; starting with an empty viewer");
                tracing::info!("controls: Esc quit, +/- zoom, F fit, 1 actual size, I info");
            }
        }

        app
    }

    /// Load `path` and replace the current texture. A failed load is
    /// logged and leaves the viewer running with whatever it had.
    pub fn load_image(&mut self, ctx: &egui::Context, path: &Path) {
        // The record is rebuilt even when decoding fails; the overlay
        // describes the requested file either way.
        self.metadata = metadata::extract_metadata(path);

        let decoded = match loader::load_image(path) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!("load failed for {}: {err}", path.display());
                return;
            }
        };

        // Drop the previous texture before uploading the replacement so
        // only one image is ever resident.
        self.texture = None;

        let size = [decoded.width, decoded.height];
        let color_image = decoded_to_color_image(&decoded);
        self.texture = Some(ctx.load_texture("image", color_image, egui::TextureOptions::LINEAR));
        self.image_size = Some(size);
    }
}

impl eframe::App for PhotonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.apply_all(events::collect(ctx));

        if !self.state.running {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::info::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Photon")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Photon");
                        ui.label("Minimal secure image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
