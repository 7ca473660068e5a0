use photon_core::loader::DecodedImage;

/// Convert decoded RGBA8 pixels to an egui ColorImage for texture upload.
pub fn decoded_to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.pixels,
    )
}
