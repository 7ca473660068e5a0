//! Image loading behind the validation gates.

use std::fs;
use std::path::Path;

use crate::consts::MAX_IMAGE_DIMENSION;
use crate::error::{PhotonError, Result};
use crate::security::{check_file_size, validate_path};

/// Decoded RGBA8 pixels plus source dimensions: the transient surface
/// handed to the renderer for texture upload, then discarded.
#[derive(Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Load and decode an image from an untrusted path.
///
/// Every gate short-circuits: path validation, stat, size bound, decode,
/// dimension cap. The decoder's own error detail is logged but collapses
/// to `AccessDenied`; nothing finer applies to an unreadable or
/// undecodable file.
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    validate_path(path)?;

    let meta = fs::metadata(path).map_err(|err| {
        tracing::warn!("cannot stat {}: {err}", path.display());
        PhotonError::AccessDenied
    })?;
    check_file_size(meta.len() as i64)?;

    let decoded = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| {
            tracing::warn!("cannot open {}: {err}", path.display());
            PhotonError::AccessDenied
        })?
        .decode()
        .map_err(|err| {
            tracing::warn!("decode failed for {}: {err}", path.display());
            PhotonError::AccessDenied
        })?;

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 || width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        tracing::warn!("rejecting {width}x{height} image: dimension out of bounds");
        return Err(PhotonError::InvalidInput);
    }

    // Bound the pixel buffer arithmetic before committing to the copy.
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(4))
        .ok_or(PhotonError::MemoryAllocation)?;

    let pixels = decoded.into_rgba8().into_raw();

    tracing::info!("loaded {} ({width}x{height})", path.display());

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}
