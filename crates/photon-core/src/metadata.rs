//! Best-effort metadata extraction for the info overlay and inspector.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::consts::{MAX_FILENAME_LENGTH, MAX_STORED_PATH};
use crate::security::{check_file_size, sanitize_filename, validate_path, SecureBuffer};

/// Image container formats the viewer recognizes by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
    Unknown,
}

impl ImageFormat {
    /// Derive the format from a path's extension, case-insensitively.
    /// Extensions longer than 10 bytes are treated as unknown.
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return Self::Unknown;
        };
        if ext.len() > 10 {
            return Self::Unknown;
        }
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "bmp" => Self::Bmp,
            "gif" => Self::Gif,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Bmp => "BMP",
            Self::Gif => "GIF",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive record for one file, rebuilt from scratch on every load
/// attempt. Everything beyond the path itself is best-effort.
#[derive(Clone, Debug)]
pub struct ImageMetadata {
    /// Sanitized basename, safe for UI and log output.
    pub filename: String,
    /// Bounded copy of the source path.
    pub filepath: String,
    pub width: u32,
    pub height: u32,
    /// File size in bytes; 0 when the file could not be statted or
    /// exceeds the size limit.
    pub file_size: u64,
    pub bits_per_pixel: u32,
    pub format: ImageFormat,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

/// Extract the display record for `path`.
///
/// Returns `None` only when the path fails validation or the basename
/// cannot be sanitized. Stat and decode failures degrade to zeroed
/// fields instead of aborting: the record is informational, not a gate.
pub fn extract_metadata(path: &Path) -> Option<ImageMetadata> {
    if let Err(err) = validate_path(path) {
        tracing::warn!("metadata rejected {}: {err}", path.display());
        return None;
    }

    // Scratch copy of the raw path bytes, wiped when it drops.
    let scratch = SecureBuffer::from_bytes(path.as_os_str().as_encoded_bytes(), MAX_STORED_PATH)
        .ok()?;
    let filepath = String::from_utf8_lossy(trim_terminated(&scratch)).into_owned();

    let mut filename = basename(&filepath).to_string();
    if let Err(err) = sanitize_filename(&mut filename, MAX_FILENAME_LENGTH) {
        tracing::warn!("metadata basename rejected: {err}");
        return None;
    }

    let format = ImageFormat::from_path(path);

    // An unstattable or oversized file keeps its record but loses the
    // stat-derived fields, and the decode probe is skipped.
    let stat = fs::metadata(path)
        .ok()
        .filter(|meta| check_file_size(meta.len() as i64).is_ok());

    let (file_size, created, modified) = match &stat {
        Some(meta) => (
            meta.len(),
            meta.created().ok().map(DateTime::from),
            meta.modified().ok().map(DateTime::from),
        ),
        None => (0, None, None),
    };

    let (width, height, bits_per_pixel) = match &stat {
        Some(_) => probe_dimensions(path),
        None => (0, 0, 0),
    };

    Some(ImageMetadata {
        filename,
        filepath,
        width,
        height,
        file_size,
        bits_per_pixel,
        format,
        created,
        modified,
    })
}

/// Human-readable size, e.g. "2.4 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

/// Decode probe for dimensions and color depth. Failure is non-fatal.
fn probe_dimensions(path: &Path) -> (u32, u32, u32) {
    let reader = match image::ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(err) => {
            tracing::debug!("metadata probe cannot open {}: {err}", path.display());
            return (0, 0, 0);
        }
    };

    match reader.decode() {
        Ok(img) => (
            img.width(),
            img.height(),
            u32::from(img.color().bits_per_pixel()),
        ),
        Err(err) => {
            tracing::debug!("metadata decode probe failed for {}: {err}", path.display());
            (0, 0, 0)
        }
    }
}

/// Basename after the last path separator of either OS convention; the
/// whole path when neither occurs.
fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Bytes of a length-terminated buffer up to the first zero.
fn trim_terminated(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}
