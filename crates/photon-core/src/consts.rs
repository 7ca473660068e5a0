/// Maximum accepted filesystem path length, in encoded bytes.
pub const MAX_PATH_LENGTH: usize = 4096;

/// Maximum display filename length, in bytes. Sanitized names are
/// truncated one byte short of this bound.
pub const MAX_FILENAME_LENGTH: usize = 256;

/// Capacity of the bounded path copy stored in a metadata record.
pub const MAX_STORED_PATH: usize = 512;

/// Maximum accepted image file size before any decode attempt (100 MiB).
pub const MAX_FILE_SIZE: i64 = 100 * 1024 * 1024;

/// Maximum decoded image extent per axis, in pixels.
pub const MAX_IMAGE_DIMENSION: u32 = 32768;

/// Maximum destination rectangle extent per axis, in pixels. Bounds the
/// rectangle arithmetic no matter how far the zoom has been pushed.
pub const MAX_RENDER_DIMENSION: i32 = 65536;

/// Largest secure scratch allocation (half the address-space bound, so
/// downstream size arithmetic cannot overflow).
pub const MAX_SECURE_ALLOC: usize = isize::MAX as usize / 2;

/// Zoom multiplier per keyboard zoom step.
pub const KEY_ZOOM_STEP: f32 = 1.2;

/// Zoom multiplier per mouse-wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

/// Pan distance per arrow-key press, in pixels.
pub const PAN_STEP: i32 = 50;

/// Initial window width, in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Initial window height, in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
