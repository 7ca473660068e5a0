use crate::error::{PhotonError, Result};

/// Characters never allowed in a display filename.
const RESERVED: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Sanitize a display filename in place.
///
/// Every reserved or non-printable character becomes `_` and the result
/// is truncated to at most `max_len - 1` bytes. Callers pass basenames,
/// never full paths.
pub fn sanitize_filename(name: &mut String, max_len: usize) -> Result<()> {
    if max_len == 0 {
        return Err(PhotonError::InvalidInput);
    }
    if name.len() >= max_len {
        return Err(PhotonError::PathTooLong);
    }

    let mut sanitized = String::with_capacity(name.len());
    for c in name.chars() {
        if RESERVED.contains(&c) || !(c.is_ascii_graphic() || c.is_ascii_whitespace()) {
            sanitized.push('_');
        } else {
            sanitized.push(c);
        }
    }

    // Every remaining character is ASCII, so the byte index is a valid
    // char boundary.
    sanitized.truncate(max_len - 1);
    *name = sanitized;

    Ok(())
}
