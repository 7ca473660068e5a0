use std::path::Path;

use crate::consts::MAX_PATH_LENGTH;
use crate::error::{PhotonError, Result};

/// Validate an untrusted filesystem path before any I/O touches it.
///
/// Pure byte-level check: length bounds, a coarse `..` substring guard
/// against directory traversal, and interior NUL. The substring guard
/// knowingly rejects benign names containing a literal `..`; it is a
/// false-positive-tolerant policy, not canonicalization.
pub fn validate_path(path: &Path) -> Result<()> {
    let bytes = path.as_os_str().as_encoded_bytes();

    if bytes.is_empty() || bytes.len() >= MAX_PATH_LENGTH {
        return Err(PhotonError::PathTooLong);
    }

    if bytes.windows(2).any(|pair| pair == b"..") {
        return Err(PhotonError::AccessDenied);
    }

    if bytes.contains(&0) {
        return Err(PhotonError::InvalidInput);
    }

    Ok(())
}
