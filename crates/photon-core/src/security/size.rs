use crate::consts::MAX_FILE_SIZE;
use crate::error::{PhotonError, Result};

/// Bound an image file size before any decode attempt.
///
/// Every call site that stats the filesystem re-checks on its own; a
/// file changing between two stats is an accepted race, not a guarded
/// transaction.
pub fn check_file_size(size: i64) -> Result<()> {
    if size < 0 {
        return Err(PhotonError::InvalidInput);
    }
    if size > MAX_FILE_SIZE {
        return Err(PhotonError::FileTooLarge);
    }
    Ok(())
}
