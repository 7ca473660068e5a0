use thiserror::Error;

/// Closed failure taxonomy shared by validation, loading, and allocation.
///
/// Every fallible core operation returns one of these kinds; callers log
/// and degrade rather than abort.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotonError {
    #[error("invalid input parameters")]
    InvalidInput,

    #[error("file path too long")]
    PathTooLong,

    #[error("file size exceeds limit")]
    FileTooLarge,

    #[error("access denied or file not found")]
    AccessDenied,

    #[error("memory allocation failed")]
    MemoryAllocation,
}

pub type Result<T> = std::result::Result<T, PhotonError>;
