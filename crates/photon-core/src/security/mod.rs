//! Validation gates for attacker-controlled input: paths, display
//! names, file sizes, and the scratch memory that holds them.

mod filename;
mod memory;
mod path;
mod size;

pub use filename::sanitize_filename;
pub use memory::{secure_copy, secure_wipe, SecureBuffer};
pub use path::validate_path;
pub use size::check_file_size;
