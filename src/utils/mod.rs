// PhantomJump Utilities Module
//
// Common helpers shared by the locator, the index and the bindings.

/// File utilities
pub mod file_utils {
    use anyhow::{Context, Result};
    use std::fs;
    use std::path::Path;

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Offset conversion and identifier checks
pub mod offsets;
