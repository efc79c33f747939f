//! Input validation utilities
//!
//! Checks applied to a path string before a handle is built from it.

use crate::error::{PathError, Result};
use std::ffi::OsStr;

/// Check if a string can be used to build a path handle
///
/// # Examples
/// ```
/// use path_handle::is_valid_input;
///
/// assert!(is_valid_input("safe/path/file.txt"));
/// assert!(is_valid_input("~/notes.md"));
/// assert!(!is_valid_input(""));
/// assert!(!is_valid_input("file\0null"));
/// ```
pub fn is_valid_input(input: &str) -> bool {
    validate_input(input).is_ok()
}

/// Validate a path string and return detailed error information
///
/// Whitespace-only strings are accepted; they name a file in the current
/// directory like any other relative path.
///
/// # Examples
/// ```
/// use path_handle::{validate_input, PathError};
///
/// assert!(validate_input("data/big.file.dat").is_ok());
/// assert!(matches!(validate_input(""), Err(PathError::InvalidArgument { .. })));
/// ```
pub fn validate_input(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(PathError::invalid("cannot create a path handle from an empty string"));
    }

    // No host file system accepts an interior NUL
    if input.contains('\0') {
        return Err(PathError::invalid(format!(
            "path contains a NUL byte: {:?}",
            input
        )));
    }

    Ok(())
}

/// Convert an OS string into validated UTF-8 input
pub(crate) fn validate_os_input(input: &OsStr) -> Result<&str> {
    let text = input
        .to_str()
        .ok_or_else(|| PathError::invalid(format!("path is not valid UTF-8: {:?}", input)))?;
    validate_input(text)?;
    Ok(text)
}
