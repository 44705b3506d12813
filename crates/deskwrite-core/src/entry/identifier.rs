//! Identifier checks and slug generation.
//!
//! The identifier becomes the file stem, so it must stay inside the
//! install directory.

use crate::config::EntryConfig;
use crate::error::{DeskwriteError, Result};

/// Reject identifiers that would escape the install directory or produce
/// an unnamed file.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let reason = if identifier.is_empty() {
        Some("must not be empty")
    } else if identifier == "." || identifier == ".." {
        Some("must not be a relative directory name")
    } else if identifier.contains(['/', '\\', '\0']) {
        Some("must not contain path separators or NUL")
    } else {
        None
    };

    match reason {
        Some(message) => Err(DeskwriteError::Validation {
            field: "identifier".to_string(),
            message: format!("{:?} {}", identifier, message),
        }),
        None => Ok(()),
    }
}

/// Convert a display name to a filesystem-safe slug.
///
/// Lowercases, maps everything outside `[a-z0-9_-]` to `-`, collapses runs
/// of `-`, trims separators from both ends and caps the length.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        let c = if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    slug.trim_matches(|c| c == '-' || c == '_')
        .chars()
        .take(EntryConfig::MAX_SLUG_LEN)
        .collect::<String>()
        .trim_end_matches(|c| c == '-' || c == '_')
        .to_string()
}
