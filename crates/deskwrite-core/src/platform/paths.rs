//! Platform-specific path utilities.

use crate::error::{DeskwriteError, Result};
use std::path::PathBuf;

/// Get the per-user applications directory.
///
/// # Platform Behavior
/// - **Linux/BSD**: `$XDG_DATA_HOME/applications`, falling back to
///   `~/.local/share/applications`
/// - **Other**: configuration error, desktop entries are an XDG concept
pub fn apps_dir() -> Result<PathBuf> {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Some(data) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(data).join("applications"));
        }
        let home = dirs::home_dir().ok_or_else(|| DeskwriteError::Config {
            message: "Could not determine home directory".to_string(),
            path: None,
            source: None,
        })?;
        Ok(home.join(".local").join("share").join("applications"))
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        Err(DeskwriteError::Config {
            message: "Unsupported platform for applications directory".to_string(),
            path: None,
            source: None,
        })
    }
}

/// Check if a command exists in the system PATH.
///
/// # Platform Behavior
/// - **Unix**: Uses `which` command
/// - **Windows**: Uses `where` command
pub fn command_exists(cmd: &str) -> bool {
    #[cfg(unix)]
    {
        std::process::Command::new("which")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[cfg(windows)]
    {
        std::process::Command::new("where")
            .arg(cmd)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}
