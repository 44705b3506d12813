//! Entry writer: render, write, notify, register.
//!
//! A single call walks one linear path:
//! build record -> render -> write file -> notify -> run registration tool.
//! Nothing is rolled back; a registration failure is reported after the file
//! is already in place.

mod atomic;
mod notifier;
mod runner;

pub use atomic::{write_atomic, write_in_place};
pub use notifier::{Notifier, TracingNotifier};
pub use runner::{CommandRunner, SystemCommandRunner};

use crate::config::WriterConfig;
use crate::entry::{validate_identifier, DesktopEntry};
use crate::error::{DeskwriteError, Result};
use crate::platform;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes desktop entries into a configured directory and registers them.
///
/// The writer holds no mutable state. Calls with distinct identifiers touch
/// disjoint files; calls racing on the same identifier are last-writer-wins.
#[derive(Debug)]
pub struct EntryWriter<R = SystemCommandRunner, N = TracingNotifier> {
    config: WriterConfig,
    runner: R,
    notifier: N,
}

impl EntryWriter {
    /// Create a writer that spawns real processes and logs through `tracing`.
    pub fn new(config: WriterConfig) -> Self {
        Self::with_collaborators(config, SystemCommandRunner, TracingNotifier)
    }
}

impl<R: CommandRunner, N: Notifier> EntryWriter<R, N> {
    /// Create a writer with explicit process and notification collaborators.
    pub fn with_collaborators(config: WriterConfig, runner: R, notifier: N) -> Self {
        Self {
            config,
            runner,
            notifier,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Resolve the output path and rendered content without touching disk.
    pub fn preview(&self, identifier: &str, mut entry: DesktopEntry) -> Result<(PathBuf, String)> {
        validate_identifier(identifier)?;
        entry.apply_name_fallback(identifier);
        Ok((self.config.entry_path(identifier), entry.render()))
    }

    /// Write `entry` to `<install_dir>/<identifier>.<ext>` and register it.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    /// - [`DeskwriteError::Validation`] for an unusable identifier, before any
    ///   filesystem change
    /// - [`DeskwriteError::Config`] when the install directory cannot be created
    /// - [`DeskwriteError::Io`] when the file cannot be written
    /// - [`DeskwriteError::Execution`] when registration fails; the file stays
    pub fn write(&self, identifier: &str, entry: DesktopEntry) -> Result<PathBuf> {
        let (path, content) = self.preview(identifier, entry)?;

        self.ensure_install_dir()?;

        if self.config.atomic {
            write_atomic(&path, &content)?;
        } else {
            write_in_place(&path, &content)?;
        }

        if self.config.mark_executable {
            platform::set_executable(&path)?;
        }

        self.notifier.success(&format!(
            "Desktop entry '{}' written to {}",
            identifier,
            path.display()
        ));

        self.register(&path)?;

        Ok(path)
    }

    /// Arguments passed to the registration program for `path`.
    pub fn registration_args(&self, path: &Path) -> Vec<OsString> {
        vec![
            OsString::from(&self.config.dir_flag),
            self.config.install_dir.clone().into_os_string(),
            path.as_os_str().to_os_string(),
        ]
    }

    fn register(&self, path: &Path) -> Result<()> {
        let Some(program) = self.config.register_program.as_deref() else {
            debug!("Registration disabled, skipping {}", path.display());
            return Ok(());
        };

        let args = self.registration_args(path);
        self.runner.run(program, &args)?;
        debug!("Registered {} with {}", path.display(), program);
        Ok(())
    }

    fn ensure_install_dir(&self) -> Result<()> {
        let dir = &self.config.install_dir;

        if dir.exists() && !dir.is_dir() {
            return Err(DeskwriteError::config_with_path(
                "install directory is not a directory",
                dir,
                None,
            ));
        }

        fs::create_dir_all(dir).map_err(|e| {
            DeskwriteError::config_with_path(
                format!("failed to create install directory: {}", e),
                dir,
                Some(e),
            )
        })
    }
}
