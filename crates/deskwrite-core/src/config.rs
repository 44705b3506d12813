//! Centralized configuration for deskwrite.
//!
//! Constants describing the desktop entry format and the registration tool,
//! plus the per-writer [`WriterConfig`].

use crate::error::Result;
use crate::platform;
use std::path::{Path, PathBuf};

/// Desktop entry format constants.
pub struct EntryConfig;

impl EntryConfig {
    pub const GROUP_HEADER: &'static str = "[Desktop Entry]";
    pub const DEFAULT_TYPE: &'static str = "Application";
    pub const FILE_EXTENSION: &'static str = "desktop";
    pub const MAX_SLUG_LEN: usize = 64;
}

/// Registration tool constants.
pub struct RegistrationConfig;

impl RegistrationConfig {
    pub const PROGRAM: &'static str = "desktop-file-install";
    pub const DIR_FLAG: &'static str = "--dir";
}

/// Configuration for an [`EntryWriter`](crate::EntryWriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Directory the entry files are written into.
    pub install_dir: PathBuf,
    /// Registration program, `None` disables registration.
    pub register_program: Option<String>,
    /// Flag passed ahead of the install directory.
    pub dir_flag: String,
    /// File extension, without the leading dot.
    pub extension: String,
    /// Write through a temp file and rename over the target.
    pub atomic: bool,
    /// Set mode 0o755 on the written file (unix only).
    pub mark_executable: bool,
}

impl WriterConfig {
    /// Create a configuration targeting `install_dir` with default settings.
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            register_program: Some(RegistrationConfig::PROGRAM.to_string()),
            dir_flag: RegistrationConfig::DIR_FLAG.to_string(),
            extension: EntryConfig::FILE_EXTENSION.to_string(),
            atomic: true,
            mark_executable: false,
        }
    }

    /// Configuration targeting the current user's applications directory.
    pub fn user_default() -> Result<Self> {
        Ok(Self::new(platform::apps_dir()?))
    }

    /// Set the registration program.
    pub fn with_register_program(mut self, program: impl Into<String>) -> Self {
        self.register_program = Some(program.into());
        self
    }

    /// Disable the registration step.
    pub fn without_registration(mut self) -> Self {
        self.register_program = None;
        self
    }

    /// Set the directory flag passed to the registration program.
    pub fn with_dir_flag(mut self, flag: impl Into<String>) -> Self {
        self.dir_flag = flag.into();
        self
    }

    /// Toggle atomic write-then-rename.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Toggle marking the written file executable.
    pub fn with_mark_executable(mut self, mark_executable: bool) -> Self {
        self.mark_executable = mark_executable;
        self
    }

    /// Resolve the output path for an identifier.
    pub fn entry_path(&self, identifier: &str) -> PathBuf {
        self.install_dir
            .join(format!("{}.{}", identifier, self.extension))
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }
}
