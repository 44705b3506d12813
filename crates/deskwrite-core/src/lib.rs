//! deskwrite core - desktop entry generation and registration.
//!
//! Renders a [`DesktopEntry`] into the XDG `.desktop` format, writes it to
//! `<install_dir>/<identifier>.desktop` and hands the file to a registration
//! tool (`desktop-file-install` by default).
//!
//! # Example
//!
//! ```rust,no_run
//! use deskwrite_core::{DesktopEntry, EntryWriter, WriterConfig};
//!
//! fn main() -> deskwrite_core::Result<()> {
//!     let writer = EntryWriter::new(WriterConfig::user_default()?);
//!
//!     let entry = DesktopEntry::builder()
//!         .exec("/usr/bin/myapp")
//!         .terminal(true)
//!         .build();
//!
//!     let path = writer.write("myapp", entry)?;
//!     println!("Installed {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod platform;
pub mod writer;

// Re-export commonly used types
pub use config::{EntryConfig, RegistrationConfig, WriterConfig};
pub use entry::{slugify, validate_identifier, DesktopEntry, DesktopEntryBuilder, EntryWarning};
pub use error::{DeskwriteError, Result};
pub use writer::{CommandRunner, EntryWriter, Notifier, SystemCommandRunner, TracingNotifier};
