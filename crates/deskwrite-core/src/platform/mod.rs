//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here:
//! - `paths` - Platform-specific directories and tool lookup
//! - `permissions` - File permission handling (executable bits)

pub mod paths;
pub mod permissions;

pub use paths::{apps_dir, command_exists};
pub use permissions::{is_executable, set_executable};
