//! Desktop entry (.desktop file) model and serialization.
//!
//! Implements the `key=value` subset of the XDG Desktop Entry Specification
//! that launchers need. Keys are emitted in declaration order; empty string
//! values are omitted and values are written verbatim.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::EntryConfig;
use crate::error::{DeskwriteError, Result};

/// A desktop entry representation.
///
/// Serde names match the on-disk keys, so a JSON document such as
/// `{"Name": "Editor", "Terminal": true}` deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesktopEntry {
    /// Entry type (usually "Application").
    #[serde(rename = "Type")]
    pub entry_type: String,
    /// Entry name (shown in menus). Falls back to the identifier when empty.
    #[serde(rename = "Name")]
    pub name: String,
    /// Comment/description.
    #[serde(rename = "Comment")]
    pub comment: String,
    /// Working directory of the program.
    #[serde(rename = "Path")]
    pub path: String,
    /// Executable command line.
    #[serde(rename = "Exec")]
    pub exec: String,
    /// Icon name or path.
    #[serde(rename = "Icon")]
    pub icon: String,
    /// Whether to run in a terminal.
    #[serde(rename = "Terminal")]
    pub terminal: bool,
    /// Categories, already `;`-joined.
    #[serde(rename = "Categories")]
    pub categories: String,
    /// MIME types, already `;`-joined.
    #[serde(rename = "MimeType")]
    pub mime_type: String,
    #[serde(rename = "GenericName")]
    pub generic_name: String,
    /// Raw `StartupNotify` value; empty leaves the key out.
    #[serde(rename = "StartupNotify")]
    pub startup_notify: String,
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            entry_type: EntryConfig::DEFAULT_TYPE.to_string(),
            name: String::new(),
            comment: String::new(),
            path: String::new(),
            exec: String::new(),
            icon: String::new(),
            terminal: false,
            categories: String::new(),
            mime_type: String::new(),
            generic_name: String::new(),
            startup_notify: String::new(),
        }
    }
}

/// Value of a single entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Empty text values are skipped when rendering. Flags never are.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(true) => f.write_str("true"),
            FieldValue::Flag(false) => f.write_str("false"),
        }
    }
}

/// Number of keys a [`DesktopEntry`] can emit.
pub const FIELD_COUNT: usize = 11;

/// A suspicious value found by [`DesktopEntry::lint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

impl DesktopEntry {
    /// Create a new desktop entry builder.
    pub fn builder() -> DesktopEntryBuilder {
        DesktopEntryBuilder::new()
    }

    /// Load an entry from a JSON document keyed by desktop entry names.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| DeskwriteError::io_with_path(e, path))?;
        serde_json::from_str(&contents).map_err(|e| DeskwriteError::Json {
            message: format!("Failed to parse {}: {}", path.display(), e),
            source: Some(e),
        })
    }

    /// All fields as `(key, value)` pairs, in the order they are written.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); FIELD_COUNT] {
        [
            ("Type", FieldValue::Text(&self.entry_type)),
            ("Name", FieldValue::Text(&self.name)),
            ("Comment", FieldValue::Text(&self.comment)),
            ("Path", FieldValue::Text(&self.path)),
            ("Exec", FieldValue::Text(&self.exec)),
            ("Icon", FieldValue::Text(&self.icon)),
            ("Terminal", FieldValue::Flag(self.terminal)),
            ("Categories", FieldValue::Text(&self.categories)),
            ("MimeType", FieldValue::Text(&self.mime_type)),
            ("GenericName", FieldValue::Text(&self.generic_name)),
            ("StartupNotify", FieldValue::Text(&self.startup_notify)),
        ]
    }

    /// Fill in `Name` from the identifier when it is empty.
    pub fn apply_name_fallback(&mut self, identifier: &str) {
        if self.name.is_empty() {
            self.name = identifier.to_string();
        }
    }

    /// Generate the .desktop file content.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Report values that would break the line-oriented format.
    ///
    /// Values are still written verbatim; callers decide whether to refuse.
    pub fn lint(&self) -> Vec<EntryWarning> {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| match value {
                FieldValue::Text(s) if s.contains(['\n', '\r']) => Some(EntryWarning {
                    key,
                    message: "value contains a line break".to_string(),
                }),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for DesktopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", EntryConfig::GROUP_HEADER)?;
        for (key, value) in self.fields() {
            if value.is_empty() {
                continue;
            }
            writeln!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Builder for desktop entries.
#[derive(Debug, Default)]
pub struct DesktopEntryBuilder {
    entry: DesktopEntry,
}

impl DesktopEntryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing entry.
    pub fn from_entry(entry: DesktopEntry) -> Self {
        Self { entry }
    }

    /// Set the entry type.
    pub fn entry_type(mut self, entry_type: impl Into<String>) -> Self {
        self.entry.entry_type = entry_type.into();
        self
    }

    /// Set the entry name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entry.name = name.into();
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.entry.comment = comment.into();
        self
    }

    /// Set the working directory.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.entry.path = path.into();
        self
    }

    /// Set the executable command.
    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.entry.exec = exec.into();
        self
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entry.icon = icon.into();
        self
    }

    /// Set whether to run in terminal.
    pub fn terminal(mut self, terminal: bool) -> Self {
        self.entry.terminal = terminal;
        self
    }

    /// Set categories from a raw `;`-joined string.
    pub fn categories(mut self, categories: impl Into<String>) -> Self {
        self.entry.categories = categories.into();
        self
    }

    /// Append a category, keeping the trailing `;` the spec recommends.
    pub fn add_category(mut self, category: impl AsRef<str>) -> Self {
        let categories = &mut self.entry.categories;
        if !categories.is_empty() && !categories.ends_with(';') {
            categories.push(';');
        }
        categories.push_str(category.as_ref());
        categories.push(';');
        self
    }

    /// Set MIME types from a raw `;`-joined string.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.entry.mime_type = mime_type.into();
        self
    }

    pub fn generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.entry.generic_name = generic_name.into();
        self
    }

    pub fn startup_notify(mut self, startup_notify: impl Into<String>) -> Self {
        self.entry.startup_notify = startup_notify.into();
        self
    }

    /// Build the desktop entry.
    pub fn build(self) -> DesktopEntry {
        self.entry
    }
}
