//! Desktop entry model, identifiers and rendering.

mod desktop_entry;
mod identifier;

pub use desktop_entry::{
    DesktopEntry, DesktopEntryBuilder, EntryWarning, FieldValue, FIELD_COUNT,
};
pub use identifier::{slugify, validate_identifier};
