//! Integration tests for the EntryWriter public interface.
//!
//! Registration is faked so nothing outside the temp directory is touched.

use deskwrite_core::{
    CommandRunner, DesktopEntry, DeskwriteError, EntryWriter, Notifier, Result, WriterConfig,
};
use std::ffi::OsString;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

struct NoopRunner;

impl CommandRunner for NoopRunner {
    fn run(&self, _program: &str, _args: &[OsString]) -> Result<()> {
        Ok(())
    }
}

struct FailingRunner;

impl CommandRunner for FailingRunner {
    fn run(&self, program: &str, _args: &[OsString]) -> Result<()> {
        Err(DeskwriteError::Execution {
            program: program.to_string(),
            message: "exited with status 1".to_string(),
            status: Some(1),
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}
}

fn writer_for(config: WriterConfig) -> EntryWriter<NoopRunner, SilentNotifier> {
    EntryWriter::with_collaborators(config, NoopRunner, SilentNotifier)
}

#[test]
fn test_end_to_end_name_from_identifier() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()));

    let entry = DesktopEntry::builder()
        .name("")
        .exec("/usr/bin/myapp")
        .terminal(true)
        .build();
    let path = writer.write("myapp", entry).unwrap();

    assert_eq!(path, temp_dir.path().join("myapp.desktop"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=myapp\n\
         Exec=/usr/bin/myapp\n\
         Terminal=true\n"
    );
}

#[test]
fn test_explicit_name_is_kept_and_empty_comment_omitted() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()));

    let entry = DesktopEntry::builder()
        .name("Editor X")
        .comment("")
        .icon("edit")
        .build();
    let path = writer.write("x", entry).unwrap();
    let content = fs::read_to_string(path).unwrap();

    assert!(content.lines().any(|l| l == "Name=Editor X"));
    assert!(content.lines().any(|l| l == "Icon=edit"));
    assert!(!content.contains("Comment"));
}

#[test]
fn test_first_line_is_group_header() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()));

    let entries = [
        DesktopEntry::default(),
        DesktopEntry::builder().name("A").terminal(true).build(),
        DesktopEntry::builder().entry_type("Link").build(),
    ];
    for (i, entry) in entries.into_iter().enumerate() {
        let path = writer.write(&format!("entry{}", i), entry).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().next(), Some("[Desktop Entry]"));
    }
}

#[test]
fn test_boolean_literals() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()));

    let on = writer
        .write("on", DesktopEntry::builder().terminal(true).build())
        .unwrap();
    let off = writer
        .write("off", DesktopEntry::builder().terminal(false).build())
        .unwrap();

    assert!(fs::read_to_string(on).unwrap().contains("\nTerminal=true\n"));
    assert!(fs::read_to_string(off).unwrap().contains("\nTerminal=false\n"));
}

#[test]
fn test_rewrite_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let entry = DesktopEntry::builder()
        .exec("/usr/bin/myapp %U")
        .categories("Utility;")
        .mime_type("x-scheme-handler/myapp;")
        .build();

    for atomic in [true, false] {
        let writer = writer_for(WriterConfig::new(temp_dir.path()).with_atomic(atomic));
        let path = writer.write("myapp", entry.clone()).unwrap();
        let first = fs::read(&path).unwrap();
        writer.write("myapp", entry.clone()).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_overwrite_truncates_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()).with_atomic(false));

    writer
        .write(
            "myapp",
            DesktopEntry::builder()
                .comment("a long comment that will disappear")
                .build(),
        )
        .unwrap();
    let path = writer.write("myapp", DesktopEntry::default()).unwrap();

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "[Desktop Entry]\nType=Application\nName=myapp\nTerminal=false\n"
    );
}

#[test]
fn test_creates_missing_install_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let install_dir = temp_dir.path().join("a").join("b").join("applications");
    let writer = writer_for(WriterConfig::new(&install_dir));

    let path = writer.write("myapp", DesktopEntry::default()).unwrap();

    assert!(install_dir.is_dir());
    assert!(path.is_file());
}

#[test]
fn test_registration_failure_keeps_file() {
    let temp_dir = TempDir::new().unwrap();
    let notifier = RecordingNotifier::default();
    let writer =
        EntryWriter::with_collaborators(WriterConfig::new(temp_dir.path()), FailingRunner, &notifier);

    let err = writer.write("myapp", DesktopEntry::default()).unwrap_err();

    assert!(matches!(err, DeskwriteError::Execution { status: Some(1), .. }));
    assert!(temp_dir.path().join("myapp.desktop").is_file());
    assert_eq!(notifier.messages.lock().unwrap().len(), 1);
}

#[cfg(unix)]
#[test]
fn test_unwritable_install_dir_is_config_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o500)).unwrap();

    // Root ignores directory permissions.
    if fs::write(locked.join("probe"), "").is_ok() {
        return;
    }

    let writer = writer_for(WriterConfig::new(locked.join("applications")));
    let err = writer.write("myapp", DesktopEntry::default()).unwrap_err();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o700)).unwrap();
    assert!(matches!(err, DeskwriteError::Config { .. }));
}

#[test]
fn test_distinct_identifiers_from_threads() {
    let temp_dir = TempDir::new().unwrap();
    let writer = writer_for(WriterConfig::new(temp_dir.path()));

    std::thread::scope(|scope| {
        for i in 0..8 {
            let writer = &writer;
            scope.spawn(move || {
                let entry = DesktopEntry::builder().exec(format!("/usr/bin/app{}", i)).build();
                writer.write(&format!("app{}", i), entry).unwrap();
            });
        }
    });

    for i in 0..8 {
        let content = fs::read_to_string(temp_dir.path().join(format!("app{}.desktop", i))).unwrap();
        assert!(content.contains(&format!("Exec=/usr/bin/app{}\n", i)));
    }
}
