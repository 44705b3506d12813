//! deskwrite - write a desktop entry and register it.
//!
//! Builds a [`DesktopEntry`] from flags (optionally layered over a JSON
//! document), writes it to `<install-dir>/<id>.desktop` and runs the
//! registration tool on it.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deskwrite_core::{
    platform, slugify, DesktopEntry, DeskwriteError, EntryWriter, WriterConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "deskwrite")]
#[command(about = "Write a desktop entry and register it with desktop-file-install")]
struct Args {
    /// File stem of the entry (defaults to a slug of --name)
    #[arg(long)]
    id: Option<String>,

    /// Base entry as JSON keyed by desktop entry names; flags override it
    #[arg(long, value_name = "FILE")]
    from_json: Option<PathBuf>,

    /// Entry type
    #[arg(long = "type", value_name = "TYPE")]
    entry_type: Option<String>,

    /// Display name (defaults to the id)
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    comment: Option<String>,

    /// Working directory of the program
    #[arg(long)]
    path: Option<String>,

    /// Command line to execute
    #[arg(long)]
    exec: Option<String>,

    /// Icon name or path
    #[arg(long)]
    icon: Option<String>,

    /// Run in a terminal (`--terminal` or `--terminal=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    terminal: Option<bool>,

    /// `;`-separated categories
    #[arg(long)]
    categories: Option<String>,

    /// `;`-separated MIME types
    #[arg(long)]
    mime_type: Option<String>,

    #[arg(long)]
    generic_name: Option<String>,

    #[arg(long)]
    startup_notify: Option<String>,

    /// Target directory (defaults to ~/.local/share/applications)
    #[arg(long)]
    install_dir: Option<PathBuf>,

    /// Registration program
    #[arg(long, default_value = "desktop-file-install")]
    register_program: String,

    /// Skip the registration step
    #[arg(long)]
    no_register: bool,

    /// Truncate and write in place instead of write-then-rename
    #[arg(long)]
    no_atomic: bool,

    /// Mark the written file executable
    #[arg(long)]
    executable: bool,

    /// Print the rendered entry and exit without writing
    #[arg(long)]
    dry_run: bool,

    /// Refuse to write entries with line breaks in values
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Layer flag values over the JSON base entry, if any.
    fn entry(&self) -> Result<DesktopEntry> {
        let mut entry = match &self.from_json {
            Some(path) => DesktopEntry::from_json_file(path)
                .with_context(|| format!("loading entry from {}", path.display()))?,
            None => DesktopEntry::default(),
        };

        let overrides = [
            (&self.entry_type, &mut entry.entry_type),
            (&self.name, &mut entry.name),
            (&self.comment, &mut entry.comment),
            (&self.path, &mut entry.path),
            (&self.exec, &mut entry.exec),
            (&self.icon, &mut entry.icon),
            (&self.categories, &mut entry.categories),
            (&self.mime_type, &mut entry.mime_type),
            (&self.generic_name, &mut entry.generic_name),
            (&self.startup_notify, &mut entry.startup_notify),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }
        if let Some(terminal) = self.terminal {
            entry.terminal = terminal;
        }

        Ok(entry)
    }

    fn identifier(&self, entry: &DesktopEntry) -> Result<String> {
        if let Some(id) = &self.id {
            return Ok(id.clone());
        }
        let slug = slugify(&entry.name);
        if slug.is_empty() {
            bail!("no --id given and no usable --name to derive one from");
        }
        Ok(slug)
    }

    fn writer_config(&self) -> Result<WriterConfig> {
        let config = match &self.install_dir {
            Some(dir) => WriterConfig::new(dir),
            None => WriterConfig::user_default()?,
        };
        let config = config
            .with_register_program(&self.register_program)
            .with_atomic(!self.no_atomic)
            .with_mark_executable(self.executable);

        Ok(if self.no_register {
            config.without_registration()
        } else {
            config
        })
    }
}

fn run(args: &Args) -> Result<()> {
    let entry = args.entry()?;
    let identifier = args.identifier(&entry)?;

    let warnings = entry.lint();
    for warning in &warnings {
        warn!("{}", warning);
    }
    if args.strict && !warnings.is_empty() {
        bail!("refusing to write '{}': {} invalid value(s)", identifier, warnings.len());
    }

    let config = args.writer_config()?;
    if let Some(program) = config.register_program.as_deref() {
        if !args.dry_run && !platform::command_exists(program) {
            warn!("Registration program '{}' not found in PATH", program);
        }
    }

    let writer = EntryWriter::new(config);

    if args.dry_run {
        let (path, content) = writer.preview(&identifier, entry)?;
        info!("Dry run, would write {}", path.display());
        print!("{}", content);
        return Ok(());
    }

    debug!("Writing entry '{}'", identifier);
    writer.write(&identifier, entry)?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<DeskwriteError>()
        .and_then(|e| u8::try_from(e.exit_code()).ok())
        .unwrap_or(1)
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}
