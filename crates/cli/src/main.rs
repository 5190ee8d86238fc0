mod render;
mod studio;

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use palette_engine::PaletteSession;
use palette_types::{ExportOutcome, VariantMode};
use palette_util::{JsonFileExporter, UserPreferences, expand_tilde};
use tracing::warn;

use crate::render::RenderOptions;
use crate::studio::Studio;

#[derive(Debug, Parser)]
#[command(name = "palette-studio", version, about = "Browse, edit, and export color palette themes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available palettes
    List {
        /// Only show palettes whose title or description contains this text
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Show the swatches and export payload of a palette
    Show {
        id: String,
        #[arg(long, short)]
        variant: Option<VariantMode>,
    },
    /// Export a palette as JSON
    Export {
        id: String,
        #[arg(long, short)]
        variant: Option<VariantMode>,
        /// Write to this file instead of `<dir>/<id>-palette.json`
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Directory for the suggested file name (defaults to the saved export directory, then `.`)
        #[arg(long, short)]
        dir: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show or change stored preferences
    Config {
        /// Variant new sessions start in
        #[arg(long)]
        variant: Option<VariantMode>,
        /// Default export directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
        /// Forget all stored preferences
        #[arg(long, conflicts_with_all = ["variant", "export_dir"])]
        reset: bool,
    },
    /// Edit palettes interactively (default)
    Studio {
        #[arg(long, short)]
        dir: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let preferences = load_preferences();
    let render_options = RenderOptions {
        ansi_color: io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Studio { dir: None, force: false }) {
        Command::List { query } => {
            let session = PaletteSession::new();
            render::write_summaries(&mut out, &session.summaries(query.as_deref().unwrap_or_default()), render_options)?;
        }
        Command::Show { id, variant } => {
            let session = session_for(&id, variant.or(preferences.preferred_variant()))?;
            render::write_swatches(&mut out, session.active_theme(), session.active_variant(), render_options)?;
            writeln!(out)?;
            render::write_payload(&mut out, &session.derive_export_document())?;
        }
        Command::Export {
            id,
            variant,
            output,
            dir,
            force,
        } => {
            let session = session_for(&id, variant.or(preferences.preferred_variant()))?;
            let exporter = match output {
                Some(path) => JsonFileExporter::for_file(expand_tilde(&path.to_string_lossy())),
                None => JsonFileExporter::for_directory(export_dir(dir, &preferences)),
            }
            .allow_overwrite(force);
            let outcome = session.export_active_theme(&exporter);
            studio::write_outcome(&mut out, &outcome)?;
            if let ExportOutcome::Failed(message) = outcome {
                bail!("export of '{id}' failed: {message}");
            }
        }
        Command::Config {
            variant,
            export_dir: directory,
            reset,
        } => {
            if reset {
                preferences.set_preferred_variant(None)?;
                preferences.set_export_directory(None)?;
            }
            if let Some(variant) = variant {
                preferences.set_preferred_variant(Some(variant))?;
            }
            if let Some(directory) = directory {
                preferences.set_export_directory(Some(expand_tilde(&directory.to_string_lossy())))?;
            }
            writeln!(out, "# {}", preferences.path().display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&preferences.snapshot())?)?;
        }
        Command::Studio { dir, force } => {
            let mut session = PaletteSession::new();
            if let Some(variant) = preferences.preferred_variant() {
                session.select_variant(variant);
            }
            let mut studio = Studio::new(session, export_dir(dir, &preferences), force, render_options);
            studio.run(io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(error = %error, "preferences unavailable; using in-memory defaults");
        UserPreferences::ephemeral()
    })
}

/// Fresh session with `id` active in the requested variant.
fn session_for(id: &str, variant: Option<VariantMode>) -> Result<PaletteSession> {
    let mut session = PaletteSession::new();
    if !session.select_theme(id) {
        let known: Vec<&str> = session.themes().map(|theme| theme.id()).collect();
        bail!("unknown palette '{id}' (known palettes: {})", known.join(", "));
    }
    if let Some(variant) = variant {
        session.select_variant(variant);
    }
    Ok(session)
}

fn export_dir(explicit: Option<PathBuf>, preferences: &UserPreferences) -> PathBuf {
    explicit
        .map(|path| expand_tilde(&path.to_string_lossy()))
        .or_else(|| preferences.export_directory())
        .unwrap_or_else(|| PathBuf::from("."))
}
