//! Interactive line-oriented editor driving a [`PaletteSession`].

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use palette_engine::PaletteSession;
use palette_types::{ColorField, ExportOutcome, MetaField, Role, VariantMode};
use palette_util::JsonFileExporter;
use tracing::debug;

use crate::render::{self, RenderOptions};

const HELP: &str = "\
Commands:
  list [query]                          list palettes, optionally filtered
  select <id>                           make a palette active
  variant <light|dark>                  choose the preview variant
  toggle                                flip between light and dark
  title <text>                          rename the custom draft
  subtitle <text>                       describe the custom draft
  color <mode> <role> <field> <value>   edit a draft color (field: name, hex, usage)
  save                                  add the draft to the library
  show                                  swatches of the active palette
  payload                               export JSON of the active palette
  export [path]                         write the active palette to disk
  help                                  this message
  quit                                  leave the studio";

/// One parsed studio input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioCommand {
    List(String),
    Select(String),
    Variant(VariantMode),
    Toggle,
    Meta(MetaField, String),
    Color {
        mode: VariantMode,
        role: Role,
        field: ColorField,
        value: String,
    },
    Save,
    Show,
    Payload,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl StudioCommand {
    /// Parse a line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let (keyword, rest) = next_word(line);
        let command = match keyword.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "list" | "ls" => StudioCommand::List(rest.to_string()),
            "select" | "use" => StudioCommand::Select(required(rest, "select <id>")?.to_string()),
            "variant" => StudioCommand::Variant(required(rest, "variant <light|dark>")?.parse()?),
            "toggle" => StudioCommand::Toggle,
            "title" => StudioCommand::Meta(MetaField::Title, rest.to_string()),
            "subtitle" | "description" => StudioCommand::Meta(MetaField::Subtitle, rest.to_string()),
            "color" => {
                let usage = "color <mode> <role> <name|hex|usage> <value>";
                let (mode, rest) = next_word(rest);
                let (role, rest) = next_word(rest);
                let (field, value) = next_word(rest);
                let field: ColorField = required(field, usage)?.parse()?;
                if field == ColorField::Hex && value.is_empty() {
                    bail!("usage: {usage}");
                }
                StudioCommand::Color {
                    mode: required(mode, usage)?.parse()?,
                    role: required(role, usage)?.parse()?,
                    field,
                    value: value.to_string(),
                }
            }
            "save" => StudioCommand::Save,
            "show" => StudioCommand::Show,
            "payload" | "json" => StudioCommand::Payload,
            "export" => StudioCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "help" | "?" => StudioCommand::Help,
            "quit" | "exit" | "q" => StudioCommand::Quit,
            other => bail!("unknown command '{other}' (type 'help')"),
        };
        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word; the remainder is trimmed.
fn next_word(input: &str) -> (&str, &str) {
    let trimmed = input.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(value)
}

/// Owns the session for the lifetime of the interactive loop.
pub struct Studio {
    session: PaletteSession,
    export_dir: PathBuf,
    overwrite: bool,
    render: RenderOptions,
}

impl Studio {
    pub fn new(session: PaletteSession, export_dir: PathBuf, overwrite: bool, render: RenderOptions) -> Self {
        Self {
            session,
            export_dir,
            overwrite,
            render,
        }
    }

    pub fn session(&self) -> &PaletteSession {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Palette Studio. Type 'help' for commands.")?;
        prompt(out)?;
        for line in input.lines() {
            let line = line.context("failed to read studio input")?;
            match StudioCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(StudioCommand::Quit)) => break,
                Ok(Some(command)) => self.apply(command, out)?,
                Err(error) => writeln!(out, "error: {error}")?,
            }
            prompt(out)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, command: StudioCommand, out: &mut impl Write) -> Result<()> {
        debug!(?command, "studio command");
        match command {
            StudioCommand::List(query) => {
                render::write_summaries(out, &self.session.summaries(&query), self.render)?;
            }
            StudioCommand::Select(id) => {
                if self.session.select_theme(&id) {
                    writeln!(out, "Active palette: {}", self.session.active_theme().title())?;
                } else {
                    writeln!(out, "No palette with id '{id}'.")?;
                }
            }
            StudioCommand::Variant(mode) => {
                self.session.select_variant(mode);
                writeln!(out, "Previewing {mode} variant.")?;
            }
            StudioCommand::Toggle => {
                let mode = self.session.toggle_variant();
                writeln!(out, "Previewing {mode} variant.")?;
            }
            StudioCommand::Meta(field, value) => {
                self.session.update_draft_meta(field, &value);
                writeln!(out, "Draft updated.")?;
            }
            StudioCommand::Color { mode, role, field, value } => {
                self.session.update_draft_color(mode, role, field, &value);
                let color = self.session.draft().variant(mode).color(role);
                writeln!(out, "Draft {mode} {role}: {} {} ({})", color.name(), color.hex(), color.usage())?;
            }
            StudioCommand::Save => {
                let saved = self.session.save_draft();
                writeln!(out, "Saved '{}' as {}.", saved.title(), saved.id())?;
            }
            StudioCommand::Show => {
                let theme = self.session.active_theme();
                render::write_swatches(out, theme, self.session.active_variant(), self.render)?;
            }
            StudioCommand::Payload => {
                render::write_payload(out, &self.session.derive_export_document())?;
            }
            StudioCommand::Export(path) => {
                let exporter = match path {
                    Some(path) => JsonFileExporter::for_file(palette_util::expand_tilde(&path.to_string_lossy())),
                    None => JsonFileExporter::for_directory(&self.export_dir),
                }
                .allow_overwrite(self.overwrite);
                write_outcome(out, &self.session.export_active_theme(&exporter))?;
            }
            StudioCommand::Help => writeln!(out, "{HELP}")?,
            StudioCommand::Quit => {}
        }
        Ok(())
    }
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Report an export outcome to the user.
pub fn write_outcome(out: &mut impl Write, outcome: &ExportOutcome) -> Result<()> {
    match outcome {
        ExportOutcome::Written(path) => writeln!(out, "Exported to {}", path.display())?,
        ExportOutcome::Cancelled => writeln!(out, "Export skipped: target file already exists (use --force to replace it).")?,
        ExportOutcome::Failed(message) => writeln!(out, "Export failed: {message}")?,
    }
    Ok(())
}
