//! JSON file writer used as the save target for exported palettes.

use std::fs;
use std::path::{Path, PathBuf};

use palette_types::{ExportDocument, ExportOutcome, PaletteExporter};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize palette: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where exported files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// Write `<directory>/<suggested file name>`.
    Directory(PathBuf),
    /// Write exactly this path, ignoring the suggested name.
    File(PathBuf),
}

/// Writes export documents as pretty-printed JSON.
///
/// An existing file is only replaced when overwriting is allowed; otherwise the
/// export resolves as [`ExportOutcome::Cancelled`], the same way a dismissed
/// save dialog would.
#[derive(Debug, Clone)]
pub struct JsonFileExporter {
    target: ExportTarget,
    overwrite: bool,
}

impl JsonFileExporter {
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            target: ExportTarget::Directory(directory.into()),
            overwrite: false,
        }
    }

    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: ExportTarget::File(path.into()),
            overwrite: false,
        }
    }

    pub fn allow_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn target(&self) -> &ExportTarget {
        &self.target
    }

    /// Final path for a document offered under `suggested_file_name`.
    pub fn resolve_path(&self, suggested_file_name: &str) -> PathBuf {
        match &self.target {
            ExportTarget::Directory(directory) => directory.join(suggested_file_name),
            ExportTarget::File(path) => path.clone(),
        }
    }

    /// Write the document, returning `None` when an existing file blocks the write.
    pub fn write(&self, document: &ExportDocument, suggested_file_name: &str) -> Result<Option<PathBuf>, ExportError> {
        let path = self.resolve_path(suggested_file_name);
        if path.exists() && !self.overwrite {
            return Ok(None);
        }
        let json = document.to_pretty_json()?;
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }
        fs::write(&path, json).map_err(|source| io_error(&path, source))?;
        Ok(Some(path))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl PaletteExporter for JsonFileExporter {
    fn export_palette(&self, document: &ExportDocument, suggested_file_name: &str) -> ExportOutcome {
        match self.write(document, suggested_file_name) {
            Ok(Some(path)) => {
                info!(theme_id = %document.theme_id, path = %path.display(), "palette exported");
                ExportOutcome::Written(path)
            }
            Ok(None) => {
                info!(
                    theme_id = %document.theme_id,
                    path = %self.resolve_path(suggested_file_name).display(),
                    "export skipped; file already exists"
                );
                ExportOutcome::Cancelled
            }
            Err(error) => {
                warn!(theme_id = %document.theme_id, error = %error, "palette export failed");
                ExportOutcome::Failed(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_types::{PaletteTheme, PaletteVariant, VariantMode};
    use serde_json::Value;
    use tempfile::tempdir;

    fn document() -> ExportDocument {
        let entries = [
            ("Night", "#111111", "Main background"),
            ("Panel", "#222222", "Surfaces"),
            ("Accent", "#3B82F6", "Primary actions"),
            ("Link", "#60A5FA", "Links"),
            ("Ink", "#EEEEEE", "Text"),
            ("Muted", "#999999", "Muted text"),
            ("Line", "#333333", "Borders"),
        ];
        let theme = PaletteTheme::new(
            "night",
            "Night",
            "Test palette",
            PaletteVariant::from_role_order(VariantMode::Light, entries),
            PaletteVariant::from_role_order(VariantMode::Dark, entries),
        )
        .unwrap();
        ExportDocument::from_theme(&theme, VariantMode::Dark)
    }

    #[test]
    fn writes_into_directory_with_suggested_name() {
        let dir = tempdir().unwrap();
        let exporter = JsonFileExporter::for_directory(dir.path().join("exports"));
        let outcome = exporter.export_palette(&document(), "night-palette.json");

        let expected = dir.path().join("exports").join("night-palette.json");
        assert_eq!(outcome, ExportOutcome::Written(expected.clone()));
        let written: Value = serde_json::from_str(&fs::read_to_string(expected).unwrap()).unwrap();
        assert_eq!(written["themeId"], "night");
        assert_eq!(written["variants"]["light"]["primary"]["hex"], "#3B82F6");
    }

    #[test]
    fn explicit_file_ignores_suggested_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mine.json");
        let exporter = JsonFileExporter::for_file(&path);
        assert_eq!(
            exporter.export_palette(&document(), "night-palette.json"),
            ExportOutcome::Written(path.clone())
        );
        assert!(path.exists());
    }

    #[test]
    fn existing_file_is_kept_unless_overwrite_allowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("night-palette.json");
        fs::write(&path, "original").unwrap();

        let exporter = JsonFileExporter::for_directory(dir.path());
        assert_eq!(exporter.export_palette(&document(), "night-palette.json"), ExportOutcome::Cancelled);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        let exporter = exporter.allow_overwrite(true);
        assert_eq!(
            exporter.export_palette(&document(), "night-palette.json"),
            ExportOutcome::Written(path.clone())
        );
        assert!(fs::read_to_string(&path).unwrap().contains("\"themeId\": \"night\""));
    }

    #[test]
    fn unwritable_target_reports_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let exporter = JsonFileExporter::for_directory(blocker.join("sub"));
        match exporter.export_palette(&document(), "night-palette.json") {
            ExportOutcome::Failed(message) => assert!(message.contains("failed to write"), "{message}"),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
