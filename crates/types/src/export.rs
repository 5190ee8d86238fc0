//! Export payload written when a palette leaves the application.
//!
//! The JSON shape is a stable file format: camelCase top-level keys, both
//! variants always present, and role keys emitted in display order.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{PaletteTheme, Role, VariantMode};

/// Name, hex and usage of one role inside an exported variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub name: String,
    pub hex: String,
    pub usage: String,
}

/// Role-keyed colors of one variant, ordered like [`Role::ALL`].
pub type RoleMap = IndexMap<Role, RoleEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportVariants {
    pub light: RoleMap,
    pub dark: RoleMap,
}

/// Mode-complete snapshot of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub theme_id: String,
    pub name: String,
    pub description: String,
    pub current_variant: VariantMode,
    pub variants: ExportVariants,
}

impl ExportDocument {
    pub fn from_theme(theme: &PaletteTheme, current_variant: VariantMode) -> Self {
        Self {
            theme_id: theme.id().to_string(),
            name: theme.title().to_string(),
            description: theme.subtitle().to_string(),
            current_variant,
            variants: ExportVariants {
                light: theme.role_map(VariantMode::Light),
                dark: theme.role_map(VariantMode::Dark),
            },
        }
    }

    pub fn variant(&self, mode: VariantMode) -> &RoleMap {
        match mode {
            VariantMode::Light => &self.variants.light,
            VariantMode::Dark => &self.variants.dark,
        }
    }

    /// Pretty-printed UTF-8 JSON as written to disk.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// File name offered to the save target for this document.
    pub fn suggested_file_name(&self) -> String {
        suggested_file_name(&self.theme_id)
    }
}

/// `"<theme id>-palette.json"`.
pub fn suggested_file_name(theme_id: &str) -> String {
    format!("{theme_id}-palette.json")
}

/// How a hand-off to a [`PaletteExporter`] resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to this path.
    Written(PathBuf),
    /// The save target declined the write (for example an existing file that may not be replaced).
    Cancelled,
    /// Writing failed; the message describes why.
    Failed(String),
}

/// Save-file collaborator that receives export documents.
pub trait PaletteExporter {
    fn export_palette(&self, document: &ExportDocument, suggested_file_name: &str) -> ExportOutcome;
}
