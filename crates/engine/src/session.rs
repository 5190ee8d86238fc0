//! Mutable application state for a Palette Studio session.

use std::iter;

use chrono::Utc;
use palette_catalog::CUSTOM_THEME_ID;
use palette_types::{
    ColorField, ExportDocument, ExportOutcome, MetaField, PaletteColor, PaletteExporter, PaletteTheme, Role, VariantMode,
    suggested_file_name,
};
use tracing::{debug, info};

use crate::{
    draft_id::DraftIdAllocator,
    search::{ThemeOrigin, ThemeSummary, matches_query},
};

/// Working set of themes plus the user's current selection.
///
/// Presets never change after construction. The custom draft is edited in
/// place and saved snapshots are prepended to the library, newest first.
#[derive(Debug, Clone)]
pub struct PaletteSession {
    presets: Vec<PaletteTheme>,
    draft: PaletteTheme,
    saved: Vec<PaletteTheme>,
    active_theme_id: String,
    active_variant: VariantMode,
    /// Bumped on every draft edit; pairs with the selection as a memoization key.
    revision: u64,
    ids: DraftIdAllocator,
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteSession {
    /// Session over the bundled presets, with the custom draft active in dark mode.
    pub fn new() -> Self {
        Self::with_presets(palette_catalog::presets().to_vec())
    }

    pub fn with_presets(presets: Vec<PaletteTheme>) -> Self {
        Self {
            presets,
            draft: palette_catalog::custom_draft(),
            saved: Vec::new(),
            active_theme_id: CUSTOM_THEME_ID.to_string(),
            active_variant: VariantMode::default(),
            revision: 0,
            ids: DraftIdAllocator::new(),
        }
    }

    pub fn presets(&self) -> &[PaletteTheme] {
        &self.presets
    }

    pub fn draft(&self) -> &PaletteTheme {
        &self.draft
    }

    /// Saved snapshots, newest first.
    pub fn saved(&self) -> &[PaletteTheme] {
        &self.saved
    }

    pub fn active_theme_id(&self) -> &str {
        &self.active_theme_id
    }

    pub fn active_variant(&self) -> VariantMode {
        self.active_variant
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Combined collection in display order: draft, saved snapshots, presets.
    pub fn themes(&self) -> impl Iterator<Item = &PaletteTheme> {
        self.entries().map(|(_, theme)| theme)
    }

    fn entries(&self) -> impl Iterator<Item = (ThemeOrigin, &PaletteTheme)> {
        iter::once((ThemeOrigin::Draft, &self.draft))
            .chain(self.saved.iter().map(|theme| (ThemeOrigin::Saved, theme)))
            .chain(self.presets.iter().map(|theme| (ThemeOrigin::Preset, theme)))
    }

    pub fn find_theme(&self, id: &str) -> Option<&PaletteTheme> {
        self.themes().find(|theme| theme.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_theme(id).is_some()
    }

    /// The selected theme, or the first theme in the collection if the id no longer resolves.
    pub fn active_theme(&self) -> &PaletteTheme {
        self.find_theme(&self.active_theme_id).unwrap_or(&self.draft)
    }

    /// Colors of the active theme's active variant, in role order.
    pub fn active_swatches(&self) -> &[PaletteColor] {
        self.active_theme().variant(self.active_variant).colors()
    }

    /// Themes whose title or subtitle contain `query`, ignoring case.
    pub fn filter_themes(&self, query: &str) -> Vec<&PaletteTheme> {
        self.themes().filter(|theme| matches_query(theme, query)).collect()
    }

    /// List-view summaries for the themes matching `query`.
    pub fn summaries(&self, query: &str) -> Vec<ThemeSummary> {
        let active_id = self.active_theme().id();
        self.entries()
            .filter(|(_, theme)| matches_query(theme, query))
            .map(|(origin, theme)| ThemeSummary::new(theme, origin, theme.id() == active_id))
            .collect()
    }

    /// Make `id` the active theme. Unknown ids leave the selection untouched and return `false`.
    pub fn select_theme(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            debug!(theme_id = id, "ignoring selection of unknown theme");
            return false;
        }
        if self.active_theme_id != id {
            debug!(from = %self.active_theme_id, to = id, "active theme changed");
            self.active_theme_id = id.to_string();
        }
        true
    }

    pub fn select_variant(&mut self, mode: VariantMode) {
        self.active_variant = mode;
    }

    /// Flip between light and dark, returning the new mode.
    pub fn toggle_variant(&mut self) -> VariantMode {
        self.active_variant = self.active_variant.toggled();
        self.active_variant
    }

    pub fn update_draft_meta(&mut self, field: MetaField, value: &str) {
        self.draft.set_meta(field, value);
        self.revision += 1;
        debug!(?field, revision = self.revision, "draft metadata updated");
    }

    /// Edit one attribute of the draft color at `(mode, role)`; hex input is canonicalized.
    pub fn update_draft_color(&mut self, mode: VariantMode, role: Role, field: ColorField, value: &str) {
        self.draft.variant_mut(mode).color_mut(role).set_field(field, value);
        self.revision += 1;
        debug!(%mode, %role, ?field, revision = self.revision, "draft color updated");
    }

    /// Snapshot the draft into the library under a fresh id and select it.
    pub fn save_draft(&mut self) -> &PaletteTheme {
        self.save_draft_at(Utc::now().timestamp_millis())
    }

    /// Like [`save_draft`](Self::save_draft) with an explicit clock reading.
    pub fn save_draft_at(&mut self, now_millis: i64) -> &PaletteTheme {
        let (draft, saved, presets) = (&self.draft, &self.saved, &self.presets);
        let id = self.ids.next_id_at(now_millis, |candidate| {
            draft.id() == candidate || saved.iter().chain(presets).any(|theme| theme.id() == candidate)
        });
        let snapshot = self.draft.snapshot_as(id.clone());
        info!(theme_id = %id, title = snapshot.title(), "saved custom palette");
        self.saved.insert(0, snapshot);
        self.active_theme_id = id;
        &self.saved[0]
    }

    /// Export payload for the active theme; both variants are always included.
    pub fn derive_export_document(&self) -> ExportDocument {
        ExportDocument::from_theme(self.active_theme(), self.active_variant)
    }

    /// Hand the active theme's export document to `exporter`.
    ///
    /// The session state is not touched; the exporter's outcome is passed back
    /// to the caller unchanged.
    pub fn export_active_theme(&self, exporter: &dyn PaletteExporter) -> ExportOutcome {
        let document = self.derive_export_document();
        let file_name = suggested_file_name(&document.theme_id);
        debug!(theme_id = %document.theme_id, %file_name, "handing palette to exporter");
        exporter.export_palette(&document, &file_name)
    }
}
