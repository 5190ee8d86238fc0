//! Bundled palette themes and the blank custom draft.

mod presets;

use once_cell::sync::Lazy;
use palette_types::{PaletteTheme, PaletteVariant, Role, VariantMode};

pub use presets::PRESET_DEFINITIONS;

/// Identifier reserved for the live-edited custom draft.
pub const CUSTOM_THEME_ID: &str = "custom";

/// `(name, hex, usage)` for every role, in role order.
pub type RoleEntries = [(&'static str, &'static str, &'static str); 7];

/// Describes a preset palette shipped with the application.
#[derive(Clone, Copy, Debug)]
pub struct PresetDefinition {
    /// Canonical identifier used for selection and export file names.
    pub id: &'static str,
    /// Human-friendly display name.
    pub title: &'static str,
    /// Short description rendered under the title.
    pub subtitle: &'static str,
    pub dark: RoleEntries,
    pub light: RoleEntries,
}

impl PresetDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> PaletteTheme {
        PaletteTheme::new(
            self.id,
            self.title,
            self.subtitle,
            PaletteVariant::from_role_order(VariantMode::Light, self.light),
            PaletteVariant::from_role_order(VariantMode::Dark, self.dark),
        )
        .expect("preset variants are built with matching modes")
    }
}

static PRESETS: Lazy<Vec<PaletteTheme>> = Lazy::new(|| PRESET_DEFINITIONS.iter().map(PresetDefinition::build).collect());

/// All presets in display order.
pub fn presets() -> &'static [PaletteTheme] {
    &PRESETS
}

/// Locate a preset by id.
pub fn find_by_id(id: &str) -> Option<&'static PaletteTheme> {
    PRESETS.iter().find(|theme| theme.id() == id)
}

/// Fresh custom draft seeded with neutral defaults for both modes.
pub fn custom_draft() -> PaletteTheme {
    PaletteTheme::new(
        CUSTOM_THEME_ID,
        "Custom Theme",
        "Design your own palette from scratch",
        PaletteVariant::from_role_order(VariantMode::Light, draft_entries(VariantMode::Light)),
        PaletteVariant::from_role_order(VariantMode::Dark, draft_entries(VariantMode::Dark)),
    )
    .expect("draft variants are built with matching modes")
}

fn draft_entries(mode: VariantMode) -> RoleEntries {
    Role::ALL.map(|role| {
        let (name, usage) = draft_label(role);
        (name, draft_hex(role, mode), usage)
    })
}

fn draft_label(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Background => ("Background", "Main application background"),
        Role::Surface => ("Surface", "Cards and surfaces"),
        Role::Primary => ("Primary", "Primary buttons and highlights"),
        Role::Link => ("Link", "Links and interactive states"),
        Role::Text => ("Text", "Body and heading text"),
        Role::Muted => ("Muted", "Secondary text and placeholders"),
        Role::Border => ("Border", "Dividers, outlines, inputs"),
    }
}

fn draft_hex(role: Role, mode: VariantMode) -> &'static str {
    let dark = mode == VariantMode::Dark;
    match role {
        Role::Background if dark => "#0F1115",
        Role::Background => "#FFFFFF",
        Role::Surface if dark => "#181B21",
        Role::Surface => "#F3F4F6",
        Role::Primary => "#2563EB",
        Role::Link => "#38BDF8",
        Role::Text if dark => "#F4F4F5",
        Role::Text => "#0F172A",
        Role::Muted if dark => "#A1A1AA",
        Role::Muted => "#6B7280",
        Role::Border if dark => "#27272A",
        Role::Border => "#D1D5DB",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_id_matches_exactly() {
        assert_eq!(find_by_id("modern").map(PaletteTheme::title), Some("Modern Theme"));
        assert!(find_by_id("MODERN").is_none());
        assert!(find_by_id(CUSTOM_THEME_ID).is_none());
    }

    #[test]
    fn draft_defaults_differ_by_mode() {
        let draft = custom_draft();
        assert_eq!(draft.id(), CUSTOM_THEME_ID);
        assert_eq!(draft.variant(VariantMode::Dark).color(Role::Background).hex(), "#0F1115");
        assert_eq!(draft.variant(VariantMode::Light).color(Role::Background).hex(), "#FFFFFF");
        assert_eq!(
            draft.variant(VariantMode::Light).color(Role::Primary),
            draft.variant(VariantMode::Dark).color(Role::Primary)
        );
        assert_eq!(draft.variant(VariantMode::Dark).color(Role::Border).usage(), "Dividers, outlines, inputs");
    }

    #[test]
    fn presets_are_built_once() {
        assert!(std::ptr::eq(presets(), presets()));
    }
}
