use std::collections::HashSet;

use palette_catalog::{CUSTOM_THEME_ID, PRESET_DEFINITIONS, custom_draft, presets};
use palette_types::{PaletteTheme, Role, VariantMode};

fn assert_role_coverage(theme: &PaletteTheme) {
    for mode in VariantMode::ALL {
        let variant = theme.variant(mode);
        assert_eq!(variant.mode(), mode, "{} {mode} reports wrong mode", theme.id());
        let roles: Vec<Role> = variant.colors().iter().map(|color| color.role()).collect();
        assert_eq!(roles, Role::ALL.to_vec(), "{} {mode} roles: {:?}", theme.id(), roles);
    }
}

#[test]
fn every_preset_covers_each_role_once_per_mode() {
    assert!(!presets().is_empty());
    for theme in presets() {
        assert_role_coverage(theme);
    }
}

#[test]
fn custom_draft_covers_each_role_once_per_mode() {
    assert_role_coverage(&custom_draft());
}

#[test]
fn preset_ids_are_unique_and_distinct_from_custom() {
    let mut seen = HashSet::new();
    for theme in presets() {
        assert_ne!(theme.id(), CUSTOM_THEME_ID);
        assert!(seen.insert(theme.id()), "duplicate preset id {}", theme.id());
    }
    assert_eq!(seen.len(), PRESET_DEFINITIONS.len());
}

#[test]
fn preset_order_follows_definitions() {
    let ids: Vec<&str> = presets().iter().map(PaletteTheme::id).collect();
    assert_eq!(ids.first(), Some(&"modern"));
    assert_eq!(ids.last(), Some(&"professional-slate"));
    assert_eq!(ids.len(), 14);
}

#[test]
fn every_hex_is_canonical() {
    let draft = custom_draft();
    for theme in presets().iter().chain(std::iter::once(&draft)) {
        for mode in VariantMode::ALL {
            for color in theme.variant(mode).colors() {
                let hex = color.hex();
                assert_eq!(hex.len(), 7, "{} {mode} {}: {hex}", theme.id(), color.role());
                assert!(hex.starts_with('#'));
                assert_eq!(hex, hex.to_uppercase());
                assert!(color.rgb().is_some(), "{hex} should decode");
            }
        }
    }
}
