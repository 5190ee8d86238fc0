use std::collections::HashSet;

use palette_engine::PaletteSession;
use palette_types::{ColorField, MetaField, Role, VariantMode};

fn assert_draft_covers_roles(session: &PaletteSession) {
    for mode in VariantMode::ALL {
        let roles: Vec<Role> = session.draft().variant(mode).colors().iter().map(|c| c.role()).collect();
        assert_eq!(roles, Role::ALL.to_vec(), "{mode} roles after edit");
    }
}

#[test]
fn editing_dark_primary_leaves_light_untouched() {
    let mut session = PaletteSession::new();
    let light_before = session.derive_export_document().variants.light[&Role::Primary].hex.clone();

    session.update_draft_color(VariantMode::Dark, Role::Primary, ColorField::Hex, "ff0000");

    let document = session.derive_export_document();
    assert_eq!(document.theme_id, "custom");
    assert_eq!(document.variants.dark[&Role::Primary].hex, "#FF0000");
    assert_eq!(document.variants.light[&Role::Primary].hex, light_before);
}

#[test]
fn selecting_modern_exports_its_metadata() {
    let mut session = PaletteSession::new();
    session.select_theme("modern");
    let document = session.derive_export_document();
    assert_eq!(document.theme_id, "modern");
    assert_eq!(document.name, "Modern Theme");
    assert_eq!(document.description, "Sleek interface with azure accents");
    assert_eq!(document.current_variant, VariantMode::Dark);
}

#[test]
fn immediate_saves_get_distinct_ids() {
    let mut session = PaletteSession::new();
    let first = session.save_draft().id().to_string();
    let second = session.save_draft().id().to_string();

    assert_eq!(session.saved().len(), 2);
    assert_ne!(first, second);
    assert_eq!(session.active_theme_id(), second);

    let ids: Vec<&str> = session.themes().map(|theme| theme.id()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len(), "ids collide: {ids:?}");
}

#[test]
fn derivation_is_pure() {
    let mut session = PaletteSession::new();
    session.update_draft_meta(MetaField::Subtitle, "Late night editing");
    let first = session.derive_export_document();
    let second = session.derive_export_document();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).expect("json"),
        serde_json::to_value(&second).expect("json")
    );
}

#[test]
fn role_invariant_holds_across_edits() {
    let mut session = PaletteSession::new();
    for (index, role) in Role::ALL.into_iter().enumerate() {
        for mode in VariantMode::ALL {
            session.update_draft_color(mode, role, ColorField::Hex, &format!("{index}{index}{index}{index}{index}{index}"));
            session.update_draft_color(mode, role, ColorField::Name, "Renamed");
            assert_draft_covers_roles(&session);
        }
    }
    session.save_draft();
    let snapshot = &session.saved()[0];
    for mode in VariantMode::ALL {
        assert_eq!(snapshot.variant(mode).colors().len(), Role::ALL.len());
    }
}

#[test]
fn malformed_hex_is_stored_canonicalized() {
    let mut session = PaletteSession::new();
    session.update_draft_color(VariantMode::Light, Role::Border, ColorField::Hex, "zzzzzz");
    let document = session.derive_export_document();
    assert_eq!(document.variants.light[&Role::Border].hex, "#ZZZZZZ");
}

#[test]
fn saved_snapshot_exports_under_its_own_id() {
    let mut session = PaletteSession::new();
    session.update_draft_meta(MetaField::Title, "Harbor");
    let id = session.save_draft().id().to_string();
    session.update_draft_meta(MetaField::Title, "Another");

    let document = session.derive_export_document();
    assert_eq!(document.theme_id, id);
    assert_eq!(document.name, "Harbor");
    assert_eq!(document.suggested_file_name(), format!("{id}-palette.json"));
}
