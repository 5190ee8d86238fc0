use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod export;

pub use export::{ExportDocument, ExportOutcome, ExportVariants, PaletteExporter, RoleEntry, RoleMap, suggested_file_name};

/// Semantic color slot every palette variant must define.
///
/// The declaration order is the display order; `Ord` follows it so sorting a
/// variant's colors by role yields the canonical listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Background,
    Surface,
    Primary,
    Link,
    Text,
    Muted,
    Border,
}

impl Role {
    /// Every role in display order.
    pub const ALL: [Role; 7] = [
        Role::Background,
        Role::Surface,
        Role::Primary,
        Role::Link,
        Role::Text,
        Role::Muted,
        Role::Border,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Background => "background",
            Role::Surface => "surface",
            Role::Primary => "primary",
            Role::Link => "link",
            Role::Text => "text",
            Role::Muted => "muted",
            Role::Border => "border",
        }
    }

    /// Position of the role inside [`Role::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when a string does not name a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color role '{0}' (expected one of background, surface, primary, link, text, muted, border)")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Appearance mode of a palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantMode {
    Light,
    #[default]
    Dark,
}

impl VariantMode {
    pub const ALL: [VariantMode; 2] = [VariantMode::Light, VariantMode::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            VariantMode::Light => "light",
            VariantMode::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            VariantMode::Light => VariantMode::Dark,
            VariantMode::Dark => VariantMode::Light,
        }
    }
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant mode '{0}' (expected light or dark)")]
pub struct ParseVariantModeError(pub String);

impl FromStr for VariantMode {
    type Err = ParseVariantModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(VariantMode::Light),
            "dark" => Ok(VariantMode::Dark),
            _ => Err(ParseVariantModeError(s.to_string())),
        }
    }
}

/// Editable metadata on a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaField {
    Title,
    Subtitle,
}

/// Editable attribute on a single color entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorField {
    Name,
    Hex,
    Usage,
}

/// Error returned when a field name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} field '{value}'")]
pub struct ParseFieldError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for MetaField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "name" => Ok(MetaField::Title),
            "subtitle" | "description" => Ok(MetaField::Subtitle),
            _ => Err(ParseFieldError {
                kind: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ColorField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ColorField::Name),
            "hex" => Ok(ColorField::Hex),
            "usage" => Ok(ColorField::Usage),
            _ => Err(ParseFieldError {
                kind: "color",
                value: s.to_string(),
            }),
        }
    }
}

/// Canonicalize user-entered hex text: ensure a leading `#` and uppercase it.
///
/// The digits themselves are not validated; `"zzzzzz"` becomes `"#ZZZZZZ"`.
pub fn canonical_hex(input: &str) -> String {
    if input.starts_with('#') {
        input.to_uppercase()
    } else {
        format!("#{input}").to_uppercase()
    }
}

/// Decode `#RRGGBB` (either case) into RGB components; anything else yields `None`.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// One color assigned to a role inside a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    role: Role,
    name: String,
    hex: String,
    usage: String,
}

impl PaletteColor {
    /// Build a color, canonicalizing `hex`.
    pub fn new(role: Role, name: impl Into<String>, hex: &str, usage: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            hex: canonical_hex(hex),
            usage: usage.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical `#RRGGBB` text (uppercase, `#`-prefixed).
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Overwrite one attribute. Hex values are canonicalized, other values are stored verbatim.
    pub fn set_field(&mut self, field: ColorField, value: &str) {
        match field {
            ColorField::Name => self.name = value.to_string(),
            ColorField::Hex => self.hex = canonical_hex(value),
            ColorField::Usage => self.usage = value.to_string(),
        }
    }

    /// Decode the hex value into RGB components when it is a well-formed `#RRGGBB`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_rgb(&self.hex)
    }

    pub fn to_entry(&self) -> RoleEntry {
        RoleEntry {
            name: self.name.clone(),
            hex: self.hex.clone(),
            usage: self.usage.clone(),
        }
    }
}

/// Violations of the one-color-per-role rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("variant is missing a color for role '{0}'")]
    MissingRole(Role),
    #[error("variant defines role '{0}' more than once")]
    DuplicateRole(Role),
    #[error("expected a {expected} variant but got {found}")]
    ModeMismatch { expected: VariantMode, found: VariantMode },
}

/// Light or dark appearance of a theme holding exactly one color per [`Role`].
///
/// Colors are kept in role order and can only be edited in place, so the set
/// of roles never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteVariant {
    mode: VariantMode,
    colors: Vec<PaletteColor>,
}

impl PaletteVariant {
    /// Assign roles by position from seven `(name, hex, usage)` triples.
    pub fn from_role_order(mode: VariantMode, entries: [(&str, &str, &str); 7]) -> Self {
        let colors = Role::ALL
            .into_iter()
            .zip(entries)
            .map(|(role, (name, hex, usage))| PaletteColor::new(role, name, hex, usage))
            .collect();
        Self { mode, colors }
    }

    /// Build a variant from arbitrary colors, rejecting missing or duplicated roles.
    pub fn from_colors(mode: VariantMode, mut colors: Vec<PaletteColor>) -> Result<Self, VariantError> {
        let mut seen = [false; 7];
        for color in &colors {
            let slot = &mut seen[color.role.index()];
            if *slot {
                return Err(VariantError::DuplicateRole(color.role));
            }
            *slot = true;
        }
        if let Some(missing) = Role::ALL.into_iter().find(|role| !seen[role.index()]) {
            return Err(VariantError::MissingRole(missing));
        }
        colors.sort_by_key(|color| color.role);
        Ok(Self { mode, colors })
    }

    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Colors in role order.
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    pub fn color(&self, role: Role) -> &PaletteColor {
        &self.colors[role.index()]
    }

    pub fn color_mut(&mut self, role: Role) -> &mut PaletteColor {
        &mut self.colors[role.index()]
    }

    /// Role-keyed view used by the export payload.
    pub fn role_map(&self) -> RoleMap {
        self.colors.iter().map(|color| (color.role, color.to_entry())).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeVariants {
    light: PaletteVariant,
    dark: PaletteVariant,
}

/// A named palette with both appearance variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteTheme {
    id: String,
    title: String,
    subtitle: String,
    variants: ThemeVariants,
}

impl PaletteTheme {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        light: PaletteVariant,
        dark: PaletteVariant,
    ) -> Result<Self, VariantError> {
        for (expected, variant) in [(VariantMode::Light, &light), (VariantMode::Dark, &dark)] {
            if variant.mode != expected {
                return Err(VariantError::ModeMismatch {
                    expected,
                    found: variant.mode,
                });
            }
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            variants: ThemeVariants { light, dark },
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn variant(&self, mode: VariantMode) -> &PaletteVariant {
        match mode {
            VariantMode::Light => &self.variants.light,
            VariantMode::Dark => &self.variants.dark,
        }
    }

    pub fn variant_mut(&mut self, mode: VariantMode) -> &mut PaletteVariant {
        match mode {
            VariantMode::Light => &mut self.variants.light,
            VariantMode::Dark => &mut self.variants.dark,
        }
    }

    pub fn set_meta(&mut self, field: MetaField, value: &str) {
        match field {
            MetaField::Title => self.title = value.to_string(),
            MetaField::Subtitle => self.subtitle = value.to_string(),
        }
    }

    /// Deep copy of this theme under a different identifier.
    pub fn snapshot_as(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    pub fn role_map(&self, mode: VariantMode) -> RoleMap {
        self.variant(mode).role_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> [(&'static str, &'static str, &'static str); 7] {
        [
            ("Paper", "#ffffff", "Main background"),
            ("Card", "f4f6f8", "Surfaces"),
            ("Action", "#2563EB", "Primary actions"),
            ("Link", "#3B82F6", "Links"),
            ("Ink", "#0F172A", "Text"),
            ("Muted", "#6B7280", "Muted text"),
            ("Border", "#E5E7EB", "Borders"),
        ]
    }

    #[test]
    fn canonical_hex_prefixes_and_uppercases() {
        assert_eq!(canonical_hex("abc123"), "#ABC123");
        assert_eq!(canonical_hex("#abc123"), "#ABC123");
        assert_eq!(canonical_hex("zzzzzz"), "#ZZZZZZ");
        assert_eq!(canonical_hex(""), "#");
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!("Primary".parse::<Role>(), Ok(Role::Primary));
        assert_eq!(" border ".parse::<Role>(), Ok(Role::Border));
        assert!("accent".parse::<Role>().is_err());
    }

    #[test]
    fn role_order_matches_index() {
        for (position, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), position);
        }
    }

    #[test]
    fn variant_mode_toggles_and_parses() {
        assert_eq!(VariantMode::Dark.toggled(), VariantMode::Light);
        assert_eq!(VariantMode::Light.toggled().toggled(), VariantMode::Light);
        assert_eq!("LIGHT".parse::<VariantMode>(), Ok(VariantMode::Light));
        assert!("dim".parse::<VariantMode>().is_err());
        assert_eq!(VariantMode::default(), VariantMode::Dark);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("hex".parse::<ColorField>(), Ok(ColorField::Hex));
        assert_eq!("description".parse::<MetaField>(), Ok(MetaField::Subtitle));
        let err = "colour".parse::<ColorField>().unwrap_err();
        assert_eq!(err.kind, "color");
    }

    #[test]
    fn from_role_order_canonicalizes_hex() {
        let variant = PaletteVariant::from_role_order(VariantMode::Light, sample_entries());
        assert_eq!(variant.color(Role::Background).hex(), "#FFFFFF");
        assert_eq!(variant.color(Role::Surface).hex(), "#F4F6F8");
        let roles: Vec<Role> = variant.colors().iter().map(PaletteColor::role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn from_colors_rejects_missing_and_duplicate_roles() {
        let base = PaletteVariant::from_role_order(VariantMode::Dark, sample_entries());

        let mut missing = base.colors().to_vec();
        missing.retain(|color| color.role() != Role::Link);
        assert_eq!(
            PaletteVariant::from_colors(VariantMode::Dark, missing),
            Err(VariantError::MissingRole(Role::Link))
        );

        let mut duplicated = base.colors().to_vec();
        duplicated.push(PaletteColor::new(Role::Muted, "Again", "#000000", ""));
        assert_eq!(
            PaletteVariant::from_colors(VariantMode::Dark, duplicated),
            Err(VariantError::DuplicateRole(Role::Muted))
        );
    }

    #[test]
    fn from_colors_sorts_into_role_order() {
        let base = PaletteVariant::from_role_order(VariantMode::Dark, sample_entries());
        let mut shuffled = base.colors().to_vec();
        shuffled.reverse();
        let variant = PaletteVariant::from_colors(VariantMode::Dark, shuffled).expect("valid variant");
        assert_eq!(variant, base);
    }

    #[test]
    fn theme_rejects_swapped_variants() {
        let light = PaletteVariant::from_role_order(VariantMode::Light, sample_entries());
        let dark = PaletteVariant::from_role_order(VariantMode::Dark, sample_entries());
        let err = PaletteTheme::new("x", "X", "", dark.clone(), light.clone()).unwrap_err();
        assert_eq!(
            err,
            VariantError::ModeMismatch {
                expected: VariantMode::Light,
                found: VariantMode::Dark
            }
        );
        assert!(PaletteTheme::new("x", "X", "", light, dark).is_ok());
    }

    #[test]
    fn rgb_decodes_only_well_formed_hex() {
        let mut color = PaletteColor::new(Role::Primary, "Azure", "0099ff", "Primary actions");
        assert_eq!(color.rgb(), Some((0x00, 0x99, 0xFF)));
        color.set_field(ColorField::Hex, "zzzzzz");
        assert_eq!(color.hex(), "#ZZZZZZ");
        assert_eq!(color.rgb(), None);
        color.set_field(ColorField::Hex, "#FFF");
        assert_eq!(color.rgb(), None);
    }

    #[test]
    fn snapshot_is_independent() {
        let light = PaletteVariant::from_role_order(VariantMode::Light, sample_entries());
        let dark = PaletteVariant::from_role_order(VariantMode::Dark, sample_entries());
        let mut original = PaletteTheme::new("custom", "Custom", "", light, dark).expect("theme");
        let copy = original.snapshot_as("custom-1");
        original.variant_mut(VariantMode::Dark).color_mut(Role::Text).set_field(ColorField::Name, "Edited");
        original.set_meta(MetaField::Title, "Renamed");

        assert_eq!(copy.id(), "custom-1");
        assert_eq!(copy.title(), "Custom");
        assert_eq!(copy.variant(VariantMode::Dark).color(Role::Text).name(), "Ink");
    }
}
