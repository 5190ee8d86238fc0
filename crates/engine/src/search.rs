//! Theme list filtering and sidebar summaries.

use palette_types::{PaletteTheme, VariantMode};

/// Where a theme in the combined collection came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeOrigin {
    /// The live, editable custom draft.
    Draft,
    /// A snapshot saved from the draft during this session.
    Saved,
    /// A bundled preset.
    Preset,
}

/// Compact description of a theme for list views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSummary {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub origin: ThemeOrigin,
    pub is_active: bool,
    /// First three dark-variant hex values, used as color chips.
    pub accent_swatches: Vec<String>,
}

impl ThemeSummary {
    pub(crate) fn new(theme: &PaletteTheme, origin: ThemeOrigin, is_active: bool) -> Self {
        Self {
            id: theme.id().to_string(),
            title: theme.title().to_string(),
            subtitle: theme.subtitle().to_string(),
            origin,
            is_active,
            accent_swatches: theme
                .variant(VariantMode::Dark)
                .colors()
                .iter()
                .take(3)
                .map(|color| color.hex().to_string())
                .collect(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.origin, ThemeOrigin::Draft | ThemeOrigin::Saved)
    }
}

/// Case-insensitive match of `query` against `"<title> <subtitle>"`.
///
/// An empty query matches every theme.
pub fn matches_query(theme: &PaletteTheme, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!("{} {}", theme.title(), theme.subtitle()).to_lowercase();
    haystack.contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_title_or_subtitle() {
        let theme = palette_catalog::find_by_id("emerald-luxury").expect("preset");
        assert!(matches_query(theme, ""));
        assert!(matches_query(theme, "EMERALD"));
        assert!(matches_query(theme, "warm neutrals"));
        assert!(matches_query(theme, "emerald deep"), "title and subtitle are joined with a space");
        assert!(!matches_query(theme, "coral"));
    }

    #[test]
    fn summary_takes_three_dark_swatches() {
        let theme = palette_catalog::find_by_id("modern").expect("preset");
        let summary = ThemeSummary::new(theme, ThemeOrigin::Preset, false);
        assert_eq!(summary.accent_swatches, vec!["#181A1B", "#212325", "#0099FF"]);
        assert!(!summary.is_custom());
    }
}
