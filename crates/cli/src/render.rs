//! Plain-text rendering of theme lists, swatches, and export payloads.

use std::io::{self, Write};

use palette_engine::{ThemeOrigin, ThemeSummary};
use palette_types::{ExportDocument, PaletteTheme, VariantMode, parse_hex_rgb};

/// Output styling switches.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Emit 24-bit ANSI background blocks for color chips.
    pub ansi_color: bool,
}

/// A three-cell color chip, or the hex text when colors are off or the hex does not decode.
pub fn chip(hex: &str, options: RenderOptions) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) if options.ansi_color => format!("\x1b[48;2;{r};{g};{b}m   \x1b[0m"),
        _ => format!("[{hex}]"),
    }
}

pub fn write_summaries(out: &mut impl Write, summaries: &[ThemeSummary], options: RenderOptions) -> io::Result<()> {
    if summaries.is_empty() {
        return writeln!(out, "No palettes match.");
    }
    for summary in summaries {
        let marker = if summary.is_active { ">" } else { " " };
        let tag = match summary.origin {
            ThemeOrigin::Draft => "[draft]",
            ThemeOrigin::Saved => "[saved]",
            ThemeOrigin::Preset => "",
        };
        let chips: Vec<String> = summary.accent_swatches.iter().map(|hex| chip(hex, options)).collect();
        writeln!(
            out,
            "{marker} {:<24} {:<26} {:<7} {}",
            summary.id,
            summary.title,
            tag,
            chips.join(" ")
        )?;
        writeln!(out, "  {:<24} {}", "", summary.subtitle)?;
    }
    Ok(())
}

pub fn write_swatches(out: &mut impl Write, theme: &PaletteTheme, mode: VariantMode, options: RenderOptions) -> io::Result<()> {
    writeln!(out, "{} ({mode})", theme.title())?;
    writeln!(out, "{}", theme.subtitle())?;
    for color in theme.variant(mode).colors() {
        writeln!(
            out,
            "  {:<11} {} {:<8} {:<18} {}",
            color.role(),
            chip(color.hex(), options),
            color.hex(),
            color.name(),
            color.usage()
        )?;
    }
    Ok(())
}

pub fn write_payload(out: &mut impl Write, document: &ExportDocument) -> anyhow::Result<()> {
    writeln!(out, "{}", document.to_pretty_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_falls_back_to_text() {
        let plain = RenderOptions::default();
        let colored = RenderOptions { ansi_color: true };
        assert_eq!(chip("#FF0000", plain), "[#FF0000]");
        assert_eq!(chip("#FF0000", colored), "\x1b[48;2;255;0;0m   \x1b[0m");
        assert_eq!(chip("#ZZZZZZ", colored), "[#ZZZZZZ]");
    }

    #[test]
    fn swatches_list_every_role() {
        let theme = palette_catalog::find_by_id("mocha-warmth").expect("preset");
        let mut out = Vec::new();
        write_swatches(&mut out, theme, VariantMode::Light, RenderOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Mocha Warmth (light)"));
        assert!(text.contains("#FFFCF7"));
        assert_eq!(text.lines().count(), 2 + 7);
    }
}
