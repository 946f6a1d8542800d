//! Ocean palette and design tokens for the floatchat UI.

/// A single color token with a stable name and hex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    /// Semantic identifier for the shade (e.g., "500").
    pub name: &'static str,
    /// Hex RGB value for the shade.
    pub hex: &'static str,
}

/// Collection of related tokens (e.g., primary shades).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier.
    pub id: &'static str,
    /// Ordered list of shades from lightest to darkest.
    pub shades: &'static [ColorToken],
}

impl Palette {
    /// Look up a shade by name.
    #[must_use]
    pub fn shade(&self, name: &str) -> Option<&'static str> {
        self.shades
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.hex)
    }
}

const fn token(name: &'static str, hex: &'static str) -> ColorToken {
    ColorToken { name, hex }
}

/// Deep-water blue used for gradients and focus rings.
pub const PRIMARY: Palette = Palette {
    id: "primary",
    shades: &[
        token("100", "#CFF3FF"),
        token("300", "#67D4F5"),
        token("500", "#0EA5E9"),
        token("700", "#0369A1"),
        token("900", "#0C2D48"),
    ],
};

/// Bioluminescent violet paired with the primary in gradients.
pub const SECONDARY: Palette = Palette {
    id: "secondary",
    shades: &[
        token("100", "#EDE4FF"),
        token("300", "#C4A6FF"),
        token("500", "#8B5CF6"),
        token("700", "#6D28D9"),
        token("900", "#2E1065"),
    ],
};

/// Abyssal surfaces from page background to raised panels.
pub const SURFACE: Palette = Palette {
    id: "surface",
    shades: &[
        token("background", "#030712"),
        token("panel", "#0B1220"),
        token("raised", "#111A2E"),
    ],
};

/// Text tones.
pub const TEXT: Palette = Palette {
    id: "text",
    shades: &[token("foreground", "#F8FAFC"), token("muted", "#94A3B8")],
};

/// Palettes exported as CSS custom properties.
pub const PALETTES: [Palette; 4] = [PRIMARY, SECONDARY, SURFACE, TEXT];

/// Corner radius tokens in pixels.
pub const RADII: [u8; 4] = [8, 12, 16, 24];

/// `:root` rule exposing every palette shade as `--fc-{palette}-{shade}`.
#[must_use]
pub fn css_variables() -> String {
    let mut css = String::from(":root {");
    for palette in PALETTES {
        for shade in palette.shades {
            css.push_str(&format!(" --fc-{}-{}: {};", palette.id, shade.name, shade.hex));
        }
    }
    for (index, radius) in RADII.iter().enumerate() {
        css.push_str(&format!(" --fc-radius-{index}: {radius}px;"));
    }
    css.push_str(" }");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_cover_every_shade() {
        let css = css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--fc-primary-500: #0EA5E9;"));
        assert!(css.contains("--fc-surface-background: #030712;"));
        assert!(css.contains("--fc-radius-3: 24px;"));
        let count = PALETTES.iter().map(|p| p.shades.len()).sum::<usize>();
        assert_eq!(css.matches("--fc-").count(), count + RADII.len());
    }

    #[test]
    fn tailwind_colors_match_palette() {
        let config = include_str!("../../tailwind.config.js");
        for (name, hex) in [
            ("primary", PRIMARY.shade("500")),
            ("secondary", SECONDARY.shade("500")),
            ("background", SURFACE.shade("background")),
            ("foreground", TEXT.shade("foreground")),
            ("\"muted-foreground\"", TEXT.shade("muted")),
        ] {
            let hex = hex.unwrap_or_default();
            assert!(!hex.is_empty(), "no palette shade for {name}");
            assert!(config.contains(&format!("{name}: \"{hex}\"")), "{name} drifted");
        }
    }

    #[test]
    fn shade_lookup() {
        assert_eq!(SECONDARY.shade("500"), Some("#8B5CF6"));
        assert_eq!(TEXT.shade("missing"), None);
    }
}
