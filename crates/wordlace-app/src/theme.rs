use wordlace_render::{Rgb, Rgba};

/// Color palette for the viewer.
///
/// Kept independent of any UI-framework theme so grid-specific semantics
/// (cursor, active word) can be tuned per palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Clear color behind everything.
    pub page_background: Rgb,
    /// Glyph fill color, bound to the puzzle-wide color uniform.
    pub letter_fill: Rgb,
    /// Fill of a playable cell.
    pub cell_background: Rgba,
    /// Fill of the cells spanned by the selected clue.
    pub active_word: Rgba,
    /// Fill of the cursor cell itself.
    pub cursor: Rgba,
}

/// Light and dark palettes with a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette {
                page_background: Rgb::new(0.12, 0.12, 0.14),
                letter_fill: Rgb::new(0.08, 0.08, 0.10),
                cell_background: Rgba::new(0.96, 0.96, 0.94, 1.0),
                active_word: Rgba::new(0.78, 0.88, 1.0, 1.0),
                cursor: Rgba::new(1.0, 0.85, 0.35, 1.0),
            },
            dark: Palette {
                page_background: Rgb::new(0.07, 0.07, 0.09),
                letter_fill: Rgb::new(0.92, 0.92, 0.95),
                cell_background: Rgba::new(0.16, 0.16, 0.20, 1.0),
                active_word: Rgba::new(0.18, 0.30, 0.45, 1.0),
                cursor: Rgba::new(0.55, 0.42, 0.12, 1.0),
            },
        }
    }
}

impl Theme {
    #[must_use]
    pub fn palette_for(&self, dark_mode: bool) -> &Palette {
        if dark_mode { &self.dark } else { &self.light }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_selection_follows_dark_mode() {
        let theme = Theme::default();
        assert_eq!(theme.palette_for(false), &theme.light);
        assert_eq!(theme.palette_for(true), &theme.dark);
    }
}
