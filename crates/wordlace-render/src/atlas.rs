//! MSDF glyph atlas metadata.
//!
//! The atlas itself is a pre-rendered texture produced offline by an MSDF
//! generator; this module carries the JSON sidecar that maps codepoints to
//! texture regions and layout metrics. Distances and sizes are in em units,
//! UVs in normalized texture coordinates.

use serde::{Deserialize, Serialize};

/// A single glyph entry in the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasGlyph {
    /// Unicode codepoint.
    pub codepoint: char,
    /// Texture region as `[u_min, v_min, u_max, v_max]`.
    pub uv: [f32; 4],
    /// Horizontal advance in em units.
    pub advance: f32,
    /// Quad size `[width, height]` in em units.
    pub size: [f32; 2],
    /// Offset `[x, y]` from the baseline origin in em units.
    pub bearing: [f32; 2],
}

/// Atlas metadata: texture dimensions, generation parameters, glyph table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atlas {
    /// Texture dimensions `[width, height]` in pixels.
    pub texture_size: [u32; 2],
    /// Pixels per em the atlas was generated at.
    pub pixels_per_em: f32,
    /// Distance field range in pixels.
    pub distance_range: f32,
    /// Line height multiplier.
    pub line_height: f32,
    /// Glyph table.
    pub glyphs: Vec<AtlasGlyph>,
}

impl Atlas {
    /// Looks up the atlas entry for a character.
    #[must_use]
    pub fn glyph(&self, ch: char) -> Option<&AtlasGlyph> {
        self.glyphs.iter().find(|glyph| glyph.codepoint == ch)
    }

    /// Advance width of a text run at the given scale, skipping characters
    /// the atlas does not cover (mirroring layout, which drops them too).
    #[must_use]
    pub fn measure(&self, text: &str, scale: f32) -> f32 {
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| glyph.advance * scale)
            .sum()
    }

    /// A UV region with no glyph coverage, usable for solid-fill quads.
    ///
    /// The space glyph's cell is empty in every MSDF atlas this viewer
    /// consumes, so a quad textured from it shades entirely to its background
    /// color.
    #[must_use]
    pub fn solid_uv(&self) -> Option<[f32; 4]> {
        self.glyph(' ').map(|glyph| glyph.uv)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Atlas, AtlasGlyph};

    /// A uniform-metric atlas covering printable ASCII, for layout tests.
    pub(crate) fn ascii_atlas() -> Atlas {
        let mut glyphs = Vec::with_capacity(95);
        for i in 32u8..=126 {
            let col = f32::from((i - 32) % 16);
            let row = f32::from((i - 32) / 16);
            let cell_w = 1.0 / 16.0;
            let cell_h = 1.0 / 6.0;
            glyphs.push(AtlasGlyph {
                codepoint: i as char,
                uv: [
                    col * cell_w,
                    row * cell_h,
                    (col + 1.0) * cell_w,
                    (row + 1.0) * cell_h,
                ],
                advance: 0.6,
                size: [0.55, 1.0],
                bearing: [0.025, 0.0],
            });
        }
        Atlas {
            texture_size: [512, 192],
            pixels_per_em: 32.0,
            distance_range: 4.0,
            line_height: 1.2,
            glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ascii_atlas;

    #[test]
    fn glyph_lookup_covers_ascii_and_nothing_else() {
        let atlas = ascii_atlas();
        assert!(atlas.glyph('A').is_some());
        assert!(atlas.glyph('~').is_some());
        assert!(atlas.glyph('€').is_none());
    }

    #[test]
    fn measure_sums_advances_and_skips_unknown_glyphs() {
        let atlas = ascii_atlas();
        let width = atlas.measure("CAT", 2.0);
        assert!((width - 3.0 * 0.6 * 2.0).abs() < 1e-6);
        // The unknown glyph contributes nothing.
        assert!((atlas.measure("C€T", 2.0) - 2.0 * 0.6 * 2.0).abs() < 1e-6);
    }

    #[test]
    fn solid_uv_is_the_space_glyph_region() {
        let atlas = ascii_atlas();
        let uv = atlas.solid_uv().expect("atlas covers the space glyph");
        assert_eq!(uv, atlas.glyph(' ').unwrap().uv);
    }

    #[test]
    fn metadata_round_trips_through_json() {
        let atlas = ascii_atlas();
        let json = serde_json::to_string(&atlas).unwrap();
        assert!(json.contains("\"textureSize\""));
        assert!(json.contains("\"pixelsPerEm\""));
        let back: super::Atlas = serde_json::from_str(&json).unwrap();
        assert_eq!(back, atlas);
    }
}
