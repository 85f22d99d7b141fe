//! Glyph quad generation.
//!
//! The draw loop renders one textured quad per visible glyph. Vertices are
//! interleaved `[x, y, u, v, r, g, b, a]` (clip-space position, atlas
//! texcoord, and the quad's background color), matching the attribute layout
//! declared in [`crate::shaders`].
//!
//! Scales are per-axis: clip space is square while the canvas usually is not,
//! so one em maps to different clip extents horizontally and vertically.

use crate::{
    atlas::{Atlas, AtlasGlyph},
    color::Rgba,
};

/// Floats per vertex: position (2), texcoord (2), background color (4).
pub const FLOATS_PER_VERTEX: usize = 8;

/// Vertices per glyph quad (two triangles).
pub const VERTICES_PER_GLYPH: usize = 6;

/// A single textured quad in clip space, ready to be appended to a vertex
/// buffer.
///
/// Usually a glyph, but any solid region of the atlas works: a quad whose UV
/// rect sits in empty atlas space shades to its background color everywhere,
/// which is how cell fills are drawn with the same pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// Lower-left corner `[x, y]` in clip space.
    pub min: [f32; 2],
    /// Upper-right corner `[x, y]` in clip space.
    pub max: [f32; 2],
    /// Texture region `[u_min, v_min, u_max, v_max]`.
    pub uv: [f32; 4],
    /// Background color mixed in where the fragment falls outside the glyph.
    pub background: Rgba,
}

impl GlyphQuad {
    /// Positions a glyph's quad from its atlas metrics.
    ///
    /// `origin` is the baseline pen position in clip space; `scale` converts
    /// em units to clip units per axis.
    #[must_use]
    pub fn at(glyph: &AtlasGlyph, origin: [f32; 2], scale: [f32; 2], background: Rgba) -> Self {
        let x0 = origin[0] + glyph.bearing[0] * scale[0];
        let y0 = origin[1] + glyph.bearing[1] * scale[1];
        Self {
            min: [x0, y0],
            max: [
                x0 + glyph.size[0] * scale[0],
                y0 + glyph.size[1] * scale[1],
            ],
            uv: glyph.uv,
            background,
        }
    }

    /// Appends the quad's six vertices to an interleaved buffer.
    pub fn push_to(&self, out: &mut Vec<f32>) {
        let [x0, y0] = self.min;
        let [x1, y1] = self.max;
        let [u0, v0, u1, v1] = self.uv;
        let Rgba { r, g, b, a } = self.background;

        // The atlas stores glyphs top-down while clip space is y-up, so the
        // v range is flipped across the quad.
        let corners = [
            (x0, y0, u0, v1),
            (x1, y0, u1, v1),
            (x0, y1, u0, v0),
            (x0, y1, u0, v0),
            (x1, y0, u1, v1),
            (x1, y1, u1, v0),
        ];
        for (x, y, u, v) in corners {
            out.extend_from_slice(&[x, y, u, v, r, g, b, a]);
        }
    }
}

/// Lays out a text run left to right and appends its quads to `out`.
///
/// Returns the pen position after the final glyph. Characters absent from the
/// atlas are skipped without advancing, the same policy [`Atlas::measure`]
/// uses.
pub fn layout_text(
    out: &mut Vec<f32>,
    atlas: &Atlas,
    text: &str,
    origin: [f32; 2],
    scale: [f32; 2],
    background: Rgba,
) -> [f32; 2] {
    let mut pen = origin;
    for ch in text.chars() {
        if let Some(glyph) = atlas.glyph(ch) {
            GlyphQuad::at(glyph, pen, scale, background).push_to(out);
            pen[0] += glyph.advance * scale[0];
        }
    }
    pen
}

/// Lays out a text run centered on `center_x`, baseline at `baseline_y`.
pub fn layout_text_centered(
    out: &mut Vec<f32>,
    atlas: &Atlas,
    text: &str,
    center_x: f32,
    baseline_y: f32,
    scale: [f32; 2],
    background: Rgba,
) -> [f32; 2] {
    let width = atlas.measure(text, scale[0]);
    layout_text(
        out,
        atlas,
        text,
        [center_x - width * 0.5, baseline_y],
        scale,
        background,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::testing::ascii_atlas;

    const SQUARE: [f32; 2] = [1.0, 1.0];

    #[test]
    fn quad_emits_six_interleaved_vertices() {
        let atlas = ascii_atlas();
        let glyph = atlas.glyph('A').unwrap();
        let mut out = Vec::new();
        GlyphQuad::at(glyph, [0.0, 0.0], SQUARE, Rgba::TRANSPARENT).push_to(&mut out);
        assert_eq!(out.len(), VERTICES_PER_GLYPH * FLOATS_PER_VERTEX);

        // First vertex: lower-left position with the glyph's bottom texcoord.
        assert_eq!(out[0], glyph.bearing[0]);
        assert_eq!(out[1], glyph.bearing[1]);
        assert_eq!(out[2], glyph.uv[0]);
        assert_eq!(out[3], glyph.uv[3]);
    }

    #[test]
    fn anisotropic_scale_stretches_each_axis_independently() {
        let atlas = ascii_atlas();
        let glyph = atlas.glyph('A').unwrap();
        let quad = GlyphQuad::at(glyph, [0.0, 0.0], [2.0, 0.5], Rgba::TRANSPARENT);
        let width = quad.max[0] - quad.min[0];
        let height = quad.max[1] - quad.min[1];
        assert!((width - glyph.size[0] * 2.0).abs() < 1e-6);
        assert!((height - glyph.size[1] * 0.5).abs() < 1e-6);
    }

    #[test]
    fn layout_advances_the_pen_per_glyph() {
        let atlas = ascii_atlas();
        let mut out = Vec::new();
        let pen = layout_text(
            &mut out,
            &atlas,
            "CAT",
            [0.0, 0.0],
            [2.0, 2.0],
            Rgba::TRANSPARENT,
        );
        assert_eq!(out.len(), 3 * VERTICES_PER_GLYPH * FLOATS_PER_VERTEX);
        assert!((pen[0] - atlas.measure("CAT", 2.0)).abs() < 1e-6);
        assert_eq!(pen[1], 0.0);
    }

    #[test]
    fn layout_skips_characters_missing_from_the_atlas() {
        let atlas = ascii_atlas();
        let mut out = Vec::new();
        let pen = layout_text(
            &mut out,
            &atlas,
            "C€T",
            [0.0, 0.0],
            SQUARE,
            Rgba::TRANSPARENT,
        );
        assert_eq!(out.len(), 2 * VERTICES_PER_GLYPH * FLOATS_PER_VERTEX);
        assert!((pen[0] - atlas.measure("CT", 1.0)).abs() < 1e-6);
    }

    #[test]
    fn centered_layout_straddles_the_center() {
        let atlas = ascii_atlas();
        let mut out = Vec::new();
        let pen =
            layout_text_centered(&mut out, &atlas, "AB", 0.0, 0.0, SQUARE, Rgba::TRANSPARENT);
        let width = atlas.measure("AB", 1.0);
        // The pen ends half the run width to the right of center.
        assert!((pen[0] - width * 0.5).abs() < 1e-6);
        // First vertex starts left of center.
        assert!(out[0] < 0.0);
    }

    #[test]
    fn background_color_is_written_per_vertex() {
        let atlas = ascii_atlas();
        let highlight = Rgba::new(1.0, 0.9, 0.3, 1.0);
        let mut out = Vec::new();
        layout_text(&mut out, &atlas, "A", [0.0, 0.0], SQUARE, highlight);
        for vertex in out.chunks(FLOATS_PER_VERTEX) {
            assert_eq!(&vertex[4..8], &[1.0, 0.9, 0.3, 1.0]);
        }
    }
}
