//! CPU reference of the MSDF fragment math.
//!
//! The fragment shader in [`crate::shaders`] converts a multi-channel signed
//! distance sample into glyph coverage. The functions here compute the same
//! values on the CPU so the test suite can pin the math down term for term;
//! any change to one side must be mirrored in the other.
//!
//! Coverage combines two corrections beyond the textbook
//! `clamp(sd - 0.5, …)` threshold:
//!
//! - an anti-aliasing width that scales inversely with how many texels map to
//!   one screen pixel, keeping edges crisp under magnification and soft
//!   rather than aliased under minification;
//! - an edge boost that widens apparent glyph coverage at low effective
//!   resolution, counteracting the thinning MSDF glyphs suffer when heavily
//!   minified.
//!
//! Substituting a simpler formula changes rendered output visibly at small
//! font sizes, so the exact terms matter.

use crate::color::{Rgb, Rgba};

/// Sub-texel smoothing constant (1/128) shared by both corrections.
pub const SMOOTHING: f32 = 0.007_812_5;

/// Median of three distance estimates.
///
/// Reconstructs a single robust signed distance from the three channels of an
/// MSDF sample; the median suppresses the corner artifacts a single-channel
/// field produces.
#[must_use]
pub fn median(r: f32, g: f32, b: f32) -> f32 {
    f32::max(f32::min(r, g), f32::min(f32::max(r, g), b))
}

/// Maps `x` from `[a, b]` to `[0, 1]` without clamping; 0 when the source
/// range is empty.
fn norm(x: f32, a: f32, b: f32) -> f32 {
    if b == a { 0.0 } else { (x - a) / (b - a) }
}

/// Maps `x` from `[a, b]` to `[c, d]`, clamping to the target range.
fn fit_clamped(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    c + (d - c) * norm(x, a, b).clamp(0.0, 1.0)
}

/// Glyph coverage in `[0, 1]` (slightly above 1 under edge boost).
///
/// `sd` is the median signed distance sampled from the atlas (0.5 = glyph
/// edge); `duv` is the screen-space derivative of the texture coordinate,
/// with strictly positive components on real geometry.
#[must_use]
pub fn coverage(sd: f32, duv: [f32; 2]) -> f32 {
    let [du, dv] = duv;
    // Anti-aliasing width: texels per screen pixel, floored at 1.
    let aa = f32::max(SMOOTHING * (0.5 / du) + SMOOTHING * (0.5 / dv), 1.0);
    // Edge boost for low effective resolution.
    let boost = fit_clamped(0.5 * SMOOTHING / du.hypot(dv), 1.0, 0.5, 0.0, 0.5);
    let t = ((sd - 0.5) * aa + 0.5).clamp(0.0, 1.0);
    norm(t, 0.0, 1.0 - boost)
}

/// Full per-fragment shading: coverage-weighted blend from the quad's
/// `background` color to the opaque `fill` color.
#[must_use]
pub fn shade(msd: [f32; 3], duv: [f32; 2], background: Rgba, fill: Rgb) -> Rgba {
    let sd = median(msd[0], msd[1], msd[2]);
    let t = coverage(sd, duv);
    background.mix(fill.with_alpha(1.0), t)
}
