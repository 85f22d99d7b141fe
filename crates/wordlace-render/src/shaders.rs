//! GLSL sources and the CPU↔GPU name contract.
//!
//! The attribute and uniform names below are referenced by the draw-call
//! setup when it queries locations; they must stay in sync with the shader
//! text, so both live in this module and the names are exposed as constants
//! rather than retyped at call sites.

/// Per-vertex clip-space position attribute.
pub const ATTRIB_POSITION: &str = "a_position";
/// Per-vertex atlas texture coordinate attribute.
pub const ATTRIB_TEXCOORD: &str = "a_texcoord";
/// Per-vertex background color attribute (per-glyph tinting).
pub const ATTRIB_COLOR: &str = "a_color";
/// Scene-wide clip-space translation uniform.
pub const UNIFORM_TRANSLATION: &str = "u_translation";
/// Puzzle-wide glyph fill color uniform.
pub const UNIFORM_FILL_COLOR: &str = "u_color";
/// MSDF atlas sampler uniform.
pub const UNIFORM_ATLAS: &str = "u_texture";

/// Vertex stage: translate pre-computed clip-space quads and pass texcoord
/// and background color through to the fragment stage.
pub const VERTEX_SHADER: &str = r"#version 300 es

in vec4 a_position;
in vec2 a_texcoord;
in vec4 a_color;

uniform vec2 u_translation;

out highp vec2 v_texcoord;
out highp vec4 v_color;

void main() {
  gl_Position = a_position + vec4(u_translation, 0, 0);

  v_texcoord = a_texcoord;
  v_color = a_color;
}
";

/// Fragment stage: MSDF coverage with adaptive anti-aliasing and
/// low-resolution edge boost.
///
/// The math here is mirrored on the CPU in [`crate::msdf`]; change both
/// together or not at all.
pub const FRAGMENT_SHADER: &str = r"#version 300 es

precision highp float;

in highp vec2 v_texcoord;
in highp vec4 v_color;

uniform vec3 u_color;
uniform sampler2D u_texture;

out vec4 outColor;

float median(float r, float g, float b) {
  return max(min(r, g), min(max(r, g), b));
}

float norm(float x, float a, float b) {
  return b != a ? (x - a) / (b - a) : 0.0;
}

float fitClamped(float x, float a, float b, float c, float d) {
  return c + (d - c) * clamp(norm(x, a, b), 0.0, 1.0);
}

void main() {
  vec3 msd = texture(u_texture, v_texcoord).rgb;
  float sd = median(msd.r, msd.g, msd.b);

  vec2 duv = fwidth(v_texcoord);
  // antialiasing width: texels per screen pixel, floored at one
  float su = 0.0078125;
  float aa = max(dot(vec2(su), 0.5 / duv), 1.0);
  // edge boost for low effective resolutions
  float boost = fitClamped(0.5 * su / length(duv), 1.0, 0.5, 0.0, 0.5);
  float t = clamp((sd - 0.5) * aa + 0.5, 0.0, 1.0);
  t = norm(t, 0.0, 1.0 - boost);
  outColor = mix(v_color, vec4(u_color, 1.0), t);
}
";
