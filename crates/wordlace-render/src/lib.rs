//! MSDF text rendering contract for the crossword viewer.
//!
//! The GPU does the actual per-fragment work; this crate owns everything the
//! draw loop and the shader must agree on:
//!
//! - the GLSL sources and the attribute/uniform name contract ([`shaders`]),
//! - a CPU-side reference of the fragment math ([`msdf`]) that the test suite
//!   pins term for term,
//! - glyph atlas metadata and per-glyph quad generation ([`Atlas`],
//!   [`quad`]),
//! - the color value types shared with the application layer.
//!
//! Nothing in this crate touches a graphics API, so all of it tests on
//! native.

pub use self::{
    atlas::{Atlas, AtlasGlyph},
    color::{Rgb, Rgba},
};

pub mod atlas;
pub mod color;
pub mod msdf;
pub mod quad;
pub mod shaders;
