//! Browser application for the Wordlace crossword viewer.
//!
//! The pure layers (state, theme, scene building) compile and test on any
//! target; everything touching the DOM or WebGL is gated to wasm32, the way
//! the platform backends are split in the rest of the workspace.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod scene;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod debounce;
#[cfg(target_arch = "wasm32")]
pub mod gl;
#[cfg(target_arch = "wasm32")]
pub mod loader;
#[cfg(target_arch = "wasm32")]
pub mod logger;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
