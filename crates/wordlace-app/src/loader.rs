//! Fetching the puzzle and atlas from the host page.
//!
//! Puzzle data arrives as JSON from the same origin that serves the viewer;
//! this module is the external-loader seam. Structural validation happens
//! here so everything downstream can trust the puzzle's invariants.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, Response};
use wordlace_core::{Puzzle, PuzzleError};
use wordlace_render::Atlas;

/// Failures while loading puzzle or atlas resources.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("no window to fetch from")]
    NoWindow,
    #[display("fetching {url} failed")]
    Fetch { url: String },
    #[display("{url} returned an error status")]
    Status { url: String },
    #[display("could not decode the response from {url}")]
    Decode { url: String },
    #[display("puzzle failed validation: {_0}")]
    InvalidPuzzle(PuzzleError),
    #[display("could not decode the atlas image {url}")]
    Image { url: String },
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| LoadError::Fetch {
            url: url.to_owned(),
        })?;
    let response: Response = response.dyn_into().map_err(|_| LoadError::Fetch {
        url: url.to_owned(),
    })?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_owned(),
        });
    }
    let json = JsFuture::from(response.json().map_err(|_| LoadError::Decode {
        url: url.to_owned(),
    })?)
    .await
    .map_err(|_| LoadError::Decode {
        url: url.to_owned(),
    })?;
    serde_wasm_bindgen::from_value(json).map_err(|_| LoadError::Decode {
        url: url.to_owned(),
    })
}

/// Fetches and validates a puzzle.
pub async fn load_puzzle(url: &str) -> Result<Puzzle, LoadError> {
    let puzzle: Puzzle = fetch_json(url).await?;
    puzzle.validate().map_err(LoadError::InvalidPuzzle)?;
    Ok(puzzle)
}

/// Fetches the atlas metadata sidecar.
pub async fn load_atlas(url: &str) -> Result<Atlas, LoadError> {
    fetch_json(url).await
}

/// Loads and decodes the atlas texture image.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, LoadError> {
    let image = HtmlImageElement::new().map_err(|_| LoadError::Image {
        url: url.to_owned(),
    })?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| LoadError::Image {
            url: url.to_owned(),
        })?;
    Ok(image)
}
