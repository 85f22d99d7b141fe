//! Browser entry point: wires the canvas, WebGL pipeline, loaders, and input
//! events together and owns the redraw loop.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{JsCast, closure::Closure, prelude::wasm_bindgen};
use web_sys::{HtmlCanvasElement, MouseEvent, WebGl2RenderingContext};
use wordlace_render::Atlas;

use crate::{
    canvas::resize_canvas_to_display_size,
    debounce::Debouncer,
    gl::GlError,
    loader::{self, LoadError},
    logger,
    renderer::{GlyphPipeline, webgl2_context},
    scene::{Layout, build_scene},
    state::{View, ViewerState},
    theme::Theme,
};

const CANVAS_ID: &str = "wordlace-canvas";
const PUZZLE_URL: &str = "puzzle.json";
const ATLAS_URL: &str = "atlas.json";
const ATLAS_IMAGE_URL: &str = "atlas.png";
const RESIZE_DEBOUNCE_MS: i32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("no browser window")]
    NoWindow,
    #[display("canvas element `{CANVAS_ID}` not found")]
    CanvasMissing,
    #[display("WebGL2 is not available")]
    NoWebGl2,
    #[display("{_0}")]
    Gl(GlError),
    #[display("{_0}")]
    Load(LoadError),
}

struct ViewerApp {
    gl: WebGl2RenderingContext,
    canvas: HtmlCanvasElement,
    pipeline: GlyphPipeline,
    state: ViewerState,
    atlas: Atlas,
    theme: Theme,
    dark_mode: bool,
}

impl ViewerApp {
    fn layout(&self) -> Layout {
        #[expect(clippy::cast_precision_loss)]
        let (width, height) = (self.canvas.width() as f32, self.canvas.height() as f32);
        Layout::for_viewport(self.state.puzzle(), width, height)
    }

    fn redraw(&mut self) {
        if resize_canvas_to_display_size(&self.canvas, Some(device_pixel_ratio())) {
            #[expect(clippy::cast_possible_wrap)]
            self.gl.viewport(
                0,
                0,
                self.canvas.width() as i32,
                self.canvas.height() as i32,
            );
        }

        let palette = self.theme.palette_for(self.dark_mode);
        let bg = palette.page_background;
        self.gl.clear_color(bg.r, bg.g, bg.b, 1.0);
        self.gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT);

        let layout = self.layout();
        let vertices = build_scene(&self.state, &self.atlas, palette, &layout);
        self.pipeline.upload(&self.gl, &vertices);
        self.pipeline.draw(&self.gl, [0.0, 0.0], palette.letter_fill);
    }

    fn handle_click(&mut self, x: f32, y: f32) {
        let scale = device_pixel_ratio();
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((f64::from(x) * scale) as f32, (f64::from(y) * scale) as f32);
        if let Some((row, col)) = self.layout().cell_at(x, y)
            && self.state.select_cell(row, col)
        {
            if let Some(clue) = self.state.selected_clue() {
                log::debug!("selected {}: {}", clue.number, clue.text);
            }
            self.redraw();
        }
    }
}

fn device_pixel_ratio() -> f64 {
    web_sys::window().map_or(1.0, |window| window.device_pixel_ratio())
}

fn prefers_dark_mode() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .is_some_and(|list| list.matches())
}

fn initial_view() -> View {
    let hash = web_sys::window()
        .map(|window| window.location())
        .and_then(|location| location.hash().ok());
    match hash.as_deref() {
        Some("#list") => View::List,
        _ => View::Crossword,
    }
}

fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Wordlace has crashed.\n\n{message}\n\nSee the developer console for details."
            ));
        }
    }));
}

/// Module entry point, invoked by the wasm loader.
#[wasm_bindgen(start)]
pub fn start() {
    install_panic_alert_hook();
    logger::init(log::LevelFilter::Debug);

    log::info!(
        "starting wordlace viewer, version={}",
        env!("CARGO_PKG_VERSION")
    );

    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run().await {
            log::error!("viewer failed to start: {err}");
        }
    });
}

async fn run() -> Result<(), AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoWindow)?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(AppError::CanvasMissing)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AppError::CanvasMissing)?;
    let gl = webgl2_context(&canvas).ok_or(AppError::NoWebGl2)?;

    let puzzle = loader::load_puzzle(PUZZLE_URL).await?;
    log::info!(
        "loaded puzzle {} ({}x{}, {} across / {} down)",
        puzzle.id,
        puzzle.width,
        puzzle.height,
        puzzle.across_clues.len(),
        puzzle.down_clues.len(),
    );
    let atlas = loader::load_atlas(ATLAS_URL).await?;
    let atlas_image = loader::load_image(ATLAS_IMAGE_URL).await?;

    let pipeline = GlyphPipeline::new(&gl, &atlas_image)?;

    let mut state = ViewerState::new(puzzle);
    state.set_view(initial_view());

    let app = Rc::new(RefCell::new(ViewerApp {
        gl,
        canvas: canvas.clone(),
        pipeline,
        state,
        atlas,
        theme: Theme::default(),
        dark_mode: prefers_dark_mode(),
    }));
    app.borrow_mut().redraw();

    // The listeners live for the page's lifetime, so their closures are
    // deliberately leaked instead of stored.
    {
        let app = Rc::clone(&app);
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            #[expect(clippy::cast_precision_loss)]
            app.borrow_mut()
                .handle_click(event.offset_x() as f32, event.offset_y() as f32);
        });
        canvas
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|_| AppError::CanvasMissing)?;
        on_click.forget();
    }

    {
        let app = Rc::clone(&app);
        let debouncer = Rc::new(RefCell::new(Debouncer::new(RESIZE_DEBOUNCE_MS)));
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let app = Rc::clone(&app);
            let scheduled = debouncer
                .borrow_mut()
                .schedule(move || app.borrow_mut().redraw());
            if scheduled.is_err() {
                log::warn!("could not schedule a resize redraw");
            }
        });
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|_| AppError::NoWindow)?;
        on_resize.forget();
    }

    Ok(())
}
