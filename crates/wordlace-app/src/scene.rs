//! Scene building: puzzle + viewer state to glyph vertex data.
//!
//! Everything here is pure arithmetic over the loaded puzzle, so the whole
//! draw-side layout is unit-tested on native. The produced buffer is the
//! interleaved format `wordlace_render::quad` defines; the wasm renderer
//! uploads it verbatim.

use wordlace_core::{Clue, Direction, Puzzle};
use wordlace_render::{
    Atlas, Rgba,
    quad::{GlyphQuad, layout_text, layout_text_centered},
};

use crate::{
    state::{View, ViewerState},
    theme::Palette,
};

bitflags::bitflags! {
    /// Highlight flags for one grid cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const ACTIVE_WORD = 0b0000_0010;
    }
}

/// Margin around the grid, as a fraction of the smaller canvas dimension.
const MARGIN_RATIO: f32 = 0.04;
/// Bottom strip reserved for the selected clue, as a fraction of height.
const CLUE_STRIP_RATIO: f32 = 0.18;
/// Gap between neighboring cells, as a fraction of the cell size.
const CELL_GAP_RATIO: f32 = 0.04;
/// Letter em size as a fraction of the cell size.
const LETTER_EM_RATIO: f32 = 0.62;
/// Letter baseline above the cell bottom, as a fraction of the cell size.
const LETTER_BASELINE_RATIO: f32 = 0.22;
/// Clue-number em size as a fraction of the cell size.
const NUMBER_EM_RATIO: f32 = 0.28;
/// Clue-number inset from the cell's top-left corner.
const NUMBER_INSET_RATIO: f32 = 0.07;
/// Clue-number baseline below the cell top, as a fraction of the cell size.
const NUMBER_BASELINE_RATIO: f32 = 0.38;
/// Clue-line em size as a fraction of the clue strip height.
const CLUE_EM_RATIO: f32 = 0.42;
/// List-view em size as a fraction of the canvas height.
const LIST_EM_RATIO: f32 = 0.032;

/// Pixel-space placement of the grid on the canvas, plus the pixel-to-clip
/// conversion the quads need.
///
/// `y` grows downward in pixel space (matching pointer events) and upward in
/// clip space; the conversion happens at the edges of this type only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    canvas: [f32; 2],
    cell: f32,
    origin: [f32; 2],
    columns: usize,
    rows: usize,
}

impl Layout {
    /// Fits the puzzle's grid onto a canvas of the given pixel size.
    #[must_use]
    pub fn for_viewport(puzzle: &Puzzle, canvas_width: f32, canvas_height: f32) -> Self {
        let margin = canvas_width.min(canvas_height) * MARGIN_RATIO;
        let avail_w = canvas_width - 2.0 * margin;
        let avail_h = canvas_height * (1.0 - CLUE_STRIP_RATIO) - 2.0 * margin;

        #[expect(clippy::cast_precision_loss)]
        let (columns, rows) = (puzzle.width as f32, puzzle.height as f32);
        let cell = (avail_w / columns).min(avail_h / rows).max(1.0);
        let origin = [(canvas_width - cell * columns) * 0.5, margin];

        Self {
            canvas: [canvas_width, canvas_height],
            cell,
            origin,
            columns: puzzle.width,
            rows: puzzle.height,
        }
    }

    /// Cell size in pixels.
    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// The grid cell under a pixel coordinate, if any.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let dx = x - self.origin[0];
        let dy = y - self.origin[1];
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (col, row) = ((dx / self.cell) as usize, (dy / self.cell) as usize);
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    /// Top-left pixel corner of a cell.
    fn cell_top_left(&self, row: usize, col: usize) -> [f32; 2] {
        #[expect(clippy::cast_precision_loss)]
        let (row, col) = (row as f32, col as f32);
        [
            self.origin[0] + col * self.cell,
            self.origin[1] + row * self.cell,
        ]
    }

    fn x_to_clip(&self, x: f32) -> f32 {
        x * 2.0 / self.canvas[0] - 1.0
    }

    fn y_to_clip(&self, y: f32) -> f32 {
        1.0 - y * 2.0 / self.canvas[1]
    }

    /// Em-to-clip scale for a glyph of `em` pixels.
    fn em_scale(&self, em: f32) -> [f32; 2] {
        [em * 2.0 / self.canvas[0], em * 2.0 / self.canvas[1]]
    }

    /// Baseline of the selected-clue line, in pixels.
    fn clue_baseline(&self) -> f32 {
        self.canvas[1] * (1.0 - CLUE_STRIP_RATIO * 0.45)
    }
}

/// Computes the highlight flags for one cell.
#[must_use]
pub fn cell_visual_state(state: &ViewerState, row: usize, col: usize) -> CellVisualState {
    let mut vs = CellVisualState::empty();
    let Some(cursor) = state.cursor() else {
        return vs;
    };
    if cursor.row == row && cursor.col == col {
        vs |= CellVisualState::SELECTED;
    }
    if let Some(clue) = state.selected_clue()
        && Puzzle::clue_positions(clue, cursor.dir).any(|cell| cell == (row, col))
    {
        vs |= CellVisualState::ACTIVE_WORD;
    }
    vs
}

/// Picks the cell fill for a visual state.
#[must_use]
pub fn cell_background(vs: CellVisualState, palette: &Palette) -> Rgba {
    if vs.contains(CellVisualState::SELECTED) {
        palette.cursor
    } else if vs.contains(CellVisualState::ACTIVE_WORD) {
        palette.active_word
    } else {
        palette.cell_background
    }
}

/// Builds the vertex buffer for the current frame.
#[must_use]
pub fn build_scene(
    state: &ViewerState,
    atlas: &Atlas,
    palette: &Palette,
    layout: &Layout,
) -> Vec<f32> {
    match state.view() {
        View::Crossword => crossword_scene(state, atlas, palette, layout),
        View::List => list_scene(state, atlas, layout),
    }
}

fn crossword_scene(
    state: &ViewerState,
    atlas: &Atlas,
    palette: &Palette,
    layout: &Layout,
) -> Vec<f32> {
    let puzzle = state.puzzle();
    let mut out = Vec::new();

    // Cell fills first so glyphs composite over them.
    if let Some(solid_uv) = atlas.solid_uv() {
        let gap = layout.cell_size() * CELL_GAP_RATIO;
        for row in 0..puzzle.height {
            for col in 0..puzzle.width {
                if puzzle.is_block(row, col) {
                    continue;
                }
                let background = cell_background(cell_visual_state(state, row, col), palette);
                let top_left = layout.cell_top_left(row, col);
                GlyphQuad {
                    min: [
                        layout.x_to_clip(top_left[0] + gap),
                        layout.y_to_clip(top_left[1] + layout.cell_size() - gap),
                    ],
                    max: [
                        layout.x_to_clip(top_left[0] + layout.cell_size() - gap),
                        layout.y_to_clip(top_left[1] + gap),
                    ],
                    uv: solid_uv,
                    background,
                }
                .push_to(&mut out);
            }
        }
    }

    // Letters, centered per cell.
    let letter_scale = layout.em_scale(layout.cell_size() * LETTER_EM_RATIO);
    for row in 0..puzzle.height {
        for col in 0..puzzle.width {
            let Some(letter) = state.display_letter(row, col) else {
                continue;
            };
            let top_left = layout.cell_top_left(row, col);
            let center_x = layout.x_to_clip(top_left[0] + layout.cell_size() * 0.5);
            let baseline = layout.y_to_clip(
                top_left[1] + layout.cell_size() * (1.0 - LETTER_BASELINE_RATIO),
            );
            layout_text_centered(
                &mut out,
                atlas,
                &letter.to_string(),
                center_x,
                baseline,
                letter_scale,
                Rgba::TRANSPARENT,
            );
        }
    }

    // Clue numbers at entry heads; a cell that heads both directions gets
    // its number once.
    let number_scale = layout.em_scale(layout.cell_size() * NUMBER_EM_RATIO);
    let mut numbered: Vec<(usize, usize)> = Vec::new();
    for clues in [&puzzle.across_clues, &puzzle.down_clues] {
        for clue in clues {
            let head = (clue.row, clue.column);
            if numbered.contains(&head) {
                continue;
            }
            numbered.push(head);
            let top_left = layout.cell_top_left(clue.row, clue.column);
            let origin = [
                layout.x_to_clip(top_left[0] + layout.cell_size() * NUMBER_INSET_RATIO),
                layout.y_to_clip(top_left[1] + layout.cell_size() * NUMBER_BASELINE_RATIO),
            ];
            layout_text(
                &mut out,
                atlas,
                &clue.number.to_string(),
                origin,
                number_scale,
                Rgba::TRANSPARENT,
            );
        }
    }

    // The selected clue under the grid, shrunk to fit when necessary.
    if let (Some(cursor), Some(clue)) = (state.cursor(), state.selected_clue()) {
        let line = clue_line(clue, cursor.dir);
        let mut em = layout.canvas[1] * CLUE_STRIP_RATIO * CLUE_EM_RATIO;
        let avail = layout.canvas[0] * (1.0 - 2.0 * MARGIN_RATIO);
        let width = atlas.measure(&line, em);
        if width > avail {
            em *= avail / width;
        }
        layout_text_centered(
            &mut out,
            atlas,
            &line,
            0.0,
            layout.y_to_clip(layout.clue_baseline()),
            layout.em_scale(em),
            Rgba::TRANSPARENT,
        );
    }

    out
}

fn clue_line(clue: &Clue, dir: Direction) -> String {
    let dir_name = match dir {
        Direction::Across => "Across",
        Direction::Down => "Down",
    };
    format!("{} {}: {}", clue.number, dir_name, clue.text)
}

fn list_scene(state: &ViewerState, atlas: &Atlas, layout: &Layout) -> Vec<f32> {
    let puzzle = state.puzzle();
    let mut out = Vec::new();

    let em = layout.canvas[1] * LIST_EM_RATIO;
    let scale = layout.em_scale(em);
    let line_step = em * atlas.line_height;
    let margin = layout.canvas[0].min(layout.canvas[1]) * MARGIN_RATIO;
    let left = layout.x_to_clip(margin);
    let bottom = layout.canvas[1] - margin;
    let mut baseline = margin + em;

    let push_line = |out: &mut Vec<f32>, text: &str, baseline: f32| {
        layout_text(
            out,
            atlas,
            text,
            [left, layout.y_to_clip(baseline)],
            scale,
            Rgba::TRANSPARENT,
        );
    };

    push_line(&mut out, &puzzle.title, baseline);
    baseline += line_step * 1.5;

    for (heading, clues) in [("Across", &puzzle.across_clues), ("Down", &puzzle.down_clues)] {
        if baseline > bottom {
            break;
        }
        push_line(&mut out, heading, baseline);
        baseline += line_step;
        for clue in clues {
            if baseline > bottom {
                break;
            }
            push_line(&mut out, &format!("{}. {}", clue.number, clue.text), baseline);
            baseline += line_step;
        }
        baseline += line_step * 0.5;
    }

    out
}

#[cfg(test)]
mod tests {
    use wordlace_core::Clue;
    use wordlace_render::quad::{FLOATS_PER_VERTEX, VERTICES_PER_GLYPH};

    use super::*;
    use crate::{state::ViewerState, theme::Theme};

    const QUAD_FLOATS: usize = VERTICES_PER_GLYPH * FLOATS_PER_VERTEX;

    fn test_state() -> ViewerState {
        // 5 playable cells, two entry heads.
        let puzzle = Puzzle::builder(3, 3)
            .grid("CAT.O..T.")
            .across(Clue::new(1, 0, 0, 3, "Feline"))
            .down(Clue::new(2, 0, 1, 3, "Bed for a guest"))
            .build();
        ViewerState::new(puzzle)
    }

    fn ascii_atlas() -> Atlas {
        use wordlace_render::AtlasGlyph;
        let mut glyphs = Vec::new();
        for i in 32u8..=126 {
            glyphs.push(AtlasGlyph {
                codepoint: i as char,
                uv: [0.0, 0.0, 0.1, 0.1],
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

    #[test]
    fn layout_maps_pixels_back_to_cells() {
        let state = test_state();
        let layout = Layout::for_viewport(state.puzzle(), 600.0, 800.0);

        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            let top_left = layout.cell_top_left(row, col);
            let center = (
                top_left[0] + layout.cell_size() * 0.5,
                top_left[1] + layout.cell_size() * 0.5,
            );
            assert_eq!(layout.cell_at(center.0, center.1), Some((row, col)));
        }

        // Outside the grid on every side.
        assert_eq!(layout.cell_at(-5.0, 10.0), None);
        assert_eq!(layout.cell_at(5.0, 799.0), None);
    }

    #[test]
    fn visual_state_tracks_cursor_and_active_word() {
        let mut state = test_state();
        assert_eq!(cell_visual_state(&state, 0, 0), CellVisualState::empty());

        state.select_cell(0, 0);
        assert_eq!(
            cell_visual_state(&state, 0, 0),
            CellVisualState::SELECTED | CellVisualState::ACTIVE_WORD
        );
        assert_eq!(cell_visual_state(&state, 0, 2), CellVisualState::ACTIVE_WORD);
        // An unrelated cell stays untinted.
        assert_eq!(cell_visual_state(&state, 1, 1), CellVisualState::empty());
    }

    #[test]
    fn lookahead_cell_is_not_part_of_the_active_word() {
        // The lookup resolves the cell just past an entry to that entry, but
        // the highlight uses the exact span: (0, 3) stays untinted.
        let puzzle = Puzzle::builder(5, 1)
            .grid("CAT.S")
            .across(Clue::new(1, 0, 0, 3, "Feline"))
            .build();
        let mut state = ViewerState::new(puzzle);
        state.select_cell(0, 1);
        assert!(state.selected_clue().is_some());
        assert_eq!(cell_visual_state(&state, 0, 3), CellVisualState::empty());
    }

    #[test]
    fn cell_background_priority_is_cursor_then_word() {
        let theme = Theme::default();
        let palette = theme.palette_for(false);
        assert_eq!(
            cell_background(
                CellVisualState::SELECTED | CellVisualState::ACTIVE_WORD,
                palette
            ),
            palette.cursor
        );
        assert_eq!(
            cell_background(CellVisualState::ACTIVE_WORD, palette),
            palette.active_word
        );
        assert_eq!(
            cell_background(CellVisualState::empty(), palette),
            palette.cell_background
        );
    }

    #[test]
    fn crossword_scene_covers_cells_letters_and_numbers() {
        let state = test_state();
        let atlas = ascii_atlas();
        let theme = Theme::default();
        let layout = Layout::for_viewport(state.puzzle(), 600.0, 800.0);

        let vertices = build_scene(&state, &atlas, theme.palette_for(false), &layout);
        assert_eq!(vertices.len() % QUAD_FLOATS, 0);

        // 5 cell fills + 5 letters + 2 clue numbers, no clue line without a
        // selection.
        assert_eq!(vertices.len() / QUAD_FLOATS, 5 + 5 + 2);
    }

    #[test]
    fn selecting_a_cell_adds_the_clue_line_and_highlights() {
        let mut state = test_state();
        let atlas = ascii_atlas();
        let theme = Theme::default();
        let palette = theme.palette_for(false);
        let layout = Layout::for_viewport(state.puzzle(), 600.0, 800.0);

        state.select_cell(0, 2);
        let vertices = build_scene(&state, &atlas, palette, &layout);

        let expected_line = "1 Across: Feline";
        assert_eq!(
            vertices.len() / QUAD_FLOATS,
            5 + 5 + 2 + expected_line.chars().count()
        );

        // Some quad carries the cursor tint, some the active-word tint.
        let has_color = |color: Rgba| {
            vertices.chunks(FLOATS_PER_VERTEX).any(|vertex| {
                vertex[4] == color.r && vertex[5] == color.g && vertex[6] == color.b
            })
        };
        assert!(has_color(palette.cursor));
        assert!(has_color(palette.active_word));
    }

    #[test]
    fn shared_entry_head_is_numbered_once() {
        // Both entries start at (0, 0): one number glyph run, not two.
        let puzzle = Puzzle::builder(3, 3)
            .grid("CATO..T..")
            .across(Clue::new(1, 0, 0, 3, "Feline"))
            .down(Clue::new(1, 0, 0, 3, "Bed for a guest"))
            .build();
        let state = ViewerState::new(puzzle);
        let atlas = ascii_atlas();
        let theme = Theme::default();
        let layout = Layout::for_viewport(state.puzzle(), 600.0, 800.0);

        let vertices = build_scene(&state, &atlas, theme.palette_for(false), &layout);
        // 5 playable cells, 5 letters, 1 shared number.
        assert_eq!(vertices.len() / QUAD_FLOATS, 5 + 5 + 1);
    }

    #[test]
    fn list_scene_renders_title_and_clue_lines() {
        let mut state = test_state();
        state.set_view(View::List);
        let atlas = ascii_atlas();
        let theme = Theme::default();
        let layout = Layout::for_viewport(state.puzzle(), 600.0, 800.0);

        let vertices = build_scene(&state, &atlas, theme.palette_for(false), &layout);
        assert_eq!(vertices.len() % QUAD_FLOATS, 0);

        // Headings and both clue texts (plus spaces) are all laid out.
        let glyphs: usize = ["Across", "Down", "1. Feline", "2. Bed for a guest"]
            .iter()
            .map(|line| line.chars().count())
            .sum();
        // Title is empty in the builder default, so it contributes nothing.
        assert_eq!(vertices.len() / QUAD_FLOATS, glyphs);
    }
}
