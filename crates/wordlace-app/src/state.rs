use wordlace_core::{Cell, Clue, Direction, Position, Puzzle};

/// Top-level screen the viewer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum View {
    /// The grid with the selected clue underneath.
    Crossword,
    /// The flat clue list.
    List,
}

/// All mutable session state: the loaded puzzle, the play grid, the cursor,
/// and the active view.
///
/// The puzzle itself stays immutable; player letters live in the cell vector
/// owned here.
#[derive(Debug, Clone)]
pub struct ViewerState {
    puzzle: Puzzle,
    cells: Vec<Cell>,
    cursor: Option<Position>,
    view: View,
}

impl ViewerState {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let cells = puzzle.cells();
        Self {
            puzzle,
            cells,
            cursor: None,
            view: View::Crossword,
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The clue owning the cursor cell in the cursor's direction, if any.
    #[must_use]
    pub fn selected_clue(&self) -> Option<&Clue> {
        self.puzzle.find_clue(self.cursor?)
    }

    /// Moves the cursor to a playable cell.
    ///
    /// Selecting the already-selected cell flips the traversal direction;
    /// selecting a block or out-of-bounds cell is ignored. Returns whether
    /// the cursor changed.
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        if self.puzzle.is_block(row, col) {
            return false;
        }
        let next = match self.cursor {
            Some(current) if current.row == row && current.col == col => current.flipped(),
            Some(current) => Position::new(row, col, current.dir),
            None => Position::new(row, col, Direction::Across),
        };
        self.cursor = Some(next);
        true
    }

    pub fn clear_selection(&mut self) {
        self.cursor = None;
    }

    /// Records a player letter in a playable cell.
    ///
    /// The grid's solution is untouched; only the play value changes. Writes
    /// to blocks or out-of-bounds cells are ignored.
    pub fn set_cell_value(&mut self, row: usize, col: usize, value: Option<char>) {
        if row >= self.puzzle.height || col >= self.puzzle.width {
            return;
        }
        let index = row * self.puzzle.width + col;
        if let Some(cell) = self.cells.get_mut(index)
            && cell.is_cell
        {
            cell.value = value;
        }
    }

    /// The letter to draw in a cell: the player's entry when present, the
    /// solution otherwise (the viewer shows completed grids).
    #[must_use]
    pub fn display_letter(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.puzzle.height || col >= self.puzzle.width {
            return None;
        }
        let cell = self.cells.get(row * self.puzzle.width + col)?;
        cell.value.or(cell.solution)
    }
}

#[cfg(test)]
mod tests {
    use wordlace_core::Clue;

    use super::*;

    fn test_state() -> ViewerState {
        let puzzle = Puzzle::builder(3, 3)
            .grid("CAT.O..T.")
            .across(Clue::new(1, 0, 0, 3, "Feline"))
            .down(Clue::new(2, 0, 1, 3, "Bed for a guest"))
            .build();
        ViewerState::new(puzzle)
    }

    #[test]
    fn selecting_a_block_is_ignored() {
        let mut state = test_state();
        assert!(!state.select_cell(1, 0));
        assert_eq!(state.cursor(), None);
        assert!(!state.select_cell(9, 9));
    }

    #[test]
    fn first_selection_defaults_to_across() {
        let mut state = test_state();
        assert!(state.select_cell(0, 1));
        assert_eq!(
            state.cursor(),
            Some(Position::new(0, 1, Direction::Across))
        );
    }

    #[test]
    fn reselecting_the_same_cell_flips_direction() {
        let mut state = test_state();
        state.select_cell(0, 1);
        state.select_cell(0, 1);
        assert_eq!(state.cursor(), Some(Position::new(0, 1, Direction::Down)));

        // Moving elsewhere keeps the flipped direction.
        state.select_cell(1, 1);
        assert_eq!(state.cursor(), Some(Position::new(1, 1, Direction::Down)));
    }

    #[test]
    fn selected_clue_follows_the_cursor() {
        let mut state = test_state();
        assert!(state.selected_clue().is_none());

        state.select_cell(0, 2);
        assert_eq!(state.selected_clue().unwrap().number, 1);

        // Same cell, flipped to down: column 2 has no down entry.
        state.select_cell(0, 2);
        assert!(state.selected_clue().is_none());

        state.clear_selection();
        assert!(state.selected_clue().is_none());
    }

    #[test]
    fn display_letter_prefers_the_player_value() {
        let mut state = test_state();
        assert_eq!(state.display_letter(0, 0), Some('C'));

        state.set_cell_value(0, 0, Some('K'));
        assert_eq!(state.display_letter(0, 0), Some('K'));

        state.set_cell_value(0, 0, None);
        assert_eq!(state.display_letter(0, 0), Some('C'));

        // Blocks never carry a letter.
        state.set_cell_value(1, 0, Some('X'));
        assert_eq!(state.display_letter(1, 0), None);
    }

    #[test]
    fn view_switching_round_trips() {
        let mut state = test_state();
        assert!(state.view().is_crossword());
        state.set_view(View::List);
        assert!(state.view().is_list());
    }
}
