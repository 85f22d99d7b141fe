use serde::{Deserialize, Serialize};

use crate::{Clue, Direction, Position};

/// Marker used in the grid string for a block (non-playable) square.
pub const BLOCK: char = '.';

/// An immutable crossword puzzle as supplied by the loader.
///
/// The grid is a `width × height` row-major string of solution letters with
/// [`BLOCK`] marking black squares. The two clue lists are ordered by
/// appearance (increasing number); clues never overlap within the same
/// direction in a well-formed puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Loader-assigned identifier.
    pub id: String,
    /// Puzzle title.
    pub title: String,
    /// Constructor credit line.
    pub creators: String,
    /// Publisher attribution.
    pub attribution: String,
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Row-major solution string, one char per cell, [`BLOCK`] for blocks.
    pub grid: String,
    /// Across entries, in appearance order.
    pub across_clues: Vec<Clue>,
    /// Down entries, in appearance order.
    pub down_clues: Vec<Clue>,
}

impl Puzzle {
    /// Starts building a puzzle with the given dimensions.
    ///
    /// Intended for tests and examples; real puzzles arrive deserialized from
    /// the loader and should be checked with [`Puzzle::validate`].
    #[must_use]
    pub fn builder(width: usize, height: usize) -> PuzzleBuilder {
        PuzzleBuilder::new(width, height)
    }

    /// Resolves the clue that owns the cursor cell, if any.
    ///
    /// Scans the clue list for the cursor's direction in order and returns the
    /// first entry whose span contains the cell. The right-edge test is
    /// inclusive: the cell immediately past an entry's last letter still
    /// resolves to that entry, giving the cursor one cell of lookahead when it
    /// lands just beyond a word. First match wins, so the result is stable
    /// even if overlapping clues ever slip into the list.
    ///
    /// Returns `None` when no entry covers the cell: a cursor parked on a
    /// block, or past every entry in its row or column. Never panics.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlace_core::{Clue, Direction, Position, Puzzle};
    ///
    /// let puzzle = Puzzle::builder(5, 5)
    ///     .grid("CAT.S....O....L....O.....")
    ///     .across(Clue::new(1, 0, 0, 3, "Feline"))
    ///     .down(Clue::new(2, 0, 4, 4, "Single performance"))
    ///     .build();
    ///
    /// let across = Position::new(0, 1, Direction::Across);
    /// assert_eq!(puzzle.find_clue(across).unwrap().number, 1);
    ///
    /// let down = Position::new(2, 4, Direction::Down);
    /// assert_eq!(puzzle.find_clue(down).unwrap().number, 2);
    ///
    /// let empty_row = Position::new(1, 0, Direction::Across);
    /// assert!(puzzle.find_clue(empty_row).is_none());
    /// ```
    #[must_use]
    pub fn find_clue(&self, position: Position) -> Option<&Clue> {
        let Position { row, col, dir } = position;
        match dir {
            Direction::Across => self.across_clues.iter().find(|clue| {
                row == clue.row && col >= clue.column && col <= clue.column + clue.length
            }),
            Direction::Down => self.down_clues.iter().find(|clue| {
                col == clue.column && row >= clue.row && row <= clue.row + clue.length
            }),
        }
    }

    /// Returns the cells an entry actually spans, as `(row, col)` pairs.
    ///
    /// Unlike the lookup in [`Puzzle::find_clue`], the span here is exact:
    /// `length` cells starting at the entry's head. Use this for highlighting
    /// the active word so the lookahead cell is never tinted.
    #[must_use]
    pub fn clue_positions(
        clue: &Clue,
        direction: Direction,
    ) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Clue {
            row, column, length, ..
        } = *clue;
        (0..length).map(move |i| match direction {
            Direction::Across => (row, column + i),
            Direction::Down => (row + i, column),
        })
    }

    /// Returns the play-state cell at `(row, col)`, or `None` out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let solution = self.grid.chars().nth(row * self.width + col)?;
        Some(Cell::from_solution(solution))
    }

    /// Whether `(row, col)` is a block square. Out-of-bounds counts as a
    /// block, so callers can probe neighbors without bounds checks.
    #[must_use]
    pub fn is_block(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none_or(|cell| !cell.is_cell)
    }

    /// Builds the full play grid in row-major order.
    ///
    /// The core never mutates cells; the returned vector is owned by the UI
    /// layer, which records player input in it.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        self.grid.chars().map(Cell::from_solution).collect()
    }

    /// Checks the structural invariants a loaded puzzle must satisfy.
    ///
    /// The grid string must cover exactly `width × height` cells, every clue
    /// head must be an in-bounds cell, and every span must end strictly
    /// within the grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::GridSizeMismatch`] or
    /// [`PuzzleError::ClueOutOfBounds`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let cell_count = self.grid.chars().count();
        if cell_count != self.width * self.height {
            return Err(PuzzleError::GridSizeMismatch {
                expected: self.width * self.height,
                actual: cell_count,
            });
        }
        for (direction, clues) in [
            (Direction::Across, &self.across_clues),
            (Direction::Down, &self.down_clues),
        ] {
            for clue in clues {
                let in_bounds = clue.row < self.height
                    && clue.column < self.width
                    && match direction {
                        Direction::Across => clue.column + clue.length <= self.width,
                        Direction::Down => clue.row + clue.length <= self.height,
                    };
                if !in_bounds {
                    return Err(PuzzleError::ClueOutOfBounds {
                        number: clue.number,
                        direction,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Per-cell play state derived from the grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Whether the square is playable (not a block).
    pub is_cell: bool,
    /// Solution letter, `None` for blocks.
    pub solution: Option<char>,
    /// Player-entered letter; the core never writes this.
    pub value: Option<char>,
}

impl Cell {
    fn from_solution(solution: char) -> Self {
        if solution == BLOCK {
            Self {
                is_cell: false,
                solution: None,
                value: None,
            }
        } else {
            Self {
                is_cell: true,
                solution: Some(solution),
                value: None,
            }
        }
    }
}

/// Structural problems detected in a loaded puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The grid string does not cover the declared dimensions.
    #[display("grid has {actual} cells, expected {expected}")]
    GridSizeMismatch {
        /// `width × height` of the declared dimensions.
        expected: usize,
        /// Cell count of the grid string.
        actual: usize,
    },
    /// A clue starts or ends outside the grid.
    #[display("{number}-{direction} extends outside the grid")]
    ClueOutOfBounds {
        /// Printed number of the offending clue.
        number: u32,
        /// Direction list the clue came from.
        direction: Direction,
    },
}

/// Builder for in-memory puzzles in tests and examples.
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    puzzle: Puzzle,
}

impl PuzzleBuilder {
    fn new(width: usize, height: usize) -> Self {
        Self {
            puzzle: Puzzle {
                id: String::new(),
                title: String::new(),
                creators: String::new(),
                attribution: String::new(),
                width,
                height,
                grid: BLOCK.to_string().repeat(width * height),
                across_clues: Vec::new(),
                down_clues: Vec::new(),
            },
        }
    }

    /// Replaces the row-major grid string.
    #[must_use]
    pub fn grid(mut self, grid: &str) -> Self {
        self.puzzle.grid = grid.to_owned();
        self
    }

    /// Appends an across entry.
    #[must_use]
    pub fn across(mut self, clue: Clue) -> Self {
        self.puzzle.across_clues.push(clue);
        self
    }

    /// Appends a down entry.
    #[must_use]
    pub fn down(mut self, clue: Clue) -> Self {
        self.puzzle.down_clues.push(clue);
        self
    }

    /// Finishes the puzzle.
    #[must_use]
    pub fn build(self) -> Puzzle {
        self.puzzle
    }
}
