use serde::{Deserialize, Serialize};

/// Traversal direction of a crossword entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Left-to-right entries.
    #[display("across")]
    Across,
    /// Top-to-bottom entries.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlace_core::Direction;
    ///
    /// assert_eq!(Direction::Across.flip(), Direction::Down);
    /// assert_eq!(Direction::Down.flip(), Direction::Across);
    /// ```
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

/// A cursor location: the active cell plus the selected traversal direction.
///
/// Transient state owned by the UI layer; the core only reads it. The cell
/// coordinates are 0-indexed with `row` growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Row of the cursor cell (0-indexed).
    pub row: usize,
    /// Column of the cursor cell (0-indexed).
    pub col: usize,
    /// Active traversal direction.
    pub dir: Direction,
}

impl Position {
    /// Creates a position at the given cell and direction.
    #[must_use]
    pub const fn new(row: usize, col: usize, dir: Direction) -> Self {
        Self { row, col, dir }
    }

    /// Returns the same cell with the traversal direction flipped.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            dir: self.dir.flip(),
            ..self
        }
    }
}
