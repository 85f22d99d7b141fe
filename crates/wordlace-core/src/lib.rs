//! Core data model for crossword puzzles.
//!
//! This crate defines the immutable puzzle value types ([`Puzzle`], [`Clue`],
//! [`Cell`]) and the cursor types ([`Position`], [`Direction`]) shared by the
//! rendering and application layers, together with the one piece of real
//! domain logic: resolving the clue that owns a given grid cell
//! ([`Puzzle::find_clue`]).
//!
//! All types here are plain values with no interior mutability; the puzzle is
//! read-only for the whole session once loaded. Lookups are total functions
//! returning [`Option`]: a cursor parked on a block cell is a normal
//! "no clue here" outcome, never an error.
//!
//! # Example
//!
//! ```
//! use wordlace_core::{Clue, Direction, Position, Puzzle};
//!
//! let puzzle = Puzzle::builder(3, 3)
//!     .grid("CAT......")
//!     .across(Clue::new(1, 0, 0, 3, "Feline"))
//!     .build();
//!
//! let pos = Position::new(0, 2, Direction::Across);
//! let clue = puzzle.find_clue(pos).expect("cell belongs to 1-Across");
//! assert_eq!(clue.number, 1);
//! ```

pub use self::{
    clue::Clue,
    position::{Direction, Position},
    puzzle::{BLOCK, Cell, Puzzle, PuzzleBuilder, PuzzleError},
};

mod clue;
mod position;
mod puzzle;
