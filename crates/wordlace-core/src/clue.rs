use serde::{Deserialize, Serialize};

/// A single crossword entry: a numbered starting cell, a direction-implied
/// span length, and the clue text shown to the player.
///
/// The direction is not stored on the clue itself; it is implied by which of
/// the puzzle's two clue lists the clue lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    /// Sequence number as printed in the puzzle (1-Across, 4-Down, ...).
    pub number: u32,
    /// Row of the starting cell (0-indexed).
    pub row: usize,
    /// Column of the starting cell (0-indexed).
    pub column: usize,
    /// Number of cells the answer spans in the clue's direction.
    pub length: usize,
    /// Clue text.
    pub text: String,
}

impl Clue {
    /// Creates a clue from its components.
    #[must_use]
    pub fn new(number: u32, row: usize, column: usize, length: usize, text: &str) -> Self {
        Self {
            number,
            row,
            column,
            length,
            text: text.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_loader_json() {
        let json = r#"{"number":7,"row":2,"column":0,"length":5,"text":"Opera solo"}"#;
        let clue: Clue = serde_json::from_str(json).unwrap();
        assert_eq!(clue, Clue::new(7, 2, 0, 5, "Opera solo"));
    }
}
