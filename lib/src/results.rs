use crate::direction::Direction;
use crate::grid::Grid;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates that an error occurred while trying to build a word search.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordSearchError {
    /// The grid must have at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    /// The retry budget ran out. Lists the words that were still unplaced after the final
    /// attempt.
    #[error(
        "could not place the following words after {attempts} attempts: {}",
        .unplaced.join(", ")
    )]
    PlacementInfeasible {
        unplaced: Vec<String>,
        attempts: usize,
    },
    /// The word at the given index of the input is empty.
    #[error("the word at index {0} is empty")]
    EmptyWord(usize),
    /// Reading a word list failed.
    #[error("unable to read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordSearchError {
    fn from(e: io::Error) -> Self {
        WordSearchError::Io(e.to_string())
    }
}

/// Where a single word was placed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRecord {
    pub word: String,
    /// Row of the word's first letter.
    pub row: usize,
    /// Column of the word's first letter.
    pub col: usize,
    pub direction: Direction,
}

impl PlacementRecord {
    /// Number of cells covered by the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the `(row, col)` of every cell covered by the word, from its first letter to its
    /// last.
    ///
    /// ```
    /// use rs_word_search::{Direction, PlacementRecord};
    ///
    /// let record = PlacementRecord {
    ///     word: "CAT".to_string(),
    ///     row: 2,
    ///     col: 0,
    ///     direction: Direction::UpRight,
    /// };
    /// assert_eq!(record.cells(), vec![(2, 0), (1, 1), (0, 2)]);
    /// ```
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.len())
            .map_while(|i| self.direction.step_from(self.row, self.col, i))
            .collect()
    }

    /// The `(row, col)` of the word's last letter.
    pub fn end(&self) -> (usize, usize) {
        let steps = self.len().saturating_sub(1);
        self.direction
            .step_from(self.row, self.col, steps)
            .unwrap_or((self.row, self.col))
    }
}

/// A finished puzzle: a fully filled grid along with where each word was hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordSearch {
    pub grid: Grid,
    /// Placements in the order the words were placed (longest first).
    pub placements: Vec<PlacementRecord>,
}
