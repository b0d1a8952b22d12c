//! Generates word-search puzzles.
//!
//! Words are hidden in a fixed-size letter grid along any of eight directions by a bounded,
//! randomized search: each word gets a budget of random trials, and any attempt that leaves a
//! word unplaced is thrown away and restarted on a fresh grid. Once every word fits, the
//! remaining cells are filled with random letters.
//!
//! ```
//! use rs_word_search::{generate_word_search, PlacerConfig};
//!
//! let puzzle = generate_word_search(&["RUST", "CRATE"], PlacerConfig::default()).unwrap();
//! assert_eq!(puzzle.placements.len(), 2);
//! println!("{}", puzzle.grid);
//! ```

mod direction;
mod grid;
mod placer;
mod results;
mod svg;
mod words;

pub use direction::Direction;
pub use grid::*;
pub use placer::*;
pub use results::*;
pub use svg::*;
pub use words::WordList;
