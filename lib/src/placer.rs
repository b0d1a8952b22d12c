use crate::direction::Direction;
use crate::grid::Grid;
use crate::results::*;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 20;
/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 20;
/// Default number of random trials per word within a single attempt.
pub const DEFAULT_MAX_ATTEMPTS_PER_WORD: usize = 100;
/// Default number of whole-grid attempts before giving up.
pub const DEFAULT_MAX_RETRIES: usize = 100;

/// Grid size and retry budgets used by the [`Placer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacerConfig {
    pub rows: usize,
    pub cols: usize,
    /// How many random positions to try for each word before declaring it unplaced in the
    /// current attempt.
    pub max_attempts_per_word: usize,
    /// How many fresh grids to try before failing with
    /// [`WordSearchError::PlacementInfeasible`].
    pub max_retries: usize,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        PlacerConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_attempts_per_word: DEFAULT_MAX_ATTEMPTS_PER_WORD,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl PlacerConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_max_attempts_per_word(mut self, max_attempts_per_word: usize) -> Self {
        self.max_attempts_per_word = max_attempts_per_word;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Hides words in a grid using randomized trials, retrying with a fresh grid whenever any word
/// can't be placed.
///
/// Words are placed longest first, since long words have the fewest valid positions. Each attempt
/// owns its own grid, and a failed attempt is discarded entirely, so a partially filled grid is
/// never returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placer {
    config: PlacerConfig,
}

impl Placer {
    pub fn new(config: PlacerConfig) -> Placer {
        Placer { config }
    }

    /// Places every word, drawing all randomness from `rng`.
    ///
    /// Given the same seeded `rng` and the same words, this always produces the same result.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rs_word_search::{Placer, PlacerConfig};
    ///
    /// let placer = Placer::new(PlacerConfig::default().with_size(5, 5));
    /// let puzzle = placer
    ///     .place_words(&["CAT", "DOG"], &mut StdRng::seed_from_u64(1))
    ///     .unwrap();
    ///
    /// assert!(puzzle.grid.is_full());
    /// assert_eq!(puzzle.placements.len(), 2);
    /// ```
    pub fn place_words<S, R>(
        &self,
        words: &[S],
        rng: &mut R,
    ) -> Result<WordSearch, WordSearchError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let ordered = self.prepare(words)?;

        let mut unplaced: Vec<String> = ordered.iter().map(|word| word.to_string()).collect();
        for attempt in 0..self.config.max_retries {
            match self.attempt(&ordered, rng)? {
                Ok(puzzle) => {
                    info!(
                        "Placed {} words after {} attempt(s)",
                        puzzle.placements.len(),
                        attempt + 1
                    );
                    return Ok(puzzle);
                }
                Err(residue) => {
                    debug!(
                        "Attempt {}/{} left {} word(s) unplaced: {}",
                        attempt + 1,
                        self.config.max_retries,
                        residue.len(),
                        residue.join(", ")
                    );
                    unplaced = residue;
                }
            }
        }
        Err(self.infeasible(unplaced))
    }

    /// Races whole-grid attempts across the rayon thread pool.
    ///
    /// Attempt `i` uses its own [`StdRng`] seeded from `seed` and `i`, and its own grid. The
    /// successful attempt with the lowest index wins, so the result only depends on `seed`. On
    /// failure, the error lists the words left over by the final attempt.
    pub fn place_words_parallel<S>(
        &self,
        words: &[S],
        seed: u64,
    ) -> Result<WordSearch, WordSearchError>
    where
        S: AsRef<str>,
    {
        let ordered = self.prepare(words)?;

        let found = (0..self.config.max_retries)
            .into_par_iter()
            .map(|attempt| {
                let mut rng = attempt_rng(seed, attempt);
                self.attempt(&ordered, &mut rng)
                    .map(|outcome| outcome.ok().map(|puzzle| (attempt, puzzle)))
            })
            .find_map_first(|outcome| match outcome {
                Ok(None) => None,
                other => Some(other),
            });

        match found {
            Some(Ok(Some((attempt, puzzle)))) => {
                info!(
                    "Placed {} words on attempt {} of a parallel run",
                    puzzle.placements.len(),
                    attempt + 1
                );
                Ok(puzzle)
            }
            Some(Err(e)) => Err(e),
            _ => {
                let unplaced = match self.config.max_retries.checked_sub(1) {
                    Some(last) => self
                        .attempt(&ordered, &mut attempt_rng(seed, last))?
                        .err()
                        .unwrap_or_default(),
                    None => ordered.iter().map(|word| word.to_string()).collect(),
                };
                Err(self.infeasible(unplaced))
            }
        }
    }

    /// Validates the input and returns the words in placement order: longest first, ties kept in
    /// input order.
    fn prepare<'a, S: AsRef<str>>(
        &self,
        words: &'a [S],
    ) -> Result<Vec<&'a str>, WordSearchError> {
        Grid::new(self.config.rows, self.config.cols)?;
        if let Some(index) = words.iter().position(|word| word.as_ref().is_empty()) {
            return Err(WordSearchError::EmptyWord(index));
        }
        let mut ordered: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
        ordered.sort_by_key(|word| Reverse(word.chars().count()));
        Ok(ordered)
    }

    /// Runs a single attempt on a fresh grid.
    ///
    /// Returns `Ok(Err(unplaced))` when some words didn't fit; every word is still tried so that
    /// the residue is complete.
    fn attempt<R: Rng + ?Sized>(
        &self,
        words: &[&str],
        rng: &mut R,
    ) -> Result<Result<WordSearch, Vec<String>>, WordSearchError> {
        let mut grid = Grid::new(self.config.rows, self.config.cols)?;
        let mut placements: Vec<PlacementRecord> = Vec::with_capacity(words.len());
        let mut unplaced: Vec<String> = Vec::new();
        let mut directions = Direction::ALL;

        for word in words {
            directions.shuffle(rng);
            match self.find_position(&grid, word, &directions, rng) {
                Some((row, col, direction)) => {
                    grid.place(word, row, col, direction);
                    trace!("Placed {} at ({}, {}) going {:?}", word, row, col, direction);
                    placements.push(PlacementRecord {
                        word: word.to_string(),
                        row,
                        col,
                        direction,
                    });
                }
                None => unplaced.push(word.to_string()),
            }
        }

        if !unplaced.is_empty() {
            return Ok(Err(unplaced));
        }
        grid.fill_remaining(rng);
        Ok(Ok(WordSearch { grid, placements }))
    }

    fn find_position<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        word: &str,
        directions: &[Direction],
        rng: &mut R,
    ) -> Option<(usize, usize, Direction)> {
        for _ in 0..self.config.max_attempts_per_word {
            let row = rng.gen_range(0..grid.rows());
            let col = rng.gen_range(0..grid.cols());
            let direction = *directions.choose(rng)?;
            if grid.can_place(word, row, col, direction) {
                return Some((row, col, direction));
            }
        }
        None
    }

    fn infeasible(&self, unplaced: Vec<String>) -> WordSearchError {
        warn!(
            "Gave up after {} attempt(s); unplaced: {}",
            self.config.max_retries,
            unplaced.join(", ")
        );
        WordSearchError::PlacementInfeasible {
            unplaced,
            attempts: self.config.max_retries,
        }
    }
}

fn attempt_rng(seed: u64, attempt: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (attempt as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Builds a word search using the given configuration and the thread-local random generator.
pub fn generate_word_search<S: AsRef<str>>(
    words: &[S],
    config: PlacerConfig,
) -> Result<WordSearch, WordSearchError> {
    Placer::new(config).place_words(words, &mut rand::thread_rng())
}
