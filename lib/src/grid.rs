use crate::direction::Direction;
use crate::results::WordSearchError;
use rand::Rng;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest cell count whose storage size still fits in an allocation.
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<Option<char>>();

/// Character used by [`Grid`]'s `Display` impl for cells that haven't been written yet.
pub const EMPTY_CELL_DISPLAY: char = '.';

/// A fixed-size, row-major matrix of letters. Each cell is either empty or holds one letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates a grid with every cell empty. Fails if either dimension is zero, or if the grid
    /// has too many cells to store.
    ///
    /// ```
    /// use rs_word_search::Grid;
    /// use rs_word_search::WordSearchError;
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.get(2, 3), None);
    /// assert_eq!(
    ///     Grid::new(0, 4),
    ///     Err(WordSearchError::InvalidDimension { rows: 0, cols: 4 }));
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Grid, WordSearchError> {
        let len = match rows.checked_mul(cols) {
            Some(len) if len > 0 && len <= MAX_CELLS => len,
            _ => return Err(WordSearchError::InvalidDimension { rows, cols }),
        };
        Ok(Grid {
            rows,
            cols,
            cells: vec![None; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the letter at the given cell, or `None` if the cell is empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).and_then(|index| self.cells[index])
    }

    /// True once every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.cols)
    }

    /// Whether `word` could be written starting at `(row, col)` and stepping in `direction`.
    ///
    /// Every target cell must be in bounds, and either empty or already holding the same letter.
    /// This never modifies the grid.
    pub fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        word.chars().enumerate().all(|(i, letter)| {
            match direction
                .step_from(row, col, i)
                .and_then(|(r, c)| self.index(r, c))
            {
                Some(index) => self.cells[index].map_or(true, |existing| existing == letter),
                None => false,
            }
        })
    }

    /// Writes `word` starting at `(row, col)` and stepping in `direction`.
    ///
    /// This does not re-check for conflicts: call [`Grid::can_place`] first. Overlapping letters
    /// are overwritten, and a word that runs off the grid panics.
    pub fn place(&mut self, word: &str, row: usize, col: usize, direction: Direction) {
        let (d_row, d_col) = direction.delta();
        for (i, letter) in word.chars().enumerate() {
            let r = (row as isize + i as isize * d_row) as usize;
            let c = (col as isize + i as isize * d_col) as usize;
            assert!(r < self.rows && c < self.cols, "word runs off the grid");
            self.cells[r * self.cols + c] = Some(letter);
        }
    }

    /// Fills every empty cell with an uppercase letter chosen uniformly at random.
    pub fn fill_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.fill_remaining_with(|| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }

    /// Fills every empty cell with the next letter produced by `next_letter`, in row-major order.
    pub fn fill_remaining_with<F>(&mut self, mut next_letter: F)
    where
        F: FnMut() -> char,
    {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(next_letter());
        }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.unwrap_or(EMPTY_CELL_DISPLAY).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(2, 3).unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.cells.iter().all(Option::is_none));
        assert!(!grid.is_full());
    }

    #[test]
    fn new_rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(WordSearchError::InvalidDimension {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert!(Grid::new(usize::MAX / 2 + 1, 1).is_err());
    }

    #[test]
    fn place_writes_along_direction() {
        let mut grid = Grid::new(3, 3).unwrap();

        grid.place("CAT", 2, 2, Direction::UpLeft);

        assert_eq!(grid.get(2, 2), Some('C'));
        assert_eq!(grid.get(1, 1), Some('A'));
        assert_eq!(grid.get(0, 0), Some('T'));
        assert_eq!(grid.get(0, 1), None);
    }

    #[test]
    fn can_place_allows_matching_overlap() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.place("CAT", 0, 0, Direction::Right);

        assert!(grid.can_place("CAR", 0, 0, Direction::Down));
        assert!(grid.can_place("TAB", 0, 2, Direction::DownLeft));
        assert!(!grid.can_place("DOG", 0, 0, Direction::Down));
        assert!(!grid.can_place("BAT", 0, 0, Direction::Right));
    }

    #[test]
    fn can_place_rejects_out_of_bounds() {
        let grid = Grid::new(3, 3).unwrap();

        assert!(!grid.can_place("CAT", 0, 1, Direction::Right));
        assert!(!grid.can_place("CAT", 1, 0, Direction::Up));
        assert!(!grid.can_place("CATS", 0, 0, Direction::DownRight));
        assert!(!grid.can_place("C", 3, 0, Direction::Right));
    }

    #[test]
    fn fill_remaining_keeps_placed_letters() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.place("word", 1, 0, Direction::Right);

        grid.fill_remaining(&mut StdRng::seed_from_u64(7));

        assert!(grid.is_full());
        assert_eq!(grid.get(1, 0), Some('w'));
        assert_eq!(grid.get(1, 3), Some('d'));
        for row in 0..4 {
            for col in 0..4 {
                if row != 1 {
                    assert!(grid.get(row, col).unwrap().is_ascii_uppercase());
                }
            }
        }
    }

    #[test]
    fn fill_remaining_with_visits_empty_cells_in_order() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.place("A", 0, 1, Direction::Down);
        let mut letters = "XYZ".chars();

        grid.fill_remaining_with(|| letters.next().unwrap());

        assert_eq!(grid.to_string(), "X A\nY Z\n");
    }

    #[test]
    fn display_marks_empty_cells() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.place("HI", 1, 1, Direction::Right);

        assert_eq!(grid.to_string(), ". . .\n. H I\n");
    }
}
