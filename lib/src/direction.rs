#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the eight directions a word can be laid out in, as a unit step in `(row, col)` space.
///
/// Rows grow downwards and columns grow to the right, so [`Direction::Down`] is `(1, 0)` and
/// [`Direction::Right`] is `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Down,
    Right,
    DownRight,
    UpRight,
    DownLeft,
    UpLeft,
    Left,
    Up,
}

impl Direction {
    /// Every direction, in the default placement order.
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::Right,
        Direction::DownRight,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::Left,
        Direction::Up,
    ];

    /// Returns the `(row, col)` step taken for each subsequent letter.
    ///
    /// ```
    /// use rs_word_search::Direction;
    ///
    /// assert_eq!(Direction::UpRight.delta(), (-1, 1));
    /// ```
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    /// True for the four directions that move along both axes.
    pub fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }

    /// Returns the cell `steps` steps away from `(row, col)`, or `None` if it would fall above or
    /// to the left of the grid. The caller is responsible for checking the far edges.
    pub(crate) fn step_from(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let (d_row, d_col) = self.delta();
        let target_row = offset(row, d_row, steps)?;
        let target_col = offset(col, d_col, steps)?;
        Some((target_row, target_col))
    }
}

fn offset(start: usize, delta: isize, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(start),
        1 => start.checked_add(steps),
        _ => start.checked_sub(steps),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_directions_are_distinct_unit_steps() {
        let deltas: HashSet<(isize, isize)> = Direction::ALL.iter().map(|d| d.delta()).collect();

        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        assert!(deltas
            .iter()
            .all(|(d_row, d_col)| d_row.abs() <= 1 && d_col.abs() <= 1));
    }

    #[test]
    fn four_directions_are_diagonal() {
        assert_eq!(Direction::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }

    #[test]
    fn step_from_stops_at_near_edges() {
        assert_eq!(Direction::Up.step_from(2, 2, 2), Some((0, 2)));
        assert_eq!(Direction::Up.step_from(2, 2, 3), None);
        assert_eq!(Direction::UpLeft.step_from(1, 3, 2), None);
        assert_eq!(Direction::DownRight.step_from(1, 3, 2), Some((3, 5)));
    }
}
