//! The 4x4 board value
//!
//! A `Grid` is plain `Copy` data. Engine operations take one by reference
//! and hand back a new one; nothing here keeps state between calls.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::stage::Stage;
use crate::consts::GRID_SIZE;

/// A single square: empty or holding exactly one stage
pub type Cell = Option<Stage>;

/// One row or column, in spatial order
pub type Line = [Cell; GRID_SIZE];

/// `(row, column)`, both in `0..GRID_SIZE`
pub type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [Line; GRID_SIZE],
}

impl Grid {
    pub const EMPTY: Grid = Grid {
        cells: [[None; GRID_SIZE]; GRID_SIZE],
    };

    pub const fn from_rows(cells: [Line; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a grid from stage labels. `""`, `"."` and `"-"` mark empty cells.
    pub fn from_labels(rows: &[&[&str]]) -> Result<Self> {
        if rows.len() != GRID_SIZE || rows.iter().any(|row| row.len() != GRID_SIZE) {
            return Err(EngineError::InvalidGridShape);
        }

        let mut grid = Self::EMPTY;
        for (r, row) in rows.iter().enumerate() {
            for (c, label) in row.iter().enumerate() {
                grid.cells[r][c] = match label.trim() {
                    "" | "." | "-" => None,
                    other => Some(other.parse()?),
                };
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> &[Line; GRID_SIZE] {
        &self.cells
    }

    pub fn get(&self, (row, col): Pos) -> Result<Cell> {
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .ok_or(EngineError::InvalidPosition(row, col))
    }

    pub fn set(&mut self, (row, col): Pos, cell: Cell) -> Result<()> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|line| line.get_mut(col))
            .ok_or(EngineError::InvalidPosition(row, col))?;
        *slot = cell;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    pub fn column(&self, col: usize) -> Line {
        core::array::from_fn(|row| self.cells[row][col])
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        self.cells[row] = line;
    }

    pub fn set_column(&mut self, col: usize, line: Line) {
        for (row, cell) in line.into_iter().enumerate() {
            self.cells[row][col] = cell;
        }
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, line)| {
            line.iter().enumerate().map(move |(c, &cell)| ((r, c), cell))
        })
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, cell)| cell.is_some())
    }

    /// True if some horizontally or vertically adjacent pair holds the same stage
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let Some(stage) = self.cells[r][c] else {
                    continue;
                };
                if c + 1 < GRID_SIZE && self.cells[r][c + 1] == Some(stage) {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.cells[r + 1][c] == Some(stage) {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no adjacent equal pair: no move can change this grid
    pub fn is_terminal(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    pub fn has_exit(&self) -> bool {
        self.iter().any(|(_, cell)| cell.is_some_and(Stage::is_exit))
    }

    pub fn highest_stage(&self) -> Option<Stage> {
        self.iter().filter_map(|(_, cell)| cell).max()
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Pos) -> &Self::Output {
        &self.cells[row][col]
    }
}

/// Free-function form of [`Grid::is_terminal`]
pub fn is_terminal(grid: &Grid) -> bool {
    grid.is_terminal()
}


#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::strategy::{arb_full_grid, arb_grid};
    use super::*;

    fn checkerboard() -> Grid {
        Grid::from_labels(&[
            &["Angel", "Pre-seed", "Angel", "Pre-seed"],
            &["Pre-seed", "Angel", "Pre-seed", "Angel"],
            &["Angel", "Pre-seed", "Angel", "Pre-seed"],
            &["Pre-seed", "Angel", "Pre-seed", "Angel"],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_labels_rejects_bad_shape() {
        assert_eq!(
            Grid::from_labels(&[&["Angel"; 4], &["Angel"; 4], &["Angel"; 4]]),
            Err(EngineError::InvalidGridShape)
        );
        assert_eq!(
            Grid::from_labels(&[&["Angel"; 4], &["Angel"; 3], &["Angel"; 4], &["Angel"; 4]]),
            Err(EngineError::InvalidGridShape)
        );
    }

    #[test]
    fn test_lines_round_trip_through_setters() {
        let mut grid = Grid::EMPTY;
        let line = [Some(Stage::Seed), None, Some(Stage::Ipo), None];
        grid.set_column(2, line);
        assert_eq!(grid.column(2), line);
        assert_eq!(grid.row(2), [None, None, Some(Stage::Ipo), None]);

        grid.set_row(3, line);
        assert_eq!(grid.row(3), line);
        assert_eq!(grid[(3, 0)], Some(Stage::Seed));
    }

    #[test]
    fn test_get_and_set_check_bounds() {
        let mut grid = Grid::EMPTY;
        assert_eq!(grid.set((4, 0), Some(Stage::Angel)), Err(EngineError::InvalidPosition(4, 0)));
        assert_eq!(grid.get((0, 9)), Err(EngineError::InvalidPosition(0, 9)));
        grid.set((1, 3), Some(Stage::Angel)).unwrap();
        assert_eq!(grid.get((1, 3)), Ok(Some(Stage::Angel)));
    }

    #[test]
    fn test_empty_cells_are_row_major() {
        let grid = Grid::from_labels(&[
            &["Angel", ".", "Angel", "Angel"],
            &["Angel"; 4],
            &[".", "Angel", "Angel", "Angel"],
            &["Angel", "Angel", "Angel", "."],
        ])
        .unwrap();
        assert_eq!(grid.empty_cells(), vec![(0, 1), (2, 0), (3, 3)]);
        assert_eq!(grid.occupied_count(), 13);
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        let grid = checkerboard();
        assert!(grid.is_full());
        assert!(!grid.has_adjacent_pair());
        assert!(is_terminal(&grid));
    }

    #[test]
    fn test_vertical_pair_is_not_terminal() {
        let mut grid = checkerboard();
        grid.set((3, 0), Some(Stage::Angel)).unwrap();
        assert!(grid.has_adjacent_pair());
        assert!(!grid.is_terminal());
    }

    #[test]
    fn test_one_empty_cell_is_not_terminal() {
        let mut grid = checkerboard();
        grid.set((2, 2), None).unwrap();
        assert!(!grid.is_terminal());
    }

    #[test]
    fn test_highest_stage_and_exit() {
        let mut grid = Grid::EMPTY;
        assert_eq!(grid.highest_stage(), None);
        grid.set((0, 0), Some(Stage::SeriesB)).unwrap();
        grid.set((3, 3), Some(Stage::Seed)).unwrap();
        assert_eq!(grid.highest_stage(), Some(Stage::SeriesB));
        assert!(!grid.has_exit());
        grid.set((2, 1), Some(Stage::Exit)).unwrap();
        assert!(grid.has_exit());
    }

    #[test]
    fn test_serializes_as_nested_rows() {
        let mut grid = Grid::EMPTY;
        grid.set((0, 1), Some(Stage::PreSeed)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.starts_with("[[null,\"Pre-seed\",null,null],"));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    fn reference_terminal(grid: &Grid) -> bool {
        let cells = grid.rows();
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                if cells[i][j].is_none() {
                    return false;
                }
                if j < GRID_SIZE - 1 && cells[i][j] == cells[i][j + 1] {
                    return false;
                }
                if i < GRID_SIZE - 1 && cells[i][j] == cells[i + 1][j] {
                    return false;
                }
            }
        }
        true
    }

    proptest! {
        #[test]
        fn test_terminal_matches_definition(grid in arb_grid()) {
            prop_assert_eq!(grid.is_terminal(), reference_terminal(&grid));
        }

        #[test]
        fn test_terminal_matches_definition_on_full_grids(grid in arb_full_grid(3)) {
            prop_assert_eq!(grid.is_terminal(), reference_terminal(&grid));
        }
    }
}
