// Local perception windows
//
// A perception window is the 5x5 view of the board centered on an agent,
// computed fresh at the moment of each decision call. Cells whose absolute
// coordinates fall off the board are marked `Outside` rather than carrying
// any cell content. Windows are read-only snapshots and never outlive the
// decision they were computed for.

use crate::grid::Grid;
use crate::types::{Cell, Coord, Direction};

/// Window side length; the agent sits at index (2, 2)
pub const WINDOW_SIZE: usize = 5;

/// Center index on both axes
pub const CENTER: usize = 2;

/// A window entry is either a board cell or the outside marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCell {
    Cell(Cell),
    Outside,
}

/// 5x5 snapshot of the board around one agent, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerceptionWindow {
    cells: [[WindowCell; WINDOW_SIZE]; WINDOW_SIZE],
}

impl PerceptionWindow {
    /// Builds the window centered on `center`. Entry `[row][col]` corresponds
    /// to the absolute cell (center.x + col - 2, center.y + row - 2).
    pub fn around(grid: &Grid, center: Coord) -> Self {
        let mut cells = [[WindowCell::Outside; WINDOW_SIZE]; WINDOW_SIZE];
        for row in 0..WINDOW_SIZE {
            for col in 0..WINDOW_SIZE {
                let x = center.x + col as i32 - CENTER as i32;
                let y = center.y + row as i32 - CENTER as i32;
                if grid.in_bounds(x, y) {
                    cells[row][col] = WindowCell::Cell(grid.read(x as usize, y as usize));
                }
            }
        }
        PerceptionWindow { cells }
    }

    /// Window entry at the given column and row, both in 0..5
    pub fn at(&self, col: usize, row: usize) -> WindowCell {
        self.cells[row][col]
    }

    /// The entry one step from the center in the given direction
    pub fn step_target(&self, dir: Direction) -> WindowCell {
        match dir {
            Direction::Up => self.cells[CENTER - 1][CENTER],
            Direction::Down => self.cells[CENTER + 1][CENTER],
            Direction::Left => self.cells[CENTER][CENTER - 1],
            Direction::Right => self.cells[CENTER][CENTER + 1],
        }
    }
}
