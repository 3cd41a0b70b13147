// The shared square board
//
// The grid is the one shared mutable resource in the simulation. It is
// allocated once per game, mutated in place by the turn engine, and has no
// behavior beyond reading and writing cells. Callers must bounds-check
// before calling `read`/`write`; an out-of-range access is a programming
// error and panics.

use crate::types::Cell;

/// Fixed-size square board of cells, row-major
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an `n` x `n` grid with every cell empty
    pub fn new(n: usize) -> Self {
        Grid {
            size: n,
            cells: vec![Cell::Empty; n * n],
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the content of cell (x, y). Panics if out of range.
    pub fn read(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.size && y < self.size, "grid read out of range: ({}, {})", x, y);
        self.cells[y * self.size + x]
    }

    /// Overwrites cell (x, y) unconditionally. Panics if out of range.
    pub fn write(&mut self, x: usize, y: usize, content: Cell) {
        assert!(x < self.size && y < self.size, "grid write out of range: ({}, {})", x, y);
        self.cells[y * self.size + x] = content;
    }

    /// True when the signed coordinate pair lies inside [0, size) on both axes
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }
}
