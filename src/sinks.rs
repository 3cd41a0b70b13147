// External display boundary
//
// Rendering and status display are collaborators outside the simulation
// core. The driver hands them the grid and per-agent statuses after each
// tick, fire-and-forget; nothing they return is consumed.

use log::info;

use crate::grid::Grid;
use crate::types::{Cell, Player};

/// Draws the full grid after each tick and once at game start
pub trait RenderSink {
    fn draw(&mut self, grid: &Grid);
}

/// Receives per-agent status updates after each tick's move phase
pub trait StatusSink {
    fn update_eliminated(&mut self, player: Player, eliminated: bool);
    fn update_apples(&mut self, player: Player, apples: u32);
}

/// Renders the board as one character per cell on stdout
pub struct TerminalRender;

impl TerminalRender {
    fn cell_char(cell: Cell) -> char {
        match cell {
            Cell::Empty => '.',
            Cell::Apple => '@',
            Cell::Snake(player) => player.as_str().chars().next().unwrap_or('?'),
        }
    }
}

impl RenderSink for TerminalRender {
    fn draw(&mut self, grid: &Grid) {
        let n = grid.size();
        let mut out = String::with_capacity((n + 1) * n);
        for y in 0..n {
            for x in 0..n {
                out.push(Self::cell_char(grid.read(x, y)));
            }
            out.push('\n');
        }
        print!("{}", out);
    }
}

/// Discards draw requests; used when no display is attached
pub struct NullRender;

impl RenderSink for NullRender {
    fn draw(&mut self, _grid: &Grid) {}
}

/// Reports status changes through the log
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn update_eliminated(&mut self, player: Player, eliminated: bool) {
        if eliminated {
            info!("{}: eliminated", player.as_str());
        }
    }

    fn update_apples(&mut self, player: Player, apples: u32) {
        info!("{}: {} apples", player.as_str(), apples);
    }
}
