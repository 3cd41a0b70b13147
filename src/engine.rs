// Turn engine: the per-tick protocol
//
// One tick is: spawn apples, then advance every living agent once in fixed
// A -> B -> C -> D order, then report statuses. The engine is the single
// writer of the grid; earlier movers' effects are visible to later movers'
// perception windows within the same tick.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::grid::Grid;
use crate::perception::PerceptionWindow;
use crate::policy::Policy;
use crate::types::{AgentState, AgentStatus, Cell, Coord};

/// Everything the driver needs for external display after one tick
#[derive(Debug, Clone)]
pub struct TickReport {
    pub statuses: [AgentStatus; 4],
}

impl TickReport {
    /// True once every agent has been eliminated, the terminal state
    pub fn all_eliminated(&self) -> bool {
        self.statuses.iter().all(|s| s.eliminated)
    }
}

/// Owns the grid and the randomness; advances the simulation one tick at a
/// time on request
pub struct TurnEngine {
    grid: Grid,
    apples_per_tick: u32,
    rng: StdRng,
}

impl TurnEngine {
    pub fn new(grid: Grid, apples_per_tick: u32, rng: StdRng) -> Self {
        TurnEngine {
            grid,
            apples_per_tick,
            rng,
        }
    }

    /// Read access for the render sink
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Writes an agent's tag at its position; used by the driver when
    /// seeding starting cells
    pub fn seed_agent(&mut self, agent: &AgentState) {
        self.grid
            .write(agent.pos.x as usize, agent.pos.y as usize, Cell::Snake(agent.player));
    }

    /// Runs one full tick over the given agents and their policies.
    /// `agents[i]` is advanced by `policies[i]`; eliminated agents are
    /// skipped and stay eliminated forever.
    pub fn tick(&mut self, agents: &mut [AgentState; 4], policies: &mut [Policy; 4]) -> TickReport {
        self.spawn_apples();

        for i in 0..agents.len() {
            if agents[i].eliminated {
                continue;
            }
            self.advance_agent(&mut agents[i], &mut policies[i]);
        }

        TickReport {
            statuses: [
                AgentStatus::from(&agents[0]),
                AgentStatus::from(&agents[1]),
                AgentStatus::from(&agents[2]),
                AgentStatus::from(&agents[3]),
            ],
        }
    }

    /// Apple spawn phase: a fixed number of attempts at uniformly random
    /// cells. An attempt landing on a non-empty cell is silently skipped,
    /// so fewer apples than requested may appear.
    fn spawn_apples(&mut self) {
        let n = self.grid.size();
        for _ in 0..self.apples_per_tick {
            let x = self.rng.random_range(0..n);
            let y = self.rng.random_range(0..n);
            if self.grid.read(x, y) == Cell::Empty {
                self.grid.write(x, y, Cell::Apple);
            }
        }
    }

    /// Move phase for a single living agent: perceive, decide, then apply
    /// the movement rules to the one-step candidate cell.
    fn advance_agent(&mut self, agent: &mut AgentState, policy: &mut Policy) {
        let window = PerceptionWindow::around(&self.grid, agent.pos);
        let dir = policy.decide(&window, &mut self.rng);
        let candidate = dir.apply(&agent.pos);

        debug!(
            "{} at ({}, {}) moves {}",
            agent.player.as_str(),
            agent.pos.x,
            agent.pos.y,
            dir.as_str()
        );

        if !self.grid.in_bounds(candidate.x, candidate.y) {
            // Off the board: eliminated in place, grid untouched.
            agent.eliminated = true;
            info!("{} eliminated: left the board", agent.player.as_str());
            return;
        }

        match self.grid.read(candidate.x as usize, candidate.y as usize) {
            Cell::Empty => {
                self.move_agent(agent, candidate);
            }
            Cell::Apple => {
                agent.apples += 1;
                self.move_agent(agent, candidate);
            }
            Cell::Snake(other) => {
                // Collision with any snake tag, stale trail cells included.
                agent.eliminated = true;
                info!(
                    "{} eliminated: collided with {} at ({}, {})",
                    agent.player.as_str(),
                    other.as_str(),
                    candidate.x,
                    candidate.y
                );
            }
        }
    }

    /// Writes the agent's tag at the new cell and updates its position.
    /// The vacated cell deliberately keeps the old tag; the original game
    /// never clears it, and the trail it leaves is observable behavior.
    fn move_agent(&mut self, agent: &mut AgentState, to: Coord) {
        agent.pos = to;
        self.grid
            .write(to.x as usize, to.y as usize, Cell::Snake(agent.player));
    }
}
