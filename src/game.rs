// Game driver
//
// Owns the four agents and their policies, seeds the board, and paces the
// turn engine until every agent has been eliminated. The pacing suspension
// point sits between ticks; a tick itself always runs to completion.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use crate::config::Config;
use crate::engine::{TickReport, TurnEngine};
use crate::grid::Grid;
use crate::policy::Policy;
use crate::sinks::{RenderSink, StatusSink};
use crate::tick_log::TickLogger;
use crate::types::{AgentState, Coord, Direction, Player};

/// One full simulation: board, agents, policies, and pacing
pub struct Game {
    engine: TurnEngine,
    agents: [AgentState; 4],
    policies: [Policy; 4],
    tick_interval: Duration,
    tick_logger: TickLogger,
    ticks: u64,
}

impl Game {
    /// Builds a game with the default strategy assignment: A holds a fixed
    /// rightward course, B walks randomly, C follows the fixed rotation,
    /// and D chases apples. Any agent could be bound to any strategy; this
    /// assignment is configuration, not structure.
    pub fn new(config: &Config) -> Self {
        Self::with_policies(
            config,
            [
                Policy::fixed(Direction::Right),
                Policy::random_safe(),
                Policy::cyclic(),
                Policy::apple_seeking(),
            ],
        )
    }

    /// Builds a game with an explicit strategy per agent, in A-D order
    pub fn with_policies(config: &Config, policies: [Policy; 4]) -> Self {
        let n = config.game.grid_size;
        assert!(n >= 2, "grid must fit four distinct corners");

        let rng = match config.game.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let last = (n - 1) as i32;
        let agents = [
            AgentState::new(Player::A, Coord { x: 0, y: 0 }),
            AgentState::new(Player::B, Coord { x: last, y: 0 }),
            AgentState::new(Player::C, Coord { x: 0, y: last }),
            AgentState::new(Player::D, Coord { x: last, y: last }),
        ];

        let mut engine = TurnEngine::new(Grid::new(n), config.game.apples_per_tick, rng);
        for agent in &agents {
            engine.seed_agent(agent);
        }

        Game {
            engine,
            agents,
            policies,
            tick_interval: Duration::from_millis(config.game.tick_interval_ms),
            tick_logger: TickLogger::disabled(),
            ticks: 0,
        }
    }

    /// Attaches a tick logger; ticks run unlogged otherwise
    pub fn set_tick_logger(&mut self, logger: TickLogger) {
        self.tick_logger = logger;
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True once every agent is eliminated; the game cannot resume
    pub fn is_over(&self) -> bool {
        self.agents.iter().all(|a| a.eliminated)
    }

    /// Runs one tick immediately, without pacing or sinks
    pub fn tick_once(&mut self) -> TickReport {
        let report = self.engine.tick(&mut self.agents, &mut self.policies);
        self.tick_logger.log_tick(self.ticks, &report);
        self.ticks += 1;
        report
    }

    /// Runs the simulation to the terminal state: draw the starting board,
    /// then wait one interval, tick, and report, until all four agents are
    /// eliminated.
    pub async fn run(&mut self, render: &mut dyn RenderSink, status: &mut dyn StatusSink) {
        info!(
            "Starting game: {}x{} board, tick interval {:?}",
            self.engine.grid().size(),
            self.engine.grid().size(),
            self.tick_interval
        );

        render.draw(self.engine.grid());

        loop {
            tokio::time::sleep(self.tick_interval).await;

            let report = self.tick_once();

            render.draw(self.engine.grid());
            for s in &report.statuses {
                status.update_eliminated(s.player, s.eliminated);
                status.update_apples(s.player, s.apples);
            }

            if report.all_eliminated() {
                break;
            }
        }

        info!("Game over after {} ticks", self.ticks);
        for agent in &self.agents {
            info!(
                "  {}: {} apples",
                agent.player.as_str(),
                agent.apples
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, TickLogConfig};
    use crate::types::Cell;

    fn test_config(n: usize) -> Config {
        Config {
            game: GameConfig {
                grid_size: n,
                apples_per_tick: 0,
                tick_interval_ms: 10,
                rng_seed: Some(1),
            },
            tick_log: TickLogConfig {
                enabled: false,
                log_file_path: String::new(),
            },
        }
    }

    #[test]
    fn test_new_game_seeds_four_corners() {
        let game = Game::new(&test_config(6));
        assert_eq!(game.engine.grid().read(0, 0), Cell::Snake(Player::A));
        assert_eq!(game.engine.grid().read(5, 0), Cell::Snake(Player::B));
        assert_eq!(game.engine.grid().read(0, 5), Cell::Snake(Player::C));
        assert_eq!(game.engine.grid().read(5, 5), Cell::Snake(Player::D));
        assert!(!game.is_over());
    }

    #[test]
    fn test_everyone_walking_off_their_edge_ends_the_game() {
        // A and B climb off the top edge, C and D drop off the bottom.
        let mut game = Game::with_policies(
            &test_config(6),
            [
                Policy::fixed(Direction::Up),
                Policy::fixed(Direction::Up),
                Policy::fixed(Direction::Down),
                Policy::fixed(Direction::Down),
            ],
        );
        let report = game.tick_once();
        assert!(report.all_eliminated());
        assert!(game.is_over());
        assert_eq!(game.ticks(), 1);
    }
}
