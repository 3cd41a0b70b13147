// Movement policies
//
// Each agent owns one policy instance for the whole game; no state is shared
// between agents. A policy maps a perception window to a direction and never
// fails. Which strategy an agent runs is a setup-time assignment by the
// driver, not a property of the agent itself.

use rand::Rng;

use crate::perception::{PerceptionWindow, WindowCell, CENTER, WINDOW_SIZE};
use crate::types::{Cell, Direction};

/// The default rotation used by the cyclic strategy
pub const DEFAULT_CYCLE: [Direction; 5] = [
    Direction::Up,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Right,
];

/// One agent's decision unit. The variants carry whatever per-agent state
/// the strategy needs; only `Cyclic` is stateful.
#[derive(Debug, Clone)]
pub enum Policy {
    /// Always returns the same direction, ignoring perception
    Fixed(Direction),
    /// Uniform random direction with a single opposite-direction retry when
    /// the picked step would hit an obstacle
    RandomSafe,
    /// Walks a fixed direction sequence, wrapping around forever
    Cyclic { sequence: Vec<Direction>, index: usize },
    /// Heads for the first apple found in the window, falling back to
    /// `RandomSafe` behavior when none is visible
    AppleSeeking,
}

impl Policy {
    pub fn fixed(dir: Direction) -> Self {
        Policy::Fixed(dir)
    }

    pub fn random_safe() -> Self {
        Policy::RandomSafe
    }

    pub fn cyclic() -> Self {
        Policy::Cyclic {
            sequence: DEFAULT_CYCLE.to_vec(),
            index: 0,
        }
    }

    pub fn apple_seeking() -> Self {
        Policy::AppleSeeking
    }

    /// Chooses the next direction for the owning agent
    pub fn decide<R: Rng>(&mut self, window: &PerceptionWindow, rng: &mut R) -> Direction {
        match self {
            Policy::Fixed(dir) => *dir,
            Policy::RandomSafe => random_safe_motion(window, rng),
            Policy::Cyclic { sequence, index } => {
                let dir = sequence[*index];
                *index = (*index + 1) % sequence.len();
                dir
            }
            Policy::AppleSeeking => apple_seeking_motion(window, rng),
        }
    }
}

/// True when a single step onto this window entry would not collide: only
/// empty cells and apples are safe; snake tags and off-board cells are not
fn step_is_safe(window: &PerceptionWindow, dir: Direction) -> bool {
    match window.step_target(dir) {
        WindowCell::Cell(Cell::Empty) | WindowCell::Cell(Cell::Apple) => true,
        _ => false,
    }
}

/// Uniform random direction with one retry: if the picked step is unsafe,
/// substitute the opposite direction without re-checking it
fn random_safe_motion<R: Rng>(window: &PerceptionWindow, rng: &mut R) -> Direction {
    let picked = Direction::all()[rng.random_range(0..4)];
    if step_is_safe(window, picked) {
        picked
    } else {
        picked.opposite()
    }
}

/// Scans the window column-major for the first apple and steps toward it,
/// horizontal axis first. No apple in view falls back to the random walk.
fn apple_seeking_motion<R: Rng>(window: &PerceptionWindow, rng: &mut R) -> Direction {
    for col in 0..WINDOW_SIZE {
        for row in 0..WINDOW_SIZE {
            if window.at(col, row) == WindowCell::Cell(Cell::Apple) {
                if col > CENTER {
                    return Direction::Right;
                } else if col < CENTER {
                    return Direction::Left;
                } else if row > CENTER {
                    return Direction::Down;
                } else if row < CENTER {
                    return Direction::Up;
                }
            }
        }
    }
    random_safe_motion(window, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::grid::Grid;
    use crate::types::{Coord, Player};

    fn open_window() -> PerceptionWindow {
        let grid = Grid::new(9);
        PerceptionWindow::around(&grid, Coord { x: 4, y: 4 })
    }

    #[test]
    fn test_fixed_always_returns_its_direction() {
        let mut policy = Policy::fixed(Direction::Right);
        let mut rng = StdRng::seed_from_u64(1);
        let window = open_window();
        for _ in 0..10 {
            assert_eq!(policy.decide(&window, &mut rng), Direction::Right);
        }
    }

    #[test]
    fn test_cyclic_repeats_sequence_exactly() {
        let mut policy = Policy::cyclic();
        let mut rng = StdRng::seed_from_u64(2);
        let window = open_window();
        let mut observed = Vec::new();
        for _ in 0..10 {
            observed.push(policy.decide(&window, &mut rng));
        }
        let expected: Vec<Direction> = DEFAULT_CYCLE
            .iter()
            .chain(DEFAULT_CYCLE.iter())
            .copied()
            .collect();
        assert_eq!(observed, expected);
    }

    #[test]
    fn test_random_safe_avoids_blocked_direction() {
        // Snake directly above the agent; every other neighbor open. The
        // only way to step up would be picking Up, which the safety check
        // rejects and flips to Down.
        let mut grid = Grid::new(9);
        grid.write(4, 3, Cell::Snake(Player::C));
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::random_safe();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_ne!(policy.decide(&window, &mut rng), Direction::Up);
        }
    }

    #[test]
    fn test_random_safe_flips_away_from_the_wall() {
        // Agent on the left edge: Left is outside, so a Left pick becomes
        // Right. The other three directions stay as picked.
        let grid = Grid::new(9);
        let window = PerceptionWindow::around(&grid, Coord { x: 0, y: 4 });

        let mut policy = Policy::random_safe();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            assert_ne!(policy.decide(&window, &mut rng), Direction::Left);
        }
    }

    #[test]
    fn test_random_safe_retry_is_not_rechecked() {
        // Both vertical neighbors blocked: an Up pick flips to Down even
        // though Down is unsafe too. Single-retry, not a safe-search.
        let mut grid = Grid::new(9);
        grid.write(4, 3, Cell::Snake(Player::A));
        grid.write(4, 5, Cell::Snake(Player::B));
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::random_safe();
        let mut rng = StdRng::seed_from_u64(5);
        let mut saw_vertical = false;
        for _ in 0..200 {
            let dir = policy.decide(&window, &mut rng);
            if dir == Direction::Up || dir == Direction::Down {
                saw_vertical = true;
            }
        }
        assert!(saw_vertical, "vertical picks should pass through as their opposite");
    }

    #[test]
    fn test_apple_seeking_steps_toward_apple_on_the_right() {
        // Apple at window row 1, column 3: column beats row, 3 > 2 means right.
        let mut grid = Grid::new(9);
        grid.write(5, 3, Cell::Apple); // window (col 3, row 1) around (4, 4)
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::apple_seeking();
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(policy.decide(&window, &mut rng), Direction::Right);
    }

    #[test]
    fn test_apple_seeking_uses_vertical_axis_on_center_column() {
        let mut grid = Grid::new(9);
        grid.write(4, 6, Cell::Apple); // window (col 2, row 4)
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::apple_seeking();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(policy.decide(&window, &mut rng), Direction::Down);
    }

    #[test]
    fn test_apple_seeking_takes_first_apple_in_scan_order() {
        // Scan is column-major: the apple in column 0 wins over the one in
        // column 4 even though both are the same distance away.
        let mut grid = Grid::new(9);
        grid.write(2, 6, Cell::Apple); // window (col 0, row 4)
        grid.write(6, 2, Cell::Apple); // window (col 4, row 0)
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::apple_seeking();
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(policy.decide(&window, &mut rng), Direction::Left);
    }

    #[test]
    fn test_apple_seeking_falls_back_to_random_safe() {
        // No apples, snake above: the fallback must respect the same safety
        // rule as the random walk.
        let mut grid = Grid::new(9);
        grid.write(4, 3, Cell::Snake(Player::D));
        let window = PerceptionWindow::around(&grid, Coord { x: 4, y: 4 });

        let mut policy = Policy::apple_seeking();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_ne!(policy.decide(&window, &mut rng), Direction::Up);
        }
    }
}
