// Core simulation types shared by every module

use serde::{Deserialize, Serialize};

/// One of the four fixed player tags
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Player {
    A,
    B,
    C,
    D,
}

impl Player {
    /// All players in fixed turn order
    pub fn all() -> [Player; 4] {
        [Player::A, Player::B, Player::C, Player::D]
    }

    /// Stable slot index, used for per-player arrays
    pub fn index(&self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
            Player::C => 2,
            Player::D => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
            Player::C => "C",
            Player::D => "D",
        }
    }
}

/// Represents the four possible movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing the opposite way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Calculates the next coordinate when moving one cell in this direction.
    /// `y` grows downward, so `Up` decrements `y`.
    pub fn apply(&self, coord: &Coord) -> Coord {
        match self {
            Direction::Up => Coord { x: coord.x, y: coord.y - 1 },
            Direction::Down => Coord { x: coord.x, y: coord.y + 1 },
            Direction::Left => Coord { x: coord.x - 1, y: coord.y },
            Direction::Right => Coord { x: coord.x + 1, y: coord.y },
        }
    }
}

/// 2D coordinate on the board. Signed so that one-step candidates can fall
/// off either edge before the bounds check.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Content of a single board cell
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cell {
    Empty,
    Apple,
    Snake(Player),
}

/// Full per-agent simulation state, owned by the driver and mutated only by
/// the turn engine during that agent's move
#[derive(Debug, Clone)]
pub struct AgentState {
    pub player: Player,
    pub pos: Coord,
    pub apples: u32,
    pub eliminated: bool,
}

impl AgentState {
    pub fn new(player: Player, pos: Coord) -> Self {
        AgentState {
            player,
            pos,
            apples: 0,
            eliminated: false,
        }
    }
}

/// Snapshot of one agent's externally visible status after a tick
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStatus {
    pub player: Player,
    pub apples: u32,
    pub eliminated: bool,
}

impl From<&AgentState> for AgentStatus {
    fn from(agent: &AgentState) -> Self {
        AgentStatus {
            player: agent.player,
            apples: agent.apples,
            eliminated: agent.eliminated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions_pair_up() {
        for dir in Direction::all() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_apply_moves_one_cell() {
        let origin = Coord { x: 3, y: 3 };
        assert_eq!(Direction::Up.apply(&origin), Coord { x: 3, y: 2 });
        assert_eq!(Direction::Down.apply(&origin), Coord { x: 3, y: 4 });
        assert_eq!(Direction::Left.apply(&origin), Coord { x: 2, y: 3 });
        assert_eq!(Direction::Right.apply(&origin), Coord { x: 4, y: 3 });
    }

    #[test]
    fn test_player_indices_are_stable() {
        for (i, player) in Player::all().iter().enumerate() {
            assert_eq!(player.index(), i);
        }
    }
}
