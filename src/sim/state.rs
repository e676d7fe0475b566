//! Game state and core simulation types
//!
//! Everything a host needs to draw a frame is reachable from [`GameState`];
//! [`Snapshot`] is the owned, read-only copy handed across the boundary.

use std::collections::VecDeque;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::in_bounds;
use crate::settings::SnakeConfig;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Engine constructed, waiting for the first start input
    #[default]
    NotStarted,
    /// Ticks advance the snake
    Running,
    /// Ticks are ignored until resumed
    Paused,
    /// Run ended by a collision
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "NotStarted",
            GameStatus::Running => "Running",
            GameStatus::Paused => "Paused",
            GameStatus::GameOver => "GameOver",
        }
    }
}

/// One of the four grid headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Heading for a unit vector; `None` for anything else
    pub fn from_vector(v: IVec2) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == v)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for a quarter turn relative to `other`
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    /// The two quarter turns available from this heading
    pub fn turns(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Left, Direction::Right]
        }
    }
}

/// Authoritative simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Grid edge length
    pub grid_size: i32,
    /// Body cells, head first
    pub snake: VecDeque<IVec2>,
    /// Current food cell; `None` once the board is full
    pub food: Option<IVec2>,
    /// Direction applied by the most recent tick
    pub last_direction: Direction,
    /// Turn queued since the last tick (depth 1, latest wins)
    pub pending_direction: Option<Direction>,
    pub wall_mode: bool,
    pub status: GameStatus,
    pub score: u32,
    /// Foods eaten this run (drives speed-up)
    pub foods_eaten: u32,
    /// Ticks that advanced the snake this run
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh layout for a config: single segment at the grid center, heading
    /// right, no food placed yet.
    pub fn new(config: &SnakeConfig) -> Self {
        let mut snake = VecDeque::with_capacity(config.cell_count());
        snake.push_back(Self::start_cell(config.grid_size));
        Self {
            grid_size: config.grid_size,
            snake,
            food: None,
            last_direction: Direction::Right,
            pending_direction: None,
            wall_mode: config.initial_wall_mode,
            status: GameStatus::NotStarted,
            score: 0,
            foods_eaten: 0,
            time_ticks: 0,
        }
    }

    /// Deterministic starting cell (grid center)
    pub fn start_cell(grid_size: i32) -> IVec2 {
        IVec2::splat(grid_size / 2)
    }

    pub fn head(&self) -> IVec2 {
        // The snake is never empty
        self.snake[0]
    }

    /// Whether any body segment occupies `cell`
    pub fn occupies(&self, cell: IVec2) -> bool {
        self.snake.contains(&cell)
    }

    pub fn is_board_full(&self) -> bool {
        self.snake.len() >= (self.grid_size as usize) * (self.grid_size as usize)
    }

    pub fn snapshot(&self, tick_interval_ms: u32) -> Snapshot {
        Snapshot {
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            wall_mode: self.wall_mode,
            grid_size: self.grid_size,
            tick_interval_ms,
        }
    }
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Body cells, head first
    pub snake: Vec<IVec2>,
    pub food: Option<IVec2>,
    pub score: u32,
    pub status: GameStatus,
    pub wall_mode: bool,
    pub grid_size: i32,
    /// Interval the scheduler should currently tick at
    pub tick_interval_ms: u32,
}

impl Snapshot {
    /// Plain-text board for terminals and logs
    pub fn to_ascii(&self) -> String {
        let size = self.grid_size.max(0) as usize;
        let mut rows = vec![vec!['.'; size]; size];
        // Deserialized snapshots may carry cells off the grid; skip them
        let mut mark = |cell: IVec2, c: char| {
            if in_bounds(cell, self.grid_size) {
                rows[cell.y as usize][cell.x as usize] = c;
            }
        };
        if let Some(food) = self.food {
            mark(food, '*');
        }
        for (i, &cell) in self.snake.iter().enumerate() {
            mark(cell, if i == 0 { '@' } else { 'o' });
        }
        let mut out = String::with_capacity(size * (size + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
