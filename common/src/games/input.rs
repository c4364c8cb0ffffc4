#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A normalised input event, independent of the front end that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Direction(Direction),
    /// A tap on a card or hole, addressed by id or cell index.
    Cell(usize),
    TogglePause,
    Restart,
}

impl Intent {
    pub fn from_key(key: &str) -> Option<Self> {
        let intent = match key {
            "ArrowUp" | "w" | "W" => Intent::Direction(Direction::Up),
            "ArrowDown" | "s" | "S" => Intent::Direction(Direction::Down),
            "ArrowLeft" | "a" | "A" => Intent::Direction(Direction::Left),
            "ArrowRight" | "d" | "D" => Intent::Direction(Direction::Right),
            " " | "Space" => Intent::TogglePause,
            "r" | "R" | "Enter" => Intent::Restart,
            _ => return None,
        };
        Some(intent)
    }
}

/// Holds the latest accepted direction until the next tick consumes it.
#[derive(Clone, Debug, Default)]
pub struct DirectionBuffer {
    pending: Option<Direction>,
}

impl DirectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects a reversal of `travelling`; otherwise overwrites any earlier intent.
    pub fn offer(&mut self, intent: Direction, travelling: Direction) -> bool {
        if intent.is_opposite(&travelling) {
            return false;
        }
        self.pending = Some(intent);
        true
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
