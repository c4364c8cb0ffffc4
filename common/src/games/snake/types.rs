use super::Direction;

/// Grid coordinate. Signed so that a step off the board is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn is_inside(&self, grid_size: u32) -> bool {
        let size = grid_size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeStatus {
    NotStarted,
    Running,
    Paused,
    LevelingUp,
    GameOver,
}

/// Wall and self collisions end the game the same way; the reason is kept for logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}
