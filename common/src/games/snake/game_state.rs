use std::collections::{HashSet, VecDeque};

use super::settings::SnakeSettings;
use super::types::{DeathReason, Point, SnakeStatus};
use super::Direction;
use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate { leveled_up: bool },
    Collided(DeathReason),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeState {
    /// Head first.
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub food: Point,
    pub score: u32,
    pub level: u32,
    pub speed_ms: u64,
    pub status: SnakeStatus,
}

impl SnakeState {
    /// Three segments in the middle of the board heading up, food somewhere free.
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Self {
        let center = (settings.grid_size / 2) as i32;
        let body = [
            Point::new(center, center),
            Point::new(center, center + 1),
            Point::new(center, center + 2),
        ];
        let mut state = Self::with_body(&body, Direction::Up, Point::new(0, 0), settings);
        state.place_food(settings.grid_size, rng);
        state
    }

    pub fn with_body(
        body: &[Point],
        direction: Direction,
        food: Point,
        settings: &SnakeSettings,
    ) -> Self {
        Self {
            body: body.iter().copied().collect(),
            body_set: body.iter().copied().collect(),
            direction,
            food,
            score: 0,
            level: 1,
            speed_ms: settings.speed_ms_for_level(1),
            status: SnakeStatus::NotStarted,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    /// One movement step. A collision leaves the body exactly as it was.
    pub fn step(&mut self, settings: &SnakeSettings, rng: &mut SessionRng) -> StepOutcome {
        let next_head = self.head().step(self.direction);

        if !next_head.is_inside(settings.grid_size) {
            self.status = SnakeStatus::GameOver;
            return StepOutcome::Collided(DeathReason::WallCollision);
        }
        if self.body_set.contains(&next_head) {
            self.status = SnakeStatus::GameOver;
            return StepOutcome::Collided(DeathReason::SelfCollision);
        }

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if next_head != self.food {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
            return StepOutcome::Moved;
        }

        self.score += settings.points_per_food;
        let level = settings.level_for_score(self.score);
        let leveled_up = level > self.level;
        if leveled_up {
            self.level = level;
            self.speed_ms = settings.speed_ms_for_level(level);
            self.status = SnakeStatus::LevelingUp;
        }
        self.place_food(settings.grid_size, rng);

        StepOutcome::Ate { leveled_up }
    }

    /// Rejection-samples a free cell. A completely filled board keeps the old food.
    pub fn place_food(&mut self, grid_size: u32, rng: &mut SessionRng) {
        let cell_count = (grid_size * grid_size) as usize;
        if self.body_set.len() >= cell_count {
            return;
        }
        loop {
            let candidate = Point::new(
                rng.random_range(0..grid_size as i32),
                rng.random_range(0..grid_size as i32),
            );
            if !self.body_set.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_body() -> Vec<Point> {
        vec![Point::new(10, 10), Point::new(10, 11), Point::new(10, 12)]
    }

    fn running(body: &[Point], direction: Direction, food: Point) -> SnakeState {
        let mut state = SnakeState::with_body(body, direction, food, &SnakeSettings::default());
        state.status = SnakeStatus::Running;
        state
    }

    fn assert_no_duplicates(state: &SnakeState) {
        let unique: HashSet<_> = state.body.iter().collect();
        assert_eq!(unique.len(), state.body.len());
        assert_eq!(state.body_set.len(), state.body.len());
    }

    fn random_turn(state: &SnakeState, rng: &mut SessionRng) -> Direction {
        let head = state.head();
        let towards_food = if state.food.x < head.x {
            Direction::Left
        } else if state.food.x > head.x {
            Direction::Right
        } else if state.food.y < head.y {
            Direction::Up
        } else {
            Direction::Down
        };
        let candidate = if rng.random_range(0..2) == 0 {
            towards_food
        } else {
            [Direction::Left, Direction::Right, Direction::Up, Direction::Down][rng.random_range(0..4usize)]
        };
        if candidate.is_opposite(&state.direction) {
            state.direction
        } else {
            candidate
        }
    }

    #[test]
    fn test_random_play_keeps_body_unique_and_food_free() {
        let settings = SnakeSettings {
            grid_size: 8,
            ..SnakeSettings::default()
        };
        let cell_count = (settings.grid_size * settings.grid_size) as usize;

        for seed in 0..200 {
            let mut rng = SessionRng::new(seed);
            let mut state = SnakeState::new(&settings, &mut rng);
            state.status = SnakeStatus::Running;

            for _ in 0..500 {
                state.direction = random_turn(&state, &mut rng);
                let outcome = state.step(&settings, &mut rng);

                assert_no_duplicates(&state);
                assert!(state.body.iter().all(|cell| state.body_set.contains(cell)));
                assert!(state.body.iter().all(|cell| cell.is_inside(settings.grid_size)));
                if state.body.len() < cell_count {
                    assert!(!state.occupies(&state.food), "seed {seed}: food on body");
                }
                if matches!(outcome, StepOutcome::Collided(_)) {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_new_state_matches_start_layout() {
        let mut rng = SessionRng::new(42);
        let state = SnakeState::new(&SnakeSettings::default(), &mut rng);
        assert_eq!(state.body.iter().copied().collect::<Vec<_>>(), start_body());
        assert_eq!(state.direction, Direction::Up);
        assert!(!state.occupies(&state.food));
        assert!(state.food.is_inside(20));
        assert_eq!(state.status, SnakeStatus::NotStarted);
    }

    #[test]
    fn test_move_up_without_food() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let mut state = running(&start_body(), Direction::Up, Point::new(0, 0));

        assert_eq!(state.step(&settings, &mut rng), StepOutcome::Moved);
        assert_eq!(
            state.body.iter().copied().collect::<Vec<_>>(),
            vec![Point::new(10, 9), Point::new(10, 10), Point::new(10, 11)]
        );
        assert_eq!(state.score, 0);
        assert_no_duplicates(&state);
    }

    #[test]
    fn test_left_wall_collision_leaves_body() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let body = [Point::new(0, 5), Point::new(1, 5), Point::new(2, 5)];
        let mut state = running(&body, Direction::Left, Point::new(9, 9));

        assert_eq!(
            state.step(&settings, &mut rng),
            StepOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(state.status, SnakeStatus::GameOver);
        assert_eq!(state.body.iter().copied().collect::<Vec<_>>(), body.to_vec());
    }

    #[test]
    fn test_right_wall_collision_at_grid_size() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let body = [Point::new(19, 3), Point::new(18, 3), Point::new(17, 3)];
        let mut state = running(&body, Direction::Right, Point::new(9, 9));

        assert!(matches!(state.step(&settings, &mut rng), StepOutcome::Collided(_)));
        assert_eq!(state.status, SnakeStatus::GameOver);
        assert_eq!(state.head(), Point::new(19, 3));
    }

    #[test]
    fn test_self_collision() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let body = [
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 6),
            Point::new(4, 6),
        ];
        let mut state = running(&body, Direction::Down, Point::new(9, 9));

        assert_eq!(
            state.step(&settings, &mut rng),
            StepOutcome::Collided(DeathReason::SelfCollision)
        );
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let mut state = running(&start_body(), Direction::Up, Point::new(10, 9));

        assert_eq!(
            state.step(&settings, &mut rng),
            StepOutcome::Ate { leveled_up: false }
        );
        assert_eq!(state.len(), 4);
        assert_eq!(state.score, 10);
        assert_eq!(state.level, 1);
        assert!(!state.occupies(&state.food));
        assert_no_duplicates(&state);
    }

    #[test]
    fn test_fifth_food_levels_up_once() {
        let settings = SnakeSettings::default();
        let mut rng = SessionRng::new(42);
        let mut state = running(&start_body(), Direction::Up, Point::new(10, 9));
        state.score = 40;

        assert_eq!(
            state.step(&settings, &mut rng),
            StepOutcome::Ate { leveled_up: true }
        );
        assert_eq!(state.level, 2);
        assert_eq!(state.speed_ms, 155);
        assert_eq!(state.status, SnakeStatus::LevelingUp);

        state.status = SnakeStatus::Running;
        state.food = state.head().step(Direction::Up);
        assert_eq!(
            state.step(&settings, &mut rng),
            StepOutcome::Ate { leveled_up: false }
        );
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_full_board_keeps_food() {
        let mut rng = SessionRng::new(42);
        let settings = SnakeSettings {
            grid_size: 2,
            ..SnakeSettings::default()
        };
        let body = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(0, 1),
        ];
        let mut state = SnakeState::with_body(&body, Direction::Up, Point::new(1, 1), &settings);
        state.place_food(settings.grid_size, &mut rng);
        assert_eq!(state.food, Point::new(1, 1));
    }
}
