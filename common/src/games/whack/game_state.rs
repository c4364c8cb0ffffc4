#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhackStatus {
    Idle,
    Running,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhackOutcome {
    Ignored,
    Hit,
    Miss,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhackState {
    pub cell_count: usize,
    pub active_cell: Option<usize>,
    pub score: u32,
    pub time_remaining_sec: u32,
    pub status: WhackStatus,
}

impl WhackState {
    pub fn idle(cell_count: usize, duration_sec: u32) -> Self {
        Self {
            cell_count,
            active_cell: None,
            score: 0,
            time_remaining_sec: duration_sec,
            status: WhackStatus::Idle,
        }
    }

    pub fn running(cell_count: usize, duration_sec: u32) -> Self {
        Self {
            status: WhackStatus::Running,
            ..Self::idle(cell_count, duration_sec)
        }
    }

    /// One second off the clock. Returns true when this tick ended the round.
    pub fn count_down(&mut self) -> bool {
        if self.status != WhackStatus::Running {
            return false;
        }
        self.time_remaining_sec = self.time_remaining_sec.saturating_sub(1);
        if self.time_remaining_sec > 0 {
            return false;
        }
        self.status = WhackStatus::Ended;
        self.active_cell = None;
        true
    }

    /// Replaces any target still showing, even the same cell.
    pub fn spawn(&mut self, cell: usize) -> bool {
        if self.status != WhackStatus::Running || cell >= self.cell_count {
            return false;
        }
        self.active_cell = Some(cell);
        true
    }

    pub fn whack(&mut self, cell: usize) -> WhackOutcome {
        if self.status != WhackStatus::Running || cell >= self.cell_count {
            return WhackOutcome::Ignored;
        }
        if self.active_cell == Some(cell) {
            self.score += 1;
            self.active_cell = None;
            WhackOutcome::Hit
        } else {
            self.score = self.score.saturating_sub(1);
            WhackOutcome::Miss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_scores_and_clears_target() {
        let mut state = WhackState::running(9, 30);
        state.spawn(4);
        assert_eq!(state.whack(4), WhackOutcome::Hit);
        assert_eq!(state.score, 1);
        assert_eq!(state.active_cell, None);
    }

    #[test]
    fn test_miss_penalty_floors_at_zero() {
        let mut state = WhackState::running(9, 30);
        state.spawn(4);
        assert_eq!(state.whack(2), WhackOutcome::Miss);
        assert_eq!(state.score, 0);
        assert_eq!(state.active_cell, Some(4));

        state.whack(4);
        state.spawn(1);
        state.whack(1);
        assert_eq!(state.score, 2);
        state.whack(7);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_whack_on_empty_board_is_a_miss() {
        let mut state = WhackState::running(9, 30);
        state.score = 3;
        assert_eq!(state.whack(0), WhackOutcome::Miss);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_idle_and_ended_ignore_input() {
        let mut state = WhackState::idle(9, 30);
        assert_eq!(state.whack(0), WhackOutcome::Ignored);
        assert!(!state.spawn(0));

        let mut state = WhackState::running(9, 1);
        assert!(state.count_down());
        assert_eq!(state.status, WhackStatus::Ended);
        assert_eq!(state.whack(0), WhackOutcome::Ignored);
        assert!(!state.count_down());
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut state = WhackState::running(9, 30);
        assert_eq!(state.whack(9), WhackOutcome::Ignored);
        assert!(!state.spawn(12));
    }
}
