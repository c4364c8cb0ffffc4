use std::time::Duration;

use super::SessionRng;

/// Intervals shorter than this are clamped so a periodic clock always makes progress.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockMode {
    /// Fires every interval.
    Fixed(Duration),
    /// Re-arms after each fire with a fresh uniform delay in `[min, max]`.
    Jittered { min: Duration, max: Duration },
    /// Fires once, then disarms.
    Once(Duration),
}

impl ClockMode {
    fn next_delay(&self, rng: &mut SessionRng) -> Duration {
        let delay = match *self {
            ClockMode::Fixed(interval) | ClockMode::Once(interval) => interval,
            ClockMode::Jittered { min, max } if max <= min => min,
            ClockMode::Jittered { min, max } => {
                let millis = rng.random_range(min.as_millis() as u64..=max.as_millis() as u64);
                Duration::from_millis(millis)
            }
        };
        delay.max(MIN_INTERVAL)
    }
}

/// A tick source over virtual time measured from session start.
///
/// Holds at most one pending deadline: arming always replaces whatever was pending,
/// and nothing fires once `stop` has returned.
#[derive(Clone, Debug, Default)]
pub struct GameClock {
    mode: Option<ClockMode>,
    deadline: Option<Duration>,
    suspended: Option<Duration>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Duration, mode: ClockMode, rng: &mut SessionRng) {
        self.mode = Some(mode);
        self.suspended = None;
        self.deadline = Some(now + mode.next_delay(rng));
    }

    pub fn reschedule(&mut self, now: Duration, interval: Duration) {
        self.mode = Some(ClockMode::Fixed(interval));
        self.suspended = None;
        self.deadline = Some(now + interval.max(MIN_INTERVAL));
    }

    pub fn stop(&mut self) {
        self.mode = None;
        self.deadline = None;
        self.suspended = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some() || self.suspended.is_some()
    }

    pub fn mode(&self) -> Option<ClockMode> {
        self.mode
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Consumes a due deadline and re-arms from it (not from `now`), returning when it fired.
    pub fn fire(&mut self, now: Duration, rng: &mut SessionRng) -> Option<Duration> {
        let fired_at = self.deadline.filter(|deadline| *deadline <= now)?;
        self.deadline = match self.mode {
            Some(ClockMode::Once(_)) | None => {
                self.mode = None;
                None
            }
            Some(mode) => Some(fired_at + mode.next_delay(rng)),
        };
        Some(fired_at)
    }

    /// Freezes the remaining time until the next fire.
    pub fn suspend(&mut self, now: Duration) {
        if let Some(deadline) = self.deadline.take() {
            self.suspended = Some(deadline.saturating_sub(now));
        }
    }

    pub fn resume(&mut self, now: Duration) {
        if let Some(remaining) = self.suspended.take() {
            self.deadline = Some(now + remaining);
        }
    }
}

/// Key of the earliest clock due at `now`. Ties go to the earlier entry.
pub fn next_due<K: Copy>(clocks: &[(K, &GameClock)], now: Duration) -> Option<K> {
    let mut best: Option<(K, Duration)> = None;
    for (key, clock) in clocks {
        let Some(deadline) = clock.deadline() else {
            continue;
        };
        if deadline > now {
            continue;
        }
        if best.is_none_or(|(_, earliest)| deadline < earliest) {
            best = Some((*key, deadline));
        }
    }
    best.map(|(key, _)| key)
}
