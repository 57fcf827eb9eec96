/// Count direction. Increasing wraps at the top, decreasing clamps at zero.
#[derive(Clone, Copy, PartialEq, Eq, Debug, defmt::Format)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }
}

/// Shared state for the seconds counter
pub struct CounterState {
    pub seconds: u8,
    pub direction: Direction,
    pub running: bool,
}

impl CounterState {
    pub const MAX_SECONDS: u8 = 59;

    pub fn new() -> Self {
        Self {
            seconds: 0,
            direction: Direction::Increasing,
            running: false,
        }
    }

    /// Steps the count one unit in the current direction.
    /// Increasing wraps 60 -> 0; decreasing stops at 0 and never
    /// wraps back to 59.
    pub fn advance(&mut self) {
        match self.direction {
            Direction::Increasing => {
                self.seconds += 1;
                if self.seconds > Self::MAX_SECONDS {
                    self.seconds = 0;
                }
            }
            Direction::Decreasing => {
                self.seconds = self.seconds.saturating_sub(1);
            }
        }
    }

    /// Flips the direction and immediately steps once in the new
    /// direction. Returns the new direction.
    pub fn toggle_direction(&mut self) -> Direction {
        self.direction = self.direction.flipped();
        self.advance();
        self.direction
    }

    /// Starts or stops the tick. Returns true if now running.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Zeroes the count. Direction and running are untouched.
    pub fn reset(&mut self) {
        self.seconds = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_zero_increasing() {
        let state = CounterState::new();
        assert_eq!(state.seconds, 0);
        assert_eq!(state.direction, Direction::Increasing);
        assert!(!state.running);
    }

    #[test]
    fn advance_wraps_at_the_top() {
        let mut state = CounterState::new();
        state.seconds = 59;
        state.advance();
        assert_eq!(state.seconds, 0);
    }

    #[test]
    fn advance_clamps_at_zero_when_decreasing() {
        let mut state = CounterState::new();
        state.direction = Direction::Decreasing;
        state.advance();
        assert_eq!(state.seconds, 0);
        state.advance();
        assert_eq!(state.seconds, 0);
    }

    #[test]
    fn toggle_direction_nudges_into_new_direction() {
        let mut state = CounterState::new();
        state.seconds = 10;

        assert_eq!(state.toggle_direction(), Direction::Decreasing);
        assert_eq!(state.seconds, 9);

        assert_eq!(state.toggle_direction(), Direction::Increasing);
        assert_eq!(state.seconds, 10);
    }

    #[test]
    fn toggle_direction_nudge_clamps_at_zero() {
        let mut state = CounterState::new();
        state.toggle_direction();
        assert_eq!(state.direction, Direction::Decreasing);
        assert_eq!(state.seconds, 0);
    }

    #[test]
    fn toggle_direction_nudge_wraps_at_the_top() {
        let mut state = CounterState::new();
        state.seconds = 59;
        state.direction = Direction::Decreasing;
        state.toggle_direction();
        assert_eq!(state.direction, Direction::Increasing);
        assert_eq!(state.seconds, 0);
    }

    #[test]
    fn toggle_running_leaves_count_and_direction_alone() {
        let mut state = CounterState::new();
        state.seconds = 42;

        assert!(state.toggle_running());
        assert_eq!(state.seconds, 42);
        assert_eq!(state.direction, Direction::Increasing);

        assert!(!state.toggle_running());
    }

    #[test]
    fn reset_only_zeroes_the_count() {
        let mut state = CounterState::new();
        state.seconds = 37;
        state.direction = Direction::Decreasing;
        state.running = true;

        state.reset();
        assert_eq!(state.seconds, 0);
        assert_eq!(state.direction, Direction::Decreasing);
        assert!(state.running);
    }

    #[test]
    fn seconds_stay_in_range_under_any_transition_mix() {
        let mut state = CounterState::new();
        for i in 0..500 {
            match i % 4 {
                0 => state.advance(),
                1 => {
                    state.toggle_direction();
                }
                2 => {
                    state.toggle_running();
                }
                _ => state.reset(),
            }
            assert!(state.seconds <= CounterState::MAX_SECONDS);
        }
    }
}
