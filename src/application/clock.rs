/// Whether generations are currently advancing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Running,
    Paused,
}

/// Decouples the generation rate from the display refresh rate.
///
/// While running, each frame either counts up towards
/// `ticks_per_generation` or, once reached, requests an advance and
/// starts counting again from zero.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    elapsed: u32,
    ticks_per_generation: u32,
    state: ClockState,
}

impl SimulationClock {
    pub fn new(ticks_per_generation: u32) -> Self {
        Self {
            elapsed: 0,
            ticks_per_generation,
            state: ClockState::Running,
        }
    }

    /// Called once per frame. Returns true when a generation should advance.
    pub fn tick(&mut self) -> bool {
        if self.state == ClockState::Paused {
            return false;
        }

        if self.elapsed < self.ticks_per_generation {
            self.elapsed += 1;
            return false;
        }

        self.elapsed = 0;
        true
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle_pause(&mut self) -> ClockState {
        self.state = match self.state {
            ClockState::Running => ClockState::Paused,
            ClockState::Paused => ClockState::Running,
        };
        self.state
    }

    pub const fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    pub const fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub const fn ticks_per_generation(&self) -> u32 {
        self.ticks_per_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_every_tpg_plus_one_frames() {
        let mut clock = SimulationClock::new(3);
        let fired: Vec<bool> = (0..8).map(|_| clock.tick()).collect();
        assert_eq!(fired, [false, false, false, true, false, false, false, true]);
    }

    #[test]
    fn test_zero_tpg_advances_every_frame() {
        let mut clock = SimulationClock::new(0);
        assert!((0..5).all(|_| clock.tick()));
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_elapsed_resets_after_advance() {
        let mut clock = SimulationClock::new(2);
        clock.tick();
        clock.tick();
        assert_eq!(clock.elapsed(), 2);
        assert!(clock.tick());
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_paused_frames_are_no_ops() {
        let mut clock = SimulationClock::new(1);
        clock.tick();
        assert_eq!(clock.toggle_pause(), ClockState::Paused);

        for _ in 0..10 {
            assert!(!clock.tick());
        }
        assert_eq!(clock.elapsed(), 1);

        assert_eq!(clock.toggle_pause(), ClockState::Running);
        assert!(clock.tick());
    }

    #[test]
    fn test_starts_running() {
        let clock = SimulationClock::new(5);
        assert_eq!(clock.state(), ClockState::Running);
        assert!(!clock.is_paused());
        assert_eq!(clock.ticks_per_generation(), 5);
    }
}
