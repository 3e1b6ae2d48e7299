//=========================================================================
// Walk Cycle
//=========================================================================
//
// Two-frame walk animation index for the player sprite.
//
// The frame flips every `FRAME_TIME` of continuous movement. Stopping
// keeps the current frame and restarts the interval, so the next flip
// happens a full frame time after movement resumes.
//
//=========================================================================

use std::time::Duration;

/// Alternating walk frame driven by tick time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkCycle {
    frame: u8,
    accumulated: Duration,
}

impl WalkCycle {
    pub const FRAME_TIME: Duration = Duration::from_millis(200);

    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the animation by one tick.
    pub fn advance(&mut self, moving: bool, dt: Duration) {
        if !moving {
            self.accumulated = Duration::ZERO;
            return;
        }

        self.accumulated += dt;
        while self.accumulated >= Self::FRAME_TIME {
            self.accumulated -= Self::FRAME_TIME;
            self.frame ^= 1;
        }
    }

    /// Current frame, `0` or `1`.
    pub fn frame(&self) -> u8 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn flips_after_frame_time() {
        let mut cycle = WalkCycle::new();

        // 12 ticks = 192ms
        for _ in 0..12 {
            cycle.advance(true, TICK);
        }
        assert_eq!(cycle.frame(), 0);

        cycle.advance(true, TICK);
        assert_eq!(cycle.frame(), 1);
    }

    #[test]
    fn holds_frame_while_idle() {
        let mut cycle = WalkCycle::new();
        cycle.advance(true, WalkCycle::FRAME_TIME);
        assert_eq!(cycle.frame(), 1);

        for _ in 0..100 {
            cycle.advance(false, TICK);
        }
        assert_eq!(cycle.frame(), 1);
    }

    #[test]
    fn stopping_restarts_interval() {
        let mut cycle = WalkCycle::new();
        cycle.advance(true, Duration::from_millis(150));
        cycle.advance(false, TICK);
        cycle.advance(true, Duration::from_millis(150));
        assert_eq!(cycle.frame(), 0);
    }

    #[test]
    fn large_step_flips_multiple_times() {
        let mut cycle = WalkCycle::new();
        cycle.advance(true, Duration::from_millis(400));
        assert_eq!(cycle.frame(), 0);
        cycle.advance(true, Duration::from_millis(200));
        assert_eq!(cycle.frame(), 1);
    }
}
