//! Smooth scroll driver for the main page
//!
//! Nav links and the show-more control set a target offset; the driver eases
//! the scroll position toward it over a few frames and then goes idle. While
//! idle it simply mirrors wherever the user scrolled.

/// Fraction of the remaining distance covered per second.
const APPROACH_RATE: f32 = 6.0;
/// Close enough: snap to the target and stop animating.
const SNAP_DISTANCE: f32 = 0.5;

#[derive(Debug, Default)]
pub struct ScrollDriver {
    offset: f32,
    target: Option<f32>,
}

impl ScrollDriver {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn scroll_to(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
    }

    /// Advance the animation by `dt` seconds. Returns the offset to apply
    /// this frame, or None while idle (the user keeps control).
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        let target = self.target?;
        let diff = target - self.offset;
        if diff.abs() <= SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        } else {
            self.offset += diff * (APPROACH_RATE * dt).clamp(0.0, 1.0);
        }
        Some(self.offset)
    }

    /// Adopt the offset the scroll area actually ended up at. A no-op while
    /// an animation is in flight.
    pub fn sync(&mut self, actual: f32) {
        if self.target.is_none() {
            self.offset = actual;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn converges_and_goes_idle() {
        let mut driver = ScrollDriver::default();
        driver.scroll_to(1000.0);
        assert!(driver.is_animating());

        let mut frames = 0;
        while driver.is_animating() {
            let offset = driver.tick(DT).unwrap();
            assert!(offset <= 1000.0);
            frames += 1;
            assert!(frames < 600, "driver failed to converge");
        }
        assert_eq!(driver.offset(), 1000.0);
        assert_eq!(driver.tick(DT), None);
    }

    #[test]
    fn animates_monotonically_toward_the_target() {
        let mut driver = ScrollDriver::default();
        driver.sync(500.0);
        driver.scroll_to(100.0);
        let mut last = driver.offset();
        while let Some(offset) = driver.tick(DT) {
            assert!(offset <= last);
            last = offset;
        }
        assert_eq!(driver.offset(), 100.0);
    }

    #[test]
    fn idle_sync_adopts_the_user_offset() {
        let mut driver = ScrollDriver::default();
        driver.sync(250.0);
        assert_eq!(driver.offset(), 250.0);

        // A running animation ignores sync
        driver.scroll_to(0.0);
        driver.sync(999.0);
        assert_ne!(driver.offset(), 999.0);
    }

    #[test]
    fn negative_targets_clamp_to_zero() {
        let mut driver = ScrollDriver::default();
        driver.sync(50.0);
        driver.scroll_to(-200.0);
        while driver.tick(DT).is_some() {}
        assert_eq!(driver.offset(), 0.0);
    }
}
