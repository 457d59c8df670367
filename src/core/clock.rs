use std::time::Instant;

/// Wall-clock frame timer.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Returns seconds since the last tick and advances the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothed FPS readout.
///
/// Counts frames and elapsed time, yielding the average rate once per
/// reporting interval so the host can log it without spamming every frame.
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Counts one frame; returns the average FPS when the interval elapses.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            let fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009, "expected at least the sleep time, got {}", delta);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        assert!(delta < 0.005);
    }

    #[test]
    fn fps_counter_reports_once_per_interval() {
        let mut fps = FpsCounter::new(1.0);

        for _ in 0..59 {
            assert_eq!(fps.tick(1.0 / 60.0), None);
        }
        let reading = fps.tick(1.0 / 60.0).expect("interval elapsed");
        assert!((reading - 60.0).abs() < 1.0, "got {}", reading);

        // Counter starts over after reporting.
        assert_eq!(fps.tick(1.0 / 60.0), None);
    }
}
