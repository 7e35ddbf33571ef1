use std::time::{Duration, Instant};

/// Timing of one frame tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    /// Zero-based count of ticks so far.
    pub frame_index: u64,
}

/// Produces a [`FrameTime`] per redraw.
///
/// Deltas are clamped so a stall (debugger, minimized window) shows up as a
/// single long frame instead of an outlier.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frames: u64,
    min_dt: Duration,
    max_dt: Duration,
}

impl FrameClock {
    pub const DEFAULT_MIN_DT: Duration = Duration::from_micros(100);
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_MIN_DT, Self::DEFAULT_MAX_DT)
    }

    pub fn with_clamps(min_dt: Duration, max_dt: Duration) -> Self {
        debug_assert!(min_dt <= max_dt);
        Self {
            last: Instant::now(),
            frames: 0,
            min_dt,
            max_dt,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.min_dt, self.max_dt);

        let time = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frames,
        };

        self.last = now;
        self.frames = self.frames.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(start: Instant) -> FrameClock {
        FrameClock {
            last: start,
            ..FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(100))
        }
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn regular_frames_pass_through() {
        let start = Instant::now();
        let mut clock = clock_at(start);
        let time = clock.tick_at(start + Duration::from_millis(16));
        assert!((time.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn back_to_back_ticks_respect_minimum() {
        let start = Instant::now();
        let mut clock = clock_at(start);
        assert!((clock.tick_at(start).dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn long_stall_is_clamped_to_maximum() {
        let start = Instant::now();
        let mut clock = clock_at(start);
        let time = clock.tick_at(start + Duration::from_secs(10));
        assert!((time.dt - 0.1).abs() < 1e-6);
    }
}
