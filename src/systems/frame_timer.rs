//! Frame timing
//!
//! Measures the delta between display frames and the observed frame rate.
//! Nothing in the scene assumes a fixed rate. Animation runs off the frame
//! index and spawn effects off object age, so the FPS figure is only shown.

use std::time::Duration;

/// Delta cap for the first frame or after the window regains focus
const MAX_DT: f32 = 0.25;

/// Window over which frames are counted for the FPS figure
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Tracks frame deltas and frames per second
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Option<Duration>,
    window_start: Duration,
    frames_in_window: u32,
    fps: u32,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            window_start: Duration::ZERO,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Record a frame at time `now`, returning the capped delta in seconds
    pub fn tick(&mut self, now: Duration) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_sub(last).as_secs_f32().min(MAX_DT),
            None => {
                self.window_start = now;
                0.0
            }
        };
        self.last_frame = Some(now);

        self.frames_in_window += 1;
        let elapsed = now.saturating_sub(self.window_start);
        if elapsed >= FPS_WINDOW {
            self.fps = (self.frames_in_window as f32 / elapsed.as_secs_f32()).floor() as u32;
            self.frames_in_window = 0;
            self.window_start = now;
        }

        dt
    }

    /// Frames per second over the last full window (floored)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(ms(5000)), 0.0);
        assert_eq!(timer.fps(), 0);
    }

    #[test]
    fn test_delta_time_capped() {
        let mut timer = FrameTimer::new();
        timer.tick(ms(0));
        assert!((timer.tick(ms(16)) - 0.016).abs() < 1e-6);
        // Simulate a long pause (window focus)
        assert_eq!(timer.tick(ms(5000)), MAX_DT);
    }

    #[test]
    fn test_fps_observed_not_assumed() {
        let mut timer = FrameTimer::new();
        // 31 ticks 33ms apart span 990ms, the 32nd closes the window at 1023ms
        for i in 0..=31 {
            timer.tick(ms(i * 33));
        }
        assert_eq!(timer.fps(), 31);
    }
}
