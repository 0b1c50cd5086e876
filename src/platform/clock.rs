//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_MS;

/// Caps the loop rate and reports the time between frames
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Sleep until at least `1/fps` seconds have passed since the previous
    /// tick, then return the elapsed milliseconds (clamped).
    pub fn tick(&mut self, fps: u32) -> f32 {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let since = self.last.elapsed();
        if since < frame {
            thread::sleep(frame - since);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        clamp_frame_ms(elapsed.as_secs_f32() * 1000.0)
    }
}

/// Bound a frame time to `[0, MAX_FRAME_MS]`
pub fn clamp_frame_ms(ms: f32) -> f32 {
    ms.clamp(0.0, MAX_FRAME_MS)
}
