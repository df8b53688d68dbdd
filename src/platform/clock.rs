//! Frame clocks

use std::time::{Duration, Instant};

use super::FrameClock;

#[inline]
fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// Sleeps away whatever is left of each frame
#[derive(Debug, Default)]
pub struct SleepClock {
    last: Option<Instant>,
}

impl SleepClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self, fps: u32) -> Duration {
        let frame = frame_duration(fps);
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        let now = Instant::now();
        let dt = self.last.map(|last| now - last).unwrap_or_default();
        self.last = Some(now);
        dt
    }
}

/// Never waits; reports a perfect frame time. For headless runs.
#[derive(Debug, Default)]
pub struct FixedClock {
    pub ticks: u64,
}

impl FrameClock for FixedClock {
    fn tick(&mut self, fps: u32) -> Duration {
        self.ticks += 1;
        frame_duration(fps)
    }
}
