/// Frame timing for the variable-timestep loop
///
/// Each tick is parameterized by the wall-clock time since the previous
/// tick started. The delta is not clamped: after a long stall (a debugger
/// pause, a dragged window) the next tick sees the whole gap.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// How many frames between FPS recalculations
const FPS_UPDATE_INTERVAL: u64 = 10;

/// Frame timing state
pub struct FrameClock {
    /// Start time of the previous tick
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Number of ticks started
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a clock whose first tick is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame_time: start,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE + 1),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new tick, returning seconds since the previous one
    pub fn begin_frame(&mut self) -> f32 {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new tick at a given instant
    pub fn begin_frame_at(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        if self.frame_count % FPS_UPDATE_INTERVAL == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32()
    }

    /// Get total number of ticks started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };

        if self.frame_count % (FPS_UPDATE_INTERVAL * 30) == 0 {
            log::debug!("{:.1} fps over {} frames", self.current_fps, self.frame_count);
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
