use crate::constants::FPS_LOG_INTERVAL_SEC;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Whether the frame scheduler should request another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared stop flag for a render loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Measures time between ticks. Ticks may arrive at any rate; the delta is
/// reported, never assumed.
pub struct FrameClock {
    last: Instant,
    frames: u64,
    window_frames: u32,
    window_sec: f32,
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
            frames: 0,
            window_frames: 0,
            window_sec: 0.0,
        }
    }

    /// Record a tick and return the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        self.frames += 1;

        self.window_frames += 1;
        self.window_sec += dt.as_secs_f32();
        if self.window_sec >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps over {} frames",
                self.window_frames as f32 / self.window_sec,
                self.window_frames
            );
            self.window_frames = 0;
            self.window_sec = 0.0;
        }
        dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
