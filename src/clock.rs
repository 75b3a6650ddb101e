/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the previous tick.
    pub dt_ms: f64,
    pub frame_index: u64,
}

impl FrameTime {
    pub fn fps(&self) -> f64 {
        if self.dt_ms > 0.0 {
            1000.0 / self.dt_ms
        } else {
            0.0
        }
    }
}

/// Tracks the timestamp of the last animation frame.
///
/// Timestamps are the `DOMHighResTimeStamp` values handed to
/// `requestAnimationFrame` callbacks, in milliseconds. Timing is diagnostic only
/// and never feeds into rendering.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `now_ms`; returns `None` on the first tick.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameTime> {
        let previous = self.last.replace(now_ms);
        self.frame_index += 1;
        previous.map(|prev| FrameTime {
            dt_ms: (now_ms - prev).max(0.0),
            frame_index: self.frame_index,
        })
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }

    pub fn frames(&self) -> u64 {
        self.frame_index
    }
}
