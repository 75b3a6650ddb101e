/// Level pointer presses are logged at.
pub const PRESS_LOG_LEVEL: log::Level = log::Level::Info;

/// Pointer position relative to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// CSS pixels from the canvas' left edge.
    pub x: f64,
    /// CSS pixels from the canvas' top edge.
    pub y: f64,
}

impl PointerPosition {
    /// Maps to clip space ([-1, 1]², y up) for a canvas of `width × height` CSS pixels.
    ///
    /// Returns `None` for a degenerate canvas.
    pub fn to_clip(self, width: f64, height: f64) -> Option<[f32; 2]> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let x = self.x / width * 2.0 - 1.0;
        let y = 1.0 - self.y / height * 2.0;
        Some([x as f32, y as f32])
    }
}
