//! Fixed parameters of the ripple demo.
//!
//! Nothing here is read from the page or the environment; `RippleConfig::default()`
//! is the only configuration the demo runs with.

/// Id of the `<canvas>` element the demo renders into.
pub const CANVAS_ID: &str = "glCanvas";

/// Background image, relative to the hosting page.
pub const BACKGROUND_URL: &str = "background.png";

/// Edge length in texels of the square water texture.
pub const WATER_TEXTURE_SIZE: u32 = 512;

/// Radius of the touch disc, in clip-space units around the origin.
pub const DISC_RADIUS: f32 = 0.1;

/// Weight of the water texture in the composite (`mix(background, water, f)`).
pub const BLEND_FACTOR: f32 = 0.5;

/// Clear color used by both passes.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub struct RippleConfig {
    pub canvas_id: String,
    pub background_url: String,
    /// Water texture edge length; the texture is always square.
    pub water_size: u32,
    /// Touch disc radius compiled into the touch fragment stage.
    pub disc_radius: f32,
    /// Blend weight compiled into the water fragment stage.
    pub blend_factor: f32,
    pub clear_color: [f32; 4],
    pub log_level: log::Level,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_owned(),
            background_url: BACKGROUND_URL.to_owned(),
            water_size: WATER_TEXTURE_SIZE,
            disc_radius: DISC_RADIUS,
            blend_factor: BLEND_FACTOR,
            clear_color: CLEAR_COLOR,
            log_level: log::Level::Info,
        }
    }
}

impl RippleConfig {
    /// Width and height of the water texture.
    pub fn water_dimensions(&self) -> (u32, u32) {
        (self.water_size, self.water_size)
    }

    /// True when the disc radius and blend factor are the values baked into the
    /// embedded shaders.
    pub fn matches_shaders(&self) -> bool {
        self.disc_radius == DISC_RADIUS && self.blend_factor == BLEND_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = RippleConfig::default();
        assert_eq!(cfg.canvas_id, "glCanvas");
        assert_eq!(cfg.background_url, "background.png");
        assert_eq!(cfg.water_dimensions(), (512, 512));
        assert_eq!(cfg.disc_radius, 0.1);
        assert_eq!(cfg.blend_factor, 0.5);
        assert!(cfg.matches_shaders());
        assert_eq!(cfg.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(cfg.log_level, log::Level::Info);
    }

    #[test]
    fn overridden_blend_no_longer_matches_shaders() {
        let cfg = RippleConfig {
            blend_factor: 0.25,
            ..RippleConfig::default()
        };
        assert!(!cfg.matches_shaders());
    }
}
