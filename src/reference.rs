//! CPU mirror of the two fragment stages.
//!
//! Evaluates what the touch and water programs compute, texel by texel, so the
//! blend and disc semantics can be checked without a GPU. Sampling is nearest
//! with clamp-to-edge, matching the water texture's parameters.

use crate::config::{BLEND_FACTOR, CLEAR_COLOR, DISC_RADIUS};

pub type Rgba = [f32; 4];

pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];

/// Touch fragment stage: `Some(red)` inside the disc, `None` where it discards.
pub fn touch_fragment(clip: [f32; 2]) -> Option<Rgba> {
    let distance = (clip[0] * clip[0] + clip[1] * clip[1]).sqrt();
    (distance <= DISC_RADIUS).then_some(RED)
}

/// Water fragment stage: `mix(background, water, BLEND_FACTOR)`.
pub fn composite(background: Rgba, water: Rgba) -> Rgba {
    std::array::from_fn(|i| background[i] * (1.0 - BLEND_FACTOR) + water[i] * BLEND_FACTOR)
}

/// Clip-space position to texture coordinates, as the water vertex stage does.
pub fn clip_to_st(clip: [f32; 2]) -> [f32; 2] {
    [clip[0] * 0.5 + 0.5, clip[1] * 0.5 + 0.5]
}

/// Clip-space position of the center of pixel `(x, y)` in a `width × height` target.
pub fn pixel_center_clip(x: u32, y: u32, width: u32, height: u32) -> [f32; 2] {
    [
        (x as f32 + 0.5) / width as f32 * 2.0 - 1.0,
        (y as f32 + 0.5) / height as f32 * 2.0 - 1.0,
    ]
}

/// Row-major RGBA image, row 0 at the bottom like a GL render target.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub texels: Vec<Rgba>,
}

impl Image {
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            texels: vec![color; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.texels[(y * self.width + x) as usize]
    }

    /// Nearest-texel lookup with clamp-to-edge.
    pub fn sample(&self, st: [f32; 2]) -> Rgba {
        let texel = |coord: f32, extent: u32| -> u32 {
            let i = (coord * extent as f32).floor();
            i.clamp(0.0, (extent - 1) as f32) as u32
        };
        self.get(texel(st[0], self.width), texel(st[1], self.height))
    }
}

/// Pass 1: clear `water` and draw the touch disc into it.
pub fn touch_pass(water: &mut Image) {
    let (w, h) = (water.width, water.height);
    for y in 0..h {
        for x in 0..w {
            let clip = pixel_center_clip(x, y, w, h);
            water.texels[(y * w + x) as usize] = touch_fragment(clip).unwrap_or(CLEAR_COLOR);
        }
    }
}

/// Pass 2: composite `background` and `water` into a `width × height` frame.
pub fn composite_pass(background: &Image, water: &Image, width: u32, height: u32) -> Image {
    let mut frame = Image::filled(width, height, CLEAR_COLOR);
    for y in 0..height {
        for x in 0..width {
            let st = clip_to_st(pixel_center_clip(x, y, width, height));
            frame.texels[(y * width + x) as usize] =
                composite(background.sample(st), water.sample(st));
        }
    }
    frame
}

/// One full tick: Pass 1 into `water`, then Pass 2 into a new frame.
pub fn tick(background: &Image, water: &mut Image, width: u32, height: u32) -> Image {
    touch_pass(water);
    composite_pass(background, water, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_RED: Rgba = [0.5, 0.0, 0.0, 1.0];

    #[test]
    fn composite_is_an_even_blend() {
        let b = [0.2, 0.4, 0.6, 1.0];
        let w = [1.0, 0.0, 0.5, 0.0];
        let out = composite(b, w);
        for (got, want) in out.iter().zip([0.6, 0.2, 0.55, 0.5]) {
            assert!((got - want).abs() < 1e-6, "{:?}", out);
        }
        assert_eq!(composite(RED, CLEAR_COLOR), HALF_RED);
        assert_eq!(composite(RED, RED), RED);
    }

    #[test]
    fn disc_has_radius_one_tenth() {
        assert_eq!(touch_fragment([0.0, 0.0]), Some(RED));
        assert_eq!(touch_fragment([0.099, 0.0]), Some(RED));
        assert_eq!(touch_fragment([0.0, -0.099]), Some(RED));
        assert_eq!(touch_fragment([0.0, 0.101]), None);
        assert_eq!(touch_fragment([0.08, 0.08]), None);
        assert_eq!(touch_fragment([1.0, 1.0]), None);
    }

    #[test]
    fn st_maps_clip_corners_to_unit_square() {
        assert_eq!(clip_to_st([-1.0, -1.0]), [0.0, 0.0]);
        assert_eq!(clip_to_st([1.0, 1.0]), [1.0, 1.0]);
        assert_eq!(clip_to_st([0.0, 0.0]), [0.5, 0.5]);
    }

    #[test]
    fn sampling_clamps_to_edge() {
        let mut img = Image::filled(2, 2, CLEAR_COLOR);
        img.texels[3] = RED;
        assert_eq!(img.sample([1.5, 1.5]), RED);
        assert_eq!(img.sample([-0.5, -0.5]), CLEAR_COLOR);
    }

    #[test]
    fn red_background_with_disc() {
        let background = Image::filled(2, 2, RED);
        let mut water = Image::filled(64, 64, CLEAR_COLOR);
        let frame = tick(&background, &mut water, 64, 64);

        assert_eq!(frame.get(0, 0), HALF_RED);
        assert_eq!(frame.get(63, 63), HALF_RED);
        assert_eq!(frame.get(10, 32), HALF_RED);
        assert_eq!(frame.get(32, 32), RED);
        assert_eq!(frame.get(31, 31), RED);
    }

    #[test]
    fn ticks_are_idempotent_without_input() {
        let background = Image::filled(2, 2, [0.1, 0.7, 0.3, 1.0]);
        let mut water = Image::filled(32, 32, CLEAR_COLOR);
        let first = tick(&background, &mut water, 40, 24);
        let second = tick(&background, &mut water, 40, 24);
        assert_eq!(first, second);
    }
}
