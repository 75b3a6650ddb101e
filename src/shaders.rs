//! Embedded GLSL ES 1.00 sources for the two passes.

use std::fmt;

/// Vertex attribute shared by both programs.
pub const VERTEX_POSITION: &str = "vertexPosition";
/// Sampler uniform bound to texture unit 0 in the water program.
pub const BACKGROUND_TEXTURE: &str = "backgroundTexture";
/// Sampler uniform bound to texture unit 1 in the water program.
pub const WATER_TEXTURE: &str = "waterTexture";

pub const BACKGROUND_TEXTURE_UNIT: u32 = 0;
pub const WATER_TEXTURE_UNIT: u32 = 1;

/// Passes clip-space position through as `st`.
pub const TOUCH_VERTEX: &str = r#"
attribute vec4 vertexPosition;
varying vec2 st;

void main(void) {
    gl_Position = vertexPosition;
    st = vertexPosition.st;
}
"#;

/// Red disc of radius 0.1 at the origin; everything else keeps the clear color.
pub const TOUCH_FRAGMENT: &str = r#"
precision mediump float;
varying vec2 st;

void main(void) {
    if (distance(st, vec2(0.0, 0.0)) > 0.1) {
        discard;
    }
    gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
"#;

/// Maps clip space to texture coordinates.
pub const WATER_VERTEX: &str = r#"
attribute vec4 vertexPosition;
varying vec2 st;

void main(void) {
    gl_Position = vertexPosition;
    st = vertexPosition.st * 0.5 + vec2(0.5, 0.5);
}
"#;

pub const WATER_FRAGMENT: &str = r#"
precision mediump float;
varying vec2 st;
uniform sampler2D backgroundTexture;
uniform sampler2D waterTexture;

void main(void) {
    vec4 background = texture2D(backgroundTexture, st);
    vec4 water = texture2D(waterTexture, st);
    gl_FragColor = mix(background, water, 0.5);
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A vertex/fragment source pair.
#[derive(Debug, Clone, Copy)]
pub struct ProgramSource {
    pub name: &'static str,
    pub vertex: &'static str,
    pub fragment: &'static str,
}

pub const TOUCH_PROGRAM: ProgramSource = ProgramSource {
    name: "touch",
    vertex: TOUCH_VERTEX,
    fragment: TOUCH_FRAGMENT,
};

pub const WATER_PROGRAM: ProgramSource = ProgramSource {
    name: "water",
    vertex: WATER_VERTEX,
    fragment: WATER_FRAGMENT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BLEND_FACTOR, DISC_RADIUS};

    #[test]
    fn both_programs_declare_the_shared_attribute() {
        for program in [TOUCH_PROGRAM, WATER_PROGRAM] {
            let decl = format!("attribute vec4 {};", VERTEX_POSITION);
            assert!(program.vertex.contains(&decl), "{} vertex stage", program.name);
        }
    }

    #[test]
    fn only_water_program_samples_textures() {
        assert!(!TOUCH_FRAGMENT.contains("sampler2D"));
        for name in [BACKGROUND_TEXTURE, WATER_TEXTURE] {
            let decl = format!("uniform sampler2D {};", name);
            assert!(WATER_FRAGMENT.contains(&decl), "missing {}", name);
        }
    }

    #[test]
    fn glsl_literals_match_config_constants() {
        let disc = format!("distance(st, vec2(0.0, 0.0)) > {:?}", DISC_RADIUS);
        assert!(TOUCH_FRAGMENT.contains(&disc), "touch fragment lost `{}`", disc);

        let blend = format!("mix(background, water, {:?})", BLEND_FACTOR);
        assert!(WATER_FRAGMENT.contains(&blend), "water fragment lost `{}`", blend);
    }

    #[test]
    fn texture_units_are_distinct() {
        assert_ne!(BACKGROUND_TEXTURE_UNIT, WATER_TEXTURE_UNIT);
    }

    #[test]
    fn stage_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
