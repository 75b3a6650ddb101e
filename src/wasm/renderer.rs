use js_sys::Float32Array;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlTexture, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use super::program::build_program;
use super::texture::WaterTarget;
use crate::clock::FrameClock;
use crate::config::RippleConfig;
use crate::error::{Result, RippleError};
use crate::geometry::{self, COMPONENTS_PER_VERTEX, QUAD};
use crate::shaders::{
    BACKGROUND_TEXTURE, BACKGROUND_TEXTURE_UNIT, TOUCH_PROGRAM, VERTEX_POSITION, WATER_PROGRAM,
    WATER_TEXTURE, WATER_TEXTURE_UNIT,
};

/// Owns every GPU resource of the demo and draws the two passes.
pub struct Renderer {
    gl: GL,
    touch_program: WebGlProgram,
    water_program: WebGlProgram,
    background_location: WebGlUniformLocation,
    water_location: WebGlUniformLocation,
    // Kept alive for the VAO that references it.
    _quad_buffer: WebGlBuffer,
    quad_vao: WebGlVertexArrayObject,
    background: WebGlTexture,
    water: WaterTarget,
    clear_color: [f32; 4],
    clock: FrameClock,
}

impl Renderer {
    /// Builds both programs, uploads the quad, then allocates the water target.
    pub fn new(gl: GL, background: WebGlTexture, config: &RippleConfig) -> Result<Self> {
        if !config.matches_shaders() {
            log::warn!(
                "disc radius {} / blend factor {} differ from the embedded shaders; using the shader values",
                config.disc_radius,
                config.blend_factor
            );
        }
        let touch_program = build_program(&gl, &TOUCH_PROGRAM)?;
        let water_program = build_program(&gl, &WATER_PROGRAM)?;

        // Resolved once from the touch program; the water program declares the
        // same attribute and shares the VAO.
        let position = gl.get_attrib_location(&touch_program, VERTEX_POSITION);
        if position < 0 {
            return Err(RippleError::MissingAttribute(VERTEX_POSITION));
        }
        let water_position = gl.get_attrib_location(&water_program, VERTEX_POSITION);
        if water_position != position {
            log::warn!(
                "`{}` bound at {} in water program, {} in touch program",
                VERTEX_POSITION,
                water_position,
                position
            );
        }

        let background_location = gl
            .get_uniform_location(&water_program, BACKGROUND_TEXTURE)
            .ok_or(RippleError::MissingUniform(BACKGROUND_TEXTURE))?;
        let water_location = gl
            .get_uniform_location(&water_program, WATER_TEXTURE)
            .ok_or(RippleError::MissingUniform(WATER_TEXTURE))?;

        let quad_buffer = gl
            .create_buffer()
            .ok_or(RippleError::ResourceCreation("vertex buffer"))?;
        let quad_vao = gl
            .create_vertex_array()
            .ok_or(RippleError::ResourceCreation("vertex array"))?;
        gl.bind_vertex_array(Some(&quad_vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad_buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(&QUAD[..]),
            GL::STATIC_DRAW,
        );
        gl.enable_vertex_attrib_array(position as u32);
        gl.vertex_attrib_pointer_with_i32(
            position as u32,
            COMPONENTS_PER_VERTEX as i32,
            GL::FLOAT,
            false,
            0,
            0,
        );
        gl.bind_vertex_array(None);
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        let water = WaterTarget::new(&gl, config.water_size)?;
        log::debug!("water target {}x{}", config.water_size, config.water_size);

        Ok(Self {
            gl,
            touch_program,
            water_program,
            background_location,
            water_location,
            _quad_buffer: quad_buffer,
            quad_vao,
            background,
            water,
            clear_color: config.clear_color,
            clock: FrameClock::new(),
        })
    }

    pub fn gl(&self) -> &GL {
        &self.gl
    }

    pub fn water_dimensions(&self) -> (u32, u32) {
        self.water.dimensions()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// One tick: record `now_ms`, update the water texture, composite to the canvas.
    pub fn render_frame(&mut self, now_ms: f64) {
        if let Some(time) = self.clock.tick(now_ms) {
            log::trace!(
                "frame {}: {:.2} ms ({:.1} fps)",
                time.frame_index,
                time.dt_ms,
                time.fps()
            );
        }
        self.touch_pass();
        self.composite_pass();
    }

    /// Pass 1: draw the touch disc into the water texture.
    pub fn touch_pass(&self) {
        let gl = &self.gl;
        let (width, height) = self.water.dimensions();

        gl.bind_framebuffer(GL::FRAMEBUFFER, Some(&self.water.framebuffer));
        gl.viewport(0, 0, width as i32, height as i32);
        gl.use_program(Some(&self.touch_program));

        // Bound but not sampled: the touch stage does not read the previous state.
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.water.texture));

        self.clear();
        self.draw_quad();
    }

    /// Pass 2: blend background and water onto the canvas.
    pub fn composite_pass(&self) {
        let gl = &self.gl;

        gl.bind_framebuffer(GL::FRAMEBUFFER, None);
        gl.viewport(0, 0, gl.drawing_buffer_width(), gl.drawing_buffer_height());
        gl.use_program(Some(&self.water_program));

        gl.active_texture(GL::TEXTURE0 + BACKGROUND_TEXTURE_UNIT);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.background));
        gl.uniform1i(Some(&self.background_location), BACKGROUND_TEXTURE_UNIT as i32);

        gl.active_texture(GL::TEXTURE0 + WATER_TEXTURE_UNIT);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.water.texture));
        gl.uniform1i(Some(&self.water_location), WATER_TEXTURE_UNIT as i32);

        self.clear();
        self.draw_quad();
    }

    fn clear(&self) {
        let [r, g, b, a] = self.clear_color;
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn draw_quad(&self) {
        self.gl.bind_vertex_array(Some(&self.quad_vao));
        self.gl
            .draw_arrays(GL::TRIANGLE_STRIP, 0, geometry::vertex_count());
        self.gl.bind_vertex_array(None);
    }
}
