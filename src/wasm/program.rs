use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader};

use crate::error::{Result, RippleError};
use crate::shaders::{ProgramSource, ShaderStage};

/// Compiles `source` and links both stages into a program.
pub fn build_program(gl: &GL, source: &ProgramSource) -> Result<WebGlProgram> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, source.vertex)?;
    let fragment = compile_shader(gl, ShaderStage::Fragment, source.fragment)?;

    let program = gl
        .create_program()
        .ok_or(RippleError::ResourceCreation("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // Shaders are owned by the program once linked.
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        return Err(RippleError::ShaderLink {
            program: source.name,
            log,
        });
    }

    log::debug!("built `{}` program", source.name);
    Ok(program)
}

pub fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(RippleError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| String::from("unknown error"));
        gl.delete_shader(Some(&shader));
        Err(RippleError::ShaderCompile { stage, log })
    }
}
