//! Shader and program creation over WebGL2.
//!
//! One-shot setup utilities: compile, check the status flag, capture the
//! info log into the error and dispose the object on failure. Failures are
//! terminal for the resource; whether to log them is the caller's decision.

use web_sys::{WebGl2RenderingContext, WebGlProgram, WebGlShader};

/// Failures while building the GPU pipeline.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GlError {
    #[display("could not create {kind} object")]
    CreateObject { kind: &'static str },
    #[display("shader compilation failed: {info_log}")]
    CompileFailed { info_log: String },
    #[display("program linking failed: {info_log}")]
    LinkFailed { info_log: String },
    #[display("atlas texture upload failed")]
    TextureUpload,
}

/// Compiles a shader stage from source.
pub fn compile_shader(
    gl: &WebGl2RenderingContext,
    stage: u32,
    source: &str,
) -> Result<WebGlShader, GlError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(GlError::CreateObject { kind: "shader" })?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let info_log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(GlError::CompileFailed { info_log })
}

/// Links two compiled stages into a program.
pub fn link_program(
    gl: &WebGl2RenderingContext,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, GlError> {
    let program = gl
        .create_program()
        .ok_or(GlError::CreateObject { kind: "program" })?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let info_log = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(GlError::LinkFailed { info_log })
}
