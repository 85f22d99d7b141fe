//! The WebGL2 glyph pipeline.
//!
//! Owns the compiled program, the vertex array, and the atlas texture, and
//! exposes the two per-frame operations the draw loop needs: upload a scene's
//! vertex buffer and draw it. Attribute and uniform lookups go through the
//! name constants in `wordlace_render::shaders` so the CPU side cannot drift
//! from the shader text.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlImageElement, WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlTexture,
    WebGlUniformLocation, WebGlVertexArrayObject,
};
use wordlace_render::{
    Rgb, quad::FLOATS_PER_VERTEX,
    shaders::{
        ATTRIB_COLOR, ATTRIB_POSITION, ATTRIB_TEXCOORD, FRAGMENT_SHADER, UNIFORM_ATLAS,
        UNIFORM_FILL_COLOR, UNIFORM_TRANSLATION, VERTEX_SHADER,
    },
};

use crate::gl::{GlError, compile_shader, link_program};

const BYTES_PER_FLOAT: i32 = 4;

pub struct GlyphPipeline {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    vertex_buffer: WebGlBuffer,
    texture: WebGlTexture,
    u_translation: Option<WebGlUniformLocation>,
    u_fill: Option<WebGlUniformLocation>,
    u_atlas: Option<WebGlUniformLocation>,
    vertex_count: i32,
}

impl GlyphPipeline {
    /// Compiles the MSDF program and uploads the atlas texture.
    pub fn new(
        gl: &WebGl2RenderingContext,
        atlas_image: &HtmlImageElement,
    ) -> Result<Self, GlError> {
        let vertex = compile_shader(gl, WebGl2RenderingContext::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(
            gl,
            WebGl2RenderingContext::FRAGMENT_SHADER,
            FRAGMENT_SHADER,
        )?;
        let program = link_program(gl, &vertex, &fragment)?;
        // Linked programs keep their own copy of the stages.
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let vao = gl
            .create_vertex_array()
            .ok_or(GlError::CreateObject { kind: "vertex array" })?;
        let vertex_buffer = gl
            .create_buffer()
            .ok_or(GlError::CreateObject { kind: "buffer" })?;

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let stride = FLOATS_PER_VERTEX as i32 * BYTES_PER_FLOAT;
        for (name, components, offset_floats) in [
            (ATTRIB_POSITION, 2, 0),
            (ATTRIB_TEXCOORD, 2, 2),
            (ATTRIB_COLOR, 4, 4),
        ] {
            let location = gl.get_attrib_location(&program, name);
            if location < 0 {
                continue;
            }
            #[expect(clippy::cast_sign_loss)]
            let location = location as u32;
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_with_i32(
                location,
                components,
                WebGl2RenderingContext::FLOAT,
                false,
                stride,
                offset_floats * BYTES_PER_FLOAT,
            );
        }

        let texture = gl
            .create_texture()
            .ok_or(GlError::CreateObject { kind: "texture" })?;
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, Some(&texture));
        #[expect(clippy::cast_possible_wrap)]
        gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
            WebGl2RenderingContext::TEXTURE_2D,
            0,
            WebGl2RenderingContext::RGBA as i32,
            WebGl2RenderingContext::RGBA,
            WebGl2RenderingContext::UNSIGNED_BYTE,
            atlas_image,
        )
        .map_err(|_| GlError::TextureUpload)?;
        // MSDF atlases must be sampled with bilinear filtering; the median
        // reconstruction relies on interpolated channel values.
        for (param, value) in [
            (
                WebGl2RenderingContext::TEXTURE_MIN_FILTER,
                WebGl2RenderingContext::LINEAR,
            ),
            (
                WebGl2RenderingContext::TEXTURE_MAG_FILTER,
                WebGl2RenderingContext::LINEAR,
            ),
            (
                WebGl2RenderingContext::TEXTURE_WRAP_S,
                WebGl2RenderingContext::CLAMP_TO_EDGE,
            ),
            (
                WebGl2RenderingContext::TEXTURE_WRAP_T,
                WebGl2RenderingContext::CLAMP_TO_EDGE,
            ),
        ] {
            #[expect(clippy::cast_possible_wrap)]
            gl.tex_parameteri(WebGl2RenderingContext::TEXTURE_2D, param, value as i32);
        }

        let u_translation = gl.get_uniform_location(&program, UNIFORM_TRANSLATION);
        let u_fill = gl.get_uniform_location(&program, UNIFORM_FILL_COLOR);
        let u_atlas = gl.get_uniform_location(&program, UNIFORM_ATLAS);

        gl.bind_vertex_array(None);

        Ok(Self {
            program,
            vao,
            vertex_buffer,
            texture,
            u_translation,
            u_fill,
            u_atlas,
            vertex_count: 0,
        })
    }

    /// Uploads a scene's interleaved vertex data.
    pub fn upload(&mut self, gl: &WebGl2RenderingContext, vertices: &[f32]) {
        gl.bind_buffer(
            WebGl2RenderingContext::ARRAY_BUFFER,
            Some(&self.vertex_buffer),
        );
        // Float32Array::view borrows wasm memory; no allocation may happen
        // between creating the view and handing it to buffer_data.
        unsafe {
            let view = js_sys::Float32Array::view(vertices);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &view,
                WebGl2RenderingContext::DYNAMIC_DRAW,
            );
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        {
            self.vertex_count = (vertices.len() / FLOATS_PER_VERTEX) as i32;
        }
    }

    /// Draws the uploaded scene.
    pub fn draw(&self, gl: &WebGl2RenderingContext, translation: [f32; 2], fill: Rgb) {
        if self.vertex_count == 0 {
            return;
        }
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));

        gl.active_texture(WebGl2RenderingContext::TEXTURE0);
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, Some(&self.texture));
        gl.uniform1i(self.u_atlas.as_ref(), 0);
        gl.uniform2f(self.u_translation.as_ref(), translation[0], translation[1]);
        gl.uniform3f(self.u_fill.as_ref(), fill.r, fill.g, fill.b);

        gl.enable(WebGl2RenderingContext::BLEND);
        gl.blend_func(
            WebGl2RenderingContext::SRC_ALPHA,
            WebGl2RenderingContext::ONE_MINUS_SRC_ALPHA,
        );

        gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, self.vertex_count);
        gl.bind_vertex_array(None);
    }
}

/// Acquires a WebGL2 context from a canvas.
pub fn webgl2_context(
    canvas: &web_sys::HtmlCanvasElement,
) -> Option<WebGl2RenderingContext> {
    canvas
        .get_context("webgl2")
        .ok()
        .flatten()?
        .dyn_into::<WebGl2RenderingContext>()
        .ok()
}
