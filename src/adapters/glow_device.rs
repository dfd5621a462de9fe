use crate::controllers::fractal::ports::graphics_device::{
    BuildError, BuildStage, Diagnostic, GraphicsDevicePort, ProgramBuild, UniformError,
    UniformValue,
};
use crate::core::data::dimensions::Dimensions;
use glow::HasContext;

// Unit quad in the [0, 1] square; the vertex stage maps it to clip space.
const QUAD_VERTICES: [f32; 12] = [
    0.0, 0.0, 0.0, //
    1.0, 0.0, 0.0, //
    1.0, 1.0, 0.0, //
    0.0, 1.0, 0.0, //
];

/// A compiled program with its two stage handles. All three are deleted
/// together on destroy, never individually.
pub struct GlowProgram {
    program: glow::NativeProgram,
    vertex: glow::NativeShader,
    fragment: glow::NativeShader,
}

/// OpenGL implementation of the graphics-device port via `glow`.
///
/// The caller owns the windowing stack and must keep the GL context
/// current on the calling thread for the lifetime of this device.
pub struct GlowDevice {
    gl: glow::Context,
    quad_buffer: glow::NativeBuffer,
    vertex_array: glow::NativeVertexArray,
}

impl GlowDevice {
    pub fn new(gl: glow::Context) -> Self {
        let (quad_buffer, vertex_array) = unsafe {
            let vertex_array = gl
                .create_vertex_array()
                .expect("failed to create the quad vertex array");
            let quad_buffer = gl
                .create_buffer()
                .expect("failed to create the quad vertex buffer");

            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(quad_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );

            (quad_buffer, vertex_array)
        };

        Self {
            gl,
            quad_buffer,
            vertex_array,
        }
    }
}

fn compile_stage(
    gl: &glow::Context,
    stage: BuildStage,
    shader_type: u32,
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<glow::NativeShader, BuildError> {
    unsafe {
        let shader = gl
            .create_shader(shader_type)
            .map_err(|log| BuildError::Failed { stage, log })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        let info_log = gl.get_shader_info_log(shader);
        let info_log = info_log.trim();

        if !gl.get_shader_compile_status(shader) {
            let log = info_log.to_string();
            gl.delete_shader(shader);
            return Err(BuildError::Failed { stage, log });
        }

        if !info_log.is_empty() {
            diagnostics.push(Diagnostic {
                stage,
                message: info_log.to_string(),
            });
        }

        Ok(shader)
    }
}

impl GraphicsDevicePort for GlowDevice {
    type Program = GlowProgram;

    fn build_program(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramBuild<GlowProgram>, BuildError> {
        let gl = &self.gl;
        let mut diagnostics = Vec::new();

        let vertex = compile_stage(
            gl,
            BuildStage::Vertex,
            glow::VERTEX_SHADER,
            vertex_source,
            &mut diagnostics,
        )?;

        let fragment = match compile_stage(
            gl,
            BuildStage::Fragment,
            glow::FRAGMENT_SHADER,
            fragment_source,
            &mut diagnostics,
        ) {
            Ok(fragment) => fragment,
            Err(error) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(error);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(log) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(BuildError::Failed {
                        stage: BuildStage::Link,
                        log,
                    });
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            let info_log = gl.get_program_info_log(program);
            let info_log = info_log.trim();

            if !gl.get_program_link_status(program) {
                let log = info_log.to_string();
                gl.delete_program(program);
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(BuildError::Failed {
                    stage: BuildStage::Link,
                    log,
                });
            }

            if !info_log.is_empty() {
                diagnostics.push(Diagnostic {
                    stage: BuildStage::Link,
                    message: info_log.to_string(),
                });
            }

            gl.use_program(Some(program));

            Ok(ProgramBuild {
                program: GlowProgram {
                    program,
                    vertex,
                    fragment,
                },
                diagnostics,
            })
        }
    }

    fn destroy_program(&mut self, program: GlowProgram) {
        unsafe {
            self.gl.delete_program(program.program);
            self.gl.delete_shader(program.vertex);
            self.gl.delete_shader(program.fragment);
        }
    }

    fn set_uniform(
        &mut self,
        program: &GlowProgram,
        name: &str,
        value: UniformValue,
    ) -> Result<(), UniformError> {
        unsafe {
            let gl = &self.gl;

            let Some(location) = gl.get_uniform_location(program.program, name) else {
                return Err(UniformError::UnknownUniform {
                    name: name.to_string(),
                });
            };

            gl.use_program(Some(program.program));

            match value {
                UniformValue::Float(v) => gl.uniform_1_f32(Some(&location), v),
                UniformValue::Int(v) => gl.uniform_1_i32(Some(&location), v),
                UniformValue::Vec2([x, y]) => gl.uniform_2_f32(Some(&location), x, y),
                UniformValue::Vec4([x, y, z, w]) => gl.uniform_4_f32(Some(&location), x, y, z, w),
            }

            Ok(())
        }
    }

    fn set_viewport(&mut self, dimensions: Dimensions) {
        unsafe {
            self.gl
                .viewport(0, 0, dimensions.width() as i32, dimensions.height() as i32);
        }
    }

    fn draw_quad(&mut self, program: &GlowProgram) {
        unsafe {
            let gl = &self.gl;

            gl.use_program(Some(program.program));
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.quad_buffer));

            if let Some(location) = gl.get_attrib_location(program.program, "vertexPosition") {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(location, 3, glow::FLOAT, false, 0, 0);
            }

            gl.draw_arrays(glow::TRIANGLE_FAN, 0, 4);
        }
    }
}

impl Drop for GlowDevice {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.quad_buffer);
            self.gl.delete_vertex_array(self.vertex_array);
        }
    }
}
