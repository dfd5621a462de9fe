use crate::core::data::dimensions::Dimensions;
use std::error::Error;
use std::fmt;

/// Which step of the build produced a diagnostic or failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildStage {
    Vertex,
    Fragment,
    Link,
}

impl BuildStage {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex shader",
            Self::Fragment => "fragment shader",
            Self::Link => "program link",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Non-empty informational text from a stage that still succeeded.
/// Reported, never treated as failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub stage: BuildStage,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    Failed { stage: BuildStage, log: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed { stage, log } => {
                write!(f, "{} failed: {}", stage, log)
            }
        }
    }
}

impl Error for BuildError {}

/// A name with no slot in the active program is a contract violation
/// (typically a stale name after regeneration), surfaced rather than
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformError {
    UnknownUniform { name: String },
}

impl fmt::Display for UniformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUniform { name } => {
                write!(f, "no uniform named '{}' in the active program", name)
            }
        }
    }
}

impl Error for UniformError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Int(i32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
}

/// A successful build: the program handle plus whatever informational
/// logs the stages produced.
#[derive(Debug)]
pub struct ProgramBuild<P> {
    pub program: P,
    pub diagnostics: Vec<Diagnostic>,
}

/// The graphics layer the fractal controller drives. Implementations
/// wrap the real graphics API (see the `gl` feature's glow adapter);
/// tests substitute a recording mock.
pub trait GraphicsDevicePort {
    type Program;

    /// Compiles and links both stages. A failure must leave no native
    /// resources behind.
    fn build_program(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ProgramBuild<Self::Program>, BuildError>;

    /// Releases the native resources of a program.
    fn destroy_program(&mut self, program: Self::Program);

    /// Pushes a value to a named slot in the given program.
    fn set_uniform(
        &mut self,
        program: &Self::Program,
        name: &str,
        value: UniformValue,
    ) -> Result<(), UniformError>;

    fn set_viewport(&mut self, dimensions: Dimensions);

    /// Issues the full-viewport quad draw with the given program.
    fn draw_quad(&mut self, program: &Self::Program);
}
