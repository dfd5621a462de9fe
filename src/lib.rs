#[cfg(feature = "gl")]
mod adapters;
mod controllers;
mod core;

pub use controllers::fractal::ports::graphics_device::{
    BuildError, BuildStage, Diagnostic, GraphicsDevicePort, ProgramBuild, UniformError,
    UniformValue,
};
pub use controllers::fractal::{
    DEFAULT_POLYNOMIAL, FractalChange, FractalController, FractalError, FractalParams,
    ParamsError, ProgramError, ProgramManager, UpdateKind,
};
pub use self::core::actions::generate_shader::{
    MAX_POLYNOMIAL_COEFFICIENTS, ShaderRecipe, fragment_shader, vertex_shader,
};
pub use self::core::actions::parse_polynomial::{MAX_EXPONENT, ParseError, parse_polynomial};
pub use self::core::actions::solve_roots::solve_roots;
pub use self::core::data::anti_aliasing::AntiAliasing;
pub use self::core::data::colour::Colour;
pub use self::core::data::complex::Complex;
pub use self::core::data::dimensions::{Dimensions, DimensionsError};
pub use self::core::data::polynomial::Polynomial;
pub use self::core::data::root_set::RootSet;
pub use self::core::data::shading::ShadingKind;

#[cfg(feature = "gl")]
pub use adapters::glow_device::{GlowDevice, GlowProgram};
