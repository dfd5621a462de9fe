use crate::controllers::fractal::data::fractal_params::ParamsError;
use crate::controllers::fractal::ports::graphics_device::BuildError;
use crate::controllers::fractal::program::ProgramError;
use crate::core::actions::generate_shader::MAX_POLYNOMIAL_COEFFICIENTS;
use crate::core::actions::parse_polynomial::ParseError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    Parse(ParseError),
    Params(ParamsError),
    Build(BuildError),
    Program(ProgramError),
    /// A live-mode polynomial would overflow the shader's uniform
    /// arrays. Baked polynomials have no such cap.
    TooManyCoefficients { coefficient_count: usize },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Params(error) => error.fmt(f),
            Self::Build(error) => error.fmt(f),
            Self::Program(error) => error.fmt(f),
            Self::TooManyCoefficients { coefficient_count } => {
                write!(
                    f,
                    "polynomial needs {} coefficients but live uploads are capped at {}",
                    coefficient_count, MAX_POLYNOMIAL_COEFFICIENTS
                )
            }
        }
    }
}

impl Error for FractalError {}
