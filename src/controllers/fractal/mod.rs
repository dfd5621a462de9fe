pub mod controller;
pub mod data;
pub mod errors;
pub mod ports;
pub mod program;

pub use controller::FractalController;
pub use data::change::{FractalChange, UpdateKind};
pub use data::fractal_params::{DEFAULT_POLYNOMIAL, FractalParams, ParamsError};
pub use errors::fractal::FractalError;
pub use program::{ProgramError, ProgramManager};
