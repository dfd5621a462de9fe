pub mod fragment_shader;
pub mod recipe;
pub mod vertex_shader;

pub use fragment_shader::{MAX_POLYNOMIAL_COEFFICIENTS, fragment_shader};
pub use recipe::ShaderRecipe;
pub use vertex_shader::vertex_shader;
