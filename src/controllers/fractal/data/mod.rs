pub mod change;
pub mod fractal_params;
