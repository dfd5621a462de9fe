pub mod fractal;
