use crate::core::actions::parse_polynomial::parse_polynomial;
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::polynomial::Polynomial;
use crate::core::data::shading::ShadingKind;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

pub const DEFAULT_POLYNOMIAL: &str = "z^3 - 1";

const DEFAULT_ZOOM: f32 = 2.4;
const DEFAULT_ITERATIONS: u32 = 128;
const DEFAULT_THRESHOLD: f32 = 3.0;
const DEFAULT_INTENSITY: f32 = 1.0;
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamsError {
    NonPositiveZoom { zoom: f32 },
    ZeroIterations,
    NonPositiveThreshold { threshold: f32 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be positive and finite: {}", zoom)
            }
            Self::ZeroIterations => {
                write!(f, "iteration cap must be greater than zero")
            }
            Self::NonPositiveThreshold { threshold } => {
                write!(f, "threshold must be positive and finite: {}", threshold)
            }
        }
    }
}

impl Error for ParamsError {}

/// The full parameter table of a fractal. Which field lives where — baked
/// into shader text versus pushed as a uniform — is decided by
/// `FractalChange::update_kind`, not here; this type only stores and
/// validates values.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalParams {
    zoom: f32,
    offset: (f32, f32),
    dimensions: Dimensions,
    iterations: u32,
    threshold: f32,
    palette: Colour,
    iteration_coefficient: Complex,
    additive_coefficient: Complex,
    intensity: f32,
    bake_roots: bool,
    shading: ShadingKind,
    anti_aliasing: AntiAliasing,
    polynomial: Polynomial,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: (0.0, 0.0),
            dimensions: Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default dimensions are valid"),
            iterations: DEFAULT_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
            palette: Colour::RED,
            iteration_coefficient: Complex::ONE,
            additive_coefficient: Complex::ZERO,
            intensity: DEFAULT_INTENSITY,
            bake_roots: true,
            shading: ShadingKind::Standard,
            anti_aliasing: AntiAliasing::X1,
            polynomial: parse_polynomial(DEFAULT_POLYNOMIAL, &HashMap::new())
                .expect("default polynomial parses"),
        }
    }
}

impl FractalParams {
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), ParamsError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ParamsError::NonPositiveZoom { zoom });
        }

        self.zoom = zoom;
        Ok(())
    }

    #[must_use]
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Result<(), ParamsError> {
        if iterations == 0 {
            return Err(ParamsError::ZeroIterations);
        }

        self.iterations = iterations;
        Ok(())
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) -> Result<(), ParamsError> {
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(ParamsError::NonPositiveThreshold { threshold });
        }

        self.threshold = threshold;
        Ok(())
    }

    #[must_use]
    pub fn palette(&self) -> Colour {
        self.palette
    }

    pub fn set_palette(&mut self, palette: Colour) {
        self.palette = palette;
    }

    #[must_use]
    pub fn iteration_coefficient(&self) -> Complex {
        self.iteration_coefficient
    }

    pub fn set_iteration_coefficient(&mut self, coefficient: Complex) {
        self.iteration_coefficient = coefficient;
    }

    #[must_use]
    pub fn additive_coefficient(&self) -> Complex {
        self.additive_coefficient
    }

    pub fn set_additive_coefficient(&mut self, coefficient: Complex) {
        self.additive_coefficient = coefficient;
    }

    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    #[must_use]
    pub fn bake_roots(&self) -> bool {
        self.bake_roots
    }

    pub fn set_bake_roots(&mut self, bake_roots: bool) {
        self.bake_roots = bake_roots;
    }

    #[must_use]
    pub fn shading(&self) -> ShadingKind {
        self.shading
    }

    pub fn set_shading(&mut self, shading: ShadingKind) {
        self.shading = shading;
    }

    #[must_use]
    pub fn anti_aliasing(&self) -> AntiAliasing {
        self.anti_aliasing
    }

    pub fn set_anti_aliasing(&mut self, anti_aliasing: AntiAliasing) {
        self.anti_aliasing = anti_aliasing;
    }

    #[must_use]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn set_polynomial(&mut self, polynomial: Polynomial) {
        self.polynomial = polynomial;
    }
}
