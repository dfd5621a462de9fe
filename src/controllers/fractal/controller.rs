use crate::controllers::fractal::data::change::{FractalChange, UpdateKind};
use crate::controllers::fractal::data::fractal_params::FractalParams;
use crate::controllers::fractal::errors::fractal::FractalError;
use crate::controllers::fractal::ports::graphics_device::{GraphicsDevicePort, UniformValue};
use crate::controllers::fractal::program::ProgramManager;
use crate::core::actions::generate_shader::{
    MAX_POLYNOMIAL_COEFFICIENTS, ShaderRecipe, fragment_shader, vertex_shader,
};
use crate::core::actions::parse_polynomial::parse_polynomial;
use crate::core::actions::solve_roots::solve_roots;
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::polynomial::Polynomial;
use crate::core::data::root_set::RootSet;
use crate::core::data::shading::ShadingKind;
use std::collections::HashMap;

/// The stateful façade over the rendering core.
///
/// Owns the current parameter values and the compiled program. Every
/// mutation goes through `apply`, which classifies the change as baked
/// (regenerate, recompile, relink, re-push) or live (push the affected
/// uniforms) and completes before returning. Construction builds the
/// first program eagerly, so a controller is always drawable.
pub struct FractalController<G: GraphicsDevicePort> {
    params: FractalParams,
    program: ProgramManager<G>,
}

impl<G: GraphicsDevicePort> FractalController<G> {
    pub fn new(device: G) -> Result<Self, FractalError> {
        Self::with_params(device, FractalParams::default())
    }

    pub fn with_params(device: G, params: FractalParams) -> Result<Self, FractalError> {
        let mut controller = Self {
            params,
            program: ProgramManager::new(device),
        };

        controller.rebuild()?;
        Ok(controller)
    }

    /// The single mutation entry point. On a failed rebuild the stored
    /// parameters roll back to the previous state, so the table always
    /// describes the program that is actually active.
    pub fn apply(&mut self, change: FractalChange) -> Result<(), FractalError> {
        self.check_live_capacity(&change)?;

        let kind = change.update_kind(self.params.bake_roots());
        let previous = self.params.clone();
        self.store(&change)?;

        match kind {
            UpdateKind::Baked => {
                if let Err(error) = self.rebuild() {
                    self.params = previous;
                    return Err(error);
                }

                Ok(())
            }
            UpdateKind::Live => self.push_change(&change),
        }
    }

    /// Issues the full-viewport quad draw.
    pub fn draw(&mut self) -> Result<(), FractalError> {
        self.program.draw().map_err(FractalError::Program)
    }

    /// Multiplies the zoom by `1.1^(-amount)`; a live update.
    pub fn zoom_in(&mut self, amount: f32) -> Result<(), FractalError> {
        let zoom = self.params.zoom() * 1.1_f32.powf(-amount);
        self.apply(FractalChange::Zoom(zoom))
    }

    /// Shifts the offset by `(dx, dy)` scaled by the current zoom; a
    /// live update.
    pub fn pan(&mut self, dx: f32, dy: f32) -> Result<(), FractalError> {
        let (x, y) = self.params.offset();
        let zoom = self.params.zoom();
        self.apply(FractalChange::Offset(x + dx * zoom, y + dy * zoom))
    }

    /// Parses and installs a new polynomial. A parse failure leaves the
    /// current polynomial untouched.
    pub fn set_polynomial_expression(
        &mut self,
        expression: &str,
        bindings: &HashMap<String, f64>,
    ) -> Result<(), FractalError> {
        let polynomial = parse_polynomial(expression, bindings).map_err(FractalError::Parse)?;
        self.apply(FractalChange::Polynomial(polynomial))
    }

    #[must_use]
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.params.zoom()
    }

    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), FractalError> {
        self.apply(FractalChange::Zoom(zoom))
    }

    #[must_use]
    pub fn offset(&self) -> (f32, f32) {
        self.params.offset()
    }

    pub fn set_offset(&mut self, x: f32, y: f32) -> Result<(), FractalError> {
        self.apply(FractalChange::Offset(x, y))
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.params.dimensions()
    }

    pub fn set_dimensions(&mut self, dimensions: Dimensions) -> Result<(), FractalError> {
        self.apply(FractalChange::Dimensions(dimensions))
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.params.iterations()
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Result<(), FractalError> {
        self.apply(FractalChange::Iterations(iterations))
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.params.threshold()
    }

    pub fn set_threshold(&mut self, threshold: f32) -> Result<(), FractalError> {
        self.apply(FractalChange::Threshold(threshold))
    }

    #[must_use]
    pub fn palette(&self) -> Colour {
        self.params.palette()
    }

    pub fn set_palette(&mut self, palette: Colour) -> Result<(), FractalError> {
        self.apply(FractalChange::Palette(palette))
    }

    #[must_use]
    pub fn iteration_coefficient(&self) -> Complex {
        self.params.iteration_coefficient()
    }

    pub fn set_iteration_coefficient(&mut self, coefficient: Complex) -> Result<(), FractalError> {
        self.apply(FractalChange::IterationCoefficient(coefficient))
    }

    #[must_use]
    pub fn additive_coefficient(&self) -> Complex {
        self.params.additive_coefficient()
    }

    pub fn set_additive_coefficient(&mut self, coefficient: Complex) -> Result<(), FractalError> {
        self.apply(FractalChange::AdditiveCoefficient(coefficient))
    }

    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.params.intensity()
    }

    pub fn set_intensity(&mut self, intensity: f32) -> Result<(), FractalError> {
        self.apply(FractalChange::Intensity(intensity))
    }

    #[must_use]
    pub fn bake_roots(&self) -> bool {
        self.params.bake_roots()
    }

    pub fn set_bake_roots(&mut self, bake_roots: bool) -> Result<(), FractalError> {
        self.apply(FractalChange::BakeRoots(bake_roots))
    }

    #[must_use]
    pub fn shading(&self) -> ShadingKind {
        self.params.shading()
    }

    pub fn set_shading(&mut self, shading: ShadingKind) -> Result<(), FractalError> {
        self.apply(FractalChange::Shading(shading))
    }

    #[must_use]
    pub fn anti_aliasing(&self) -> AntiAliasing {
        self.params.anti_aliasing()
    }

    pub fn set_anti_aliasing(&mut self, anti_aliasing: AntiAliasing) -> Result<(), FractalError> {
        self.apply(FractalChange::AntiAliasing(anti_aliasing))
    }

    #[must_use]
    pub fn polynomial(&self) -> &Polynomial {
        self.params.polynomial()
    }

    pub fn set_polynomial(&mut self, polynomial: Polynomial) -> Result<(), FractalError> {
        self.apply(FractalChange::Polynomial(polynomial))
    }

    /// Rejects changes that would leave a live-mode polynomial too big
    /// for the shader's uniform arrays, before any state is touched.
    fn check_live_capacity(&self, change: &FractalChange) -> Result<(), FractalError> {
        let (bake_roots, polynomial) = match change {
            FractalChange::Polynomial(polynomial) => (self.params.bake_roots(), polynomial),
            FractalChange::BakeRoots(bake_roots) => (*bake_roots, self.params.polynomial()),
            _ => return Ok(()),
        };

        let coefficient_count = polynomial.coefficients().len();

        if !bake_roots && coefficient_count > MAX_POLYNOMIAL_COEFFICIENTS {
            return Err(FractalError::TooManyCoefficients { coefficient_count });
        }

        Ok(())
    }

    fn store(&mut self, change: &FractalChange) -> Result<(), FractalError> {
        match change {
            FractalChange::Zoom(zoom) => {
                self.params.set_zoom(*zoom).map_err(FractalError::Params)
            }
            FractalChange::Offset(x, y) => {
                self.params.set_offset(*x, *y);
                Ok(())
            }
            FractalChange::Dimensions(dimensions) => {
                self.params.set_dimensions(*dimensions);
                Ok(())
            }
            FractalChange::Iterations(iterations) => self
                .params
                .set_iterations(*iterations)
                .map_err(FractalError::Params),
            FractalChange::Threshold(threshold) => self
                .params
                .set_threshold(*threshold)
                .map_err(FractalError::Params),
            FractalChange::Palette(palette) => {
                self.params.set_palette(*palette);
                Ok(())
            }
            FractalChange::IterationCoefficient(coefficient) => {
                self.params.set_iteration_coefficient(*coefficient);
                Ok(())
            }
            FractalChange::AdditiveCoefficient(coefficient) => {
                self.params.set_additive_coefficient(*coefficient);
                Ok(())
            }
            FractalChange::Intensity(intensity) => {
                self.params.set_intensity(*intensity);
                Ok(())
            }
            FractalChange::BakeRoots(bake_roots) => {
                self.params.set_bake_roots(*bake_roots);
                Ok(())
            }
            FractalChange::Shading(shading) => {
                self.params.set_shading(*shading);
                Ok(())
            }
            FractalChange::AntiAliasing(anti_aliasing) => {
                self.params.set_anti_aliasing(*anti_aliasing);
                Ok(())
            }
            FractalChange::Polynomial(polynomial) => {
                self.params.set_polynomial(polynomial.clone());
                Ok(())
            }
        }
    }

    /// Regenerates both stages from the stored parameters, swaps the
    /// program on success, and re-pushes every live value into the fresh
    /// program.
    fn rebuild(&mut self) -> Result<(), FractalError> {
        let recipe = ShaderRecipe::for_polynomial(
            self.params.polynomial(),
            self.params.bake_roots(),
            self.params.shading(),
            self.params.anti_aliasing(),
            self.params.iterations(),
            self.params.threshold(),
        );

        let vertex = vertex_shader();
        let fragment = fragment_shader(&recipe);

        self.program
            .rebuild(&vertex, &fragment)
            .map_err(FractalError::Build)?;

        self.push_shader_variables()
    }

    /// A fresh program starts with undefined uniforms, so every live
    /// value is pushed after each rebuild.
    fn push_shader_variables(&mut self) -> Result<(), FractalError> {
        self.push_viewport()?;
        self.push_zoom()?;
        self.push_offset()?;
        self.push_palette()?;
        self.push_iteration_coefficient()?;
        self.push_additive_coefficient()?;
        self.push_intensity()?;

        if !self.params.bake_roots() {
            self.upload_polynomial()?;
        }

        Ok(())
    }

    /// Pushes the uniforms affected by a live change. Baked fields have
    /// no uniforms; the rebuild path covers them.
    fn push_change(&mut self, change: &FractalChange) -> Result<(), FractalError> {
        match change {
            FractalChange::Zoom(_) => self.push_zoom(),
            FractalChange::Offset(..) => self.push_offset(),
            FractalChange::Dimensions(_) => self.push_viewport(),
            FractalChange::Palette(_) => self.push_palette(),
            FractalChange::IterationCoefficient(_) => self.push_iteration_coefficient(),
            FractalChange::AdditiveCoefficient(_) => self.push_additive_coefficient(),
            FractalChange::Intensity(_) => self.push_intensity(),
            FractalChange::Polynomial(_) => self.upload_polynomial(),
            FractalChange::Iterations(_)
            | FractalChange::Threshold(_)
            | FractalChange::BakeRoots(_)
            | FractalChange::Shading(_)
            | FractalChange::AntiAliasing(_) => Ok(()),
        }
    }

    fn push_uniform(&mut self, name: &str, value: UniformValue) -> Result<(), FractalError> {
        self.program
            .set_uniform(name, value)
            .map_err(FractalError::Program)
    }

    fn push_viewport(&mut self) -> Result<(), FractalError> {
        let dimensions = self.params.dimensions();
        self.program.set_viewport(dimensions);
        self.push_uniform(
            "dims",
            UniformValue::Vec2([dimensions.width() as f32, dimensions.height() as f32]),
        )
    }

    fn push_zoom(&mut self) -> Result<(), FractalError> {
        self.push_uniform("zoom", UniformValue::Float(self.params.zoom()))
    }

    fn push_offset(&mut self) -> Result<(), FractalError> {
        let (x, y) = self.params.offset();
        self.push_uniform("offset", UniformValue::Vec2([x, y]))
    }

    fn push_palette(&mut self) -> Result<(), FractalError> {
        self.push_uniform(
            "palette",
            UniformValue::Vec4(self.params.palette().components()),
        )
    }

    fn push_iteration_coefficient(&mut self) -> Result<(), FractalError> {
        let value = complex_uniform(self.params.iteration_coefficient());
        self.push_uniform("aCoeff", value)
    }

    fn push_additive_coefficient(&mut self) -> Result<(), FractalError> {
        let value = complex_uniform(self.params.additive_coefficient());
        self.push_uniform("kCoeff", value)
    }

    /// Live mode: the factored polynomial and its derivative travel as
    /// uniform arrays, one element per coefficient slot.
    fn upload_polynomial(&mut self) -> Result<(), FractalError> {
        let poly = solve_roots(self.params.polynomial());
        let derv = solve_roots(&self.params.polynomial().derivative());

        self.upload_root_set("poly", &poly)?;
        self.upload_root_set("derv", &derv)
    }

    fn upload_root_set(&mut self, name: &str, set: &RootSet) -> Result<(), FractalError> {
        self.push_uniform(
            &format!("{name}CoeffCount"),
            UniformValue::Int(set.coefficient_count() as i32),
        )?;
        self.push_uniform(
            &format!("{name}Coeffs[0]"),
            complex_uniform(set.leading_coefficient()),
        )?;

        for (index, &root) in set.roots().iter().enumerate() {
            self.push_uniform(&format!("{name}Coeffs[{}]", index + 1), complex_uniform(root))?;
        }

        Ok(())
    }

    fn push_intensity(&mut self) -> Result<(), FractalError> {
        self.push_uniform("intensity", UniformValue::Float(self.params.intensity()))
    }
}

fn complex_uniform(value: Complex) -> UniformValue {
    UniformValue::Vec2([value.real as f32, value.imag as f32])
}
