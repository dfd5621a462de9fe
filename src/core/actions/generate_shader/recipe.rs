use crate::core::actions::solve_roots::solve_roots;
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::polynomial::Polynomial;
use crate::core::data::root_set::RootSet;
use crate::core::data::shading::ShadingKind;

/// Everything baked into a generated fragment shader. Two recipes with
/// equal fields produce identical source text; regeneration is required
/// exactly when one of these inputs changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderRecipe {
    pub poly: RootSet,
    pub derv: RootSet,
    pub bake_roots: bool,
    pub shading: ShadingKind,
    pub anti_aliasing: AntiAliasing,
    pub iterations: u32,
    pub threshold: f32,
}

impl ShaderRecipe {
    /// Factors the polynomial and its derivative into the root sets the
    /// kernel evaluates per pixel.
    #[must_use]
    pub fn for_polynomial(
        polynomial: &Polynomial,
        bake_roots: bool,
        shading: ShadingKind,
        anti_aliasing: AntiAliasing,
        iterations: u32,
        threshold: f32,
    ) -> Self {
        Self {
            poly: solve_roots(polynomial),
            derv: solve_roots(&polynomial.derivative()),
            bake_roots,
            shading,
            anti_aliasing,
            iterations,
            threshold,
        }
    }
}
