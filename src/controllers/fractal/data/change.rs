use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::polynomial::Polynomial;
use crate::core::data::shading::ShadingKind;

/// A single mutation of one logical fractal field.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalChange {
    Zoom(f32),
    Offset(f32, f32),
    Dimensions(Dimensions),
    Iterations(u32),
    Threshold(f32),
    Palette(Colour),
    IterationCoefficient(Complex),
    AdditiveCoefficient(Complex),
    Intensity(f32),
    BakeRoots(bool),
    Shading(ShadingKind),
    AntiAliasing(AntiAliasing),
    Polynomial(Polynomial),
}

/// How a change reaches the GPU: a `Live` change pushes uniforms into
/// the active program, a `Baked` change regenerates the shader text and
/// relinks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    Live,
    Baked,
}

impl FractalChange {
    /// The declarative baked/live table. The polynomial is the one field
    /// whose classification depends on state: with the bake flag set its
    /// roots live in the shader text, otherwise they travel as uniform
    /// arrays. Toggling the bake flag itself is always baked — the kernel
    /// text differs structurally even when the polynomial is unchanged.
    #[must_use]
    pub fn update_kind(&self, bake_roots_active: bool) -> UpdateKind {
        match self {
            Self::Zoom(_)
            | Self::Offset(..)
            | Self::Dimensions(_)
            | Self::Palette(_)
            | Self::IterationCoefficient(_)
            | Self::AdditiveCoefficient(_)
            | Self::Intensity(_) => UpdateKind::Live,
            Self::Iterations(_)
            | Self::Threshold(_)
            | Self::BakeRoots(_)
            | Self::Shading(_)
            | Self::AntiAliasing(_) => UpdateKind::Baked,
            Self::Polynomial(_) => {
                if bake_roots_active {
                    UpdateKind::Baked
                } else {
                    UpdateKind::Live
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_changes() -> Vec<FractalChange> {
        vec![
            FractalChange::Zoom(1.0),
            FractalChange::Offset(0.1, 0.2),
            FractalChange::Dimensions(Dimensions::new(640, 480).unwrap()),
            FractalChange::Palette(Colour::WHITE),
            FractalChange::IterationCoefficient(Complex::ONE),
            FractalChange::AdditiveCoefficient(Complex::ZERO),
            FractalChange::Intensity(2.0),
        ]
    }

    fn baked_changes() -> Vec<FractalChange> {
        vec![
            FractalChange::Iterations(64),
            FractalChange::Threshold(1.0),
            FractalChange::BakeRoots(true),
            FractalChange::BakeRoots(false),
            FractalChange::Shading(ShadingKind::Flat),
            FractalChange::AntiAliasing(AntiAliasing::X9),
        ]
    }

    #[test]
    fn live_fields_never_force_a_rebuild() {
        for change in live_changes() {
            assert_eq!(change.update_kind(true), UpdateKind::Live, "{:?}", change);
            assert_eq!(change.update_kind(false), UpdateKind::Live, "{:?}", change);
        }
    }

    #[test]
    fn baked_fields_always_force_a_rebuild() {
        for change in baked_changes() {
            assert_eq!(change.update_kind(true), UpdateKind::Baked, "{:?}", change);
            assert_eq!(change.update_kind(false), UpdateKind::Baked, "{:?}", change);
        }
    }

    #[test]
    fn polynomial_classification_follows_the_bake_flag() {
        let change = FractalChange::Polynomial(Polynomial::variable());

        assert_eq!(change.update_kind(true), UpdateKind::Baked);
        assert_eq!(change.update_kind(false), UpdateKind::Live);
    }
}
