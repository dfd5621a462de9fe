use crate::core::data::complex::Complex;

/// The factored form of a polynomial: leading coefficient times the
/// product of `(z - root_i)`. This is the shape the shader generator
/// consumes; evaluating the factor product per pixel is cheaper and more
/// stable near large magnitudes than a coefficient-power sum.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSet {
    roots: Vec<Complex>,
    leading_coefficient: Complex,
}

impl RootSet {
    #[must_use]
    pub fn new(roots: Vec<Complex>, leading_coefficient: Complex) -> Self {
        Self {
            roots,
            leading_coefficient,
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    #[must_use]
    pub fn leading_coefficient(&self) -> Complex {
        self.leading_coefficient
    }

    /// Count of uploaded coefficients in live mode: the leading
    /// coefficient plus one entry per root.
    #[must_use]
    pub fn coefficient_count(&self) -> usize {
        self.roots.len() + 1
    }

    #[must_use]
    pub fn evaluate(&self, z: Complex) -> Complex {
        self.roots
            .iter()
            .fold(self.leading_coefficient, |product, root| {
                product * (z - *root)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_root_set_evaluates_to_leading_coefficient() {
        let set = RootSet::new(vec![], Complex::new(2.0, -1.0));

        assert_eq!(set.evaluate(Complex::new(5.0, 5.0)), Complex::new(2.0, -1.0));
        assert_eq!(set.coefficient_count(), 1);
    }

    #[test]
    fn evaluate_is_zero_at_each_root() {
        let roots = vec![Complex::new(1.0, 0.0), Complex::new(-0.5, 2.0)];
        let set = RootSet::new(roots.clone(), Complex::new(3.0, 0.0));

        for root in roots {
            assert_eq!(set.evaluate(root), Complex::ZERO);
        }
    }

    #[test]
    fn evaluate_matches_expanded_polynomial() {
        // 2(z - 1)(z + 1) = 2z^2 - 2
        let set = RootSet::new(
            vec![Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)],
            Complex::new(2.0, 0.0),
        );
        let z = Complex::new(3.0, 0.0);

        assert_eq!(set.evaluate(z), Complex::new(16.0, 0.0));
    }
}
