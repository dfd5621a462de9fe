use crate::core::data::complex::Complex;
use crate::core::data::polynomial::Polynomial;
use crate::core::data::root_set::RootSet;
use std::f64::consts::{PI, TAU};

const CONVERGENCE_TOLERANCE: f64 = 1e-10;
const MAX_SWEEPS: usize = 200;

/// Finds all roots of a polynomial numerically with the Durand–Kerner
/// simultaneous iteration.
///
/// Degree 0 yields no roots; degree 1 is solved in closed form. For
/// higher degrees the candidates start on a circle sized from the
/// coefficient magnitudes and are refined together until the largest
/// per-root update falls below tolerance or the sweep cap is reached.
/// Non-convergence degrades accuracy rather than failing: the best
/// candidates reached are returned as-is.
///
/// The seeding is deterministic, so root order is stable run-to-run for
/// a fixed polynomial. Which index lands on which mathematical root is
/// not stable under tiny coefficient perturbations.
pub fn solve_roots(polynomial: &Polynomial) -> RootSet {
    let leading = polynomial.leading_coefficient();
    let coefficients = polynomial.coefficients();

    match polynomial.degree() {
        0 => RootSet::new(vec![], leading),
        1 => RootSet::new(vec![-coefficients[0] / coefficients[1]], leading),
        _ => durand_kerner(polynomial),
    }
}

fn durand_kerner(polynomial: &Polynomial) -> RootSet {
    let leading = polynomial.leading_coefficient();
    let mut candidates = initial_candidates(polynomial);

    for _ in 0..MAX_SWEEPS {
        let mut largest_update = 0.0_f64;

        for i in 0..candidates.len() {
            let mut denominator = leading;

            for j in 0..candidates.len() {
                if j != i {
                    denominator = denominator * (candidates[i] - candidates[j]);
                }
            }

            // Coinciding candidates would divide by zero; skip them for
            // this sweep and let the others separate first.
            if denominator.magnitude_squared() == 0.0 {
                continue;
            }

            let update = polynomial.evaluate(candidates[i]) / denominator;
            candidates[i] = candidates[i] - update;
            largest_update = largest_update.max(update.magnitude());
        }

        if largest_update < CONVERGENCE_TOLERANCE {
            break;
        }
    }

    RootSet::new(candidates, leading)
}

/// Candidates are spread on a circle of radius `1 + max|c_i / c_n|`,
/// phase-shifted so none starts on a coordinate axis.
fn initial_candidates(polynomial: &Polynomial) -> Vec<Complex> {
    let degree = polynomial.degree();
    let leading_magnitude = polynomial.leading_coefficient().magnitude();

    let largest_ratio = polynomial.coefficients()[..degree]
        .iter()
        .map(|coefficient| coefficient.magnitude() / leading_magnitude)
        .fold(0.0_f64, f64::max);
    let radius = 1.0 + largest_ratio;

    (0..degree)
        .map(|k| {
            let angle = TAU * k as f64 / degree as f64 + PI / (2.0 * degree as f64);
            Complex::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
