use crate::core::actions::generate_shader::recipe::ShaderRecipe;
use crate::core::data::anti_aliasing::AntiAliasing;
use crate::core::data::complex::Complex;
use crate::core::data::root_set::RootSet;
use crate::core::data::shading::ShadingKind;

/// Capacity of the `polyCoeffs`/`dervCoeffs` uniform arrays when roots
/// are uploaded live instead of baked as literals. GLSL uniform arrays
/// need a static size, so live-mode polynomials must fit this many
/// coefficients (leading coefficient plus roots).
pub const MAX_POLYNOMIAL_COEFFICIENTS: usize = 16;

/// Generates the per-pixel fragment kernel for a recipe. Pure function
/// of the recipe; equal recipes yield identical text.
#[must_use]
pub fn fragment_shader(recipe: &ShaderRecipe) -> String {
    let sections = [
        "#version 130\n".to_string(),
        arithmetic_functions(),
        polynomial_function("poly", &recipe.poly, recipe.bake_roots),
        polynomial_function("derv", &recipe.derv, recipe.bake_roots),
        iterate_function(recipe.iterations),
        colorize_function(Some(recipe.shading)),
        shade_function(recipe.iterations, recipe.threshold),
        main_sampler(recipe.anti_aliasing),
    ];

    let source = sections.join("\n");
    log::trace!("generated fragment shader:\n{source}");
    source
}

// Complex arithmetic on vec2; addition and subtraction are built-in.
fn arithmetic_functions() -> String {
    "\
float csqrabs(vec2 p)
{
    return dot(p, p);
}

float cabs(vec2 p)
{
    return sqrt(csqrabs(p));
}

vec2 cmul(vec2 p, vec2 q)
{
    return vec2(p.x * q.x - p.y * q.y, p.y * q.x + p.x * q.y);
}

vec2 cdiv(vec2 p, vec2 q)
{
    return vec2(p.x * q.x + p.y * q.y, p.y * q.x - p.x * q.y) / csqrabs(q);
}
"
    .to_string()
}

/// Emits `poly(z)` or `derv(z)` evaluating the factored root form:
/// start from the leading coefficient and multiply by `(z - root)` per
/// root. Baked mode embeds the roots as literals; live mode reads them
/// from a uniform array so edits skip recompilation.
fn polynomial_function(name: &str, roots: &RootSet, bake_roots: bool) -> String {
    if !bake_roots {
        return format!(
            "\
uniform int {name}CoeffCount;
uniform vec2 {name}Coeffs[{MAX_POLYNOMIAL_COEFFICIENTS}];

vec2 {name}(vec2 z)
{{
    vec2 r = {name}Coeffs[0];

    for (int t = 1; t < {name}CoeffCount; ++t)
        r = cmul(r, z - {name}Coeffs[t]);

    return r;
}}
"
        );
    }

    let mut source = format!(
        "vec2 {name}(vec2 z)\n{{\n    vec2 r = {};\n",
        vec2_literal(roots.leading_coefficient())
    );

    for &root in roots.roots() {
        source.push_str(&format!("    r = cmul(r, z - {});\n", vec2_literal(root)));
    }

    source.push_str("    return r;\n}\n");
    source
}

/// The generalized Newton iteration `z ← z - a·poly(z)/derv(z) - k`.
/// The iteration cap is baked as the loop bound; the convergence epsilon
/// is a fixed constant, independent of the user-facing threshold.
fn iterate_function(iterations: u32) -> String {
    format!(
        "\
uniform vec2 aCoeff;
uniform vec2 kCoeff;

vec2 iterate(vec2 z, out float speed, out int t)
{{
    speed = 0.0;

    for (t = 0; t < {iterations}; ++t)
    {{
        vec2 r = z;
        z -= cmul(cdiv(poly(z), derv(z)), aCoeff) + kCoeff;
        float l = csqrabs(r - z);
        speed += exp(-inversesqrt(l));
        if (l < 1e-8) break;
    }}

    return z;
}}
"
    )
}

/// `None` marks a generator/state mismatch; the diagnostic constant
/// makes that visible on screen instead of shading subtly wrong.
fn colorize_function(shading: Option<ShadingKind>) -> String {
    let body = match shading {
        Some(ShadingKind::Standard) => {
            "    if (isnan(speed)) return vec3(1.0);
    speed *= speed * 0.05;
    vec3 retval = (sin(vec3(r.x) * palette.xyz) + sin(vec3(r.y) * palette.xyz) + 2.0) * speed;
    return retval / (retval + vec3(1.0));
"
        }
        Some(ShadingKind::Negative) => {
            "    if (speed == 0.0) return vec3(1.0);
    if (isnan(speed)) return vec3(0.0);
    vec3 retval = (sin(vec3(r.x) * palette.xyz) + sin(vec3(r.y) * palette.xyz) + 2.0) / speed;
    return retval / (retval + vec3(1.0));
"
        }
        Some(ShadingKind::Flat) => {
            "    return (sin(vec3(r.x) * palette.xyz) + sin(vec3(r.y) * palette.xyz) + 2.0) * t * 2.0;
"
        }
        None => "    return vec3(0.87, 0.0, 1.0);\n",
    };

    format!(
        "\
uniform vec4 palette;

vec3 colorize(vec2 z, vec2 r, float speed, float t)
{{
{body}}}
"
    )
}

/// Combines iteration and colorization: intensity exponentiates the
/// speed metric and scales the normalized iteration count; the threshold
/// shapes intensity only.
fn shade_function(iterations: u32, threshold: f32) -> String {
    format!(
        "\
uniform float intensity;

vec3 shade(vec2 z)
{{
    int t;
    float speed;
    vec2 r = iterate(z, speed, t);
    return colorize(z, r, pow(speed, intensity) / {threshold:?}, float(t) * intensity / {iterations}.0);
}}
"
    )
}

/// Maps `uv` to the complex plane (aspect-corrected by `dims`) and
/// averages `shade` over the supersampling grid.
fn main_sampler(anti_aliasing: AntiAliasing) -> String {
    let mut source = String::from(
        "\
uniform vec2 offset;
uniform float zoom;
uniform vec2 dims;
in vec2 uv;

vec3 plot_fractal(vec2 z)
{
",
    );

    let grid_size = anti_aliasing.grid_size();

    if grid_size == 1 {
        source.push_str("    return shade(z);\n");
    } else {
        source.push_str("    vec2 d = vec2(zoom) / dims;\n");
        source.push_str("    vec3 shading = vec3(0.0);\n\n");

        for y in 0..grid_size {
            for x in 0..grid_size {
                let dx = (f64::from(x) / f64::from(grid_size - 1) - 0.5) / 2.0;
                let dy = (f64::from(y) / f64::from(grid_size - 1) - 0.5) / 2.0;
                source.push_str(&format!(
                    "    shading += shade(z + vec2({dx:?}, {dy:?}) * d);\n"
                ));
            }
        }

        source.push_str(&format!(
            "\n    return shading / {}.0;\n",
            anti_aliasing.sample_count()
        ));
    }

    source.push_str(
        "\
}

void main(void)
{
    float ratio = dims.x / dims.y;
    vec2 z = (uv + vec2(-0.5)) * vec2(ratio, 1.0) * zoom + offset;
    gl_FragColor = vec4(plot_fractal(z), 0.0);
}
",
    );

    source
}

fn vec2_literal(value: Complex) -> String {
    format!("vec2({:?}, {:?})", value.real, value.imag)
}

#[cfg(test)]
mod tests {
    use super::*;

    // z^2 - 1 factored by hand so tests do not depend on the solver
    fn test_recipe() -> ShaderRecipe {
        ShaderRecipe {
            poly: RootSet::new(
                vec![Complex::new(1.0, 0.0), Complex::new(-1.0, 0.0)],
                Complex::ONE,
            ),
            derv: RootSet::new(vec![Complex::ZERO], Complex::new(2.0, 0.0)),
            bake_roots: true,
            shading: ShadingKind::Standard,
            anti_aliasing: AntiAliasing::X1,
            iterations: 128,
            threshold: 3.0,
        }
    }

    #[test]
    fn declares_every_live_uniform() {
        let source = fragment_shader(&test_recipe());

        for declaration in [
            "uniform vec2 offset;",
            "uniform float zoom;",
            "uniform vec2 dims;",
            "uniform vec2 aCoeff;",
            "uniform vec2 kCoeff;",
            "uniform vec4 palette;",
            "uniform float intensity;",
        ] {
            assert!(source.contains(declaration), "missing {}", declaration);
        }
    }

    #[test]
    fn baked_mode_embeds_roots_as_literals() {
        let source = fragment_shader(&test_recipe());

        assert!(source.contains("vec2 r = vec2(1.0, 0.0);"));
        assert!(source.contains("r = cmul(r, z - vec2(1.0, 0.0));"));
        assert!(source.contains("r = cmul(r, z - vec2(-1.0, 0.0));"));
        assert!(!source.contains("polyCoeffs"));
        assert!(!source.contains("dervCoeffs"));
    }

    #[test]
    fn live_mode_reads_roots_from_uniform_arrays() {
        let recipe = ShaderRecipe {
            bake_roots: false,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("uniform int polyCoeffCount;"));
        assert!(source.contains("uniform vec2 polyCoeffs[16];"));
        assert!(source.contains("uniform int dervCoeffCount;"));
        assert!(source.contains("uniform vec2 dervCoeffs[16];"));
        assert!(!source.contains("r = cmul(r, z - vec2("));
    }

    #[test]
    fn iteration_cap_is_baked_into_the_loop_bound() {
        let recipe = ShaderRecipe {
            iterations: 77,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("for (t = 0; t < 77; ++t)"));
        assert!(source.contains("float(t) * intensity / 77.0"));
    }

    #[test]
    fn threshold_shapes_intensity_but_not_convergence() {
        let recipe = ShaderRecipe {
            threshold: 5.0,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("pow(speed, intensity) / 5.0"));
        // the per-step convergence epsilon stays fixed
        assert!(source.contains("if (l < 1e-8) break;"));
    }

    #[test]
    fn anti_aliasing_levels_tap_the_expected_sample_counts() {
        let expected = [
            (AntiAliasing::X1, 1),
            (AntiAliasing::X4, 4),
            (AntiAliasing::X9, 9),
            (AntiAliasing::X16, 16),
        ];

        for (level, sample_count) in expected {
            let recipe = ShaderRecipe {
                anti_aliasing: level,
                ..test_recipe()
            };
            let source = fragment_shader(&recipe);

            assert_eq!(
                source.matches("shade(z").count(),
                sample_count,
                "wrong tap count for {}",
                level
            );
        }
    }

    #[test]
    fn supersampling_grid_offsets_are_centered() {
        let recipe = ShaderRecipe {
            anti_aliasing: AntiAliasing::X4,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("shade(z + vec2(-0.25, -0.25) * d);"));
        assert!(source.contains("shade(z + vec2(0.25, -0.25) * d);"));
        assert!(source.contains("shade(z + vec2(-0.25, 0.25) * d);"));
        assert!(source.contains("shade(z + vec2(0.25, 0.25) * d);"));
        assert!(source.contains("return shading / 4.0;"));
    }

    #[test]
    fn standard_shading_weights_by_speed() {
        let source = fragment_shader(&test_recipe());

        assert!(source.contains("speed *= speed * 0.05;"));
        assert!(source.contains("if (isnan(speed)) return vec3(1.0);"));
    }

    #[test]
    fn negative_shading_divides_by_speed() {
        let recipe = ShaderRecipe {
            shading: ShadingKind::Negative,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("if (speed == 0.0) return vec3(1.0);"));
        assert!(source.contains("if (isnan(speed)) return vec3(0.0);"));
        assert!(source.contains("+ 2.0) / speed;"));
    }

    #[test]
    fn flat_shading_ignores_speed() {
        let recipe = ShaderRecipe {
            shading: ShadingKind::Flat,
            ..test_recipe()
        };
        let source = fragment_shader(&recipe);

        assert!(source.contains("+ 2.0) * t * 2.0;"));
        assert!(!source.contains("isnan(speed)"));
    }

    #[test]
    fn mismatch_fallback_emits_the_diagnostic_constant() {
        let source = colorize_function(None);

        assert!(source.contains("return vec3(0.87, 0.0, 1.0);"));
    }

    #[test]
    fn equal_recipes_generate_identical_text() {
        assert_eq!(
            fragment_shader(&test_recipe()),
            fragment_shader(&test_recipe())
        );
    }

    #[test]
    fn aspect_ratio_corrects_the_horizontal_span() {
        let source = fragment_shader(&test_recipe());

        assert!(source.contains("float ratio = dims.x / dims.y;"));
        assert!(source.contains("vec2 z = (uv + vec2(-0.5)) * vec2(ratio, 1.0) * zoom + offset;"));
    }
}
