//! # Beam Bending Analysis
//!
//! Single-span beam under one of the closed-form [`LoadCase`]s, any
//! [`CrossSection`] and a library or custom [`Material`].
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |---|---|
//! | Span | m |
//! | Point load | N |
//! | Distributed load | N/m |
//! | Section dimensions | mm |
//! | E | GPa |
//! | Stresses | MPa |
//! | Moment | N·m |
//! | Deflection | mm |
//!
//! ## Order of Evaluation
//!
//! Validation runs first and stops at the first bad field (span, load,
//! section, material, deflection limit). Then: moment → shear → bending
//! stress → shear stress → deflection → L/δ → safety factor.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam::{evaluate, BeamLoad, LoadCase};
//! use calc_core::materials::{Material, MaterialGrade};
//! use calc_core::sections::CrossSection;
//!
//! let section = CrossSection::Rectangular { width_mm: 50.0, depth_mm: 100.0 };
//! let material = Material::standard(MaterialGrade::A36);
//! let load = BeamLoad { span_m: 2.0, magnitude: 1000.0 };
//!
//! let result = evaluate(LoadCase::SimplySupportedCenterPoint, &section, &material, load).unwrap();
//! assert!((result.max_moment_nm - 500.0).abs() < 1e-9);
//! println!("{}", result.substitutions.get("max_moment_nm").unwrap());
//! ```

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::equations::beam as formulas;
use crate::equations::registry::Equation;
use crate::errors::{require_positive, require_representable, CalcResult};
use crate::materials::Material;
use crate::sections::CrossSection;
use crate::substitution::{num, Substitutions};

/// Default serviceability limit, L/360
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 360.0;

fn default_deflection_limit_ratio() -> f64 {
    DEFAULT_DEFLECTION_LIMIT_RATIO
}

/// Support and loading configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadCase {
    /// Pin-roller, point load at midspan
    SimplySupportedCenterPoint,
    /// Pin-roller, uniform load over the full span
    SimplySupportedUniform,
    /// Fixed at one end, point load at the free end
    CantileverEndPoint,
    /// Fixed at one end, uniform load over the full span
    CantileverUniform,
    /// Both ends fixed, point load at midspan
    FixedFixedCenterPoint,
    /// Both ends fixed, uniform load over the full span
    FixedFixedUniform,
    /// Fixed-pinned, uniform load over the full span
    ProppedCantileverUniform,
}

/// Integer coefficients of one load case, used to print substitutions.
///
/// M = m.0/m.1 · q·Lⁿ, V = v.0/v.1 · q·Lⁿ⁻¹, δ = d.0 · q·Lⁿ⁺² / (d.1 · E·I)
/// with n = 1 for point loads and 2 for distributed loads.
struct Coefficients {
    moment: (u32, u32),
    shear: (u32, u32),
    deflection: (u32, u32),
}

impl LoadCase {
    pub const ALL: [LoadCase; 7] = [
        LoadCase::SimplySupportedCenterPoint,
        LoadCase::SimplySupportedUniform,
        LoadCase::CantileverEndPoint,
        LoadCase::CantileverUniform,
        LoadCase::FixedFixedCenterPoint,
        LoadCase::FixedFixedUniform,
        LoadCase::ProppedCantileverUniform,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LoadCase::SimplySupportedCenterPoint => "Simply supported, center point load",
            LoadCase::SimplySupportedUniform => "Simply supported, uniform load",
            LoadCase::CantileverEndPoint => "Cantilever, end point load",
            LoadCase::CantileverUniform => "Cantilever, uniform load",
            LoadCase::FixedFixedCenterPoint => "Fixed-fixed, center point load",
            LoadCase::FixedFixedUniform => "Fixed-fixed, uniform load",
            LoadCase::ProppedCantileverUniform => "Propped cantilever, uniform load",
        }
    }

    /// True when the load is a concentrated force (N) rather than a line load (N/m)
    pub fn is_point_load(&self) -> bool {
        matches!(
            self,
            LoadCase::SimplySupportedCenterPoint | LoadCase::CantileverEndPoint | LoadCase::FixedFixedCenterPoint
        )
    }

    /// Unit of the load magnitude
    pub fn load_unit(&self) -> &'static str {
        if self.is_point_load() {
            "N"
        } else {
            "N/m"
        }
    }

    /// Moment, shear and deflection equations for this case
    pub fn equations(&self) -> [Equation; 3] {
        match self {
            LoadCase::SimplySupportedCenterPoint => [
                Equation::SimplySupportedPointMoment,
                Equation::SimplySupportedPointShear,
                Equation::SimplySupportedPointDeflection,
            ],
            LoadCase::SimplySupportedUniform => [
                Equation::SimplySupportedUniformMoment,
                Equation::SimplySupportedUniformShear,
                Equation::SimplySupportedUniformDeflection,
            ],
            LoadCase::CantileverEndPoint => [
                Equation::CantileverPointMoment,
                Equation::CantileverPointShear,
                Equation::CantileverPointDeflection,
            ],
            LoadCase::CantileverUniform => [
                Equation::CantileverUniformMoment,
                Equation::CantileverUniformShear,
                Equation::CantileverUniformDeflection,
            ],
            LoadCase::FixedFixedCenterPoint => [
                Equation::FixedFixedPointMoment,
                Equation::FixedFixedPointShear,
                Equation::FixedFixedPointDeflection,
            ],
            LoadCase::FixedFixedUniform => [
                Equation::FixedFixedUniformMoment,
                Equation::FixedFixedUniformShear,
                Equation::FixedFixedUniformDeflection,
            ],
            LoadCase::ProppedCantileverUniform => [
                Equation::ProppedCantileverUniformMoment,
                Equation::ProppedCantileverUniformShear,
                Equation::ProppedCantileverUniformDeflection,
            ],
        }
    }

    /// Maximum moment. N and m give N·m; N/m and m give N·m.
    pub fn max_moment(&self, q: f64, l: f64) -> f64 {
        match self {
            LoadCase::SimplySupportedCenterPoint => formulas::simply_supported_point_max_moment(q, l),
            LoadCase::SimplySupportedUniform => formulas::simply_supported_uniform_max_moment(q, l),
            LoadCase::CantileverEndPoint => formulas::cantilever_point_max_moment(q, l),
            LoadCase::CantileverUniform => formulas::cantilever_uniform_max_moment(q, l),
            LoadCase::FixedFixedCenterPoint => formulas::fixed_fixed_point_max_moment(q, l),
            LoadCase::FixedFixedUniform => formulas::fixed_fixed_uniform_max_moment(q, l),
            LoadCase::ProppedCantileverUniform => formulas::propped_cantilever_uniform_max_moment(q, l),
        }
    }

    /// Maximum shear (same force unit as the load)
    pub fn max_shear(&self, q: f64, l: f64) -> f64 {
        match self {
            LoadCase::SimplySupportedCenterPoint => formulas::simply_supported_point_max_shear(q),
            LoadCase::SimplySupportedUniform => formulas::simply_supported_uniform_max_shear(q, l),
            LoadCase::CantileverEndPoint => formulas::cantilever_point_max_shear(q),
            LoadCase::CantileverUniform => formulas::cantilever_uniform_max_shear(q, l),
            LoadCase::FixedFixedCenterPoint => formulas::fixed_fixed_point_max_shear(q),
            LoadCase::FixedFixedUniform => formulas::fixed_fixed_uniform_max_shear(q, l),
            LoadCase::ProppedCantileverUniform => formulas::propped_cantilever_uniform_max_shear(q, l),
        }
    }

    /// Maximum deflection. Units must be consistent (N, mm, MPa, mm⁴ → mm).
    pub fn max_deflection(&self, q: f64, l: f64, e: f64, i: f64) -> f64 {
        match self {
            LoadCase::SimplySupportedCenterPoint => formulas::simply_supported_point_max_deflection(q, l, e, i),
            LoadCase::SimplySupportedUniform => formulas::simply_supported_uniform_max_deflection(q, l, e, i),
            LoadCase::CantileverEndPoint => formulas::cantilever_point_max_deflection(q, l, e, i),
            LoadCase::CantileverUniform => formulas::cantilever_uniform_max_deflection(q, l, e, i),
            LoadCase::FixedFixedCenterPoint => formulas::fixed_fixed_point_max_deflection(q, l, e, i),
            LoadCase::FixedFixedUniform => formulas::fixed_fixed_uniform_max_deflection(q, l, e, i),
            LoadCase::ProppedCantileverUniform => {
                formulas::propped_cantilever_uniform_max_deflection(q, l, e, i)
            }
        }
    }

    fn coefficients(&self) -> Coefficients {
        let (moment, shear, deflection) = match self {
            LoadCase::SimplySupportedCenterPoint => ((1, 4), (1, 2), (1, 48)),
            LoadCase::SimplySupportedUniform => ((1, 8), (1, 2), (5, 384)),
            LoadCase::CantileverEndPoint => ((1, 1), (1, 1), (1, 3)),
            LoadCase::CantileverUniform => ((1, 2), (1, 1), (1, 8)),
            LoadCase::FixedFixedCenterPoint => ((1, 8), (1, 2), (1, 192)),
            LoadCase::FixedFixedUniform => ((1, 12), (1, 2), (1, 384)),
            LoadCase::ProppedCantileverUniform => ((1, 8), (5, 8), (1, 185)),
        };
        Coefficients {
            moment,
            shear,
            deflection,
        }
    }

    /// Exponent of L in the moment expression
    fn span_power(&self) -> i32 {
        if self.is_point_load() {
            1
        } else {
            2
        }
    }
}

impl std::fmt::Display for LoadCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Span and load magnitude. The magnitude is N for point cases and N/m for
/// distributed cases (see [`LoadCase::load_unit`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamLoad {
    /// Span L (m)
    pub span_m: f64,
    /// P (N) or w (N/m)
    pub magnitude: f64,
}

impl BeamLoad {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        require_positive("magnitude", self.magnitude)?;
        Ok(())
    }
}

/// Input parameters for a beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "load_case": "SimplySupportedUniform",
///   "span_m": 4.0,
///   "magnitude": 2500.0,
///   "section": { "shape": "Rectangular", "width_mm": 100.0, "depth_mm": 200.0 },
///   "material": { "type": "Standard", "grade": "C24" },
///   "deflection_limit_ratio": 300.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    pub load_case: LoadCase,

    #[serde(flatten)]
    pub load: BeamLoad,

    pub section: CrossSection,

    pub material: Material,

    /// Allowable span-to-deflection ratio (L/360 by default)
    #[serde(default = "default_deflection_limit_ratio")]
    pub deflection_limit_ratio: f64,
}

impl BeamInput {
    /// Validate in field order, stopping at the first failure.
    pub fn validate(&self) -> CalcResult<()> {
        self.load.validate()?;
        self.section.validate()?;
        self.material.resolve()?;
        require_positive("deflection_limit_ratio", self.deflection_limit_ratio)?;
        Ok(())
    }
}

/// Results from a beam analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment_nm": 500.0,
///   "max_shear_n": 500.0,
///   "max_bending_stress_mpa": 6.0,
///   "max_shear_stress_mpa": 0.15,
///   "max_deflection_mm": 0.16,
///   "deflection_ratio": 12500.0,
///   "deflection_limit_ratio": 360.0,
///   "safety_factor": 25.0,
///   "subst_max_moment_nm": "M_{max} = \\frac{P L}{4} = \\frac{1000.00 \\cdot 2.00}{4} = 500.00 \\, \\mathrm{N \\cdot m}",
///   "...": "..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // === Demand ===
    /// Maximum bending moment (N·m)
    pub max_moment_nm: f64,

    /// Maximum shear force (N)
    pub max_shear_n: f64,

    // === Stresses ===
    /// σ_b = M/S (MPa)
    pub max_bending_stress_mpa: f64,

    /// τ = V/A_v (MPa)
    pub max_shear_stress_mpa: f64,

    // === Serviceability ===
    /// Maximum deflection (mm)
    pub max_deflection_mm: f64,

    /// L/δ. Higher is stiffer.
    pub deflection_ratio: f64,

    pub deflection_limit_ratio: f64,

    // === Strength ===
    /// Allowable stress / bending stress. Below 1.0 is overstressed.
    pub safety_factor: f64,

    // === Section and material used ===
    pub area_mm2: f64,
    pub moment_of_inertia_mm4: f64,
    pub section_modulus_mm3: f64,
    pub e_gpa: f64,
    pub allowable_stress_mpa: f64,

    /// `subst_<field>` display strings
    #[serde(flatten)]
    pub substitutions: Substitutions,
}

impl BeamResult {
    /// Bending demand over capacity (1/SF)
    pub fn bending_unity(&self) -> f64 {
        1.0 / self.safety_factor
    }

    /// Deflection demand over limit
    pub fn deflection_unity(&self) -> f64 {
        self.deflection_limit_ratio / self.deflection_ratio
    }

    /// Check that stress and deflection are both within limits
    pub fn passes(&self) -> bool {
        self.bending_unity() <= 1.0 && self.deflection_unity() <= 1.0
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        if self.bending_unity() >= self.deflection_unity() {
            "Bending"
        } else {
            "Deflection"
        }
    }
}

/// Analyze a beam with the default deflection limit (L/360).
pub fn evaluate(
    load_case: LoadCase,
    section: &CrossSection,
    material: &Material,
    load: BeamLoad,
) -> CalcResult<BeamResult> {
    analyze(load_case, section, material, load, DEFAULT_DEFLECTION_LIMIT_RATIO)
}

/// Analyze the beam described by `input`.
///
/// # Example
///
/// ```rust
/// use calc_core::calculations::beam::{calculate, BeamInput};
///
/// let json = r#"{
///     "label": "B-1",
///     "load_case": "CantileverEndPoint",
///     "span_m": 1.5,
///     "magnitude": 800.0,
///     "section": { "shape": "SolidCircular", "diameter_mm": 40.0 },
///     "material": { "type": "Standard", "grade": "S355" }
/// }"#;
/// let input: BeamInput = serde_json::from_str(json).unwrap();
/// let result = calculate(&input).unwrap();
/// assert!((result.max_moment_nm - 1200.0).abs() < 1e-9);
/// ```
pub fn calculate(input: &BeamInput) -> CalcResult<BeamResult> {
    analyze(
        input.load_case,
        &input.section,
        &input.material,
        input.load,
        input.deflection_limit_ratio,
    )
}

fn analyze(
    load_case: LoadCase,
    section: &CrossSection,
    material: &Material,
    load: BeamLoad,
    deflection_limit_ratio: f64,
) -> CalcResult<BeamResult> {
    load.validate()?;
    let mut subs = Substitutions::new();
    let props = section.properties_with_substitutions(&mut subs)?;
    let mat = material.resolve()?;
    require_positive("deflection_limit_ratio", deflection_limit_ratio)?;

    debug!(
        "Beam: {} | {} | {} | L = {} m, q = {} {}",
        load_case,
        section.shape_name(),
        material,
        load.span_m,
        load.magnitude,
        load_case.load_unit()
    );

    let [moment_eq, shear_eq, deflection_eq] = load_case.equations();
    let coef = load_case.coefficients();
    let n = load_case.span_power();
    let q = load.magnitude;
    let l = load.span_m;

    // Moment (N·m) and shear (N) in metre units
    let max_moment_nm = load_case.max_moment(q, l);
    require_representable("magnitude", q, "Maximum moment", max_moment_nm)?;
    subs.record(
        "max_moment_nm",
        moment_eq,
        &scaled_product(coef.moment, &load_term(q, l, n)),
        max_moment_nm,
        r"N \cdot m",
    );

    let max_shear_n = load_case.max_shear(q, l);
    require_representable("magnitude", q, "Maximum shear", max_shear_n)?;
    subs.record(
        "max_shear_n",
        shear_eq,
        &scaled_product(coef.shear, &load_term(q, l, n - 1)),
        max_shear_n,
        "N",
    );

    // Stresses in N/mm² = MPa
    let max_bending_stress_mpa = max_moment_nm * 1000.0 / props.section_modulus_mm3;
    require_representable("magnitude", q, "Bending stress", max_bending_stress_mpa)?;
    subs.record(
        "max_bending_stress_mpa",
        Equation::BendingStress,
        &format!(
            r"\frac{{{} \cdot 10^3}}{{{}}}",
            num(max_moment_nm),
            num(props.section_modulus_mm3)
        ),
        max_bending_stress_mpa,
        "MPa",
    );

    let max_shear_stress_mpa = max_shear_n / props.shear_area_mm2;
    require_representable("magnitude", q, "Shear stress", max_shear_stress_mpa)?;
    subs.record(
        "max_shear_stress_mpa",
        Equation::ShearStress,
        &format!(r"\frac{{{}}}{{{}}}", num(max_shear_n), num(props.shear_area_mm2)),
        max_shear_stress_mpa,
        "MPa",
    );
    trace!(
        "M = {} N·m, V = {} N, sigma_b = {} MPa, tau = {} MPa",
        max_moment_nm,
        max_shear_n,
        max_bending_stress_mpa,
        max_shear_stress_mpa
    );

    // Deflection in N, mm, MPa
    let span_mm = l * 1000.0;
    let q_mm = if load_case.is_point_load() { q } else { q / 1000.0 };
    let e_mpa = mat.e_gpa * 1000.0;
    let max_deflection_mm = load_case.max_deflection(q_mm, span_mm, e_mpa, props.moment_of_inertia_mm4);
    require_representable("span_m", l, "Deflection", max_deflection_mm)?;
    let (d_num, d_den) = coef.deflection;
    subs.record(
        "max_deflection_mm",
        deflection_eq,
        &scaled_fraction(
            d_num,
            &load_term(q_mm, span_mm, n + 2),
            &format!(
                r"{} \cdot {} \cdot {}",
                d_den,
                num(e_mpa),
                num(props.moment_of_inertia_mm4)
            ),
        ),
        max_deflection_mm,
        "mm",
    );

    let deflection_ratio = span_mm / max_deflection_mm;
    require_representable("magnitude", q, "Deflection ratio", deflection_ratio)?;
    subs.record(
        "deflection_ratio",
        Equation::DeflectionRatio,
        &format!(r"\frac{{{}}}{{{}}}", num(span_mm), num(max_deflection_mm)),
        deflection_ratio,
        "",
    );

    let safety_factor = mat.allowable_stress_mpa / max_bending_stress_mpa;
    require_representable("magnitude", q, "Safety factor", safety_factor)?;
    subs.record(
        "safety_factor",
        Equation::SafetyFactor,
        &format!(
            r"\frac{{{}}}{{{}}}",
            num(mat.allowable_stress_mpa),
            num(max_bending_stress_mpa)
        ),
        safety_factor,
        "",
    );
    trace!(
        "delta = {} mm, L/delta = {}, SF = {}",
        max_deflection_mm,
        deflection_ratio,
        safety_factor
    );

    if safety_factor < 1.0 {
        warn!(
            "Beam overstressed: bending stress {:.2} MPa exceeds allowable {:.2} MPa (SF = {:.2})",
            max_bending_stress_mpa, mat.allowable_stress_mpa, safety_factor
        );
    }

    Ok(BeamResult {
        max_moment_nm,
        max_shear_n,
        max_bending_stress_mpa,
        max_shear_stress_mpa,
        max_deflection_mm,
        deflection_ratio,
        deflection_limit_ratio,
        safety_factor,
        area_mm2: props.area_mm2,
        moment_of_inertia_mm4: props.moment_of_inertia_mm4,
        section_modulus_mm3: props.section_modulus_mm3,
        e_gpa: mat.e_gpa,
        allowable_stress_mpa: mat.allowable_stress_mpa,
        substitutions: subs,
    })
}

/// "q \cdot L^n" with the power omitted for n ≤ 1
fn load_term(q: f64, l: f64, n: i32) -> String {
    match n {
        0 => num(q),
        1 => format!(r"{} \cdot {}", num(q), num(l)),
        _ => format!(r"{} \cdot {}^{}", num(q), num(l), n),
    }
}

/// (a/b) · term, written without unit coefficients
fn scaled_product((a, b): (u32, u32), term: &str) -> String {
    match (a, b) {
        (1, 1) => term.to_string(),
        (a, 1) => format!(r"{} \cdot {}", a, term),
        (1, b) => format!(r"\frac{{{}}}{{{}}}", term, b),
        (a, b) => format!(r"\frac{{{} \cdot {}}}{{{}}}", a, term, b),
    }
}

fn scaled_fraction(a: u32, numerator: &str, denominator: &str) -> String {
    if a == 1 {
        format!(r"\frac{{{}}}{{{}}}", numerator, denominator)
    } else {
        format!(r"\frac{{{} \cdot {}}}{{{}}}", a, numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialGrade;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn rect() -> CrossSection {
        CrossSection::Rectangular {
            width_mm: 50.0,
            depth_mm: 100.0,
        }
    }

    fn test_beam() -> BeamInput {
        BeamInput {
            label: "Test Beam".to_string(),
            load_case: LoadCase::SimplySupportedCenterPoint,
            load: BeamLoad {
                span_m: 2.0,
                magnitude: 1000.0,
            },
            section: rect(),
            material: Material::standard(MaterialGrade::A36),
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT_RATIO,
        }
    }

    #[test]
    fn test_center_point_moment() {
        let result = calculate(&test_beam()).unwrap();
        // M = PL/4 = 1000 * 2 / 4
        assert!(approx_eq(result.max_moment_nm, 500.0, 1e-9));
        assert!(approx_eq(result.max_shear_n, 500.0, 1e-9));
    }

    #[test]
    fn test_bending_stress() {
        let result = calculate(&test_beam()).unwrap();
        // S = 50 * 100² / 6 = 83333.33 mm³, σ = 500e3 / 83333.33 = 6.0 MPa
        assert!(approx_eq(result.max_bending_stress_mpa, 6.0, 1e-9));
        assert!(approx_eq(result.safety_factor, 25.0, 1e-9));
    }

    #[test]
    fn test_shear_stress_rectangular() {
        let result = calculate(&test_beam()).unwrap();
        // τ = 3V/(2A) = 1.5 * 500 / 5000
        assert!(approx_eq(result.max_shear_stress_mpa, 0.15, 1e-12));
    }

    #[test]
    fn test_deflection() {
        let result = calculate(&test_beam()).unwrap();
        // δ = 1000 * 2000³ / (48 * 200000 * 4166666.67) = 0.2 mm
        assert!(approx_eq(result.max_deflection_mm, 0.2, 1e-9));
        assert!(approx_eq(result.deflection_ratio, 10_000.0, 1e-6));
        assert!(result.passes());
    }

    #[test]
    fn test_uniform_cases_use_line_load() {
        let load = BeamLoad {
            span_m: 4.0,
            magnitude: 2000.0,
        };
        let mat = Material::standard(MaterialGrade::S355);
        let ss = evaluate(LoadCase::SimplySupportedUniform, &rect(), &mat, load).unwrap();
        let ff = evaluate(LoadCase::FixedFixedUniform, &rect(), &mat, load).unwrap();
        let cant = evaluate(LoadCase::CantileverUniform, &rect(), &mat, load).unwrap();
        let propped = evaluate(LoadCase::ProppedCantileverUniform, &rect(), &mat, load).unwrap();

        assert!(approx_eq(ss.max_moment_nm, 4000.0, 1e-9));
        assert!(approx_eq(ff.max_moment_nm, 2000.0 * 16.0 / 12.0, 1e-9));
        assert!(approx_eq(cant.max_moment_nm, 16_000.0, 1e-9));
        assert!(approx_eq(propped.max_shear_n, 5000.0, 1e-9));

        // Fixed ends are five times stiffer than simple supports under uniform load
        assert!(approx_eq(ss.max_deflection_mm / ff.max_deflection_mm, 5.0, 1e-9));
    }

    #[test]
    fn test_every_case_produces_full_substitutions() {
        for case in LoadCase::ALL {
            let result = evaluate(
                case,
                &rect(),
                &Material::default(),
                BeamLoad {
                    span_m: 3.0,
                    magnitude: 500.0,
                },
            )
            .unwrap();
            // 3 section + 7 beam quantities
            assert_eq!(result.substitutions.len(), 10, "{:?}", case);
            let [moment_eq, ..] = case.equations();
            let moment = result.substitutions.get("max_moment_nm").unwrap();
            assert!(moment.starts_with(moment_eq.metadata().formula_latex));
        }
    }

    #[test]
    fn test_moment_substitution_text() {
        let result = calculate(&test_beam()).unwrap();
        assert_eq!(
            result.substitutions.get("max_moment_nm").unwrap(),
            r"M_{max} = \frac{P L}{4} = \frac{1000.00 \cdot 2.00}{4} = 500.00 \, \mathrm{N \cdot m}"
        );
    }

    #[test]
    fn test_light_line_load_substitution_evaluates() {
        // 20 mm rod under roughly its own weight
        let result = evaluate(
            LoadCase::SimplySupportedUniform,
            &CrossSection::SolidCircular { diameter_mm: 20.0 },
            &Material::default(),
            BeamLoad {
                span_m: 3.0,
                magnitude: 4.0,
            },
        )
        .unwrap();
        assert!(approx_eq(result.max_deflection_mm, 2.6857, 1e-3));
        let deflection = result.substitutions.get("max_deflection_mm").unwrap();
        assert!(
            deflection.contains(r"\frac{5 \cdot 4.00 \times 10^{-3} \cdot 3000.00^4}{384 \cdot 200000.00 \cdot 7853.98}"),
            "{}",
            deflection
        );
        assert!(deflection.ends_with(r"= 2.69 \, \mathrm{mm}"));
    }

    #[test]
    fn test_unrepresentable_results_rejected() {
        let mut beam = test_beam();
        beam.load.magnitude = 1e300;
        beam.load.span_m = 1e10;
        let err = calculate(&beam).unwrap_err();
        assert_eq!(err.field(), "magnitude");
        assert!(err.reason().contains("representable"));

        // Subnormal load: deflection underflows and L/δ would be infinite
        let mut beam = test_beam();
        beam.load.magnitude = 1e-320;
        assert_eq!(calculate(&beam).unwrap_err().field(), "magnitude");
    }

    #[test]
    fn test_overstressed_beam_still_returns() {
        let mut beam = test_beam();
        beam.load.magnitude = 50_000.0;
        let result = calculate(&beam).unwrap();
        assert!(result.safety_factor < 1.0);
        assert!(!result.passes());
        assert_eq!(result.governing_condition(), "Bending");
    }

    #[test]
    fn test_flexible_beam_governed_by_deflection() {
        let mut beam = test_beam();
        beam.load.span_m = 6.0;
        beam.load.magnitude = 300.0;
        beam.material = Material::standard(MaterialGrade::TimberC24);
        let result = calculate(&beam).unwrap();
        assert_eq!(result.governing_condition(), "Deflection");
    }

    #[test]
    fn test_validation_order() {
        let mut beam = test_beam();
        beam.load.span_m = 0.0;
        beam.section = CrossSection::Rectangular {
            width_mm: -1.0,
            depth_mm: 100.0,
        };
        assert_eq!(calculate(&beam).unwrap_err().field(), "span_m");

        beam.load.span_m = 2.0;
        assert_eq!(calculate(&beam).unwrap_err().field(), "width_mm");

        beam.section = rect();
        beam.material = Material::custom("Bad", 10.0, 0.0);
        assert_eq!(
            calculate(&beam).unwrap_err().field(),
            "material.allowable_stress_mpa"
        );

        beam.material = Material::default();
        beam.deflection_limit_ratio = 0.0;
        assert_eq!(calculate(&beam).unwrap_err().field(), "deflection_limit_ratio");
    }

    #[test]
    fn test_negative_and_nan_load_rejected() {
        let mut beam = test_beam();
        beam.load.magnitude = -10.0;
        assert_eq!(calculate(&beam).unwrap_err().field(), "magnitude");
        beam.load.magnitude = f64::NAN;
        assert_eq!(calculate(&beam).unwrap_err().field(), "magnitude");
    }

    #[test]
    fn test_json_input_defaults() {
        let json = r#"{
            "load_case": "SimplySupportedUniform",
            "span_m": 4.0,
            "magnitude": 2500.0,
            "section": { "shape": "Rectangular", "width_mm": 100.0, "depth_mm": 200.0 },
            "material": { "type": "Standard", "grade": "C24" }
        }"#;
        let input: BeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.deflection_limit_ratio, 360.0);
        assert!(input.label.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = calculate(&test_beam()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("max_moment_nm").is_some());
        assert!(json.get("subst_max_moment_nm").is_some());
        assert!(json.get("subst_area_mm2").is_some());
        assert!(json.get("substitutions").is_none());
    }
}
