//! # Bolted Joint Analysis
//!
//! Preloaded ISO metric bolts sharing an external axial (tension) load and a
//! transverse shear load equally.
//!
//! ## Method
//!
//! - Proof load F_p = S_p·A_t, assembly preload F_i = k_p·F_p
//! - Tightening torque T = K·F_i·d (short-form torque equation)
//! - Bolt takes the share C of the external load: F_b = F_i + C·P
//! - Shear carried on the tensile stress area (threads in the shear plane)
//! - Combined stress by von Mises, σ_eq = √(σ² + 3τ²)
//!
//! With no axial load the separation and load factors are undefined
//! (infinite) and are reported as `null`.
//!
//! ## References
//!
//! - ISO 898-1:2013, mechanical properties of fasteners
//! - VDI 2230 Part 1:2015, systematic calculation of bolted joints

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_finite, require_positive, require_representable, CalcError, CalcResult};
use crate::materials::{BoltSize, PropertyClass};
use crate::substitution::{num, Substitutions};

/// Default assembly preload as a fraction of proof load
pub const DEFAULT_PRELOAD_FRACTION: f64 = 0.75;
/// Default nut factor K (dry, plain steel)
pub const DEFAULT_NUT_FACTOR: f64 = 0.2;
/// Default joint stiffness constant C = k_b / (k_b + k_m)
pub const DEFAULT_JOINT_STIFFNESS: f64 = 0.25;

fn default_bolt_count() -> u32 {
    1
}

fn default_preload_fraction() -> f64 {
    DEFAULT_PRELOAD_FRACTION
}

fn default_nut_factor() -> f64 {
    DEFAULT_NUT_FACTOR
}

fn default_joint_stiffness() -> f64 {
    DEFAULT_JOINT_STIFFNESS
}

/// Input parameters for a bolted joint.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Flange",
///   "bolt_size": "M12",
///   "property_class": "8.8",
///   "axial_load_n": 40000.0,
///   "shear_load_n": 8000.0,
///   "bolt_count": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerInput {
    #[serde(default)]
    pub label: String,

    pub bolt_size: BoltSize,

    pub property_class: PropertyClass,

    /// Total external tension on the joint (N)
    #[serde(default)]
    pub axial_load_n: f64,

    /// Total transverse shear on the joint (N)
    #[serde(default)]
    pub shear_load_n: f64,

    #[serde(default = "default_bolt_count")]
    pub bolt_count: u32,

    /// Preload as a fraction of proof load, in (0, 1]
    #[serde(default = "default_preload_fraction")]
    pub preload_fraction: f64,

    /// Nut factor K
    #[serde(default = "default_nut_factor")]
    pub nut_factor: f64,

    /// Joint stiffness constant C, in (0, 1)
    #[serde(default = "default_joint_stiffness")]
    pub joint_stiffness: f64,
}

impl FastenerInput {
    /// New input with default preload, nut factor and stiffness
    pub fn new(bolt_size: BoltSize, property_class: PropertyClass, axial_load_n: f64, shear_load_n: f64) -> Self {
        FastenerInput {
            label: String::new(),
            bolt_size,
            property_class,
            axial_load_n,
            shear_load_n,
            bolt_count: default_bolt_count(),
            preload_fraction: DEFAULT_PRELOAD_FRACTION,
            nut_factor: DEFAULT_NUT_FACTOR,
            joint_stiffness: DEFAULT_JOINT_STIFFNESS,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("axial_load_n", self.axial_load_n)?;
        require_non_negative("shear_load_n", self.shear_load_n)?;
        if self.axial_load_n == 0.0 && self.shear_load_n == 0.0 {
            return Err(CalcError::invalid_input(
                "axial_load_n",
                "0",
                "At least one of axial_load_n and shear_load_n must be positive",
            ));
        }
        if self.bolt_count == 0 {
            return Err(CalcError::invalid_input(
                "bolt_count",
                "0",
                "bolt_count must be at least 1",
            ));
        }
        require_positive("preload_fraction", self.preload_fraction)?;
        if self.preload_fraction > 1.0 {
            return Err(CalcError::out_of_range(
                "preload_fraction",
                self.preload_fraction,
                "Preload cannot exceed the proof load",
            ));
        }
        require_positive("nut_factor", self.nut_factor)?;
        require_positive("joint_stiffness", self.joint_stiffness)?;
        if self.joint_stiffness >= 1.0 {
            return Err(CalcError::out_of_range(
                "joint_stiffness",
                self.joint_stiffness,
                "Joint stiffness constant must be less than 1",
            ));
        }
        Ok(())
    }
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must not be negative", field),
        ));
    }
    Ok(())
}

/// Results for one bolt of the joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastenerResult {
    // === Loads per bolt ===
    pub axial_load_per_bolt_n: f64,
    pub shear_load_per_bolt_n: f64,

    // === Bolt data ===
    pub tensile_stress_area_mm2: f64,
    pub proof_strength_mpa: f64,
    pub yield_strength_mpa: f64,

    // === Assembly ===
    pub proof_load_n: f64,
    pub preload_n: f64,
    pub tightening_torque_nm: f64,

    // === Service ===
    /// F_i + C·P
    pub bolt_load_n: f64,
    pub tensile_stress_mpa: f64,
    pub shear_stress_mpa: f64,
    pub von_mises_stress_mpa: f64,

    // === Checks ===
    pub yield_safety_factor: f64,
    /// F_i / ((1 − C)·P); `None` with no axial load
    pub separation_safety_factor: Option<f64>,
    /// (F_p − F_i) / (C·P); `None` with no axial load
    pub load_factor: Option<f64>,

    #[serde(flatten)]
    pub substitutions: Substitutions,
}

impl FastenerResult {
    /// Bolt does not yield and the joint does not separate
    pub fn passes(&self) -> bool {
        self.yield_safety_factor >= 1.0 && self.separation_safety_factor.map_or(true, |n| n >= 1.0)
    }
}

pub fn calculate(input: &FastenerInput) -> CalcResult<FastenerResult> {
    input.validate()?;

    let geometry = input.bolt_size.geometry();
    let strength = input.property_class.strength(input.bolt_size);
    let at = geometry.tensile_stress_area_mm2;
    let d = geometry.nominal_diameter_mm;
    let n = f64::from(input.bolt_count);
    let c = input.joint_stiffness;

    debug!(
        "Fastener: {} x {} class {}, P = {} N, V = {} N",
        input.bolt_count,
        input.bolt_size.code(),
        input.property_class.code(),
        input.axial_load_n,
        input.shear_load_n
    );

    let mut subs = Substitutions::new();

    let p = input.axial_load_n / n;
    subs.record(
        "axial_load_per_bolt_n",
        Equation::LoadPerBolt,
        &format!(r"\frac{{{}}}{{{}}}", num(input.axial_load_n), input.bolt_count),
        p,
        "N",
    );
    let v = input.shear_load_n / n;
    subs.record(
        "shear_load_per_bolt_n",
        Equation::LoadPerBolt,
        &format!(r"\frac{{{}}}{{{}}}", num(input.shear_load_n), input.bolt_count),
        v,
        "N",
    );

    let proof_load_n = strength.proof_strength_mpa * at;
    subs.record(
        "proof_load_n",
        Equation::BoltProofLoad,
        &format!(r"{} \cdot {}", num(strength.proof_strength_mpa), num(at)),
        proof_load_n,
        "N",
    );

    let preload_n = input.preload_fraction * proof_load_n;
    subs.record(
        "preload_n",
        Equation::BoltPreload,
        &format!(r"{} \cdot {}", num(input.preload_fraction), num(proof_load_n)),
        preload_n,
        "N",
    );

    let tightening_torque_nm = input.nut_factor * preload_n * d / 1000.0;
    subs.record(
        "tightening_torque_nm",
        Equation::TighteningTorque,
        &format!(
            r"{} \cdot {} \cdot {} \cdot 10^{{-3}}",
            num(input.nut_factor),
            num(preload_n),
            num(d)
        ),
        tightening_torque_nm,
        r"N \cdot m",
    );

    let bolt_load_n = preload_n + c * p;
    subs.record(
        "bolt_load_n",
        Equation::BoltLoad,
        &format!(r"{} + {} \cdot {}", num(preload_n), num(c), num(p)),
        bolt_load_n,
        "N",
    );

    let tensile_stress_mpa = bolt_load_n / at;
    subs.record(
        "tensile_stress_mpa",
        Equation::BoltTensileStress,
        &format!(r"\frac{{{}}}{{{}}}", num(bolt_load_n), num(at)),
        tensile_stress_mpa,
        "MPa",
    );

    let shear_stress_mpa = v / at;
    subs.record(
        "shear_stress_mpa",
        Equation::BoltShearStress,
        &format!(r"\frac{{{}}}{{{}}}", num(v), num(at)),
        shear_stress_mpa,
        "MPa",
    );

    let von_mises_stress_mpa = (tensile_stress_mpa.powi(2) + 3.0 * shear_stress_mpa.powi(2)).sqrt();
    if (3.0 * shear_stress_mpa.powi(2)).is_finite() {
        require_representable("axial_load_n", input.axial_load_n, "Von Mises stress", von_mises_stress_mpa)?;
    } else {
        require_representable("shear_load_n", input.shear_load_n, "Von Mises stress", von_mises_stress_mpa)?;
    }
    subs.record(
        "von_mises_stress_mpa",
        Equation::VonMisesStress,
        &format!(
            r"\sqrt{{{}^2 + 3 \cdot {}^2}}",
            num(tensile_stress_mpa),
            num(shear_stress_mpa)
        ),
        von_mises_stress_mpa,
        "MPa",
    );
    trace!(
        "Fi = {} N, Fb = {} N, sigma = {} MPa, tau = {} MPa, sigma_eq = {} MPa",
        preload_n,
        bolt_load_n,
        tensile_stress_mpa,
        shear_stress_mpa,
        von_mises_stress_mpa
    );

    let yield_safety_factor = strength.yield_strength_mpa / von_mises_stress_mpa;
    subs.record(
        "yield_safety_factor",
        Equation::YieldSafetyFactor,
        &format!(
            r"\frac{{{}}}{{{}}}",
            num(strength.yield_strength_mpa),
            num(von_mises_stress_mpa)
        ),
        yield_safety_factor,
        "",
    );

    let (separation_safety_factor, load_factor) = if p > 0.0 {
        let separation = preload_n / ((1.0 - c) * p);
        require_representable("axial_load_n", input.axial_load_n, "Separation safety factor", separation)?;
        subs.record(
            "separation_safety_factor",
            Equation::SeparationSafetyFactor,
            &format!(r"\frac{{{}}}{{{} (1 - {})}}", num(preload_n), num(p), num(c)),
            separation,
            "",
        );
        let factor = (proof_load_n - preload_n) / (c * p);
        require_representable("axial_load_n", input.axial_load_n, "Load factor", factor)?;
        subs.record(
            "load_factor",
            Equation::BoltLoadFactor,
            &format!(
                r"\frac{{{} - {}}}{{{} \cdot {}}}",
                num(proof_load_n),
                num(preload_n),
                num(c),
                num(p)
            ),
            factor,
            "",
        );
        (Some(separation), Some(factor))
    } else {
        (None, None)
    };

    if yield_safety_factor < 1.0 {
        warn!(
            "Bolt {} class {} yields: equivalent stress {:.2} MPa > {:.2} MPa",
            input.bolt_size.code(),
            input.property_class.code(),
            von_mises_stress_mpa,
            strength.yield_strength_mpa
        );
    }
    if let Some(sep) = separation_safety_factor.filter(|s| *s < 1.0) {
        warn!("Joint separates under load (separation factor {:.2})", sep);
    }

    Ok(FastenerResult {
        axial_load_per_bolt_n: p,
        shear_load_per_bolt_n: v,
        tensile_stress_area_mm2: at,
        proof_strength_mpa: strength.proof_strength_mpa,
        yield_strength_mpa: strength.yield_strength_mpa,
        proof_load_n,
        preload_n,
        tightening_torque_nm,
        bolt_load_n,
        tensile_stress_mpa,
        shear_stress_mpa,
        von_mises_stress_mpa,
        yield_safety_factor,
        separation_safety_factor,
        load_factor,
        substitutions: subs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn m12_tension() -> FastenerInput {
        FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, 10_000.0, 0.0)
    }

    #[test]
    fn test_m12_preload_and_torque() {
        let r = calculate(&m12_tension()).unwrap();
        // Fp = 580 * 84.3 = 48894 N
        assert!(approx_eq(r.proof_load_n, 48_894.0, 1e-6));
        assert!(approx_eq(r.preload_n, 36_670.5, 1e-6));
        // T = 0.2 * 36670.5 * 12 mm = 88.01 N·m
        assert!(approx_eq(r.tightening_torque_nm, 88.0092, 1e-4));
    }

    #[test]
    fn test_m12_service_stresses() {
        let r = calculate(&m12_tension()).unwrap();
        // Fb = 36670.5 + 0.25 * 10000
        assert!(approx_eq(r.bolt_load_n, 39_170.5, 1e-6));
        assert!(approx_eq(r.tensile_stress_mpa, 39_170.5 / 84.3, 1e-9));
        assert_eq!(r.shear_stress_mpa, 0.0);
        assert!(approx_eq(r.von_mises_stress_mpa, r.tensile_stress_mpa, 1e-9));
        assert!(approx_eq(r.yield_safety_factor, 640.0 * 84.3 / 39_170.5, 1e-9));
        // n0 = 36670.5 / (0.75 * 10000)
        assert!(approx_eq(r.separation_safety_factor.unwrap(), 4.8894, 1e-9));
        assert!(approx_eq(r.load_factor.unwrap(), 4.8894, 1e-9));
        assert!(r.passes());
    }

    #[test]
    fn test_shear_only_has_no_separation_factor() {
        let mut input = FastenerInput::new(BoltSize::M16, PropertyClass::Class10_9, 0.0, 20_000.0);
        input.bolt_count = 2;
        let r = calculate(&input).unwrap();
        assert!(approx_eq(r.shear_load_per_bolt_n, 10_000.0, 1e-9));
        assert!(r.separation_safety_factor.is_none());
        assert!(r.load_factor.is_none());
        assert!(r.substitutions.get("separation_safety_factor").is_none());

        let json = serde_json::to_value(&r).unwrap();
        assert!(json["separation_safety_factor"].is_null());
    }

    #[test]
    fn test_combined_load_von_mises() {
        let input = FastenerInput::new(BoltSize::M20, PropertyClass::Class8_8, 20_000.0, 15_000.0);
        let r = calculate(&input).unwrap();
        let expected = (r.tensile_stress_mpa.powi(2) + 3.0 * r.shear_stress_mpa.powi(2)).sqrt();
        assert!(approx_eq(r.von_mises_stress_mpa, expected, 1e-12));
        // M20 8.8 uses the d > 16 mm proof stress
        assert_eq!(r.proof_strength_mpa, 600.0);
    }

    #[test]
    fn test_weak_bolt_fails() {
        let input = FastenerInput::new(BoltSize::M5, PropertyClass::Class4_6, 5_000.0, 2_000.0);
        let r = calculate(&input).unwrap();
        assert!(r.yield_safety_factor < 1.0);
        assert!(!r.passes());
    }

    #[test]
    fn test_validation() {
        let both_zero = FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, 0.0, 0.0);
        assert_eq!(calculate(&both_zero).unwrap_err().field(), "axial_load_n");

        let negative = FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, -1.0, 0.0);
        assert_eq!(calculate(&negative).unwrap_err().field(), "axial_load_n");

        let mut input = m12_tension();
        input.bolt_count = 0;
        assert_eq!(calculate(&input).unwrap_err().field(), "bolt_count");

        let mut input = m12_tension();
        input.joint_stiffness = 1.0;
        assert_eq!(calculate(&input).unwrap_err().field(), "joint_stiffness");

        let mut input = m12_tension();
        input.preload_fraction = 1.2;
        assert_eq!(calculate(&input).unwrap_err().field(), "preload_fraction");
    }

    #[test]
    fn test_unrepresentable_results_rejected() {
        let huge_tension = FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, 1e300, 0.0);
        let err = calculate(&huge_tension).unwrap_err();
        assert_eq!(err.field(), "axial_load_n");
        assert!(err.reason().starts_with("Von Mises stress"));

        let huge_shear = FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, 0.0, 1e300);
        assert_eq!(calculate(&huge_shear).unwrap_err().field(), "shear_load_n");

        // Subnormal tension: Fi / ((1 - C) P) overflows
        let tiny_tension = FastenerInput::new(BoltSize::M12, PropertyClass::Class8_8, 1e-320, 0.0);
        let err = calculate(&tiny_tension).unwrap_err();
        assert_eq!(err.field(), "axial_load_n");
        assert!(err.reason().starts_with("Separation safety factor"));
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{ "bolt_size": "M10", "property_class": "12.9", "axial_load_n": 5000.0 }"#;
        let input: FastenerInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.bolt_count, 1);
        assert_eq!(input.shear_load_n, 0.0);
        assert_eq!(input.preload_fraction, 0.75);
        assert_eq!(input.nut_factor, 0.2);
        assert_eq!(input.joint_stiffness, 0.25);
    }
}
