//! # Circle Basics
//!
//! Radius, area and circumference from a diameter.
//!
//! ```rust
//! use calc_core::calculations::circle::calculate_circle_basics;
//!
//! let result = calculate_circle_basics(10.0).unwrap();
//! assert!((result.area_mm2 - 78.54).abs() < 0.01);
//! assert!((result.circumference_mm - 31.42).abs() < 0.01);
//! ```

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_positive, require_representable, CalcResult};
use crate::substitution::{num, Substitutions};

/// ## JSON Example
///
/// ```json
/// { "label": "Pin", "diameter_mm": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleInput {
    #[serde(default)]
    pub label: String,
    /// Diameter D (mm)
    pub diameter_mm: f64,
}

impl CircleInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("diameter_mm", self.diameter_mm)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleResult {
    pub radius_mm: f64,
    pub area_mm2: f64,
    pub circumference_mm: f64,
    #[serde(flatten)]
    pub substitutions: Substitutions,
}

/// Compute radius, area and circumference for a circle of the given diameter.
pub fn calculate_circle_basics(diameter_mm: f64) -> CalcResult<CircleResult> {
    calculate(&CircleInput {
        label: String::new(),
        diameter_mm,
    })
}

pub fn calculate(input: &CircleInput) -> CalcResult<CircleResult> {
    input.validate()?;
    let d = input.diameter_mm;
    debug!("Circle: D = {} mm", d);

    let mut subs = Substitutions::new();

    let radius_mm = d / 2.0;
    subs.record("radius_mm", Equation::CircleRadius, &format!(r"\frac{{{}}}{{2}}", num(d)), radius_mm, "mm");

    let area_mm2 = PI * (d / 2.0).powi(2);
    require_representable("diameter_mm", d, "Area", area_mm2)?;
    subs.record(
        "area_mm2",
        Equation::CircleArea,
        &format!(r"\pi \left(\frac{{{}}}{{2}}\right)^2", num(d)),
        area_mm2,
        "mm^2",
    );

    let circumference_mm = PI * d;
    subs.record(
        "circumference_mm",
        Equation::CircleCircumference,
        &format!(r"\pi \cdot {}", num(d)),
        circumference_mm,
        "mm",
    );

    Ok(CircleResult {
        radius_mm,
        area_mm2,
        circumference_mm,
        substitutions: subs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diameter_ten() {
        let result = calculate_circle_basics(10.0).unwrap();
        assert_eq!(result.radius_mm, 5.0);
        assert!((result.area_mm2 - 78.539_816).abs() < 1e-6);
        assert!((result.circumference_mm - 31.415_927).abs() < 1e-6);
        assert_eq!(
            result.substitutions.get("area_mm2").unwrap(),
            r"A = \pi \left(\frac{D}{2}\right)^2 = \pi \left(\frac{10.00}{2}\right)^2 = 78.54 \, \mathrm{mm^2}"
        );
    }

    #[test]
    fn test_rejects_bad_diameter() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = calculate_circle_basics(d).unwrap_err();
            assert_eq!(err.field(), "diameter_mm");
        }
    }

    #[test]
    fn test_area_overflow_rejected() {
        let err = calculate_circle_basics(1e200).unwrap_err();
        assert_eq!(err.field(), "diameter_mm");
        assert!(err.reason().starts_with("Area"));
    }
}
