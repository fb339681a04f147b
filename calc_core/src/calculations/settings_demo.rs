//! # Scaling / Normalization Demo
//!
//! Scales a base value and expresses it relative to a reference.
//! Inputs may be negative or zero, except the reference, which divides.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_finite, require_nonzero, require_representable, CalcResult};
use crate::substitution::{num, Substitutions};

/// ## JSON Example
///
/// ```json
/// { "base_value": 10.0, "scale_factor": 2.0, "reference_value": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDemoInput {
    #[serde(default)]
    pub label: String,
    pub base_value: f64,
    pub scale_factor: f64,
    pub reference_value: f64,
}

impl SettingsDemoInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("base_value", self.base_value)?;
        require_finite("scale_factor", self.scale_factor)?;
        require_nonzero("reference_value", self.reference_value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDemoResult {
    pub scaled_value: f64,
    pub normalized_value: f64,
    pub percent_of_reference: f64,
    #[serde(flatten)]
    pub substitutions: Substitutions,
}

/// Scale `base_value` by `scale_factor` and compare to `reference_value`.
///
/// ```rust
/// use calc_core::calculations::settings_demo::calculate_settings_demo;
///
/// let r = calculate_settings_demo(10.0, 2.0, 5.0).unwrap();
/// assert_eq!(r.scaled_value, 20.0);
/// assert_eq!(r.percent_of_reference, 400.0);
/// ```
pub fn calculate_settings_demo(
    base_value: f64,
    scale_factor: f64,
    reference_value: f64,
) -> CalcResult<SettingsDemoResult> {
    calculate(&SettingsDemoInput {
        label: String::new(),
        base_value,
        scale_factor,
        reference_value,
    })
}

pub fn calculate(input: &SettingsDemoInput) -> CalcResult<SettingsDemoResult> {
    input.validate()?;
    debug!(
        "Settings demo: base = {}, scale = {}, reference = {}",
        input.base_value, input.scale_factor, input.reference_value
    );

    let mut subs = Substitutions::new();

    let scaled_value = input.base_value * input.scale_factor;
    require_representable("base_value", input.base_value, "Scaled value", scaled_value)?;
    subs.record(
        "scaled_value",
        Equation::ScaledValue,
        &format!(r"{} \cdot {}", num(input.base_value), num(input.scale_factor)),
        scaled_value,
        "",
    );

    let normalized_value = scaled_value / input.reference_value;
    require_representable("reference_value", input.reference_value, "Normalized value", normalized_value)?;
    subs.record(
        "normalized_value",
        Equation::NormalizedValue,
        &format!(r"\frac{{{}}}{{{}}}", num(scaled_value), num(input.reference_value)),
        normalized_value,
        "",
    );

    let percent_of_reference = 100.0 * scaled_value / input.reference_value;
    require_representable("reference_value", input.reference_value, "Percent of reference", percent_of_reference)?;
    subs.record(
        "percent_of_reference",
        Equation::PercentOfReference,
        &format!(r"100 \cdot \frac{{{}}}{{{}}}", num(scaled_value), num(input.reference_value)),
        percent_of_reference,
        r"\%",
    );

    Ok(SettingsDemoResult {
        scaled_value,
        normalized_value,
        percent_of_reference,
        substitutions: subs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let r = calculate_settings_demo(10.0, 2.0, 5.0).unwrap();
        assert_eq!(r.scaled_value, 20.0);
        assert_eq!(r.normalized_value, 4.0);
        assert_eq!(r.percent_of_reference, 400.0);
        assert_eq!(r.substitutions.len(), 3);
    }

    #[test]
    fn test_negative_reference_allowed() {
        let r = calculate_settings_demo(3.0, 1.0, -6.0).unwrap();
        assert_eq!(r.percent_of_reference, -50.0);
    }

    #[test]
    fn test_zero_reference_rejected() {
        let err = calculate_settings_demo(10.0, 2.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "reference_value");
        assert_eq!(err.reason(), "reference_value must not be zero");
    }

    #[test]
    fn test_overflowing_results_rejected() {
        let err = calculate_settings_demo(1e200, 1e200, 5.0).unwrap_err();
        assert_eq!(err.field(), "base_value");
        assert!(err.reason().starts_with("Scaled value"));

        let err = calculate_settings_demo(1e200, 10.0, 1e-200).unwrap_err();
        assert_eq!(err.field(), "reference_value");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(
            calculate_settings_demo(f64::NAN, 2.0, 5.0).unwrap_err().field(),
            "base_value"
        );
        assert_eq!(
            calculate_settings_demo(1.0, f64::INFINITY, 5.0).unwrap_err().field(),
            "scale_factor"
        );
    }
}
