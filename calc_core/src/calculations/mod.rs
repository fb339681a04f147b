//! # Calculations
//!
//! Each calculator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with `validate()`
//! - `*Result` - Named numeric results plus flattened `subst_*` strings
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! Validation always runs before any formula, so a call either returns a
//! complete result or an [`CalcError`](crate::errors::CalcError) naming the
//! rejected field.
//!
//! ## Available Calculations
//!
//! - [`beam`] - Beam bending (seven load cases, five section shapes)
//! - [`fastener`] - Preloaded bolted joints (ISO metric)
//! - [`wire_sizing`] - Conductor selection per NEC
//! - [`circle`] - Circle radius, area and circumference
//! - [`settings_demo`] - Scaling and normalization demo
//! - [`trapdoor_spring`] - Counterbalance spring force for a hinged door
//! - [`acoustics`] - Speed of sound, wavelength and distance attenuation

pub mod acoustics;
pub mod beam;
pub mod circle;
pub mod fastener;
pub mod settings_demo;
pub mod trapdoor_spring;
pub mod wire_sizing;

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CalcResult;

// Re-export commonly used types
pub use acoustics::{AcousticsInput, AcousticsResult};
pub use beam::{BeamInput, BeamLoad, BeamResult, LoadCase};
pub use circle::{calculate_circle_basics, CircleInput, CircleResult};
pub use fastener::{FastenerInput, FastenerResult};
pub use settings_demo::{calculate_settings_demo, SettingsDemoInput, SettingsDemoResult};
pub use trapdoor_spring::{TrapdoorSpringInput, TrapdoorSpringResult};
pub use wire_sizing::{Phase, WireSizingInput, WireSizingResult};

/// Enum wrapper for all calculation inputs.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Circle", "label": "Pin", "diameter_mm": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Beam(BeamInput),
    Fastener(FastenerInput),
    WireSizing(WireSizingInput),
    Circle(CircleInput),
    SettingsDemo(SettingsDemoInput),
    TrapdoorSpring(TrapdoorSpringInput),
    Acoustics(AcousticsInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Beam(i) => &i.label,
            CalculationItem::Fastener(i) => &i.label,
            CalculationItem::WireSizing(i) => &i.label,
            CalculationItem::Circle(i) => &i.label,
            CalculationItem::SettingsDemo(i) => &i.label,
            CalculationItem::TrapdoorSpring(i) => &i.label,
            CalculationItem::Acoustics(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Beam(_) => "Beam",
            CalculationItem::Fastener(_) => "Fastener",
            CalculationItem::WireSizing(_) => "WireSizing",
            CalculationItem::Circle(_) => "Circle",
            CalculationItem::SettingsDemo(_) => "SettingsDemo",
            CalculationItem::TrapdoorSpring(_) => "TrapdoorSpring",
            CalculationItem::Acoustics(_) => "Acoustics",
        }
    }

    /// Run the calculation
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        debug!("Evaluating {} '{}'", self.calc_type(), self.label());
        Ok(match self {
            CalculationItem::Beam(i) => CalculationOutput::Beam(beam::calculate(i)?),
            CalculationItem::Fastener(i) => CalculationOutput::Fastener(fastener::calculate(i)?),
            CalculationItem::WireSizing(i) => CalculationOutput::WireSizing(wire_sizing::calculate(i)?),
            CalculationItem::Circle(i) => CalculationOutput::Circle(circle::calculate(i)?),
            CalculationItem::SettingsDemo(i) => CalculationOutput::SettingsDemo(settings_demo::calculate(i)?),
            CalculationItem::TrapdoorSpring(i) => {
                CalculationOutput::TrapdoorSpring(trapdoor_spring::calculate(i)?)
            }
            CalculationItem::Acoustics(i) => CalculationOutput::Acoustics(acoustics::calculate(i)?),
        })
    }
}

/// Result of [`CalculationItem::evaluate`], same variant names as the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Beam(BeamResult),
    Fastener(FastenerResult),
    WireSizing(WireSizingResult),
    Circle(CircleResult),
    SettingsDemo(SettingsDemoResult),
    TrapdoorSpring(TrapdoorSpringResult),
    Acoustics(AcousticsResult),
}

impl CalculationOutput {
    /// Flat name → value map: numeric fields next to their `subst_*` strings.
    pub fn to_field_map(&self) -> serde_json::Result<BTreeMap<String, Value>> {
        let value = match self {
            CalculationOutput::Beam(r) => serde_json::to_value(r)?,
            CalculationOutput::Fastener(r) => serde_json::to_value(r)?,
            CalculationOutput::WireSizing(r) => serde_json::to_value(r)?,
            CalculationOutput::Circle(r) => serde_json::to_value(r)?,
            CalculationOutput::SettingsDemo(r) => serde_json::to_value(r)?,
            CalculationOutput::TrapdoorSpring(r) => serde_json::to_value(r)?,
            CalculationOutput::Acoustics(r) => serde_json::to_value(r)?,
        };
        Ok(match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        })
    }
}

/// See [`CalculationOutput::to_field_map`].
pub fn to_field_map(output: &CalculationOutput) -> serde_json::Result<BTreeMap<String, Value>> {
    output.to_field_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_json() {
        let json = r#"{ "type": "SettingsDemo", "base_value": 10.0, "scale_factor": 2.0, "reference_value": 5.0 }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "SettingsDemo");
        match item.evaluate().unwrap() {
            CalculationOutput::SettingsDemo(r) => assert_eq!(r.percent_of_reference, 400.0),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_field_map_is_flat() {
        let item = CalculationItem::Circle(CircleInput {
            label: "Pin".to_string(),
            diameter_mm: 10.0,
        });
        let map = item.evaluate().unwrap().to_field_map().unwrap();
        assert_eq!(map.len(), 6);
        assert!(map["area_mm2"].is_f64());
        assert!(map["subst_area_mm2"].is_string());
        assert!(!map.contains_key("type"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{ "type": "Column", "label": "C-1" }"#;
        assert!(serde_json::from_str::<CalculationItem>(json).is_err());
    }

    #[test]
    fn test_error_propagates() {
        let item = CalculationItem::Circle(CircleInput {
            label: String::new(),
            diameter_mm: -1.0,
        });
        assert_eq!(item.evaluate().unwrap_err().field(), "diameter_mm");
    }
}
