//! # Materials and Reference Tables
//!
//! Read-only lookup data used by the calculators.
//!
//! - [`library`] - Structural material grades (E, yield, allowable stress)
//! - [`bolts`] - ISO metric bolt sizes and ISO 898-1 property classes
//! - [`conductors`] - NEC conductor sizes, ampacities and correction factors
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{Material, MaterialGrade};
//!
//! // Library material
//! let steel = Material::standard(MaterialGrade::S355);
//! let props = steel.resolve().unwrap();
//! println!("E = {} GPa, allowable = {} MPa", props.e_gpa, props.allowable_stress_mpa);
//!
//! // Looked up by name
//! let aluminum = Material::from_name("6061-T6").unwrap();
//! assert_eq!(aluminum, Material::standard(MaterialGrade::Aluminum6061T6));
//! ```

pub mod bolts;
pub mod conductors;
pub mod library;

pub use bolts::{BoltSize, PropertyClass};
pub use conductors::{ConductorMaterial, InsulationRating, WireSize};
pub use library::{MaterialGrade, MaterialProperties};

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// A fully-specified material not in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMaterial {
    /// Display name
    pub name: String,
    /// Modulus of elasticity E (GPa)
    pub e_gpa: f64,
    /// Allowable bending stress (MPa)
    pub allowable_stress_mpa: f64,
    /// Yield strength (MPa); defaults to the allowable stress when omitted
    #[serde(default)]
    pub yield_strength_mpa: Option<f64>,
}

/// Material for a calculation: a library grade or a custom definition.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Standard", "grade": "S355" }
/// { "type": "Custom", "name": "Oak", "e_gpa": 12.0, "allowable_stress_mpa": 18.0 }
/// ```
///
/// The grade is matched the same way as [`MaterialGrade::from_str_flexible`],
/// so `"a36"` or `"Aluminum 6061-T6"` are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Library grade
    Standard {
        #[serde(deserialize_with = "deserialize_grade")]
        grade: MaterialGrade,
    },
    /// User-supplied constants
    Custom(CustomMaterial),
}

impl Material {
    /// Library material
    pub fn standard(grade: MaterialGrade) -> Self {
        Material::Standard { grade }
    }

    /// Custom material with the given constants
    pub fn custom(name: impl Into<String>, e_gpa: f64, allowable_stress_mpa: f64) -> Self {
        Material::Custom(CustomMaterial {
            name: name.into(),
            e_gpa,
            allowable_stress_mpa,
            yield_strength_mpa: None,
        })
    }

    /// Look up a library material by code or display name.
    pub fn from_name(name: &str) -> CalcResult<Self> {
        MaterialGrade::from_str_flexible(name).map(Material::standard)
    }

    /// Validate and return the constants used by calculations.
    pub fn resolve(&self) -> CalcResult<MaterialProperties> {
        match self {
            Material::Standard { grade } => Ok(grade.properties()),
            Material::Custom(custom) => {
                if custom.name.trim().is_empty() {
                    return Err(CalcError::invalid_input(
                        "material.name",
                        "",
                        "Custom material needs a name",
                    ));
                }
                require_positive("material.e_gpa", custom.e_gpa)?;
                require_positive("material.allowable_stress_mpa", custom.allowable_stress_mpa)?;
                if let Some(fy) = custom.yield_strength_mpa {
                    require_positive("material.yield_strength_mpa", fy)?;
                }
                Ok(MaterialProperties {
                    e_gpa: custom.e_gpa,
                    yield_strength_mpa: custom.yield_strength_mpa.unwrap_or(custom.allowable_stress_mpa),
                    allowable_stress_mpa: custom.allowable_stress_mpa,
                })
            }
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Standard { grade } => grade.display_name().to_string(),
            Material::Custom(custom) => custom.name.clone(),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::standard(MaterialGrade::A36)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn deserialize_grade<'de, D>(deserializer: D) -> Result<MaterialGrade, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    MaterialGrade::from_str_flexible(&name).map_err(serde::de::Error::custom)
}

impl From<MaterialGrade> for Material {
    fn from(grade: MaterialGrade) -> Self {
        Material::standard(grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_material_resolves() {
        let props = Material::standard(MaterialGrade::A992).resolve().unwrap();
        assert_eq!(props.e_gpa, 200.0);
        assert_eq!(props.allowable_stress_mpa, 207.0);
    }

    #[test]
    fn test_custom_material_validation() {
        let bad = Material::custom("Mystery", 0.0, 100.0);
        assert_eq!(bad.resolve().unwrap_err().field(), "material.e_gpa");

        let bad = Material::custom("Mystery", 70.0, -1.0);
        assert_eq!(bad.resolve().unwrap_err().field(), "material.allowable_stress_mpa");

        let good = Material::custom("Oak", 12.0, 18.0).resolve().unwrap();
        assert_eq!(good.yield_strength_mpa, 18.0);
    }

    #[test]
    fn test_material_json() {
        let json = r#"{ "type": "Standard", "grade": "6061-T6" }"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        assert_eq!(mat, Material::standard(MaterialGrade::Aluminum6061T6));

        let json = r#"{ "type": "Custom", "name": "Oak", "e_gpa": 12.0, "allowable_stress_mpa": 18.0 }"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        assert_eq!(mat.display_name(), "Oak");
    }

    #[test]
    fn test_material_json_grade_is_case_insensitive() {
        for name in ["a36", "A36", " a36 ", "ASTM A36 Steel"] {
            let json = format!(r#"{{ "type": "Standard", "grade": "{}" }}"#, name);
            let mat: Material = serde_json::from_str(&json).unwrap();
            assert_eq!(mat, Material::standard(MaterialGrade::A36), "{}", name);
        }
        let mat: Material = serde_json::from_str(r#"{ "type": "Standard", "grade": "304" }"#).unwrap();
        assert_eq!(mat, Material::standard(MaterialGrade::Stainless304));

        let err = serde_json::from_str::<Material>(r#"{ "type": "Standard", "grade": "balsa" }"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("balsa"), "{}", msg);
        assert!(msg.contains("S355"), "{}", msg);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Material::from_name("s355").unwrap(), MaterialGrade::S355.into());
        assert!(Material::from_name("balsa").is_err());
    }
}
