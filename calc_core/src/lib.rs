//! # calc_core - Engineering Calculation Engine
//!
//! `calc_core` is a set of small, independent engineering calculators: beam
//! bending, bolted joints, NEC wire sizing, and a few simpler formulas
//! (circle geometry, a scaling demo, trapdoor springs, acoustics).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Explained**: Every result field carries a `subst_<field>` string
//!   showing the formula with the numbers substituted
//! - **Fail-Fast**: Inputs are validated before anything is computed
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate_circle_basics, CalculationItem};
//!
//! let circle = calculate_circle_basics(10.0).unwrap();
//! println!("{}", circle.substitutions.get("area_mm2").unwrap());
//!
//! // Or dispatch from JSON
//! let item: CalculationItem = serde_json::from_str(
//!     r#"{ "type": "SettingsDemo", "base_value": 10.0, "scale_factor": 2.0, "reference_value": 5.0 }"#,
//! ).unwrap();
//! let fields = item.evaluate().unwrap().to_field_map().unwrap();
//! assert_eq!(fields["percent_of_reference"], 400.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculators and the [`CalculationItem`] dispatcher
//! - [`sections`] - Cross-section shapes and their properties
//! - [`materials`] - Material library, bolt data and NEC conductor tables
//! - [`equations`] - Formula functions and the equation registry
//! - [`substitution`] - Substituted-equation display strings
//! - [`errors`] - Structured error type

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod sections;
pub mod substitution;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use materials::{Material, MaterialGrade};
pub use sections::{CrossSection, SectionProperties};
pub use substitution::Substitutions;
