//! Structural Material Library
//!
//! Reference values for common structural metals and timber.
//!
//! - Steels and aluminum: allowable bending stress 0.6·Fy (ASD basis).
//! - Timber: allowable = characteristic bending strength × k_mod / γ_M
//!   with k_mod = 0.8, γ_M = 1.3 (EN 1995-1-1, medium-term, service class 1).
//!
//! The name index used by [`MaterialGrade::from_str_flexible`] is built once
//! on first use and is read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Library material grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialGrade {
    /// ASTM A36 carbon steel
    #[serde(rename = "A36")]
    A36,
    /// ASTM A992 wide-flange steel
    #[serde(rename = "A992")]
    A992,
    /// EN 10025 S275
    #[serde(rename = "S275")]
    S275,
    /// EN 10025 S355
    #[serde(rename = "S355")]
    S355,
    /// Austenitic stainless 304
    #[serde(rename = "SS304")]
    Stainless304,
    /// Aluminum 6061-T6
    #[serde(rename = "6061-T6")]
    Aluminum6061T6,
    /// Aluminum 6063-T5
    #[serde(rename = "6063-T5")]
    Aluminum6063T5,
    /// Titanium Grade 5
    #[serde(rename = "Ti-6Al-4V")]
    Ti6Al4V,
    /// EN 338 C24 softwood
    #[serde(rename = "C24")]
    TimberC24,
    /// EN 14080 GL24h glulam
    #[serde(rename = "GL24h")]
    GlulamGL24h,
}

/// Reference properties for one grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Modulus of elasticity E (GPa)
    pub e_gpa: f64,
    /// Yield (metals) or characteristic bending (timber) strength (MPa)
    pub yield_strength_mpa: f64,
    /// Allowable bending stress (MPa)
    pub allowable_stress_mpa: f64,
}

impl MaterialGrade {
    /// All grades, in display order
    pub const ALL: [MaterialGrade; 10] = [
        MaterialGrade::A36,
        MaterialGrade::A992,
        MaterialGrade::S275,
        MaterialGrade::S355,
        MaterialGrade::Stainless304,
        MaterialGrade::Aluminum6061T6,
        MaterialGrade::Aluminum6063T5,
        MaterialGrade::Ti6Al4V,
        MaterialGrade::TimberC24,
        MaterialGrade::GlulamGL24h,
    ];

    /// Short code (matches the serialized name)
    pub fn code(&self) -> &'static str {
        match self {
            MaterialGrade::A36 => "A36",
            MaterialGrade::A992 => "A992",
            MaterialGrade::S275 => "S275",
            MaterialGrade::S355 => "S355",
            MaterialGrade::Stainless304 => "SS304",
            MaterialGrade::Aluminum6061T6 => "6061-T6",
            MaterialGrade::Aluminum6063T5 => "6063-T5",
            MaterialGrade::Ti6Al4V => "Ti-6Al-4V",
            MaterialGrade::TimberC24 => "C24",
            MaterialGrade::GlulamGL24h => "GL24h",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialGrade::A36 => "ASTM A36 Steel",
            MaterialGrade::A992 => "ASTM A992 Steel",
            MaterialGrade::S275 => "S275 Structural Steel",
            MaterialGrade::S355 => "S355 Structural Steel",
            MaterialGrade::Stainless304 => "Stainless Steel 304",
            MaterialGrade::Aluminum6061T6 => "Aluminum 6061-T6",
            MaterialGrade::Aluminum6063T5 => "Aluminum 6063-T5",
            MaterialGrade::Ti6Al4V => "Titanium Ti-6Al-4V",
            MaterialGrade::TimberC24 => "Softwood C24",
            MaterialGrade::GlulamGL24h => "Glulam GL24h",
        }
    }

    /// Reference properties for this grade
    pub fn properties(&self) -> MaterialProperties {
        let (e_gpa, yield_strength_mpa, allowable_stress_mpa) = match self {
            MaterialGrade::A36 => (200.0, 250.0, 150.0),
            MaterialGrade::A992 => (200.0, 345.0, 207.0),
            MaterialGrade::S275 => (210.0, 275.0, 165.0),
            MaterialGrade::S355 => (210.0, 355.0, 213.0),
            MaterialGrade::Stainless304 => (193.0, 215.0, 129.0),
            MaterialGrade::Aluminum6061T6 => (68.9, 276.0, 165.6),
            MaterialGrade::Aluminum6063T5 => (68.9, 145.0, 87.0),
            MaterialGrade::Ti6Al4V => (113.8, 880.0, 528.0),
            MaterialGrade::TimberC24 => (11.0, 24.0, 14.77),
            MaterialGrade::GlulamGL24h => (11.5, 24.0, 14.77),
        };
        MaterialProperties {
            e_gpa,
            yield_strength_mpa,
            allowable_stress_mpa,
        }
    }

    /// Parse from a code or display name, case-insensitively
    /// ("a36", "S355", "6061-t6", "Aluminum 6061-T6", ...).
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        GRADE_INDEX
            .get(&normalize(s))
            .copied()
            .ok_or_else(|| {
                let codes: Vec<&str> = MaterialGrade::ALL.iter().map(|g| g.code()).collect();
                CalcError::unknown_option("material", s, &codes)
            })
    }
}

impl std::fmt::Display for MaterialGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace([' ', '_'], "-")
}

static GRADE_INDEX: Lazy<HashMap<String, MaterialGrade>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for grade in MaterialGrade::ALL {
        index.insert(normalize(grade.code()), grade);
        index.insert(normalize(grade.display_name()), grade);
    }
    // Common aliases
    index.insert(normalize("304"), MaterialGrade::Stainless304);
    index.insert(normalize("6061"), MaterialGrade::Aluminum6061T6);
    index.insert(normalize("6063"), MaterialGrade::Aluminum6063T5);
    index.insert(normalize("Grade 5"), MaterialGrade::Ti6Al4V);
    index
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_name() {
        assert_eq!(MaterialGrade::from_str_flexible("a36").unwrap(), MaterialGrade::A36);
        assert_eq!(
            MaterialGrade::from_str_flexible("Aluminum 6061-T6").unwrap(),
            MaterialGrade::Aluminum6061T6
        );
        assert_eq!(MaterialGrade::from_str_flexible(" gl24h ").unwrap(), MaterialGrade::GlulamGL24h);
        assert_eq!(MaterialGrade::from_str_flexible("304").unwrap(), MaterialGrade::Stainless304);
    }

    #[test]
    fn test_unknown_grade() {
        let err = MaterialGrade::from_str_flexible("unobtainium").unwrap_err();
        assert_eq!(err.field(), "material");
        assert!(err.reason().contains("S355"));
    }

    #[test]
    fn test_every_grade_round_trips_through_index() {
        for grade in MaterialGrade::ALL {
            assert_eq!(MaterialGrade::from_str_flexible(grade.code()).unwrap(), grade);
            let props = grade.properties();
            assert!(props.e_gpa > 0.0);
            assert!(props.allowable_stress_mpa > 0.0);
            assert!(props.allowable_stress_mpa < props.yield_strength_mpa);
        }
    }

    #[test]
    fn test_serde_codes_match_code() {
        for grade in MaterialGrade::ALL {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.code()));
        }
    }

    #[test]
    fn test_steel_allowable_is_sixty_percent_of_yield() {
        let props = MaterialGrade::A36.properties();
        assert!((props.allowable_stress_mpa - 0.6 * props.yield_strength_mpa).abs() < 1e-9);
    }
}
