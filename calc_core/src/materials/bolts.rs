//! ISO Metric Bolts
//!
//! Coarse-thread sizes M5-M36 (ISO 261 / ISO 898-1 Table 4 stress areas) and
//! property classes per ISO 898-1 Table 3. Class 8.8 uses the d ≤ 16 mm values
//! up to M16 and the d > 16 mm values above.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// ISO metric coarse-thread bolt size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltSize {
    M5,
    M6,
    M8,
    M10,
    M12,
    M14,
    M16,
    M20,
    M22,
    M24,
    M27,
    M30,
    M36,
}

/// Thread geometry for one size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltGeometry {
    /// Nominal diameter d (mm)
    pub nominal_diameter_mm: f64,
    /// Coarse thread pitch P (mm)
    pub pitch_mm: f64,
    /// Tensile stress area A_t (mm²)
    pub tensile_stress_area_mm2: f64,
}

const fn geometry(d: f64, pitch: f64, area: f64) -> BoltGeometry {
    BoltGeometry {
        nominal_diameter_mm: d,
        pitch_mm: pitch,
        tensile_stress_area_mm2: area,
    }
}

impl BoltSize {
    /// All sizes, smallest first
    pub const ALL: [BoltSize; 13] = [
        BoltSize::M5,
        BoltSize::M6,
        BoltSize::M8,
        BoltSize::M10,
        BoltSize::M12,
        BoltSize::M14,
        BoltSize::M16,
        BoltSize::M20,
        BoltSize::M22,
        BoltSize::M24,
        BoltSize::M27,
        BoltSize::M30,
        BoltSize::M36,
    ];

    /// Thread geometry
    pub fn geometry(&self) -> BoltGeometry {
        match self {
            BoltSize::M5 => geometry(5.0, 0.8, 14.2),
            BoltSize::M6 => geometry(6.0, 1.0, 20.1),
            BoltSize::M8 => geometry(8.0, 1.25, 36.6),
            BoltSize::M10 => geometry(10.0, 1.5, 58.0),
            BoltSize::M12 => geometry(12.0, 1.75, 84.3),
            BoltSize::M14 => geometry(14.0, 2.0, 115.0),
            BoltSize::M16 => geometry(16.0, 2.0, 157.0),
            BoltSize::M20 => geometry(20.0, 2.5, 245.0),
            BoltSize::M22 => geometry(22.0, 2.5, 303.0),
            BoltSize::M24 => geometry(24.0, 3.0, 353.0),
            BoltSize::M27 => geometry(27.0, 3.0, 459.0),
            BoltSize::M30 => geometry(30.0, 3.5, 561.0),
            BoltSize::M36 => geometry(36.0, 4.0, 817.0),
        }
    }

    /// Designation, e.g. "M12"
    pub fn code(&self) -> &'static str {
        match self {
            BoltSize::M5 => "M5",
            BoltSize::M6 => "M6",
            BoltSize::M8 => "M8",
            BoltSize::M10 => "M10",
            BoltSize::M12 => "M12",
            BoltSize::M14 => "M14",
            BoltSize::M16 => "M16",
            BoltSize::M20 => "M20",
            BoltSize::M22 => "M22",
            BoltSize::M24 => "M24",
            BoltSize::M27 => "M27",
            BoltSize::M30 => "M30",
            BoltSize::M36 => "M36",
        }
    }

    /// Parse "M12", "m12" or "12"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let wanted = s.trim().trim_start_matches(['M', 'm']);
        BoltSize::ALL
            .iter()
            .copied()
            .find(|size| &size.code()[1..] == wanted)
            .ok_or_else(|| {
                let codes: Vec<&str> = BoltSize::ALL.iter().map(|b| b.code()).collect();
                CalcError::unknown_option("bolt_size", s, &codes)
            })
    }
}

/// ISO 898-1 property class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyClass {
    #[serde(rename = "4.6")]
    Class4_6,
    #[serde(rename = "5.8")]
    Class5_8,
    #[serde(rename = "8.8")]
    Class8_8,
    #[serde(rename = "10.9")]
    Class10_9,
    #[serde(rename = "12.9")]
    Class12_9,
}

/// Strength values for a class (and size, for 8.8)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStrength {
    /// Proof stress S_p (MPa)
    pub proof_strength_mpa: f64,
    /// Lower yield / 0.2% proof strength (MPa)
    pub yield_strength_mpa: f64,
}

impl PropertyClass {
    pub const ALL: [PropertyClass; 5] = [
        PropertyClass::Class4_6,
        PropertyClass::Class5_8,
        PropertyClass::Class8_8,
        PropertyClass::Class10_9,
        PropertyClass::Class12_9,
    ];

    /// Designation, e.g. "8.8"
    pub fn code(&self) -> &'static str {
        match self {
            PropertyClass::Class4_6 => "4.6",
            PropertyClass::Class5_8 => "5.8",
            PropertyClass::Class8_8 => "8.8",
            PropertyClass::Class10_9 => "10.9",
            PropertyClass::Class12_9 => "12.9",
        }
    }

    /// Strength values for a bolt of this class and size
    pub fn strength(&self, size: BoltSize) -> ClassStrength {
        let (proof, yield_) = match self {
            PropertyClass::Class4_6 => (225.0, 240.0),
            PropertyClass::Class5_8 => (380.0, 420.0),
            PropertyClass::Class8_8 if size.geometry().nominal_diameter_mm <= 16.0 => (580.0, 640.0),
            PropertyClass::Class8_8 => (600.0, 660.0),
            PropertyClass::Class10_9 => (830.0, 940.0),
            PropertyClass::Class12_9 => (970.0, 1100.0),
        };
        ClassStrength {
            proof_strength_mpa: proof,
            yield_strength_mpa: yield_,
        }
    }

    /// Parse "8.8", "10.9", ...
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let wanted = s.trim();
        PropertyClass::ALL
            .iter()
            .copied()
            .find(|class| class.code() == wanted)
            .ok_or_else(|| {
                let codes: Vec<&str> = PropertyClass::ALL.iter().map(|c| c.code()).collect();
                CalcError::unknown_option("property_class", s, &codes)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_areas_increase_with_size() {
        let areas: Vec<f64> = BoltSize::ALL
            .iter()
            .map(|s| s.geometry().tensile_stress_area_mm2)
            .collect();
        assert!(areas.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stress_area_matches_formula() {
        // A_t = π/4 (d - 0.9382P)²
        for size in BoltSize::ALL {
            let g = size.geometry();
            let formula = std::f64::consts::PI / 4.0 * (g.nominal_diameter_mm - 0.9382 * g.pitch_mm).powi(2);
            let rel = (formula - g.tensile_stress_area_mm2).abs() / g.tensile_stress_area_mm2;
            assert!(rel < 0.01, "{}: table {} vs formula {}", size.code(), g.tensile_stress_area_mm2, formula);
        }
    }

    #[test]
    fn test_class_8_8_switches_above_m16() {
        let small = PropertyClass::Class8_8.strength(BoltSize::M16);
        let large = PropertyClass::Class8_8.strength(BoltSize::M20);
        assert_eq!(small.proof_strength_mpa, 580.0);
        assert_eq!(large.proof_strength_mpa, 600.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(BoltSize::from_str_flexible("m12").unwrap(), BoltSize::M12);
        assert_eq!(BoltSize::from_str_flexible("24").unwrap(), BoltSize::M24);
        assert!(BoltSize::from_str_flexible("M13").is_err());
        assert_eq!(PropertyClass::from_str_flexible("10.9").unwrap(), PropertyClass::Class10_9);
        assert_eq!(
            PropertyClass::from_str_flexible("9.9").unwrap_err().field(),
            "property_class"
        );
    }
}
