//! NEC Conductor Tables
//!
//! - Ampacities: NEC Table 310.16 (not more than three current-carrying
//!   conductors in raceway, cable or earth, 30 °C ambient)
//! - Ambient correction: Table 310.15(B)(1)
//! - Adjustment for more than three conductors: Table 310.15(C)(1)
//! - Small conductor overcurrent limits: 240.4(D)
//! - Conductor areas: Chapter 9, Table 8

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Conductor metal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// Resistivity constant K (Ω·cmil/ft) for voltage drop at 75 °C
    pub fn resistivity_k(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 12.9,
            ConductorMaterial::Aluminum => 21.2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminum => "Aluminum",
        }
    }
}

/// Insulation temperature rating column of Table 310.16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationRating {
    /// 60 °C (TW, UF)
    #[serde(rename = "60C")]
    C60,
    /// 75 °C (THW, THWN, XHHW, USE)
    #[serde(rename = "75C")]
    C75,
    /// 90 °C (THHN, XHHW-2, THWN-2)
    #[serde(rename = "90C")]
    C90,
}

impl InsulationRating {
    pub fn celsius(&self) -> f64 {
        match self {
            InsulationRating::C60 => 60.0,
            InsulationRating::C75 => 75.0,
            InsulationRating::C90 => 90.0,
        }
    }

    fn column(&self) -> usize {
        match self {
            InsulationRating::C60 => 0,
            InsulationRating::C75 => 1,
            InsulationRating::C90 => 2,
        }
    }
}

/// Conductor size, AWG or kcmil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WireSize {
    #[serde(rename = "14 AWG")]
    Awg14,
    #[serde(rename = "12 AWG")]
    Awg12,
    #[serde(rename = "10 AWG")]
    Awg10,
    #[serde(rename = "8 AWG")]
    Awg8,
    #[serde(rename = "6 AWG")]
    Awg6,
    #[serde(rename = "4 AWG")]
    Awg4,
    #[serde(rename = "3 AWG")]
    Awg3,
    #[serde(rename = "2 AWG")]
    Awg2,
    #[serde(rename = "1 AWG")]
    Awg1,
    #[serde(rename = "1/0 AWG")]
    Awg1_0,
    #[serde(rename = "2/0 AWG")]
    Awg2_0,
    #[serde(rename = "3/0 AWG")]
    Awg3_0,
    #[serde(rename = "4/0 AWG")]
    Awg4_0,
    #[serde(rename = "250 kcmil")]
    Kcmil250,
    #[serde(rename = "300 kcmil")]
    Kcmil300,
    #[serde(rename = "350 kcmil")]
    Kcmil350,
    #[serde(rename = "400 kcmil")]
    Kcmil400,
    #[serde(rename = "500 kcmil")]
    Kcmil500,
    #[serde(rename = "600 kcmil")]
    Kcmil600,
}

/// One row of Table 310.16: ampacity by [Cu 60, Cu 75, Cu 90, Al 60, Al 75, Al 90].
/// 14 AWG aluminum is not listed.
struct AmpacityRow {
    size: WireSize,
    circular_mils: f64,
    ampacity: [Option<u16>; 6],
}

const fn row(size: WireSize, circular_mils: f64, ampacity: [Option<u16>; 6]) -> AmpacityRow {
    AmpacityRow {
        size,
        circular_mils,
        ampacity,
    }
}

static AMPACITY_TABLE: &[AmpacityRow] = &[
    row(WireSize::Awg14, 4_110.0, [Some(15), Some(20), Some(25), None, None, None]),
    row(WireSize::Awg12, 6_530.0, [Some(20), Some(25), Some(30), Some(15), Some(20), Some(25)]),
    row(WireSize::Awg10, 10_380.0, [Some(30), Some(35), Some(40), Some(25), Some(30), Some(35)]),
    row(WireSize::Awg8, 16_510.0, [Some(40), Some(50), Some(55), Some(35), Some(40), Some(45)]),
    row(WireSize::Awg6, 26_240.0, [Some(55), Some(65), Some(75), Some(40), Some(50), Some(55)]),
    row(WireSize::Awg4, 41_740.0, [Some(70), Some(85), Some(95), Some(55), Some(65), Some(75)]),
    row(WireSize::Awg3, 52_620.0, [Some(85), Some(100), Some(115), Some(65), Some(75), Some(85)]),
    row(WireSize::Awg2, 66_360.0, [Some(95), Some(115), Some(130), Some(75), Some(90), Some(100)]),
    row(WireSize::Awg1, 83_690.0, [Some(110), Some(130), Some(145), Some(85), Some(100), Some(115)]),
    row(WireSize::Awg1_0, 105_600.0, [Some(125), Some(150), Some(170), Some(100), Some(120), Some(135)]),
    row(WireSize::Awg2_0, 133_100.0, [Some(145), Some(175), Some(195), Some(115), Some(135), Some(150)]),
    row(WireSize::Awg3_0, 167_800.0, [Some(165), Some(200), Some(225), Some(130), Some(155), Some(175)]),
    row(WireSize::Awg4_0, 211_600.0, [Some(195), Some(230), Some(260), Some(150), Some(180), Some(205)]),
    row(WireSize::Kcmil250, 250_000.0, [Some(215), Some(255), Some(290), Some(170), Some(205), Some(230)]),
    row(WireSize::Kcmil300, 300_000.0, [Some(240), Some(285), Some(320), Some(195), Some(230), Some(260)]),
    row(WireSize::Kcmil350, 350_000.0, [Some(260), Some(310), Some(350), Some(210), Some(250), Some(280)]),
    row(WireSize::Kcmil400, 400_000.0, [Some(280), Some(335), Some(380), Some(225), Some(270), Some(305)]),
    row(WireSize::Kcmil500, 500_000.0, [Some(320), Some(380), Some(430), Some(260), Some(310), Some(350)]),
    row(WireSize::Kcmil600, 600_000.0, [Some(350), Some(420), Some(475), Some(285), Some(340), Some(385)]),
];

/// mm² per circular mil
const MM2_PER_CMIL: f64 = 5.067_075e-4;

impl WireSize {
    /// Every tabulated size, smallest first
    pub fn all() -> impl Iterator<Item = WireSize> {
        AMPACITY_TABLE.iter().map(|r| r.size)
    }

    fn row(&self) -> &'static AmpacityRow {
        // Table is ordered by enum discriminant
        &AMPACITY_TABLE[*self as usize]
    }

    /// Designation, e.g. "2/0 AWG"
    pub fn label(&self) -> &'static str {
        match self {
            WireSize::Awg14 => "14 AWG",
            WireSize::Awg12 => "12 AWG",
            WireSize::Awg10 => "10 AWG",
            WireSize::Awg8 => "8 AWG",
            WireSize::Awg6 => "6 AWG",
            WireSize::Awg4 => "4 AWG",
            WireSize::Awg3 => "3 AWG",
            WireSize::Awg2 => "2 AWG",
            WireSize::Awg1 => "1 AWG",
            WireSize::Awg1_0 => "1/0 AWG",
            WireSize::Awg2_0 => "2/0 AWG",
            WireSize::Awg3_0 => "3/0 AWG",
            WireSize::Awg4_0 => "4/0 AWG",
            WireSize::Kcmil250 => "250 kcmil",
            WireSize::Kcmil300 => "300 kcmil",
            WireSize::Kcmil350 => "350 kcmil",
            WireSize::Kcmil400 => "400 kcmil",
            WireSize::Kcmil500 => "500 kcmil",
            WireSize::Kcmil600 => "600 kcmil",
        }
    }

    /// Conductor area (circular mils)
    pub fn circular_mils(&self) -> f64 {
        self.row().circular_mils
    }

    /// Conductor area (mm²)
    pub fn area_mm2(&self) -> f64 {
        self.circular_mils() * MM2_PER_CMIL
    }

    /// Table 310.16 ampacity, or None when the size is not listed for the metal
    pub fn ampacity(&self, material: ConductorMaterial, rating: InsulationRating) -> Option<f64> {
        let offset = match material {
            ConductorMaterial::Copper => 0,
            ConductorMaterial::Aluminum => 3,
        };
        self.row().ampacity[offset + rating.column()].map(f64::from)
    }

    /// Overcurrent limit for small conductors per 240.4(D), if any
    pub fn small_conductor_limit(&self, material: ConductorMaterial) -> Option<f64> {
        match (material, self) {
            (ConductorMaterial::Copper, WireSize::Awg14) => Some(15.0),
            (ConductorMaterial::Copper, WireSize::Awg12) => Some(20.0),
            (ConductorMaterial::Copper, WireSize::Awg10) => Some(30.0),
            (ConductorMaterial::Aluminum, WireSize::Awg12) => Some(15.0),
            (ConductorMaterial::Aluminum, WireSize::Awg10) => Some(25.0),
            _ => None,
        }
    }
}

/// Ambient temperature correction rows: (upper bound °C, [60 °C, 75 °C, 90 °C])
static AMBIENT_CORRECTION: &[(f64, [Option<f64>; 3])] = &[
    (10.0, [Some(1.29), Some(1.20), Some(1.15)]),
    (15.0, [Some(1.22), Some(1.15), Some(1.12)]),
    (20.0, [Some(1.15), Some(1.11), Some(1.08)]),
    (25.0, [Some(1.08), Some(1.05), Some(1.04)]),
    (30.0, [Some(1.00), Some(1.00), Some(1.00)]),
    (35.0, [Some(0.91), Some(0.94), Some(0.96)]),
    (40.0, [Some(0.82), Some(0.88), Some(0.91)]),
    (45.0, [Some(0.71), Some(0.82), Some(0.87)]),
    (50.0, [Some(0.58), Some(0.75), Some(0.82)]),
    (55.0, [Some(0.41), Some(0.67), Some(0.76)]),
    (60.0, [None, Some(0.58), Some(0.71)]),
    (65.0, [None, Some(0.47), Some(0.65)]),
    (70.0, [None, Some(0.33), Some(0.58)]),
    (75.0, [None, None, Some(0.50)]),
    (80.0, [None, None, Some(0.41)]),
    (85.0, [None, None, Some(0.29)]),
];

/// Ambient temperature correction factor, Table 310.15(B)(1).
///
/// Fails when the ambient is at or beyond what the insulation tolerates.
pub fn ambient_correction_factor(ambient_c: f64, rating: InsulationRating) -> CalcResult<f64> {
    AMBIENT_CORRECTION
        .iter()
        .find(|(upper, _)| ambient_c <= *upper)
        .and_then(|(_, factors)| factors[rating.column()])
        .ok_or_else(|| {
            CalcError::out_of_range(
                "ambient_temp_c",
                ambient_c,
                format!(
                    "Ambient exceeds the range tabulated for {} °C insulation",
                    rating.celsius()
                ),
            )
        })
}

/// Adjustment factor for more than three current-carrying conductors,
/// Table 310.15(C)(1).
pub fn conductor_count_adjustment(count: u32) -> f64 {
    match count {
        0..=3 => 1.0,
        4..=6 => 0.80,
        7..=9 => 0.70,
        10..=20 => 0.50,
        21..=30 => 0.45,
        31..=40 => 0.40,
        _ => 0.35,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, size) in WireSize::all().enumerate() {
            assert_eq!(size as usize, i);
        }
    }

    #[test]
    fn test_known_ampacities() {
        assert_eq!(WireSize::Awg12.ampacity(ConductorMaterial::Copper, InsulationRating::C75), Some(25.0));
        assert_eq!(WireSize::Awg4_0.ampacity(ConductorMaterial::Aluminum, InsulationRating::C75), Some(180.0));
        assert_eq!(WireSize::Awg14.ampacity(ConductorMaterial::Aluminum, InsulationRating::C90), None);
    }

    #[test]
    fn test_ampacity_monotonic() {
        for material in [ConductorMaterial::Copper, ConductorMaterial::Aluminum] {
            for rating in [InsulationRating::C60, InsulationRating::C75, InsulationRating::C90] {
                let values: Vec<f64> = WireSize::all().filter_map(|s| s.ampacity(material, rating)).collect();
                assert!(values.windows(2).all(|w| w[0] < w[1]), "{:?} {:?}", material, rating);
            }
        }
    }

    #[test]
    fn test_ambient_correction() {
        assert_eq!(ambient_correction_factor(30.0, InsulationRating::C75).unwrap(), 1.0);
        assert_eq!(ambient_correction_factor(40.0, InsulationRating::C90).unwrap(), 0.91);
        assert_eq!(ambient_correction_factor(-5.0, InsulationRating::C60).unwrap(), 1.29);
        assert!(ambient_correction_factor(58.0, InsulationRating::C60).is_err());
        assert!(ambient_correction_factor(90.0, InsulationRating::C90).is_err());
    }

    #[test]
    fn test_conductor_count_adjustment() {
        assert_eq!(conductor_count_adjustment(3), 1.0);
        assert_eq!(conductor_count_adjustment(4), 0.8);
        assert_eq!(conductor_count_adjustment(12), 0.5);
        assert_eq!(conductor_count_adjustment(50), 0.35);
    }

    #[test]
    fn test_area_conversion() {
        // 12 AWG ≈ 3.31 mm²
        assert!((WireSize::Awg12.area_mm2() - 3.31).abs() < 0.01);
    }
}
