//! # Wire Sizing (NEC)
//!
//! Picks the smallest tabulated conductor that carries the load after
//! derating and keeps voltage drop within a limit.
//!
//! ## Procedure
//!
//! 1. Required ampacity = load × 1.25 for continuous loads (210.19(A)(1))
//! 2. For each size, smallest first:
//!    - table ampacity from 310.16 × ambient correction × conductor-count adjustment
//!    - capped at the 240.4(D) small-conductor limit where one applies
//!    - voltage drop V_d = k·K·I·L / CM, with k = 2 (single phase) or √3 (three phase),
//!      L the one-way length in feet and I the actual load current
//! 3. The first size meeting both limits is selected.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::wire_sizing::{calculate, WireSizingInput};
//! use calc_core::materials::WireSize;
//!
//! let input = WireSizingInput::new(20.0, 120.0, 15.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.wire_size, WireSize::Awg10);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::materials::conductors::{ambient_correction_factor, conductor_count_adjustment};
use crate::materials::{ConductorMaterial, InsulationRating, WireSize};
use crate::substitution::{num, Substitutions};

/// Feet per metre
const FT_PER_M: f64 = 3.28084;
/// Continuous loads are sized at 125 %
const CONTINUOUS_LOAD_FACTOR: f64 = 1.25;

pub const DEFAULT_AMBIENT_TEMP_C: f64 = 30.0;
pub const DEFAULT_MAX_VOLTAGE_DROP_PERCENT: f64 = 3.0;

/// Circuit type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    SinglePhase,
    ThreePhase,
}

impl Phase {
    /// Voltage drop multiplier
    pub fn drop_factor(&self) -> f64 {
        match self {
            Phase::SinglePhase => 2.0,
            Phase::ThreePhase => 3f64.sqrt(),
        }
    }
}

fn default_material() -> ConductorMaterial {
    ConductorMaterial::Copper
}

fn default_insulation() -> InsulationRating {
    InsulationRating::C75
}

fn default_ambient_temp_c() -> f64 {
    DEFAULT_AMBIENT_TEMP_C
}

fn default_conductor_count() -> u32 {
    3
}

fn default_max_voltage_drop_percent() -> f64 {
    DEFAULT_MAX_VOLTAGE_DROP_PERCENT
}

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pump feeder",
///   "load_current_a": 42.0,
///   "voltage_v": 480.0,
///   "length_m": 60.0,
///   "phase": "ThreePhase",
///   "material": "Aluminum",
///   "insulation": "90C",
///   "ambient_temp_c": 40.0,
///   "continuous": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSizingInput {
    #[serde(default)]
    pub label: String,

    /// Load current (A)
    pub load_current_a: f64,

    /// System voltage (V)
    pub voltage_v: f64,

    /// One-way circuit length (m)
    pub length_m: f64,

    #[serde(default)]
    pub phase: Phase,

    #[serde(default = "default_material")]
    pub material: ConductorMaterial,

    #[serde(default = "default_insulation")]
    pub insulation: InsulationRating,

    #[serde(default = "default_ambient_temp_c")]
    pub ambient_temp_c: f64,

    /// Current-carrying conductors in the raceway or cable
    #[serde(default = "default_conductor_count")]
    pub conductor_count: u32,

    /// Load runs three hours or more
    #[serde(default)]
    pub continuous: bool,

    #[serde(default = "default_max_voltage_drop_percent")]
    pub max_voltage_drop_percent: f64,
}

impl WireSizingInput {
    /// Single-phase copper 75 °C circuit at 30 °C with default limits
    pub fn new(load_current_a: f64, voltage_v: f64, length_m: f64) -> Self {
        WireSizingInput {
            label: String::new(),
            load_current_a,
            voltage_v,
            length_m,
            phase: Phase::default(),
            material: default_material(),
            insulation: default_insulation(),
            ambient_temp_c: DEFAULT_AMBIENT_TEMP_C,
            conductor_count: default_conductor_count(),
            continuous: false,
            max_voltage_drop_percent: DEFAULT_MAX_VOLTAGE_DROP_PERCENT,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_current_a", self.load_current_a)?;
        require_positive("voltage_v", self.voltage_v)?;
        require_positive("length_m", self.length_m)?;
        require_finite("ambient_temp_c", self.ambient_temp_c)?;
        if self.conductor_count == 0 {
            return Err(CalcError::invalid_input(
                "conductor_count",
                "0",
                "conductor_count must be at least 1",
            ));
        }
        require_positive("max_voltage_drop_percent", self.max_voltage_drop_percent)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSizingResult {
    pub wire_size: WireSize,
    pub circular_mils: f64,
    pub conductor_area_mm2: f64,

    // === Ampacity ===
    pub required_ampacity_a: f64,
    pub table_ampacity_a: f64,
    pub ambient_correction: f64,
    pub conductor_count_adjustment: f64,
    /// Table ampacity after correction, capped by 240.4(D)
    pub derated_ampacity_a: f64,

    // === Voltage drop ===
    pub voltage_drop_v: f64,
    pub voltage_drop_percent: f64,

    /// A smaller size had enough ampacity but too much voltage drop
    pub governed_by_voltage_drop: bool,

    #[serde(flatten)]
    pub substitutions: Substitutions,
}

pub fn calculate(input: &WireSizingInput) -> CalcResult<WireSizingResult> {
    input.validate()?;
    let kt = ambient_correction_factor(input.ambient_temp_c, input.insulation)?;
    let kn = conductor_count_adjustment(input.conductor_count);

    debug!(
        "Wire sizing: {} A at {} V, {} m, {:?} {} {:?}",
        input.load_current_a,
        input.voltage_v,
        input.length_m,
        input.phase,
        input.material.display_name(),
        input.insulation
    );

    let load_factor = if input.continuous { CONTINUOUS_LOAD_FACTOR } else { 1.0 };
    let required_ampacity_a = input.load_current_a * load_factor;
    let length_ft = input.length_m * FT_PER_M;
    let k = input.material.resistivity_k();
    let drop_factor = input.phase.drop_factor();

    let mut ampacity_ok_seen = false;

    for size in WireSize::all() {
        let Some(table_ampacity_a) = size.ampacity(input.material, input.insulation) else {
            continue;
        };
        let mut derated_ampacity_a = table_ampacity_a * kt * kn;
        if let Some(limit) = size.small_conductor_limit(input.material) {
            derated_ampacity_a = derated_ampacity_a.min(limit);
        }
        if derated_ampacity_a < required_ampacity_a {
            trace!("{}: {:.1} A < {:.1} A required", size.label(), derated_ampacity_a, required_ampacity_a);
            continue;
        }

        let cm = size.circular_mils();
        let voltage_drop_v = drop_factor * k * input.load_current_a * length_ft / cm;
        let voltage_drop_percent = 100.0 * voltage_drop_v / input.voltage_v;
        if voltage_drop_percent > input.max_voltage_drop_percent {
            trace!("{}: voltage drop {:.2} % too high", size.label(), voltage_drop_percent);
            ampacity_ok_seen = true;
            continue;
        }

        let mut subs = Substitutions::new();
        subs.record(
            "required_ampacity_a",
            Equation::RequiredAmpacity,
            &format!(r"{} \cdot {}", num(load_factor), num(input.load_current_a)),
            required_ampacity_a,
            "A",
        );
        subs.record(
            "derated_ampacity_a",
            Equation::DeratedAmpacity,
            &format!(r"{} \cdot {} \cdot {}", num(table_ampacity_a), num(kt), num(kn)),
            derated_ampacity_a,
            "A",
        );
        let conductor_area_mm2 = size.area_mm2();
        subs.record(
            "conductor_area_mm2",
            Equation::ConductorArea,
            &format!(r"{} \cdot 5.067 \times 10^{{-4}}", num(cm)),
            conductor_area_mm2,
            "mm^2",
        );
        let (drop_eq, factor_text) = match input.phase {
            Phase::SinglePhase => (Equation::VoltageDropSinglePhase, "2".to_string()),
            Phase::ThreePhase => (Equation::VoltageDropThreePhase, r"\sqrt{3}".to_string()),
        };
        subs.record(
            "voltage_drop_v",
            drop_eq,
            &format!(
                r"\frac{{{} \cdot {} \cdot {} \cdot {}}}{{{}}}",
                factor_text,
                num(k),
                num(input.load_current_a),
                num(length_ft),
                num(cm)
            ),
            voltage_drop_v,
            "V",
        );
        subs.record(
            "voltage_drop_percent",
            Equation::VoltageDropPercent,
            &format!(r"100 \cdot \frac{{{}}}{{{}}}", num(voltage_drop_v), num(input.voltage_v)),
            voltage_drop_percent,
            r"\%",
        );

        debug!("Selected {} ({:.2} % drop)", size.label(), voltage_drop_percent);

        return Ok(WireSizingResult {
            wire_size: size,
            circular_mils: cm,
            conductor_area_mm2,
            required_ampacity_a,
            table_ampacity_a,
            ambient_correction: kt,
            conductor_count_adjustment: kn,
            derated_ampacity_a,
            voltage_drop_v,
            voltage_drop_percent,
            governed_by_voltage_drop: ampacity_ok_seen,
            substitutions: subs,
        });
    }

    let reason = if ampacity_ok_seen {
        format!(
            "No tabulated conductor keeps voltage drop within {} %",
            input.max_voltage_drop_percent
        )
    } else {
        "Load exceeds the ampacity of every tabulated conductor".to_string()
    };
    Err(CalcError::out_of_range("load_current_a", input.load_current_a, reason))
}
