//! # Acoustics
//!
//! Free-field propagation of a tone from a point source: speed of sound,
//! wavelength, period and inverse-square (spherical spreading) attenuation.
//! Air absorption and ground effects are ignored.
//!
//! Also provides [`spl_from_pressure`] and [`sum_levels`] for working with
//! decibel levels directly.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_finite, require_positive, require_representable, CalcError, CalcResult};
use crate::substitution::{num, Substitutions};

/// Speed of sound in dry air at 0 °C (m/s)
pub const SPEED_OF_SOUND_0C: f64 = 331.3;
/// 0 °C in kelvin
pub const ZERO_CELSIUS_K: f64 = 273.15;
/// Reference RMS pressure for SPL in air, 20 µPa
pub const REFERENCE_PRESSURE_PA: f64 = 20e-6;

pub const DEFAULT_AIR_TEMP_C: f64 = 20.0;

fn default_air_temp_c() -> f64 {
    DEFAULT_AIR_TEMP_C
}

fn default_reference_distance_m() -> f64 {
    1.0
}

/// ## JSON Example
///
/// ```json
/// { "frequency_hz": 1000.0, "source_level_db": 94.0, "listener_distance_m": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticsInput {
    #[serde(default)]
    pub label: String,

    pub frequency_hz: f64,

    #[serde(default = "default_air_temp_c")]
    pub air_temp_c: f64,

    /// SPL measured at the reference distance (dB)
    pub source_level_db: f64,

    #[serde(default = "default_reference_distance_m")]
    pub reference_distance_m: f64,

    pub listener_distance_m: f64,
}

impl AcousticsInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("frequency_hz", self.frequency_hz)?;
        require_finite("air_temp_c", self.air_temp_c)?;
        if self.air_temp_c <= -ZERO_CELSIUS_K {
            return Err(CalcError::out_of_range(
                "air_temp_c",
                self.air_temp_c,
                "Temperature must be above absolute zero",
            ));
        }
        require_finite("source_level_db", self.source_level_db)?;
        require_positive("reference_distance_m", self.reference_distance_m)?;
        require_positive("listener_distance_m", self.listener_distance_m)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticsResult {
    pub speed_of_sound_m_s: f64,
    pub wavelength_m: f64,
    pub period_ms: f64,
    /// Negative when the listener is closer than the reference distance
    pub distance_attenuation_db: f64,
    pub level_at_listener_db: f64,
    #[serde(flatten)]
    pub substitutions: Substitutions,
}

pub fn calculate(input: &AcousticsInput) -> CalcResult<AcousticsResult> {
    input.validate()?;
    debug!(
        "Acoustics: f = {} Hz, T = {} °C, L1 = {} dB at {} m, r2 = {} m",
        input.frequency_hz,
        input.air_temp_c,
        input.source_level_db,
        input.reference_distance_m,
        input.listener_distance_m
    );

    let mut subs = Substitutions::new();

    let speed_of_sound_m_s = speed_of_sound(input.air_temp_c);
    subs.record(
        "speed_of_sound_m_s",
        Equation::SpeedOfSound,
        &format!(r"331.3 \sqrt{{1 + \frac{{{}}}{{273.15}}}}", num(input.air_temp_c)),
        speed_of_sound_m_s,
        "m/s",
    );

    let wavelength_m = speed_of_sound_m_s / input.frequency_hz;
    require_representable("frequency_hz", input.frequency_hz, "Wavelength", wavelength_m)?;
    subs.record(
        "wavelength_m",
        Equation::Wavelength,
        &format!(r"\frac{{{}}}{{{}}}", num(speed_of_sound_m_s), num(input.frequency_hz)),
        wavelength_m,
        "m",
    );

    let period_ms = 1000.0 / input.frequency_hz;
    require_representable("frequency_hz", input.frequency_hz, "Period", period_ms)?;
    subs.record(
        "period_ms",
        Equation::Period,
        &format!(r"\frac{{1000}}{{{}}}", num(input.frequency_hz)),
        period_ms,
        "ms",
    );

    let distance_attenuation_db = 20.0 * (input.listener_distance_m / input.reference_distance_m).log10();
    require_representable(
        "listener_distance_m",
        input.listener_distance_m,
        "Distance attenuation",
        distance_attenuation_db,
    )?;
    subs.record(
        "distance_attenuation_db",
        Equation::DistanceAttenuation,
        &format!(
            r"20 \log_{{10}}\frac{{{}}}{{{}}}",
            num(input.listener_distance_m),
            num(input.reference_distance_m)
        ),
        distance_attenuation_db,
        "dB",
    );

    let level_at_listener_db = input.source_level_db - distance_attenuation_db;
    require_representable("source_level_db", input.source_level_db, "Level at listener", level_at_listener_db)?;
    subs.record(
        "level_at_listener_db",
        Equation::LevelAtDistance,
        &format!(r"{} - {}", num(input.source_level_db), num(distance_attenuation_db)),
        level_at_listener_db,
        "dB",
    );
    trace!(
        "c = {} m/s, lambda = {} m, attenuation = {} dB",
        speed_of_sound_m_s,
        wavelength_m,
        distance_attenuation_db
    );

    Ok(AcousticsResult {
        speed_of_sound_m_s,
        wavelength_m,
        period_ms,
        distance_attenuation_db,
        level_at_listener_db,
        substitutions: subs,
    })
}

/// Speed of sound in dry air (m/s) at `air_temp_c`
pub fn speed_of_sound(air_temp_c: f64) -> f64 {
    SPEED_OF_SOUND_0C * (1.0 + air_temp_c / ZERO_CELSIUS_K).sqrt()
}

/// Sound pressure level (dB re 20 µPa) of an RMS pressure in pascals
pub fn spl_from_pressure(pressure_pa: f64) -> CalcResult<f64> {
    require_positive("pressure_pa", pressure_pa)?;
    Ok(20.0 * (pressure_pa / REFERENCE_PRESSURE_PA).log10())
}

/// Combined level of incoherent sources, 10·log10(Σ 10^(Lᵢ/10))
pub fn sum_levels(levels_db: &[f64]) -> CalcResult<f64> {
    if levels_db.is_empty() {
        return Err(CalcError::invalid_input(
            "levels_db",
            "[]",
            "At least one level is required",
        ));
    }
    for level in levels_db {
        require_finite("levels_db", *level)?;
    }
    let energy: f64 = levels_db.iter().map(|l| 10f64.powf(l / 10.0)).sum();
    let total = 10.0 * energy.log10();
    let loudest = levels_db.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    require_representable("levels_db", loudest, "Combined level", total)?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn tone() -> AcousticsInput {
        AcousticsInput {
            label: String::new(),
            frequency_hz: 1000.0,
            air_temp_c: 20.0,
            source_level_db: 94.0,
            reference_distance_m: 1.0,
            listener_distance_m: 10.0,
        }
    }

    #[test]
    fn test_speed_of_sound() {
        assert_eq!(speed_of_sound(0.0), 331.3);
        assert!(approx_eq(speed_of_sound(20.0), 343.21, 0.01));
    }

    #[test]
    fn test_tone_at_ten_metres() {
        let r = calculate(&tone()).unwrap();
        assert!(approx_eq(r.wavelength_m, 0.34321, 1e-4));
        assert_eq!(r.period_ms, 1.0);
        assert!(approx_eq(r.distance_attenuation_db, 20.0, 1e-12));
        assert!(approx_eq(r.level_at_listener_db, 74.0, 1e-12));
    }

    #[test]
    fn test_doubling_distance_loses_six_db() {
        let mut input = tone();
        input.listener_distance_m = 2.0;
        let r = calculate(&input).unwrap();
        assert!(approx_eq(r.distance_attenuation_db, 6.0206, 1e-4));
    }

    #[test]
    fn test_spl_from_pressure() {
        // 1 Pa ≈ 93.98 dB SPL
        assert!(approx_eq(spl_from_pressure(1.0).unwrap(), 93.979, 1e-3));
        assert!(approx_eq(spl_from_pressure(20e-6).unwrap(), 0.0, 1e-9));
        assert!(spl_from_pressure(0.0).is_err());
    }

    #[test]
    fn test_sum_levels() {
        // Two equal sources add 3 dB
        assert!(approx_eq(sum_levels(&[80.0, 80.0]).unwrap(), 83.0103, 1e-4));
        assert!(approx_eq(sum_levels(&[70.0]).unwrap(), 70.0, 1e-9));
        assert_eq!(sum_levels(&[]).unwrap_err().field(), "levels_db");
    }

    #[test]
    fn test_unrepresentable_results_rejected() {
        let mut input = tone();
        input.frequency_hz = 1e-320;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), "frequency_hz");
        assert!(err.reason().starts_with("Wavelength"));

        let mut input = tone();
        input.reference_distance_m = 1e-300;
        input.listener_distance_m = 1e300;
        assert_eq!(calculate(&input).unwrap_err().field(), "listener_distance_m");

        assert_eq!(sum_levels(&[4000.0, 80.0]).unwrap_err().field(), "levels_db");
    }

    #[test]
    fn test_validation() {
        let mut input = tone();
        input.frequency_hz = 0.0;
        assert_eq!(calculate(&input).unwrap_err().field(), "frequency_hz");

        let mut input = tone();
        input.air_temp_c = -300.0;
        assert_eq!(calculate(&input).unwrap_err().field(), "air_temp_c");

        let mut input = tone();
        input.listener_distance_m = -1.0;
        assert_eq!(calculate(&input).unwrap_err().field(), "listener_distance_m");
    }
}
