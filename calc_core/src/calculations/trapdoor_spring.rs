//! # Trapdoor Counterbalance Springs
//!
//! Spring force needed to hold a hinged door of uniform mass at a given
//! opening angle. The door's weight acts at its mid-length; springs act on a
//! lever arm measured from the hinge.
//!
//! Angle is measured from horizontal (closed = 0°, vertical = 90°).

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::{require_finite, require_positive, require_representable, CalcError, CalcResult};
use crate::substitution::{num, Substitutions};

/// Standard gravity (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

fn default_spring_count() -> u32 {
    1
}

/// ## JSON Example
///
/// ```json
/// {
///   "door_mass_kg": 25.0,
///   "door_length_m": 1.2,
///   "spring_arm_m": 0.15,
///   "opening_angle_deg": 0.0,
///   "spring_count": 2,
///   "spring_travel_mm": 80.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapdoorSpringInput {
    #[serde(default)]
    pub label: String,

    pub door_mass_kg: f64,

    /// Hinge to free edge (m)
    pub door_length_m: f64,

    /// Hinge to spring attachment (m)
    pub spring_arm_m: f64,

    /// 0° (closed, worst case) to 90° (vertical)
    #[serde(default)]
    pub opening_angle_deg: f64,

    #[serde(default = "default_spring_count")]
    pub spring_count: u32,

    /// Spring extension over the working range (mm); enables the rate output
    #[serde(default)]
    pub spring_travel_mm: Option<f64>,
}

impl TrapdoorSpringInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("door_mass_kg", self.door_mass_kg)?;
        require_positive("door_length_m", self.door_length_m)?;
        require_positive("spring_arm_m", self.spring_arm_m)?;
        if self.spring_arm_m > self.door_length_m {
            return Err(CalcError::out_of_range(
                "spring_arm_m",
                self.spring_arm_m,
                "Spring arm cannot be longer than the door",
            ));
        }
        require_finite("opening_angle_deg", self.opening_angle_deg)?;
        if !(0.0..=90.0).contains(&self.opening_angle_deg) {
            return Err(CalcError::out_of_range(
                "opening_angle_deg",
                self.opening_angle_deg,
                "Opening angle must be between 0 and 90 degrees",
            ));
        }
        if self.spring_count == 0 {
            return Err(CalcError::invalid_input(
                "spring_count",
                "0",
                "spring_count must be at least 1",
            ));
        }
        if let Some(travel) = self.spring_travel_mm {
            require_positive("spring_travel_mm", travel)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapdoorSpringResult {
    pub door_weight_n: f64,
    pub hinge_torque_nm: f64,
    /// Force each spring must supply (N)
    pub spring_force_per_spring_n: f64,
    /// Present only when spring travel is given
    pub spring_rate_n_per_mm: Option<f64>,
    #[serde(flatten)]
    pub substitutions: Substitutions,
}

pub fn calculate(input: &TrapdoorSpringInput) -> CalcResult<TrapdoorSpringResult> {
    input.validate()?;
    debug!(
        "Trapdoor: {} kg, L = {} m, arm = {} m, angle = {}°, {} spring(s)",
        input.door_mass_kg, input.door_length_m, input.spring_arm_m, input.opening_angle_deg, input.spring_count
    );

    let mut subs = Substitutions::new();

    let door_weight_n = input.door_mass_kg * STANDARD_GRAVITY;
    require_representable("door_mass_kg", input.door_mass_kg, "Door weight", door_weight_n)?;
    subs.record(
        "door_weight_n",
        Equation::DoorWeight,
        &format!(r"{} \cdot {}", num(input.door_mass_kg), num(STANDARD_GRAVITY)),
        door_weight_n,
        "N",
    );

    let theta = input.opening_angle_deg.to_radians();
    let hinge_torque_nm = door_weight_n * (input.door_length_m / 2.0) * theta.cos();
    require_representable("door_length_m", input.door_length_m, "Hinge torque", hinge_torque_nm)?;
    subs.record(
        "hinge_torque_nm",
        Equation::HingeTorque,
        &format!(
            r"{} \cdot \frac{{{}}}{{2}} \cdot \cos {}^\circ",
            num(door_weight_n),
            num(input.door_length_m),
            num(input.opening_angle_deg)
        ),
        hinge_torque_nm,
        r"N \cdot m",
    );

    let n = f64::from(input.spring_count);
    let spring_force_per_spring_n = hinge_torque_nm / (input.spring_arm_m * n);
    require_representable("spring_arm_m", input.spring_arm_m, "Spring force", spring_force_per_spring_n)?;
    subs.record(
        "spring_force_per_spring_n",
        Equation::SpringForce,
        &format!(
            r"\frac{{{}}}{{{} \cdot {}}}",
            num(hinge_torque_nm),
            num(input.spring_arm_m),
            input.spring_count
        ),
        spring_force_per_spring_n,
        "N",
    );
    trace!("W = {} N, T = {} N·m, F = {} N", door_weight_n, hinge_torque_nm, spring_force_per_spring_n);

    let spring_rate_n_per_mm = match input.spring_travel_mm {
        Some(travel) => {
            let rate = spring_force_per_spring_n / travel;
            require_representable("spring_travel_mm", travel, "Spring rate", rate)?;
            subs.record(
                "spring_rate_n_per_mm",
                Equation::SpringRate,
                &format!(r"\frac{{{}}}{{{}}}", num(spring_force_per_spring_n), num(travel)),
                rate,
                "N/mm",
            );
            Some(rate)
        }
        None => None,
    };

    Ok(TrapdoorSpringResult {
        door_weight_n,
        hinge_torque_nm,
        spring_force_per_spring_n,
        spring_rate_n_per_mm,
        substitutions: subs,
    })
}
