//! # Cross-Sections
//!
//! Shape descriptors for beam analysis. A [`CrossSection`] holds raw
//! dimensions in millimetres; [`CrossSection::properties`] validates them and
//! computes the derived [`SectionProperties`] once.
//!
//! ## JSON Serialization
//!
//! ```json
//! { "shape": "Rectangular", "width_mm": 50.0, "depth_mm": 100.0 }
//! { "shape": "IBeam", "flange_width_mm": 100.0, "depth_mm": 200.0,
//!   "flange_thickness_mm": 8.5, "web_thickness_mm": 5.6 }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::equations::section;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::substitution::{num, Substitutions};

/// Supported cross-section shapes. Dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum CrossSection {
    /// Solid rectangle, bending about the depth axis
    Rectangular { width_mm: f64, depth_mm: f64 },
    /// Solid round bar
    SolidCircular { diameter_mm: f64 },
    /// Round tube
    HollowCircular { outer_diameter_mm: f64, wall_mm: f64 },
    /// Rectangular hollow section with uniform wall
    HollowRectangular { width_mm: f64, depth_mm: f64, wall_mm: f64 },
    /// Doubly-symmetric I-section (no root radii)
    IBeam {
        flange_width_mm: f64,
        depth_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
    },
}

/// Derived geometric properties. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area A (mm²)
    pub area_mm2: f64,
    /// Second moment of area I about the bending axis (mm⁴)
    pub moment_of_inertia_mm4: f64,
    /// Elastic section modulus S = I/c (mm³)
    pub section_modulus_mm3: f64,
    /// Distance from neutral axis to extreme fiber c (mm)
    pub extreme_fiber_mm: f64,
    /// Effective shear area A_v, τ_max = V/A_v (mm²)
    pub shear_area_mm2: f64,
}

impl CrossSection {
    /// Shape name for display and logging
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::SolidCircular { .. } => "Solid Circular",
            CrossSection::HollowCircular { .. } => "Hollow Circular",
            CrossSection::HollowRectangular { .. } => "Hollow Rectangular",
            CrossSection::IBeam { .. } => "I-Beam",
        }
    }

    /// Validate dimensions, including geometric consistency between them.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            CrossSection::Rectangular { width_mm, depth_mm } => {
                require_positive("width_mm", width_mm)?;
                require_positive("depth_mm", depth_mm)?;
            }
            CrossSection::SolidCircular { diameter_mm } => {
                require_positive("diameter_mm", diameter_mm)?;
            }
            CrossSection::HollowCircular { outer_diameter_mm, wall_mm } => {
                require_positive("outer_diameter_mm", outer_diameter_mm)?;
                require_positive("wall_mm", wall_mm)?;
                if 2.0 * wall_mm >= outer_diameter_mm {
                    return Err(CalcError::out_of_range(
                        "wall_mm",
                        wall_mm,
                        "Wall must be less than half the outer diameter",
                    ));
                }
            }
            CrossSection::HollowRectangular { width_mm, depth_mm, wall_mm } => {
                require_positive("width_mm", width_mm)?;
                require_positive("depth_mm", depth_mm)?;
                require_positive("wall_mm", wall_mm)?;
                if 2.0 * wall_mm >= width_mm.min(depth_mm) {
                    return Err(CalcError::out_of_range(
                        "wall_mm",
                        wall_mm,
                        "Wall must be less than half the smaller outer dimension",
                    ));
                }
            }
            CrossSection::IBeam {
                flange_width_mm,
                depth_mm,
                flange_thickness_mm,
                web_thickness_mm,
            } => {
                require_positive("flange_width_mm", flange_width_mm)?;
                require_positive("depth_mm", depth_mm)?;
                require_positive("flange_thickness_mm", flange_thickness_mm)?;
                require_positive("web_thickness_mm", web_thickness_mm)?;
                if 2.0 * flange_thickness_mm >= depth_mm {
                    return Err(CalcError::out_of_range(
                        "flange_thickness_mm",
                        flange_thickness_mm,
                        "Flanges must be thinner than half the depth",
                    ));
                }
                if web_thickness_mm > flange_width_mm {
                    return Err(CalcError::out_of_range(
                        "web_thickness_mm",
                        web_thickness_mm,
                        "Web cannot be wider than the flange",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Dimension that dominates the bending properties, named in range errors
    fn governing_dimension(&self) -> (&'static str, f64) {
        match *self {
            CrossSection::Rectangular { depth_mm, .. }
            | CrossSection::HollowRectangular { depth_mm, .. }
            | CrossSection::IBeam { depth_mm, .. } => ("depth_mm", depth_mm),
            CrossSection::SolidCircular { diameter_mm } => ("diameter_mm", diameter_mm),
            CrossSection::HollowCircular { outer_diameter_mm, .. } => ("outer_diameter_mm", outer_diameter_mm),
        }
    }

    /// Validate and compute section properties.
    ///
    /// Dimensions that are individually valid can still overflow or underflow
    /// A, I, S or A_v; those sections are rejected too.
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        self.validate()?;
        let props = self.compute();
        let (field, value) = self.governing_dimension();
        for (quantity, derived) in [
            ("Area", props.area_mm2),
            ("Moment of inertia", props.moment_of_inertia_mm4),
            ("Section modulus", props.section_modulus_mm3),
            ("Shear area", props.shear_area_mm2),
        ] {
            if !(derived.is_finite() && derived > 0.0) {
                return Err(CalcError::out_of_range(
                    field,
                    value,
                    format!("{} is out of the representable range ({})", quantity, derived),
                ));
            }
        }
        Ok(props)
    }

    /// Validate, compute, and record substitution strings for A, I and S.
    pub fn properties_with_substitutions(&self, subs: &mut Substitutions) -> CalcResult<SectionProperties> {
        let props = self.properties()?;

        let (area_eq, area_subst, inertia_eq, inertia_subst) = match *self {
            CrossSection::Rectangular { width_mm: b, depth_mm: d } => (
                Equation::RectangularArea,
                format!(r"{} \cdot {}", num(b), num(d)),
                Equation::RectangularMomentOfInertia,
                format!(r"\frac{{{} \cdot {}^3}}{{12}}", num(b), num(d)),
            ),
            CrossSection::SolidCircular { diameter_mm: d } => (
                Equation::CircularArea,
                format!(r"\frac{{\pi \cdot {}^2}}{{4}}", num(d)),
                Equation::CircularMomentOfInertia,
                format!(r"\frac{{\pi \cdot {}^4}}{{64}}", num(d)),
            ),
            CrossSection::HollowCircular { outer_diameter_mm: o, wall_mm: t } => {
                let inner = o - 2.0 * t;
                (
                    Equation::HollowCircularArea,
                    format!(r"\frac{{\pi ({}^2 - {}^2)}}{{4}}", num(o), num(inner)),
                    Equation::HollowCircularMomentOfInertia,
                    format!(r"\frac{{\pi ({}^4 - {}^4)}}{{64}}", num(o), num(inner)),
                )
            }
            CrossSection::HollowRectangular { width_mm: b, depth_mm: d, wall_mm: t } => {
                let bi = b - 2.0 * t;
                let di = d - 2.0 * t;
                (
                    Equation::HollowRectangularArea,
                    format!(r"{} \cdot {} - {} \cdot {}", num(b), num(d), num(bi), num(di)),
                    Equation::HollowRectangularMomentOfInertia,
                    format!(
                        r"\frac{{{} \cdot {}^3 - {} \cdot {}^3}}{{12}}",
                        num(b),
                        num(d),
                        num(bi),
                        num(di)
                    ),
                )
            }
            CrossSection::IBeam {
                flange_width_mm: bf,
                depth_mm: d,
                flange_thickness_mm: tf,
                web_thickness_mm: tw,
            } => (
                Equation::IBeamArea,
                format!(
                    r"2 \cdot {} \cdot {} + ({} - 2 \cdot {}) \cdot {}",
                    num(bf),
                    num(tf),
                    num(d),
                    num(tf),
                    num(tw)
                ),
                Equation::IBeamMomentOfInertia,
                format!(
                    r"\frac{{{} \cdot {}^3 - ({} - {})({} - 2 \cdot {})^3}}{{12}}",
                    num(bf),
                    num(d),
                    num(bf),
                    num(tw),
                    num(d),
                    num(tf)
                ),
            ),
        };

        subs.record("area_mm2", area_eq, &area_subst, props.area_mm2, "mm^2");
        subs.record(
            "moment_of_inertia_mm4",
            inertia_eq,
            &inertia_subst,
            props.moment_of_inertia_mm4,
            "mm^4",
        );
        subs.record(
            "section_modulus_mm3",
            Equation::SectionModulus,
            &format!(
                r"\frac{{{}}}{{{}}}",
                num(props.moment_of_inertia_mm4),
                num(props.extreme_fiber_mm)
            ),
            props.section_modulus_mm3,
            "mm^3",
        );

        Ok(props)
    }

    fn compute(&self) -> SectionProperties {
        let (area, inertia, c, shear_area) = match *self {
            CrossSection::Rectangular { width_mm, depth_mm } => (
                section::rectangular_area(width_mm, depth_mm),
                section::rectangular_moment_of_inertia(width_mm, depth_mm),
                depth_mm / 2.0,
                section::rectangular_shear_area(width_mm, depth_mm),
            ),
            CrossSection::SolidCircular { diameter_mm } => (
                section::circular_area(diameter_mm),
                section::circular_moment_of_inertia(diameter_mm),
                diameter_mm / 2.0,
                section::circular_shear_area(diameter_mm),
            ),
            CrossSection::HollowCircular { outer_diameter_mm, wall_mm } => (
                section::hollow_circular_area(outer_diameter_mm, wall_mm),
                section::hollow_circular_moment_of_inertia(outer_diameter_mm, wall_mm),
                outer_diameter_mm / 2.0,
                section::hollow_circular_shear_area(outer_diameter_mm, wall_mm),
            ),
            CrossSection::HollowRectangular { width_mm, depth_mm, wall_mm } => (
                section::hollow_rectangular_area(width_mm, depth_mm, wall_mm),
                section::hollow_rectangular_moment_of_inertia(width_mm, depth_mm, wall_mm),
                depth_mm / 2.0,
                section::hollow_rectangular_shear_area(depth_mm, wall_mm),
            ),
            CrossSection::IBeam {
                flange_width_mm,
                depth_mm,
                flange_thickness_mm,
                web_thickness_mm,
            } => (
                section::i_beam_area(flange_width_mm, depth_mm, flange_thickness_mm, web_thickness_mm),
                section::i_beam_moment_of_inertia(
                    flange_width_mm,
                    depth_mm,
                    flange_thickness_mm,
                    web_thickness_mm,
                ),
                depth_mm / 2.0,
                section::i_beam_shear_area(depth_mm, web_thickness_mm),
            ),
        };

        SectionProperties {
            area_mm2: area,
            moment_of_inertia_mm4: inertia,
            section_modulus_mm3: section::section_modulus(inertia, c),
            extreme_fiber_mm: c,
            shear_area_mm2: shear_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_properties() {
        let props = CrossSection::Rectangular { width_mm: 50.0, depth_mm: 100.0 }
            .properties()
            .unwrap();
        assert!((props.area_mm2 - 5000.0).abs() < 1e-9);
        assert!((props.section_modulus_mm3 - 83_333.333).abs() < 0.01);
        assert!((props.extreme_fiber_mm - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_hollow_wall_too_thick() {
        let tube = CrossSection::HollowCircular { outer_diameter_mm: 40.0, wall_mm: 20.0 };
        let err = tube.properties().unwrap_err();
        assert_eq!(err.field(), "wall_mm");
    }

    #[test]
    fn test_i_beam_flange_validation() {
        let beam = CrossSection::IBeam {
            flange_width_mm: 100.0,
            depth_mm: 20.0,
            flange_thickness_mm: 10.0,
            web_thickness_mm: 5.0,
        };
        assert_eq!(beam.validate().unwrap_err().field(), "flange_thickness_mm");
    }

    #[test]
    fn test_box_wall_too_thick() {
        let rhs = CrossSection::HollowRectangular { width_mm: 60.0, depth_mm: 120.0, wall_mm: 30.0 };
        let err = rhs.validate().unwrap_err();
        assert_eq!(err.field(), "wall_mm");
        assert!(err.reason().contains("smaller outer dimension"));

        // Limit is set by the narrower side, not the depth
        let rhs = CrossSection::HollowRectangular { width_mm: 60.0, depth_mm: 120.0, wall_mm: 29.0 };
        assert!(rhs.properties().is_ok());
    }

    #[test]
    fn test_i_beam_web_wider_than_flange() {
        let beam = CrossSection::IBeam {
            flange_width_mm: 80.0,
            depth_mm: 200.0,
            flange_thickness_mm: 10.0,
            web_thickness_mm: 90.0,
        };
        let err = beam.validate().unwrap_err();
        assert_eq!(err.field(), "web_thickness_mm");
        assert!(err.reason().contains("wider than the flange"));
    }

    #[test]
    fn test_unrepresentable_properties_rejected() {
        // I = b d³ / 12 underflows to zero
        let tiny = CrossSection::Rectangular { width_mm: 1e-120, depth_mm: 1e-120 };
        let err = tiny.properties().unwrap_err();
        assert_eq!(err.field(), "depth_mm");
        assert!(err.reason().starts_with("Moment of inertia"));

        // I overflows to infinity
        let huge = CrossSection::SolidCircular { diameter_mm: 1e100 };
        assert_eq!(huge.properties().unwrap_err().field(), "diameter_mm");

        let mut subs = Substitutions::new();
        assert!(tiny.properties_with_substitutions(&mut subs).is_err());
        assert!(subs.is_empty());
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let rect = CrossSection::Rectangular { width_mm: -1.0, depth_mm: 0.0 };
        assert_eq!(rect.validate().unwrap_err().field(), "width_mm");
    }

    #[test]
    fn test_substitutions_recorded() {
        let mut subs = Substitutions::new();
        CrossSection::SolidCircular { diameter_mm: 20.0 }
            .properties_with_substitutions(&mut subs)
            .unwrap();
        assert_eq!(subs.len(), 3);
        let area = subs.get("area_mm2").unwrap();
        assert!(area.starts_with(r"A = \frac{\pi D^2}{4}"));
        assert!(area.contains("314.16"));
    }

    #[test]
    fn test_serialization_tagged_by_shape() {
        let section = CrossSection::HollowRectangular { width_mm: 100.0, depth_mm: 200.0, wall_mm: 8.0 };
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains(r#""shape":"HollowRectangular""#));
        let roundtrip: CrossSection = serde_json::from_str(&json).unwrap();
        assert_eq!(section, roundtrip);
    }
}
