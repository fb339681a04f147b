//! Cross-module behaviour of the public calculators.

use std::f64::consts::PI;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use calc_core::calculations::beam::{self, BeamLoad, LoadCase};
use calc_core::calculations::{
    calculate_circle_basics, calculate_settings_demo, CalculationItem, CalculationOutput,
};
use calc_core::materials::{Material, MaterialGrade};
use calc_core::sections::CrossSection;

fn rect() -> CrossSection {
    CrossSection::Rectangular {
        width_mm: 50.0,
        depth_mm: 100.0,
    }
}

#[test]
fn circle_matches_closed_form() {
    for d in [0.5, 1.0, 10.0, 37.5, 1200.0] {
        let r = calculate_circle_basics(d).unwrap();
        assert_relative_eq!(r.area_mm2, PI * (d / 2.0).powi(2), max_relative = 1e-12);
        assert_relative_eq!(r.circumference_mm, PI * d, max_relative = 1e-12);
        assert_relative_eq!(r.radius_mm, d / 2.0);
    }
}

#[test]
fn circle_of_diameter_ten() {
    let r = calculate_circle_basics(10.0).unwrap();
    assert_abs_diff_eq!(r.area_mm2, 78.54, epsilon = 0.005);
    assert_abs_diff_eq!(r.circumference_mm, 31.42, epsilon = 0.005);
}

#[test]
fn settings_demo_percent_of_reference() {
    for (base, scale, reference) in [(10.0, 2.0, 5.0), (3.0, 0.5, 7.0), (-4.0, 2.5, 2.0)] {
        let r = calculate_settings_demo(base, scale, reference).unwrap();
        assert_relative_eq!(r.percent_of_reference, 100.0 * base * scale / reference, max_relative = 1e-12);
    }
    let r = calculate_settings_demo(10.0, 2.0, 5.0).unwrap();
    assert_eq!(r.scaled_value, 20.0);
    assert_eq!(r.normalized_value, 4.0);
    assert_eq!(r.percent_of_reference, 400.0);
}

#[test]
fn invalid_inputs_fail_before_computing() {
    assert_eq!(calculate_circle_basics(0.0).unwrap_err().field(), "diameter_mm");
    assert_eq!(calculate_circle_basics(-3.0).unwrap_err().error_code(), "INVALID_INPUT");
    assert_eq!(
        calculate_settings_demo(10.0, 2.0, 0.0).unwrap_err().field(),
        "reference_value"
    );
}

#[test]
fn simply_supported_center_load_moment() {
    for (span, p) in [(1.0, 100.0), (2.0, 1000.0), (7.5, 12_000.0)] {
        let r = beam::evaluate(
            LoadCase::SimplySupportedCenterPoint,
            &rect(),
            &Material::default(),
            BeamLoad {
                span_m: span,
                magnitude: p,
            },
        )
        .unwrap();
        assert_relative_eq!(r.max_moment_nm, p * span / 4.0, max_relative = 1e-12);
    }
}

#[test]
fn material_swap_scales_only_material_dependent_results() {
    let load = BeamLoad {
        span_m: 3.0,
        magnitude: 2000.0,
    };
    let steel = MaterialGrade::A36.properties();
    let aluminum = MaterialGrade::Aluminum6061T6.properties();

    let a = beam::evaluate(LoadCase::SimplySupportedCenterPoint, &rect(), &MaterialGrade::A36.into(), load).unwrap();
    let b = beam::evaluate(
        LoadCase::SimplySupportedCenterPoint,
        &rect(),
        &MaterialGrade::Aluminum6061T6.into(),
        load,
    )
    .unwrap();

    assert_eq!(a.max_moment_nm, b.max_moment_nm);
    assert_eq!(a.max_shear_n, b.max_shear_n);
    assert_eq!(a.max_bending_stress_mpa, b.max_bending_stress_mpa);
    assert_relative_eq!(
        b.max_deflection_mm / a.max_deflection_mm,
        steel.e_gpa / aluminum.e_gpa,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        b.safety_factor / a.safety_factor,
        aluminum.allowable_stress_mpa / steel.allowable_stress_mpa,
        max_relative = 1e-12
    );
}

#[test]
fn custom_material_behaves_like_library_equivalent() {
    let load = BeamLoad {
        span_m: 4.0,
        magnitude: 1500.0,
    };
    let library = beam::evaluate(LoadCase::CantileverUniform, &rect(), &MaterialGrade::A36.into(), load).unwrap();
    let custom = beam::evaluate(
        LoadCase::CantileverUniform,
        &rect(),
        &Material::custom("My A36", 200.0, 150.0),
        load,
    )
    .unwrap();
    assert_eq!(library.max_deflection_mm, custom.max_deflection_mm);
    assert_eq!(library.safety_factor, custom.safety_factor);
}

#[test]
fn every_section_shape_evaluates() {
    let sections = [
        rect(),
        CrossSection::SolidCircular { diameter_mm: 60.0 },
        CrossSection::HollowCircular {
            outer_diameter_mm: 60.0,
            wall_mm: 4.0,
        },
        CrossSection::HollowRectangular {
            width_mm: 80.0,
            depth_mm: 120.0,
            wall_mm: 5.0,
        },
        CrossSection::IBeam {
            flange_width_mm: 100.0,
            depth_mm: 200.0,
            flange_thickness_mm: 8.5,
            web_thickness_mm: 5.6,
        },
    ];
    for section in sections {
        let r = beam::evaluate(
            LoadCase::FixedFixedCenterPoint,
            &section,
            &Material::standard(MaterialGrade::S355),
            BeamLoad {
                span_m: 2.0,
                magnitude: 5000.0,
            },
        )
        .unwrap();
        let props = section.properties().unwrap();
        assert_relative_eq!(
            r.max_bending_stress_mpa,
            r.max_moment_nm * 1000.0 / props.section_modulus_mm3,
            max_relative = 1e-12
        );
        assert!(r.max_shear_stress_mpa > 0.0);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let json = r#"[
        { "type": "Circle", "diameter_mm": 10.0 },
        { "type": "SettingsDemo", "base_value": 10.0, "scale_factor": 2.0, "reference_value": 5.0 },
        {
            "type": "Beam",
            "load_case": "SimplySupportedUniform",
            "span_m": 4.0,
            "magnitude": 2500.0,
            "section": { "shape": "Rectangular", "width_mm": 100.0, "depth_mm": 200.0 },
            "material": { "type": "Standard", "grade": "C24" }
        },
        { "type": "Fastener", "bolt_size": "M12", "property_class": "8.8", "axial_load_n": 10000.0 },
        { "type": "WireSizing", "load_current_a": 20.0, "voltage_v": 120.0, "length_m": 15.0 },
        { "type": "TrapdoorSpring", "door_mass_kg": 20.0, "door_length_m": 1.0, "spring_arm_m": 0.1 },
        { "type": "Acoustics", "frequency_hz": 1000.0, "source_level_db": 94.0, "listener_distance_m": 10.0 }
    ]"#;
    let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 7);

    for item in &items {
        let first = serde_json::to_string(&item.evaluate().unwrap()).unwrap();
        let second = serde_json::to_string(&item.evaluate().unwrap()).unwrap();
        assert_eq!(first, second, "{} drifted between calls", item.calc_type());
    }
}

#[test]
fn every_numeric_field_has_a_substitution() {
    let item = CalculationItem::Beam(beam::BeamInput {
        label: "B-1".to_string(),
        load_case: LoadCase::ProppedCantileverUniform,
        load: BeamLoad {
            span_m: 5.0,
            magnitude: 3000.0,
        },
        section: rect(),
        material: Material::default(),
        deflection_limit_ratio: 240.0,
    });
    let output = item.evaluate().unwrap();
    let fields = output.to_field_map().unwrap();
    for name in [
        "max_moment_nm",
        "max_shear_n",
        "max_bending_stress_mpa",
        "max_shear_stress_mpa",
        "max_deflection_mm",
        "deflection_ratio",
        "safety_factor",
    ] {
        assert!(fields[name].is_number(), "{} missing", name);
        let subst = fields[&format!("subst_{}", name)].as_str().unwrap();
        assert!(subst.contains(" = "), "{}", subst);
    }
    assert!(matches!(output, CalculationOutput::Beam(_)));
}
