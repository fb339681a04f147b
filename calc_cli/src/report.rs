//! Plain-text rendering of calculation results.

use std::collections::BTreeMap;

use serde_json::Value;

use calc_core::calculations::CalculationOutput;
use calc_core::materials::MaterialGrade;
use calc_core::substitution::SUBST_PREFIX;

const RULE: &str = "═══════════════════════════════════════";

/// Text report: numeric fields first, then the substituted equations.
pub fn render(calc_type: &str, label: &str, output: &CalculationOutput, fields: &BTreeMap<String, Value>) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    if label.is_empty() {
        out.push_str(&format!("  {}\n", calc_type.to_uppercase()));
    } else {
        out.push_str(&format!("  {}: {}\n", calc_type.to_uppercase(), label));
    }
    out.push_str(RULE);
    out.push('\n');

    out.push_str("\nResults:\n");
    for (name, value) in fields.iter().filter(|(k, _)| !k.starts_with(SUBST_PREFIX)) {
        out.push_str(&format!("  {:<28} {}\n", name, format_value(value)));
    }

    let equations: Vec<(&String, &Value)> = fields.iter().filter(|(k, _)| k.starts_with(SUBST_PREFIX)).collect();
    if !equations.is_empty() {
        out.push_str("\nEquations:\n");
        for (_, value) in equations {
            if let Value::String(s) = value {
                out.push_str(&format!("  {}\n", s));
            }
        }
    }

    if let Some(status) = status_line(output) {
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("  RESULT: {}\n", status));
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f),
            Some(f) => format!("{:.4}", f),
            None => n.to_string(),
        },
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "PASS"
    } else {
        "FAIL"
    }
}

fn status_line(output: &CalculationOutput) -> Option<String> {
    match output {
        CalculationOutput::Beam(r) => Some(format!(
            "{} (governs: {}, SF = {:.2}, L/{:.0})",
            status_icon(r.passes()),
            r.governing_condition(),
            r.safety_factor,
            r.deflection_ratio
        )),
        CalculationOutput::Fastener(r) => Some(format!(
            "{} (yield SF = {:.2})",
            status_icon(r.passes()),
            r.yield_safety_factor
        )),
        CalculationOutput::WireSizing(r) => Some(format!(
            "{} ({:.2} % drop{})",
            r.wire_size.label(),
            r.voltage_drop_percent,
            if r.governed_by_voltage_drop { ", sized for voltage drop" } else { "" }
        )),
        _ => None,
    }
}

/// Material library as a text table
pub fn render_materials() -> String {
    let mut out = format!(
        "{:<10} {:<24} {:>8} {:>10} {:>12}\n",
        "Code", "Name", "E (GPa)", "Fy (MPa)", "Allow (MPa)"
    );
    for grade in MaterialGrade::ALL {
        let p = grade.properties();
        out.push_str(&format!(
            "{:<10} {:<24} {:>8.1} {:>10.1} {:>12.2}\n",
            grade.code(),
            grade.display_name(),
            p.e_gpa,
            p.yield_strength_mpa,
            p.allowable_stress_mpa
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::calculations::calculate_circle_basics;

    #[test]
    fn test_render_lists_fields_and_equations() {
        let output = CalculationOutput::Circle(calculate_circle_basics(10.0).unwrap());
        let fields = output.to_field_map().unwrap();
        let text = render("Circle", "Pin", &output, &fields);
        assert!(text.contains("CIRCLE: Pin"));
        assert!(text.contains("radius_mm"));
        assert!(text.contains("Equations:"));
        assert!(text.contains("78.54"));
        assert!(!text.contains("RESULT"));
    }

    #[test]
    fn test_materials_table_has_every_grade() {
        let table = render_materials();
        assert_eq!(table.lines().count(), MaterialGrade::ALL.len() + 1);
        assert!(table.contains("6061-T6"));
    }
}
