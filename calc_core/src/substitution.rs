//! # Substitution Strings
//!
//! Display-only strings showing a formula with the actual numbers plugged in,
//! e.g. `M_{max} = \frac{P L}{4} = \frac{1000.00 \cdot 2.00}{4} = 500.00 \, \mathrm{N \cdot m}`.
//!
//! Numbers are rounded to [`DISPLAY_DECIMALS`] for display only; the numeric
//! result fields keep full precision. Magnitudes that fixed decimals would
//! flatten (below [`SCIENTIFIC_BELOW`] or from [`SCIENTIFIC_FROM`] up) are
//! written as `m \times 10^{e}` with the same number of decimals.
//!
//! [`Substitutions`] serializes flat, one `subst_<field>` entry per quantity,
//! so a result struct that flattens it produces
//! `{ "area_mm2": 78.54, "subst_area_mm2": "A = ..." }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;

/// Decimal places used for every number shown in a substitution string
pub const DISPLAY_DECIMALS: usize = 2;

/// Non-zero magnitudes below this are written in scientific notation
pub const SCIENTIFIC_BELOW: f64 = 0.1;

/// Magnitudes at or above this are written in scientific notation
pub const SCIENTIFIC_FROM: f64 = 1e15;

/// Key prefix for substitution entries in serialized results
pub const SUBST_PREFIX: &str = "subst_";

/// Format a number at display precision.
pub fn num(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 {
            r"\infty".to_string()
        } else {
            r"-\infty".to_string()
        }
    } else if value != 0.0 && (value.abs() < SCIENTIFIC_BELOW || value.abs() >= SCIENTIFIC_FROM) {
        let sci = format!("{:.*e}", DISPLAY_DECIMALS, value);
        match sci.split_once('e') {
            Some((mantissa, exponent)) => format!(r"{} \times 10^{{{}}}", mantissa, exponent),
            None => sci,
        }
    } else {
        format!("{:.*}", DISPLAY_DECIMALS, value)
    }
}

/// Build a full substitution string from an equation, the substituted
/// right-hand side, the result and its unit.
pub fn substitute(equation: Equation, substituted: &str, value: f64, unit: &str) -> String {
    let symbolic = equation.metadata().formula_latex;
    if unit.is_empty() {
        format!("{} = {} = {}", symbolic, substituted, num(value))
    } else {
        format!(
            r"{} = {} = {} \, \mathrm{{{}}}",
            symbolic,
            substituted,
            num(value),
            unit
        )
    }
}

/// Substitution strings for one result, keyed `subst_<field>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitutions(BTreeMap<String, String>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the substitution string for `field`.
    pub fn record(&mut self, field: &str, equation: Equation, substituted: &str, value: f64, unit: &str) {
        self.0.insert(
            format!("{}{}", SUBST_PREFIX, field),
            substitute(equation, substituted, value, unit),
        );
    }

    /// Substitution string for a result field (without the `subst_` prefix)
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(&format!("{}{}", SUBST_PREFIX, field))
            .map(String::as_str)
    }

    /// Iterate as (field, string) pairs with the prefix stripped
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| {
            let field = k.strip_prefix(SUBST_PREFIX).unwrap_or(k);
            (field, v.as_str())
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
