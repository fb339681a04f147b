//! # Beam Load Case Formulas
//!
//! Closed-form maxima (moment, shear, deflection) for the supported beam
//! configurations. Functions are unit-agnostic: pass consistent units and the
//! result comes back in the same system.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! ## Sign Conventions
//!
//! All results are magnitudes (positive), regardless of whether the governing
//! moment is sagging at midspan or hogging at a fixed support.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// SIMPLY-SUPPORTED
// Pin at left, roller at right
// =============================================================================

/// Maximum moment for point load P at midspan
///
/// ```text
///          P
///          ↓
///    ──────┬──────
///    △            △
///     ←────L────→
/// ```
///
/// # Formula
/// M_max = PL/4  at x = L/2
#[inline]
pub fn simply_supported_point_max_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Maximum shear for point load at midspan: V_max = P/2
#[inline]
pub fn simply_supported_point_max_shear(p: f64) -> f64 {
    p / 2.0
}

/// Maximum deflection for point load at midspan
///
/// # Formula
/// δ_max = PL³ / (48EI)  at x = L/2
#[inline]
pub fn simply_supported_point_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

/// Maximum moment for uniform load w over the full span
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ══════════════
///    △             △
///     ←────L────→
/// ```
///
/// # Formula
/// M_max = wL²/8  at x = L/2
#[inline]
pub fn simply_supported_uniform_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Maximum shear for uniform load: V_max = wL/2 at the supports
#[inline]
pub fn simply_supported_uniform_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection for uniform load
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)  at midspan
#[inline]
pub fn simply_supported_uniform_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

// =============================================================================
// CANTILEVER
// Fixed at left, free at right
// =============================================================================

/// Maximum moment for point load P at the free end
///
/// ```text
///    ┃              P
///    ┃              ↓
///    ┣━━━━━━━━━━━━━━┥
///    ┃←──────L─────→
/// ```
///
/// # Formula
/// M_max = PL  at the fixed support
#[inline]
pub fn cantilever_point_max_moment(p: f64, l: f64) -> f64 {
    p * l
}

/// Maximum shear for end load: V_max = P (constant along the span)
#[inline]
pub fn cantilever_point_max_shear(p: f64) -> f64 {
    p
}

/// Maximum deflection for end load
///
/// # Formula
/// δ_max = PL³ / (3EI)  at the free end
#[inline]
pub fn cantilever_point_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

/// Maximum moment for uniform load: M_max = wL²/2 at the fixed support
#[inline]
pub fn cantilever_uniform_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 2.0
}

/// Maximum shear for uniform load: V_max = wL at the fixed support
#[inline]
pub fn cantilever_uniform_max_shear(w: f64, l: f64) -> f64 {
    w * l
}

/// Maximum deflection for uniform load
///
/// # Formula
/// δ_max = wL⁴ / (8EI)  at the free end
#[inline]
pub fn cantilever_uniform_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    w * l.powi(4) / (8.0 * e * i)
}

// =============================================================================
// FIXED-FIXED
// Both ends fully restrained against rotation
// =============================================================================

/// Maximum moment for point load at midspan
///
/// # Formula
/// M_max = PL/8, equal in magnitude at the supports and at midspan
#[inline]
pub fn fixed_fixed_point_max_moment(p: f64, l: f64) -> f64 {
    p * l / 8.0
}

/// Maximum shear for point load at midspan: V_max = P/2
#[inline]
pub fn fixed_fixed_point_max_shear(p: f64) -> f64 {
    p / 2.0
}

/// Maximum deflection for point load at midspan
///
/// # Formula
/// δ_max = PL³ / (192EI)
#[inline]
pub fn fixed_fixed_point_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (192.0 * e * i)
}

/// Maximum moment for uniform load
///
/// # Formula
/// M_ends = wL²/12 (hogging, governs); M_mid = wL²/24
#[inline]
pub fn fixed_fixed_uniform_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 12.0
}

/// Maximum shear for uniform load: V_max = wL/2
#[inline]
pub fn fixed_fixed_uniform_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection for uniform load
///
/// # Formula
/// δ_max = wL⁴ / (384EI)  at midspan
#[inline]
pub fn fixed_fixed_uniform_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    w * l.powi(4) / (384.0 * e * i)
}

// =============================================================================
// PROPPED CANTILEVER (FIXED-PINNED)
// Fixed at left, roller at right
// =============================================================================

/// Maximum moment for uniform load
///
/// ```text
///    ┃↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ┣══════════════
///    ┃              △
///    ┃←─────L─────→
/// ```
///
/// # Formula
/// M_A = wL²/8 at the fixed end (governs); M_pos = 9wL²/128
#[inline]
pub fn propped_cantilever_uniform_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Maximum shear for uniform load: V_max = R_A = 5wL/8
#[inline]
pub fn propped_cantilever_uniform_max_shear(w: f64, l: f64) -> f64 {
    5.0 * w * l / 8.0
}

/// Maximum deflection for uniform load
///
/// # Formula
/// δ_max = wL⁴ / (185EI)  at x = 0.4215L from the fixed end
#[inline]
pub fn propped_cantilever_uniform_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    w * l.powi(4) / (185.0 * e * i)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_simply_supported_point() {
        // 10 m beam, 1000 N at midspan
        let m = simply_supported_point_max_moment(1000.0, 10.0);
        assert!(approx_eq(m, 2500.0), "M = {} (expected 2500)", m);
        assert!(approx_eq(simply_supported_point_max_shear(1000.0), 500.0));
    }

    #[test]
    fn test_simply_supported_uniform() {
        // 10 m beam, 100 N/m: M = 100 * 100 / 8 = 1250
        let m = simply_supported_uniform_max_moment(100.0, 10.0);
        assert!(approx_eq(m, 1250.0), "M_max = {} (expected 1250)", m);
        assert!(approx_eq(simply_supported_uniform_max_shear(100.0, 10.0), 500.0));
    }

    #[test]
    fn test_uniform_deflection_ratios() {
        // Same w, L, E, I: cantilever = 48/5 x simply-supported,
        // fixed-fixed = 1/5 x simply-supported
        let ss = simply_supported_uniform_max_deflection(1.0, 1.0, 1.0, 1.0);
        let cant = cantilever_uniform_max_deflection(1.0, 1.0, 1.0, 1.0);
        let ff = fixed_fixed_uniform_max_deflection(1.0, 1.0, 1.0, 1.0);
        assert!(approx_eq(cant / ss, 48.0 / 5.0));
        assert!(approx_eq(ff / ss, 0.2));
    }

    #[test]
    fn test_point_deflection_ratios() {
        // Cantilever end load deflects 16x a simply-supported center load,
        // fixed-fixed 1/4
        let ss = simply_supported_point_max_deflection(1.0, 2.0, 3.0, 4.0);
        let cant = cantilever_point_max_deflection(1.0, 2.0, 3.0, 4.0);
        let ff = fixed_fixed_point_max_deflection(1.0, 2.0, 3.0, 4.0);
        assert!(approx_eq(cant / ss, 16.0));
        assert!(approx_eq(ff / ss, 0.25));
    }

    #[test]
    fn test_cantilever_moment_and_shear() {
        assert!(approx_eq(cantilever_point_max_moment(500.0, 3.0), 1500.0));
        assert!(approx_eq(cantilever_point_max_shear(500.0), 500.0));
        assert!(approx_eq(cantilever_uniform_max_moment(200.0, 3.0), 900.0));
        assert!(approx_eq(cantilever_uniform_max_shear(200.0, 3.0), 600.0));
    }

    #[test]
    fn test_fixed_ends_reduce_moment() {
        let ss = simply_supported_uniform_max_moment(100.0, 6.0);
        let ff = fixed_fixed_uniform_max_moment(100.0, 6.0);
        assert!(approx_eq(ff, ss * 8.0 / 12.0));
        assert!(approx_eq(
            fixed_fixed_point_max_moment(100.0, 6.0),
            simply_supported_point_max_moment(100.0, 6.0) / 2.0
        ));
    }

    #[test]
    fn test_propped_cantilever() {
        // Reactions 5wL/8 + 3wL/8 = wL
        let w = 120.0;
        let l = 5.0;
        let r_fixed = propped_cantilever_uniform_max_shear(w, l);
        assert!(approx_eq(r_fixed + 3.0 * w * l / 8.0, w * l));
        assert!(approx_eq(propped_cantilever_uniform_max_moment(w, l), 375.0));
        // Deflection between fixed-fixed and simply-supported
        let d = propped_cantilever_uniform_max_deflection(w, l, 1.0, 1.0);
        assert!(d > fixed_fixed_uniform_max_deflection(w, l, 1.0, 1.0));
        assert!(d < simply_supported_uniform_max_deflection(w, l, 1.0, 1.0));
    }
}
