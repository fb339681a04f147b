//! # Cross-Section Property Formulas
//!
//! Geometric properties of the supported cross-sections. All functions are
//! unit-agnostic (the calculators pass millimetres).
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area) about the bending axis
//! - `S` = Section modulus (I/c, where c = distance to extreme fiber)
//! - `A_v` = Effective shear area, such that τ_max = V/A_v
//! - `b` = Width of section, `d` = Depth (height) of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Timoshenko & Gere, Mechanics of Materials, Ch. 5 (shear stress distribution)

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use calc_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(50.0, 100.0);
/// assert!((area - 5000.0).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate moment of inertia for rectangular section about its strong axis
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use calc_core::equations::section::rectangular_moment_of_inertia;
///
/// // 50 x 100 mm
/// let i = rectangular_moment_of_inertia(50.0, 100.0);
/// assert!((i - 4_166_666.67).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Effective shear area for a solid rectangle
///
/// τ_max = 1.5 V/A at the neutral axis, so A_v = 2A/3.
#[inline]
pub fn rectangular_shear_area(b: f64, d: f64) -> f64 {
    2.0 * b * d / 3.0
}

// =============================================================================
// SOLID CIRCULAR SECTION
// =============================================================================

/// Area of a solid circle: A = πD²/4
#[inline]
pub fn circular_area(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter * diameter / 4.0
}

/// Moment of inertia of a solid circle: I = πD⁴/64
#[inline]
pub fn circular_moment_of_inertia(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter.powi(4) / 64.0
}

/// Effective shear area for a solid circle
///
/// τ_max = 4V/(3A), so A_v = 3A/4.
#[inline]
pub fn circular_shear_area(diameter: f64) -> f64 {
    0.75 * circular_area(diameter)
}

// =============================================================================
// HOLLOW CIRCULAR SECTION (TUBE)
// =============================================================================

/// Area of a tube with outer diameter D and wall t
///
/// # Formula
/// A = π(D² - dᵢ²)/4, dᵢ = D - 2t
#[inline]
pub fn hollow_circular_area(outer: f64, wall: f64) -> f64 {
    let inner = outer - 2.0 * wall;
    std::f64::consts::PI * (outer * outer - inner * inner) / 4.0
}

/// Moment of inertia of a tube: I = π(D⁴ - dᵢ⁴)/64
#[inline]
pub fn hollow_circular_moment_of_inertia(outer: f64, wall: f64) -> f64 {
    let inner = outer - 2.0 * wall;
    std::f64::consts::PI * (outer.powi(4) - inner.powi(4)) / 64.0
}

/// Effective shear area for a thin-walled tube
///
/// τ_max ≈ 2V/A, so A_v = A/2.
#[inline]
pub fn hollow_circular_shear_area(outer: f64, wall: f64) -> f64 {
    hollow_circular_area(outer, wall) / 2.0
}

// =============================================================================
// HOLLOW RECTANGULAR SECTION (BOX / RHS)
// =============================================================================

/// Area of a box section with uniform wall t
///
/// # Formula
/// A = bd - bᵢdᵢ, bᵢ = b - 2t, dᵢ = d - 2t
#[inline]
pub fn hollow_rectangular_area(b: f64, d: f64, wall: f64) -> f64 {
    let bi = b - 2.0 * wall;
    let di = d - 2.0 * wall;
    b * d - bi * di
}

/// Moment of inertia of a box section: I = (bd³ - bᵢdᵢ³)/12
#[inline]
pub fn hollow_rectangular_moment_of_inertia(b: f64, d: f64, wall: f64) -> f64 {
    let bi = b - 2.0 * wall;
    let di = d - 2.0 * wall;
    (b * d.powi(3) - bi * di.powi(3)) / 12.0
}

/// Effective shear area for a box section: the two webs, A_v = 2td
#[inline]
pub fn hollow_rectangular_shear_area(d: f64, wall: f64) -> f64 {
    2.0 * wall * d
}

// =============================================================================
// DOUBLY-SYMMETRIC I-SECTION
// =============================================================================

/// Area of an I-section
///
/// ```text
///     ┌─────bf─────┐
///     └────┐  ┌────┘ tf
///          │  │
///        d │tw│
///          │  │
///     ┌────┘  └────┐
///     └────────────┘
/// ```
///
/// # Formula
/// A = 2 b_f t_f + (d - 2t_f) t_w
#[inline]
pub fn i_beam_area(bf: f64, d: f64, tf: f64, tw: f64) -> f64 {
    2.0 * bf * tf + (d - 2.0 * tf) * tw
}

/// Moment of inertia of an I-section about the strong axis
///
/// # Formula
/// I = [b_f d³ - (b_f - t_w)(d - 2t_f)³] / 12
#[inline]
pub fn i_beam_moment_of_inertia(bf: f64, d: f64, tf: f64, tw: f64) -> f64 {
    (bf * d.powi(3) - (bf - tw) * (d - 2.0 * tf).powi(3)) / 12.0
}

/// Effective shear area for an I-section: the full-depth web, A_v = d t_w
#[inline]
pub fn i_beam_shear_area(d: f64, tw: f64) -> f64 {
    d * tw
}

// =============================================================================
// GENERAL
// =============================================================================

/// Elastic section modulus: S = I/c
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}

// =============================================================================
// UNIT TESTS
// =============================================================================
