//! # Engineering Equations
//!
//! Fundamental mechanics formulas used by the calculators, kept in one place
//! so they can be checked against their published sources.
//!
//! ## Modules
//!
//! - [`beam`] - Maximum moment, shear and deflection per beam load case
//! - [`section`] - Cross-section properties (A, I, S, shear area)
//! - [`registry`] - Equation metadata, used for substitution strings and docs
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - ISO 898-1 / VDI 2230 for bolted joints
//! - NFPA 70 (NEC) for conductor sizing

pub mod beam;
pub mod registry;
pub mod section;

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
