//! # Equation Registry
//!
//! Central registry of every formula the calculators evaluate. Each equation
//! carries its symbolic LaTeX form, a plain-text form, a reference and a
//! category.
//!
//! The LaTeX form is the left half of every substitution string, so what a
//! result shows and what this registry documents cannot drift apart.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Equation;
//!
//! let meta = Equation::SimplySupportedPointMoment.metadata();
//! assert_eq!(meta.formula_plain, "M = PL/4");
//! println!("{}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the published source an equation is transcribed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// ISO 898-1 - Mechanical properties of fasteners
    Iso898 { clause: &'static str },
    /// VDI 2230 - Systematic calculation of bolted joints
    Vdi2230 { section: &'static str },
    /// NFPA 70 - National Electrical Code
    Nec { year: u16, section: &'static str },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
    /// Textbook acoustics (Kinsler, Fundamentals of Acoustics)
    Acoustics,
    /// Plain arithmetic or geometry
    Geometry,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Iso898 { clause } => format!("ISO 898-1, {}", clause),
            CodeReference::Vdi2230 { section } => format!("VDI 2230 Part 1, {}", section),
            CodeReference::Nec { year, section } => format!("NEC {} {}", year, section),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
            CodeReference::Acoustics => "Kinsler, Fundamentals of Acoustics".to_string(),
            CodeReference::Geometry => "Geometry".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section properties (A, I, S)
    SectionProperties,
    /// Internal forces (moment, shear)
    InternalForces,
    /// Stress calculations
    Stresses,
    /// Deflection calculations
    Deflections,
    /// Safety factors and limit ratios
    DesignChecks,
    /// Circle geometry and scaling demos
    Geometry,
    /// Bolted joints
    Fasteners,
    /// Conductor sizing
    Electrical,
    /// Spring-assisted hinged doors
    Mechanisms,
    /// Sound propagation
    Acoustics,
}

impl EquationCategory {
    /// All categories in documentation order
    pub const ALL: [EquationCategory; 10] = [
        EquationCategory::SectionProperties,
        EquationCategory::InternalForces,
        EquationCategory::Stresses,
        EquationCategory::Deflections,
        EquationCategory::DesignChecks,
        EquationCategory::Geometry,
        EquationCategory::Fasteners,
        EquationCategory::Electrical,
        EquationCategory::Mechanisms,
        EquationCategory::Acoustics,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Deflections => "Deflections",
            EquationCategory::DesignChecks => "Design Checks",
            EquationCategory::Geometry => "Geometry",
            EquationCategory::Fasteners => "Bolted Joints",
            EquationCategory::Electrical => "Wire Sizing",
            EquationCategory::Mechanisms => "Trapdoor Springs",
            EquationCategory::Acoustics => "Acoustics",
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Simply-Supported Point Load Moment")
    pub name: &'static str,
    /// Symbolic formula in LaTeX, including the left-hand side
    pub formula_latex: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Category for grouping
    pub category: EquationCategory,
}

const fn meta(
    name: &'static str,
    formula_latex: &'static str,
    formula_plain: &'static str,
    reference: CodeReference,
    category: EquationCategory,
) -> EquationMetadata {
    EquationMetadata {
        name,
        formula_latex,
        formula_plain,
        reference,
        category,
    }
}

const ROARKS_SS_POINT: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1e" };
const ROARKS_SS_UNIFORM: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2e" };
const ROARKS_CANT_POINT: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" };
const ROARKS_CANT_UNIFORM: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" };
const ROARKS_FF_POINT: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1d" };
const ROARKS_FF_UNIFORM: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2d" };
const ROARKS_PROPPED: CodeReference = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2c" };
const ROARKS_SECTIONS: CodeReference = CodeReference::Roarks { edition: 8, table: "Table A.1", case: "-" };

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation evaluated by calc_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Section properties
    // -------------------------------------------------------------------------
    RectangularArea,
    RectangularMomentOfInertia,
    CircularArea,
    CircularMomentOfInertia,
    HollowCircularArea,
    HollowCircularMomentOfInertia,
    HollowRectangularArea,
    HollowRectangularMomentOfInertia,
    IBeamArea,
    IBeamMomentOfInertia,
    SectionModulus,

    // -------------------------------------------------------------------------
    // Beam load cases
    // -------------------------------------------------------------------------
    SimplySupportedPointMoment,
    SimplySupportedPointShear,
    SimplySupportedPointDeflection,
    SimplySupportedUniformMoment,
    SimplySupportedUniformShear,
    SimplySupportedUniformDeflection,
    CantileverPointMoment,
    CantileverPointShear,
    CantileverPointDeflection,
    CantileverUniformMoment,
    CantileverUniformShear,
    CantileverUniformDeflection,
    FixedFixedPointMoment,
    FixedFixedPointShear,
    FixedFixedPointDeflection,
    FixedFixedUniformMoment,
    FixedFixedUniformShear,
    FixedFixedUniformDeflection,
    ProppedCantileverUniformMoment,
    ProppedCantileverUniformShear,
    ProppedCantileverUniformDeflection,

    // -------------------------------------------------------------------------
    // Stresses and checks
    // -------------------------------------------------------------------------
    BendingStress,
    ShearStress,
    DeflectionRatio,
    SafetyFactor,

    // -------------------------------------------------------------------------
    // Circle basics and settings demo
    // -------------------------------------------------------------------------
    CircleRadius,
    CircleArea,
    CircleCircumference,
    ScaledValue,
    NormalizedValue,
    PercentOfReference,

    // -------------------------------------------------------------------------
    // Bolted joints
    // -------------------------------------------------------------------------
    LoadPerBolt,
    BoltProofLoad,
    BoltPreload,
    TighteningTorque,
    BoltLoad,
    BoltTensileStress,
    BoltShearStress,
    VonMisesStress,
    YieldSafetyFactor,
    SeparationSafetyFactor,
    BoltLoadFactor,

    // -------------------------------------------------------------------------
    // Wire sizing
    // -------------------------------------------------------------------------
    RequiredAmpacity,
    DeratedAmpacity,
    ConductorArea,
    VoltageDropSinglePhase,
    VoltageDropThreePhase,
    VoltageDropPercent,

    // -------------------------------------------------------------------------
    // Trapdoor springs
    // -------------------------------------------------------------------------
    DoorWeight,
    HingeTorque,
    SpringForce,
    SpringRate,

    // -------------------------------------------------------------------------
    // Acoustics
    // -------------------------------------------------------------------------
    SpeedOfSound,
    Wavelength,
    Period,
    DistanceAttenuation,
    LevelAtDistance,
    SoundPressureLevel,
    LevelSum,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use crate::equations::registry::CodeReference as R;
        use crate::equations::registry::EquationCategory as C;

        match self {
            // Section properties
            Equation::RectangularArea => meta(
                "Rectangular Area",
                r"A = b d",
                "A = bd",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::RectangularMomentOfInertia => meta(
                "Rectangular Moment of Inertia",
                r"I = \frac{b d^3}{12}",
                "I = bd^3/12",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::CircularArea => meta(
                "Solid Circular Area",
                r"A = \frac{\pi D^2}{4}",
                "A = pi D^2/4",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::CircularMomentOfInertia => meta(
                "Solid Circular Moment of Inertia",
                r"I = \frac{\pi D^4}{64}",
                "I = pi D^4/64",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::HollowCircularArea => meta(
                "Hollow Circular Area",
                r"A = \frac{\pi (D^2 - d_i^2)}{4}",
                "A = pi (D^2 - di^2)/4",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::HollowCircularMomentOfInertia => meta(
                "Hollow Circular Moment of Inertia",
                r"I = \frac{\pi (D^4 - d_i^4)}{64}",
                "I = pi (D^4 - di^4)/64",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::HollowRectangularArea => meta(
                "Hollow Rectangular Area",
                r"A = b d - b_i d_i",
                "A = bd - bi di",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::HollowRectangularMomentOfInertia => meta(
                "Hollow Rectangular Moment of Inertia",
                r"I = \frac{b d^3 - b_i d_i^3}{12}",
                "I = (bd^3 - bi di^3)/12",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::IBeamArea => meta(
                "I-Beam Area",
                r"A = 2 b_f t_f + (d - 2 t_f) t_w",
                "A = 2 bf tf + (d - 2tf) tw",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::IBeamMomentOfInertia => meta(
                "I-Beam Moment of Inertia",
                r"I = \frac{b_f d^3 - (b_f - t_w)(d - 2 t_f)^3}{12}",
                "I = (bf d^3 - (bf - tw)(d - 2tf)^3)/12",
                ROARKS_SECTIONS,
                C::SectionProperties,
            ),
            Equation::SectionModulus => meta(
                "Elastic Section Modulus",
                r"S = \frac{I}{c}",
                "S = I/c",
                R::Mechanics,
                C::SectionProperties,
            ),

            // Simply-supported
            Equation::SimplySupportedPointMoment => meta(
                "Simply-Supported Point Load Moment",
                r"M_{max} = \frac{P L}{4}",
                "M = PL/4",
                ROARKS_SS_POINT,
                C::InternalForces,
            ),
            Equation::SimplySupportedPointShear => meta(
                "Simply-Supported Point Load Shear",
                r"V_{max} = \frac{P}{2}",
                "V = P/2",
                ROARKS_SS_POINT,
                C::InternalForces,
            ),
            Equation::SimplySupportedPointDeflection => meta(
                "Simply-Supported Point Load Deflection",
                r"\delta_{max} = \frac{P L^3}{48 E I}",
                "d = PL^3/(48EI)",
                ROARKS_SS_POINT,
                C::Deflections,
            ),
            Equation::SimplySupportedUniformMoment => meta(
                "Simply-Supported Uniform Load Moment",
                r"M_{max} = \frac{w L^2}{8}",
                "M = wL^2/8",
                ROARKS_SS_UNIFORM,
                C::InternalForces,
            ),
            Equation::SimplySupportedUniformShear => meta(
                "Simply-Supported Uniform Load Shear",
                r"V_{max} = \frac{w L}{2}",
                "V = wL/2",
                ROARKS_SS_UNIFORM,
                C::InternalForces,
            ),
            Equation::SimplySupportedUniformDeflection => meta(
                "Simply-Supported Uniform Load Deflection",
                r"\delta_{max} = \frac{5 w L^4}{384 E I}",
                "d = 5wL^4/(384EI)",
                ROARKS_SS_UNIFORM,
                C::Deflections,
            ),

            // Cantilever
            Equation::CantileverPointMoment => meta(
                "Cantilever End Load Moment",
                r"M_{max} = P L",
                "M = PL",
                ROARKS_CANT_POINT,
                C::InternalForces,
            ),
            Equation::CantileverPointShear => meta(
                "Cantilever End Load Shear",
                r"V_{max} = P",
                "V = P",
                ROARKS_CANT_POINT,
                C::InternalForces,
            ),
            Equation::CantileverPointDeflection => meta(
                "Cantilever End Load Deflection",
                r"\delta_{max} = \frac{P L^3}{3 E I}",
                "d = PL^3/(3EI)",
                ROARKS_CANT_POINT,
                C::Deflections,
            ),
            Equation::CantileverUniformMoment => meta(
                "Cantilever Uniform Load Moment",
                r"M_{max} = \frac{w L^2}{2}",
                "M = wL^2/2",
                ROARKS_CANT_UNIFORM,
                C::InternalForces,
            ),
            Equation::CantileverUniformShear => meta(
                "Cantilever Uniform Load Shear",
                r"V_{max} = w L",
                "V = wL",
                ROARKS_CANT_UNIFORM,
                C::InternalForces,
            ),
            Equation::CantileverUniformDeflection => meta(
                "Cantilever Uniform Load Deflection",
                r"\delta_{max} = \frac{w L^4}{8 E I}",
                "d = wL^4/(8EI)",
                ROARKS_CANT_UNIFORM,
                C::Deflections,
            ),

            // Fixed-fixed
            Equation::FixedFixedPointMoment => meta(
                "Fixed-Fixed Center Load Moment",
                r"M_{max} = \frac{P L}{8}",
                "M = PL/8",
                ROARKS_FF_POINT,
                C::InternalForces,
            ),
            Equation::FixedFixedPointShear => meta(
                "Fixed-Fixed Center Load Shear",
                r"V_{max} = \frac{P}{2}",
                "V = P/2",
                ROARKS_FF_POINT,
                C::InternalForces,
            ),
            Equation::FixedFixedPointDeflection => meta(
                "Fixed-Fixed Center Load Deflection",
                r"\delta_{max} = \frac{P L^3}{192 E I}",
                "d = PL^3/(192EI)",
                ROARKS_FF_POINT,
                C::Deflections,
            ),
            Equation::FixedFixedUniformMoment => meta(
                "Fixed-Fixed Uniform Load End Moment",
                r"M_{max} = \frac{w L^2}{12}",
                "M = wL^2/12",
                ROARKS_FF_UNIFORM,
                C::InternalForces,
            ),
            Equation::FixedFixedUniformShear => meta(
                "Fixed-Fixed Uniform Load Shear",
                r"V_{max} = \frac{w L}{2}",
                "V = wL/2",
                ROARKS_FF_UNIFORM,
                C::InternalForces,
            ),
            Equation::FixedFixedUniformDeflection => meta(
                "Fixed-Fixed Uniform Load Deflection",
                r"\delta_{max} = \frac{w L^4}{384 E I}",
                "d = wL^4/(384EI)",
                ROARKS_FF_UNIFORM,
                C::Deflections,
            ),

            // Propped cantilever
            Equation::ProppedCantileverUniformMoment => meta(
                "Propped Cantilever Uniform Load Fixed-End Moment",
                r"M_{max} = \frac{w L^2}{8}",
                "M = wL^2/8",
                ROARKS_PROPPED,
                C::InternalForces,
            ),
            Equation::ProppedCantileverUniformShear => meta(
                "Propped Cantilever Uniform Load Shear",
                r"V_{max} = \frac{5 w L}{8}",
                "V = 5wL/8",
                ROARKS_PROPPED,
                C::InternalForces,
            ),
            Equation::ProppedCantileverUniformDeflection => meta(
                "Propped Cantilever Uniform Load Deflection",
                r"\delta_{max} = \frac{w L^4}{185 E I}",
                "d = wL^4/(185EI)",
                ROARKS_PROPPED,
                C::Deflections,
            ),

            // Stresses and checks
            Equation::BendingStress => meta(
                "Bending Stress",
                r"\sigma_b = \frac{M}{S}",
                "sigma = M/S",
                R::Mechanics,
                C::Stresses,
            ),
            Equation::ShearStress => meta(
                "Maximum Shear Stress",
                r"\tau_{max} = \frac{V}{A_v}",
                "tau = V/Av",
                R::Mechanics,
                C::Stresses,
            ),
            Equation::DeflectionRatio => meta(
                "Span-to-Deflection Ratio",
                r"n_{\delta} = \frac{L}{\delta_{max}}",
                "L/d",
                R::Mechanics,
                C::DesignChecks,
            ),
            Equation::SafetyFactor => meta(
                "Bending Safety Factor",
                r"SF = \frac{\sigma_{allow}}{\sigma_b}",
                "SF = sigma_allow / sigma_b",
                R::Mechanics,
                C::DesignChecks,
            ),

            // Circle basics and settings demo
            Equation::CircleRadius => meta(
                "Circle Radius",
                r"r = \frac{D}{2}",
                "r = D/2",
                R::Geometry,
                C::Geometry,
            ),
            Equation::CircleArea => meta(
                "Circle Area",
                r"A = \pi \left(\frac{D}{2}\right)^2",
                "A = pi (D/2)^2",
                R::Geometry,
                C::Geometry,
            ),
            Equation::CircleCircumference => meta(
                "Circle Circumference",
                r"C = \pi D",
                "C = pi D",
                R::Geometry,
                C::Geometry,
            ),
            Equation::ScaledValue => meta(
                "Scaled Value",
                r"x_s = x \cdot k",
                "xs = x * k",
                R::Geometry,
                C::Geometry,
            ),
            Equation::NormalizedValue => meta(
                "Normalized Value",
                r"x_n = \frac{x_s}{x_{ref}}",
                "xn = xs / xref",
                R::Geometry,
                C::Geometry,
            ),
            Equation::PercentOfReference => meta(
                "Percent of Reference",
                r"p = 100 \cdot \frac{x_s}{x_{ref}}",
                "p = 100 * xs / xref",
                R::Geometry,
                C::Geometry,
            ),

            // Bolted joints
            Equation::LoadPerBolt => meta(
                "Load Per Bolt",
                r"F_1 = \frac{F}{n}",
                "F1 = F/n",
                R::Mechanics,
                C::Fasteners,
            ),
            Equation::BoltProofLoad => meta(
                "Proof Load",
                r"F_p = S_p A_t",
                "Fp = Sp At",
                CodeReference::Iso898 { clause: "Table 5" },
                C::Fasteners,
            ),
            Equation::BoltPreload => meta(
                "Assembly Preload",
                r"F_i = k_p F_p",
                "Fi = kp Fp",
                CodeReference::Vdi2230 { section: "5.4.3" },
                C::Fasteners,
            ),
            Equation::TighteningTorque => meta(
                "Tightening Torque",
                r"T = K F_i d",
                "T = K Fi d",
                CodeReference::Vdi2230 { section: "5.4.2" },
                C::Fasteners,
            ),
            Equation::BoltLoad => meta(
                "Bolt Load Under External Tension",
                r"F_b = F_i + C P",
                "Fb = Fi + C P",
                CodeReference::Vdi2230 { section: "5.3" },
                C::Fasteners,
            ),
            Equation::BoltTensileStress => meta(
                "Bolt Tensile Stress",
                r"\sigma_t = \frac{F_b}{A_t}",
                "sigma_t = Fb/At",
                CodeReference::Iso898 { clause: "9.1" },
                C::Fasteners,
            ),
            Equation::BoltShearStress => meta(
                "Bolt Shear Stress",
                r"\tau = \frac{V}{A_t}",
                "tau = V/At",
                R::Mechanics,
                C::Fasteners,
            ),
            Equation::VonMisesStress => meta(
                "Equivalent (von Mises) Stress",
                r"\sigma_{eq} = \sqrt{\sigma_t^2 + 3 \tau^2}",
                "sigma_eq = sqrt(sigma_t^2 + 3 tau^2)",
                R::Mechanics,
                C::Fasteners,
            ),
            Equation::YieldSafetyFactor => meta(
                "Yield Safety Factor",
                r"n_y = \frac{S_y}{\sigma_{eq}}",
                "ny = Sy / sigma_eq",
                R::Mechanics,
                C::Fasteners,
            ),
            Equation::SeparationSafetyFactor => meta(
                "Joint Separation Safety Factor",
                r"n_0 = \frac{F_i}{P (1 - C)}",
                "n0 = Fi / (P (1 - C))",
                CodeReference::Vdi2230 { section: "5.5.4" },
                C::Fasteners,
            ),
            Equation::BoltLoadFactor => meta(
                "Load Factor",
                r"n_L = \frac{F_p - F_i}{C P}",
                "nL = (Fp - Fi) / (C P)",
                CodeReference::Vdi2230 { section: "5.5.1" },
                C::Fasteners,
            ),

            // Wire sizing
            Equation::RequiredAmpacity => meta(
                "Required Ampacity",
                r"I_{req} = k_c I_{load}",
                "Ireq = kc * Iload",
                CodeReference::Nec { year: 2023, section: "210.19(A)(1)" },
                C::Electrical,
            ),
            Equation::DeratedAmpacity => meta(
                "Derated Ampacity",
                r"I_z = I_{table} \cdot k_t \cdot k_n",
                "Iz = Itable * kt * kn",
                CodeReference::Nec { year: 2023, section: "310.15" },
                C::Electrical,
            ),
            Equation::ConductorArea => meta(
                "Conductor Area",
                r"A = CM \cdot 5.067 \times 10^{-4}",
                "A = CM * 5.067e-4",
                CodeReference::Nec { year: 2023, section: "Chapter 9, Table 8" },
                C::Electrical,
            ),
            Equation::VoltageDropSinglePhase => meta(
                "Single-Phase Voltage Drop",
                r"V_d = \frac{2 K I L}{CM}",
                "Vd = 2 K I L / CM",
                R::Mechanics,
                C::Electrical,
            ),
            Equation::VoltageDropThreePhase => meta(
                "Three-Phase Voltage Drop",
                r"V_d = \frac{\sqrt{3} K I L}{CM}",
                "Vd = sqrt(3) K I L / CM",
                R::Mechanics,
                C::Electrical,
            ),
            Equation::VoltageDropPercent => meta(
                "Voltage Drop Percentage",
                r"V_{d\%} = 100 \cdot \frac{V_d}{V}",
                "Vd% = 100 * Vd / V",
                R::Mechanics,
                C::Electrical,
            ),

            // Trapdoor springs
            Equation::DoorWeight => meta(
                "Door Weight",
                r"W = m g",
                "W = m g",
                R::Mechanics,
                C::Mechanisms,
            ),
            Equation::HingeTorque => meta(
                "Hinge Torque",
                r"T = W \frac{L}{2} \cos\theta",
                "T = W (L/2) cos(theta)",
                R::Mechanics,
                C::Mechanisms,
            ),
            Equation::SpringForce => meta(
                "Spring Force Per Spring",
                r"F_s = \frac{T}{a n}",
                "Fs = T / (a n)",
                R::Mechanics,
                C::Mechanisms,
            ),
            Equation::SpringRate => meta(
                "Spring Rate",
                r"k = \frac{F_s}{x}",
                "k = Fs / x",
                R::Mechanics,
                C::Mechanisms,
            ),

            // Acoustics
            Equation::SpeedOfSound => meta(
                "Speed of Sound in Air",
                r"c = 331.3 \sqrt{1 + \frac{T}{273.15}}",
                "c = 331.3 sqrt(1 + T/273.15)",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::Wavelength => meta(
                "Wavelength",
                r"\lambda = \frac{c}{f}",
                "lambda = c/f",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::Period => meta(
                "Period",
                r"t = \frac{1000}{f}",
                "t = 1000/f",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::DistanceAttenuation => meta(
                "Inverse-Square Attenuation",
                r"\Delta L = 20 \log_{10}\frac{r_2}{r_1}",
                "dL = 20 log10(r2/r1)",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::LevelAtDistance => meta(
                "Level at Listener",
                r"L_2 = L_1 - \Delta L",
                "L2 = L1 - dL",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::SoundPressureLevel => meta(
                "Sound Pressure Level",
                r"L_p = 20 \log_{10}\frac{p}{p_0}",
                "Lp = 20 log10(p/p0)",
                R::Acoustics,
                C::Acoustics,
            ),
            Equation::LevelSum => meta(
                "Incoherent Level Sum",
                r"L_{tot} = 10 \log_{10}\sum 10^{L_i/10}",
                "Ltot = 10 log10(sum 10^(Li/10))",
                R::Acoustics,
                C::Acoustics,
            ),
        }
    }

    /// All equations in a given category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// Every registered equation, in documentation order.
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::RectangularArea,
    Equation::RectangularMomentOfInertia,
    Equation::CircularArea,
    Equation::CircularMomentOfInertia,
    Equation::HollowCircularArea,
    Equation::HollowCircularMomentOfInertia,
    Equation::HollowRectangularArea,
    Equation::HollowRectangularMomentOfInertia,
    Equation::IBeamArea,
    Equation::IBeamMomentOfInertia,
    Equation::SectionModulus,
    Equation::SimplySupportedPointMoment,
    Equation::SimplySupportedPointShear,
    Equation::SimplySupportedPointDeflection,
    Equation::SimplySupportedUniformMoment,
    Equation::SimplySupportedUniformShear,
    Equation::SimplySupportedUniformDeflection,
    Equation::CantileverPointMoment,
    Equation::CantileverPointShear,
    Equation::CantileverPointDeflection,
    Equation::CantileverUniformMoment,
    Equation::CantileverUniformShear,
    Equation::CantileverUniformDeflection,
    Equation::FixedFixedPointMoment,
    Equation::FixedFixedPointShear,
    Equation::FixedFixedPointDeflection,
    Equation::FixedFixedUniformMoment,
    Equation::FixedFixedUniformShear,
    Equation::FixedFixedUniformDeflection,
    Equation::ProppedCantileverUniformMoment,
    Equation::ProppedCantileverUniformShear,
    Equation::ProppedCantileverUniformDeflection,
    Equation::BendingStress,
    Equation::ShearStress,
    Equation::DeflectionRatio,
    Equation::SafetyFactor,
    Equation::CircleRadius,
    Equation::CircleArea,
    Equation::CircleCircumference,
    Equation::ScaledValue,
    Equation::NormalizedValue,
    Equation::PercentOfReference,
    Equation::LoadPerBolt,
    Equation::BoltProofLoad,
    Equation::BoltPreload,
    Equation::TighteningTorque,
    Equation::BoltLoad,
    Equation::BoltTensileStress,
    Equation::BoltShearStress,
    Equation::VonMisesStress,
    Equation::YieldSafetyFactor,
    Equation::SeparationSafetyFactor,
    Equation::BoltLoadFactor,
    Equation::RequiredAmpacity,
    Equation::DeratedAmpacity,
    Equation::ConductorArea,
    Equation::VoltageDropSinglePhase,
    Equation::VoltageDropThreePhase,
    Equation::VoltageDropPercent,
    Equation::DoorWeight,
    Equation::HingeTorque,
    Equation::SpringForce,
    Equation::SpringRate,
    Equation::SpeedOfSound,
    Equation::Wavelength,
    Equation::Period,
    Equation::DistanceAttenuation,
    Equation::LevelAtDistance,
    Equation::SoundPressureLevel,
    Equation::LevelSum,
];

/// Render the registry as a markdown reference document.
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Equations Reference

> **Auto-generated from the equation registry. Do not edit manually.**
>
> Regenerate with: `calc_cli equations > EQUATIONS.md`

Every formula evaluated by calc_core, grouped by category. Substitution
strings in calculation results start from the LaTeX form shown here.

---

"#,
    );

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));
        output.push_str("| Equation | Formula | LaTeX | Reference |\n");
        output.push_str("|----------|---------|-------|-----------|\n");

        for equation in equations {
            let meta = equation.metadata();
            output.push_str(&format!(
                "| {} | `{}` | `{}` | {} |\n",
                meta.name,
                meta.formula_plain,
                meta.formula_latex,
                meta.reference.citation()
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "---\n\n*{} equations in {} categories.*\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_no_duplicates() {
        let unique: HashSet<_> = ALL_EQUATIONS.iter().collect();
        assert_eq!(unique.len(), ALL_EQUATIONS.len());
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in EquationCategory::ALL {
            assert!(
                !Equation::in_category(category).is_empty(),
                "{:?} has no equations",
                category
            );
        }
    }

    #[test]
    fn test_latex_has_left_hand_side() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(meta.formula_latex.contains('='), "{} has no '='", meta.name);
        }
    }

    #[test]
    fn test_citation_format() {
        let meta = Equation::SimplySupportedPointMoment.metadata();
        assert_eq!(meta.reference.citation(), "Roark's 8ed, Table 8.1, Case 1e");
        assert_eq!(
            Equation::DeratedAmpacity.metadata().reference.citation(),
            "NEC 2023 310.15"
        );
    }

    #[test]
    fn test_markdown_lists_all_categories() {
        let md = generate_equations_markdown();
        for category in EquationCategory::ALL {
            assert!(md.contains(category.display_name()));
        }
        assert!(md.contains("M = PL/4"));
    }
}
