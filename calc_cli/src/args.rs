//! Flag-driven calculator arguments, each turned into a [`CalculationItem`].

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use calc_core::calculations::beam::DEFAULT_DEFLECTION_LIMIT_RATIO;
use calc_core::calculations::fastener::{DEFAULT_JOINT_STIFFNESS, DEFAULT_NUT_FACTOR, DEFAULT_PRELOAD_FRACTION};
use calc_core::calculations::wire_sizing::{DEFAULT_AMBIENT_TEMP_C, DEFAULT_MAX_VOLTAGE_DROP_PERCENT};
use calc_core::calculations::{
    AcousticsInput, BeamInput, BeamLoad, CalculationItem, FastenerInput, LoadCase, Phase, TrapdoorSpringInput,
    WireSizingInput,
};
use calc_core::materials::{BoltSize, ConductorMaterial, InsulationRating, Material, PropertyClass};
use calc_core::sections::CrossSection;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LoadCaseArg {
    SsPoint,
    SsUniform,
    CantileverPoint,
    CantileverUniform,
    FixedPoint,
    FixedUniform,
    ProppedUniform,
}

impl From<LoadCaseArg> for LoadCase {
    fn from(arg: LoadCaseArg) -> Self {
        match arg {
            LoadCaseArg::SsPoint => LoadCase::SimplySupportedCenterPoint,
            LoadCaseArg::SsUniform => LoadCase::SimplySupportedUniform,
            LoadCaseArg::CantileverPoint => LoadCase::CantileverEndPoint,
            LoadCaseArg::CantileverUniform => LoadCase::CantileverUniform,
            LoadCaseArg::FixedPoint => LoadCase::FixedFixedCenterPoint,
            LoadCaseArg::FixedUniform => LoadCase::FixedFixedUniform,
            LoadCaseArg::ProppedUniform => LoadCase::ProppedCantileverUniform,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShapeArg {
    Rect,
    Round,
    Tube,
    Box,
    IBeam,
}

/// Beam bending analysis
#[derive(Debug, Args)]
pub struct BeamArgs {
    #[arg(long, value_enum, default_value = "ss-point")]
    pub case: LoadCaseArg,
    /// Span (m)
    #[arg(long, allow_negative_numbers = true)]
    pub span: f64,
    /// Point load (N) or distributed load (N/m), depending on the case
    #[arg(long, allow_negative_numbers = true)]
    pub load: f64,
    #[arg(long, value_enum, default_value = "rect")]
    pub shape: ShapeArg,
    /// Width or flange width (mm)
    #[arg(long)]
    pub width: Option<f64>,
    /// Depth (mm)
    #[arg(long)]
    pub depth: Option<f64>,
    /// Diameter or outer diameter (mm)
    #[arg(long)]
    pub diameter: Option<f64>,
    /// Wall thickness for tubes and boxes (mm)
    #[arg(long)]
    pub wall: Option<f64>,
    /// I-beam flange thickness (mm)
    #[arg(long)]
    pub flange_thickness: Option<f64>,
    /// I-beam web thickness (mm)
    #[arg(long)]
    pub web_thickness: Option<f64>,
    /// Library material code or name
    #[arg(long, default_value = "A36", conflicts_with = "e_gpa")]
    pub material: String,
    /// Custom material modulus (GPa); requires --allowable-mpa
    #[arg(long, requires = "allowable_mpa")]
    pub e_gpa: Option<f64>,
    /// Custom material allowable stress (MPa)
    #[arg(long, requires = "e_gpa")]
    pub allowable_mpa: Option<f64>,
    /// Deflection limit as L/n
    #[arg(long, default_value_t = DEFAULT_DEFLECTION_LIMIT_RATIO)]
    pub deflection_limit: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

fn dimension(value: Option<f64>, flag: &str, shape: ShapeArg) -> Result<f64> {
    value.with_context(|| format!("--{} is required for {:?} sections", flag, shape))
}

impl BeamArgs {
    fn section(&self) -> Result<CrossSection> {
        let shape = self.shape;
        Ok(match shape {
            ShapeArg::Rect => CrossSection::Rectangular {
                width_mm: dimension(self.width, "width", shape)?,
                depth_mm: dimension(self.depth, "depth", shape)?,
            },
            ShapeArg::Round => CrossSection::SolidCircular {
                diameter_mm: dimension(self.diameter, "diameter", shape)?,
            },
            ShapeArg::Tube => CrossSection::HollowCircular {
                outer_diameter_mm: dimension(self.diameter, "diameter", shape)?,
                wall_mm: dimension(self.wall, "wall", shape)?,
            },
            ShapeArg::Box => CrossSection::HollowRectangular {
                width_mm: dimension(self.width, "width", shape)?,
                depth_mm: dimension(self.depth, "depth", shape)?,
                wall_mm: dimension(self.wall, "wall", shape)?,
            },
            ShapeArg::IBeam => CrossSection::IBeam {
                flange_width_mm: dimension(self.width, "width", shape)?,
                depth_mm: dimension(self.depth, "depth", shape)?,
                flange_thickness_mm: dimension(self.flange_thickness, "flange-thickness", shape)?,
                web_thickness_mm: dimension(self.web_thickness, "web-thickness", shape)?,
            },
        })
    }

    fn material(&self) -> Result<Material> {
        match (self.e_gpa, self.allowable_mpa) {
            (Some(e), Some(allowable)) => Ok(Material::custom("Custom", e, allowable)),
            (None, None) => Ok(Material::from_name(&self.material)?),
            _ => bail!("--e-gpa and --allowable-mpa must be given together"),
        }
    }

    pub fn into_item(self) -> Result<CalculationItem> {
        Ok(CalculationItem::Beam(BeamInput {
            section: self.section()?,
            material: self.material()?,
            load_case: self.case.into(),
            load: BeamLoad {
                span_m: self.span,
                magnitude: self.load,
            },
            deflection_limit_ratio: self.deflection_limit,
            label: self.label,
        }))
    }
}

fn parse_bolt_size(s: &str) -> Result<BoltSize, String> {
    BoltSize::from_str_flexible(s).map_err(|e| e.reason().to_string())
}

fn parse_property_class(s: &str) -> Result<PropertyClass, String> {
    PropertyClass::from_str_flexible(s).map_err(|e| e.reason().to_string())
}

/// Bolted joint analysis
#[derive(Debug, Args)]
pub struct FastenerArgs {
    /// Bolt size, e.g. M12
    #[arg(long, value_parser = parse_bolt_size)]
    pub size: BoltSize,
    /// Property class, e.g. 8.8
    #[arg(long = "class", value_parser = parse_property_class, default_value = "8.8")]
    pub property_class: PropertyClass,
    /// Total axial (tension) load on the joint (N)
    #[arg(long, default_value_t = 0.0)]
    pub axial: f64,
    /// Total shear load on the joint (N)
    #[arg(long, default_value_t = 0.0)]
    pub shear: f64,
    #[arg(long, default_value_t = 1)]
    pub bolts: u32,
    #[arg(long, default_value_t = DEFAULT_PRELOAD_FRACTION)]
    pub preload_fraction: f64,
    #[arg(long, default_value_t = DEFAULT_NUT_FACTOR)]
    pub nut_factor: f64,
    /// Joint stiffness constant C
    #[arg(long, default_value_t = DEFAULT_JOINT_STIFFNESS)]
    pub stiffness: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

impl FastenerArgs {
    pub fn into_item(self) -> CalculationItem {
        CalculationItem::Fastener(FastenerInput {
            label: self.label,
            bolt_size: self.size,
            property_class: self.property_class,
            axial_load_n: self.axial,
            shear_load_n: self.shear,
            bolt_count: self.bolts,
            preload_fraction: self.preload_fraction,
            nut_factor: self.nut_factor,
            joint_stiffness: self.stiffness,
        })
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InsulationArg {
    #[value(name = "60")]
    C60,
    #[value(name = "75")]
    C75,
    #[value(name = "90")]
    C90,
}

impl From<InsulationArg> for InsulationRating {
    fn from(arg: InsulationArg) -> Self {
        match arg {
            InsulationArg::C60 => InsulationRating::C60,
            InsulationArg::C75 => InsulationRating::C75,
            InsulationArg::C90 => InsulationRating::C90,
        }
    }
}

/// NEC conductor sizing
#[derive(Debug, Args)]
pub struct WireArgs {
    /// Load current (A)
    #[arg(long)]
    pub current: f64,
    /// System voltage (V)
    #[arg(long)]
    pub voltage: f64,
    /// One-way length (m)
    #[arg(long)]
    pub length: f64,
    #[arg(long)]
    pub three_phase: bool,
    #[arg(long)]
    pub aluminum: bool,
    /// Insulation temperature rating (°C)
    #[arg(long, value_enum, default_value = "75")]
    pub insulation: InsulationArg,
    /// Ambient temperature (°C)
    #[arg(long, default_value_t = DEFAULT_AMBIENT_TEMP_C, allow_negative_numbers = true)]
    pub ambient: f64,
    /// Current-carrying conductors in the raceway
    #[arg(long, default_value_t = 3)]
    pub conductors: u32,
    /// Size at 125 % for a continuous load
    #[arg(long)]
    pub continuous: bool,
    /// Voltage drop limit (%)
    #[arg(long, default_value_t = DEFAULT_MAX_VOLTAGE_DROP_PERCENT)]
    pub max_drop: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

impl WireArgs {
    pub fn into_item(self) -> CalculationItem {
        CalculationItem::WireSizing(WireSizingInput {
            label: self.label,
            load_current_a: self.current,
            voltage_v: self.voltage,
            length_m: self.length,
            phase: if self.three_phase { Phase::ThreePhase } else { Phase::SinglePhase },
            material: if self.aluminum { ConductorMaterial::Aluminum } else { ConductorMaterial::Copper },
            insulation: self.insulation.into(),
            ambient_temp_c: self.ambient,
            conductor_count: self.conductors,
            continuous: self.continuous,
            max_voltage_drop_percent: self.max_drop,
        })
    }
}

/// Trapdoor counterbalance springs
#[derive(Debug, Args)]
pub struct TrapdoorArgs {
    /// Door mass (kg)
    #[arg(long)]
    pub mass: f64,
    /// Hinge to free edge (m)
    #[arg(long)]
    pub length: f64,
    /// Hinge to spring attachment (m)
    #[arg(long)]
    pub arm: f64,
    /// Opening angle from horizontal (degrees)
    #[arg(long, default_value_t = 0.0)]
    pub angle: f64,
    #[arg(long, default_value_t = 1)]
    pub springs: u32,
    /// Spring travel (mm), enables the spring rate
    #[arg(long)]
    pub travel: Option<f64>,
    #[arg(long, default_value = "")]
    pub label: String,
}

impl TrapdoorArgs {
    pub fn into_item(self) -> CalculationItem {
        CalculationItem::TrapdoorSpring(TrapdoorSpringInput {
            label: self.label,
            door_mass_kg: self.mass,
            door_length_m: self.length,
            spring_arm_m: self.arm,
            opening_angle_deg: self.angle,
            spring_count: self.springs,
            spring_travel_mm: self.travel,
        })
    }
}

/// Tone propagation in air
#[derive(Debug, Args)]
pub struct AcousticsArgs {
    /// Frequency (Hz)
    #[arg(long)]
    pub frequency: f64,
    /// Air temperature (°C)
    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub temp: f64,
    /// Source level at the reference distance (dB)
    #[arg(long)]
    pub level: f64,
    /// Reference distance (m)
    #[arg(long, default_value_t = 1.0)]
    pub ref_distance: f64,
    /// Listener distance (m)
    #[arg(long)]
    pub distance: f64,
    #[arg(long, default_value = "")]
    pub label: String,
}

impl AcousticsArgs {
    pub fn into_item(self) -> CalculationItem {
        CalculationItem::Acoustics(AcousticsInput {
            label: self.label,
            frequency_hz: self.frequency,
            air_temp_c: self.temp,
            source_level_db: self.level,
            reference_distance_m: self.ref_distance,
            listener_distance_m: self.distance,
        })
    }
}
