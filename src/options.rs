#![allow(clippy::module_name_repetitions)]
//! Enumerated option sets: the exact tokens FlightStream accepts for each
//! constrained parameter.
//!
//! These tables are a compatibility contract with the tool's vocabulary and
//! must be updated in lockstep with it.

use std::fmt;

use crate::errors::ValidationError;

/// A closed set of literal tokens for one kind of parameter.
pub trait OptionSet: Sized + Copy + 'static {
    /// Human-readable name of the set (used by `flightscript options`).
    const NAME: &'static str;
    /// Every member, in the order the tool documents them.
    const ALL: &'static [Self];

    /// Literal token written to the script.
    fn token(self) -> &'static str;

    fn tokens() -> Vec<&'static str> {
        Self::ALL.iter().map(|o| o.token()).collect()
    }

    /// Parse a token (case-insensitive) for `parameter`, listing the accepted
    /// tokens on failure.
    fn parse(parameter: &'static str, value: &str) -> Result<Self, ValidationError> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownOption {
                parameter,
                value: value.to_string(),
                accepted: Self::tokens(),
            })
    }
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum $name {
            $($variant),+
        }

        impl OptionSet for $name {
            const NAME: &'static str = $label;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as OptionSet>::parse($label, s)
            }
        }
    };
}

option_set! {
    /// Generic on/off switch written as `ENABLE` / `DISABLE`.
    RunOption, "run-option" {
        Enable => "ENABLE",
        Disable => "DISABLE",
    }
}

impl From<bool> for RunOption {
    fn from(on: bool) -> Self {
        if on {
            RunOption::Enable
        } else {
            RunOption::Disable
        }
    }
}

impl RunOption {
    pub fn is_enabled(self) -> bool {
        self == RunOption::Enable
    }
}

option_set! {
    /// Simulation length scale units.
    LengthUnits, "length-units" {
        Inch => "INCH",
        Millimeter => "MILLIMETER",
        Other => "OTHER",
        Feet => "FEET",
        Mile => "MILE",
        Meter => "METER",
        Kilometer => "KILOMETER",
        Mils => "MILS",
        Micron => "MICRON",
        Centimeter => "CENTIMETER",
        Microinch => "MICROINCH",
    }
}

option_set! {
    /// Units for loads, moments and stability coefficients.
    ForceUnits, "force-units" {
        Coefficients => "COEFFICIENTS",
        Newtons => "NEWTONS",
        KiloNewtons => "KILO-NEWTONS",
        PoundForce => "POUND-FORCE",
        KilogramForce => "KILOGRAM-FORCE",
    }
}

option_set! {
    SolverModel, "solver-model" {
        Incompressible => "INCOMPRESSIBLE",
        SubsonicPrandtlGlauert => "SUBSONIC_PRANDTL_GLAUERT",
        TransonicFieldPanel => "TRANSONIC_FIELD_PANEL",
        TangentCone => "TANGENT_CONE",
        ModifiedNewtonian => "MODIFIED_NEWTONIAN",
    }
}

impl SolverModel {
    /// Panel-method models accept wake, collision and stabilization settings.
    pub fn is_panel_method(self) -> bool {
        matches!(
            self,
            SolverModel::Incompressible
                | SolverModel::SubsonicPrandtlGlauert
                | SolverModel::TransonicFieldPanel
        )
    }
}

/// Solver symmetry condition. `Periodic` carries its number of copies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Symmetry {
    #[default]
    None,
    Mirror,
    Periodic(u32),
}

impl Symmetry {
    pub const TOKENS: &'static [&'static str] = &["NONE", "MIRROR", "PERIODIC"];

    /// Parse `NONE`, `MIRROR`, `PERIODIC` (one copy) or `PERIODIC:<n>`.
    pub fn parse(parameter: &'static str, value: &str) -> Result<Self, ValidationError> {
        let v = value.trim();
        let (head, tail) = match v.split_once(':') {
            Some((h, t)) => (h, Some(t)),
            None => (v, None),
        };
        let unknown = || ValidationError::UnknownOption {
            parameter,
            value: value.to_string(),
            accepted: Self::TOKENS.to_vec(),
        };
        match (head.to_ascii_uppercase().as_str(), tail) {
            ("NONE", None) => Ok(Symmetry::None),
            ("MIRROR", None) => Ok(Symmetry::Mirror),
            ("PERIODIC", None) => Ok(Symmetry::Periodic(1)),
            ("PERIODIC", Some(n)) => n
                .trim()
                .parse::<u32>()
                .map(Symmetry::Periodic)
                .map_err(|_| {
                    ValidationError::invalid(parameter, "PERIODIC copies must be an integer")
                }),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symmetry::None => f.write_str("NONE"),
            Symmetry::Mirror => f.write_str("MIRROR"),
            Symmetry::Periodic(n) => write!(f, "PERIODIC {n}"),
        }
    }
}

option_set! {
    /// Plot shown in the plots scene.
    PlotType, "plot-type" {
        Residuals => "RESIDUALS",
        ClAxisX => "CL_AXIS_X",
        CdiAxisX => "CDI_AXIS_X",
        CdoAxisX => "CDO_AXIS_X",
        CmxAxisX => "CMX_AXIS_X",
        CmyAxisX => "CMY_AXIS_X",
        CmzAxisX => "CMZ_AXIS_X",
        Unsteady => "UNSTEADY",
    }
}

option_set! {
    /// Force or moment component tracked by an unsteady force plot.
    ForcePlotParameter, "force-plot-parameter" {
        ForceX => "FORCE_X",
        ForceY => "FORCE_Y",
        ForceZ => "FORCE_Z",
        MomentX => "MOMENT_X",
        MomentY => "MOMENT_Y",
        MomentZ => "MOMENT_Z",
    }
}

option_set! {
    /// Fluid property tracked by an unsteady fluid plot.
    FluidPlotParameter, "fluid-plot-parameter" {
        Velocity => "VELOCITY",
        VelocityX => "VX",
        VelocityY => "VY",
        VelocityZ => "VZ",
        Cp => "CP",
        Pressure => "PRESSURE",
        Mach => "MACH",
    }
}

option_set! {
    AnimationFileType, "animation-filetype" {
        ParaviewVtk => "PARAVIEW_VTK",
        Tecplot => "TECPLOT",
    }
}

option_set! {
    BoundaryLayerType, "boundary-layer-type" {
        Laminar => "LAMINAR",
        Transitional => "TRANSITIONAL",
        Turbulent => "TURBULENT",
    }
}

option_set! {
    Axis, "axis" {
        X => "X",
        Y => "Y",
        Z => "Z",
    }
}

option_set! {
    /// Units of dynamic stability derivatives.
    StabilityUnits, "stability-units" {
        PerRadian => "PER_RADIAN",
        PerDegree => "PER_DEGREE",
    }
}

option_set! {
    StabilityNumerator, "stability-numerator" {
        Cl => "CL",
        Cdi => "CDI",
        Cdo => "CDO",
        Cd => "CD",
        ForceX => "FORCE_X",
        ForceY => "FORCE_Y",
        ForceZ => "FORCE_Z",
        MomentX => "MOMENT_X",
        MomentY => "MOMENT_Y",
        MomentZ => "MOMENT_Z",
    }
}

option_set! {
    StabilityDenominator, "stability-denominator" {
        Aoa => "AOA",
        Beta => "BETA",
        RotX => "ROTX",
        RotY => "ROTY",
        RotZ => "ROTZ",
    }
}

option_set! {
    /// Per-step boundary data export of the solver sweeper.
    SurfaceDataExport, "surface-data-export" {
        Disable => "DISABLE",
        Txt => "TXT",
        Csv => "CSV",
        Dat => "DAT",
        Vtk => "VTK",
    }
}

option_set! {
    /// Whether the sweeper's third axis is velocity or Mach number.
    VelocityMode, "velocity-mode" {
        Velocity => "VELOCITY",
        Mach => "MACH",
    }
}

option_set! {
    MomentsModel, "moments-model" {
        Pressure => "PRESSURE",
        Vorticity => "VORTICITY",
    }
}

option_set! {
    /// Pressure representation in FEM CSV exports.
    ExportFormat, "export-format" {
        CpFreestream => "CP-FREESTREAM",
        CpReference => "CP-REFERENCE",
        Pressure => "PRESSURE",
        DifferencePressure => "DIFFERENCE-PRESSURE",
    }
}

option_set! {
    PressureUnits, "pressure-units" {
        Pascals => "PASCALS",
        Megapascals => "MEGAPASCALS",
        Bar => "BAR",
        Atmospheres => "ATMOSPHERES",
        Psi => "PSI",
    }
}

option_set! {
    /// What happens to the source geometry after a wrap.
    SourceTreatment, "source-treatment" {
        Replace => "REPLACE",
        Retain => "RETAIN",
    }
}

option_set! {
    BaseRegionType, "base-region-type" {
        Empirical => "EMPIRICAL",
        Constant => "CONSTANT",
    }
}

option_set! {
    Scene, "scene" {
        Geometry => "GEOMETRY",
        Solver => "SOLVER",
        Plots => "PLOTS",
    }
}

option_set! {
    SceneView, "scene-view" {
        DefaultView => "DEFAULTVIEW",
        XyPositive => "XY_POSITIVE",
        XyNegative => "XY_NEGATIVE",
        XzPositive => "XZ_POSITIVE",
        XzNegative => "XZ_NEGATIVE",
        YzPositive => "YZ_POSITIVE",
        YzNegative => "YZ_NEGATIVE",
    }
}

option_set! {
    /// Coordinate plane of a frame.
    Plane, "plane" {
        Xy => "XY",
        Xz => "XZ",
        Yz => "YZ",
    }
}

impl Plane {
    /// Index used by `SURFACE_MIRROR`: 1 = XY, 2 = YZ, 3 = XZ.
    pub fn mirror_index(self) -> u8 {
        match self {
            Plane::Xy => 1,
            Plane::Yz => 2,
            Plane::Xz => 3,
        }
    }
}

impl Axis {
    /// Numeric form (1 = X, 2 = Y, 3 = Z) used by actuator and streamtube commands.
    pub fn index(self) -> u8 {
        match self {
            Axis::X => 1,
            Axis::Y => 2,
            Axis::Z => 3,
        }
    }
}

option_set! {
    /// Rotation axis by name or by frame axis number.
    RotationAxis, "rotation-axis" {
        X => "X",
        Y => "Y",
        Z => "Z",
        One => "1",
        Two => "2",
        Three => "3",
    }
}

option_set! {
    /// Dimension of an imported drawing curve.
    CurveDimension, "curve-dimension" {
        TwoD => "2D",
        ThreeD => "3D",
    }
}

option_set! {
    /// Clustering of automatic cross-sections along the sweep axis.
    GrowthScheme, "growth-scheme" {
        Uniform => "1",
        Successive => "2",
        DualSuccessive => "3",
        ReverseSuccessive => "4",
    }
}

option_set! {
    /// Half-section plane for automatic cross-sections, or full sections.
    SectionSymmetry, "section-symmetry" {
        Xy => "XY",
        Xz => "XZ",
        Yz => "YZ",
        None => "NONE",
    }
}

option_set! {
    /// Body kind that cross-sections are cut from.
    CadMesh, "cad-mesh" {
        Cad => "CAD",
        Mesh => "MESH",
    }
}

option_set! {
    /// Half of the slicing plane kept by a single cross-section.
    ///
    /// | quadrant | YZ | XZ | XY |
    /// |---|---|---|---|
    /// | 1 | +Y | +X | +X |
    /// | 2 | -Y | -X | -X |
    /// | 3 | +Z | +Z | +Y |
    /// | 4 | -Z | -Z | -Y |
    Quadrant, "quadrant" {
        First => "1",
        Second => "2",
        Third => "3",
        Fourth => "4",
    }
}

option_set! {
    ImportMeshFileType, "import-mesh-filetype" {
        Stl => "STL",
        Tri => "TRI",
        P3d => "P3D",
        Csv => "CSV",
        Inp => "INP",
        StructuredQuad => "STRUCTURED_QUAD",
        UnstructuredQuad => "UNSTRUCTURED_QUAD",
        Lawgs => "LAWGS",
        Vtk => "VTK",
        Ac => "AC",
        Fac => "FAC",
        Obj => "OBJ",
    }
}

option_set! {
    ExportMeshFileType, "export-mesh-filetype" {
        Stl => "STL",
        Tri => "TRI",
        Obj => "OBJ",
    }
}

option_set! {
    /// Face property used by threshold selection.
    Threshold, "threshold" {
        Area => "AREA",
        Quality => "QUALITY",
        X => "X",
        Y => "Y",
        Z => "Z",
        Velocity => "VELOCITY",
        VelocityX => "VX",
        VelocityY => "VY",
        VelocityZ => "VZ",
        Cp => "CP",
        Mach => "MACH",
        SolverQuality => "SOLVER_QUALITY",
    }
}

option_set! {
    ThresholdRange, "threshold-range" {
        AboveMin => "ABOVE_MIN",
        BelowMax => "BELOW_MAX",
        AboveMinBelowMax => "ABOVE_MIN_BELOW_MAX",
    }
}

option_set! {
    /// Faces considered by threshold selection.
    FaceSubset, "face-subset" {
        AllFaces => "ALL_FACES",
        VisibleFaces => "VISIBLE_FACES",
        SelectedFaces => "SELECTED_FACES",
    }
}

option_set! {
    /// Whether node coordinates are absolute or a translation vector.
    TranslationType, "translation-type" {
        Absolute => "ABSOLUTE",
        Translation => "TRANSLATION",
    }
}

option_set! {
    ActuatorType, "actuator-type" {
        Propeller => "PROPELLER",
        JetExhaust => "JET_EXHAUST",
    }
}

option_set! {
    /// Unit of a propeller thrust setting.
    ThrustType, "thrust-type" {
        Coefficient => "COEFFICIENT",
        Newtons => "NEWTONS",
        Pounds => "POUNDS",
    }
}

option_set! {
    /// Radial clustering of a remeshed inlet.
    InletGrowthScheme, "inlet-growth-scheme" {
        Successive => "1",
        DualSide => "2",
    }
}

option_set! {
    MotionSolverType, "motion-solver-type" {
        Steady => "STEADY",
        Unsteady => "UNSTEADY",
    }
}

option_set! {
    /// Quantity prescribed by a motion profile.
    MotionType, "motion-type" {
        Acceleration => "ACCELERATION",
        Velocity => "VELOCITY",
        Displacement => "DISPLACEMENT",
    }
}

option_set! {
    /// Volume sense of a body in a boolean unite.
    VolumeType, "volume-type" {
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
    }
}

option_set! {
    ProbeType, "probe-type" {
        Volume => "VOLUME",
        Surface => "SURFACE",
    }
}

option_set! {
    /// Near-wall prismatic cells of a volume section.
    PrismsType, "prisms-type" {
        Prisms => "PRISMS",
        NoPrisms => "NO_PRISMS",
    }
}

option_set! {
    Colormap, "colormap" {
        Primary => "PRIMARY",
        Secondary => "SECONDARY",
    }
}

option_set! {
    ColormapType, "colormap-type" {
        RainbowStandard => "RAINBOW_STANDARD",
        BlackbodyStandard => "BLACKBODY_STANDARD",
    }
}

option_set! {
    /// Whether values outside a custom colormap range are cut off.
    CutOffMode, "cut-off-mode" {
        On => "ON",
        Off => "OFF",
    }
}

/// Name and tokens of every option set, for listings.
pub fn catalog() -> Vec<(&'static str, Vec<&'static str>)> {
    fn entry<T: OptionSet>() -> (&'static str, Vec<&'static str>) {
        (T::NAME, T::tokens())
    }
    vec![
        entry::<RunOption>(),
        entry::<LengthUnits>(),
        entry::<ForceUnits>(),
        entry::<SolverModel>(),
        ("symmetry", Symmetry::TOKENS.to_vec()),
        entry::<PlotType>(),
        entry::<ForcePlotParameter>(),
        entry::<FluidPlotParameter>(),
        entry::<AnimationFileType>(),
        entry::<BoundaryLayerType>(),
        entry::<Axis>(),
        entry::<StabilityUnits>(),
        entry::<StabilityNumerator>(),
        entry::<StabilityDenominator>(),
        entry::<SurfaceDataExport>(),
        entry::<VelocityMode>(),
        entry::<MomentsModel>(),
        entry::<ExportFormat>(),
        entry::<PressureUnits>(),
        entry::<SourceTreatment>(),
        entry::<BaseRegionType>(),
        entry::<Scene>(),
        entry::<SceneView>(),
        entry::<Plane>(),
        entry::<RotationAxis>(),
        entry::<CurveDimension>(),
        entry::<GrowthScheme>(),
        entry::<SectionSymmetry>(),
        entry::<CadMesh>(),
        entry::<Quadrant>(),
        entry::<ImportMeshFileType>(),
        entry::<ExportMeshFileType>(),
        entry::<Threshold>(),
        entry::<ThresholdRange>(),
        entry::<FaceSubset>(),
        entry::<TranslationType>(),
        entry::<ActuatorType>(),
        entry::<ThrustType>(),
        entry::<InletGrowthScheme>(),
        entry::<MotionSolverType>(),
        entry::<MotionType>(),
        entry::<VolumeType>(),
        entry::<ProbeType>(),
        entry::<PrismsType>(),
        entry::<Colormap>(),
        entry::<ColormapType>(),
        entry::<CutOffMode>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            SolverModel::parse("solver_model", "incompressible").unwrap(),
            SolverModel::Incompressible
        );
        assert_eq!("kilo-newtons".parse::<ForceUnits>().unwrap(), ForceUnits::KiloNewtons);
    }

    #[test]
    fn unknown_token_reports_parameter_and_accepted_set() {
        let err = LengthUnits::parse("units", "YARDS").unwrap_err();
        match err {
            ValidationError::UnknownOption {
                parameter,
                value,
                accepted,
            } => {
                assert_eq!(parameter, "units");
                assert_eq!(value, "YARDS");
                assert!(accepted.contains(&"METER"));
                assert_eq!(accepted.len(), LengthUnits::ALL.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn symmetry_tokens() {
        assert_eq!(Symmetry::Periodic(4).to_string(), "PERIODIC 4");
        assert_eq!(Symmetry::parse("symmetry", "periodic:3").unwrap(), Symmetry::Periodic(3));
        assert_eq!(Symmetry::parse("symmetry", "MIRROR").unwrap(), Symmetry::Mirror);
        assert!(Symmetry::parse("symmetry", "PLANE").is_err());
    }

    #[test]
    fn panel_methods() {
        assert!(SolverModel::Incompressible.is_panel_method());
        assert!(!SolverModel::TangentCone.is_panel_method());
    }

    #[test]
    fn numeric_forms_of_axes_and_planes() {
        assert_eq!(Axis::Y.index(), 2);
        assert_eq!(Plane::Yz.mirror_index(), 2);
        assert_eq!(Plane::Xz.mirror_index(), 3);
        assert_eq!("3".parse::<GrowthScheme>().unwrap(), GrowthScheme::DualSuccessive);
        assert_eq!("2d".parse::<CurveDimension>().unwrap(), CurveDimension::TwoD);
    }

    #[test]
    fn catalog_covers_every_set() {
        let cat = catalog();
        assert!(cat.iter().any(|(n, t)| *n == "solver-model" && t.contains(&"TANGENT_CONE")));
        assert!(cat.iter().all(|(_, t)| !t.is_empty()));
        let mut names: Vec<&str> = cat.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cat.len());
    }
}
