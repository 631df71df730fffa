//! Command emitters, one module per command family.
//!
//! Each module adds methods to [`Script`](crate::Script). An emitter checks
//! every argument, formats the command lines and appends them through
//! `Script::emit`; on a validation failure nothing is appended. Emitters
//! return `&mut Script` so calls can be chained with `?`.

pub mod acoustics;
pub mod actuators;
pub mod analysis;
pub mod base_regions;
pub mod cad;
pub mod coordinate_system;
pub mod export;
pub mod freestream;
pub mod inlets;
pub mod log;
pub mod mesh;
pub mod motion;
pub mod plots;
pub mod probe_points;
pub mod run;
pub mod scene;
pub mod session;
pub mod solver;
pub mod solver_settings;
pub mod streamlines;
pub mod surface_sections;
pub mod toolbox;
pub mod unite;
pub mod unsteady;
pub mod volume_sections;
pub mod wake;
pub mod wrapper;

pub use acoustics::AcousticSection;
pub use actuators::{ActuatorEdit, ActuatorSettings};
pub use base_regions::TrailingEdgeBoundary;
pub use cad::AutoCrossSections;
pub use coordinate_system::CoordinateSystem;
pub use export::{CsvExport, VtkVariables};
pub use freestream::{FluidProperties, Freestream};
pub use inlets::InletRemesh;
pub use mesh::{SurfaceRotation, ThresholdSelection};
pub use motion::{MotionProfile, MotionSolver};
pub use solver::{SolverInitialization, SurfaceSelection};
pub use toolbox::{StabilityCoefficient, StabilitySettings, Sweep, SweeperConfig};
pub use unite::UniteBodies;
pub use unsteady::{Animation, FluidPlot, ForcePlot};
pub use volume_sections::{PrismLayer, SectionShape, VolumeSection};
pub use wake::PhysicsDetection;
pub use wrapper::VolumeControl;

use crate::errors::ValidationError;
use crate::script::Script;
use crate::values::{join_indices, Boundaries};

impl Script {
    /// Emit a block made of a single command line.
    pub(crate) fn command(
        &mut self,
        title: &str,
        line: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.emit(title, [line.into()])?;
        Ok(self)
    }

    /// Emit a block and hand back the script for chaining.
    pub(crate) fn block<I>(&mut self, title: &str, lines: I) -> Result<&mut Self, ValidationError>
    where
        I: IntoIterator<Item = String>,
    {
        self.emit(title, lines)?;
        Ok(self)
    }
}

/// `<KEYWORD> -1` for all boundaries, or `<KEYWORD> n` followed by the
/// comma-separated index list.
pub(crate) fn boundaries_csv(keyword: &str, boundaries: &Boundaries) -> Vec<String> {
    let mut out = vec![format!("{keyword} {}", boundaries.count_token())];
    if let Boundaries::List(v) = boundaries {
        out.push(join_indices(v));
    }
    out
}

/// `<KEYWORD> n` followed by one index per line.
pub(crate) fn indices_per_line(keyword: &str, indices: &[u32]) -> Vec<String> {
    let mut out = Vec::with_capacity(indices.len() + 1);
    out.push(format!("{keyword} {}", indices.len()));
    out.extend(indices.iter().map(u32::to_string));
    out
}
