//! Unsteady solver plots and animation output.

use std::path::{Path, PathBuf};

use crate::emit::boundaries_csv;
use crate::errors::ValidationError;
use crate::options::{
    AnimationFileType, FluidPlotParameter, ForcePlotParameter, ForceUnits, RunOption,
};
use crate::script::Script;
use crate::values::{path_arg, require_positive_index, require_text, Boundaries, Vertex};

/// A force/moment history plot over a set of boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ForcePlot {
    pub frame: u32,
    pub units: ForceUnits,
    pub parameter: ForcePlotParameter,
    pub name: String,
    pub boundaries: Boundaries,
}

impl Default for ForcePlot {
    fn default() -> Self {
        Self {
            frame: 1,
            units: ForceUnits::Newtons,
            parameter: ForcePlotParameter::ForceX,
            name: "Plot_Name".to_string(),
            boundaries: Boundaries::All,
        }
    }
}

/// A fluid property history plot at a probe vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidPlot {
    pub frame: u32,
    pub parameter: FluidPlotParameter,
    pub name: String,
    pub vertex: Vertex,
}

/// Animation output; `None` for [`Script::unsteady_solver_animation`] disables it.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub folder: PathBuf,
    pub filetype: AnimationFileType,
    /// Output every `frequency` time steps.
    pub frequency: u32,
    pub volume_sections: RunOption,
}

impl Script {
    pub fn unsteady_solver_new_force_plot(
        &mut self,
        plot: &ForcePlot,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", plot.frame)?;
        require_text("name", &plot.name)?;
        plot.boundaries.validate("boundary_indices")?;
        let mut lines = vec![
            "UNSTEADY_SOLVER_NEW_FORCE_PLOT".to_string(),
            format!("FRAME {}", plot.frame),
            format!("UNITS {}", plot.units),
            format!("PARAMETER {}", plot.parameter),
            format!("NAME {}", plot.name),
        ];
        lines.extend(boundaries_csv("BOUNDARIES", &plot.boundaries));
        self.block("Create a new unsteady solver force plot", lines)
    }

    pub fn unsteady_solver_new_fluid_plot(
        &mut self,
        plot: &FluidPlot,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", plot.frame)?;
        require_text("name", &plot.name)?;
        self.block(
            "Create a new unsteady solver fluid plot",
            [
                "UNSTEADY_SOLVER_NEW_FLUID_PLOT".to_string(),
                format!("FRAME {}", plot.frame),
                format!("PARAMETER {}", plot.parameter),
                format!("NAME {}", plot.name),
                format!("VERTEX {}", plot.vertex),
            ],
        )
    }

    pub fn unsteady_solver_export_plots(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("export_filepath", path.as_ref())?;
        self.block(
            "Export all unsteady solver plots",
            ["UNSTEADY_SOLVER_EXPORT_PLOTS".to_string(), path],
        )
    }

    pub fn unsteady_solver_delete_all_plots(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all unsteady solver plots",
            "UNSTEADY_SOLVER_DELETE_ALL_PLOTS",
        )
    }

    /// Enable animation output with `Some`, disable it with `None`.
    pub fn unsteady_solver_animation(
        &mut self,
        animation: Option<&Animation>,
    ) -> Result<&mut Self, ValidationError> {
        let Some(a) = animation else {
            return self.command(
                "Configure the unsteady solver animation",
                "UNSTEADY_SOLVER_ANIMATION DISABLE",
            );
        };
        let folder = path_arg("folder", &a.folder)?;
        if a.frequency < 1 {
            return Err(ValidationError::out_of_range(
                "frequency",
                a.frequency,
                "at least 1",
            ));
        }
        self.block(
            "Configure the unsteady solver animation",
            [
                "UNSTEADY_SOLVER_ANIMATION ENABLE".to_string(),
                format!("FOLDER {folder}"),
                format!("FILETYPE {}", a.filetype),
                format!("FREQUENCY {}", a.frequency),
                format!("VOLUME_SECTIONS {}", a.volume_sections),
            ],
        )
    }
}
