//! Solver analysis: loads, moments and induced-drag settings.

use crate::emit::boundaries_csv;
use crate::errors::ValidationError;
use crate::options::{ForceUnits, MomentsModel, RunOption};
use crate::script::Script;
use crate::values::{join_indices, require_positive_index, validate_indices, Boundaries};

/// Highest contour variable index accepted by `SET_SCENE_CONTOUR`.
pub const MAX_CONTOUR_VARIABLE: u32 = 25;

impl Script {
    /// Contour variable shown in the solver scene (0..=25, e.g. 4 = Cp, 9 = Mach).
    pub fn scene_contour(&mut self, variable: u32) -> Result<&mut Self, ValidationError> {
        if variable > MAX_CONTOUR_VARIABLE {
            return Err(ValidationError::out_of_range(
                "variable",
                variable,
                format!("a contour variable index in 0..={MAX_CONTOUR_VARIABLE}"),
            ));
        }
        self.block(
            "Change the scene contour variable",
            ["SET_SCENE_CONTOUR".to_string(), format!("VARIABLE {variable}")],
        )
    }

    pub fn set_vorticity_drag_boundaries(
        &mut self,
        boundaries: &Boundaries,
    ) -> Result<&mut Self, ValidationError> {
        boundaries.validate("boundary_indices")?;
        self.block(
            "Set vorticity induced-drag boundaries",
            boundaries_csv("SET_VORTICITY_DRAG_BOUNDARIES", boundaries),
        )
    }

    pub fn delete_vorticity_drag_boundaries(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete vorticity induced-drag boundaries",
            "DELETE_VORTICITY_DRAG_BOUNDARIES",
        )
    }

    pub fn set_analysis_moments_model(
        &mut self,
        model: MomentsModel,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the analysis moments model",
            format!("SET_ANALYSIS_MOMENTS_MODEL {model}"),
        )
    }

    /// Whether loads include the mirrored half of a symmetric model.
    pub fn set_analysis_symmetry_loads(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set analysis symmetry loads",
            format!("SET_ANALYSIS_SYMMETRY_LOADS {status}"),
        )
    }

    pub fn analysis_loads_frame(&mut self, frame: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("load_frame", frame)?;
        self.command(
            "Set the analysis loads frame",
            format!("SET_SOLVER_ANALYSIS_LOADS_FRAME {frame}"),
        )
    }

    pub fn vorticity_lift_model(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set the vorticity lift model",
            format!("SET_VORTICITY_LIFT_MODEL {status}"),
        )
    }

    pub fn loads_and_moments_units(
        &mut self,
        units: ForceUnits,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set the loads and moments units",
            format!("SET_LOADS_AND_MOMENTS_UNITS {units}"),
        )
    }

    /// Boundaries included in the loads integration.
    pub fn analysis_boundaries(
        &mut self,
        boundaries: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        validate_indices("boundaries_list", boundaries)?;
        self.block(
            "Set the solver analysis boundaries",
            [
                format!("SET_SOLVER_ANALYSIS_BOUNDARIES {}", boundaries.len()),
                join_indices(boundaries),
            ],
        )
    }

    pub fn set_inviscid_loads(
        &mut self,
        enable: impl Into<RunOption>,
    ) -> Result<&mut Self, ValidationError> {
        let status = enable.into();
        self.command(
            "Set inviscid loads",
            format!("SET_INVISCID_LOADS {status}"),
        )
    }
}
