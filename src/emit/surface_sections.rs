//! Surface sections and sectional loads.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{ForceUnits, Plane, RunOption};
use crate::script::Script;
use crate::values::{
    path_arg, require_finite, require_positive_index, validate_indices, Boundaries, Scalar,
};

fn require_plot_direction(direction: u8) -> Result<(), ValidationError> {
    if matches!(direction, 1 | 2) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            "plot_direction",
            direction,
            "1 or 2",
        ))
    }
}

fn space_joined(indices: &[u32]) -> String {
    indices
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Script {
    /// Cut one section through `surfaces` at `offset` along the normal of `plane`.
    pub fn create_new_surface_section(
        &mut self,
        frame: u32,
        plane: Plane,
        offset: impl Into<Scalar>,
        plot_direction: u8,
        symmetry: RunOption,
        surfaces: &Boundaries,
    ) -> Result<&mut Self, ValidationError> {
        let offset = offset.into();
        require_positive_index("frame", frame)?;
        require_finite("offset", offset)?;
        require_plot_direction(plot_direction)?;
        surfaces.validate("surfaces")?;
        let mut lines = vec![format!(
            "CREATE_NEW_SURFACE_SECTION {frame} {plane} {offset} {plot_direction} {symmetry} {}",
            surfaces.count_token()
        )];
        if let Boundaries::List(v) = surfaces {
            lines.push(space_joined(v));
        }
        self.block("Create new surface section", lines)
    }

    pub fn new_surface_section_distribution(
        &mut self,
        frame: u32,
        plane: Plane,
        sections: u32,
        plot_direction: u8,
        surfaces: &[u32],
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", frame)?;
        require_positive_index("num_sections", sections)?;
        require_plot_direction(plot_direction)?;
        validate_indices("surfaces", surfaces)?;
        self.block(
            "Create new surface section distribution",
            [
                "NEW_SURFACE_SECTION_DISTRIBUTION".to_string(),
                format!("FRAME {frame}"),
                format!("PLANE {plane}"),
                format!("NUM_SECTIONS {sections}"),
                format!("PLOT_DIRECTION {plot_direction}"),
                format!("SURFACES {}", surfaces.len()),
                space_joined(surfaces),
            ],
        )
    }

    pub fn compute_surface_sectional_loads(
        &mut self,
        units: ForceUnits,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Compute sectional loads on existing surface sections",
            format!("COMPUTE_SURFACE_SECTIONAL_LOADS {units}"),
        )
    }

    pub fn export_surface_sectional_loads(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Export sectional loads on existing surface sections",
            ["EXPORT_SURFACE_SECTIONAL_LOADS".to_string(), path],
        )
    }

    pub fn update_all_surface_sections(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Update the surface sections", "UPDATE_ALL_SURFACE_SECTIONS")
    }

    pub fn export_all_surface_sections(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Export all surface sections to file",
            ["EXPORT_ALL_SURFACE_SECTIONS".to_string(), path],
        )
    }

    pub fn delete_surface_section(&mut self, index: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", index)?;
        self.command(
            "Delete a surface section",
            format!("DELETE_SURFACE_SECTION {index}"),
        )
    }

    pub fn delete_all_surface_sections(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete all surface sections", "DELETE_ALL_SURFACE_SECTIONS")
    }
}
