//! Off-body and surface streamlines.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{Axis, RunOption};
use crate::script::Script;
use crate::values::{
    path_arg, require_finite, require_finite_vertex, require_positive, require_positive_index,
    Scalar, Vertex,
};

fn position_lines(prefix: &str, p: Vertex) -> [String; 3] {
    [
        format!("{prefix}_X {}", Scalar::from(p.x)),
        format!("{prefix}_Y {}", Scalar::from(p.y)),
        format!("{prefix}_Z {}", Scalar::from(p.z)),
    ]
}

impl Script {
    /// Seed one off-body streamline at `position`.
    pub fn new_off_body_streamline(
        &mut self,
        position: impl Into<Vertex>,
        upstream: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        let position = position.into();
        require_finite_vertex("position", position)?;
        let mut lines = vec!["NEW_OFF_BODY_STREAMLINE".to_string()];
        lines.extend(position_lines("POSITION", position));
        lines.push(format!("UPSTREAM {upstream}"));
        self.block("Create a off-body streamline", lines)
    }

    /// Seed streamlines evenly along the segment `start`..`end`.
    pub fn new_streamline_distribution(
        &mut self,
        start: impl Into<Vertex>,
        end: impl Into<Vertex>,
        subdivisions: u32,
    ) -> Result<&mut Self, ValidationError> {
        let (start, end) = (start.into(), end.into());
        require_finite_vertex("position_1", start)?;
        require_finite_vertex("position_2", end)?;
        if subdivisions < 2 {
            return Err(ValidationError::out_of_range(
                "subdivisions",
                subdivisions,
                "at least 2",
            ));
        }
        let mut lines = vec!["NEW_STREAMLINE_DISTRIBUTION".to_string()];
        lines.extend(position_lines("POSITION_1", start));
        lines.extend(position_lines("POSITION_2", end));
        lines.push(format!("SUBDIVISIONS {subdivisions}"));
        self.block("Create a new off-body streamline distribution", lines)
    }

    /// Seed a tube of streamlines on a disc about `axis` of `frame`.
    pub fn new_off_body_streamtube(
        &mut self,
        radius: impl Into<Scalar>,
        frame: u32,
        axis: Axis,
        radial_subdivisions: u32,
        azimuth_subdivisions: u32,
    ) -> Result<&mut Self, ValidationError> {
        let radius = radius.into();
        require_positive("radius", radius)?;
        require_positive_index("frame", frame)?;
        require_positive_index("radial_subdivisions", radial_subdivisions)?;
        require_positive_index("azimuth_subdivisions", azimuth_subdivisions)?;
        self.block(
            "Create a new off-body streamtube",
            [
                "NEW_OFF_BODY_STREAMTUBE".to_string(),
                format!("RADIUS {radius}"),
                format!("FRAME {frame}"),
                format!("AXIS {}", axis.index()),
                format!("RADIAL_SUBDIVISIONS {radial_subdivisions}"),
                format!("AZIMUTH_SUBDIVISIONS {azimuth_subdivisions}"),
            ],
        )
    }

    /// Limit new off-body streamlines to `length`, or lift the limit with `None`.
    pub fn set_off_body_streamline_length(
        &mut self,
        length: Option<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let setting = match length {
            Some(l) => {
                require_finite("length", l)?;
                format!("SET_LENGTH {l}")
            }
            None => "SET_UNRESTRICTED_LENGTH".to_string(),
        };
        self.block(
            "Set the length of the new off-body streamlines",
            ["SET_OFF_BODY_STREAMLINE_LENGTH".to_string(), setting],
        )
    }

    pub fn set_all_off_body_streamlines_upstream(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set all off-body streamlines upstream",
            "SET_ALL_OFF_BODY_STREAMLINES_UPSTREAM",
        )
    }

    pub fn set_all_off_body_streamlines_downstream(
        &mut self,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set all off-body streamlines downstream",
            "SET_ALL_OFF_BODY_STREAMLINES_DOWNSTREAM",
        )
    }

    pub fn generate_all_off_body_streamlines(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Generate all off-body streamlines",
            "GENERATE_ALL_OFF_BODY_STREAMLINES",
        )
    }

    pub fn delete_all_off_body_streamlines(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all off-body streamlines",
            "DELETE_ALL_OFF_BODY_STREAMLINES",
        )
    }

    pub fn export_all_off_body_streamlines(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Export all off-body streamlines",
            ["EXPORT_ALL_OFF_BODY_STREAMLINES".to_string(), path],
        )
    }

    pub fn generate_all_surface_streamlines(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Generate all surface streamlines",
            "GENERATE_ALL_SURFACE_STREAMLINES",
        )
    }

    pub fn delete_all_surface_streamlines(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all surface streamlines",
            "DELETE_ALL_SURFACE_STREAMLINES",
        )
    }

    pub fn export_all_surface_streamlines(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_filepath", path.as_ref())?;
        self.block(
            "Export all on-body (surface) streamlines",
            ["EXPORT_ALL_SURFACE_STREAMLINES".to_string(), path],
        )
    }
}
