//! Local coordinate systems (frames).
//!
//! Frame 1 is the reference frame and cannot be edited, moved or deleted;
//! those commands require a local frame index of 2 or more.

use crate::errors::ValidationError;
use crate::options::{Axis, LengthUnits, Plane, RotationAxis};
use crate::script::Script;
use crate::values::{
    flag, require_finite, require_finite_vertex, require_positive_index, require_text, Scalar,
    Vertex,
};

/// Full definition of a local frame, written by `EDIT_COORDINATE_SYSTEM`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    pub frame: u32,
    pub name: String,
    pub origin: Vertex,
    pub x_axis: Vertex,
    pub y_axis: Vertex,
    pub z_axis: Vertex,
}

impl CoordinateSystem {
    /// Frame aligned with the reference axes at `origin`.
    pub fn aligned(frame: u32, name: impl Into<String>, origin: impl Into<Vertex>) -> Self {
        Self {
            frame,
            name: name.into(),
            origin: origin.into(),
            x_axis: Vertex::new(1.0, 0.0, 0.0),
            y_axis: Vertex::new(0.0, 1.0, 0.0),
            z_axis: Vertex::new(0.0, 0.0, 1.0),
        }
    }
}

fn require_local_frame(frame: u32) -> Result<(), ValidationError> {
    if frame > 1 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            "frame",
            frame,
            "a local frame index (2 or more)",
        ))
    }
}

impl Script {
    pub fn create_new_coordinate_system(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Create a new coordinate system", "CREATE_NEW_COORDINATE_SYSTEM")
    }

    pub fn edit_coordinate_system(
        &mut self,
        cs: &CoordinateSystem,
    ) -> Result<&mut Self, ValidationError> {
        require_local_frame(cs.frame)?;
        require_text("name", &cs.name)?;
        require_finite_vertex("origin", cs.origin)?;
        require_finite_vertex("vector_x", cs.x_axis)?;
        require_finite_vertex("vector_y", cs.y_axis)?;
        require_finite_vertex("vector_z", cs.z_axis)?;
        let mut lines = vec![
            "EDIT_COORDINATE_SYSTEM".to_string(),
            format!("FRAME {}", cs.frame),
            format!("NAME {}", cs.name),
        ];
        let o = cs.origin;
        lines.extend([
            format!("ORIGIN_X {}", Scalar::from(o.x)),
            format!("ORIGIN_Y {}", Scalar::from(o.y)),
            format!("ORIGIN_Z {}", Scalar::from(o.z)),
        ]);
        for (axis, v) in [("X", cs.x_axis), ("Y", cs.y_axis), ("Z", cs.z_axis)] {
            lines.push(format!("VECTOR_{axis}_X {}", Scalar::from(v.x)));
            lines.push(format!("VECTOR_{axis}_Y {}", Scalar::from(v.y)));
            lines.push(format!("VECTOR_{axis}_Z {}", Scalar::from(v.z)));
        }
        self.block("Edit a local coordinate system", lines)
    }

    pub fn set_coordinate_system_name(
        &mut self,
        frame: u32,
        name: &str,
    ) -> Result<&mut Self, ValidationError> {
        require_local_frame(frame)?;
        require_text("name", name)?;
        self.command(
            "Set the name of an existing local coordinate system",
            format!("SET_COORDINATE_SYSTEM_NAME {frame} {name}"),
        )
    }

    pub fn set_coordinate_system_origin(
        &mut self,
        frame: u32,
        origin: impl Into<Vertex>,
        units: LengthUnits,
    ) -> Result<&mut Self, ValidationError> {
        let origin = origin.into();
        require_local_frame(frame)?;
        require_finite_vertex("origin", origin)?;
        self.command(
            "Set the origin of an existing local coordinate system",
            format!("SET_COORDINATE_SYSTEM_ORIGIN {frame} {origin} {units}"),
        )
    }

    /// Point `axis` of `frame` along `direction`; `normalize` re-orthonormalizes the frame.
    pub fn set_coordinate_system_axis(
        &mut self,
        frame: u32,
        axis: Axis,
        direction: impl Into<Vertex>,
        normalize: bool,
    ) -> Result<&mut Self, ValidationError> {
        let direction = direction.into();
        require_local_frame(frame)?;
        require_finite_vertex("direction", direction)?;
        self.command(
            "Edit the axis of an existing local coordinate system",
            format!(
                "SET_COORDINATE_SYSTEM_AXIS {frame} {axis} {direction} {}",
                flag(normalize)
            ),
        )
    }

    pub fn normalize_coordinate_system(
        &mut self,
        frame: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("coord_system_index", frame)?;
        self.command(
            "Normalize coordinate system axes",
            format!("NORMALIZE_COORDINATE_SYSTEM {frame}"),
        )
    }

    /// Rotate `frame` by `angle` degrees about `axis` of `rotation_frame`.
    pub fn rotate_coordinate_system(
        &mut self,
        frame: u32,
        rotation_frame: u32,
        axis: RotationAxis,
        angle: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_positive_index("frame", frame)?;
        require_positive_index("rotation_frame", rotation_frame)?;
        require_finite("angle", angle)?;
        self.block(
            "Rotate a coordinate system",
            [
                "ROTATE_COORDINATE_SYSTEM".to_string(),
                format!("FRAME {frame}"),
                format!("ROTATION_FRAME {rotation_frame}"),
                format!("ROTATION_AXIS {axis}"),
                format!("ANGLE {angle}"),
            ],
        )
    }

    pub fn translate_coordinate_system(
        &mut self,
        frame: u32,
        offset: impl Into<Vertex>,
        units: LengthUnits,
    ) -> Result<&mut Self, ValidationError> {
        let offset = offset.into();
        require_local_frame(frame)?;
        require_finite_vertex("offset", offset)?;
        self.command(
            "Translate a coordinate system",
            format!("TRANSLATE_COORDINATE_SYSTEM {frame} {offset} {units}"),
        )
    }

    pub fn duplicate_coordinate_system(
        &mut self,
        frame: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_local_frame(frame)?;
        self.command(
            "Duplicate a local coordinate system",
            format!("DUPLICATE_COORDINATE_SYSTEM {frame}"),
        )
    }

    pub fn mirror_coordinate_system(
        &mut self,
        frame: u32,
        plane: Plane,
    ) -> Result<&mut Self, ValidationError> {
        require_local_frame(frame)?;
        self.command(
            "Mirror a local coordinate system",
            format!("MIRROR_COORDINATE_SYSTEM {frame} {plane}"),
        )
    }

    pub fn delete_coordinate_system(&mut self, frame: u32) -> Result<&mut Self, ValidationError> {
        require_local_frame(frame)?;
        self.command(
            "Delete a coordinate system",
            format!("DELETE_COORDINATE_SYSTEM {frame}"),
        )
    }
}
