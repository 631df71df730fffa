//! Surface wrapper (watertight remeshing) controls.

use crate::errors::ValidationError;
use crate::options::{RunOption, SourceTreatment};
use crate::script::Script;
use crate::values::{
    format_float, join_indices, require_positive, require_positive_index, require_text,
    validate_indices, Scalar, Vertex,
};

/// Box-shaped refinement region spanned by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeControl {
    pub frame: u32,
    pub vertex_1: Vertex,
    pub vertex_2: Vertex,
    pub target_size: f64,
    pub name: String,
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self {
            frame: 1,
            vertex_1: Vertex::new(0.5, 0.3, 1.0),
            vertex_2: Vertex::new(1.5, 0.6, 2.3),
            target_size: 0.25,
            name: "Airplane_nose".to_string(),
        }
    }
}

impl Script {
    /// Surfaces fed to the wrapper.
    pub fn wrapper_set_input(&mut self, surfaces: &[u32]) -> Result<&mut Self, ValidationError> {
        validate_indices("surface_indices", surfaces)?;
        self.block(
            "Set the wrapper input surfaces",
            [
                format!("WRAPPER_SET_INPUT {}", surfaces.len()),
                join_indices(surfaces),
            ],
        )
    }

    pub fn wrapper_set_global_size(
        &mut self,
        target_size: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let size = target_size.into();
        require_positive("target_size", size)?;
        self.command(
            "Set the wrapper global target size",
            format!("WRAPPER_SET_GLOBAL_SIZE {size}"),
        )
    }

    pub fn wrapper_set_vertex_projection(
        &mut self,
        state: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Set wrapper vertex projection",
            format!("WRAPPER_SET_VERTEX_PROJECTION {state}"),
        )
    }

    /// Cell stretching factors along each axis; all must be positive.
    pub fn wrapper_set_anisotropy(
        &mut self,
        x: impl Into<Scalar>,
        y: impl Into<Scalar>,
        z: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let (x, y, z) = (x.into(), y.into(), z.into());
        require_positive("x", x)?;
        require_positive("y", y)?;
        require_positive("z", z)?;
        self.command(
            "Set the wrapper anisotropy",
            format!("WRAPPER_SET_ANISOTROPY {x} {y} {z}"),
        )
    }

    pub fn wrapper_create_local_control(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Create a new wrapper local control",
            "WRAPPER_CREATE_LOCAL_CONTROL",
        )
    }

    pub fn wrapper_edit_local_control(
        &mut self,
        control_id: u32,
        surfaces: &[u32],
        target_size: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let size = target_size.into();
        require_positive_index("control_id", control_id)?;
        validate_indices("surfaces", surfaces)?;
        require_positive("target_size", size)?;
        self.block(
            "Edit a wrapper local control",
            [
                format!("WRAPPER_EDIT_LOCAL_CONTROL {control_id}"),
                format!("SURFACES {}", surfaces.len()),
                join_indices(surfaces),
                format!("TARGET_SIZE {size}"),
            ],
        )
    }

    pub fn wrapper_delete_all_local_controls(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all wrapper local controls",
            "WRAPPER_DELETE_ALL_LOCAL_CONTROLS",
        )
    }

    pub fn wrapper_new_volume_control(
        &mut self,
        control: &VolumeControl,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", control.frame)?;
        require_positive("target_size", Scalar::Float(control.target_size))?;
        require_text("name", &control.name)?;
        if control.name.contains('"') {
            return Err(ValidationError::invalid("name", "must not contain a double quote"));
        }
        self.block(
            "Create new wrapping volume control",
            [
                "WRAPPER_NEW_VOLUME_CONTROL".to_string(),
                format!("FRAME {}", control.frame),
                format!("VERTEX_1 {}", control.vertex_1),
                format!("VERTEX_2 {}", control.vertex_2),
                format!("TARGET_SIZE {}", format_float(control.target_size)),
                format!("NAME \"{}\"", control.name),
            ],
        )
    }

    pub fn wrapper_delete_all_volume_controls(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all wrapper volume controls",
            "WRAPPER_DELETE_ALL_VOLUME_CONTROLS",
        )
    }

    pub fn wrapper_execute(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Execute the wrapper", "WRAPPER_EXECUTE")
    }

    /// Transfer the wrapped mesh, replacing or retaining the source geometry.
    pub fn wrapper_transfer(
        &mut self,
        source: SourceTreatment,
    ) -> Result<&mut Self, ValidationError> {
        self.command(
            "Transfer the wrapper mesh",
            format!("WRAPPER_TRANSFER {source}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_workflow() {
        let mut s = Script::with_banners(false);
        s.wrapper_set_input(&[1, 2]).unwrap();
        s.wrapper_set_global_size(0.15).unwrap();
        s.wrapper_set_vertex_projection(RunOption::Enable).unwrap();
        s.wrapper_set_anisotropy(2.0, 1.0, 1.0).unwrap();
        s.wrapper_create_local_control().unwrap();
        s.wrapper_edit_local_control(1, &[3, 4], 0.05).unwrap();
        s.wrapper_execute().unwrap();
        s.wrapper_transfer(SourceTreatment::Retain).unwrap();
        assert_eq!(
            s.lines(),
            [
                "WRAPPER_SET_INPUT 2",
                "1,2",
                "WRAPPER_SET_GLOBAL_SIZE 0.15",
                "WRAPPER_SET_VERTEX_PROJECTION ENABLE",
                "WRAPPER_SET_ANISOTROPY 2.0 1.0 1.0",
                "WRAPPER_CREATE_LOCAL_CONTROL",
                "WRAPPER_EDIT_LOCAL_CONTROL 1",
                "SURFACES 2",
                "3,4",
                "TARGET_SIZE 0.05",
                "WRAPPER_EXECUTE",
                "WRAPPER_TRANSFER RETAIN"
            ]
        );
    }

    #[test]
    fn volume_control_quotes_its_name() {
        let mut s = Script::with_banners(false);
        s.wrapper_new_volume_control(&VolumeControl::default()).unwrap();
        s.wrapper_delete_all_volume_controls().unwrap();
        s.wrapper_delete_all_local_controls().unwrap();
        assert_eq!(
            s.lines(),
            [
                "WRAPPER_NEW_VOLUME_CONTROL",
                "FRAME 1",
                "VERTEX_1 0.5 0.3 1.0",
                "VERTEX_2 1.5 0.6 2.3",
                "TARGET_SIZE 0.25",
                "NAME \"Airplane_nose\"",
                "WRAPPER_DELETE_ALL_VOLUME_CONTROLS",
                "WRAPPER_DELETE_ALL_LOCAL_CONTROLS"
            ]
        );
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let mut s = Script::new();
        assert!(s.wrapper_set_global_size(0.0).is_err());
        assert!(s.wrapper_set_anisotropy(1.0, -1.0, 1.0).is_err());
        assert!(s.wrapper_edit_local_control(0, &[1], 0.1).is_err());
        assert!(s.wrapper_edit_local_control(1, &[], 0.1).is_err());
        let bad = VolumeControl {
            target_size: 0.0,
            ..VolumeControl::default()
        };
        assert!(s.wrapper_new_volume_control(&bad).is_err());
        assert!(s.is_empty());
    }
}
