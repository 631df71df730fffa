//! Mesh import, export and surface editing.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{
    ExportMeshFileType, FaceSubset, ImportMeshFileType, LengthUnits, Plane, RotationAxis,
    RunOption, Threshold, ThresholdRange, TranslationType,
};
use crate::script::Script;
use crate::values::{
    flag, join_indices, path_arg, require_finite, require_finite_vertex, require_positive_index,
    require_text, validate_indices, Boundaries, Scalar, Target, Vertex,
};

/// Arguments of `SURFACE_ROTATE`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRotation {
    pub frame: u32,
    pub axis: RotationAxis,
    /// Degrees.
    pub angle: Scalar,
    pub surfaces: Boundaries,
    pub split_vertices: RunOption,
    pub adaptive_mesh: RunOption,
    pub detach_normal_to_axis: RunOption,
}

impl SurfaceRotation {
    /// Rotate every surface about `axis` of the reference frame.
    pub fn new(axis: RotationAxis, angle: impl Into<Scalar>) -> Self {
        Self {
            frame: 1,
            axis,
            angle: angle.into(),
            surfaces: Boundaries::All,
            split_vertices: RunOption::Disable,
            adaptive_mesh: RunOption::Disable,
            detach_normal_to_axis: RunOption::Disable,
        }
    }
}

/// Arguments of `SURFACE_SELECT_BY_THRESHOLD`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSelection {
    pub frame: u32,
    pub threshold: Threshold,
    pub min: Scalar,
    pub max: Scalar,
    pub range: ThresholdRange,
    pub subset: FaceSubset,
}

impl ThresholdSelection {
    pub fn new(threshold: Threshold, min: impl Into<Scalar>, max: impl Into<Scalar>) -> Self {
        Self {
            frame: 1,
            threshold,
            min: min.into(),
            max: max.into(),
            range: ThresholdRange::AboveMinBelowMax,
            subset: FaceSubset::AllFaces,
        }
    }
}

/// Surface argument of the translate commands, where `0` means every surface.
fn zero_for_all(parameter: &'static str, surface: Target) -> Result<String, ValidationError> {
    surface.validate(parameter)?;
    Ok(match surface {
        Target::All => "0".to_string(),
        Target::Index(i) => i.to_string(),
    })
}

impl Script {
    /// Import a mesh file; `clear` removes the existing geometry first.
    pub fn import_mesh(
        &mut self,
        path: impl AsRef<Path>,
        units: LengthUnits,
        file_type: ImportMeshFileType,
        clear: bool,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("geometry_filepath", path.as_ref())?;
        let mut lines = vec![
            "IMPORT".to_string(),
            format!("UNITS {units}"),
            format!("FILE_TYPE {file_type}"),
            format!("FILE {path}"),
        ];
        if clear {
            lines.push("CLEAR".to_string());
        }
        self.block("Import a geometry into the simulation", lines)
    }

    /// Import a component cross-section (CCS) geometry.
    pub fn ccs_import(
        &mut self,
        path: impl AsRef<Path>,
        close_component_ends: RunOption,
        update_properties: RunOption,
        clear_existing: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("ccs_filepath", path.as_ref())?;
        self.block(
            "Import a Component Cross-Section (CCS) geometry file",
            [
                "CCS_IMPORT".to_string(),
                format!("CLOSE_COMPONENT_ENDS {close_component_ends}"),
                format!("UPDATE_PROPERTIES {update_properties}"),
                format!("CLEAR_EXISTING {clear_existing}"),
                format!("FILE {path}"),
            ],
        )
    }

    pub fn export_surface_mesh(
        &mut self,
        path: impl AsRef<Path>,
        file_type: ExportMeshFileType,
        surface: Target,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_path", path.as_ref())?;
        surface.validate("surface")?;
        self.block(
            "Export a geometry surface to external file",
            [format!("EXPORT_SURFACE_MESH {file_type} {surface}"), path],
        )
    }

    pub fn surface_rotate(
        &mut self,
        rotation: &SurfaceRotation,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", rotation.frame)?;
        require_finite("angle", rotation.angle)?;
        rotation.surfaces.validate("surfaces")?;
        let mut lines = vec![
            "SURFACE_ROTATE".to_string(),
            format!("FRAME {}", rotation.frame),
            format!("AXIS {}", rotation.axis),
            format!("ANGLE {}", rotation.angle),
        ];
        match &rotation.surfaces {
            Boundaries::All => lines.push("SURFACES -1".to_string()),
            Boundaries::List(v) => {
                lines.push(format!("SURFACES {}", v.len()));
                lines.push(
                    v.iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }
        }
        lines.extend([
            format!("SPLIT_VERTICES {}", rotation.split_vertices),
            format!("ADAPTIVE_MESH {}", rotation.adaptive_mesh),
            format!("DETACH_NORMAL_TO_AXIS {}", rotation.detach_normal_to_axis),
        ]);
        self.block("Rotate an existing surface", lines)
    }

    /// Translate a surface by `offset`, given in `frame`.
    pub fn translate_surface_in_frame(
        &mut self,
        frame: u32,
        offset: impl Into<Vertex>,
        units: LengthUnits,
        surface: Target,
        split_vertices: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        let offset = offset.into();
        require_positive_index("frame", frame)?;
        require_finite_vertex("offset", offset)?;
        let surface = zero_for_all("surface", surface)?;
        self.command(
            "Translate a surface with a vector",
            format!(
                "TRANSLATE_SURFACE_IN_FRAME {frame} {offset} {units} {surface} {split_vertices}"
            ),
        )
    }

    /// Move a surface so that frame `from` lands on frame `to`.
    pub fn translate_surface_by_frame(
        &mut self,
        from: u32,
        to: u32,
        surface: Target,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame1", from)?;
        require_positive_index("frame2", to)?;
        let surface = zero_for_all("surface", surface)?;
        self.command(
            "Translate a surface from one frame to another",
            format!("TRANSLATE_SURFACE_BY_FRAME {from} {to} {surface}"),
        )
    }

    /// Scale surfaces by per-axis factors in `frame`.
    pub fn surface_scale(
        &mut self,
        frame: u32,
        factors: impl Into<Vertex>,
        surface: Target,
    ) -> Result<&mut Self, ValidationError> {
        let factors = factors.into();
        require_positive_index("frame", frame)?;
        require_finite_vertex("scale", factors)?;
        surface.validate("surface")?;
        self.command(
            "Scale existing surface(s)",
            format!("SURFACE_SCALE {frame} {factors} {surface}"),
        )
    }

    pub fn surface_invert(&mut self, surface: Target) -> Result<&mut Self, ValidationError> {
        surface.validate("index")?;
        self.command(
            "Invert the surface normals of a surface",
            format!("SURFACE_INVERT {surface}"),
        )
    }

    pub fn surface_rename(
        &mut self,
        surface: u32,
        name: &str,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", surface)?;
        require_text("name", name)?;
        self.command(
            "Rename the surface geometry",
            format!("SURFACE_RENAME {surface} {name}"),
        )
    }

    pub fn select_geometry_by_id(&mut self, surface: Target) -> Result<&mut Self, ValidationError> {
        surface.validate("surface")?;
        self.command(
            "Select a geometry surface by its index",
            format!("SELECT_GEOMETRY_BY_ID {surface}"),
        )
    }

    pub fn surface_select_by_threshold(
        &mut self,
        selection: &ThresholdSelection,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", selection.frame)?;
        require_finite("min_value", selection.min)?;
        require_finite("max_value", selection.max)?;
        self.block(
            "Select surface faces by threshold",
            [
                "SURFACE_SELECT_BY_THRESHOLD".to_string(),
                format!("FRAME {}", selection.frame),
                format!("THRESHOLD {}", selection.threshold),
                format!("MIN_VALUE {}", selection.min),
                format!("MAX_VALUE {}", selection.max),
                format!("RANGE {}", selection.range),
                format!("SUBSET {}", selection.subset),
            ],
        )
    }

    pub fn create_new_surface_from_selection(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Create new geometry surface from selected faces",
            "CREATE_NEW_SURFACE_FROM_SELECTION",
        )
    }

    /// Cut surfaces with `plane` of `frame`, shifted by `offset` along its normal.
    pub fn surface_cut_by_plane(
        &mut self,
        frame: u32,
        plane: Plane,
        offset: impl Into<Scalar>,
        surface: Target,
    ) -> Result<&mut Self, ValidationError> {
        let offset = offset.into();
        require_positive_index("frame", frame)?;
        require_finite("offset", offset)?;
        surface.validate("surface")?;
        self.block(
            "Cut all surfaces using a cutting plane",
            [
                "SURFACE_CUT_BY_PLANE".to_string(),
                format!("FRAME {frame}"),
                format!("PLANE {plane}"),
                format!("OFFSET {offset}"),
                format!("SURFACE {surface}"),
            ],
        )
    }

    pub fn surface_mirror(
        &mut self,
        surface: u32,
        frame: u32,
        plane: Plane,
        combine: bool,
        delete_source: bool,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("surface", surface)?;
        require_positive_index("coordinate_system", frame)?;
        self.command(
            "Mirror an existing surface",
            format!(
                "SURFACE_MIRROR {surface} {frame} {} {} {}",
                plane.mirror_index(),
                flag(combine),
                flag(delete_source)
            ),
        )
    }

    pub fn surface_auto_hole_fill(&mut self, surface: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("surface", surface)?;
        self.block(
            "Automatic hole filling on an existing surface",
            ["SURFACE_AUTO_HOLE_FILL".to_string(), surface.to_string()],
        )
    }

    pub fn surface_combine(&mut self, surfaces: &[u32]) -> Result<&mut Self, ValidationError> {
        validate_indices("surface_indices", surfaces)?;
        self.block(
            "Combine selected surfaces",
            [
                format!("SURFACE_COMBINE {}", surfaces.len()),
                join_indices(surfaces),
            ],
        )
    }

    pub fn delete_selected_faces(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete selected mesh faces", "DELETE_SELECTED_FACES")
    }

    pub fn surface_delete(&mut self, surface: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("surface_index", surface)?;
        self.block(
            "Delete an existing surface",
            ["SURFACE_DELETE".to_string(), format!("SURFACE {surface}")],
        )
    }

    pub fn surface_clearall(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete all surfaces in simulation", "SURFACE_CLEARALL")
    }

    /// Move the selected nodes to `position` or by it, in `frame`.
    pub fn transform_selected_nodes(
        &mut self,
        frame: u32,
        kind: TranslationType,
        position: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let position = position.into();
        require_positive_index("coordinate_system", frame)?;
        require_finite_vertex("position", position)?;
        self.command(
            "Transform node by translation",
            format!("TRANSFORM_SELECTED_NODES {frame} {kind} {position}"),
        )
    }
}
