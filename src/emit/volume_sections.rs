//! Volume sections: planar flow-field meshes for post-processing.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{Plane, PrismsType, RunOption};
use crate::script::Script;
use crate::values::{path_arg, require_finite, require_positive_index, Scalar};

/// Near-wall prism layer of a volume section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismLayer {
    pub kind: PrismsType,
    pub thickness: Scalar,
    pub layers: u32,
    pub growth_rate: Scalar,
}

impl Default for PrismLayer {
    fn default() -> Self {
        Self {
            kind: PrismsType::Prisms,
            thickness: Scalar::Float(0.3),
            layers: 20,
            growth_rate: Scalar::Float(1.2),
        }
    }
}

impl PrismLayer {
    fn validate(&self) -> Result<(), ValidationError> {
        require_finite("thickness", self.thickness)?;
        require_positive_index("layers", self.layers)?;
        require_finite("growth_rate", self.growth_rate)
    }
}

impl std::fmt::Display for PrismLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.kind, self.thickness, self.layers, self.growth_rate
        )
    }
}

/// Shape of a volume section in its plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionShape {
    /// Rectangle between two diagonal corners, meshed at `size`.
    Rectangle {
        size: Scalar,
        corner_1: (Scalar, Scalar),
        corner_2: (Scalar, Scalar),
    },
    /// Annulus between radii `r1` and `r2` with an `ipts` x `jpts` grid.
    Circle {
        ipts: u32,
        jpts: u32,
        r1: Scalar,
        r2: Scalar,
    },
}

/// Arguments of the `CREATE_NEW_*_VOLUME_SECTION` commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSection {
    pub frame: u32,
    pub plane: Plane,
    pub offset: Scalar,
    pub shape: SectionShape,
    pub prisms: PrismLayer,
}

impl Script {
    pub fn create_new_volume_section(
        &mut self,
        section: &VolumeSection,
    ) -> Result<&mut Self, ValidationError> {
        let VolumeSection {
            frame,
            plane,
            offset,
            shape,
            prisms,
        } = *section;
        require_positive_index("frame", frame)?;
        require_finite("offset", offset)?;
        prisms.validate()?;
        match shape {
            SectionShape::Rectangle {
                size,
                corner_1: (x1, y1),
                corner_2: (x2, y2),
            } => {
                let corners = [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)];
                for (parameter, v) in [("size", size)].into_iter().chain(corners) {
                    require_finite(parameter, v)?;
                }
                self.command(
                    "Create new volume section (rectangle)",
                    format!(
                        "CREATE_NEW_RECTANGLE_VOLUME_SECTION {frame} {plane} {offset} {size} \
                         {x1} {y1} {x2} {y2} {prisms}"
                    ),
                )
            }
            SectionShape::Circle { ipts, jpts, r1, r2 } => {
                require_positive_index("ipts", ipts)?;
                require_positive_index("jpts", jpts)?;
                require_finite("r1", r1)?;
                require_finite("r2", r2)?;
                self.command(
                    "Create new volume section (circle)",
                    format!(
                        "CREATE_NEW_CIRCLE_VOLUME_SECTION {frame} {plane} {offset} {ipts} {jpts} \
                         {r1} {r2} {prisms}"
                    ),
                )
            }
        }
    }

    /// Toggle boundary layer induction on volume section `index`.
    pub fn volume_section_boundary_layer(
        &mut self,
        index: u32,
        setting: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", index)?;
        self.command(
            "Toggle volume section boundary layer induction",
            format!("VOLUME_SECTION_BOUNDARY_LAYER {index} {setting}"),
        )
    }

    pub fn volume_section_wireframe(
        &mut self,
        index: u32,
        setting: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", index)?;
        self.command(
            "Toggle volume section wire-frame setting",
            format!("VOLUME_SECTION_WIREFRAME {index} {setting}"),
        )
    }

    pub fn update_all_volume_sections(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Update the volume sections", "UPDATE_ALL_VOLUME_SECTIONS")
    }

    pub fn export_volume_section_vtk(
        &mut self,
        index: u32,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        self.volume_section_export(
            "Export volume section as ParaView (VTK) file",
            "EXPORT_VOLUME_SECTION_VTK",
            index,
            path.as_ref(),
        )
    }

    pub fn export_volume_section_2d_vtk(
        &mut self,
        index: u32,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        self.volume_section_export(
            "Export volume section as 2D ParaView (VTK) file",
            "EXPORT_VOLUME_SECTION_2D_VTK",
            index,
            path.as_ref(),
        )
    }

    pub fn export_volume_section_tecplot(
        &mut self,
        index: u32,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        self.volume_section_export(
            "Export volume section as Tecplot (DAT) file",
            "EXPORT_VOLUME_SECTION_TECPLOT",
            index,
            path.as_ref(),
        )
    }

    fn volume_section_export(
        &mut self,
        title: &str,
        keyword: &str,
        index: u32,
        path: &Path,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", index)?;
        let path = path_arg("filename", path)?;
        self.block(title, [format!("{keyword} {index}"), path])
    }

    pub fn delete_volume_section(&mut self, index: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("index", index)?;
        self.command(
            "Delete a volume section",
            format!("DELETE_VOLUME_SECTION {index}"),
        )
    }

    pub fn delete_all_volume_sections(&mut self) -> Result<&mut Self, ValidationError> {
        self.command("Delete all volume sections", "DELETE_ALL_VOLUME_SECTIONS")
    }
}
