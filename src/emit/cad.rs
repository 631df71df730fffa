//! CAD import and the CAD-->Create drawing curve tools.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{
    Axis, CadMesh, CurveDimension, GrowthScheme, LengthUnits, Plane, Quadrant, SectionSymmetry,
};
use crate::script::Script;
use crate::values::{
    path_arg, require_finite, require_finite_vertex, require_positive, require_positive_index,
    Scalar, Target, Vertex,
};

/// Arguments of `CAD_CREATE_AUTO_CROSS_SECTIONS`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoCrossSections {
    pub frame: u32,
    /// Sweep direction of the section curves.
    pub axis: Axis,
    /// More than one.
    pub sections: u32,
    pub body: u32,
    pub growth_scheme: GrowthScheme,
    pub growth_rate: Scalar,
    pub symmetry: SectionSymmetry,
    pub source: CadMesh,
}

impl Default for AutoCrossSections {
    fn default() -> Self {
        Self {
            frame: 1,
            axis: Axis::Y,
            sections: 20,
            body: 1,
            growth_scheme: GrowthScheme::DualSuccessive,
            growth_rate: Scalar::Float(1.2),
            symmetry: SectionSymmetry::None,
            source: CadMesh::Mesh,
        }
    }
}

fn require_sections(sections: u32) -> Result<(), ValidationError> {
    if sections > 1 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range("sections", sections, "greater than 1"))
    }
}

impl Script {
    /// Link the CAD-->Create pane to `model`.
    pub fn cad_create_initialize(&mut self, model: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("model_index", model)?;
        self.command(
            "Initialize the CAD-->Create pane window",
            format!("CAD_CREATE_INITIALIZE {model}"),
        )
    }

    pub fn cad_create_import_curve_txt(
        &mut self,
        path: impl AsRef<Path>,
        units: LengthUnits,
        dimension: CurveDimension,
        frame: u32,
        plane: Plane,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("txt_filepath", path.as_ref())?;
        require_positive_index("frame", frame)?;
        self.block(
            "Import a CAD-->Create drawing curve from txt file",
            [
                format!("CAD_CREATE_IMPORT_CURVE_TXT {units} {dimension} {frame} {plane}"),
                path,
            ],
        )
    }

    pub fn cad_create_import_ccs(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("ccs_filepath", path.as_ref())?;
        self.block(
            "Import a CAD-->Create drawing curve from CSV file",
            ["CAD_CREATE_IMPORT_CURVE_CCS".to_string(), path],
        )
    }

    pub fn cad_create_auto_cross_sections(
        &mut self,
        sections: &AutoCrossSections,
    ) -> Result<&mut Self, ValidationError> {
        let AutoCrossSections {
            frame,
            axis,
            sections,
            body,
            growth_scheme,
            growth_rate,
            symmetry,
            source,
        } = *sections;
        require_positive_index("frame", frame)?;
        require_sections(sections)?;
        require_positive_index("body_index", body)?;
        require_positive("growth_rate", growth_rate)?;
        self.command(
            "Create a series of automatic cross-sections from mesh body",
            format!(
                "CAD_CREATE_AUTO_CROSS_SECTIONS {frame} {axis} {sections} {body} \
                 {growth_scheme} {growth_rate} {symmetry} {source}"
            ),
        )
    }

    /// Slice `body` with `plane` of `frame`, keeping the half given by `quadrant`.
    pub fn cad_create_cross_section(
        &mut self,
        frame: u32,
        plane: Plane,
        offset: impl Into<Scalar>,
        body: u32,
        quadrant: Quadrant,
    ) -> Result<&mut Self, ValidationError> {
        let offset = offset.into();
        require_positive_index("frame", frame)?;
        require_finite("offset", offset)?;
        require_positive_index("body_index", body)?;
        self.command(
            "Create a cross-section from an existing mesh body",
            format!("CAD_CREATE_CROSS_SECTION {frame} {plane} {offset} {body} {quadrant}"),
        )
    }

    pub fn cad_create_point_curve(
        &mut self,
        point: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let point = point.into();
        require_finite_vertex("point", point)?;
        self.command(
            "Create a singular point curve (3D)",
            format!("CAD_CREATE_CURVE_POINT {point}"),
        )
    }

    /// Circular arc about `origin` from `start` to `end`.
    pub fn cad_create_curve_arc(
        &mut self,
        origin: impl Into<Vertex>,
        start: impl Into<Vertex>,
        end: impl Into<Vertex>,
    ) -> Result<&mut Self, ValidationError> {
        let (origin, start, end) = (origin.into(), start.into(), end.into());
        require_finite_vertex("origin", origin)?;
        require_finite_vertex("vertex_1", start)?;
        require_finite_vertex("vertex_2", end)?;
        self.command(
            "Create a circular arc curve (3D)",
            format!("CAD_CREATE_CURVE_ARC {origin} {start} {end}"),
        )
    }

    pub fn cad_create_curve_select(&mut self, curve: Target) -> Result<&mut Self, ValidationError> {
        curve.validate("curve_index")?;
        self.command(
            "Select one of the CAD-->Create drawing curves",
            format!("CAD_CREATE_CURVE_SELECT {curve}"),
        )
    }

    pub fn cad_create_curve_unselect(
        &mut self,
        curve: Target,
    ) -> Result<&mut Self, ValidationError> {
        curve.validate("curve_index")?;
        self.command(
            "Unselect specific CAD-->Create drawing curves by index",
            format!("CAD_CREATE_CURVE_UNSELECT {curve}"),
        )
    }

    pub fn cad_create_curve_reverse(
        &mut self,
        curve: Target,
    ) -> Result<&mut Self, ValidationError> {
        curve.validate("curve_index")?;
        let title = match curve {
            Target::All => "Reverse ALL of the CAD-->Create drawing curves",
            Target::Index(_) => "Reverse specific CAD-->Create drawing curves by index",
        };
        self.command(title, format!("CAD_CREATE_CURVE_REVERSE {curve}"))
    }

    pub fn cad_create_curve_delete_all(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete ALL of the CAD-->Create drawing curves",
            "CAD_CREATE_CURVE_DELETE_ALL",
        )
    }

    pub fn cad_create_curve_delete_selected(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete only selected CAD-->Create drawing curves",
            "CAD_CREATE_CURVE_DELETE_SELECTED",
        )
    }

    pub fn cad_create_curve_delete_unselected(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete only unselected CAD-->Create drawing curves",
            "CAD_CREATE_CURVE_DELETE_UNSELECTED",
        )
    }

    pub fn cad_create_curve_export_ccs(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_path", path.as_ref())?;
        self.block(
            "Export selected CAD-->Create drawing curves to CSV file",
            ["CAD_CREATE_CURVE_EXPORT_CCS".to_string(), path],
        )
    }

    /// Import a CAD file (IGES, STEP and the like).
    pub fn cad_import_cad(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ValidationError> {
        let path = path_arg("cad_filepath", path.as_ref())?;
        self.block(
            "Import a CAD geometry into the simulation",
            ["IMPORT_CAD".to_string(), path],
        )
    }

    /// Transfer the mesh of CAD `model` to the Mesh node.
    pub fn convert_cad_to_mesh(&mut self, model: u32) -> Result<&mut Self, ValidationError> {
        require_positive_index("model_index", model)?;
        self.command(
            "Transfer CAD model mesh to the Mesh node of the simulation",
            format!("CONVERT_CAD_TO_MESH {model}"),
        )
    }

    pub fn cad_create_auto_annular_cross_sections(
        &mut self,
        frame: u32,
        sections: u32,
        body: u32,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("frame", frame)?;
        require_sections(sections)?;
        require_positive_index("body_index", body)?;
        self.command(
            "Create a series of automatic annular cross-sections",
            format!("CAD_CREATE_AUTO_ANNULAR_CROSS_SECTIONS {frame} {sections} {body}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Script {
        Script::with_banners(false)
    }

    #[test]
    fn curve_imports() {
        let mut s = bare();
        s.cad_create_initialize(1).unwrap();
        s.cad_create_import_curve_txt(
            "airfoil.txt",
            LengthUnits::Meter,
            CurveDimension::TwoD,
            1,
            Plane::Yz,
        )
        .unwrap();
        s.cad_create_import_ccs("body.csv").unwrap();
        assert_eq!(
            s.lines(),
            [
                "CAD_CREATE_INITIALIZE 1",
                "CAD_CREATE_IMPORT_CURVE_TXT METER 2D 1 YZ",
                "airfoil.txt",
                "CAD_CREATE_IMPORT_CURVE_CCS",
                "body.csv"
            ]
        );
    }

    #[test]
    fn auto_cross_sections_default_line() {
        let mut s = bare();
        s.cad_create_auto_cross_sections(&AutoCrossSections::default())
            .unwrap();
        s.cad_create_auto_annular_cross_sections(1, 20, 2).unwrap();
        assert_eq!(
            s.lines(),
            [
                "CAD_CREATE_AUTO_CROSS_SECTIONS 1 Y 20 1 3 1.2 NONE MESH",
                "CAD_CREATE_AUTO_ANNULAR_CROSS_SECTIONS 1 20 2"
            ]
        );
    }

    #[test]
    fn geometry_curves() {
        let mut s = bare();
        s.cad_create_cross_section(1, Plane::Xz, 0.0, 1, Quadrant::Third)
            .unwrap();
        s.cad_create_point_curve((0.0, 1.0, 0.0)).unwrap();
        s.cad_create_curve_arc((0.0, 0.0, 0.0), (-1.0, 0.0, 0.0), (0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "CAD_CREATE_CROSS_SECTION 1 XZ 0.0 1 3",
                "CAD_CREATE_CURVE_POINT 0.0 1.0 0.0",
                "CAD_CREATE_CURVE_ARC 0.0 0.0 0.0 -1.0 0.0 0.0 0.0 1.0 0.0"
            ]
        );
    }

    #[test]
    fn curve_selection_and_deletion() {
        let mut s = bare();
        s.cad_create_curve_select(Target::Index(2)).unwrap();
        s.cad_create_curve_unselect(Target::All).unwrap();
        s.cad_create_curve_reverse(Target::All).unwrap();
        s.cad_create_curve_delete_all().unwrap();
        s.cad_create_curve_delete_selected().unwrap();
        s.cad_create_curve_delete_unselected().unwrap();
        s.cad_create_curve_export_ccs("curves.csv").unwrap();
        s.cad_import_cad("wing.igs").unwrap();
        s.convert_cad_to_mesh(1).unwrap();
        assert_eq!(
            s.lines(),
            [
                "CAD_CREATE_CURVE_SELECT 2",
                "CAD_CREATE_CURVE_UNSELECT -1",
                "CAD_CREATE_CURVE_REVERSE -1",
                "CAD_CREATE_CURVE_DELETE_ALL",
                "CAD_CREATE_CURVE_DELETE_SELECTED",
                "CAD_CREATE_CURVE_DELETE_UNSELECTED",
                "CAD_CREATE_CURVE_EXPORT_CCS",
                "curves.csv",
                "IMPORT_CAD",
                "wing.igs",
                "CONVERT_CAD_TO_MESH 1"
            ]
        );
    }

    #[test]
    fn reverse_banner_names_the_selection() {
        let mut s = Script::new();
        s.cad_create_curve_reverse(Target::All).unwrap();
        assert!(s.lines()[1].contains("Reverse ALL"));
    }

    #[test]
    fn section_counts_must_exceed_one() {
        let mut s = bare();
        let one = AutoCrossSections {
            sections: 1,
            ..AutoCrossSections::default()
        };
        let err = s.cad_create_auto_cross_sections(&one).unwrap_err();
        assert_eq!(err.parameter(), "sections");
        let flat = AutoCrossSections {
            growth_rate: Scalar::Float(0.0),
            ..AutoCrossSections::default()
        };
        assert!(s.cad_create_auto_cross_sections(&flat).is_err());
        assert!(s.cad_create_auto_annular_cross_sections(1, 1, 1).is_err());
        assert!(s.cad_create_curve_select(Target::Index(0)).is_err());
        assert!(s.is_empty());
    }
}
