//! Solver result exports.

use std::path::{Path, PathBuf};

use crate::emit::indices_per_line;
use crate::errors::ValidationError;
use crate::options::{ExportFormat, PressureUnits, RunOption};
use crate::script::Script;
use crate::values::{path_arg, require_positive_index, require_text, Boundaries};

/// Variables written by the VTK export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VtkVariables {
    #[default]
    All,
    Named(Vec<String>),
}

/// Arguments of the FEM pressure CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub units: PressureUnits,
    pub frame: u32,
    pub surfaces: Boundaries,
}

impl CsvExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: ExportFormat::DifferencePressure,
            units: PressureUnits::Pascals,
            frame: 1,
            surfaces: Boundaries::All,
        }
    }
}

/// `SURFACES -1`, or `SURFACES n` followed by one index per line.
fn surfaces_block(surfaces: &Boundaries) -> Vec<String> {
    match surfaces {
        Boundaries::All => vec!["SURFACES -1".to_string()],
        Boundaries::List(v) => indices_per_line("SURFACES", v),
    }
}

impl Script {
    pub fn export_solver_analysis_spreadsheet(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_file", path.as_ref())?;
        self.block(
            "Export solver analysis spreadsheet",
            ["EXPORT_SOLVER_ANALYSIS_SPREADSHEET".to_string(), path],
        )
    }

    pub fn export_solver_analysis_tecplot(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_file", path.as_ref())?;
        self.block(
            "Export solver analysis Tecplot data",
            ["EXPORT_SOLVER_ANALYSIS_TECPLOT".to_string(), path],
        )
    }

    pub fn export_solver_analysis_vtk(
        &mut self,
        path: impl AsRef<Path>,
        surfaces: &Boundaries,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_filepath", path.as_ref())?;
        surfaces.validate("boundaries")?;
        let mut lines = vec!["EXPORT_SOLVER_ANALYSIS_VTK".to_string(), path];
        lines.extend(surfaces_block(surfaces));
        self.block("Export solver analysis VTK data", lines)
    }

    /// Choose the VTK export variables and whether the wake is exported.
    pub fn set_vtk_export_variables(
        &mut self,
        variables: &VtkVariables,
        export_wake: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        let mut lines = vec!["SET_VTK_EXPORT_VARIABLES".to_string()];
        match variables {
            VtkVariables::All => lines.push(format!("-1 {export_wake}")),
            VtkVariables::Named(names) => {
                if names.is_empty() {
                    return Err(ValidationError::invalid(
                        "variables",
                        "must name at least one variable",
                    ));
                }
                for n in names {
                    require_text("variables", n)?;
                }
                lines.push(format!("{} {export_wake}", names.len()));
                lines.extend(names.iter().cloned());
            }
        }
        self.block("Set VTK export variables", lines)
    }

    /// FEM pressure export as CSV.
    pub fn export_solver_analysis_csv(
        &mut self,
        export: &CsvExport,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_path", &export.path)?;
        require_positive_index("frame", export.frame)?;
        export.surfaces.validate("boundary_indices")?;
        let mut lines = vec![
            "EXPORT_SOLVER_ANALYSIS_CSV".to_string(),
            path,
            format!("FORMAT {}", export.format),
            format!("UNITS {}", export.units),
            format!("FRAME {}", export.frame),
        ];
        lines.extend(surfaces_block(&export.surfaces));
        self.block("Export solver analysis CSV data", lines)
    }

    /// Pressure loads as Nastran PLOAD cards.
    pub fn export_solver_analysis_pload_bdf(
        &mut self,
        path: impl AsRef<Path>,
        surfaces: &Boundaries,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("file_path", path.as_ref())?;
        surfaces.validate("boundary_indices")?;
        let mut lines = vec!["EXPORT_SOLVER_ANALYSIS_PLOAD_BDF".to_string(), path];
        lines.extend(surfaces_block(surfaces));
        self.block("Export solver analysis PLOAD BDF data", lines)
    }

    pub fn export_solver_analysis_force_distributions(
        &mut self,
        path: impl AsRef<Path>,
        surfaces: &Boundaries,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("output_filepath", path.as_ref())?;
        surfaces.validate("boundary_indices")?;
        let mut lines = vec![
            "EXPORT_SOLVER_ANALYSIS_FORCE_DISTRIBUTIONS".to_string(),
            path,
        ];
        lines.extend(surfaces_block(surfaces));
        self.block("Export solver analysis force distributions", lines)
    }
}
