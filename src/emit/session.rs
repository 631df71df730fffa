//! Simulation file handling and global session settings.

use std::path::Path;

use crate::errors::ValidationError;
use crate::options::{LengthUnits, RunOption};
use crate::script::Script;
use crate::values::{path_arg, require_positive, require_single_line, require_within, Scalar};

impl Script {
    /// Open an existing `.fsm` simulation file.
    pub fn open_fsm(
        &mut self,
        path: impl AsRef<Path>,
        load_solver_initialization: RunOption,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("fsm_filepath", path.as_ref())?;
        self.emit(
            "Open an existing simulation file",
            [
                "OPEN".to_string(),
                path,
                format!("LOAD_SOLVER_INITIALIZATION {load_solver_initialization}"),
            ],
        )?;
        Ok(self)
    }

    pub fn save_as_fsm(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ValidationError> {
        let path = path_arg("fsm_filepath", path.as_ref())?;
        self.emit(
            "Save an existing simulation file",
            ["SAVEAS".to_string(), path],
        )?;
        Ok(self)
    }

    pub fn new_simulation(&mut self) -> Result<&mut Self, ValidationError> {
        self.emit("Create a new simulation", ["NEW_SIMULATION".to_string()])?;
        Ok(self)
    }

    /// Stop script execution at this point.
    pub fn stop_script(&mut self) -> Result<&mut Self, ValidationError> {
        self.emit(
            "Stop a script at this location in the script file",
            ["STOP".to_string()],
        )?;
        Ok(self)
    }

    /// Print a message to the FlightStream log.
    pub fn print_message(&mut self, message: &str) -> Result<&mut Self, ValidationError> {
        require_single_line("message", message)?;
        self.emit(
            "Print a user-defined message to the log",
            [format!("PRINT {message}")],
        )?;
        Ok(self)
    }

    /// Call another script file from within this one.
    pub fn run_script(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ValidationError> {
        let path = path_arg("script_filepath", path.as_ref())?;
        self.emit(
            "Call a script from within another script",
            ["RUN_SCRIPT".to_string(), path],
        )?;
        Ok(self)
    }

    pub fn set_significant_digits(&mut self, digits: u32) -> Result<&mut Self, ValidationError> {
        if digits < 1 {
            return Err(ValidationError::out_of_range("digits", digits, "at least 1"));
        }
        self.emit(
            "Set significant digits",
            [format!("SET_SIGNIFICANT_DIGITS {digits}")],
        )?;
        Ok(self)
    }

    pub fn set_vertex_merge_tolerance(
        &mut self,
        tolerance: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let tolerance = tolerance.into();
        require_positive("tolerance", tolerance)?;
        self.emit(
            "Set vertex merge tolerance",
            [format!("SET_VERTEX_MERGE_TOLERANCE {tolerance}")],
        )?;
        Ok(self)
    }

    pub fn set_simulation_length_units(
        &mut self,
        units: LengthUnits,
    ) -> Result<&mut Self, ValidationError> {
        self.emit(
            "Set simulation length scale units",
            [format!("SET_SIMULATION_LENGTH_UNITS {units}")],
        )?;
        Ok(self)
    }

    /// Trailing edge sweep angle in degrees, within [0, 90].
    pub fn set_trailing_edge_sweep_angle(
        &mut self,
        angle: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_within("angle", angle, 0.0, 90.0)?;
        self.emit(
            "Set trailing edge sweep angle",
            [format!("SET_TRAILING_EDGE_SWEEP_ANGLE {angle}")],
        )?;
        Ok(self)
    }

    /// Trailing edge bluntness angle in degrees, within [45, 179].
    pub fn set_trailing_edge_bluntness_angle(
        &mut self,
        angle: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_within("angle", angle, 45.0, 179.0)?;
        self.emit(
            "Set trailing edge bluntness angle",
            [format!("SET_TRAILING_EDGE_BLUNTNESS_ANGLE {angle}")],
        )?;
        Ok(self)
    }

    /// Base region bending angle in degrees, within [0, 90].
    pub fn set_base_region_bending_angle(
        &mut self,
        angle: impl Into<Scalar>,
    ) -> Result<&mut Self, ValidationError> {
        let angle = angle.into();
        require_within("angle", angle, 0.0, 90.0)?;
        self.emit(
            "Set base region bending angle",
            [format!("SET_BASE_REGION_BENDING_ANGLE {angle}")],
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare() -> Script {
        Script::with_banners(false)
    }

    #[test]
    fn open_emits_path_and_initialization_flag() {
        let mut s = Script::new();
        s.open_fsm("C:/models/wing.fsm", RunOption::Enable).unwrap();
        assert_eq!(
            &s.lines()[4..],
            ["OPEN", "C:/models/wing.fsm", "LOAD_SOLVER_INITIALIZATION ENABLE"]
        );
    }

    #[test]
    fn simple_commands() {
        let mut s = bare();
        s.new_simulation()
            .unwrap()
            .save_as_fsm("out.fsm")
            .unwrap()
            .print_message("Hello from FlightStream!")
            .unwrap()
            .run_script("child.txt")
            .unwrap()
            .stop_script()
            .unwrap();
        assert_eq!(
            s.lines(),
            [
                "NEW_SIMULATION",
                "SAVEAS",
                "out.fsm",
                "PRINT Hello from FlightStream!",
                "RUN_SCRIPT",
                "child.txt",
                "STOP"
            ]
        );
    }

    #[test]
    fn numeric_settings_render_like_reference_scripts() {
        let mut s = bare();
        s.set_significant_digits(5).unwrap();
        s.set_vertex_merge_tolerance(1e-6).unwrap();
        s.set_simulation_length_units(LengthUnits::Meter).unwrap();
        s.set_trailing_edge_sweep_angle(45.0).unwrap();
        s.set_trailing_edge_bluntness_angle(85).unwrap();
        s.set_base_region_bending_angle(25.0).unwrap();
        assert_eq!(
            s.lines(),
            [
                "SET_SIGNIFICANT_DIGITS 5",
                "SET_VERTEX_MERGE_TOLERANCE 1e-06",
                "SET_SIMULATION_LENGTH_UNITS METER",
                "SET_TRAILING_EDGE_SWEEP_ANGLE 45.0",
                "SET_TRAILING_EDGE_BLUNTNESS_ANGLE 85",
                "SET_BASE_REGION_BENDING_ANGLE 25.0"
            ]
        );
    }

    #[test]
    fn out_of_range_values_append_nothing() {
        let mut s = bare();
        assert!(s.set_significant_digits(0).is_err());
        assert!(s.set_trailing_edge_sweep_angle(90.5).is_err());
        assert!(s.set_trailing_edge_bluntness_angle(44.0).is_err());
        assert!(s.set_trailing_edge_bluntness_angle(180).is_err());
        assert!(s.set_base_region_bending_angle(-1.0).is_err());
        assert!(s.set_vertex_merge_tolerance(0.0).is_err());
        assert!(s.print_message("line one\nline two").is_err());
        assert!(s.open_fsm("a\nb.fsm", RunOption::Disable).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn blank_messages_print_an_empty_line() {
        let mut s = bare();
        s.print_message("").unwrap().print_message("   ").unwrap();
        assert_eq!(s.lines(), ["PRINT ", "PRINT    "]);
        let err = s.print_message("done\r\n").unwrap_err();
        assert_eq!(err.parameter(), "message");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut s = bare();
        s.set_trailing_edge_sweep_angle(0).unwrap();
        s.set_trailing_edge_sweep_angle(90).unwrap();
        s.set_trailing_edge_bluntness_angle(45).unwrap();
        s.set_trailing_edge_bluntness_angle(179).unwrap();
        assert_eq!(s.len(), 4);
    }
}
