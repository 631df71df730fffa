//! Solver sweeper and stability & control toolbox.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::emit::boundaries_csv;
use crate::errors::ValidationError;
use crate::options::{
    ForceUnits, RunOption, StabilityDenominator, StabilityNumerator, StabilityUnits,
    SurfaceDataExport, VelocityMode,
};
use crate::script::Script;
use crate::values::{
    format_float, path_arg, require_finite, require_positive_index, require_text, Boundaries,
    Scalar,
};

/// One swept variable: `start` to `stop` in steps of `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub stop: f64,
    pub delta: f64,
}

impl Sweep {
    pub fn new(start: f64, stop: f64, delta: f64) -> Self {
        Self { start, stop, delta }
    }

    fn validate(&self, parameter: &'static str) -> Result<(), ValidationError> {
        for v in [self.start, self.stop, self.delta] {
            require_finite(parameter, Scalar::Float(v))?;
        }
        if self.delta == 0.0 {
            return Err(ValidationError::invalid(parameter, "delta must not be zero"));
        }
        Ok(())
    }

    fn lines(&self, prefix: &str) -> [String; 3] {
        [
            format!("{prefix}_START {}", format_float(self.start)),
            format!("{prefix}_STOP {}", format_float(self.stop)),
            format!("{prefix}_DELTA {}", format_float(self.delta)),
        ]
    }
}

/// Written for axes that are not swept.
const IDLE_SWEEP: Sweep = Sweep {
    start: 0.0,
    stop: 0.0,
    delta: 1.0,
};

impl FromStr for Sweep {
    type Err = ValidationError;

    /// Parse `START:STOP:DELTA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [start, stop, delta] = parts.as_slice() else {
            return Err(ValidationError::invalid(
                "sweep",
                format!("expected START:STOP:DELTA; got '{s}'"),
            ));
        };
        let num = |t: &str| {
            t.parse::<f64>().map_err(|_| {
                ValidationError::invalid("sweep", format!("'{t}' is not a number"))
            })
        };
        let sweep = Sweep::new(num(*start)?, num(*stop)?, num(*delta)?);
        sweep.validate("sweep")?;
        Ok(sweep)
    }
}

/// Arguments of `EXECUTE_SOLVER_SWEEPER`. `None` axes are disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct SweeperConfig {
    pub results: PathBuf,
    pub angle_of_attack: Option<Sweep>,
    pub side_slip_angle: Option<Sweep>,
    pub velocity: Option<Sweep>,
    pub velocity_mode: VelocityMode,
    pub export_surface_data: SurfaceDataExport,
    /// Required unless `export_surface_data` is `DISABLE`.
    pub surface_results_path: Option<PathBuf>,
    pub clear_solution_after_each_run: RunOption,
    pub reference_velocity_equals_freestream: RunOption,
    pub append_to_existing_sweep: RunOption,
}

impl SweeperConfig {
    pub fn new(results: impl Into<PathBuf>) -> Self {
        Self {
            results: results.into(),
            angle_of_attack: None,
            side_slip_angle: None,
            velocity: None,
            velocity_mode: VelocityMode::Velocity,
            export_surface_data: SurfaceDataExport::Disable,
            surface_results_path: None,
            clear_solution_after_each_run: RunOption::Enable,
            reference_velocity_equals_freestream: RunOption::Enable,
            append_to_existing_sweep: RunOption::Disable,
        }
    }

    fn lines(&self) -> Result<Vec<String>, ValidationError> {
        let results = path_arg("results_filename", &self.results)?;
        let axes = [
            ("angle_of_attack", self.angle_of_attack),
            ("side_slip_angle", self.side_slip_angle),
            ("velocity", self.velocity),
        ];
        for (name, sweep) in axes {
            if let Some(sw) = sweep {
                sw.validate(name)?;
            }
        }
        let surface_path = match (self.export_surface_data, &self.surface_results_path) {
            (SurfaceDataExport::Disable, _) => None,
            (_, Some(p)) => Some(path_arg("surface_results_path", p)?),
            (_, None) => {
                return Err(ValidationError::invalid(
                    "surface_results_path",
                    "is required when surface data is exported per step",
                ))
            }
        };

        let on = |s: Option<Sweep>| RunOption::from(s.is_some());
        let mut out = vec![
            "EXECUTE_SOLVER_SWEEPER".to_string(),
            format!("ANGLE_OF_ATTACK {}", on(self.angle_of_attack)),
            format!("SIDE_SLIP_ANGLE {}", on(self.side_slip_angle)),
            format!("VELOCITY {}", on(self.velocity)),
        ];
        out.extend(self.angle_of_attack.unwrap_or(IDLE_SWEEP).lines("ANGLE_OF_ATTACK"));
        out.extend(self.side_slip_angle.unwrap_or(IDLE_SWEEP).lines("SIDE_SLIP_ANGLE"));
        let prefix = match self.velocity_mode {
            VelocityMode::Velocity => "VELOCITY",
            VelocityMode::Mach => "MACH",
        };
        out.extend(self.velocity.unwrap_or(IDLE_SWEEP).lines(prefix));
        out.push(format!(
            "EXPORT_SURFACE_DATA_PER_STEP {}",
            self.export_surface_data
        ));
        out.extend(surface_path);
        out.push(format!(
            "CLEAR_SOLUTION_AFTER_EACH_RUN {}",
            self.clear_solution_after_each_run
        ));
        out.push(format!(
            "REFERENCE_VELOCITY_EQUALS_FREESTREAM {}",
            self.reference_velocity_equals_freestream
        ));
        out.push(format!(
            "APPEND_TO_EXISTING_SWEEP {}",
            self.append_to_existing_sweep
        ));
        out.push(results);
        Ok(out)
    }
}

/// Stability & control toolbox settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilitySettings {
    pub rotation_frame: u32,
    pub units: StabilityUnits,
    pub clear_solver_per_run: RunOption,
    pub angular_rate_increment: f64,
}

impl Default for StabilitySettings {
    fn default() -> Self {
        Self {
            rotation_frame: 1,
            units: StabilityUnits::PerRadian,
            clear_solver_per_run: RunOption::Disable,
            angular_rate_increment: 0.1,
        }
    }
}

/// A user-defined stability derivative.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityCoefficient {
    pub name: String,
    pub frame: u32,
    /// Checked for membership but not written; FlightStream takes the units
    /// from the loads settings.
    pub units: ForceUnits,
    pub numerator: StabilityNumerator,
    pub denominator: StabilityDenominator,
    pub constant: f64,
    pub boundaries: Boundaries,
}

impl Script {
    pub fn execute_solver_sweeper(
        &mut self,
        config: &SweeperConfig,
    ) -> Result<&mut Self, ValidationError> {
        let lines = config.lines()?;
        self.block("Execute the solver sweeper", lines)
    }

    pub fn stability_toolbox_settings(
        &mut self,
        settings: &StabilitySettings,
    ) -> Result<&mut Self, ValidationError> {
        require_positive_index("rotation_frame", settings.rotation_frame)?;
        require_finite(
            "angular_rate_increment",
            Scalar::Float(settings.angular_rate_increment),
        )?;
        self.block(
            "Set the S&C toolbox parameters",
            [
                "STABILITY_TOOLBOX_SETTINGS".to_string(),
                format!("ROTATION_FRAME {}", settings.rotation_frame),
                format!("UNITS {}", settings.units),
                format!("CLEAR_SOLVER_PER_RUN {}", settings.clear_solver_per_run),
                format!(
                    "ANGULAR_RATE_INCREMENT {}",
                    format_float(settings.angular_rate_increment)
                ),
            ],
        )
    }

    pub fn stability_toolbox_new_coefficient(
        &mut self,
        coefficient: &StabilityCoefficient,
    ) -> Result<&mut Self, ValidationError> {
        require_text("name", &coefficient.name)?;
        require_positive_index("frame", coefficient.frame)?;
        require_finite("constant", Scalar::Float(coefficient.constant))?;
        coefficient.boundaries.validate("boundaries")?;
        let mut lines = vec![
            "STABILITY_TOOLBOX_NEW_COEFFICIENT".to_string(),
            format!("NAME {}", coefficient.name),
            format!("NUMERATOR {}", coefficient.numerator),
            format!("DENOMINATOR {}", coefficient.denominator),
            format!("FRAME {}", coefficient.frame),
            format!("CONSTANT {}", format_float(coefficient.constant)),
        ];
        lines.extend(boundaries_csv("BOUNDARIES", &coefficient.boundaries));
        self.block("Create a new S&C Coefficient", lines)
    }

    pub fn stability_toolbox_delete_all(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Delete all S&C coefficients",
            "STABILITY_TOOLBOX_DELETE_ALL",
        )
    }

    pub fn compute_stability_coefficients(&mut self) -> Result<&mut Self, ValidationError> {
        self.command(
            "Compute all S&C coefficients",
            "COMPUTE_STABILITY_COEFFICIENTS",
        )
    }

    pub fn stability_toolbox_export(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&mut Self, ValidationError> {
        let path = path_arg("filename", path.as_ref())?;
        self.block(
            "Export the S&C toolbox results",
            ["STABILITY_TOOLBOX_EXPORT".to_string(), path],
        )
    }
}
