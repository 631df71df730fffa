//! Typed builder for FlightStream macro scripts.
//!
//! A [`Script`] collects command blocks through validated emitters (see
//! [`emit`]), is written to disk with [`Script::write_to_file`] and handed to
//! FlightStream with [`execute`].
//!
//! ```no_run
//! use flightscript::{RunOption, Script, SolverInitialization, SolverModel};
//!
//! # fn main() -> Result<(), flightscript::ScriptError> {
//! let mut script = Script::new();
//! script
//!     .open_fsm("wing.fsm", RunOption::Disable)?
//!     .initialize_solver(&SolverInitialization::new(SolverModel::Incompressible))?
//!     .start_solver()?
//!     .close_flightstream()?;
//! script.write_to_file(flightscript::DEFAULT_SCRIPT_NAME)?;
//! # Ok(())
//! # }
//! ```
//!
//! Environment
//! - FS_EXE: FlightStream executable when neither `--exe` nor the config names one.
//! - FLIGHTSCRIPT_CONFIG: config file path; see [`config`] for the keys and overrides.
//! - FLIGHTSCRIPT_COLOR / NO_COLOR: stderr color control.
//! - FLIGHTSCRIPT_LOG / RUST_LOG: log filter (`trace` feature).

pub mod color;
pub mod config;
pub mod emit;
pub mod errors;
pub mod exec;
pub mod options;
pub mod script;
pub mod telemetry;
pub mod util;
pub mod values;

pub use color::{
    color_enabled_stderr, log_error_stderr, log_info_stderr, log_warn_stderr, paint,
    set_color_mode, ColorMode,
};
pub use config::{Config, Settings};
pub use emit::{
    AcousticSection, ActuatorEdit, ActuatorSettings, Animation, AutoCrossSections,
    CoordinateSystem, CsvExport, FluidPlot, FluidProperties, ForcePlot, Freestream, InletRemesh,
    MotionProfile, MotionSolver, PhysicsDetection, PrismLayer, SectionShape,
    SolverInitialization, StabilityCoefficient, StabilitySettings, SurfaceRotation,
    SurfaceSelection, Sweep, SweeperConfig, ThresholdSelection, TrailingEdgeBoundary,
    UniteBodies, VolumeControl, VolumeSection, VtkVariables,
};
pub use errors::{exit_code_for_io_error, exit_code_for_script_error, ScriptError, ValidationError};
pub use exec::{
    describe_command, execute, resolve_executable, script_args, ExecuteOptions, Execution,
};
pub use options::*;
pub use script::{Script, DEFAULT_SCRIPT_NAME};
pub use telemetry::telemetry_init;
pub use values::{Boundaries, Scalar, Target, Vertex};
