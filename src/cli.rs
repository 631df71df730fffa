use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use flightscript::{OptionSet, SolverModel, Sweep};

pub(crate) const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nbuilt:  ",
    env!("FLIGHTSCRIPT_BUILD_DATE"),
    "\ntarget: ",
    env!("FLIGHTSCRIPT_BUILD_TARGET"),
    " (",
    env!("FLIGHTSCRIPT_BUILD_PROFILE"),
    ")\nrustc:  ",
    env!("FLIGHTSCRIPT_BUILD_RUSTC"),
);

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| format!("invalid duration '{s}': {e}"))
}

fn parse_sweep(s: &str) -> Result<Sweep, String> {
    s.parse::<Sweep>().map_err(|e| e.to_string())
}

fn parse_model(s: &str) -> Result<SolverModel, String> {
    SolverModel::parse("model", s).map_err(|e| e.to_string())
}

#[derive(Args, Debug, Clone)]
pub(crate) struct RunArgs {
    /// Script to execute (default: configured script, else script_out.txt)
    pub(crate) script: Option<PathBuf>,

    /// FlightStream executable (overrides config, FS_EXE and PATH lookup)
    #[arg(long)]
    pub(crate) exe: Option<PathBuf>,

    /// Run FlightStream without its GUI
    #[arg(long)]
    pub(crate) hidden: bool,

    /// Start FlightStream and return immediately
    #[arg(long = "no-wait")]
    pub(crate) no_wait: bool,

    /// Kill FlightStream after this long, e.g. 90s or 1h30m
    #[arg(long, value_parser = parse_duration)]
    pub(crate) timeout: Option<Duration>,

    /// Print the command that would run, but do not execute
    #[arg(long = "dry-run")]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SweepArgs {
    /// Simulation file to open
    #[arg(long)]
    pub(crate) fsm: PathBuf,

    /// Angle-of-attack sweep as START:STOP:DELTA (degrees)
    #[arg(long, value_parser = parse_sweep, allow_hyphen_values = true)]
    pub(crate) aoa: Sweep,

    /// File FlightStream writes the sweep results to
    #[arg(long)]
    pub(crate) results: PathBuf,

    /// Solver model used to initialize the solver
    #[arg(long, value_parser = parse_model, default_value = "INCOMPRESSIBLE")]
    pub(crate) model: SolverModel,

    /// Freestream velocity
    #[arg(long)]
    pub(crate) velocity: Option<f64>,

    /// Reference area
    #[arg(long = "ref-area")]
    pub(crate) ref_area: Option<f64>,

    /// Reference length
    #[arg(long = "ref-length")]
    pub(crate) ref_length: Option<f64>,

    /// Solver iterations per sweep point
    #[arg(long)]
    pub(crate) iterations: Option<u32>,

    /// Where to write the script (default: configured script, else script_out.txt)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,

    /// Launch FlightStream on the written script
    #[arg(long)]
    pub(crate) run: bool,

    /// FlightStream executable used with --run
    #[arg(long)]
    pub(crate) exe: Option<PathBuf>,

    /// Run FlightStream without its GUI (with --run)
    #[arg(long)]
    pub(crate) hidden: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Execute a script with FlightStream
    Run(RunArgs),

    /// Delete a script file
    Reset {
        /// Script to delete (default: configured script, else script_out.txt)
        script: Option<PathBuf>,
    },

    /// Print the lines of a script file
    Show {
        /// Script to print (default: configured script, else script_out.txt)
        script: Option<PathBuf>,
        /// Emit the lines as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Generate an angle-of-attack sweep script
    #[command(
        after_long_help = concat!(
            "Examples:\n",
            "  flightscript sweep --fsm wing.fsm --aoa -4:12:2 --results polar.txt\n",
            "  flightscript sweep --fsm wing.fsm --aoa 0:10:1 --results polar.txt --velocity 60 \
             --run --hidden\n",
        )
    )]
    Sweep(SweepArgs),

    /// List enumerated option sets and their tokens
    Options {
        /// Only list this set, e.g. solver-model
        name: Option<String>,
    },

    /// Report version, configuration and executable resolution
    Doctor,
}

#[derive(Parser, Debug)]
#[command(
    name = "flightscript",
    version,
    long_version = LONG_VERSION,
    about = "Generate, inspect and run FlightStream macro scripts.",
    after_long_help = concat!(
        "Examples:\n",
        "  flightscript sweep --fsm wing.fsm --aoa -4:12:2 --results polar.txt --run\n",
        "  flightscript show --json\n",
        "  flightscript run runs/script_out.txt --hidden --timeout 30m\n",
        "  flightscript options solver-model\n\n",
    )
)]
pub(crate) struct Cli {
    /// Colorize stderr output: auto|always|never
    #[arg(long = "color", value_enum, global = true)]
    pub(crate) color: Option<flightscript::ColorMode>,

    /// Config file (default: FLIGHTSCRIPT_CONFIG, else ~/.config/flightscript/config.yaml)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// More diagnostics; repeat for more detail
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}
