use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use flightscript::{
    describe_command, exit_code_for_io_error, exit_code_for_script_error, options, Execution,
    ExecuteOptions, RunOption, Script, ScriptError, Settings, SolverInitialization,
    SweeperConfig, ValidationError,
};

use crate::cli::{Cli, Command, RunArgs, SweepArgs};
use crate::doctor::run_doctor;

pub(crate) fn dispatch(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Run(args) => run_script(cli, args),
        Command::Reset { script } => run_reset(cli, script.as_deref()),
        Command::Show { script, json } => run_show(cli, script.as_deref(), *json),
        Command::Sweep(args) => run_sweep(cli, args),
        Command::Options { name } => run_options(name.as_deref()),
        Command::Doctor => Ok(run_doctor(cli)),
    }
}

/// Exit code for an error that reached `main`.
pub(crate) fn exit_code_for(e: &anyhow::Error) -> u8 {
    if let Some(se) = e.downcast_ref::<ScriptError>() {
        return exit_code_for_script_error(se);
    }
    if e.downcast_ref::<ValidationError>().is_some() {
        return 2;
    }
    if let Some(ioe) = e.downcast_ref::<io::Error>() {
        return exit_code_for_io_error(ioe);
    }
    1
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    Settings::load(cli.config.as_deref()).context("failed to load configuration")
}

fn script_path(explicit: Option<&Path>, settings: &Settings) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.script.clone())
}

fn run_script(cli: &Cli, args: &RunArgs) -> Result<ExitCode> {
    let settings = load_settings(cli)?;
    let script = script_path(args.script.as_deref(), &settings);
    let exe =
        flightscript::resolve_executable(args.exe.as_deref(), settings.executable.as_deref())?;
    let options = ExecuteOptions {
        hidden: args.hidden || settings.hidden,
        wait: !args.no_wait,
        timeout: args.timeout.or(settings.timeout),
    };
    launch(cli, &exe, &script, &options, args.dry_run)
}

fn launch(
    cli: &Cli,
    exe: &Path,
    script: &Path,
    options: &ExecuteOptions,
    dry_run: bool,
) -> Result<ExitCode> {
    let use_err = flightscript::color_enabled_stderr();
    let preview = describe_command(exe, script, options.hidden);
    if cli.verbose > 0 || dry_run {
        flightscript::log_info_stderr(use_err, &format!("flightscript: command: {preview}"));
    }
    if dry_run {
        flightscript::log_info_stderr(
            use_err,
            "flightscript: dry-run requested; not executing FlightStream.",
        );
        return Ok(ExitCode::from(0));
    }

    let outcome = flightscript::execute(exe, script, options)
        .with_context(|| format!("running {}", script.display()))?;
    match outcome {
        Execution::Started { pid } => {
            flightscript::log_info_stderr(
                use_err,
                &format!("flightscript: started FlightStream (pid {pid})"),
            );
            Ok(ExitCode::from(0))
        }
        Execution::Finished {
            status,
            duration,
            stdout,
            stderr,
        } => {
            print!("{stdout}");
            eprint!("{stderr}");
            let code = status.code().unwrap_or(1);
            if cli.verbose > 0 {
                flightscript::log_info_stderr(
                    use_err,
                    &format!(
                        "flightscript: FlightStream exited with {code} after {}",
                        humantime::format_duration(round_to_millis(duration))
                    ),
                );
            }
            if code != 0 {
                flightscript::log_warn_stderr(
                    use_err,
                    &format!("flightscript: FlightStream exited with status {code}"),
                );
            }
            Ok(ExitCode::from(exit_byte(code)))
        }
    }
}

/// Truncate a child exit code to a process exit byte without turning a
/// failure into success (256 would otherwise become 0).
fn exit_byte(code: i32) -> u8 {
    match (code & 0xff) as u8 {
        0 if code != 0 => 1,
        b => b,
    }
}

fn round_to_millis(d: std::time::Duration) -> std::time::Duration {
    std::time::Duration::from_millis(d.as_millis() as u64)
}

fn run_reset(cli: &Cli, script: Option<&Path>) -> Result<ExitCode> {
    let settings = load_settings(cli)?;
    let path = script_path(script, &settings);
    let existed = path.exists();
    Script::new().hard_reset(&path)?;
    let use_err = flightscript::color_enabled_stderr();
    let msg = if existed {
        format!("flightscript: removed {}", path.display())
    } else {
        format!("flightscript: nothing to remove at {}", path.display())
    };
    flightscript::log_info_stderr(use_err, &msg);
    Ok(ExitCode::from(0))
}

fn run_show(cli: &Cli, script: Option<&Path>, json: bool) -> Result<ExitCode> {
    let settings = load_settings(cli)?;
    let path = script_path(script, &settings);
    let text = fs::read_to_string(&path).map_err(|e| ScriptError::Io {
        path: path.clone(),
        source: e,
    })?;
    let lines: Vec<&str> = text.lines().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(ExitCode::from(0))
}

/// Open the model, apply the reference quantities, initialize the solver and
/// hand the angle-of-attack range to the solver sweeper.
pub(crate) fn build_sweep_script(args: &SweepArgs, banners: bool) -> Result<Script, ScriptError> {
    let mut script = Script::with_banners(banners);
    script.open_fsm(&args.fsm, RunOption::Disable)?.steady()?;
    if let Some(v) = args.velocity {
        script.solver_velocity(v)?;
    }
    if let Some(a) = args.ref_area {
        script.ref_area(a)?;
    }
    if let Some(l) = args.ref_length {
        script.ref_length(l)?;
    }
    if let Some(n) = args.iterations {
        script.solver_iterations(n)?;
    }
    let sweeper = SweeperConfig {
        angle_of_attack: Some(args.aoa),
        ..SweeperConfig::new(args.results.clone())
    };
    script
        .initialize_solver(&SolverInitialization::new(args.model))?
        .execute_solver_sweeper(&sweeper)?
        .close_flightstream()?;
    Ok(script)
}

fn run_sweep(cli: &Cli, args: &SweepArgs) -> Result<ExitCode> {
    let settings = load_settings(cli)?;
    let out = script_path(args.out.as_deref(), &settings);
    let script = build_sweep_script(args, settings.banners).context("invalid sweep")?;
    script.write_to_file(&out)?;
    let use_err = flightscript::color_enabled_stderr();
    flightscript::log_info_stderr(
        use_err,
        &format!(
            "flightscript: wrote {} ({} lines)",
            out.display(),
            script.len()
        ),
    );
    if !args.run {
        return Ok(ExitCode::from(0));
    }
    let exe =
        flightscript::resolve_executable(args.exe.as_deref(), settings.executable.as_deref())?;
    let options = ExecuteOptions {
        hidden: args.hidden || settings.hidden,
        wait: true,
        timeout: settings.timeout,
    };
    launch(cli, &exe, &out, &options, false)
}

fn run_options(name: Option<&str>) -> Result<ExitCode> {
    let catalog = options::catalog();
    match name {
        None => {
            for (set, tokens) in &catalog {
                println!("{set}: {}", tokens.join(" "));
            }
            Ok(ExitCode::from(0))
        }
        Some(wanted) => {
            let Some((_, tokens)) = catalog
                .iter()
                .find(|(set, _)| set.eq_ignore_ascii_case(wanted.trim()))
            else {
                let use_err = flightscript::color_enabled_stderr();
                let names: Vec<&str> = catalog.iter().map(|(set, _)| *set).collect();
                flightscript::log_error_stderr(
                    use_err,
                    &format!(
                        "flightscript: unknown option set '{wanted}'; known sets: {}",
                        names.join(", ")
                    ),
                );
                return Ok(ExitCode::from(2));
            };
            for token in tokens {
                println!("{token}");
            }
            Ok(ExitCode::from(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightscript::Sweep;

    fn sweep_args() -> SweepArgs {
        SweepArgs {
            fsm: PathBuf::from("wing.fsm"),
            aoa: Sweep::new(-2.0, 6.0, 2.0),
            results: PathBuf::from("polar.txt"),
            model: flightscript::SolverModel::Incompressible,
            velocity: Some(60.0),
            ref_area: None,
            ref_length: None,
            iterations: Some(500),
            out: None,
            run: false,
            exe: None,
            hidden: false,
        }
    }

    #[test]
    fn sweep_script_opens_sweeps_and_closes() {
        let script = build_sweep_script(&sweep_args(), false).unwrap();
        let lines = script.lines();
        assert_eq!(lines[0], "OPEN");
        assert_eq!(lines[1], "wing.fsm");
        assert!(lines.iter().any(|l| l == "SOLVER_SET_VELOCITY 60.0"));
        assert!(lines.iter().any(|l| l == "SOLVER_SET_ITERATIONS 500"));
        let init = lines.iter().position(|l| l == "INITIALIZE_SOLVER").unwrap();
        let sweep = lines.iter().position(|l| l == "EXECUTE_SOLVER_SWEEPER").unwrap();
        assert!(init < sweep);
        assert!(lines.iter().any(|l| l == "ANGLE_OF_ATTACK_START -2.0"));
        assert_eq!(lines.last().map(String::as_str), Some("CLOSE_FLIGHTSTREAM"));
    }

    #[test]
    fn invalid_reference_area_fails_before_writing() {
        let args = SweepArgs {
            ref_area: Some(0.0),
            ..sweep_args()
        };
        let err = build_sweep_script(&args, true).unwrap_err();
        assert_eq!(exit_code_for_script_error(&err), 2);
    }

    #[test]
    fn exit_codes_survive_context() {
        let e = anyhow::Error::from(ScriptError::Validation(ValidationError::Invalid {
            parameter: "x",
            reason: "bad".into(),
        }))
        .context("outer");
        assert_eq!(exit_code_for(&e), 2);
        let e = anyhow::Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(exit_code_for(&e), 127);
    }

    #[test]
    fn child_failures_never_exit_zero() {
        assert_eq!(exit_byte(0), 0);
        assert_eq!(exit_byte(3), 3);
        assert_eq!(exit_byte(255), 255);
        assert_eq!(exit_byte(256), 1);
        assert_eq!(exit_byte(512), 1);
        assert_eq!(exit_byte(257), 1);
        assert_eq!(exit_byte(-1), 255);
    }
}
