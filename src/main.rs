use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod doctor;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        flightscript::set_color_mode(mode);
    }
    let _telemetry = flightscript::telemetry_init(cli.verbose);

    match commands::dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            let use_err = flightscript::color_enabled_stderr();
            flightscript::log_error_stderr(use_err, &format!("flightscript: {e:#}"));
            ExitCode::from(commands::exit_code_for(&e))
        }
    }
}
