use std::env;
use std::process::ExitCode;

use flightscript::exec::EXE_ENV;
use flightscript::Settings;

use crate::cli::Cli;

fn value(use_color: bool, s: &str) -> String {
    flightscript::paint(use_color, "\x1b[34;1m", s)
}

/// Print a diagnostic report to stderr. Problems are reported, never fatal.
pub(crate) fn run_doctor(cli: &Cli) -> ExitCode {
    let use_err = flightscript::color_enabled_stderr();
    eprintln!("flightscript doctor");
    eprintln!();
    eprintln!("  version: v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  build:   {} {} ({})",
        env!("FLIGHTSCRIPT_BUILD_DATE"),
        env!("FLIGHTSCRIPT_BUILD_TARGET"),
        env!("FLIGHTSCRIPT_BUILD_PROFILE")
    );
    eprintln!("  rustc:   {}", env!("FLIGHTSCRIPT_BUILD_RUSTC"));
    eprintln!("  host:    {} / {}", env::consts::OS, env::consts::ARCH);
    eprintln!(
        "  tracing: {}",
        if cfg!(feature = "trace") { "enabled" } else { "disabled (build with --features trace)" }
    );
    eprintln!();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            flightscript::log_warn_stderr(use_err, &format!("  config: {e}"));
            Settings::default()
        }
    };
    let source = settings
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none; using defaults)".to_string());
    eprintln!("  config:  {}", value(use_err, &source));
    eprintln!("  script:  {}", value(use_err, &settings.script.display().to_string()));
    eprintln!(
        "  script exists: {}",
        if settings.script.is_file() { "yes" } else { "no" }
    );
    eprintln!("  hidden:  {}", settings.hidden);
    eprintln!("  banners: {}", settings.banners);
    eprintln!(
        "  timeout: {}",
        settings
            .timeout
            .map(|t| humantime::format_duration(t).to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    eprintln!();

    let fs_exe = env::var(EXE_ENV).unwrap_or_default();
    eprintln!(
        "  {EXE_ENV}: {}",
        if fs_exe.trim().is_empty() { "(unset)" } else { fs_exe.as_str() }
    );
    match flightscript::resolve_executable(None, settings.executable.as_deref()) {
        Ok(exe) => {
            let shown = exe.display().to_string();
            eprintln!("  executable: {}", value(use_err, &shown));
            if !exe.exists() && which::which(&exe).is_err() {
                flightscript::log_warn_stderr(
                    use_err,
                    "  warning: the executable does not exist; scripts cannot be run",
                );
            }
        }
        Err(e) => {
            flightscript::log_warn_stderr(use_err, &format!("  executable: {e}"));
        }
    }
    eprintln!();
    eprintln!("doctor: completed diagnostics.");
    ExitCode::from(0)
}
