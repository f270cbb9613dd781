use console::style;
use ide_config_installer::args;
use ide_config_installer::commands;
use ide_config_installer::platform::SystemEnvironment;
use ide_config_installer::InstallerError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let parsed = match args::parse_os(std::env::args_os().skip(1)) {
        Ok(parsed) => parsed,
        Err(err) => {
            init_logging(false);
            return report_error(err, false);
        }
    };
    let verbose = parsed.flag("v") || parsed.flag("verbose");

    init_logging(verbose);

    match commands::execute(&parsed, &SystemEnvironment) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_error(err, verbose),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `-v`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report_error(err: InstallerError, verbose: bool) -> ExitCode {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    let code = err.exit_code();

    if verbose {
        // Debug output lists the cause chain, plus a backtrace when RUST_BACKTRACE is set
        eprintln!("{:?}", anyhow::Error::new(err));
    }

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
