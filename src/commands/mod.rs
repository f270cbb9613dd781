//! Application shell: command selection and usage

pub mod install;

use crate::config::Config;
use crate::installer::InstallReport;
use crate::platform::Environment;
use crate::types::{InstallerError, ParsedArguments};

/// Subcommand selected by the first positional argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Install,
    Usage,
}

/// Result of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Usage text was printed; nothing was installed
    ShowedUsage,
    /// Config files were installed
    Installed(InstallReport),
}

/// Pick the command; anything but `install` (or a help flag) shows usage
pub fn validate_command(args: &ParsedArguments) -> Command {
    if args.flag("h") || args.flag("help") {
        return Command::Usage;
    }
    match args.argument(0) {
        Some("install") => Command::Install,
        _ => Command::Usage,
    }
}

/// Usage text
pub fn usage() -> &'static str {
    "\
Usage: ide-config-installer install [--ide-version|-i <n>] [-v]

Install all WebIde (PhpStorm) config files.

Options:
  -i|--ide-version    IDE version (Default is 8)
  -c|--config         Read settings from a TOML file
  --source [dir]      Install from a local directory instead of downloading
  --base-url <url>    Download from another base URL
  -v                  More details to debug
"
}

/// Run one invocation from parsed arguments
pub fn execute(args: &ParsedArguments, env: &dyn Environment) -> Result<Outcome, InstallerError> {
    match validate_command(args) {
        Command::Usage => {
            println!("{}", usage());
            Ok(Outcome::ShowedUsage)
        }
        Command::Install => {
            let config = Config::try_from(args)?;
            install::run(&config, env).map(Outcome::Installed)
        }
    }
}
