use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
///
/// An existing file is left untouched unless `force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = crate::config_path(cli);

    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    info("Initializing rPayroll…");
    Config::default().save_to(&path)?;

    success(format!("Config file: {}", path.display()));
    Ok(())
}
