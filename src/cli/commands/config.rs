use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
    } = cli.command
    else {
        return Ok(());
    };
    let path = crate::config_path(cli);

    // ---- PRINT CONFIG ----
    if print_config || !check {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    // ---- CHECK CONFIG ----
    if check {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; defaults are in use (run `init`).",
                path.display()
            ));
            return Ok(());
        }

        let content = fs::read_to_string(&path)?;
        let missing = Config::missing_fields(&content)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for field in missing {
                info(format!("Missing field '{field}' (default value in use)"));
            }
        }
        cfg.validate()?;
    }

    Ok(())
}
