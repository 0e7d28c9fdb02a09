use crate::config::Config;
use crate::config::check::missing_keys_in_file;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            check_config(&path)?;
        }

        if *edit_config {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn check_config(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {} (defaults in use, run `rlogout init`)",
            path.display()
        ));
        return Ok(());
    }

    let missing = missing_keys_in_file(path)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        for key in missing {
            info(format!("Missing key '{}' (default value in use)", key));
        }
    }
    Ok(())
}

fn edit(path: &Path, requested_editor: Option<String>) {
    // platform default editor
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
