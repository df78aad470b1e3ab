use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::{Config, KEYS};

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!("  {:<22} {}", "defaults.theme", config.theme().unwrap_or("light"));
    println!(
        "  {:<22} {}",
        "defaults.start_mode",
        config.start_mode().unwrap_or_default()
    );
    println!(
        "  {:<22} {}",
        "defaults.font",
        config
            .font()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(system)".dimmed().to_string())
    );
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    log::debug!("Saved config to {}", path.display());
    println!("{} {key} = {value}", "Set".green().bold());
    println!("{}", format!("Valid keys: {}", KEYS.join(", ")).dimmed());
    Ok(())
}
