use clap::Subcommand;
use daycheck_core::error::Result;
use daycheck_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value (e.g. "time_of_day_override", "display.show_icons")
    Get { key: String },
    /// Change one value; "none" clears catalog_path or time_of_day_override
    Set { key: String, value: String },
    /// Print the whole configuration as TOML
    List,
    /// Print where the configuration file lives
    Path,
    /// Restore the defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            Config::load()?.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let toml = toml::to_string_pretty(&config).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
            print!("{toml}");
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
