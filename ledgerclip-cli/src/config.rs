use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_ledgerclip_home, ledgerclip_home};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Print records as JSON even without --json
    pub json: bool,
    /// Decimal places shown for amounts in the human summary
    pub amount_decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputSection {
                json: false,
                amount_decimals: 2,
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ledgerclip_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    ensure_ledgerclip_home()?;
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote default config to {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.output.json, cfg.output.json);
        assert_eq!(back.output.amount_decimals, cfg.output.amount_decimals);
    }

    #[test]
    fn test_parses_partial_section() {
        let cfg: Config = toml::from_str("[output]\njson = true\namount_decimals = 0\n").unwrap();
        assert!(cfg.output.json);
        assert_eq!(cfg.output.amount_decimals, 0);
    }
}
