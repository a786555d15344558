use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sweeper_core::{CellCount, Coord, GameConfig};

/// Partial board settings, from a TOML file or the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub bombs: Option<CellCount>,
}

impl ConfigOverrides {
    fn apply(self, config: GameConfig) -> GameConfig {
        GameConfig::new_unchecked(
            self.rows.unwrap_or(config.rows),
            self.cols.unwrap_or(config.cols),
            self.bombs.unwrap_or(config.bombs),
        )
    }
}

/// Reference board, then the config file, then command-line flags.
pub fn resolve(path: Option<&Path>, flags: ConfigOverrides) -> Result<GameConfig> {
    let mut config = GameConfig::reference();

    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        config = parse(&text)
            .with_context(|| format!("Could not parse config file {}", path.display()))?
            .apply(config);
    }

    let config = flags.apply(config);
    config.validate()?;
    Ok(config)
}

fn parse(text: &str) -> Result<ConfigOverrides> {
    Ok(toml::from_str(text)?)
}
