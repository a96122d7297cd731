//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Data directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Clone, Debug)]
pub struct TunerConfig {
    pub data_dir: PathBuf,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl TunerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TUNER_DATA_DIR` - Directory holding `config.jsonc` and `items.json` (default: `./data`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("TUNER_DATA_DIR") {
            config.data_dir = dir;
        }

        config
    }

    /// Command-line value wins over the environment.
    pub fn data_dir_or(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.data_dir.clone())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
