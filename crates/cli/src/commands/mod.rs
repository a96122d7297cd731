//! Subcommands of the tuner binary.

mod apply;
mod show_config;

pub use apply::Apply;
pub use show_config::ShowConfig;

use std::path::PathBuf;

use attachment_content::ContentFactory;
use clap::Args;

use crate::config::TunerConfig;

/// Where the configuration is read from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Directory holding config.jsonc and items.json [env: TUNER_DATA_DIR]
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (.json, .jsonc or .toml) instead of the data directory lookup
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn factory(&self, env: &TunerConfig) -> ContentFactory {
        let factory = ContentFactory::new(env.data_dir_or(self.data_dir.clone()));
        match &self.config {
            Some(path) => factory.with_config(path),
            None => factory,
        }
    }
}
