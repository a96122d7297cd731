//! Print the normalized configuration.

use anyhow::{Context, Result};
use attachment_content::ConfigLoader;
use clap::Parser;

use super::ConfigArgs;
use crate::config::TunerConfig;

/// Show the detected schema and the normalized rule table as JSON
#[derive(Parser, Debug)]
pub struct ShowConfig {
    #[command(flatten)]
    pub sources: ConfigArgs,
}

impl ShowConfig {
    pub fn execute(self, env: &TunerConfig) -> Result<()> {
        let path = self.sources.factory(env).config_path();
        let config = ConfigLoader::load(&path)?;

        let document = serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        });
        let json =
            serde_json::to_string_pretty(&document).context("Failed to serialize configuration")?;
        println!("{json}");
        Ok(())
    }
}
