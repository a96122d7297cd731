//! Apply the configured adjustments to a catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use attachment_core::{TunerError, WalkSummary, run_from_sources};
use clap::{Parser, ValueEnum};

use super::ConfigArgs;
use crate::config::TunerConfig;
use crate::reporter::TracingReporter;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary line
    #[default]
    Text,
    /// The walk summary as JSON
    Json,
}

/// Load the catalog and configuration, adjust every attachment and report
#[derive(Parser, Debug)]
pub struct Apply {
    #[command(flatten)]
    pub sources: ConfigArgs,

    /// Item catalog (JSON) instead of <data-dir>/items.json
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Summary format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Apply {
    pub fn execute(self, env: &TunerConfig) -> Result<()> {
        let mut factory = self.sources.factory(env);
        if let Some(path) = &self.catalog {
            factory = factory.with_catalog(path);
        }
        tracing::debug!(
            config = %factory.config_path().display(),
            catalog = %factory.catalog_path().display(),
            "starting walk"
        );

        let mut reporter = TracingReporter;
        let (_, summary) = run_from_sources(&factory, &factory, &mut reporter)
            .map_err(|e| anyhow::anyhow!("[{}] {}", e.error_code(), e))?;

        println!("{}", render(&summary, self.format)?);
        Ok(())
    }
}

fn render(summary: &WalkSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Stats changed for {} attachments ({} visited, {} override values, {} rejected writes)",
            summary.modified_count,
            summary.visited,
            summary.overrides.len(),
            summary.rejected_writes
        )),
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("Failed to serialize walk summary")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_summary_leads_with_the_changed_count() {
        let summary = WalkSummary {
            visited: 4,
            modified_count: 3,
            overrides: Vec::new(),
            rejected_writes: 0,
        };
        let line = render(&summary, OutputFormat::Text).unwrap();
        assert!(line.starts_with("Stats changed for 3 attachments"));
    }

    #[test]
    fn json_summary_is_parseable() {
        let summary = WalkSummary {
            visited: 2,
            modified_count: 1,
            overrides: Vec::new(),
            rejected_writes: 1,
        };
        let json = render(&summary, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["modified_count"], 1);
        assert_eq!(value["rejected_writes"], 1);
    }
}
