//! Reporter that forwards walk events to `tracing`.

use attachment_core::{OverrideReport, Reporter, TunerError, WalkSummary, WriteError};

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn override_applied(&mut self, report: &OverrideReport) {
        tracing::info!(item_id = %report.item_id, "{}", report);
    }

    fn write_rejected(&mut self, item_id: &str, error: &WriteError) {
        tracing::warn!(
            item_id,
            code = error.error_code(),
            severity = error.severity().as_str(),
            "discarded write: {}",
            error
        );
    }

    fn finished(&mut self, summary: &WalkSummary) {
        tracing::info!(
            visited = summary.visited,
            rejected = summary.rejected_writes,
            "stats changed for {} attachments",
            summary.modified_count
        );
    }
}
