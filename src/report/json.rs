use crate::report::SelectionReport;
use crate::DiverseError;

pub fn generate_json_report(report: &SelectionReport) -> Result<String, DiverseError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| DiverseError::Other(format!("Failed to serialize report: {}", e)))
}
