//! JSON output via serde.

use crate::processing::SubnetReport;
use crate::Analysis;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct JsonError {
    kind: &'static str,
    message: String,
}

#[derive(Serialize, Debug)]
struct JsonEntry<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SubnetReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

impl<'a> From<&'a Analysis> for JsonEntry<'a> {
    fn from(analysis: &'a Analysis) -> Self {
        let input = analysis.input.trim();
        match &analysis.result {
            Ok(report) => JsonEntry {
                input,
                report: Some(report),
                error: None,
            },
            Err(e) => JsonEntry {
                input,
                report: None,
                error: Some(JsonError {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

/// Pretty-printed JSON array with one entry per analysis.
pub fn to_json(analyses: &[Analysis]) -> Result<String, serde_json::Error> {
    let entries: Vec<JsonEntry> = analyses.iter().map(JsonEntry::from).collect();
    serde_json::to_string_pretty(&entries)
}
