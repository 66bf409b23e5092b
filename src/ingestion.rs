//! Loading typed datasets from the dashboard's JSON fixtures.
//!
//! The report core normally receives an already-built [`Dataset`], but the
//! dashboard stores its static data as JSON (`wasteData.json` and friends),
//! so a thin loader lives here. Shape errors surface as validation failures
//! carrying the serde message.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::types::{
    Dataset, EmissionsRecord, EnergyDataset, GridRecord, ReportKind, WasteRecord, WaterRecord,
};

/// Build a [`Dataset`] of the given kind from a JSON string.
///
/// Four kinds expect an array of records; energy expects the composite
/// `{ "weekly": [...], "split": [...] }` object.
pub fn dataset_from_json_str(kind: ReportKind, input: &str) -> ReportResult<Dataset> {
    let result = match kind {
        ReportKind::Waste => {
            serde_json::from_str::<Vec<WasteRecord>>(input).map(Dataset::Waste)
        }
        ReportKind::Emissions => {
            serde_json::from_str::<Vec<EmissionsRecord>>(input).map(Dataset::Emissions)
        }
        ReportKind::Energy => serde_json::from_str::<EnergyDataset>(input).map(Dataset::Energy),
        ReportKind::Water => {
            serde_json::from_str::<Vec<WaterRecord>>(input).map(Dataset::Water)
        }
        ReportKind::Grid => serde_json::from_str::<Vec<GridRecord>>(input).map(Dataset::Grid),
    };

    result.map_err(|e| ReportError::Validation {
        message: format!("{kind} dataset does not match the expected shape: {e}"),
    })
}

/// Build a [`Dataset`] of the given kind from a JSON file.
pub fn dataset_from_json_path(kind: ReportKind, path: impl AsRef<Path>) -> ReportResult<Dataset> {
    let text = fs::read_to_string(path)?;
    dataset_from_json_str(kind, &text)
}
