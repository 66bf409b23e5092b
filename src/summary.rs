//! Narrative summaries embedding aggregate statistics.
//!
//! Each kind has one fixed paragraph. Aggregates are computed from the full
//! dataset, never from the projected table, so summaries stay correct if
//! column selection ever changes.

use crate::error::{ReportError, ReportResult};
use crate::types::{fmt_number, Dataset, GridStatus, ReportKind};

/// Build the summary paragraph for a dataset.
///
/// The dataset must already conform to the declared `kind`; a mismatched
/// shape is reported as a validation error, never summarized partially.
pub fn summarize(kind: ReportKind, dataset: &Dataset) -> ReportResult<String> {
    if dataset.kind() != kind {
        return Err(ReportError::Validation {
            message: format!(
                "dataset shape is {} but the report was requested as {kind}",
                dataset.kind()
            ),
        });
    }

    let text = match dataset {
        Dataset::Waste(records) => {
            let total: f64 = records
                .iter()
                .map(|r| r.plastic + r.paper + r.glass + r.organic + r.ewaste)
                .sum();
            format!(
                "This report provides a comprehensive breakdown of waste management metrics. \
                 The total waste collected across all categories is {} tons. This data helps \
                 in tracking recycling efficiency and identifying areas for improvement in \
                 waste reduction strategies.",
                fmt_number(total)
            )
        }
        Dataset::Emissions(records) => {
            let total: f64 = records.iter().map(|r| r.emissions).sum();
            format!(
                "This report tracks carbon emissions across various sectors. The total \
                 recorded carbon emissions amount to {} tons of CO2. Monitoring these figures \
                 is crucial for our goal of achieving carbon neutrality and implementing \
                 effective emission control measures.",
                fmt_number(total)
            )
        }
        Dataset::Energy(ds) => {
            let total: f64 = ds.weekly.iter().map(|r| r.usage).sum();
            format!(
                "This report details the energy consumption patterns over the recorded \
                 period. The total energy usage stands at {} kWh. Understanding these \
                 consumption trends is vital for optimizing energy distribution and promoting \
                 renewable energy adoption.",
                fmt_number(total)
            )
        }
        Dataset::Water(records) => {
            let total: f64 = records.iter().map(|r| r.usage).sum();
            format!(
                "This report outlines water usage statistics. The total water consumption \
                 recorded is {} Liters. Efficient water management is essential for \
                 sustainability, and this data serves as a baseline for conservation efforts.",
                fmt_number(total)
            )
        }
        Dataset::Grid(records) => {
            let critical = records
                .iter()
                .filter(|r| r.status == GridStatus::Critical)
                .count();
            format!(
                "This report presents the status of the community grid. Out of {} monitored \
                 blocks, {} are currently flagged as 'Critical'. Immediate attention may be \
                 required for these areas to ensure grid stability and optimal resource \
                 allocation.",
                records.len(),
                critical
            )
        }
    };

    Ok(text)
}
