//! Dataset shape validation.
//!
//! Runs before any aggregation or projection so that non-finite numbers or a
//! mis-declared kind never leak into a summary or a rendered table.

use crate::error::{ReportError, ReportResult};
use crate::types::{Dataset, ReportKind};

/// Check that `dataset` conforms to the shape required for `kind`.
///
/// Typed construction already rules out missing or non-numeric fields; what
/// remains is the kind/shape agreement and numeric sanity (NaN or infinite
/// values would otherwise propagate silently into aggregates).
pub fn validate(kind: ReportKind, dataset: &Dataset) -> ReportResult<()> {
    if dataset.kind() != kind {
        return Err(ReportError::Validation {
            message: format!(
                "dataset shape is {} but the report was requested as {kind}",
                dataset.kind()
            ),
        });
    }

    match dataset {
        Dataset::Waste(records) => {
            for (idx, r) in records.iter().enumerate() {
                require_finite(idx, "plastic", r.plastic)?;
                require_finite(idx, "paper", r.paper)?;
                require_finite(idx, "glass", r.glass)?;
                require_finite(idx, "organic", r.organic)?;
                require_finite(idx, "ewaste", r.ewaste)?;
            }
        }
        Dataset::Emissions(records) => {
            for (idx, r) in records.iter().enumerate() {
                require_finite(idx, "emissions", r.emissions)?;
            }
        }
        Dataset::Energy(ds) => {
            for (idx, r) in ds.weekly.iter().enumerate() {
                require_finite(idx, "usage", r.usage)?;
            }
        }
        Dataset::Water(records) => {
            for (idx, r) in records.iter().enumerate() {
                require_finite(idx, "usage", r.usage)?;
            }
        }
        Dataset::Grid(records) => {
            for (idx, r) in records.iter().enumerate() {
                require_finite(idx, "usage", r.usage)?;
            }
        }
    }

    Ok(())
}

fn require_finite(record: usize, field: &str, value: f64) -> ReportResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ReportError::Validation {
            message: format!("record {record} field '{field}' is not a finite number ({value})"),
        })
    }
}
