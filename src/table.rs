//! Projection of a dataset through a schema into table rows.

use crate::error::{ReportError, ReportResult};
use crate::schema::Schema;
use crate::types::{Dataset, Row};

/// Project every record through the schema's accessors, in dataset order.
///
/// The i-th output row derives only from the i-th record; no record is
/// skipped, reordered, or deduplicated, and values pass through unmodified.
pub fn project(dataset: &Dataset, schema: &Schema) -> ReportResult<Vec<Row>> {
    let records = dataset.records();
    let mut rows: Vec<Row> = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let mut row: Row = Vec::with_capacity(schema.columns().len());
        for column in schema.columns() {
            match column.extract(record) {
                Some(value) => row.push(value),
                None => {
                    return Err(ReportError::Validation {
                        message: format!(
                            "record {idx}: column '{}' does not apply to {} data",
                            column.header(),
                            dataset.kind()
                        ),
                    });
                }
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::schema::resolve;
    use crate::types::{Dataset, EmissionsRecord, ReportKind, Value};

    fn emissions_dataset() -> Dataset {
        Dataset::Emissions(vec![
            EmissionsRecord {
                sector: "Transport".to_string(),
                emissions: 320.0,
            },
            EmissionsRecord {
                sector: "Industry".to_string(),
                emissions: 540.5,
            },
            EmissionsRecord {
                sector: "Residential".to_string(),
                emissions: 120.0,
            },
        ])
    }

    #[test]
    fn project_preserves_record_order_and_values() {
        let ds = emissions_dataset();
        let rows = project(&ds, &resolve(ReportKind::Emissions)).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec![Value::text("Transport"), Value::number(320.0)]
        );
        assert_eq!(
            rows[1],
            vec![Value::text("Industry"), Value::number(540.5)]
        );
        assert_eq!(
            rows[2],
            vec![Value::text("Residential"), Value::number(120.0)]
        );
    }

    #[test]
    fn project_with_wrong_schema_is_a_validation_error() {
        let ds = emissions_dataset();
        let err = project(&ds, &resolve(ReportKind::Grid)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("validation failed"));
        assert!(msg.contains("record 0"));
    }

    #[test]
    fn project_empty_dataset_yields_no_rows() {
        let ds = Dataset::Emissions(vec![]);
        let rows = project(&ds, &resolve(ReportKind::Emissions)).unwrap();
        assert!(rows.is_empty());
    }
}
