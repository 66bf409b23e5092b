//! Column schemas for the five report kinds.
//!
//! A [`Schema`] is an ordered list of [`Column`]s (header + accessor). The
//! column order is fixed per kind at design time and determines both the
//! table layout and the CSV column order. [`resolve`] is exhaustive: every
//! [`ReportKind`] maps to exactly one schema.

use crate::types::{RecordRef, ReportKind, Value};

/// One column: a header plus an accessor projecting a record into a cell.
///
/// Accessors return `None` when applied to a record of the wrong shape;
/// projection turns that into a validation error instead of emitting a
/// placeholder cell.
pub struct Column {
    header: &'static str,
    accessor: fn(&RecordRef<'_>) -> Option<Value>,
}

impl Column {
    fn new(header: &'static str, accessor: fn(&RecordRef<'_>) -> Option<Value>) -> Self {
        Self { header, accessor }
    }

    /// Column header text.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Apply the accessor to one record.
    pub fn extract(&self, record: &RecordRef<'_>) -> Option<Value> {
        (self.accessor)(record)
    }
}

/// Ordered column definitions for a given kind.
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Columns in table/export order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Headers in column order.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }
}

/// Resolve the fixed schema for a report kind.
pub fn resolve(kind: ReportKind) -> Schema {
    let columns = match kind {
        ReportKind::Waste => vec![
            Column::new("Month", |r| match r {
                RecordRef::Waste(w) => Some(Value::text(w.month.clone())),
                _ => None,
            }),
            Column::new("Plastic", |r| match r {
                RecordRef::Waste(w) => Some(Value::number(w.plastic)),
                _ => None,
            }),
            Column::new("Paper", |r| match r {
                RecordRef::Waste(w) => Some(Value::number(w.paper)),
                _ => None,
            }),
            Column::new("Glass", |r| match r {
                RecordRef::Waste(w) => Some(Value::number(w.glass)),
                _ => None,
            }),
            Column::new("Organic", |r| match r {
                RecordRef::Waste(w) => Some(Value::number(w.organic)),
                _ => None,
            }),
            Column::new("E-Waste", |r| match r {
                RecordRef::Waste(w) => Some(Value::number(w.ewaste)),
                _ => None,
            }),
        ],
        ReportKind::Emissions => vec![
            Column::new("Sector", |r| match r {
                RecordRef::Emissions(e) => Some(Value::text(e.sector.clone())),
                _ => None,
            }),
            Column::new("Emissions", |r| match r {
                RecordRef::Emissions(e) => Some(Value::number(e.emissions)),
                _ => None,
            }),
        ],
        ReportKind::Energy => vec![
            Column::new("Day", |r| match r {
                RecordRef::Energy(e) => Some(Value::text(e.day.clone())),
                _ => None,
            }),
            Column::new("Usage", |r| match r {
                RecordRef::Energy(e) => Some(Value::number(e.usage)),
                _ => None,
            }),
        ],
        ReportKind::Water => vec![
            Column::new("Month/Day", |r| match r {
                RecordRef::Water(w) => Some(Value::text(w.period.clone())),
                _ => None,
            }),
            Column::new("Usage", |r| match r {
                RecordRef::Water(w) => Some(Value::number(w.usage)),
                _ => None,
            }),
        ],
        ReportKind::Grid => vec![
            Column::new("Block Name", |r| match r {
                RecordRef::Grid(g) => Some(Value::text(g.name.clone())),
                _ => None,
            }),
            Column::new("Status", |r| match r {
                RecordRef::Grid(g) => Some(Value::text(g.status.to_string())),
                _ => None,
            }),
            Column::new("Usage", |r| match r {
                RecordRef::Grid(g) => Some(Value::number(g.usage)),
                _ => None,
            }),
            Column::new("Row", |r| match r {
                RecordRef::Grid(g) => Some(Value::number(g.row as f64)),
                _ => None,
            }),
            Column::new("Col", |r| match r {
                RecordRef::Grid(g) => Some(Value::number(g.col as f64)),
                _ => None,
            }),
        ],
    };
    Schema { columns }
}
