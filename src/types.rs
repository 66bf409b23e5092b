//! Core data model for report generation.
//!
//! The dashboard hands this crate an in-memory [`Dataset`] (one of five
//! shapes, mirroring the JSON the charts are driven by) together with an
//! explicit [`ReportKind`] discriminator. The kind is never inferred from a
//! title or filename.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Closed set of supported report kinds.
///
/// Selects which dataset shape, column schema, and summary rule apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Monthly waste collection by category.
    Waste,
    /// Carbon emissions by sector.
    Emissions,
    /// Weekly energy usage (the nested `split` breakdown feeds charts only).
    Energy,
    /// Water consumption per period.
    Water,
    /// Community grid block telemetry.
    Grid,
}

impl ReportKind {
    /// All kinds, in a fixed order.
    pub const ALL: [ReportKind; 5] = [
        ReportKind::Waste,
        ReportKind::Emissions,
        ReportKind::Energy,
        ReportKind::Water,
        ReportKind::Grid,
    ];

    /// Lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Waste => "waste",
            ReportKind::Emissions => "emissions",
            ReportKind::Energy => "energy",
            ReportKind::Water => "water",
            ReportKind::Grid => "grid",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    /// Parse a kind name (case-insensitive).
    ///
    /// Anything outside the five supported names fails with
    /// [`ReportError::UnknownKind`]; there is no default or empty fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "waste" => Ok(ReportKind::Waste),
            "emissions" => Ok(ReportKind::Emissions),
            "energy" => Ok(ReportKind::Energy),
            "water" => Ok(ReportKind::Water),
            "grid" => Ok(ReportKind::Grid),
            _ => Err(ReportError::UnknownKind(s.to_string())),
        }
    }
}

/// One month of waste collection, in tons per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteRecord {
    pub month: String,
    pub plastic: f64,
    pub paper: f64,
    pub glass: f64,
    pub organic: f64,
    pub ewaste: f64,
}

/// Carbon emissions for one sector, in tons of CO2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsRecord {
    pub sector: String,
    pub emissions: f64,
}

/// One day of energy usage, in kWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    pub day: String,
    pub usage: f64,
}

/// One slice of the energy source breakdown (chart-only data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySplit {
    pub name: String,
    pub value: f64,
}

/// The energy dataset is the only composite shape: `weekly` feeds the
/// report table, `split` is carried along for the dashboard's pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDataset {
    pub weekly: Vec<EnergyReading>,
    #[serde(default)]
    pub split: Vec<EnergySplit>,
}

/// Water consumption for one period, in liters.
///
/// Source data labels the period either `month` or `day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    #[serde(rename = "month", alias = "day")]
    pub period: String,
    pub usage: f64,
}

/// Health of a monitored grid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStatus {
    #[serde(alias = "Optimal")]
    Optimal,
    #[serde(alias = "Warning")]
    Warning,
    #[serde(alias = "Critical")]
    Critical,
}

impl fmt::Display for GridStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridStatus::Optimal => "optimal",
            GridStatus::Warning => "warning",
            GridStatus::Critical => "critical",
        })
    }
}

/// Telemetry for one community grid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRecord {
    pub name: String,
    pub status: GridStatus,
    /// Usage as a percentage of block capacity.
    pub usage: f64,
    pub row: i64,
    pub col: i64,
}

/// In-memory dataset for one report, tagged by shape.
///
/// All variants are ordered sequences of records; record order is preserved
/// through projection and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Waste(Vec<WasteRecord>),
    Emissions(Vec<EmissionsRecord>),
    Energy(EnergyDataset),
    Water(Vec<WaterRecord>),
    Grid(Vec<GridRecord>),
}

impl Dataset {
    /// The kind this dataset's shape belongs to.
    pub fn kind(&self) -> ReportKind {
        match self {
            Dataset::Waste(_) => ReportKind::Waste,
            Dataset::Emissions(_) => ReportKind::Emissions,
            Dataset::Energy(_) => ReportKind::Energy,
            Dataset::Water(_) => ReportKind::Water,
            Dataset::Grid(_) => ReportKind::Grid,
        }
    }

    /// Number of reportable records (for energy, only `weekly` counts).
    pub fn record_count(&self) -> usize {
        match self {
            Dataset::Waste(rs) => rs.len(),
            Dataset::Emissions(rs) => rs.len(),
            Dataset::Energy(ds) => ds.weekly.len(),
            Dataset::Water(rs) => rs.len(),
            Dataset::Grid(rs) => rs.len(),
        }
    }

    /// Borrowed views of the reportable records, in dataset order.
    pub fn records(&self) -> Vec<RecordRef<'_>> {
        match self {
            Dataset::Waste(rs) => rs.iter().map(RecordRef::Waste).collect(),
            Dataset::Emissions(rs) => rs.iter().map(RecordRef::Emissions).collect(),
            Dataset::Energy(ds) => ds.weekly.iter().map(RecordRef::Energy).collect(),
            Dataset::Water(rs) => rs.iter().map(RecordRef::Water).collect(),
            Dataset::Grid(rs) => rs.iter().map(RecordRef::Grid).collect(),
        }
    }
}

/// A borrowed view of one record, used by schema accessors.
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Waste(&'a WasteRecord),
    Emissions(&'a EmissionsRecord),
    Energy(&'a EnergyReading),
    Water(&'a WaterRecord),
    Grid(&'a GridRecord),
}

/// A single primitive cell value in a projected row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string.
    Text(String),
    /// Numeric value, passed through unmodified (no rounding).
    Number(f64),
}

impl Value {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Create a numeric value.
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => f.write_str(&fmt_number(*n)),
        }
    }
}

/// One record projected through a schema into ordered primitive values.
pub type Row = Vec<Value>;

/// Format a number the way the dashboard data reads: integral values print
/// without a decimal point ("15", not "15.0").
pub(crate) fn fmt_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::{fmt_number, GridStatus, ReportKind, Value, WaterRecord};
    use crate::error::ReportError;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Waste".parse::<ReportKind>().unwrap(), ReportKind::Waste);
        assert_eq!("GRID".parse::<ReportKind>().unwrap(), ReportKind::Grid);
        assert_eq!(" energy ".parse::<ReportKind>().unwrap(), ReportKind::Energy);
    }

    #[test]
    fn unknown_kind_fails_explicitly() {
        let err = "unknown".parse::<ReportKind>().unwrap_err();
        assert!(matches!(err, ReportError::UnknownKind(ref s) if s == "unknown"));
        assert!(err.to_string().contains("unknown report kind"));
    }

    #[test]
    fn numbers_format_without_trailing_zero() {
        assert_eq!(fmt_number(15.0), "15");
        assert_eq!(fmt_number(-3.0), "-3");
        assert_eq!(fmt_number(2.5), "2.5");
        assert_eq!(Value::number(120.0).to_string(), "120");
    }

    #[test]
    fn water_period_accepts_month_or_day_label() {
        let from_month: WaterRecord =
            serde_json::from_str(r#"{"month":"Jan","usage":3500}"#).unwrap();
        let from_day: WaterRecord = serde_json::from_str(r#"{"day":"Mon","usage":120}"#).unwrap();
        assert_eq!(from_month.period, "Jan");
        assert_eq!(from_day.period, "Mon");
    }

    #[test]
    fn grid_status_accepts_lowercase_and_capitalized() {
        let s: GridStatus = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(s, GridStatus::Critical);
        let s: GridStatus = serde_json::from_str(r#""Critical""#).unwrap();
        assert_eq!(s, GridStatus::Critical);
        assert_eq!(s.to_string(), "critical");
    }
}
