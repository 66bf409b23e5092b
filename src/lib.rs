//! `ecoinsights-reports` turns the EcoInsights dashboard's in-memory
//! datasets into printable PDF reports and CSV exports, delivered through an
//! injected [`sink::ReportSink`].
//!
//! The caller passes an explicit [`types::ReportKind`] discriminator next to
//! the dataset; the kind is never inferred from a title or filename. Five
//! kinds are supported, each with a fixed column schema and a fixed summary
//! rule:
//!
//! - **Waste**: monthly collection by category, summarized as a total in tons
//! - **Emissions**: per-sector CO2, summarized as a total
//! - **Energy**: weekly readings (the nested `split` feeds charts only)
//! - **Water**: per-period usage in liters
//! - **Grid**: block telemetry, summarized as critical count vs. total
//!
//! ## Quick example: CSV export
//!
//! ```rust
//! use ecoinsights_reports::sink::MemorySink;
//! use ecoinsights_reports::types::{Dataset, EmissionsRecord, ReportKind};
//! use ecoinsights_reports::ReportService;
//!
//! # fn main() -> Result<(), ecoinsights_reports::ReportError> {
//! let dataset = Dataset::Emissions(vec![
//!     EmissionsRecord { sector: "Transport".into(), emissions: 320.0 },
//!     EmissionsRecord { sector: "Industry".into(), emissions: 540.0 },
//! ]);
//!
//! let service = ReportService::new(MemorySink::new());
//! service.generate_csv(ReportKind::Emissions, &dataset, "emissions_data")?;
//!
//! let delivered = service.sink().artifacts();
//! assert_eq!(delivered[0].file_name, "emissions_data.csv");
//! let text = String::from_utf8(delivered[0].bytes.clone()).unwrap();
//! assert!(text.starts_with("Sector,Emissions\r\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: PDF report
//!
//! ```rust
//! use ecoinsights_reports::sink::MemorySink;
//! use ecoinsights_reports::types::{Dataset, WaterRecord, ReportKind};
//! use ecoinsights_reports::ReportService;
//!
//! # fn main() -> Result<(), ecoinsights_reports::ReportError> {
//! let dataset = Dataset::Water(vec![
//!     WaterRecord { period: "Jan".into(), usage: 3500.0 },
//! ]);
//!
//! let service = ReportService::new(MemorySink::new());
//! service.generate_document(ReportKind::Water, &dataset, "Water Report")?;
//!
//! let delivered = service.sink().artifacts();
//! assert_eq!(delivered[0].file_name, "water_report_report.pdf");
//! assert!(delivered[0].bytes.starts_with(b"%PDF"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: report kinds, dataset shapes, cell values
//! - [`schema`]: kind to ordered column definitions
//! - [`summary`]: narrative aggregate strings
//! - [`table`]: dataset to table rows projection
//! - [`validate`]: shape checks ahead of aggregation
//! - [`ingestion`]: typed datasets from JSON fixtures
//! - [`render`]: document layout, PDF serialization, delimited export
//! - [`sink`]: artifact delivery (dependency-inverted)
//! - [`service`]: the two generation entry points
//! - [`error`]: the shared error type
//!
//! ## Error behavior
//!
//! There is no degraded or partial-output mode: an unknown kind name, a
//! dataset that does not match its declared kind, or a sink failure fails
//! the whole operation with a [`ReportError`]. The historical behavior of
//! silently emitting an empty table for an unrecognized input is explicitly
//! not reproduced.

pub mod error;
pub mod ingestion;
pub mod render;
pub mod schema;
pub mod service;
pub mod sink;
pub mod summary;
pub mod table;
pub mod types;
pub mod validate;

pub use error::{ReportError, ReportResult};
pub use service::{ReportFormat, ReportService};
