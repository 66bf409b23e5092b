//! Artifact renderers.
//!
//! Both renderers are pure: they take projected rows (plus summary/title for
//! the document path) and return an in-memory artifact. Delivery is the
//! [`crate::sink`] layer's job.
//!
//! - [`document`]: paginated layout model for the printable report
//! - [`pdf`]: layout model to PDF bytes
//! - [`delimited`]: rows to unquoted CSV text

pub mod delimited;
pub mod document;
pub mod pdf;

pub use document::{render as render_document, report_file_name, ReportDocument};
pub use pdf::write_pdf;
