//! Report generation entry points.
//!
//! [`ReportService`] orchestrates the pipeline for one request: validate the
//! dataset against its declared kind, resolve the schema, compute the
//! summary (document path only), project rows, render, and hand the
//! artifact to the injected sink. Everything runs synchronously on the
//! caller's thread; nothing is cached between calls.

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::error::{ReportError, ReportResult};
use crate::render::{delimited, document, pdf};
use crate::sink::{Artifact, ReportSink};
use crate::types::{Dataset, ReportKind};
use crate::{schema, summary, table, validate};

/// Output format for the unified [`ReportService::generate`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Paginated printable document (PDF).
    Document,
    /// Delimited text export (CSV).
    Delimited,
}

/// Orchestrates report generation against an injected sink.
pub struct ReportService<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> ReportService<S> {
    /// Create a service delivering artifacts to `sink`.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Access the injected sink (useful for in-memory sinks in tests).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Generate one report in the requested format.
    ///
    /// `name` is the document title for [`ReportFormat::Document`] and the
    /// bare filename (without extension) for [`ReportFormat::Delimited`].
    pub fn generate(
        &self,
        kind: ReportKind,
        dataset: &Dataset,
        format: ReportFormat,
        name: &str,
    ) -> ReportResult<()> {
        match format {
            ReportFormat::Document => self.generate_document(kind, dataset, name),
            ReportFormat::Delimited => self.generate_csv(kind, dataset, name),
        }
    }

    /// Render the dataset as a paginated PDF report and deliver it.
    ///
    /// The generation date is today's local date; use
    /// [`Self::generate_document_dated`] to pin it.
    pub fn generate_document(
        &self,
        kind: ReportKind,
        dataset: &Dataset,
        title: &str,
    ) -> ReportResult<()> {
        self.generate_document_dated(kind, dataset, title, Local::now().date_naive())
    }

    /// Like [`Self::generate_document`], with an explicit generation date.
    ///
    /// Identical inputs (date included) produce byte-identical artifacts.
    pub fn generate_document_dated(
        &self,
        kind: ReportKind,
        dataset: &Dataset,
        title: &str,
        generated_on: NaiveDate,
    ) -> ReportResult<()> {
        validate::validate(kind, dataset)?;
        let schema = schema::resolve(kind);
        let summary = summary::summarize(kind, dataset)?;
        let rows = table::project(dataset, &schema)?;
        debug!("rendering {kind} document '{title}': {} rows", rows.len());

        let doc = document::render(title, &schema, &rows, &summary, generated_on);
        let bytes = pdf::write_pdf(&doc)?;
        self.deliver(Artifact::new(doc.file_name, bytes))
    }

    /// Render the dataset as delimited text and deliver it as
    /// `<filename>.csv`.
    pub fn generate_csv(
        &self,
        kind: ReportKind,
        dataset: &Dataset,
        filename: &str,
    ) -> ReportResult<()> {
        validate::validate(kind, dataset)?;
        let schema = schema::resolve(kind);
        let rows = table::project(dataset, &schema)?;
        debug!("rendering {kind} csv '{filename}': {} rows", rows.len());

        let text = delimited::render(&schema, &rows)?;
        self.deliver(Artifact::new(format!("{filename}.csv"), text.into_bytes()))
    }

    fn deliver(&self, artifact: Artifact) -> ReportResult<()> {
        self.sink
            .deliver(&artifact)
            .map_err(|source| ReportError::Sink {
                file_name: artifact.file_name.clone(),
                source,
            })?;
        info!(
            "delivered '{}' ({} bytes)",
            artifact.file_name,
            artifact.bytes.len()
        );
        Ok(())
    }
}
