use thiserror::Error;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by report generation.
///
/// This is a single error enum shared across schema resolution, dataset
/// validation, rendering, and sink delivery.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested report kind is not one of the five supported kinds.
    ///
    /// Raised at the string boundary (`ReportKind::from_str`); an unknown
    /// kind fails the whole operation up front rather than producing an
    /// empty report.
    #[error("unknown report kind '{0}' (expected waste, emissions, energy, water, or grid)")]
    UnknownKind(String),

    /// The dataset does not match the shape required for its declared kind
    /// (wrong variant, missing fields, non-finite numbers).
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Underlying I/O error (e.g. reading a dataset fixture from disk).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error.
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    /// PDF assembly error.
    #[error("pdf render error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The output sink failed to deliver a rendered artifact.
    ///
    /// Surfaced to the caller as-is; delivery is never retried here.
    #[error("sink failed to deliver '{file_name}': {source}")]
    Sink {
        file_name: String,
        #[source]
        source: std::io::Error,
    },
}
