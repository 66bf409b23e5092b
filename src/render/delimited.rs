//! Delimited text export.
//!
//! Produces the dashboard's download format exactly: a header line of
//! schema headers, one line per row, comma separators, every line (header
//! included) terminated by CRLF.
//!
//! Values are written unquoted ([`csv::QuoteStyle::Never`]), so a value
//! containing a comma or newline corrupts the output. That limitation is
//! inherited from the format the dashboard shipped with; adding proper
//! quoting is the known hardening step.

use std::io;

use crate::error::{ReportError, ReportResult};
use crate::schema::Schema;
use crate::types::Row;

/// Serialize headers and rows into a delimited text buffer.
pub fn render(schema: &Schema, rows: &[Row]) -> ReportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(schema.headers())?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Io(io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Validation {
        message: format!("delimited output is not valid utf-8: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::schema::resolve;
    use crate::types::{ReportKind, Value};

    #[test]
    fn header_then_rows_with_crlf() {
        let schema = resolve(ReportKind::Emissions);
        let rows = vec![
            vec![Value::text("Transport"), Value::number(320.0)],
            vec![Value::text("Industry"), Value::number(540.5)],
        ];
        let out = render(&schema, &rows).unwrap();
        assert_eq!(out, "Sector,Emissions\r\nTransport,320\r\nIndustry,540.5\r\n");
    }

    #[test]
    fn no_rows_still_writes_the_header_line() {
        let schema = resolve(ReportKind::Water);
        let out = render(&schema, &[]).unwrap();
        assert_eq!(out, "Month/Day,Usage\r\n");
    }

    #[test]
    fn values_are_never_quoted() {
        // Documented limitation: an embedded comma shifts the columns.
        let schema = resolve(ReportKind::Emissions);
        let rows = vec![vec![Value::text("Transport, road"), Value::number(1.0)]];
        let out = render(&schema, &rows).unwrap();
        assert_eq!(out.lines().nth(1).unwrap(), "Transport, road,1");
    }
}
