use ecoinsights_reports::render::delimited;
use ecoinsights_reports::schema::resolve;
use ecoinsights_reports::types::{ReportKind, Row, Value};

fn grid_rows() -> Vec<Row> {
    vec![
        vec![
            Value::text("Block A1"),
            Value::text("optimal"),
            Value::number(42.0),
            Value::number(0.0),
            Value::number(0.0),
        ],
        vec![
            Value::text("Block B4"),
            Value::text("critical"),
            Value::number(98.0),
            Value::number(1.0),
            Value::number(3.0),
        ],
    ]
}

#[test]
fn splitting_by_crlf_recovers_headers_and_rows() {
    let schema = resolve(ReportKind::Grid);
    let rows = grid_rows();
    let out = delimited::render(&schema, &rows).unwrap();

    // Every line is CRLF-terminated, so the final split entry is empty.
    let mut lines: Vec<&str> = out.split("\r\n").collect();
    assert_eq!(lines.pop(), Some(""));
    assert_eq!(lines.len(), rows.len() + 1);

    let headers: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(headers, schema.headers());

    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = lines[i + 1].split(',').map(str::to_string).collect();
        let expected: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        assert_eq!(cells, expected);
    }
}

#[test]
fn numeric_cells_round_trip_without_formatting() {
    let schema = resolve(ReportKind::Emissions);
    let rows = vec![vec![Value::text("Industry"), Value::number(540.5)]];
    let out = delimited::render(&schema, &rows).unwrap();
    assert!(out.contains("Industry,540.5\r\n"));
}

#[test]
fn export_is_idempotent() {
    let schema = resolve(ReportKind::Grid);
    let rows = grid_rows();
    let a = delimited::render(&schema, &rows).unwrap();
    let b = delimited::render(&schema, &rows).unwrap();
    assert_eq!(a, b);
}
