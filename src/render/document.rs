//! Paginated report document layout.
//!
//! Produces a [`ReportDocument`]: pages of positioned elements (text spans
//! and filled bands) in jsPDF-style layout units (millimeters, y growing
//! downward). The layout contract is deterministic:
//!
//! 1. Title at the top anchor, then a "Generated on" line.
//! 2. Summary word-wrapped to a fixed content width.
//! 3. Table origin at `TABLE_BASE_OFFSET + lines * SUMMARY_LINE_HEIGHT`.
//! 4. A header band that repeats after every page break; pagination never
//!    reorders or alters rows.
//!
//! Serialization to PDF bytes lives in [`super::pdf`].

use chrono::NaiveDate;

use crate::schema::Schema;
use crate::types::Row;

/// Page size (A4, millimeters).
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

/// Left/right content margin.
pub const MARGIN: f64 = 14.0;

/// Vertical anchors for the title block.
pub const TITLE_Y: f64 = 22.0;
pub const TIMESTAMP_Y: f64 = 30.0;
pub const SUMMARY_TOP: f64 = 40.0;

/// Summary wrapping contract: content width and per-line advance.
pub const SUMMARY_WIDTH: f64 = 180.0;
pub const SUMMARY_LINE_HEIGHT: f64 = 5.0;

/// The table starts at this offset plus one line height per summary line.
pub const TABLE_BASE_OFFSET: f64 = 45.0;

/// Font sizes in points.
pub const TITLE_SIZE: f64 = 20.0;
pub const META_SIZE: f64 = 11.0;
pub const BODY_SIZE: f64 = 10.0;

/// Table metrics.
const HEADER_BAND_HEIGHT: f64 = 9.0;
const ROW_HEIGHT: f64 = 8.0;
const CELL_PADDING: f64 = 3.0;
const TEXT_BASELINE_DROP: f64 = 5.5;
/// Where the table resumes after a page break.
const PAGE_TOP_RESUME: f64 = 20.0;
const PAGE_BOTTOM_MARGIN: f64 = 20.0;

/// Average glyph advance as a fraction of the font size (Helvetica-ish).
const AVG_CHAR_EM: f64 = 0.5;
const PT_TO_MM: f64 = 25.4 / 72.0;

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Header band fill: the dashboard's primary green.
pub const HEADER_FILL: Color = Color { r: 22, g: 163, b: 74 };
pub const HEADER_TEXT: Color = Color { r: 255, g: 255, b: 255 };
/// Timestamp and summary gray.
pub const MUTED_TEXT: Color = Color { r: 100, g: 100, b: 100 };
pub const BODY_TEXT: Color = Color { r: 0, g: 0, b: 0 };

/// A positioned piece of text. `y` is the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub bold: bool,
    pub color: Color,
    pub text: String,
}

/// A filled rectangle. `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

/// One layout element on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextSpan),
    Band(Band),
}

/// One laid-out page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub elements: Vec<Element>,
}

/// A fully laid-out report, ready for PDF serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    /// Suggested filename: `<slug(title)>_report.pdf`.
    pub file_name: String,
    pub pages: Vec<Page>,
}

/// Vertical offset of the table for a given summary line count.
pub fn table_origin(summary_lines: usize) -> f64 {
    TABLE_BASE_OFFSET + summary_lines as f64 * SUMMARY_LINE_HEIGHT
}

/// Suggested document filename: lowercase title, whitespace runs collapsed
/// to single underscores, then the fixed report suffix.
pub fn report_file_name(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{slug}_report.pdf")
}

/// Estimated rendered width of `text` at `size` points, in millimeters.
fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * AVG_CHAR_EM * PT_TO_MM
}

/// Greedy word wrap against an estimated glyph width.
///
/// A single word wider than `max_width` gets a line of its own rather than
/// being split mid-word.
pub fn wrap_text(text: &str, max_width: f64, size: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lay out a complete report document.
///
/// `generated_on` is a parameter (rather than read from the clock here) so
/// that identical inputs produce byte-identical documents.
pub fn render(
    title: &str,
    schema: &Schema,
    rows: &[Row],
    summary: &str,
    generated_on: NaiveDate,
) -> ReportDocument {
    let mut pages: Vec<Page> = Vec::new();
    let mut elements: Vec<Element> = Vec::new();

    elements.push(Element::Text(TextSpan {
        x: MARGIN,
        y: TITLE_Y,
        size: TITLE_SIZE,
        bold: true,
        color: BODY_TEXT,
        text: title.to_string(),
    }));
    elements.push(Element::Text(TextSpan {
        x: MARGIN,
        y: TIMESTAMP_Y,
        size: META_SIZE,
        bold: false,
        color: MUTED_TEXT,
        text: format!("Generated on: {}", generated_on.format("%m/%d/%Y")),
    }));

    let summary_lines = wrap_text(summary, SUMMARY_WIDTH, BODY_SIZE);
    for (i, line) in summary_lines.iter().enumerate() {
        elements.push(Element::Text(TextSpan {
            x: MARGIN,
            y: SUMMARY_TOP + i as f64 * SUMMARY_LINE_HEIGHT,
            size: BODY_SIZE,
            bold: false,
            color: MUTED_TEXT,
            text: line.clone(),
        }));
    }

    let headers = schema.headers();
    let col_width = (PAGE_WIDTH - 2.0 * MARGIN) / headers.len().max(1) as f64;

    let mut y = table_origin(summary_lines.len());
    push_header_band(&mut elements, &headers, col_width, y);
    y += HEADER_BAND_HEIGHT;

    for row in rows {
        if y + ROW_HEIGHT > PAGE_HEIGHT - PAGE_BOTTOM_MARGIN {
            pages.push(Page {
                elements: std::mem::take(&mut elements),
            });
            y = PAGE_TOP_RESUME;
            push_header_band(&mut elements, &headers, col_width, y);
            y += HEADER_BAND_HEIGHT;
        }
        for (i, value) in row.iter().enumerate() {
            elements.push(Element::Text(TextSpan {
                x: MARGIN + i as f64 * col_width + CELL_PADDING,
                y: y + TEXT_BASELINE_DROP,
                size: BODY_SIZE,
                bold: false,
                color: BODY_TEXT,
                text: value.to_string(),
            }));
        }
        y += ROW_HEIGHT;
    }

    pages.push(Page { elements });

    ReportDocument {
        file_name: report_file_name(title),
        pages,
    }
}

fn push_header_band(elements: &mut Vec<Element>, headers: &[&str], col_width: f64, y: f64) {
    elements.push(Element::Band(Band {
        x: MARGIN,
        y,
        width: PAGE_WIDTH - 2.0 * MARGIN,
        height: HEADER_BAND_HEIGHT,
        color: HEADER_FILL,
    }));
    for (i, header) in headers.iter().enumerate() {
        elements.push(Element::Text(TextSpan {
            x: MARGIN + i as f64 * col_width + CELL_PADDING,
            y: y + TEXT_BASELINE_DROP + 0.5,
            size: BODY_SIZE,
            bold: true,
            color: HEADER_TEXT,
            text: (*header).to_string(),
        }));
    }
}
