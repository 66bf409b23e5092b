//! Serialization of a laid-out [`ReportDocument`] into PDF bytes.
//!
//! Uses `lopdf` directly with the two standard Helvetica fonts; no font
//! embedding is needed for the report's ASCII content. Output carries no
//! creation timestamp, so identical documents serialize to identical bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::ReportResult;

use super::document::{Element, Page, ReportDocument, PAGE_HEIGHT, PAGE_WIDTH};

const MM_TO_PT: f64 = 72.0 / 25.4;

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Write the document as a complete PDF file in memory.
pub fn write_pdf(report: &ReportDocument) -> ReportResult<Vec<u8>> {
    let mut pdf = Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    let regular_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => regular_id,
            FONT_BOLD => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(report.pages.len());
    for page in &report.pages {
        let encoded = page_content(page).encode()?;
        let stream_id = pdf.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real((PAGE_WIDTH * MM_TO_PT) as f32),
                Object::Real((PAGE_HEIGHT * MM_TO_PT) as f32),
            ],
            "Contents" => stream_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

fn page_content(page: &Page) -> Content {
    let mut operations: Vec<Operation> = Vec::new();

    for element in &page.elements {
        match element {
            Element::Band(band) => {
                let (r, g, b) = rgb(band.color);
                operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new(
                    "re",
                    vec![
                        pt(band.x),
                        // PDF rects anchor at the bottom-left corner.
                        pt_y(band.y + band.height),
                        pt(band.width),
                        pt(band.height),
                    ],
                ));
                operations.push(Operation::new("f", vec![]));
            }
            Element::Text(span) => {
                let (r, g, b) = rgb(span.color);
                let font = if span.bold { FONT_BOLD } else { FONT_REGULAR };
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
                operations.push(Operation::new(
                    "Tf",
                    vec![font.into(), Object::Real(span.size as f32)],
                ));
                operations.push(Operation::new("Td", vec![pt(span.x), pt_y(span.y)]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(span.text.as_str())],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
        }
    }

    Content { operations }
}

/// Layout millimeters to PDF points.
fn pt(mm: f64) -> Object {
    Object::Real((mm * MM_TO_PT) as f32)
}

/// Layout y (top-down) to PDF y (bottom-up), in points.
fn pt_y(mm: f64) -> Object {
    Object::Real(((PAGE_HEIGHT - mm) * MM_TO_PT) as f32)
}

fn rgb(color: super::document::Color) -> (f32, f32, f32) {
    (
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::write_pdf;
    use crate::render::document::render;
    use crate::schema::resolve;
    use crate::types::{ReportKind, Value};

    #[test]
    fn output_is_a_pdf_with_one_page_per_layout_page() {
        let schema = resolve(ReportKind::Energy);
        let rows = vec![vec![Value::text("Mon"), Value::number(320.0)]];
        let doc = render(
            "Energy Report",
            &schema,
            &rows,
            "summary text",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );

        let bytes = write_pdf(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), doc.pages.len());
    }

    #[test]
    fn identical_documents_serialize_to_identical_bytes() {
        let schema = resolve(ReportKind::Water);
        let rows = vec![vec![Value::text("Jan"), Value::number(3500.0)]];
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let doc = render("Water Report", &schema, &rows, "summary", date);

        let a = write_pdf(&doc).unwrap();
        let b = write_pdf(&doc).unwrap();
        assert_eq!(a, b);
    }
}
