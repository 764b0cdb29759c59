use std::io::{Cursor, Write};

use docx_rs::{Docx, Hyperlink, HyperlinkType, Paragraph, Run, Table, TableCell, TableRow};
use jiff::civil::date;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use mhforms_core::models::document::SourceFormat;
use mhforms_ingest::error::IngestError;
use mhforms_ingest::formats::source_format_for_extension;
use mhforms_ingest::{ingest_bytes, ingest_path};

fn write_temp(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn plain_text_file_round_trip() {
    let file = write_temp(
        ".txt",
        b"Name: Jane Doe\r\nWard: Elm Ward\r\n\r\n01/05/2023 She was settled.\r\n02/05/2023 Punched a wall.\r\n",
    );
    let doc = ingest_path(file.path()).unwrap();

    assert_eq!(doc.format, SourceFormat::PlainText);
    assert!(!doc.raw_text.contains('\r'));
    assert_eq!(doc.notes.len(), 3);
    assert_eq!(doc.notes[0].date, None);
    assert_eq!(doc.notes[2].date, Some(date(2023, 5, 2)));
    assert_eq!(doc.notes[2].body, "Punched a wall.");
    assert_eq!(doc.patient_info.name.as_deref(), Some("Jane Doe"));
    assert_eq!(doc.patient_info.ward.as_deref(), Some("Elm Ward"));
    assert!(doc.is_partial());
}

#[test]
fn csv_rows_become_dated_notes() {
    let csv = b"Date,Entry\n12/03/2023,\"Agitated, threw a chair\"\n13/03/2023,Settled\n";
    let doc = ingest_bytes(csv, "export.csv").unwrap();
    assert_eq!(doc.format, SourceFormat::Csv);

    let dated: Vec<_> = doc.notes.iter().filter(|n| n.date.is_some()).collect();
    assert_eq!(dated.len(), 2);
    assert_eq!(dated[0].date, Some(date(2023, 3, 12)));
    assert_eq!(dated[0].body, "Agitated, threw a chair");
    assert_eq!(dated[0].source.as_deref(), Some("export.csv"));
}

#[test]
fn docx_paragraphs_and_tables_are_read() {
    let cell = |text: &str| TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
    let mut buf = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Patient Name: Sam Hill")))
        .add_table(Table::new(vec![
            TableRow::new(vec![cell("14/04/2023"), cell("Absconded from escorted leave.")]),
            TableRow::new(vec![cell("20/04/2023"), cell("Returned by police.")]),
        ]))
        .build()
        .pack(&mut buf)
        .unwrap();

    let doc = ingest_bytes(&buf.into_inner(), "progress.docx").unwrap();
    assert_eq!(doc.format, SourceFormat::Docx);
    assert_eq!(doc.patient_info.name.as_deref(), Some("Sam Hill"));
    let dated: Vec<(jiff::civil::Date, &str)> = doc
        .notes
        .iter()
        .filter_map(|n| Some((n.date?, n.body.as_str())))
        .collect();
    assert_eq!(
        dated,
        vec![
            (date(2023, 4, 14), "Absconded from escorted leave."),
            (date(2023, 4, 20), "Returned by police."),
        ]
    );
}

#[test]
fn docx_hyperlink_text_is_kept() {
    let mut buf = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("03/05/2023 "))
                .add_hyperlink(
                    Hyperlink::new("crisis_plan", HyperlinkType::Anchor)
                        .add_run(Run::new().add_text("Seen by the crisis team.")),
                ),
        )
        .build()
        .pack(&mut buf)
        .unwrap();

    let doc = ingest_bytes(&buf.into_inner(), "progress.docx").unwrap();
    let note = doc.notes.iter().find(|n| n.date == Some(date(2023, 5, 3))).unwrap();
    assert_eq!(note.body, "Seen by the crisis team.");
}

#[test]
fn csv_with_latin1_bytes_is_still_read() {
    let doc = ingest_bytes(b"12/03/2023,Caf\xe9 visit\n13/03/2023,Settled\n", "export.csv").unwrap();
    let dated: Vec<_> = doc.notes.iter().filter(|n| n.date.is_some()).collect();
    assert_eq!(dated.len(), 2);
    assert_eq!(dated[0].date, Some(date(2023, 3, 12)));
    assert_eq!(dated[0].body, "Caf\u{FFFD} visit");
    assert_eq!(dated[1].body, "Settled");
}

/// Smallest workbook calamine accepts: one sheet, a date style at index 1
/// and inline strings.
fn minimal_xlsx(rows: &str) -> Vec<u8> {
    let parts = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/></Types>"#.to_string(),
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.to_string(),
        ),
        (
            "xl/workbook.xml",
            r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Notes" sheetId="1" r:id="rId1"/></sheets></workbook>"#.to_string(),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#.to_string(),
        ),
        (
            "xl/styles.xml",
            r#"<?xml version="1.0" encoding="UTF-8"?><styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14" applyNumberFormat="1"/></cellXfs></styleSheet>"#.to_string(),
        ),
        (
            "xl/worksheets/sheet1.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{rows}</sheetData></worksheet>"#
            ),
        ),
    ];

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for (name, body) in parts {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

#[test]
fn spreadsheet_date_cells_open_dated_notes() {
    // 44997 and 44998 are 12 and 13 March 2023 as spreadsheet serials.
    let xlsx = minimal_xlsx(concat!(
        r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Date</t></is></c><c r="B1" t="inlineStr"><is><t>Entry</t></is></c></row>"#,
        r#"<row r="2"><c r="A2" s="1"><v>44997</v></c><c r="B2" t="inlineStr"><is><t>Threw a chair at staff.</t></is></c></row>"#,
        r#"<row r="3"><c r="A3" s="1"><v>44998</v></c><c r="B3" t="inlineStr"><is><t>Settled</t></is></c></row>"#,
    ));

    let doc = ingest_bytes(&xlsx, "notes.xlsx").unwrap();
    assert_eq!(doc.format, SourceFormat::Spreadsheet);
    assert!(doc.raw_text.contains("12/03/2023 | Threw a chair at staff."));

    let dated: Vec<(jiff::civil::Date, &str)> = doc
        .notes
        .iter()
        .filter_map(|n| Some((n.date?, n.body.as_str())))
        .collect();
    assert_eq!(
        dated,
        vec![
            (date(2023, 3, 12), "Threw a chair at staff."),
            (date(2023, 3, 13), "Settled"),
        ]
    );
}

fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
        operations.push(Operation::new("Td", vec![72.into(), (760 - 16 * i as i64).into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn pdf_text_layer_is_read() {
    let pdf = single_page_pdf(&[
        "Patient Name: Ada Lane",
        "01/05/2023 Punched a wall.",
        "02/05/2023 Settled on the ward.",
    ]);

    let doc = ingest_bytes(&pdf, "letter.pdf").unwrap();
    assert_eq!(doc.format, SourceFormat::Pdf);
    assert_eq!(doc.patient_info.name.as_deref(), Some("Ada Lane"));
    let dated: Vec<(jiff::civil::Date, &str)> = doc
        .notes
        .iter()
        .filter_map(|n| Some((n.date?, n.body.as_str())))
        .collect();
    assert_eq!(
        dated,
        vec![
            (date(2023, 5, 1), "Punched a wall."),
            (date(2023, 5, 2), "Settled on the ward."),
        ]
    );
}

#[test]
fn unknown_extension_is_unsupported() {
    let err = ingest_bytes(b"data", "scan.tiff").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat(ext) if ext == "tiff"));

    let err = ingest_bytes(b"data", "README").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat(name) if name == "README"));
}

#[test]
fn corrupt_pdf_is_a_parse_failure() {
    let err = ingest_bytes(b"not a pdf at all", "letter.pdf").unwrap_err();
    assert!(matches!(
        err,
        IngestError::ParseFailure {
            format: SourceFormat::Pdf,
            ..
        }
    ));
}

#[test]
fn corrupt_spreadsheet_is_a_parse_failure() {
    let err = ingest_bytes(b"PK-not-really-a-zip", "notes.xlsx").unwrap_err();
    assert!(matches!(
        err,
        IngestError::ParseFailure {
            format: SourceFormat::Spreadsheet,
            ..
        }
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ingest_path(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}

#[test]
fn extension_lookup_is_case_insensitive() {
    assert_eq!(source_format_for_extension("PDF"), Some(SourceFormat::Pdf));
    assert_eq!(source_format_for_extension("Xls"), Some(SourceFormat::Spreadsheet));
    assert_eq!(source_format_for_extension("ods"), Some(SourceFormat::Spreadsheet));
    assert_eq!(source_format_for_extension("doc"), None);
}
