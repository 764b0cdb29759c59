//! Per-format text extraction. Every extractor yields plain text with one
//! logical line per paragraph, table row or spreadsheet row.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use docx_rs::{
    DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, StructuredDataTagChild,
    Table, TableCellContent, TableChild, TableRowChild,
};
use jiff::ToSpan;
use jiff::civil::{Date, date};
use mhforms_core::dates::{format_date, parse_leading_date};
use mhforms_core::models::document::SourceFormat;
use tracing::{debug, warn};

use crate::error::IngestError;

/// Separator placed between cells of one table or spreadsheet row.
pub const CELL_SEPARATOR: &str = " | ";

/// Map a file extension to the format used to read it.
///
/// Returns `None` for extensions with no text extractor.
pub fn source_format_for_extension(ext: &str) -> Option<SourceFormat> {
    match ext.to_lowercase().as_str() {
        "txt" | "text" | "md" | "log" => Some(SourceFormat::PlainText),
        "pdf" => Some(SourceFormat::Pdf),
        "docx" => Some(SourceFormat::Docx),
        "xlsx" | "xlsm" | "xls" | "ods" => Some(SourceFormat::Spreadsheet),
        "csv" => Some(SourceFormat::Csv),
        _ => None,
    }
}

pub fn extract_text(bytes: &[u8], format: SourceFormat) -> Result<String, IngestError> {
    match format {
        SourceFormat::PlainText => Ok(plain_text(bytes)),
        SourceFormat::Pdf => pdf_text(bytes),
        SourceFormat::Docx => docx_text(bytes),
        SourceFormat::Spreadsheet => spreadsheet_text(bytes),
        SourceFormat::Csv => csv_text(bytes),
    }
}

fn plain_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn pdf_text(bytes: &[u8]) -> Result<String, IngestError> {
    let doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| IngestError::parse(SourceFormat::Pdf, e))?;
    if doc.is_encrypted() {
        return Err(IngestError::parse(
            SourceFormat::Pdf,
            "document is encrypted and could not be decrypted",
        ));
    }

    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    debug!("reading text layer from {} PDF pages", pages.len());
    if pages.is_empty() {
        return Ok(String::new());
    }
    let text = doc
        .extract_text(&pages)
        .map_err(|e| IngestError::parse(SourceFormat::Pdf, e))?;
    if text.trim().is_empty() {
        warn!("PDF has no text layer; scanned documents are not supported");
    }
    Ok(text)
}

fn docx_text(bytes: &[u8]) -> Result<String, IngestError> {
    let docx =
        docx_rs::read_docx(bytes).map_err(|e| IngestError::parse(SourceFormat::Docx, e))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => table_lines(table, &mut lines),
            _ => {}
        }
    }
    Ok(lines.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

/// Runs, hyperlinks, tracked insertions and content controls carry visible
/// text. Tracked deletions do not.
fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, text),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run_text(run, text);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(tag) => {
                for tag_child in &tag.children {
                    match tag_child {
                        StructuredDataTagChild::Run(run) => push_run_text(run, text),
                        StructuredDataTagChild::Paragraph(paragraph) => {
                            push_children_text(&paragraph.children, text)
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn table_lines(table: &Table, lines: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        let mut cells = Vec::new();
        for TableRowChild::TableCell(cell) in &row.cells {
            let mut cell_text = Vec::new();
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        cell_text.push(paragraph_text(paragraph))
                    }
                    TableCellContent::Table(nested) => table_lines(nested, lines),
                    _ => {}
                }
            }
            let cell_text = cell_text.join(" ").trim().to_string();
            if !cell_text.is_empty() {
                cells.push(cell_text);
            }
        }
        if !cells.is_empty() {
            lines.push(cells.join(CELL_SEPARATOR));
        }
    }
    lines.push(String::new());
}

fn spreadsheet_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| IngestError::parse(SourceFormat::Spreadsheet, e))?;

    let mut lines = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| IngestError::parse(SourceFormat::Spreadsheet, e))?;
        debug!(sheet = %name, rows = range.height(), "reading worksheet");
        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(cell_text)
                .filter(|c| !c.is_empty())
                .collect();
            if !cells.is_empty() {
                lines.push(cells.join(CELL_SEPARATOR));
            }
        }
        lines.push(String::new());
    }
    Ok(lines.join("\n"))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(dt) => excel_serial_date(dt.as_f64())
            .map(format_date)
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(iso) => parse_leading_date(iso)
            .map(|(d, _)| format_date(d))
            .unwrap_or_else(|| iso.trim().to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        _ => cell.to_string().trim().to_string(),
    }
}

/// Spreadsheet serial dates count days from 1899-12-30.
fn excel_serial_date(serial: f64) -> Option<Date> {
    if !(1.0..3_000_000.0).contains(&serial) {
        return None;
    }
    date(1899, 12, 30).checked_add((serial.floor() as i64).days()).ok()
}

fn csv_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    // Byte records, so a stray Windows-1252 byte costs one character rather
    // than the whole export.
    let mut lines = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| IngestError::parse(SourceFormat::Csv, e))?;
        let cells: Vec<String> = record
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect();
        if !cells.is_empty() {
            lines.push(cells.join(CELL_SEPARATOR));
        }
    }
    Ok(lines.join("\n"))
}
