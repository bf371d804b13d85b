//! Minimal single-sheet xlsx (Office Open XML) writer.
//!
//! Text goes through the shared string table, numbers are written inline.
//! No styles beyond the default one, no formulas.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(Decimal),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Number(Decimal::from(value))
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Cell::Number(value)
    }
}

/// Rows of one worksheet, in insertion order.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn append_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }
}

/// Column letters for a zero-based index: 0 -> A, 25 -> Z, 26 -> AA.
pub fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

#[derive(Default)]
struct SharedStrings {
    index: HashMap<String, usize>,
    ordered: Vec<String>,
    references: usize,
}

impl SharedStrings {
    fn intern(&mut self, value: &str) -> usize {
        self.references += 1;
        if let Some(&i) = self.index.get(value) {
            return i;
        }
        let i = self.ordered.len();
        self.ordered.push(value.to_string());
        self.index.insert(value.to_string(), i);
        i
    }

    fn to_xml(&self) -> String {
        let mut xml = format!(
            r#"{XML_DECLARATION}<sst xmlns="{NS_MAIN}" count="{}" uniqueCount="{}">"#,
            self.references,
            self.ordered.len()
        );
        for value in &self.ordered {
            xml.push_str(r#"<si><t xml:space="preserve">"#);
            xml.push_str(&escape(value.as_str()));
            xml.push_str("</t></si>");
        }
        xml.push_str("</sst>");
        xml
    }
}

fn sheet_xml(sheet: &Worksheet, strings: &mut SharedStrings) -> String {
    let mut xml = format!(r#"{XML_DECLARATION}<worksheet xmlns="{NS_MAIN}"><sheetData>"#);
    for (r, row) in sheet.rows.iter().enumerate() {
        let row_number = r + 1;
        xml.push_str(&format!(r#"<row r="{row_number}">"#));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(c), row_number);
            match cell {
                Cell::Number(value) => {
                    xml.push_str(&format!(r#"<c r="{reference}"><v>{value}</v></c>"#));
                }
                Cell::Text(value) => {
                    let i = strings.intern(value);
                    xml.push_str(&format!(r#"<c r="{reference}" t="s"><v>{i}</v></c>"#));
                }
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn content_types_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
            r#"<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#,
            "</Types>"
        ),
        XML_DECLARATION
    )
}

fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECLARATION}<Relationships xmlns="{NS_PKG_REL}"><Relationship Id="rId1" Type="{NS_REL}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"{XML_DECLARATION}<workbook xmlns="{NS_MAIN}" xmlns:r="{NS_REL}"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        escape(sheet_name)
    )
}

fn workbook_rels_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Relationships xmlns="{pkg}">"#,
            r#"<Relationship Id="rId1" Type="{rel}/worksheet" Target="worksheets/sheet1.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{rel}/styles" Target="styles.xml"/>"#,
            r#"<Relationship Id="rId3" Type="{rel}/sharedStrings" Target="sharedStrings.xml"/>"#,
            "</Relationships>"
        ),
        decl = XML_DECLARATION,
        pkg = NS_PKG_REL,
        rel = NS_REL
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<styleSheet xmlns="{}">"#,
            r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
            r#"<fills count="1"><fill><patternFill patternType="none"/></fill></fills>"#,
            r#"<borders count="1"><border/></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
            "</styleSheet>"
        ),
        XML_DECLARATION, NS_MAIN
    )
}

/// Serialize a worksheet into the bytes of an `.xlsx` file.
#[instrument(skip(sheet), fields(sheet_name = %sheet.name, rows = sheet.rows.len()))]
pub fn write_workbook(sheet: &Worksheet) -> Result<Vec<u8>> {
    let mut strings = SharedStrings::default();
    let sheet_part = sheet_xml(sheet, &mut strings);

    let parts = [
        ("[Content_Types].xml", content_types_xml()),
        ("_rels/.rels", package_rels_xml()),
        ("xl/workbook.xml", workbook_xml(&sheet.name)),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
        ("xl/styles.xml", styles_xml()),
        ("xl/sharedStrings.xml", strings.to_xml()),
        ("xl/worksheets/sheet1.xml", sheet_part),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, body) in parts {
        trace!("Writing part {}", name);
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    debug!("Workbook written: {} bytes", bytes.len());
    Ok(bytes)
}
