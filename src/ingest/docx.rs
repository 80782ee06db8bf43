//! DOCX quote parsing: paragraphs out of the OOXML zip container.
//!
//! A `.docx` file is a zip archive whose main part, `word/document.xml`,
//! carries body text as `<w:p>` paragraph elements containing `<w:t>` runs.
//! Joining the text runs of one paragraph and applying the shared separator
//! rule is all the structure this parser needs — styling, tables, and
//! headers/footers are irrelevant to quote extraction.
//!
//! Container reading lives behind the `docx` cargo feature so library users
//! who never ingest word-processor files can drop the `zip` + `quick-xml`
//! dependencies. With the feature compiled out the parser still claims the
//! extension and reports [`MemeForgeError::UnavailableCapability`] — "this
//! build can't read that" is a different answer than "that file is broken".

use super::QuoteParser;
use crate::error::MemeForgeError;
use crate::quote::QuoteRecord;
use std::path::Path;

/// Parser for `.docx` word-processor files.
pub(crate) struct DocxParser;

impl QuoteParser for DocxParser {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["docx"]
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
        parse_container(path)
    }
}

#[cfg(feature = "docx")]
fn parse_container(path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
    use crate::quote::split_quote_line;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::Read;
    use tracing::debug;

    let parse_failure = |detail: String| MemeForgeError::ParseFailure {
        parser: "docx",
        path: path.to_path_buf(),
        detail,
    };

    let file = std::fs::File::open(path).map_err(|e| parse_failure(e.to_string()))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| parse_failure(format!("not a DOCX container: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| parse_failure(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| parse_failure(format!("unreadable word/document.xml: {e}")))?;

    let mut reader = Reader::from_str(&document_xml);
    let mut records = Vec::new();
    let mut paragraph = String::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"p" => {
                in_paragraph = true;
                paragraph.clear();
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => {
                in_paragraph = false;
                if let Some(record) = split_quote_line(&paragraph) {
                    records.push(record);
                }
            }
            Ok(Event::Text(t)) if in_paragraph => {
                let text = t
                    .unescape()
                    .map_err(|e| parse_failure(format!("malformed XML text: {e}")))?;
                paragraph.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_failure(format!("malformed document XML: {e}"))),
            _ => {}
        }
    }

    debug!(path = %path.display(), count = records.len(), "docx parse complete");
    Ok(records)
}

#[cfg(not(feature = "docx"))]
fn parse_container(_path: &Path) -> Result<Vec<QuoteRecord>, MemeForgeError> {
    Err(MemeForgeError::UnavailableCapability {
        capability: "docx-container-reading",
        hint: "This build was compiled without the `docx` feature.\n\
               Rebuild with: cargo build --features docx"
            .into(),
    })
}

#[cfg(all(test, feature = "docx"))]
mod tests {
    use super::*;
    use std::io::Write;

    /// Assemble a minimal but structurally valid .docx from paragraph texts.
    fn docx_fixture(paragraphs: &[&str]) -> tempfile::NamedTempFile {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let document = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );

        let file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .expect("create temp file");
        let mut writer = zip::ZipWriter::new(file.reopen().expect("reopen temp file"));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer
            .start_file("word/document.xml", options)
            .expect("start zip entry");
        writer
            .write_all(document.as_bytes())
            .expect("write document.xml");
        writer.finish().expect("finish zip");
        file
    }

    #[test]
    fn parses_paragraph_quotes() {
        let f = docx_fixture(&[
            "\u{201c}ignored smart quotes\u{201d}",
            "To bork or not to bork - Bork",
            "He who smelt it... - Stinky",
        ]);
        let records = DocxParser.parse(f.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body(), "To bork or not to bork");
        assert_eq!(records[0].author(), "Bork");
        assert_eq!(records[1].author(), "Stinky");
    }

    #[test]
    fn joins_split_text_runs_within_a_paragraph() {
        // Word frequently splits one visual line across several <w:r> runs.
        let body = "<w:p><w:r><w:t>Treat yo self</w:t></w:r>\
                    <w:r><w:t> - </w:t></w:r><w:r><w:t>Tom</w:t></w:r></w:p>";
        let document = format!(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );
        let file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .expect("create temp file");
        let mut writer = zip::ZipWriter::new(file.reopen().expect("reopen temp file"));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap();

        let records = DocxParser.parse(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body(), "Treat yo self");
        assert_eq!(records[0].author(), "Tom");
    }

    #[test]
    fn non_zip_file_is_parse_failure() {
        let mut f = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .expect("create temp file");
        f.write_all(b"this is not a zip archive").unwrap();
        let err = DocxParser.parse(f.path()).unwrap_err();
        match err {
            MemeForgeError::ParseFailure { parser, detail, .. } => {
                assert_eq!(parser, "docx");
                assert!(detail.contains("DOCX container"), "got: {detail}");
            }
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn zip_without_document_xml_is_parse_failure() {
        let file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .expect("create temp file");
        let mut writer = zip::ZipWriter::new(file.reopen().expect("reopen temp file"));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("unrelated.txt", options).unwrap();
        writer.write_all(b"nothing here").unwrap();
        writer.finish().unwrap();

        let err = DocxParser.parse(file.path()).unwrap_err();
        match err {
            MemeForgeError::ParseFailure { detail, .. } => {
                assert!(detail.contains("word/document.xml"), "got: {detail}");
            }
            other => panic!("expected ParseFailure, got {other:?}"),
        }
    }
}
