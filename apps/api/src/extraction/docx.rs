//! Plain text from Word (.docx) uploads: the ZIP container's `word/document.xml`.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";
/// Ceiling on the decompressed document part. Resume-sized documents are well under 1 MiB.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Not a readable .docx archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error reading document part: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document part exceeds {limit} bytes when decompressed")]
    TooLarge { limit: u64 },

    #[error("Document part is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Extracts paragraph text from a .docx byte buffer.
///
/// Text runs (`w:t`) are concatenated; tabs become `\t`, breaks and paragraph ends
/// become `\n`. Formatting, headers and footers are ignored.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DocxError> {
    extract_docx_text_with_limit(bytes, MAX_DOCUMENT_XML_BYTES)
}

/// Same as `extract_docx_text`, refusing a document part larger than `limit` bytes.
///
/// The declared size in the archive is checked first, then the read itself is capped,
/// since a crafted entry can under-report its size.
pub fn extract_docx_text_with_limit(bytes: &[u8], limit: u64) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let part = archive.by_name(DOCUMENT_PART)?;
    if part.size() > limit {
        return Err(DocxError::TooLarge { limit });
    }

    let mut raw = Vec::new();
    part.take(limit + 1).read_to_end(&mut raw)?;
    if raw.len() as u64 > limit {
        return Err(DocxError::TooLarge { limit });
    }

    document_xml_to_text(&String::from_utf8(raw)?)
}

fn document_xml_to_text(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Asaf Magen</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Data Engineer </w:t></w:r><w:r><w:t>&amp; Analyst</w:t></w:r></w:p>
    <w:p><w:r><w:t>2016</w:t><w:tab/><w:t>היום</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    fn make_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(b"<Types/>").unwrap();
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_paragraphs_and_runs() {
        let text = extract_docx_text(&make_docx(BODY)).unwrap();
        assert_eq!(text, "Asaf Magen\nData Engineer & Analyst\n2016\tהיום");
    }

    #[test]
    fn test_ignores_text_outside_runs() {
        let xml = r#"<w:document><w:body><w:p><w:instrText>PAGE</w:instrText><w:r><w:t>Kept</w:t></w:r></w:p></w:body></w:document>"#;
        assert_eq!(document_xml_to_text(xml).unwrap(), "Kept");
    }

    #[test]
    fn test_non_zip_input_is_an_error() {
        let err = extract_docx_text(b"%PDF-1.4 not a zip").unwrap_err();
        assert!(matches!(err, DocxError::Zip(_)));
    }

    #[test]
    fn test_missing_document_part_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(extract_docx_text(&bytes), Err(DocxError::Zip(_))));
    }

    #[test]
    fn test_oversized_document_part_is_rejected() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(b"<w:document><w:body><w:p><w:r><w:t>").unwrap();
        let filler = vec![b'a'; 1024 * 1024];
        for _ in 0..4 {
            writer.write_all(&filler).unwrap();
        }
        writer.write_all(b"</w:t></w:r></w:p></w:body></w:document>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        // Deflate shrinks the 4 MiB part to a few KiB.
        assert!(bytes.len() < 64 * 1024, "archive is {} bytes", bytes.len());
        let err = extract_docx_text_with_limit(&bytes, 1024 * 1024).unwrap_err();
        assert!(matches!(err, DocxError::TooLarge { limit: 1_048_576 }));
    }

    #[test]
    fn test_document_part_within_limit_is_read() {
        let bytes = make_docx(BODY);
        let limit = BODY.len() as u64;
        assert!(extract_docx_text_with_limit(&bytes, limit).is_ok());
        assert!(matches!(
            extract_docx_text_with_limit(&bytes, limit - 1),
            Err(DocxError::TooLarge { .. })
        ));
    }
}
