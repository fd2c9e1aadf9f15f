//! Text extraction for uploaded documents, dispatched on MIME type.
//!
//! Every failure path ends in `ExtractionOutcome::ManualInput`; the client responds by
//! asking the user to paste their resume text instead.

use serde::Serialize;
use tracing::{info, warn};

use crate::extraction::docx::extract_docx_text;
use crate::extraction::recovery::BinaryTextRecovery;

pub const PDF_NO_TEXT: &str = "No readable text could be extracted from the PDF. This may be an \
    image-based PDF, password-protected, or use a complex format. Please use the text input \
    option by copy-pasting your resume content.";
pub const WORD_FAILED: &str =
    "Word document parsing failed. Please try converting to text format.";
pub const IMAGE_UNSUPPORTED: &str =
    "Text recognition for images is not available. Please paste your resume text instead.";
pub const UNSUPPORTED_TYPE: &str =
    "Unsupported file type. Please use PDF, Word, or image files.";
pub const EMPTY_TEXT: &str =
    "No text could be extracted from the file. Please try a different format.";
pub const PASTE_SUGGESTION: &str =
    "Copy the text from your document and paste it in the \"Paste Text\" tab for best results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Word,
    Image,
    Unsupported,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime == "application/pdf" {
            DocumentKind::Pdf
        } else if mime.contains("wordprocessingml") || mime == "application/msword" {
            DocumentKind::Word
        } else if mime.starts_with("image/") {
            DocumentKind::Image
        } else {
            DocumentKind::Unsupported
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    ManualInput { reason: &'static str },
}

/// Extracts text from an uploaded document. CPU-bound; call from `spawn_blocking`.
pub fn extract_document(
    kind: DocumentKind,
    bytes: &[u8],
    recovery: &BinaryTextRecovery,
) -> ExtractionOutcome {
    let text = match kind {
        DocumentKind::Pdf => match recovery.recover(bytes) {
            Some(text) => text,
            None => {
                return ExtractionOutcome::ManualInput {
                    reason: PDF_NO_TEXT,
                }
            }
        },
        DocumentKind::Word => match extract_docx_text(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("Word parsing failed: {e}");
                return ExtractionOutcome::ManualInput {
                    reason: WORD_FAILED,
                };
            }
        },
        DocumentKind::Image => {
            return ExtractionOutcome::ManualInput {
                reason: IMAGE_UNSUPPORTED,
            }
        }
        DocumentKind::Unsupported => {
            return ExtractionOutcome::ManualInput {
                reason: UNSUPPORTED_TYPE,
            }
        }
    };

    if text.trim().is_empty() {
        return ExtractionOutcome::ManualInput { reason: EMPTY_TEXT };
    }

    info!(kind = ?kind, chars = text.chars().count(), "Text extraction completed");
    ExtractionOutcome::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(DocumentKind::from_mime("application/pdf"), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::from_mime(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            DocumentKind::Word
        );
        assert_eq!(DocumentKind::from_mime("application/msword"), DocumentKind::Word);
        assert_eq!(DocumentKind::from_mime("image/png"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_mime("text/plain"), DocumentKind::Unsupported);
    }

    #[test]
    fn test_pdf_with_text() {
        let bytes = b"%PDF-1.4\nBT (Senior Data Engineer at Acme) Tj ET\n%%EOF";
        let outcome = extract_document(DocumentKind::Pdf, bytes, &BinaryTextRecovery::default());
        assert_eq!(
            outcome,
            ExtractionOutcome::Text("Senior Data Engineer at Acme".to_string())
        );
    }

    #[test]
    fn test_image_pdf_requires_manual_input() {
        let bytes = vec![0xFFu8; 2048];
        let outcome = extract_document(DocumentKind::Pdf, &bytes, &BinaryTextRecovery::default());
        assert_eq!(
            outcome,
            ExtractionOutcome::ManualInput {
                reason: PDF_NO_TEXT
            }
        );
    }

    #[test]
    fn test_legacy_doc_requires_manual_input() {
        // Pre-2007 .doc files are OLE containers, not ZIP.
        let bytes = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        let outcome = extract_document(DocumentKind::Word, &bytes, &BinaryTextRecovery::default());
        assert_eq!(
            outcome,
            ExtractionOutcome::ManualInput {
                reason: WORD_FAILED
            }
        );
    }

    #[test]
    fn test_images_and_unknown_types_require_manual_input() {
        let recovery = BinaryTextRecovery::default();
        assert!(matches!(
            extract_document(DocumentKind::Image, b"\x89PNG", &recovery),
            ExtractionOutcome::ManualInput { .. }
        ));
        assert!(matches!(
            extract_document(DocumentKind::Unsupported, b"plain", &recovery),
            ExtractionOutcome::ManualInput { .. }
        ));
    }
}
