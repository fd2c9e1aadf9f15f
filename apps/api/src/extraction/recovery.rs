//! Binary Text Recovery: best-effort plain text from PDF bytes without a PDF parser.
//!
//! # Procedure
//! 1. Decode the buffer with every configured decoder.
//! 2. Scan each decoding for the pattern classes in `patterns`, clean and bucket the hits.
//! 3. Assemble emails, phones, dates, then generic text; keep the longest assembly.
//! 4. Collapse whitespace, rejoin letter-spaced words, truncate.
//!
//! Failure is `None`, never an error: the caller falls back to asking for pasted text.

use indexmap::IndexSet;
use tracing::{debug, info, warn};

use crate::extraction::decoders::{default_decoders, Decoder};
use crate::extraction::patterns::{classify, clean_match, scan, Bucket};

/// Length bounds for recovered text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryLimits {
    /// Results at or below this length count as "nothing found".
    pub min_meaningful_chars: usize,
    /// Hard cap on the returned text.
    pub max_output_chars: usize,
}

impl Default for RecoveryLimits {
    fn default() -> Self {
        Self {
            min_meaningful_chars: 20,
            max_output_chars: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BinaryTextRecovery {
    decoders: Vec<Decoder>,
    limits: RecoveryLimits,
}

impl BinaryTextRecovery {
    pub fn new(limits: RecoveryLimits) -> Self {
        Self::with_decoders(default_decoders(), limits)
    }

    pub fn with_decoders(decoders: Vec<Decoder>, limits: RecoveryLimits) -> Self {
        Self { decoders, limits }
    }

    pub fn limits(&self) -> RecoveryLimits {
        self.limits
    }

    /// Recovers readable text from `bytes`, or `None` if nothing meaningful was found.
    pub fn recover(&self, bytes: &[u8]) -> Option<String> {
        let min = self.limits.min_meaningful_chars;
        if bytes.len() <= min {
            debug!(len = bytes.len(), "Buffer too short for text recovery");
            return None;
        }

        let mut best = String::new();
        let mut best_len = 0usize;

        for decoder in &self.decoders {
            let Some(decoded) = (decoder.decode)(bytes) else {
                debug!(decoder = decoder.name, "Decoder not applicable, trying next");
                continue;
            };

            let candidate = assemble_candidate(&decoded);
            let candidate_len = candidate.chars().count();
            debug!(
                decoder = decoder.name,
                chars = candidate_len,
                "Recovery candidate assembled"
            );

            if candidate_len > best_len {
                best = candidate;
                best_len = candidate_len;
            }
        }

        if best_len <= min {
            info!(chars = best_len, "No meaningful text recovered from buffer");
            return None;
        }

        let text = rejoin_letter_spacing(&collapse_whitespace(&best));
        let text = self.truncate(text);

        if text.chars().count() <= min {
            info!("Recovered text too short after cleanup");
            return None;
        }

        info!(chars = text.chars().count(), "Recovered text from buffer");
        Some(text)
    }

    fn truncate(&self, text: String) -> String {
        let max = self.limits.max_output_chars;
        match text.char_indices().nth(max) {
            Some((byte_idx, _)) => {
                warn!(max_chars = max, "Recovered text truncated");
                text[..byte_idx].to_string()
            }
            None => text,
        }
    }
}

impl Default for BinaryTextRecovery {
    fn default() -> Self {
        Self::new(RecoveryLimits::default())
    }
}

/// Scans one decoding and joins its buckets: emails, phones, dates, then text.
fn assemble_candidate(decoded: &str) -> String {
    let mut emails: IndexSet<String> = IndexSet::new();
    let mut phones: IndexSet<String> = IndexSet::new();
    let mut dates: IndexSet<String> = IndexSet::new();
    let mut text: Vec<String> = Vec::new();

    for raw in scan(decoded) {
        let Some(cleaned) = clean_match(raw) else {
            continue;
        };
        match classify(&cleaned) {
            Some(Bucket::Email) => {
                emails.insert(cleaned);
            }
            Some(Bucket::Phone) => {
                phones.insert(cleaned);
            }
            Some(Bucket::Date) => {
                dates.insert(cleaned);
            }
            Some(Bucket::Text) => text.push(cleaned),
            None => {}
        }
    }

    emails
        .iter()
        .chain(phones.iter())
        .chain(dates.iter())
        .chain(text.iter())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Merges runs of single-letter tokens (`J o h n` → `John`) left by per-glyph
/// positioning. Lossy: a genuine pair like `a b` is merged too.
/// Narrower than a letter-pair `([a-zA-Z])\s+([a-zA-Z])` pass on purpose: multi-letter
/// words and e-mail addresses keep their spacing.
fn rejoin_letter_spacing(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run = String::new();

    for token in text.split(' ') {
        let mut chars = token.chars();
        let single_letter =
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

        if single_letter {
            run.push_str(token);
            continue;
        }
        if !run.is_empty() {
            out.push(std::mem::take(&mut run));
        }
        out.push(token.to_string());
    }
    if !run.is_empty() {
        out.push(run);
    }

    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recovery() -> BinaryTextRecovery {
        BinaryTextRecovery::default()
    }

    fn pdf_like(body: &str) -> Vec<u8> {
        let mut bytes = b"%PDF-1.4\n1 0 obj\n<< /Type /Page >>\nendobj\nstream\nBT\n".to_vec();
        bytes.extend_from_slice(body.as_bytes());
        bytes.extend_from_slice(b"\nET\nendstream\n%%EOF");
        bytes
    }

    // ── recover ─────────────────────────────────────────────────────────────

    #[test]
    fn test_short_buffers_return_none() {
        for len in 0..=20 {
            let bytes = vec![b'('; len];
            assert_eq!(recovery().recover(&bytes), None, "len {len}");
        }
        assert_eq!(recovery().recover(b"(asafmagen2@gmail.com)"), None);
    }

    #[test]
    fn test_recovers_parenthesized_operands() {
        let bytes = pdf_like("(Senior Data Engineer) Tj (Built streaming pipelines) Tj");
        let text = recovery().recover(&bytes).unwrap();
        assert_eq!(text, "Senior Data Engineer Built streaming pipelines");
    }

    #[test]
    fn test_contact_data_comes_first() {
        let bytes = pdf_like(
            "(Built streaming pipelines) Tj (2016-2020) Tj (054-123-4567) Tj (asafmagen2@gmail.com) Tj",
        );
        let text = recovery().recover(&bytes).unwrap();
        assert!(
            text.starts_with("asafmagen2@gmail.com 054-123-4567 2016-2020"),
            "unexpected order: {text}"
        );
        assert!(text.ends_with("Built streaming pipelines"));
    }

    #[test]
    fn test_email_survives_verbatim() {
        let bytes = pdf_like("junk asafmagen2@gmail.com junk (Tel Aviv, Israel) Tj");
        let text = recovery().recover(&bytes).unwrap();
        assert!(
            text.split(' ').any(|t| t == "asafmagen2@gmail.com"),
            "email mutated: {text}"
        );
    }

    #[test]
    fn test_contact_fields_deduplicated() {
        let bytes = pdf_like(
            "(asafmagen2@gmail.com) Tj (asafmagen2@gmail.com) Tj (Product Manager at Acme) Tj",
        );
        let text = recovery().recover(&bytes).unwrap();
        assert_eq!(text.matches("asafmagen2@gmail.com").count(), 1);
    }

    #[test]
    fn test_long_noise_is_not_engulfed() {
        let noise = "\u{1}".repeat(250);
        let bytes = pdf_like(&format!("(Hello World) ({noise}) (Second operand here)"));
        let text = recovery().recover(&bytes).unwrap();
        assert!(text.contains("Hello World"));
        assert!(!text.contains('\u{1}'));
    }

    #[test]
    fn test_structure_only_buffer_returns_none() {
        let bytes = b"%PDF-1.4\n1 0 obj\n<< /Type/Font /BaseFont /Helvetica >>\nendobj\n(3 0 obj)\n%%EOF";
        assert_eq!(recovery().recover(bytes), None);
    }

    #[test]
    fn test_binary_garbage_never_panics() {
        let bytes: Vec<u8> = (0..4096u32).map(|i| (i * 7919 % 251) as u8).collect();
        let _ = recovery().recover(&bytes);
    }

    #[test]
    fn test_hebrew_text_recovered_from_utf8() {
        let bytes = pdf_like("<< /Lang (he) >> אסף מגן מהנדס נתונים בכיר/Span");
        let text = recovery().recover(&bytes).unwrap();
        assert!(text.contains("אסף מגן מהנדס נתונים בכיר"), "got {text}");
    }

    #[test]
    fn test_output_truncated_to_limit() {
        let body: String = (0..600).map(|i| format!("(Operand number {i}) Tj ")).collect();
        let limits = RecoveryLimits {
            min_meaningful_chars: 20,
            max_output_chars: 500,
        };
        let text = BinaryTextRecovery::new(limits)
            .recover(&pdf_like(&body))
            .unwrap();
        assert_eq!(text.chars().count(), 500);
    }

    #[test]
    fn test_failing_decoder_is_skipped() {
        fn never(_: &[u8]) -> Option<String> {
            None
        }
        let decoders = vec![
            Decoder {
                name: "never",
                decode: never,
            },
            Decoder {
                name: "utf-8",
                decode: crate::extraction::decoders::decode_utf8_lossy,
            },
        ];
        let recovery = BinaryTextRecovery::with_decoders(decoders, RecoveryLimits::default());
        let text = recovery
            .recover(&pdf_like("(Senior Data Engineer at Acme)"))
            .unwrap();
        assert_eq!(text, "Senior Data Engineer at Acme");
    }

    #[test]
    fn test_longest_decoding_wins() {
        fn short(_: &[u8]) -> Option<String> {
            Some("(only this one)".to_string())
        }
        fn long(_: &[u8]) -> Option<String> {
            Some("(this decoding recovers much more text)".to_string())
        }
        let decoders = vec![
            Decoder {
                name: "short",
                decode: short,
            },
            Decoder {
                name: "long",
                decode: long,
            },
        ];
        let recovery = BinaryTextRecovery::with_decoders(decoders, RecoveryLimits::default());
        let text = recovery.recover(&[0u8; 64]).unwrap();
        assert_eq!(text, "this decoding recovers much more text");
    }

    // ── post-processing ─────────────────────────────────────────────────────

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\t\tb \n c "), "a b c");
    }

    #[test]
    fn test_rejoin_letter_spacing() {
        assert_eq!(rejoin_letter_spacing("J o h n Smith"), "John Smith");
        assert_eq!(rejoin_letter_spacing("Data Engineer"), "Data Engineer");
        assert_eq!(rejoin_letter_spacing("Team of 8 people"), "Team of 8 people");
        assert_eq!(rejoin_letter_spacing("א ס ף"), "אסף");
    }

    #[test]
    fn test_rejoin_leaves_isolated_letter() {
        assert_eq!(rejoin_letter_spacing("Plan A rollout"), "Plan A rollout");
    }
}
