//! Pattern classes, match cleaning and bucket classification for PDF byte scanning.

use std::sync::LazyLock;

use regex::Regex;

/// Literal text operands: `(...)` without nested parentheses.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]{2,200})\)").expect("static regex"));

/// Hebrew text stored outside parenthesized operands.
static HEBREW_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{0590}-\x{05FF}][^<>/]{1,100}").expect("static regex"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("static regex")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2,3}[-\s]?[0-9]{3,4}[-\s]?[0-9]{3,4}").expect("static regex")
});

/// `2016-2020`, `2016 – היום`, `2016-Present`.
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}[\s\-–](?:[0-9]{4}|היום|Present)").expect("static regex")
});

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("static regex"));

static ESCAPE_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[rnt]").expect("static regex"));

static MARKUP_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>{}]").expect("static regex"));

/// Substrings that only occur in PDF structure, never in resume content.
const STRUCTURE_TOKENS: &[&str] = &[
    "obj",
    "endobj",
    "FontDescriptor",
    "Registry",
    "Type/Font",
    "BaseFont",
];

const MIN_MATCH_CHARS: usize = 3;
const MAX_DATE_CHARS: usize = 50;
const MAX_TEXT_CHARS: usize = 200;

/// Where a cleaned match ends up in the assembled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Email,
    Phone,
    Date,
    Text,
}

/// Pattern classes in scan order.
pub fn pattern_classes() -> [&'static Regex; 5] {
    [&*PARENTHESIZED, &*HEBREW_RUN, &*EMAIL, &*PHONE, &*DATE_RANGE]
}

/// Every raw match of every pattern class, pattern by pattern, in text order.
pub fn scan(text: &str) -> impl Iterator<Item = &str> {
    pattern_classes()
        .into_iter()
        .flat_map(move |pattern| pattern.find_iter(text).map(|m| m.as_str()))
}

/// Strips the enclosing parentheses and markup, or returns `None` for structural noise.
pub fn clean_match(raw: &str) -> Option<String> {
    let stripped = raw.strip_prefix('(').unwrap_or(raw);
    let stripped = stripped.strip_suffix(')').unwrap_or(stripped);
    let unescaped = ESCAPE_SEQUENCE.replace_all(stripped, " ");
    let cleaned = MARKUP_DELIMITER.replace_all(&unescaped, " ");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() < MIN_MATCH_CHARS
        || STRUCTURE_TOKENS.iter().any(|t| cleaned.contains(t))
    {
        return None;
    }
    Some(cleaned.to_string())
}

/// First applicable bucket: email, phone, date, then generic text.
/// Returns `None` for generic text outside the accepted length range.
pub fn classify(cleaned: &str) -> Option<Bucket> {
    let len = cleaned.chars().count();

    if cleaned.contains('@') {
        Some(Bucket::Email)
    } else if PHONE.is_match(cleaned) {
        Some(Bucket::Phone)
    } else if FOUR_DIGITS.is_match(cleaned) && len < MAX_DATE_CHARS {
        Some(Bucket::Date)
    } else if len >= MIN_MATCH_CHARS && len < MAX_TEXT_CHARS {
        Some(Bucket::Text)
    } else {
        None
    }
}
