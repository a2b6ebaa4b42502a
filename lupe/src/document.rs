use regex_lite::Regex;
use std::sync::OnceLock;

/// Built-in document shown on first launch and restored as the fallback
/// when nothing is persisted.
pub const SAMPLE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 160 160" width="160" height="160">
  <rect x="16" y="16" width="128" height="128" rx="24" fill="#35629e"/>
  <circle cx="80" cy="68" r="30" fill="#e9f1fc"/>
  <path d="M46 122 q34 -28 68 0" stroke="#e9f1fc" stroke-width="9" fill="none" stroke-linecap="round"/>
</svg>"##;

pub const INVALID_MESSAGE: &str = "Invalid or incomplete SVG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Empty text is its own state, distinct from a malformed document.
    Empty,
    Invalid,
}

// Opening <svg ...> tag, anything in between, matching close tag. Newlines
// allowed everywhere; not a real XML check.
fn svg_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<svg.*?>.*</svg>").unwrap())
}

pub fn validate(source: &str) -> Validity {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        Validity::Empty
    } else if svg_pattern().is_match(trimmed) {
        Validity::Valid
    } else {
        Validity::Invalid
    }
}

#[derive(Clone, Debug)]
pub struct Document {
    source: String,
    validity: Validity,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Document {
        let source = source.into();
        let validity = validate(&source);
        Document { source, validity }
    }

    pub fn sample() -> Document {
        Document::new(SAMPLE_SVG)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Wholesale replacement; there is no merging of document content.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.validity = validate(&self.source);
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    /// `None` when valid, `Some("")` for the empty state, a fixed message
    /// otherwise.
    pub fn validation_error(&self) -> Option<&'static str> {
        match self.validity {
            Validity::Valid => None,
            Validity::Empty => Some(""),
            Validity::Invalid => Some(INVALID_MESSAGE),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.source.len()
    }
}

impl Default for Document {
    fn default() -> Document {
        Document::sample()
    }
}
