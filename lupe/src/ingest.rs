use flate2::read::GzDecoder;
use std::io::Read;
use thiserror::Error;

/// MIME type some platforms report for gzip-compressed SVG files.
pub const GZIP_SVG_MIME: &str = "image/svg+xml-compressed";

#[derive(Debug, Error)]
pub enum IngestError {
    /// A newer ingestion attempt started after this one; the completion is
    /// discarded and the document stays as-is.
    #[error("stale ingestion completion")]
    Stale,
    #[error("gzip inflate failed: {0}")]
    Inflate(#[from] std::io::Error),
}

/// Token stamped on every ingestion attempt. Completions carrying anything
/// but the newest token are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(pub u64);

#[derive(Debug, Default)]
pub(crate) struct IngestState {
    next: u64,
    current: u64,
}

impl IngestState {
    pub fn begin(&mut self) -> Generation {
        self.next += 1;
        self.current = self.next;
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}

/// Filename/MIME pair as declared by the platform for a picked or dropped
/// file. Either side may be missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceHint<'a> {
    pub name: Option<&'a str>,
    pub mime: Option<&'a str>,
}

impl SourceHint<'_> {
    pub fn is_gzip(&self) -> bool {
        self.name.is_some_and(|n| n.ends_with(".svgz"))
            || self.mime.is_some_and(|m| m == GZIP_SVG_MIME)
    }

    /// Drop acceptance: declared type mentions svg, or the name ends in .svg.
    pub fn is_svg(&self) -> bool {
        self.mime.is_some_and(|m| m.contains("svg")) || self.name.is_some_and(|n| n.ends_with(".svg"))
    }
}

/// Pasted text is only taken when it plausibly contains markup; anything
/// else is ignored without an error.
pub fn accept_paste(text: &str) -> bool {
    text.contains("<svg")
}

pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn inflate_text(bytes: &[u8]) -> Result<String, IngestError> {
    let mut raw = Vec::new();
    GzDecoder::new(bytes).read_to_end(&mut raw)?;
    Ok(decode_text(&raw))
}
