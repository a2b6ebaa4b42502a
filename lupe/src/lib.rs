pub mod component;
pub mod document;
pub mod export;
pub mod ingest;
pub mod inspect;
pub mod optimize;
pub mod view;

pub use component::{component_source, rewrite_attributes};
pub use document::{Document, Validity, SAMPLE_SVG};
pub use ingest::{Generation, IngestError, SourceHint};
pub use inspect::{format_bytes, inspect, SvgInfo};
pub use optimize::{OptimizeConfig, OptimizeError, OptimizeStats};
pub use view::{PanPhase, ViewState, ViewSnapshot};

use ingest::IngestState;

/// The one owned state object: document, view transform, optimization stats
/// and the ingestion generation counter. Every mutation goes through a
/// method here; the shell holds exactly one `Viewer` and passes it around by
/// reference.
pub struct Viewer {
    doc: Document,
    view: ViewState,
    stats: Option<OptimizeStats>,
    ingest: IngestState,
}

impl Viewer {
    pub fn new() -> Viewer {
        Viewer::restore(None)
    }

    /// Start from the persisted source text, falling back to the sample.
    pub fn restore(stored: Option<String>) -> Viewer {
        let doc = match stored {
            Some(source) => Document::new(source),
            None => Document::sample(),
        };
        Viewer {
            doc,
            view: ViewState::new(),
            stats: None,
            ingest: IngestState::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn source(&self) -> &str {
        self.doc.source()
    }

    /// Direct text edit from the editor pane.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.doc.set_source(source);
    }

    pub fn load_sample(&mut self) {
        self.doc.set_source(SAMPLE_SVG);
    }

    /// Clipboard paste; ignored unless the text looks like SVG markup.
    /// Returns whether the document changed.
    pub fn paste(&mut self, text: &str) -> bool {
        if !ingest::accept_paste(text) {
            return false;
        }
        self.doc.set_source(text);
        true
    }

    /// Stamp a new ingestion attempt. Any completion carrying an older
    /// generation is rejected, so a slow file read cannot overwrite a newer
    /// load.
    pub fn begin_ingest(&mut self) -> Generation {
        self.ingest.begin()
    }

    pub fn ingest_text(&mut self, generation: Generation, text: &str) -> Result<(), IngestError> {
        if !self.ingest.is_current(generation) {
            return Err(IngestError::Stale);
        }
        self.doc.set_source(text);
        self.view.set_drag_over(false);
        Ok(())
    }

    /// File bytes plus the platform's name/MIME hint. Gzip-compressed input
    /// is inflated first; failures leave the document unchanged.
    pub fn ingest_bytes(
        &mut self,
        generation: Generation,
        bytes: &[u8],
        hint: SourceHint<'_>,
    ) -> Result<(), IngestError> {
        if !self.ingest.is_current(generation) {
            return Err(IngestError::Stale);
        }
        let text = if hint.is_gzip() {
            ingest::inflate_text(bytes)?
        } else {
            ingest::decode_text(bytes)
        };
        self.doc.set_source(text);
        self.view.set_drag_over(false);
        Ok(())
    }

    /// Run the external minifier over the current document. On success the
    /// source is replaced and the size stats recorded; on failure both are
    /// left untouched.
    pub fn optimize(&mut self, config: &OptimizeConfig) -> Result<OptimizeStats, OptimizeError> {
        let before = self.doc.byte_len();
        let optimized = optimize::optimize(self.doc.source(), config)?;
        let stats = OptimizeStats {
            before,
            after: optimized.len(),
        };
        self.doc.set_source(optimized);
        self.stats = Some(stats);
        Ok(stats)
    }

    /// Stats from the last successful optimize. Not recomputed on unrelated
    /// edits; stale values stay until the next optimize.
    pub fn stats(&self) -> Option<OptimizeStats> {
        self.stats
    }

    pub fn component_source(&self) -> String {
        component::component_source(self.doc.source())
    }

    pub fn info(&self) -> Option<SvgInfo> {
        if !self.doc.is_valid() {
            return None;
        }
        inspect::inspect(self.doc.source())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }
}

impl Default for Viewer {
    fn default() -> Viewer {
        Viewer::new()
    }
}
