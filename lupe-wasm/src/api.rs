use crate::error;
use crate::interop;
use crate::Viewer;
use lupe::ingest::SourceHint;
use lupe::Generation;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Drag-and-drop acceptance, by declared type or filename.
#[wasm_bindgen]
pub fn accepts_drop(name: Option<String>, mime: Option<String>) -> bool {
    SourceHint {
        name: name.as_deref(),
        mime: mime.as_deref(),
    }
    .is_svg()
}

/// Whether a picked file should go through the inflate path.
#[wasm_bindgen]
pub fn is_gzip(name: Option<String>, mime: Option<String>) -> bool {
    SourceHint {
        name: name.as_deref(),
        mime: mime.as_deref(),
    }
    .is_gzip()
}

/// Overlay grid pitch in CSS pixels; independent of zoom.
#[wasm_bindgen]
pub fn grid_spacing() -> f64 {
    lupe::view::GRID_SPACING
}

/// Scale factors parsed from the export panel's comma-separated input.
#[wasm_bindgen]
pub fn parse_scales(input: &str) -> Vec<f64> {
    lupe::export::parse_scales(input)
}

/// Human-readable byte size for the info panel.
#[wasm_bindgen]
pub fn format_bytes(bytes: u32) -> String {
    lupe::format_bytes(bytes as usize)
}

#[wasm_bindgen]
pub fn read_file_bytes(file: web_sys::File) -> js_sys::Promise {
    crate::browser::read_file_bytes(file)
}

#[wasm_bindgen]
pub fn read_clipboard() -> js_sys::Promise {
    crate::browser::read_clipboard()
}

#[wasm_bindgen]
impl Viewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Viewer {
        crate::Viewer::rs_new()
    }

    // Document
    pub fn source(&self) -> String {
        self.inner.borrow().source().to_string()
    }
    pub fn set_source(&mut self, text: &str) {
        self.inner.borrow_mut().set_source(text);
        self.persist();
    }
    pub fn is_valid(&self) -> bool {
        self.inner.borrow().document().is_valid()
    }
    pub fn validation_error(&self) -> Option<String> {
        self.inner
            .borrow()
            .document()
            .validation_error()
            .map(str::to_string)
    }
    pub fn load_sample(&mut self) {
        self.inner.borrow_mut().load_sample();
        self.persist();
    }
    /// Clipboard paste; only applied when the text contains SVG markup.
    pub fn paste(&mut self, text: &str) -> bool {
        let changed = self.inner.borrow_mut().paste(text);
        if changed {
            self.persist();
        }
        changed
    }

    // Ingestion. Every attempt takes a generation; a completion carrying an
    // older generation is discarded without touching the document.
    pub fn begin_load(&mut self) -> u64 {
        self.inner.borrow_mut().begin_ingest().0
    }
    pub fn load_text(&mut self, generation: u64, text: &str) -> bool {
        let ok = self
            .inner
            .borrow_mut()
            .ingest_text(Generation(generation), text)
            .is_ok();
        if ok {
            self.persist();
        }
        ok
    }
    pub fn load_bytes(
        &mut self,
        generation: u64,
        bytes: &[u8],
        name: Option<String>,
        mime: Option<String>,
    ) -> bool {
        self.load_bytes_inner(generation, bytes, name, mime).is_ok()
    }
    pub fn load_bytes_res(
        &mut self,
        generation: u64,
        bytes: &[u8],
        name: Option<String>,
        mime: Option<String>,
    ) -> JsValue {
        match self.load_bytes_inner(generation, bytes, name, mime) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(lupe::IngestError::Stale) => error::stale_request(generation),
            Err(err @ lupe::IngestError::Inflate(_)) => error::inflate_failed(err.to_string()),
        }
    }
    pub fn set_drag_over(&mut self, over: bool) {
        self.inner.borrow_mut().view_mut().set_drag_over(over);
    }
    pub fn drag_over(&self) -> bool {
        self.inner.borrow().view().drag_over()
    }

    // Optimization
    pub fn optimize(&mut self, config: JsValue) -> bool {
        let Ok(config) = parse_config(config) else {
            return false;
        };
        let ok = self.inner.borrow_mut().optimize(&config).is_ok();
        if ok {
            self.persist();
        }
        ok
    }
    pub fn optimize_res(&mut self, config: JsValue) -> JsValue {
        let config = match parse_config(config) {
            Ok(config) => config,
            Err(err) => return error::bad_config(err.to_string()),
        };
        match self.inner.borrow_mut().optimize(&config) {
            Ok(stats) => {
                self.persist();
                error::ok(interop::stats_obj(&stats))
            }
            Err(err) => error::optimize_failed(err.to_string()),
        }
    }
    /// Stats from the last successful optimize, or null. May be stale after
    /// unrelated edits; never recomputed here.
    pub fn stats(&self) -> JsValue {
        match self.inner.borrow().stats() {
            Some(stats) => interop::stats_obj(&stats),
            None => JsValue::NULL,
        }
    }

    // Inspection / export
    pub fn info(&self) -> JsValue {
        match self.inner.borrow().info() {
            Some(info) => serde_wasm_bindgen::to_value(&info).unwrap(),
            None => JsValue::NULL,
        }
    }
    pub fn component_source(&self) -> String {
        self.inner.borrow().component_source()
    }
    pub fn copy_source(&self) -> js_sys::Promise {
        crate::browser::write_clipboard(self.inner.borrow().source().to_string())
    }
    pub fn copy_component(&self) -> js_sys::Promise {
        crate::browser::write_clipboard(self.inner.borrow().component_source())
    }
    pub fn download_svg(&self) {
        crate::browser::download_text(
            lupe::export::SVG_FILENAME,
            self.inner.borrow().source(),
            "image/svg+xml",
        );
    }
    pub fn export_png(&self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            gloo::console::error!("png export: bad scale", scale);
            return;
        }
        let (svg, background) = {
            let inner = self.inner.borrow();
            (inner.source().to_string(), export_background(&inner))
        };
        crate::raster::export_png(&svg, scale, background);
    }
    pub fn export_png_res(&self, scale: f64) -> JsValue {
        if !scale.is_finite() {
            return error::non_finite("scale");
        }
        if scale <= 0.0 {
            return error::out_of_range("scale", f64::MIN_POSITIVE, scale);
        }
        self.export_png(scale);
        error::ok(JsValue::TRUE)
    }
    /// Output canvas size for a given scale, for display next to the export
    /// buttons.
    pub fn export_size(&self, scale: f64) -> JsValue {
        let inner = self.inner.borrow();
        let (width, height) =
            lupe::export::raster_size(lupe::export::intrinsic_size(inner.source()), scale);
        serde_wasm_bindgen::to_value(&ExportSize { width, height }).unwrap()
    }

    // View transform
    pub fn zoom(&self) -> i32 {
        self.inner.borrow().view().zoom()
    }
    pub fn set_zoom(&mut self, zoom: i32) {
        self.inner.borrow_mut().view_mut().set_zoom(zoom);
    }
    pub fn set_zoom_field(&mut self, text: &str) {
        self.inner.borrow_mut().view_mut().set_zoom_field(text);
    }
    pub fn zoom_in(&mut self) {
        self.inner.borrow_mut().view_mut().zoom_in();
    }
    pub fn zoom_out(&mut self) {
        self.inner.borrow_mut().view_mut().zoom_out();
    }
    pub fn reset_zoom(&mut self) {
        self.inner.borrow_mut().view_mut().reset_zoom();
    }
    pub fn zoom_actual(&mut self) {
        self.inner.borrow_mut().view_mut().zoom_actual();
    }
    pub fn zoom_fit(&mut self) {
        self.inner.borrow_mut().view_mut().zoom_fit();
    }
    pub fn wheel(&mut self, delta_y: f64) {
        self.inner.borrow_mut().view_mut().wheel(delta_y);
    }
    pub fn pointer_down(&mut self, button: i16, x: f64, y: f64) {
        self.inner.borrow_mut().view_mut().pointer_down(button, x, y);
    }
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.borrow_mut().view_mut().pointer_move(x, y);
    }
    pub fn pointer_up(&mut self) {
        self.inner.borrow_mut().view_mut().pointer_up();
    }
    pub fn is_panning(&self) -> bool {
        self.inner.borrow().view().is_panning()
    }
    pub fn pan_x(&self) -> f64 {
        self.inner.borrow().view().pan().0
    }
    pub fn pan_y(&self) -> f64 {
        self.inner.borrow().view().pan().1
    }
    pub fn reset_pan(&mut self) {
        self.inner.borrow_mut().view_mut().reset_pan();
    }
    pub fn grid(&self) -> bool {
        self.inner.borrow().view().grid()
    }
    pub fn toggle_grid(&mut self) {
        self.inner.borrow_mut().view_mut().toggle_grid();
    }
    pub fn set_grid(&mut self, grid: bool) {
        self.inner.borrow_mut().view_mut().set_grid(grid);
    }
    pub fn bg_transparent(&self) -> bool {
        self.inner.borrow().view().bg_transparent()
    }
    pub fn toggle_bg_transparent(&mut self) {
        self.inner.borrow_mut().view_mut().toggle_bg_transparent();
    }
    pub fn set_bg_transparent(&mut self, transparent: bool) {
        self.inner
            .borrow_mut()
            .view_mut()
            .set_bg_transparent(transparent);
    }
    pub fn bg_color(&self) -> String {
        self.inner.borrow().view().bg_color().to_string()
    }
    pub fn set_bg_color(&mut self, color: &str) {
        self.inner.borrow_mut().view_mut().set_bg_color(color);
    }
    /// Coalesced background-color update from a continuous input device:
    /// at most one applied change per display frame, last value wins. The
    /// pending frame is dropped with the viewer.
    pub fn schedule_bg_color(&mut self, color: &str) {
        self.inner.borrow_mut().view_mut().schedule_bg_color(color);
        if self.bg_frame.borrow().is_some() {
            return;
        }
        let inner = Rc::clone(&self.inner);
        let slot = Rc::clone(&self.bg_frame);
        let frame = gloo::render::request_animation_frame(move |_| {
            slot.borrow_mut().take();
            inner.borrow_mut().view_mut().flush_bg_color();
        });
        *self.bg_frame.borrow_mut() = Some(frame);
    }
    pub fn outer_transform(&self) -> String {
        self.inner.borrow().view().outer_transform()
    }
    pub fn inner_transform(&self) -> String {
        self.inner.borrow().view().inner_transform()
    }
    /// The document as an inline image resource for the preview.
    pub fn data_uri(&self) -> String {
        lupe::view::svg_data_uri(self.inner.borrow().source())
    }
    pub fn view_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.borrow().view().snapshot()).unwrap()
    }
}

impl Viewer {
    fn persist(&self) {
        crate::browser::persist(self.inner.borrow().source());
    }

    fn load_bytes_inner(
        &mut self,
        generation: u64,
        bytes: &[u8],
        name: Option<String>,
        mime: Option<String>,
    ) -> Result<(), lupe::IngestError> {
        let result = self.inner.borrow_mut().ingest_bytes(
            Generation(generation),
            bytes,
            SourceHint {
                name: name.as_deref(),
                mime: mime.as_deref(),
            },
        );
        if result.is_ok() {
            self.persist();
        }
        result
    }
}

fn export_background(inner: &lupe::Viewer) -> Option<String> {
    let view = inner.view();
    if view.bg_transparent() {
        None
    } else {
        Some(view.bg_color().to_string())
    }
}

fn parse_config(config: JsValue) -> Result<lupe::OptimizeConfig, serde_wasm_bindgen::Error> {
    if config.is_undefined() || config.is_null() {
        return Ok(lupe::OptimizeConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
}

#[derive(serde::Serialize)]
struct ExportSize {
    width: u32,
    height: u32,
}
