use wasm_bindgen::prelude::*;
mod api;
mod browser;
mod error;
mod interop;
mod raster;

use gloo::events::EventListener;
use gloo::render::AnimationFrame;
use std::cell::RefCell;
use std::rc::Rc;

pub use api::{
    accepts_drop, format_bytes, grid_spacing, is_gzip, parse_scales, read_clipboard,
    read_file_bytes,
};
pub use browser::STORAGE_KEY;

/// JS-facing handle around the core state. The core is shared behind
/// `Rc<RefCell>` so completion callbacks (animation frames, the document
/// mouseup listener) can reenter it.
#[wasm_bindgen]
pub struct Viewer {
    pub(crate) inner: Rc<RefCell<lupe::Viewer>>,
    /// Pending background-color frame; dropping it cancels the update.
    pub(crate) bg_frame: Rc<RefCell<Option<AnimationFrame>>>,
    /// Pointer-up anywhere in the page ends an active pan.
    pub(crate) _mouseup: Option<EventListener>,
}

impl Viewer {
    pub fn rs_new() -> Viewer {
        let inner = Rc::new(RefCell::new(lupe::Viewer::restore(browser::restore())));
        let mouseup = web_sys::window().and_then(|w| w.document()).map(|document| {
            let inner = Rc::clone(&inner);
            EventListener::new(&document, "mouseup", move |_| {
                inner.borrow_mut().view_mut().pointer_up();
            })
        });
        Viewer {
            inner,
            bg_frame: Rc::new(RefCell::new(None)),
            _mouseup: mouseup,
        }
    }

    pub fn rs_source(&self) -> String {
        self.inner.borrow().source().to_string()
    }
}
