//! PNG export: decode the document as an image, draw it onto an offscreen
//! canvas at the requested scale, encode, download. Everything here runs off
//! completion callbacks; failures are console-logged only.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// `background` is the fill color, or `None` to leave the canvas
/// transparent.
pub fn export_png(svg: &str, scale: f64, background: Option<String>) {
    let (width, height) = lupe::export::raster_size(lupe::export::intrinsic_size(svg), scale);
    let filename = lupe::export::png_filename(scale);
    let uri = lupe::view::svg_data_uri(svg);
    let Ok(img) = HtmlImageElement::new() else {
        return;
    };

    let draw_target = img.clone();
    let onload = Closure::once_into_js(move || {
        draw_and_download(&draw_target, width, height, background, &filename);
    });
    img.set_onload(Some(onload.unchecked_ref()));
    let onerror = Closure::once_into_js(move || {
        gloo::console::error!("png export: image decode failed");
    });
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(&uri);
}

fn draw_and_download(
    img: &HtmlImageElement,
    width: u32,
    height: u32,
    background: Option<String>,
    filename: &str,
) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let canvas = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
    let Some(canvas) = canvas else {
        return;
    };
    canvas.set_width(width);
    canvas.set_height(height);
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
    let Some(context) = context else {
        gloo::console::error!("png export: no 2d context");
        return;
    };
    if let Some(color) = background {
        context.set_fill_style_str(&color);
        context.fill_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }
    if context
        .draw_image_with_html_image_element_and_dw_and_dh(
            img,
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        )
        .is_err()
    {
        gloo::console::error!("png export: draw failed");
        return;
    }
    let name = filename.to_string();
    let on_blob = Closure::once_into_js(move |blob: JsValue| match blob.dyn_into::<web_sys::Blob>()
    {
        Ok(blob) => crate::browser::download_blob(&name, &blob),
        Err(_) => gloo::console::error!("png export: encoding failed"),
    });
    if canvas
        .to_blob_with_type(on_blob.unchecked_ref(), "image/png")
        .is_err()
    {
        gloo::console::error!("png export: to_blob failed");
    }
}
