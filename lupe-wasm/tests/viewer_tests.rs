use lupe_wasm::Viewer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const DOC: &str = "<svg viewBox=\"0 0 40 60\"><rect width=\"40\" height=\"60\"/></svg>";

#[wasm_bindgen_test]
fn zoom_clamps_across_all_input_paths() {
    let mut v = Viewer::new();
    v.set_zoom(9999);
    assert_eq!(v.zoom(), 500);
    v.set_zoom(-50);
    assert_eq!(v.zoom(), 25);
    for _ in 0..100 {
        v.wheel(-1.0);
    }
    assert_eq!(v.zoom(), 500);
    for _ in 0..100 {
        v.zoom_out();
    }
    assert_eq!(v.zoom(), 25);
    v.set_zoom_field("junk");
    assert_eq!(v.zoom(), 100);
}

#[wasm_bindgen_test]
fn pan_and_zoom_are_independent() {
    let mut v = Viewer::new();
    v.pointer_down(0, 10.0, 10.0);
    v.pointer_move(35.0, -4.0);
    v.pointer_up();
    v.set_zoom(200);
    v.reset_zoom();
    assert_eq!((v.pan_x(), v.pan_y()), (25.0, -14.0));
    v.set_zoom(300);
    v.reset_pan();
    assert_eq!(v.zoom(), 300);
    assert_eq!((v.pan_x(), v.pan_y()), (0.0, 0.0));
}

#[wasm_bindgen_test]
fn validity_states() {
    let mut v = Viewer::new();
    v.set_source(DOC);
    assert!(v.is_valid());
    assert_eq!(v.validation_error(), None);
    v.set_source("<svg");
    assert!(!v.is_valid());
    assert_eq!(
        v.validation_error().as_deref(),
        Some("Invalid or incomplete SVG")
    );
    v.set_source("");
    assert!(!v.is_valid());
    assert_eq!(v.validation_error().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn paste_only_takes_svg_text() {
    let mut v = Viewer::new();
    v.set_source(DOC);
    assert!(!v.paste("not markup"));
    assert_eq!(v.source(), DOC);
    assert!(v.paste("<svg height=\"1\"><g/></svg>"));
    assert_eq!(v.source(), "<svg height=\"1\"><g/></svg>");
}

#[wasm_bindgen_test]
fn persisted_slot_round_trips() {
    let mut v = Viewer::new();
    let text = "<svg viewBox=\"0 0 7 7\">\n  <circle r=\"3\"/>\n</svg>";
    v.set_source(text);

    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item(lupe_wasm::STORAGE_KEY).unwrap().as_deref(),
        Some(text)
    );

    // a fresh viewer restores the same bytes
    let restored = Viewer::new();
    assert_eq!(restored.source(), text);
}

#[wasm_bindgen_test]
fn stale_load_is_discarded() {
    let mut v = Viewer::new();
    v.set_source(DOC);
    let first = v.begin_load();
    let second = v.begin_load();
    assert!(!v.load_text(first, "<svg old=\"1\"></svg>"));
    assert_eq!(v.source(), DOC);
    assert!(v.load_text(second, "<svg new=\"1\"></svg>"));
    assert_eq!(v.source(), "<svg new=\"1\"></svg>");
}

#[wasm_bindgen_test]
fn component_source_rewrites_attributes() {
    let mut v = Viewer::new();
    v.set_source(r#"<svg class="a" stroke-width="2"/>"#);
    let out = v.component_source();
    assert!(out.contains(r#"<svg className="a" strokeWidth="2"/>"#));
    assert!(out.starts_with("function Icon(props) {"));
}

#[wasm_bindgen_test]
fn bg_color_applies_on_the_next_frame_not_synchronously() {
    let mut v = Viewer::new();
    v.set_bg_color("#111111");
    v.schedule_bg_color("#222222");
    v.schedule_bg_color("#333333");
    // coalesced: nothing applied within the same frame
    assert_eq!(v.bg_color(), "#111111");
}

#[wasm_bindgen_test]
fn data_uri_is_inline() {
    let mut v = Viewer::new();
    v.set_source(DOC);
    let uri = v.data_uri();
    assert!(uri.starts_with("data:image/svg+xml"));
    assert!(!uri.contains('<'));
}

#[wasm_bindgen_test]
fn info_follows_validity() {
    let mut v = Viewer::new();
    v.set_source("<svg");
    assert!(v.info().is_null());
    v.set_source(DOC);
    let info = v.info();
    let view_box = js_sys::Reflect::get(&info, &"viewBox".into()).unwrap();
    assert_eq!(view_box.as_string().as_deref(), Some("0 0 40 60"));
}

#[wasm_bindgen_test]
fn export_size_matches_dimension_rules() {
    let mut v = Viewer::new();
    v.set_source(DOC);
    let size = v.export_size(2.0);
    let w = js_sys::Reflect::get(&size, &"width".into()).unwrap();
    let h = js_sys::Reflect::get(&size, &"height".into()).unwrap();
    assert_eq!(w.as_f64(), Some(80.0));
    assert_eq!(h.as_f64(), Some(120.0));
}

#[wasm_bindgen_test]
fn drop_acceptance() {
    assert!(lupe_wasm::accepts_drop(Some("a.svg".into()), None));
    assert!(lupe_wasm::accepts_drop(
        None,
        Some("image/svg+xml".into())
    ));
    assert!(!lupe_wasm::accepts_drop(
        Some("a.png".into()),
        Some("image/png".into())
    ));
    assert!(lupe_wasm::is_gzip(Some("a.svgz".into()), None));
    assert!(lupe_wasm::is_gzip(
        None,
        Some("image/svg+xml-compressed".into())
    ));
}
