use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

fn new_obj() -> Object {
    Object::new()
}

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data {
        set_kv(&e, "data", &d);
    }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn stale_request(generation: u64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "generation", &JsValue::from_f64(generation as f64));
    err(
        "stale_request",
        "a newer load started; completion discarded",
        Some(d.into()),
    )
}

#[inline]
pub fn inflate_failed(message: impl Into<String>) -> JsValue {
    err("inflate_failed", message, None)
}

#[inline]
pub fn optimize_failed(message: impl Into<String>) -> JsValue {
    err("optimize_failed", message, None)
}

#[inline]
pub fn bad_config(message: impl Into<String>) -> JsValue {
    err("bad_config", message, None)
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    err(
        "non_finite",
        format!("parameter '{}' must be finite", param),
        Some(d.into()),
    )
}

#[inline]
pub fn out_of_range(param: &str, min: f64, got: f64) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min));
    set_kv(&d, "got", &JsValue::from_f64(got));
    err(
        "out_of_range",
        format!("parameter '{}' out of range", param),
        Some(d.into()),
    )
}
