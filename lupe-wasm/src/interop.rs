use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object {
    Object::new()
}

pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

pub fn stats_obj(stats: &lupe::OptimizeStats) -> JsValue {
    let obj = new_obj();
    set_kv(&obj, "before", &JsValue::from_f64(stats.before as f64));
    set_kv(&obj, "after", &JsValue::from_f64(stats.after as f64));
    set_kv(
        &obj,
        "savedPercent",
        &JsValue::from_f64(f64::from(stats.saved_percent())),
    );
    obj.into()
}
