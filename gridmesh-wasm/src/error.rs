use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

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
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn invalid_id(kind: &str, id: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_f64(id as f64));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn occupied(x: i32, y: i32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "x", &JsValue::from_f64(x as f64));
    set_kv(&d, "y", &JsValue::from_f64(y as f64));
    err("occupied", "a vertex already occupies this grid point", Some(d.into()))
}

#[inline]
pub fn off_grid(x: f32, y: f32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "x", &JsValue::from_f64(x as f64));
    set_kv(&d, "y", &JsValue::from_f64(y as f64));
    err("off_grid", "no grid point within threshold", Some(d.into()))
}
