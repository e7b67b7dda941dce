//! WASM bindings for accept-codings.
//!
//! Provides a browser-compatible API for parsing and ranking header values.

use wasm_bindgen::prelude::*;

use crate::codings::Codings;
use crate::negotiate;

/// Parse a header value into an array of `{ name, quality, attributes }`
/// objects, in header order.
#[wasm_bindgen(js_name = parseAccept)]
pub fn parse_accept(value: &str) -> Result<JsValue, JsError> {
    let codings = Codings::parse(value).map_err(|e| JsError::new(&e.to_string()))?;

    let result = js_sys::Array::new();
    for coding in &codings {
        let attributes = js_sys::Object::new();
        for (key, value) in &coding.attributes {
            let _ = js_sys::Reflect::set(&attributes, &key.into(), &value.into());
        }

        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"name".into(), &coding.name.as_str().into());
        let _ = js_sys::Reflect::set(&obj, &"quality".into(), &JsValue::from_f64(coding.quality));
        let _ = js_sys::Reflect::set(&obj, &"attributes".into(), &attributes);
        result.push(&obj);
    }

    Ok(result.into())
}

/// Parse a header value and return it re-serialized, most preferred first.
#[wasm_bindgen(js_name = sortAccept)]
pub fn sort_accept(value: &str) -> Result<String, JsError> {
    let mut codings = Codings::parse(value).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(codings.sorted().to_string())
}

/// The most preferred accepted name starting with `prefix`, or `undefined`.
#[wasm_bindgen(js_name = preferredLike)]
pub fn preferred_like(value: &str, prefix: &str) -> Option<String> {
    negotiate::preferred_like(value, prefix)
}

/// Whether the header value accepts `name`. Malformed values accept nothing.
#[wasm_bindgen]
pub fn accepts(value: &str, name: &str) -> bool {
    negotiate::accepts(value, name)
}
