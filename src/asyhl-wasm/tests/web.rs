#![cfg(target_arch = "wasm32")]

use asyhl_wasm::{highlight, tokenize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tokenize_returns_array() {
    let tokens = tokenize("draw(unitcircle);", "asy").unwrap();
    let array = js_sys::Array::from(&tokens);
    assert_eq!(array.length(), 5);

    let first = array.get(0);
    let kind = js_sys::Reflect::get(&first, &JsValue::from_str("type")).unwrap();
    assert_eq!(kind.as_string().as_deref(), Some("Identifier"));
}

#[wasm_bindgen_test]
fn unknown_language_is_an_error() {
    let err = highlight("x", "python").unwrap_err();
    assert!(err.as_string().unwrap_or_default().contains("Unknown language"));
}
