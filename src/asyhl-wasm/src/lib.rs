//! Browser bindings for the editor's syntax highlighting.

use asyhl_lib::{Language, Token};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn parse_language(lang: &str) -> Result<Language, JsValue> {
    lang.parse::<Language>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn tokens(source: &str, lang: &str) -> Result<Vec<Token>, JsValue> {
    Ok(asyhl_lib::tokenize(source, parse_language(lang)?))
}

/// Token array as a JS value: `[{ type, value, span: { start, end } }]`.
#[wasm_bindgen]
pub fn tokenize(source: &str, lang: &str) -> Result<JsValue, JsValue> {
    let json = tokenize_json(source, lang)?;
    js_sys::JSON::parse(&json)
}

#[wasm_bindgen(js_name = tokenizeJson)]
pub fn tokenize_json(source: &str, lang: &str) -> Result<String, JsValue> {
    to_json(&tokens(source, lang)?)
}

/// Markup for the editor overlay, one `<span class="sy-...">` per token.
#[wasm_bindgen]
pub fn highlight(source: &str, lang: &str) -> Result<String, JsValue> {
    Ok(asyhl_lib::highlight(source, parse_language(lang)?))
}
