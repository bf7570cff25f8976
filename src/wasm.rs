//! Browser bindings. The editor calls these on every relevant state change.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::layout::LayoutEngine;
use crate::model::Section;
use crate::PageGridError;

fn to_js_error(e: PageGridError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// Lay out every page of a JSON document with the default config.
#[wasm_bindgen(js_name = layoutDocument)]
pub fn layout_document(json: &str) -> Result<JsValue, JsValue> {
    let pages = crate::layout_json(json, &LayoutConfig::default()).map_err(to_js_error)?;
    to_js(&pages)
}

/// Lay out one section object at the breakpoint named by `breakpoint`.
#[wasm_bindgen(js_name = layoutSection)]
pub fn layout_section(section: JsValue, breakpoint: &str) -> Result<JsValue, JsValue> {
    let section: Section = serde_wasm_bindgen::from_value(section)
        .map_err(|e| js_sys::Error::new(&e.to_string()))?;
    let layout = LayoutEngine::new()
        .layout_section_for_key(&section, breakpoint)
        .map_err(to_js_error)?;
    to_js(&layout)
}
