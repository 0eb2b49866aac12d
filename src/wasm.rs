// WebAssembly bindings so a browser search box can evaluate per keystroke
use crate::query;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct AbacusWasm {}

impl Default for AbacusWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl AbacusWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluate a query
    /// Returns `null`, or a `[text, category]` array
    #[wasm_bindgen]
    pub fn evaluate(&self, query: &str) -> JsValue {
        match query::evaluate(query) {
            Some(evaluation) => {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from_str(&evaluation.text));
                pair.push(&JsValue::from_str(evaluation.category.label()));
                pair.into()
            }
            None => JsValue::NULL,
        }
    }

    /// Evaluate a query
    /// Returns the JSON-serialized evaluation, or `undefined` when nothing matched
    #[wasm_bindgen]
    pub fn evaluate_json(&self, query: &str) -> Result<Option<String>, JsValue> {
        query::evaluate(query)
            .map(|evaluation| {
                serde_json::to_string(&evaluation).map_err(|e| {
                    JsValue::from_str(&format!("Failed to serialize result: {}", e))
                })
            })
            .transpose()
    }
}
