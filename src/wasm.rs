use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::generator::{BoardGenerator, GeneratorConfig};

/// Generate a themed board and return it as JSON, in the shape produced by serializing a
/// [`ThemedBoard`](crate::ThemedBoard).
///
/// Non-string entries of `words` are skipped.
#[wasm_bindgen(js_name = generateBoard)]
pub fn generate_board(special_word: &str, words: Array, seed: Option<u64>) -> Result<String, JsValue> {
    let words = words.iter().filter_map(|word| word.as_string()).collect::<Vec<_>>();

    let generator = BoardGenerator::new(GeneratorConfig::default().with_seed(seed));
    let board = generator.generate_themed_board(special_word, &words)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&board).map_err(|e| JsValue::from_str(&e.to_string()))
}
