// WASM bindings for the tokentrim engine.
//
// Exports a `TrimEngine` class wrapping `tokentrim_en::TrimEngine`.
// Dictionary-backed calls return Promises; everything else is synchronous.
// Inputs that are not strings resolve to an empty result instead of
// throwing.
//
// Usage from JavaScript:
//
//   const engine = new TrimEngine(affText, dicText);
//   await engine.initialize();
//   await engine.processPromptText("Please fix the enviornment");
//       // => [{ type: "Spellcheck", before: "enviornment", ... }, ...]
//   await engine.checkWord("wrld");   // => { correct: false, suggestions: ["world"] }
//   engine.countTokens("hello");     // => 1
//   engine.makeConcise("in order to win", { aggressive: true });
//   engine.optimizeForConciseOutput("Explain X", { strategy: "tldr" });

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use tokentrim_en::{
    ConciseOptions, InstructionSpec, Suggestion, TrimEngine as Engine, WordCheck, make_concise,
};

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn error_to_js(e: impl std::fmt::Display) -> JsValue {
    JsError::new(&e.to_string()).into()
}

/// Options object from JS; `undefined`, `null` and malformed objects give
/// the defaults.
fn options_or_default<T: DeserializeOwned + Default>(value: Option<JsValue>) -> T {
    value
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
        .unwrap_or_default()
}

fn resolved(value: JsValue) -> js_sys::Promise {
    js_sys::Promise::resolve(&value)
}

// ============================================================================
// TrimEngine
// ============================================================================

/// Prompt-shortening engine for WebAssembly.
#[wasm_bindgen(js_name = TrimEngine)]
pub struct WasmTrimEngine {
    engine: Rc<Engine>,
}

#[wasm_bindgen(js_class = TrimEngine)]
impl WasmTrimEngine {
    /// Create an engine from the text of an `.aff` and a `.dic` file.
    ///
    /// The dictionary is parsed on `initialize` or the first check.
    #[wasm_bindgen(constructor)]
    pub fn new(aff: &str, dic: &str) -> Result<WasmTrimEngine, JsError> {
        let engine = Engine::from_bytes(aff, dic).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmTrimEngine {
            engine: Rc::new(engine),
        })
    }

    /// Load the dictionary. Resolves to `undefined`, rejects on a broken
    /// dictionary.
    pub fn initialize(&self) -> js_sys::Promise {
        let engine = Rc::clone(&self.engine);
        future_to_promise(async move {
            engine.initialize().await.map_err(error_to_js)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Suggest token-saving edits. Resolves to an array of
    /// `{ type, before, after, tokensSaved }`.
    #[wasm_bindgen(js_name = processPromptText)]
    pub fn process_prompt_text(&self, text: JsValue) -> js_sys::Promise {
        let Some(text) = text.as_string() else {
            return resolved(js_sys::Array::new().into());
        };
        let engine = Rc::clone(&self.engine);
        future_to_promise(async move {
            let suggestions: Vec<Suggestion> = engine
                .process_prompt_text(&text)
                .await
                .map_err(error_to_js)?;
            to_js(&suggestions)
        })
    }

    /// Check one word. Resolves to `{ correct, suggestions }`.
    #[wasm_bindgen(js_name = checkWord)]
    pub fn check_word(&self, word: JsValue) -> js_sys::Promise {
        let Some(word) = word.as_string() else {
            return match to_js(&WordCheck::correct()) {
                Ok(value) => resolved(value),
                Err(e) => js_sys::Promise::reject(&e),
            };
        };
        let engine = Rc::clone(&self.engine);
        future_to_promise(async move {
            let check = engine.check_word(&word).await.map_err(error_to_js)?;
            to_js(&check)
        })
    }

    /// Number of tokens in `text`.
    #[wasm_bindgen(js_name = countTokens)]
    pub fn count_tokens(&self, text: JsValue) -> usize {
        text.as_string()
            .map(|t| self.engine.count_tokens(&t))
            .unwrap_or(0)
    }

    /// Concise rewrite of `text`. `options` is
    /// `{ removeFillers?, simplifySentences?, aggressive? }`.
    #[wasm_bindgen(js_name = makeConcise)]
    pub fn make_concise(&self, text: JsValue, options: Option<JsValue>) -> String {
        let Some(text) = text.as_string() else {
            return String::new();
        };
        let options: ConciseOptions = options_or_default(options);
        make_concise(&text, &options)
    }

    /// Add an instruction asking for a concise answer. `spec` is
    /// `{ strategy?, position?, maxWords?, maxSentences?, format?, level?, ... }`.
    #[wasm_bindgen(js_name = optimizeForConciseOutput)]
    pub fn optimize_for_concise_output(&self, prompt: JsValue, spec: Option<JsValue>) -> String {
        let Some(prompt) = prompt.as_string() else {
            return String::new();
        };
        let spec: InstructionSpec = options_or_default(spec);
        spec.apply(&prompt)
    }
}
