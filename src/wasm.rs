// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the browser.
//!
//! One class, `BookSearch`, holding the parsed index for the page lifetime.
//! Fetching the payload, debouncing keystrokes and loading KaTeX stay in
//! JavaScript; the class only needs the payload once and, optionally, a
//! render function:
//!
//! ```js
//! const search = new BookSearch(await (await fetch("search.json")).text(), { basePath });
//! search.setRenderer((src, opts) => katex.renderToString(src, opts));
//! const results = search.search(input.value); // null for a blank query
//! ```

use js_sys::{Function, Object, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::config::SearchOptions;
use crate::error::{RenderError, SessionError};
use crate::index::SearchIndex;
use crate::render::{MathRenderer, RenderOptions};
use crate::search::search_query;
use crate::search::utils::Query;
use crate::types::Document;
use crate::view::build_views;

/// A JavaScript function `(source, options) => markup`, e.g. `katex.renderToString`.
struct JsRenderer(Function);

impl MathRenderer for JsRenderer {
    fn render(&self, source: &str, options: RenderOptions) -> Result<String, RenderError> {
        let js_options = Object::new();
        Reflect::set(&js_options, &"displayMode".into(), &options.display_mode.into())
            .map_err(js_error)?;
        Reflect::set(&js_options, &"throwOnError".into(), &JsValue::FALSE).map_err(js_error)?;

        self.0
            .call2(&JsValue::NULL, &JsValue::from_str(source), &js_options)
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| RenderError::new("renderer returned a non-string value"))
    }
}

fn js_error(value: JsValue) -> RenderError {
    RenderError::new(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// WASM-accessible search over a fully loaded index.
#[wasm_bindgen]
pub struct BookSearch {
    index: SearchIndex,
    options: SearchOptions,
    renderer: Option<JsRenderer>,
}

#[wasm_bindgen]
impl BookSearch {
    /// Parse the index payload.
    ///
    /// `payload` is either the raw JSON text or an already-parsed array of
    /// `{url, title, content}` records. `options` may be `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(payload: JsValue, options: JsValue) -> Result<BookSearch, JsValue> {
        if payload.is_undefined() || payload.is_null() {
            return Err(SessionError::MissingCollaborator("index payload")
                .to_string()
                .into());
        }

        let index = match payload.as_string() {
            Some(json) => SearchIndex::from_json(&json).map_err(|e| e.to_string())?,
            None => {
                let docs: Vec<Document> = from_value(payload).map_err(|e| e.to_string())?;
                SearchIndex::new(docs)
            }
        };

        let options = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };

        Ok(BookSearch {
            index,
            options,
            renderer: None,
        })
    }

    /// Install (or remove, with `undefined`) the math render function.
    #[wasm_bindgen(js_name = setRenderer)]
    pub fn set_renderer(&mut self, render: Option<Function>) {
        self.renderer = render.map(JsRenderer);
    }

    /// Number of documents in the index.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.index.len()
    }

    /// Debounce delay the host should apply to keystrokes, in milliseconds.
    #[wasm_bindgen(getter, js_name = debounceMs)]
    pub fn debounce_ms(&self) -> f64 {
        self.options.debounce_ms as f64
    }

    /// Search and render results.
    ///
    /// Returns `null` for a blank query (nothing to show, as opposed to an
    /// empty array: nothing found), otherwise an array of
    /// `{url, label, snippetHtml, score}`.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let Some(parsed) = Query::parse(query) else {
            return Ok(JsValue::NULL);
        };

        let results = search_query(&self.index, &parsed, &self.options);
        let renderer = self.renderer.as_ref().map(|r| r as &dyn MathRenderer);
        let views = build_views(&results, query, &self.options, renderer);

        to_value(&views).map_err(|e| e.to_string().into())
    }
}
