// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search dialog.
//!
//! The browser owns the network and the DOM, so the session never fetches
//! anything itself. Every call returns an array of effects for the page to
//! apply; a `fetchPayload` effect means "GET /search-index.json and report
//! back".
//!
//! ```js
//! const session = new SearchSession();
//! apply(session.open(document.activeElement?.id));
//!
//! // keydown
//! const fx = session.handleKey(e.key, e.ctrlKey, e.metaKey, e.shiftKey, isEditable(e.target), document.activeElement?.id);
//! if (fx !== null) { e.preventDefault(); apply(fx); }
//!
//! // on fetchPayload
//! const res = await fetch("/search-index.json", { headers: { accept: "application/json" } });
//! apply(res.ok ? session.loadPayload(await res.text()) : session.failLoad(`HTTP ${res.status}`));
//! ```
//!
//! All sessions on a page share one payload cache, so the index is fetched
//! at most once per page load.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::controller::{shortcut_hint, ControllerState, Effect, KeyEvent, PayloadCache, SearchController};
use crate::error::PayloadError;
use crate::search::{highlight_html, QueryEngine, DEFAULT_RESULT_LIMIT};
use crate::types::SearchItem;
use crate::util::format_date;

thread_local! {
    static PAGE_CACHE: PayloadCache = PayloadCache::new();
}

/// Effect for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsEffect {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl From<Effect> for JsEffect {
    fn from(effect: Effect) -> Self {
        let (kind, target) = match effect {
            Effect::FetchPayload => ("fetchPayload", None),
            Effect::Navigate(url) => ("navigate", Some(url)),
            Effect::Focus(id) => ("focus", Some(id)),
            Effect::RestoreFocus(id) => ("restoreFocus", id),
            Effect::LockScroll => ("lockScroll", None),
            Effect::UnlockScroll => ("unlockScroll", None),
        };
        JsEffect { kind, target }
    }
}

/// A rendered result row.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult {
    id: String,
    url: String,
    title_html: String,
    summary_html: String,
    type_label: &'static str,
    tags: Vec<String>,
    date: Option<String>,
    date_label: Option<String>,
    active: bool,
}

impl JsSearchResult {
    fn from_item(item: &SearchItem, query: &str, active: bool) -> Self {
        Self {
            id: item.id.clone(),
            url: item.url.clone(),
            title_html: highlight_html(&item.title, query),
            summary_html: highlight_html(&item.summary, query),
            type_label: item.kind.label(),
            tags: item.tags.clone(),
            date: item.date.clone(),
            date_label: item.date.as_deref().map(format_date),
            active,
        }
    }
}

fn effects_to_js(effects: Vec<Effect>) -> Result<JsValue, JsValue> {
    let effects: Vec<JsEffect> = effects.into_iter().map(JsEffect::from).collect();
    to_value(&effects).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Search dialog session, one per mounted dialog.
#[wasm_bindgen]
pub struct SearchSession {
    controller: SearchController,
}

#[wasm_bindgen]
impl SearchSession {
    /// Create a session sharing the page-wide payload cache.
    #[wasm_bindgen(constructor)]
    pub fn new(limit: Option<usize>) -> SearchSession {
        let cache = PAGE_CACHE.with(PayloadCache::clone);
        SearchSession {
            controller: SearchController::with_limit(cache, limit.unwrap_or(DEFAULT_RESULT_LIMIT)),
        }
    }

    /// Open the dialog. `previouslyFocused` is restored on close.
    #[wasm_bindgen]
    pub fn open(&mut self, previously_focused: Option<String>) -> Result<JsValue, JsValue> {
        effects_to_js(self.controller.open(previously_focused))
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(self.controller.close())
    }

    /// Hand over the body of `/search-index.json`.
    #[wasm_bindgen(js_name = "loadPayload")]
    pub fn load_payload(&mut self, json: &str) -> Result<JsValue, JsValue> {
        effects_to_js(self.controller.payload_loaded(QueryEngine::from_json(json)))
    }

    /// Report a failed fetch (network error or non-2xx status).
    #[wasm_bindgen(js_name = "failLoad")]
    pub fn fail_load(&mut self, message: &str) -> Result<JsValue, JsValue> {
        effects_to_js(self.controller.payload_loaded(Err(PayloadError::load(message))))
    }

    /// Check whether another session finished loading the shared payload.
    #[wasm_bindgen(js_name = "pollCache")]
    pub fn poll_cache(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(self.controller.poll_cache())
    }

    #[wasm_bindgen(js_name = "setQuery")]
    pub fn set_query(&mut self, query: &str) {
        self.controller.set_query(query);
    }

    /// Route a keydown. Returns `null` when the key was not handled;
    /// otherwise call `preventDefault()` and apply the effects.
    ///
    /// `focused` is `document.activeElement?.id`, restored on close when
    /// the key opens the dialog.
    #[wasm_bindgen(js_name = "handleKey")]
    pub fn handle_key(
        &mut self,
        key: String,
        ctrl: bool,
        meta: bool,
        shift: bool,
        target_is_editable: bool,
        focused: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let event = KeyEvent {
            key,
            ctrl,
            meta,
            shift,
            target_is_editable,
            focused,
        };
        match self.controller.handle_key(&event) {
            Some(effects) => effects_to_js(effects),
            None => Ok(JsValue::NULL),
        }
    }

    /// Click on the result at `index`.
    #[wasm_bindgen]
    pub fn select(&mut self, index: usize) -> Result<JsValue, JsValue> {
        match self.controller.select(index) {
            Some(effects) => effects_to_js(effects),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = "focusMoved")]
    pub fn focus_moved(&mut self, id: &str) {
        self.controller.focus_moved(id);
    }

    /// `closed`, `loading`, `ready` or `error`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.controller.state() {
            ControllerState::Closed => "closed",
            ControllerState::Loading => "loading",
            ControllerState::Ready => "ready",
            ControllerState::Error(_) => "error",
        }
        .to_string()
    }

    #[wasm_bindgen(js_name = "statusMessage")]
    pub fn status_message(&self) -> Option<String> {
        self.controller.status_message().map(str::to_string)
    }

    #[wasm_bindgen(js_name = "activeIndex")]
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Current results with highlighted title and summary HTML.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let query = self.controller.query();
        let active = self.controller.active_index();
        let results: Vec<JsSearchResult> = self
            .controller
            .results()
            .into_iter()
            .enumerate()
            .map(|(i, item)| JsSearchResult::from_item(item, query, i == active))
            .collect();
        to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Label for the search trigger button: `⌘K` on macOS, `Ctrl+K` elsewhere.
#[wasm_bindgen(js_name = "shortcutHint")]
pub fn shortcut_hint_js(is_mac: bool) -> String {
    shortcut_hint(is_mac).to_string()
}
