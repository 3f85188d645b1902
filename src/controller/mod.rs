// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search dialog state machine.
//!
//! ```text
//!            open                payload ok
//! Closed ──────────▶ Loading ──────────────▶ Ready
//!   ▲                   │                      │
//!   │                   │ payload err          │
//!   │                   ▼                      │
//!   └────── close ── Error ◀───────────────────┘ (close from any open state)
//! ```
//!
//! The controller owns no DOM and performs no I/O. Every operation returns
//! the [`Effect`]s its host must carry out: start a fetch, move focus, lock
//! the page scroll, navigate. That keeps the whole keyboard and loading
//! contract testable without a browser.

mod cache;
mod focus;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::PayloadError;
use crate::search::{QueryEngine, DEFAULT_RESULT_LIMIT};
use crate::types::{RankedResult, SearchItem};

pub use cache::{LoadTicket, PayloadCache};
pub use focus::FocusTrap;

/// Id of the search text input.
pub const INPUT_ID: &str = "site-search-input";

/// Id of the panel's close button.
pub const CLOSE_ID: &str = "search-close";

/// Shown while the payload is loading.
pub const LOADING_MESSAGE: &str = "Loading search index…";

/// Shown in the error state. The underlying error is logged, not displayed.
pub const UNAVAILABLE_MESSAGE: &str = "Search is unavailable right now. Please try again later.";

/// Shown when the panel is ready and the query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Start typing to explore projects, notes, and runbooks.";

/// Shown when a non-blank query matched nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matches yet. Try another phrase.";

/// Element id of the result link at `index`.
pub fn result_element_id(index: usize) -> String {
    format!("search-result-{}", index)
}

/// Keyboard hint for the open shortcut on this platform.
pub fn shortcut_hint(is_mac: bool) -> &'static str {
    if is_mac {
        "⌘K"
    } else {
        "Ctrl+K"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    Closed,
    Loading,
    Ready,
    /// Fetch or payload validation failed; holds the error text.
    Error(String),
}

/// Something the host must do on the controller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `/search-index.json` and report back with `payload_loaded`.
    FetchPayload,
    Navigate(String),
    Focus(String),
    /// Return focus to the element that had it before the panel opened.
    RestoreFocus(Option<String>),
    LockScroll,
    UnlockScroll,
}

/// A keydown, reduced to what the controller looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// DOM `KeyboardEvent.key` value, e.g. `"k"`, `"ArrowDown"`, `"Tab"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Focus is in an input, textarea or contenteditable element.
    pub target_is_editable: bool,
    /// Id of the element focused when the key was pressed. Restored on
    /// close when this key opens the panel.
    pub focused: Option<String>,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn in_editable(mut self) -> Self {
        self.target_is_editable = true;
        self
    }

    pub fn focused_on(mut self, id: impl Into<String>) -> Self {
        self.focused = Some(id.into());
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Ctrl/Cmd+K anywhere, or a bare `/` outside text entry.
    pub fn is_open_shortcut(&self) -> bool {
        let k = self.key.eq_ignore_ascii_case("k") && self.command();
        let slash = self.key == "/" && !self.command() && !self.target_is_editable;
        k || slash
    }
}

/// The search dialog.
#[derive(Debug)]
pub struct SearchController {
    cache: PayloadCache,
    limit: usize,
    state: ControllerState,
    engine: Option<Arc<QueryEngine>>,
    query: String,
    results: Vec<RankedResult>,
    active: usize,
    focus: FocusTrap,
    return_focus: Option<String>,
}

impl SearchController {
    pub fn new(cache: PayloadCache) -> Self {
        Self::with_limit(cache, DEFAULT_RESULT_LIMIT)
    }

    pub fn with_limit(cache: PayloadCache, limit: usize) -> Self {
        Self {
            cache,
            limit,
            state: ControllerState::Closed,
            engine: None,
            query: String::new(),
            results: Vec::new(),
            active: 0,
            focus: FocusTrap::default(),
            return_focus: None,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ControllerState::Closed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index of the highlighted result. 0 when there are none.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn ranked(&self) -> &[RankedResult] {
        &self.results
    }

    /// Current results in rank order.
    pub fn results(&self) -> Vec<&SearchItem> {
        match &self.engine {
            Some(engine) => self
                .results
                .iter()
                .filter_map(|r| engine.item(r.position))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn active_result(&self) -> Option<&SearchItem> {
        let engine = self.engine.as_ref()?;
        let ranked = self.results.get(self.active)?;
        engine.item(ranked.position)
    }

    pub fn focus_trap(&self) -> &FocusTrap {
        &self.focus
    }

    /// Line of status text for the panel body, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match &self.state {
            ControllerState::Closed => None,
            ControllerState::Loading => Some(LOADING_MESSAGE),
            ControllerState::Error(_) => Some(UNAVAILABLE_MESSAGE),
            ControllerState::Ready if self.query.trim().is_empty() => Some(EMPTY_QUERY_MESSAGE),
            ControllerState::Ready if self.results.is_empty() => Some(NO_MATCHES_MESSAGE),
            ControllerState::Ready => None,
        }
    }

    /// Open the panel.
    ///
    /// `previously_focused` is the element to restore focus to on close.
    /// A no-op while loading or ready. From the error state it retries.
    pub fn open(&mut self, previously_focused: Option<String>) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.state {
            ControllerState::Loading | ControllerState::Ready => return effects,
            ControllerState::Closed => {
                self.return_focus = previously_focused;
                self.focus.set_elements(vec![INPUT_ID.to_string(), CLOSE_ID.to_string()]);
                effects.push(Effect::LockScroll);
            }
            ControllerState::Error(_) => {}
        }

        match self.cache.begin_load() {
            LoadTicket::Hit(engine) => effects.extend(self.become_ready(engine)),
            LoadTicket::Pending => {
                debug!("search index fetch already in flight");
                self.state = ControllerState::Loading;
            }
            LoadTicket::Start => {
                self.state = ControllerState::Loading;
                effects.push(Effect::FetchPayload);
            }
        }
        effects
    }

    /// Close the panel and reset query state. A no-op when closed.
    pub fn close(&mut self) -> Vec<Effect> {
        if self.state == ControllerState::Closed {
            return Vec::new();
        }
        self.state = ControllerState::Closed;
        self.engine = None;
        self.query.clear();
        self.results.clear();
        self.active = 0;
        self.focus = FocusTrap::default();
        vec![Effect::UnlockScroll, Effect::RestoreFocus(self.return_focus.take())]
    }

    /// Report the outcome of a `FetchPayload` effect.
    ///
    /// The cache is updated even if the panel was closed meanwhile, so the
    /// next open is instant.
    pub fn payload_loaded(&mut self, outcome: Result<QueryEngine, PayloadError>) -> Vec<Effect> {
        let result = self.cache.complete(outcome);
        if self.state != ControllerState::Loading {
            return Vec::new();
        }
        match result {
            Ok(engine) => self.become_ready(engine),
            Err(err) => {
                warn!(error = %err, "search index unavailable");
                self.state = ControllerState::Error(err.to_string());
                Vec::new()
            }
        }
    }

    /// Pick up a payload loaded by another controller sharing the cache.
    pub fn poll_cache(&mut self) -> Vec<Effect> {
        if self.state != ControllerState::Loading {
            return Vec::new();
        }
        match self.cache.get() {
            Some(engine) => self.become_ready(engine),
            None if self.cache.is_in_flight() => Vec::new(),
            // The other fetch failed; this panel owns the retry now.
            None => match self.cache.begin_load() {
                LoadTicket::Start => vec![Effect::FetchPayload],
                LoadTicket::Hit(engine) => self.become_ready(engine),
                LoadTicket::Pending => Vec::new(),
            },
        }
    }

    fn become_ready(&mut self, engine: Arc<QueryEngine>) -> Vec<Effect> {
        debug!(items = engine.len(), "search index ready");
        self.engine = Some(engine);
        self.state = ControllerState::Ready;
        self.rerank();
        self.focus.focus(INPUT_ID);
        vec![Effect::Focus(INPUT_ID.to_string())]
    }

    /// Update the query. Ranked immediately when ready, else on load.
    pub fn set_query(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
        if self.state == ControllerState::Ready {
            self.rerank();
        }
    }

    fn rerank(&mut self) {
        self.results = match &self.engine {
            Some(engine) => engine.search(&self.query, self.limit),
            None => Vec::new(),
        };
        self.active = self.active.min(self.results.len().saturating_sub(1));

        let mut elements = vec![INPUT_ID.to_string(), CLOSE_ID.to_string()];
        elements.extend((0..self.results.len()).map(result_element_id));
        self.focus.set_elements(elements);
    }

    /// Move the highlight down, wrapping to the top.
    pub fn highlight_next(&mut self) {
        let len = self.results.len();
        self.active = if len == 0 { 0 } else { (self.active + 1) % len };
    }

    /// Move the highlight up, wrapping to the bottom.
    pub fn highlight_previous(&mut self) {
        let len = self.results.len();
        self.active = if len == 0 { 0 } else { (self.active + len - 1) % len };
    }

    /// Navigate to the highlighted result. Closes the panel first.
    pub fn select_active(&mut self) -> Option<Vec<Effect>> {
        let url = self.active_result()?.url.clone();
        let mut effects = self.close();
        effects.push(Effect::Navigate(url));
        Some(effects)
    }

    /// Navigate to the result at `index` (a click). Closes the panel first.
    pub fn select(&mut self, index: usize) -> Option<Vec<Effect>> {
        if index >= self.results.len() {
            return None;
        }
        self.active = index;
        self.select_active()
    }

    /// The host moved focus inside the panel.
    pub fn focus_moved(&mut self, id: &str) {
        self.focus.focus(id);
    }

    /// Route a keydown.
    ///
    /// `None` means the key was not handled and the host should let the
    /// default action run. `Some` means the host should prevent the default
    /// and apply the effects.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Vec<Effect>> {
        if event.is_open_shortcut() {
            // `/` typed into our own input is text, not a shortcut
            if self.is_open() && !event.command() {
                return None;
            }
            return Some(self.open(event.focused.clone()));
        }
        if !self.is_open() {
            return None;
        }

        match event.key.as_str() {
            "Escape" => Some(self.close()),
            "ArrowDown" => {
                self.highlight_next();
                Some(Vec::new())
            }
            "ArrowUp" => {
                self.highlight_previous();
                Some(Vec::new())
            }
            "Enter" => self.select_active(),
            "Tab" => Some(
                self.focus
                    .step(event.shift)
                    .map(|id| vec![Effect::Focus(id.to_string())])
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }
}
