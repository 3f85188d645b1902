// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Focus trap for the open search panel.
//!
//! Tab moves forward through the panel's focusable elements and wraps from
//! last to first; Shift+Tab wraps from first to last. Focus never leaves the
//! panel while it is open.

/// Ordered focusable element ids plus which one has focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTrap {
    elements: Vec<String>,
    current: Option<usize>,
}

impl FocusTrap {
    pub fn new(elements: Vec<String>) -> Self {
        Self {
            elements,
            current: None,
        }
    }

    /// Replace the element list, keeping focus on the same id if it survives.
    pub fn set_elements(&mut self, elements: Vec<String>) {
        let focused = self.focused().map(str::to_string);
        self.elements = elements;
        self.current = focused.and_then(|id| self.position(&id));
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn focused(&self) -> Option<&str> {
        self.current
            .and_then(|i| self.elements.get(i))
            .map(String::as_str)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e == id)
    }

    /// Record focus moved by the host (a click, or programmatic focus).
    ///
    /// An id outside the panel clears the tracked focus.
    pub fn focus(&mut self, id: &str) {
        self.current = self.position(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Advance focus and return the newly focused id.
    ///
    /// With nothing tracked, forward lands on the first element and backward
    /// on the last. `None` only when the panel has no focusable elements.
    pub fn step(&mut self, backwards: bool) -> Option<&str> {
        let len = self.elements.len();
        if len == 0 {
            self.current = None;
            return None;
        }
        let next = match (self.current, backwards) {
            (None, false) => 0,
            (None, true) => len - 1,
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
        };
        self.current = Some(next);
        self.focused()
    }
}
