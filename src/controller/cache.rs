// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide payload cache.
//!
//! One slot, three states: nothing loaded, a fetch in flight, or a ready
//! engine. `begin_load` is the only way to start a fetch, and it hands out
//! `LoadTicket::Start` to exactly one caller until that fetch completes, so
//! there is never more than one request in flight. A failed fetch empties
//! the slot and the next open starts a fresh one.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::PayloadError;
use crate::search::QueryEngine;

#[derive(Debug, Clone, Default)]
enum CacheSlot {
    #[default]
    Empty,
    InFlight,
    Ready(Arc<QueryEngine>),
}

/// What the caller of `begin_load` should do next.
#[derive(Debug, Clone)]
pub enum LoadTicket {
    /// Already loaded.
    Hit(Arc<QueryEngine>),
    /// Somebody else's fetch is outstanding; wait for it.
    Pending,
    /// The caller owns the fetch and must report back via `complete`.
    Start,
}

/// Shared handle to the payload slot. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct PayloadCache {
    slot: Arc<Mutex<CacheSlot>>,
}

impl PayloadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the fetch, or learn why not.
    pub fn begin_load(&self) -> LoadTicket {
        let mut slot = self.slot.lock();
        match &*slot {
            CacheSlot::Ready(engine) => LoadTicket::Hit(Arc::clone(engine)),
            CacheSlot::InFlight => LoadTicket::Pending,
            CacheSlot::Empty => {
                *slot = CacheSlot::InFlight;
                LoadTicket::Start
            }
        }
    }

    /// Record the outcome of the fetch started by `begin_load`.
    ///
    /// A result arriving for a slot that is already `Ready` leaves the
    /// existing engine in place.
    pub fn complete(
        &self,
        outcome: Result<QueryEngine, PayloadError>,
    ) -> Result<Arc<QueryEngine>, PayloadError> {
        let mut slot = self.slot.lock();
        if let CacheSlot::Ready(engine) = &*slot {
            return Ok(Arc::clone(engine));
        }
        match outcome {
            Ok(engine) => {
                let engine = Arc::new(engine);
                *slot = CacheSlot::Ready(Arc::clone(&engine));
                Ok(engine)
            }
            Err(err) => {
                *slot = CacheSlot::Empty;
                Err(err)
            }
        }
    }

    pub fn get(&self) -> Option<Arc<QueryEngine>> {
        match &*self.slot.lock() {
            CacheSlot::Ready(engine) => Some(Arc::clone(engine)),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(*self.slot.lock(), CacheSlot::InFlight)
    }
}
