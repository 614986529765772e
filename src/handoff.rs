//! Navigation and the one-shot hand-off between screens
//!
//! A submission record travels from the intake screen to the ticket screen
//! through a [`HandoffStore`] keyed by a single-use token. The token rides on
//! the [`Location`] produced by navigation; the ticket screen redeems it once.
//! Nothing here outlives the process.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::intake::SubmissionRecord;
use crate::types::Route;

/// Single-use key for a record waiting in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandoffToken(Uuid);

impl HandoffToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// In-memory store of records waiting to be picked up
#[derive(Debug, Default)]
pub struct HandoffStore {
    pending: Mutex<HashMap<HandoffToken, SubmissionRecord>>,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a record and get the token that redeems it
    pub fn put(&self, record: SubmissionRecord) -> HandoffToken {
        let token = HandoffToken::new();
        self.pending.lock().insert(token, record);
        token
    }

    /// Redeem a token; a second redemption yields `None`
    pub fn take(&self, token: HandoffToken) -> Option<SubmissionRecord> {
        self.pending.lock().remove(&token)
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where the app is, plus any transient state attached by the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub route: Route,
    pub state: Option<HandoffToken>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self { route, state: None }
    }
}

/// History of locations over a shared hand-off store
#[derive(Debug, Clone)]
pub struct Router {
    store: Arc<HandoffStore>,
    history: Vec<Location>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Arc::new(HandoffStore::new()))
    }
}

impl Router {
    /// Start at the intake route
    pub fn new(store: Arc<HandoffStore>) -> Self {
        Self::starting_at(store, Route::Intake)
    }

    pub fn starting_at(store: Arc<HandoffStore>, route: Route) -> Self {
        Self {
            store,
            history: vec![Location::new(route)],
        }
    }

    pub fn current(&self) -> Location {
        self.history.last().copied().unwrap_or_default()
    }

    /// Push a new location without transient state
    pub fn navigate(&mut self, route: Route) -> Location {
        tracing::debug!(%route, "navigate");
        let location = Location::new(route);
        self.history.push(location);
        location
    }

    /// Push a new location carrying a record as transient state
    pub fn navigate_with(&mut self, route: Route, record: SubmissionRecord) -> Location {
        tracing::debug!(%route, ticket_id = record.ticket_id, "navigate with record");
        let location = Location {
            route,
            state: Some(self.store.put(record)),
        };
        self.history.push(location);
        location
    }

    /// Swap the current location without adding a history entry
    pub fn replace(&mut self, route: Route) -> Location {
        tracing::debug!(%route, "replace");
        let location = Location::new(route);
        match self.history.last_mut() {
            Some(current) => {
                let previous = std::mem::replace(current, location);
                self.release(previous);
            }
            None => self.history.push(location),
        }
        location
    }

    /// Go back to a fresh intake screen
    ///
    /// Clears the history and drops any record that was never redeemed, so
    /// repeated round trips neither grow the history nor the store.
    pub fn start_over(&mut self) -> Location {
        tracing::debug!("start over");
        for previous in std::mem::take(&mut self.history) {
            self.release(previous);
        }
        let location = Location::new(Route::Intake);
        self.history.push(location);
        location
    }

    fn release(&self, location: Location) {
        if let Some(token) = location.state
            && self.store.take(token).is_some()
        {
            tracing::debug!(route = %location.route, "discarded unredeemed record");
        }
    }

    /// Redeem the transient state attached to the current location
    pub fn take_state(&mut self) -> Option<SubmissionRecord> {
        let token = self.history.last_mut()?.state.take()?;
        self.store.take(token)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
