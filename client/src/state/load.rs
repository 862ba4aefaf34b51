//! Explicit fetch lifecycle for route views.
//!
//! DESIGN
//! ======
//! A view calls `begin()` when it starts a fetch and hands the returned
//! ticket to `finish()` when the response arrives. Only the newest ticket is
//! applied, and nothing is applied after `cancel()`, so a response that
//! lands after navigation or after a newer fetch is dropped.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Idle counts as pending: the first fetch has not been issued yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one `begin()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// A `LoadState` plus the bookkeeping that suppresses stale responses.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadable<T> {
    pub state: LoadState<T>,
    generation: u64,
    cancelled: bool,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self { state: LoadState::Idle, generation: 0, cancelled: false }
    }
}

impl<T> Loadable<T> {
    /// Start a fetch, superseding any in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.cancelled = false;
        self.state = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Apply a response. Returns `false` when the ticket is stale or the
    /// loadable was cancelled; the state is left untouched in that case.
    pub fn finish<E: std::fmt::Display>(&mut self, ticket: LoadTicket, result: Result<T, E>) -> bool {
        if self.cancelled || ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        true
    }

    /// Drop whatever is in flight. A later `begin()` re-arms the loadable.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        if self.state.is_loading() {
            self.state = LoadState::Idle;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn value(&self) -> Option<&T> {
        self.state.value()
    }
}

impl<T: Clone> Loadable<Vec<T>> {
    /// Loaded items, or an empty list while pending or after a failure.
    pub fn items(&self) -> Vec<T> {
        self.value().cloned().unwrap_or_default()
    }
}
