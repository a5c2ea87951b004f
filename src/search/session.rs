use std::fmt;

use super::CancellationToken;
use crate::scene::ObjectId;

/// Monotonic identifier of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search #{}", self.0)
    }
}

/// Lifecycle of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Consuming matches.
    Collecting,
    /// All matches collected and isolated.
    Completed,
    /// Superseded or cancelled; partial matches discarded.
    Cancelled,
    /// The search interface reported an error; partial matches discarded.
    Failed,
}

/// One in-flight search: its token and the ids matched so far.
#[derive(Debug)]
pub struct SearchSession {
    id: SessionId,
    token: CancellationToken,
    matched: Vec<ObjectId>,
    state: SessionState,
}

impl SearchSession {
    /// Start collecting with a fresh token.
    pub(crate) fn new(id: SessionId) -> Self {
        Self {
            id,
            token: CancellationToken::new(),
            matched: Vec::new(),
            state: SessionState::Collecting,
        }
    }

    /// Session identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Token the search interface was handed.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Ids matched so far, in arrival order.
    #[must_use]
    pub fn matched(&self) -> &[ObjectId] {
        &self.matched
    }

    pub(crate) fn push(&mut self, id: ObjectId) {
        debug_assert_eq!(self.state, SessionState::Collecting);
        self.matched.push(id);
    }

    /// Move to a terminal state. Cancelled and failed sessions drop their
    /// partial matches.
    pub(crate) fn finish(&mut self, state: SessionState) {
        if state != SessionState::Completed {
            self.matched.clear();
        }
        self.state = state;
    }
}
