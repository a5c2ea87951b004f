//! Search-and-isolate pipeline.
//!
//! A submitted query becomes a [`SearchSession`]. Its matches arrive as a
//! lazy stream from the scene's [`SceneQuery`] implementation and are
//! consumed through a [`CancellableStream`] so that a superseding
//! submission stops the old session between any two items. Only a session
//! that runs to completion reaches the highlight index.

mod cancel;
mod controller;
mod session;
mod stream;

use std::fmt;

use futures::Stream;

pub use cancel::{CancellationToken, Cancelled};
pub use controller::{SearchIsolationController, SearchOutcome};
pub use session::{SearchSession, SessionId, SessionState};
pub use stream::{CancellableStream, Step};

use crate::scene::ObjectId;

/// An opaque search request. Matching semantics belong to the
/// [`SceneQuery`] implementation; the text is forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Wrap query text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The query text exactly as submitted.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One matching object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    /// The matching object.
    pub id: ObjectId,
}

/// A non-cancellation search failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search service failed mid-sequence.
    Service(String),
    /// The query text could not be interpreted.
    InvalidPattern(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(msg) => write!(f, "search service error: {msg}"),
            Self::InvalidPattern(msg) => {
                write!(f, "invalid search pattern: {msg}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// The scene's search interface.
///
/// `search` issues a query and returns a lazy, possibly unbounded sequence
/// of matches. The sequence can be dropped mid-iteration at any time; it is
/// restartable only by calling `search` again.
pub trait SceneQuery {
    /// Match sequence type.
    type Matches: Stream<Item = Result<SearchMatch, SearchError>> + Unpin;

    /// Issue `query`. The implementation may watch `token` to stop early.
    fn search(
        &self,
        query: &SearchQuery,
        token: CancellationToken,
    ) -> Self::Matches;
}
