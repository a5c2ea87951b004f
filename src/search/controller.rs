use std::cell::{Cell, Ref, RefCell};
use std::future::Future;

use futures::StreamExt;

use super::session::{SearchSession, SessionId, SessionState};
use super::stream::{CancellableStream, Step};
use super::{CancellationToken, SceneQuery, SearchError, SearchQuery};
use crate::highlight::{HighlightIndexState, HighlightSink};

/// How a submitted search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// All matches were collected and isolated.
    Isolated {
        /// Session that produced the isolation.
        session: SessionId,
        /// Number of matched objects.
        matched: usize,
    },
    /// Superseded or cancelled before completion. Not an error.
    Cancelled {
        /// Session that was cancelled.
        session: SessionId,
    },
    /// The search interface failed; the highlight index is untouched.
    Failed {
        /// Session that failed.
        session: SessionId,
        /// Reported failure.
        error: SearchError,
    },
}

/// Handle on the session currently allowed to isolate.
#[derive(Debug)]
struct ActiveSearch {
    id: SessionId,
    token: CancellationToken,
}

/// Runs cancellable searches and isolates their results.
///
/// Methods take `&self` so that a new submission can be made while an
/// earlier one is still being awaited on the same thread. At most one
/// session is active: submitting cancels the active session's token before
/// the new session (and its token) is created.
pub struct SearchIsolationController<Q, S> {
    query: Q,
    highlight: RefCell<HighlightIndexState<S>>,
    active: RefCell<Option<ActiveSearch>>,
    next_id: Cell<u64>,
}

impl<Q: SceneQuery, S: HighlightSink> SearchIsolationController<Q, S> {
    /// Create a controller searching `query` and isolating into
    /// `highlight`.
    pub fn new(query: Q, highlight: HighlightIndexState<S>) -> Self {
        Self {
            query,
            highlight: RefCell::new(highlight),
            active: RefCell::new(None),
            next_id: Cell::new(1),
        }
    }

    /// Submit query text.
    ///
    /// The active session (if any) is cancelled and the new query issued
    /// immediately, during this call. The returned future consumes the
    /// matches and must be polled to completion for the isolation to
    /// happen; dropping it cancels the session and frees the active slot.
    pub fn submit(
        &self,
        text: impl Into<String>,
    ) -> impl Future<Output = SearchOutcome> + '_ {
        let session = self.begin();
        let guard = SessionGuard {
            active: &self.active,
            id: session.id(),
            token: session.token().clone(),
            settled: false,
        };
        let query = SearchQuery::new(text);
        log::debug!("{} issued: {:?}", session.id(), query.text());
        let matches = self.query.search(&query, session.token().clone());
        self.collect(session, matches, guard)
    }

    /// Cancel the active session, if any. Returns whether one was active.
    pub fn cancel(&self) -> bool {
        let Some(active) = self.active.borrow_mut().take() else {
            return false;
        };
        active.token.cancel();
        log::debug!("{} cancelled", active.id);
        true
    }

    /// Cancel any active search and make every object visible again.
    pub fn clear(&self) {
        let _ = self.cancel();
        self.highlight.borrow_mut().isolate(&[]);
    }

    /// Whether a session is collecting matches.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.active
            .borrow()
            .as_ref()
            .is_some_and(|a| !a.token.is_cancelled())
    }

    /// Id of the session currently collecting matches.
    #[must_use]
    pub fn active_session(&self) -> Option<SessionId> {
        self.active.borrow().as_ref().map(|a| a.id)
    }

    /// Borrow the highlight state.
    pub fn highlight(&self) -> Ref<'_, HighlightIndexState<S>> {
        self.highlight.borrow()
    }

    /// Cancel-then-start: the previous token fires before the new one
    /// exists.
    fn begin(&self) -> SearchSession {
        let _ = self.cancel();
        let id = SessionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let session = SearchSession::new(id);
        *self.active.borrow_mut() = Some(ActiveSearch {
            id,
            token: session.token().clone(),
        });
        session
    }

    async fn collect(
        &self,
        mut session: SearchSession,
        matches: Q::Matches,
        mut guard: SessionGuard<'_>,
    ) -> SearchOutcome {
        let id = session.id();
        let mut steps =
            CancellableStream::new(matches, session.token().clone());

        while let Some(step) = steps.next().await {
            match step {
                Step::Item(Ok(hit)) => session.push(hit.id),
                Step::Item(Err(error)) => {
                    session.finish(SessionState::Failed);
                    guard.settle();
                    log::warn!("{id} failed: {error}");
                    return SearchOutcome::Failed { session: id, error };
                }
                Step::Cancelled => {
                    session.finish(SessionState::Cancelled);
                    guard.settle();
                    log::debug!("{id} stopped after cancellation");
                    return SearchOutcome::Cancelled { session: id };
                }
            }
        }

        // The sequence may have ended on its own after the token fired.
        if session.token().is_cancelled() {
            session.finish(SessionState::Cancelled);
            guard.settle();
            log::debug!("{id} ended after cancellation");
            return SearchOutcome::Cancelled { session: id };
        }

        session.finish(SessionState::Completed);
        self.highlight.borrow_mut().isolate(session.matched());
        guard.settle();
        let matched = session.matched().len();
        log::info!("{id} isolated {matched} object(s)");
        SearchOutcome::Isolated {
            session: id,
            matched,
        }
    }
}

/// Clear the active slot if it still belongs to `id`.
fn release(active: &RefCell<Option<ActiveSearch>>, id: SessionId) {
    let mut active = active.borrow_mut();
    if active.as_ref().is_some_and(|a| a.id == id) {
        *active = None;
    }
}

/// Ties a session's hold on the active slot to its consuming future.
///
/// A future dropped before it settles (never polled, or abandoned
/// mid-stream) cancels its token and frees the slot.
struct SessionGuard<'a> {
    active: &'a RefCell<Option<ActiveSearch>>,
    id: SessionId,
    token: CancellationToken,
    settled: bool,
}

impl SessionGuard<'_> {
    fn settle(&mut self) {
        self.settled = true;
        release(self.active, self.id);
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        self.token.cancel();
        release(self.active, self.id);
        log::debug!("{} abandoned", self.id);
    }
}
