use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use super::cancel::Waiter;
use super::CancellationToken;

/// One step of a [`CancellableStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Next item from the inner stream.
    Item(T),
    /// The token fired; the inner stream has been dropped.
    Cancelled,
}

/// Wraps a lazy stream so that a cancellation token is checked before every
/// item.
///
/// Once the token fires the inner stream is dropped (abandoning whatever
/// call backs it), a single [`Step::Cancelled`] is yielded, and the stream
/// ends. A consumer parked on a stalled inner stream is woken by the
/// cancellation.
pub struct CancellableStream<S> {
    inner: Option<S>,
    waiter: Waiter,
}

impl<S> CancellableStream<S> {
    /// Wrap `inner`, watching `token`.
    pub fn new(inner: S, token: CancellationToken) -> Self {
        Self {
            inner: Some(inner),
            waiter: Waiter::new(token),
        }
    }
}

impl<S: Stream + Unpin> Stream for CancellableStream<S> {
    type Item = Step<S::Item>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let Some(inner) = this.inner.as_mut() else {
            return Poll::Ready(None);
        };

        if this.waiter.poll_cancelled(cx) {
            this.inner = None;
            return Poll::Ready(Some(Step::Cancelled));
        }

        match Pin::new(inner).poll_next(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(Step::Item(item))),
            Poll::Ready(None) => {
                this.inner = None;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use futures::{stream, StreamExt};

    use super::*;

    #[test]
    fn passes_items_through_until_exhausted() {
        let token = CancellationToken::new();
        let steps: Vec<_> = block_on(
            CancellableStream::new(stream::iter([1, 2, 3]), token).collect(),
        );
        assert_eq!(steps, vec![Step::Item(1), Step::Item(2), Step::Item(3)]);
    }

    #[test]
    fn cancellation_between_items_ends_the_stream() {
        let token = CancellationToken::new();
        let mut s =
            CancellableStream::new(stream::iter(0..), token.clone());
        assert_eq!(block_on(s.next()), Some(Step::Item(0)));
        assert_eq!(block_on(s.next()), Some(Step::Item(1)));
        token.cancel();
        assert_eq!(block_on(s.next()), Some(Step::Cancelled));
        assert_eq!(block_on(s.next()), None);
    }

    #[test]
    fn cancellation_releases_a_stalled_stream() {
        let token = CancellationToken::new();
        let mut s = CancellableStream::new(
            stream::pending::<u32>(),
            token.clone(),
        );
        token.cancel();
        assert_eq!(block_on(s.next()), Some(Step::Cancelled));
    }

    #[test]
    fn another_waiter_does_not_steal_the_wakeup() {
        let mut pool = LocalPool::new();
        let token = CancellationToken::new();
        let steps = Rc::new(RefCell::new(Vec::new()));

        let mut s = CancellableStream::new(
            stream::pending::<u32>(),
            token.clone(),
        );
        let seen = Rc::clone(&steps);
        pool.spawner()
            .spawn_local(async move {
                while let Some(step) = s.next().await {
                    seen.borrow_mut().push(step);
                }
            })
            .unwrap();
        pool.run_until_stalled();

        // Registers after the consumer.
        let watcher = token.cancelled();
        pool.spawner().spawn_local(watcher).unwrap();
        pool.run_until_stalled();
        assert!(steps.borrow().is_empty());

        token.cancel();
        pool.run_until_stalled();
        assert_eq!(*steps.borrow(), vec![Step::Cancelled]);
    }
}
