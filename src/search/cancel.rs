use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll, Waker};

use rustc_hash::FxHashMap;

/// Wakers of every task currently parked on a token, keyed by registration.
#[derive(Debug, Default)]
struct Waiters {
    next_key: usize,
    wakers: FxHashMap<usize, Waker>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    waiters: Mutex<Waiters>,
}

impl Inner {
    fn waiters(&self) -> MutexGuard<'_, Waiters> {
        self.waiters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cooperative cancellation handle shared between a requester and the
/// operation it started.
///
/// Clones observe the same flag. Any number of tasks may wait on a token;
/// cancelling wakes all of them.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

impl CancellationToken {
    /// Create an untriggered token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trigger the token. Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        let wakers: Vec<Waker> = self
            .inner
            .waiters()
            .wakers
            .drain()
            .map(|(_, waker)| waker)
            .collect();
        for waker in wakers {
            waker.wake();
        }
    }

    /// Whether the token has been triggered.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Future that resolves once the token is triggered.
    #[must_use]
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            waiter: Waiter::new(self.clone()),
        }
    }

    #[cfg(test)]
    pub(crate) fn waiter_count(&self) -> usize {
        self.inner.waiters().wakers.len()
    }
}

/// One task's registration on a token. Deregisters itself when dropped.
#[derive(Debug)]
pub(crate) struct Waiter {
    token: CancellationToken,
    key: Option<usize>,
}

impl Waiter {
    pub(crate) fn new(token: CancellationToken) -> Self {
        Self { token, key: None }
    }

    /// Whether the token has fired. If not, `cx`'s waker is stored (or
    /// refreshed) so that `cancel` wakes this task.
    pub(crate) fn poll_cancelled(&mut self, cx: &Context<'_>) -> bool {
        if self.token.is_cancelled() {
            return true;
        }
        let mut waiters = self.token.inner.waiters();
        // Checked under the lock: `cancel` sets the flag before draining.
        if self.token.is_cancelled() {
            return true;
        }
        let key = match self.key {
            Some(key) => key,
            None => {
                let key = waiters.next_key;
                waiters.next_key += 1;
                self.key = Some(key);
                key
            }
        };
        match waiters.wakers.get_mut(&key) {
            Some(waker) if waker.will_wake(cx.waker()) => {}
            Some(waker) => waker.clone_from(cx.waker()),
            None => drop(waiters.wakers.insert(key, cx.waker().clone())),
        }
        false
    }
}

impl Drop for Waiter {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            drop(self.token.inner.waiters().wakers.remove(&key));
        }
    }
}

/// Future returned by [`CancellationToken::cancelled`].
#[derive(Debug)]
pub struct Cancelled {
    waiter: Waiter,
}

impl Future for Cancelled {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.waiter.poll_cancelled(cx) {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::task::{noop_waker_ref, LocalSpawnExt};

    use super::*;

    #[test]
    fn clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn cancel_wakes_every_waiter() {
        let mut pool = LocalPool::new();
        let token = CancellationToken::new();
        let woken = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let wait = token.cancelled();
            let woken = Rc::clone(&woken);
            pool.spawner()
                .spawn_local(async move {
                    wait.await;
                    woken.set(woken.get() + 1);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert_eq!(woken.get(), 0);
        assert_eq!(token.waiter_count(), 3);

        token.cancel();
        pool.run_until_stalled();
        assert_eq!(woken.get(), 3);
        assert_eq!(token.waiter_count(), 0);
    }

    #[test]
    fn dropped_waiter_deregisters() {
        let token = CancellationToken::new();
        let mut cx = Context::from_waker(noop_waker_ref());
        let mut wait = Box::pin(token.cancelled());
        assert!(wait.as_mut().poll(&mut cx).is_pending());
        assert!(wait.as_mut().poll(&mut cx).is_pending());
        assert_eq!(token.waiter_count(), 1);

        drop(wait);
        assert_eq!(token.waiter_count(), 0);
    }

    #[test]
    fn already_cancelled_resolves_without_registering() {
        let token = CancellationToken::new();
        token.cancel();
        let mut cx = Context::from_waker(noop_waker_ref());
        let mut wait = Box::pin(token.cancelled());
        assert!(wait.as_mut().poll(&mut cx).is_ready());
        assert_eq!(token.waiter_count(), 0);
    }
}
