//! Per-object highlight groups and the isolate operation.
//!
//! The renderer assigns every object to one of 256 highlight groups and
//! applies a visual transform per group. Group [`VISIBLE_GROUP`] is the
//! default; group [`HIDDEN_GROUP`] is reserved for hidden objects. Writes go
//! through a [`HighlightSink`] and only become visible to the renderer at
//! [`HighlightSink::commit`].

mod index;

pub use index::{HighlightIndex, HighlightReader, HighlightSnapshot};

use crate::scene::ObjectId;

/// Default group: rendered normally.
pub const VISIBLE_GROUP: u8 = 0;
/// Reserved group: not rendered.
pub const HIDDEN_GROUP: u8 = 255;

/// Write surface of a highlight index owned by the renderer.
///
/// Implementations must batch writes until `commit` so that a render never
/// observes a partially applied update.
pub trait HighlightSink {
    /// Number of addressable entries.
    fn capacity(&self) -> usize;

    /// Stage `group` for `id`.
    fn set(&mut self, id: ObjectId, group: u8);

    /// Stage `group` for every entry.
    fn fill(&mut self, group: u8) {
        for i in 0..self.capacity() {
            self.set(ObjectId(i as u32), group);
        }
    }

    /// Publish all staged writes atomically.
    fn commit(&mut self);
}

/// Owns the highlight sink and applies isolation batches to it.
pub struct HighlightIndexState<S> {
    sink: S,
}

impl<S: HighlightSink> HighlightIndexState<S> {
    /// Wrap a sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Hide every object except `ids`, then commit once.
    ///
    /// An empty `ids` resets every object to visible. Because the whole
    /// index is refilled first, nothing carries over from an earlier
    /// isolation.
    pub fn isolate(&mut self, ids: &[ObjectId]) {
        if ids.is_empty() {
            self.sink.fill(VISIBLE_GROUP);
        } else {
            self.sink.fill(HIDDEN_GROUP);
            for &id in ids {
                self.sink.set(id, VISIBLE_GROUP);
            }
        }
        self.sink.commit();
        log::debug!("isolated {} object(s)", ids.len());
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Plain array sink that counts commits and keeps the committed copy
    /// separate from the staged one.
    pub(crate) struct RecordingSink {
        pub staged: Vec<u8>,
        pub committed: Vec<u8>,
        pub commits: usize,
    }

    impl RecordingSink {
        pub fn new(capacity: usize) -> Self {
            Self {
                staged: vec![VISIBLE_GROUP; capacity],
                committed: vec![VISIBLE_GROUP; capacity],
                commits: 0,
            }
        }
    }

    impl HighlightSink for RecordingSink {
        fn capacity(&self) -> usize {
            self.staged.len()
        }

        fn set(&mut self, id: ObjectId, group: u8) {
            self.staged[id.index()] = group;
        }

        fn commit(&mut self) {
            self.committed.clone_from(&self.staged);
            self.commits += 1;
        }
    }

    fn ids(raw: &[u32]) -> Vec<ObjectId> {
        raw.iter().copied().map(ObjectId).collect()
    }

    #[test]
    fn isolate_empty_shows_everything_with_one_commit() {
        let mut state = HighlightIndexState::new(RecordingSink::new(16));
        state.isolate(&ids(&[3, 4]));
        state.isolate(&[]);

        let sink = state.sink();
        assert!(sink.committed.iter().all(|&g| g == VISIBLE_GROUP));
        assert_eq!(sink.commits, 2);
    }

    #[test]
    fn isolate_subset_hides_the_rest() {
        let mut state = HighlightIndexState::new(RecordingSink::new(32));
        let selected = ids(&[0, 7, 31]);
        state.isolate(&selected);

        for (i, &group) in state.sink().committed.iter().enumerate() {
            let expected = if selected.contains(&ObjectId(i as u32)) {
                VISIBLE_GROUP
            } else {
                HIDDEN_GROUP
            };
            assert_eq!(group, expected, "object {i}");
        }
        assert_eq!(state.sink().commits, 1);
    }

    #[test]
    fn isolate_is_idempotent() {
        let mut once = HighlightIndexState::new(RecordingSink::new(64));
        once.isolate(&ids(&[1, 2, 40]));

        let mut twice = HighlightIndexState::new(RecordingSink::new(64));
        twice.isolate(&ids(&[1, 2, 40]));
        twice.isolate(&ids(&[1, 2, 40]));

        assert_eq!(once.sink().committed, twice.sink().committed);
    }

    #[test]
    fn previous_isolation_does_not_accumulate() {
        let mut state = HighlightIndexState::new(RecordingSink::new(8));
        state.isolate(&ids(&[1]));
        state.isolate(&ids(&[6]));

        let committed = &state.sink().committed;
        assert_eq!(committed[1], HIDDEN_GROUP);
        assert_eq!(committed[6], VISIBLE_GROUP);
    }
}
