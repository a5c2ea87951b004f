//! Triple-buffered highlight index.
//!
//! The core stages writes in a private array; `commit` copies it into a
//! lock-free triple buffer. The renderer holds the matching
//! [`HighlightReader`] and always reads a whole committed snapshot.

use std::sync::Arc;

use super::{HighlightSink, VISIBLE_GROUP};
use crate::scene::ObjectId;

/// One committed state of the highlight index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSnapshot {
    groups: Arc<[u8]>,
    generation: u64,
}

impl HighlightSnapshot {
    fn new(groups: &[u8], generation: u64) -> Self {
        Self {
            groups: groups.into(),
            generation,
        }
    }

    /// Group of `id`. Ids beyond the index are implicitly visible.
    #[must_use]
    pub fn group(&self, id: ObjectId) -> u8 {
        self.groups.get(id.index()).copied().unwrap_or(VISIBLE_GROUP)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Raw group bytes, one per object id, ready for a GPU upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.groups
    }

    /// Number of commits that preceded this snapshot (0 = initial state).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Writer half: staged groups plus the publishing end of the buffer.
pub struct HighlightIndex {
    staged: Vec<u8>,
    generation: u64,
    input: triple_buffer::Input<HighlightSnapshot>,
}

/// Reader half handed to the renderer.
pub struct HighlightReader {
    output: triple_buffer::Output<HighlightSnapshot>,
}

impl HighlightIndex {
    /// Create an index with `capacity` entries, all visible, plus its
    /// reader.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, HighlightReader) {
        let staged = vec![VISIBLE_GROUP; capacity];
        let (input, output) =
            triple_buffer::triple_buffer(&HighlightSnapshot::new(&staged, 0));
        (
            Self {
                staged,
                generation: 0,
                input,
            },
            HighlightReader { output },
        )
    }

    /// Group currently staged for `id` (not necessarily committed).
    #[must_use]
    pub fn staged_group(&self, id: ObjectId) -> u8 {
        self.staged.get(id.index()).copied().unwrap_or(VISIBLE_GROUP)
    }

    /// Number of commits so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl HighlightSink for HighlightIndex {
    fn capacity(&self) -> usize {
        self.staged.len()
    }

    fn set(&mut self, id: ObjectId, group: u8) {
        match self.staged.get_mut(id.index()) {
            Some(slot) => *slot = group,
            None => log::warn!(
                "highlight write for {id} ignored (capacity {})",
                self.staged.len()
            ),
        }
    }

    fn fill(&mut self, group: u8) {
        self.staged.fill(group);
    }

    fn commit(&mut self) {
        self.generation += 1;
        self.input
            .write(HighlightSnapshot::new(&self.staged, self.generation));
    }
}

impl HighlightReader {
    /// Latest committed snapshot.
    pub fn read(&mut self) -> &HighlightSnapshot {
        self.output.read()
    }
}
