use alloc::vec::Vec;

use crate::{NavKey, Slide, SlideEntry};

/// An ordered collection of registered slides, kept sorted ascending by `offset_top`.
///
/// The registry holds non-owning handles: slide lifetime belongs to the rendering layer,
/// which registers a slide when it mounts and unregisters it on unmount. The registry has
/// no notion of an active slide; that policy lives in [`crate::Navigator`].
#[derive(Clone, Debug)]
pub struct SlideRegistry<K> {
    entries: Vec<SlideEntry<K>>,
}

impl<K> Default for SlideRegistry<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: NavKey> SlideRegistry<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `slide` keeping ascending `offset_top` order.
    ///
    /// Idempotent on membership: re-registering an existing key updates its geometry in
    /// place (and re-sorts if the offset moved). Returns the index the slide ended up at.
    pub fn register(&mut self, key: K, slide: Slide) -> usize {
        if let Some(i) = self.index_of(&key) {
            self.entries[i].offset_top = slide.offset_top;
            self.entries[i].height = slide.height;
            self.resort();
            return self.index_of(&key).unwrap_or(i);
        }

        let at = self
            .entries
            .partition_point(|e| e.offset_top <= slide.offset_top);
        self.entries.insert(
            at,
            SlideEntry {
                key,
                offset_top: slide.offset_top,
                height: slide.height,
            },
        );
        at
    }

    /// Removes the slide with `key`, returning the index it occupied.
    ///
    /// Returns `None` when the key was never registered; lookup misses are not errors.
    pub fn unregister(&mut self, key: &K) -> Option<usize> {
        let i = self.index_of(key)?;
        self.entries.remove(i);
        Some(i)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|e| &e.key == key)
    }

    pub fn get(&self, index: usize) -> Option<&SlideEntry<K>> {
        self.entries.get(index)
    }

    pub fn first(&self) -> Option<&SlideEntry<K>> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&SlideEntry<K>> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideEntry<K>> {
        self.entries.iter()
    }

    /// Total content height implied by the registered slides (bottom edge of the last one).
    pub fn content_bottom(&self) -> u64 {
        self.entries.last().map(SlideEntry::bottom).unwrap_or(0)
    }

    fn resort(&mut self) {
        // Stable: slides with equal offsets keep their registration order.
        self.entries.sort_by_key(|e| e.offset_top);
    }
}
