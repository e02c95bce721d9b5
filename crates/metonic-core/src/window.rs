//! Cyclic window primitive shared by canonicalisation, segment extraction and
//! membership matching.

use std::iter::FusedIterator;

use crate::symbol::Symbol;

/// Iterator over `len` consecutive symbols of a ring starting at `start`.
///
/// The ring repeats as often as needed, so `len` may exceed the ring length.
/// An empty ring yields nothing.
#[derive(Debug, Clone)]
pub struct CyclicWindow<'a> {
    ring: &'a [Symbol],
    index: usize,
    remaining: usize,
}

impl<'a> CyclicWindow<'a> {
    /// Creates a window over `ring`; `start` is reduced modulo the ring length.
    pub fn new(ring: &'a [Symbol], start: usize, len: usize) -> Self {
        let (index, remaining) = if ring.is_empty() {
            (0, 0)
        } else {
            (start % ring.len(), len)
        };
        Self {
            ring,
            index,
            remaining,
        }
    }
}

impl Iterator for CyclicWindow<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        if self.remaining == 0 {
            return None;
        }
        let symbol = self.ring[self.index];
        self.index += 1;
        if self.index == self.ring.len() {
            self.index = 0;
        }
        self.remaining -= 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CyclicWindow<'_> {}

impl FusedIterator for CyclicWindow<'_> {}

/// Returns true when the window of `ring` at `start` spells out `needle`.
pub fn window_matches(ring: &[Symbol], start: usize, needle: &[Symbol]) -> bool {
    CyclicWindow::new(ring, start, needle.len()).eq(needle.iter().copied())
}
