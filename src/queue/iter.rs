use std::iter::FusedIterator;

use super::list::{NodeId, TrackQueue};
use super::track::Track;

/// One row of a queue walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based position from the head.
    pub position: usize,
    pub track: &'a Track,
    pub is_cursor: bool,
}

/// Borrowing walk over a [`TrackQueue`].
///
/// Forward iteration follows `next` links from the head; `next_back` follows
/// `prev` links from the tail. Both ends meet without overlapping.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    queue: &'a TrackQueue,
    front: Option<NodeId>,
    back: Option<NodeId>,
    front_position: usize,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(
        queue: &'a TrackQueue,
        head: Option<NodeId>,
        tail: Option<NodeId>,
        len: usize,
    ) -> Self {
        Self {
            queue,
            front: head,
            back: tail,
            front_position: 1,
            remaining: len,
        }
    }

    fn entry(&self, id: NodeId, position: usize) -> Entry<'a> {
        Entry {
            position,
            track: &self.queue.node(id).track,
            is_cursor: self.queue.is_cursor(id),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.front = self.queue.node(id).next;

        let entry = self.entry(id, self.front_position);
        self.front_position += 1;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.back = self.queue.node(id).prev;

        let entry = self.entry(id, self.front_position + self.remaining - 1);
        self.remaining -= 1;
        Some(entry)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
