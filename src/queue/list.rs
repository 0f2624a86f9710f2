//! Arena-backed doubly-linked queue with a now-playing cursor.
//!
//! Nodes live in `slots`; every link (`head`, `tail`, `cursor`, `prev`,
//! `next`) is an `Option<NodeId>` handle into that table, so the chain has a
//! single owner and no reference cycles. A slot is vacated the moment its node
//! is unlinked and may be handed to a later insertion.

use super::iter::Iter;
use super::track::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct NodeId(usize);

#[derive(Debug)]
pub(super) struct Node {
    pub(super) track: Track,
    pub(super) prev: Option<NodeId>,
    pub(super) next: Option<NodeId>,
}

/// Ordered track queue supporting splicing, removal and bidirectional
/// navigation around a cursor.
///
/// The cursor is `None` only while the queue is empty.
#[derive(Debug, Default)]
pub struct TrackQueue {
    slots: Vec<Option<Node>>,
    vacant: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    cursor: Option<NodeId>,
    len: usize,
}

impl TrackQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The track under the cursor.
    pub fn current(&self) -> Option<&Track> {
        self.cursor.map(|id| &self.node(id).track)
    }

    /// 1-based position of the cursor.
    pub fn cursor_position(&self) -> Option<usize> {
        self.iter().find(|e| e.is_cursor).map(|e| e.position)
    }

    /// Forward walk over `(position, track, is_cursor)` entries.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self, self.head, self.tail, self.len)
    }

    pub(super) fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0]
            .as_ref()
            .expect("queue link points at a vacant slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0]
            .as_mut()
            .expect("queue link points at a vacant slot")
    }

    pub(super) fn is_cursor(&self, id: NodeId) -> bool {
        self.cursor == Some(id)
    }

    fn alloc(&mut self, track: Track) -> NodeId {
        let node = Node {
            track,
            prev: None,
            next: None,
        };
        match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn link_back(&mut self, track: Track) -> NodeId {
        let id = self.alloc(track);
        match self.tail {
            Some(tail) => {
                self.node_mut(tail).next = Some(id);
                self.node_mut(id).prev = Some(tail);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Splice a node right after the cursor, or append when there is no cursor.
    fn link_after_cursor(&mut self, track: Track) -> NodeId {
        let Some(at) = self.cursor else {
            return self.link_back(track);
        };

        let id = self.alloc(track);
        let next = self.node(at).next;
        self.node_mut(at).next = Some(id);
        {
            let node = self.node_mut(id);
            node.prev = Some(at);
            node.next = next;
        }
        match next {
            Some(next) => self.node_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        id
    }

    /// Add `track` at the end. The first track of an empty queue becomes current.
    pub fn append(&mut self, track: Track) {
        tracing::debug!("append '{}' (len {})", track.title(), self.len + 1);
        let id = self.link_back(track);
        if self.cursor.is_none() {
            self.cursor = Some(id);
        }
    }

    /// Add `track` at the end and make it current.
    pub fn append_and_select(&mut self, track: Track) {
        tracing::debug!("append+select '{}' (len {})", track.title(), self.len + 1);
        let id = self.link_back(track);
        self.cursor = Some(id);
    }

    /// Insert `track` right after the current one and make it current.
    pub fn insert_after_cursor(&mut self, track: Track) {
        tracing::debug!("insert after cursor '{}' (len {})", track.title(), self.len + 1);
        let id = self.link_after_cursor(track);
        self.cursor = Some(id);
    }

    /// Insert `track` right after the current one, leaving the cursor in place.
    pub fn insert_after_cursor_quietly(&mut self, track: Track) {
        tracing::debug!("queue after cursor '{}' (len {})", track.title(), self.len + 1);
        let id = self.link_after_cursor(track);
        if self.cursor.is_none() {
            self.cursor = Some(id);
        }
    }

    /// Remove the first track whose title equals `title`, ignoring case.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        let needle = title.to_lowercase();
        let mut at = self.head;
        while let Some(id) = at {
            let node = self.node(id);
            if node.track.title_matches(&needle) {
                self.unlink(id);
                return true;
            }
            at = node.next;
        }
        tracing::debug!("remove by title: no track named '{}'", title);
        false
    }

    /// Remove the current track. Returns `false` on an empty queue.
    pub fn remove_current(&mut self) -> bool {
        match self.cursor {
            Some(id) => {
                self.unlink(id);
                true
            }
            None => false,
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }
        // Step into the gap; fall back to the predecessor at the tail.
        if self.cursor == Some(id) {
            self.cursor = next.or(prev);
        }

        if let Some(mut node) = self.slots[id.0].take() {
            node.prev = None;
            node.next = None;
            tracing::debug!("unlinked '{}' (len {})", node.track.title(), self.len - 1);
        }
        self.vacant.push(id.0);
        self.len -= 1;
    }

    /// Move to the next track; stays put on the last one.
    pub fn advance(&mut self) -> Option<&Track> {
        let at = self.cursor?;
        if let Some(next) = self.node(at).next {
            self.cursor = Some(next);
        }
        tracing::trace!("advance -> slot {:?}", self.cursor);
        self.current()
    }

    /// Move to the previous track; stays put on the first one.
    pub fn retreat(&mut self) -> Option<&Track> {
        let at = self.cursor?;
        if let Some(prev) = self.node(at).prev {
            self.cursor = Some(prev);
        }
        tracing::trace!("retreat -> slot {:?}", self.cursor);
        self.current()
    }

    /// Move the cursor to the 1-based `position`.
    pub fn jump_to(&mut self, position: usize) -> Option<&Track> {
        if position == 0 || position > self.len {
            return None;
        }

        let mut at = self.head?;
        for _ in 1..position {
            at = self.node(at).next?;
        }
        self.cursor = Some(at);
        tracing::trace!("jump to {}", position);
        self.current()
    }

    /// Drop every track, walking the chain from the head.
    pub fn clear(&mut self) {
        let dropped = self.len;
        let mut at = self.head.take();
        while let Some(id) = at {
            at = self.slots[id.0].take().and_then(|mut node| {
                node.prev = None;
                node.next.take()
            });
        }

        self.slots.clear();
        self.vacant.clear();
        self.tail = None;
        self.cursor = None;
        self.len = 0;
        tracing::debug!("cleared {} tracks", dropped);
    }
}

impl<'a> IntoIterator for &'a TrackQueue {
    type Item = super::iter::Entry<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl TrackQueue {
    /// Walk raw links in both directions and panic on any broken invariant.
    pub(super) fn assert_well_linked(&self) {
        assert_eq!(self.head.is_none(), self.len == 0, "head vs len");
        assert_eq!(self.tail.is_none(), self.len == 0, "tail vs len");
        assert_eq!(self.cursor.is_none(), self.len == 0, "cursor vs len");

        let mut forward = Vec::new();
        let mut prev = None;
        let mut at = self.head;
        while let Some(id) = at {
            let node = self.node(id);
            assert_eq!(node.prev, prev, "prev link of slot {}", id.0);
            forward.push(id);
            prev = Some(id);
            at = node.next;
            assert!(forward.len() <= self.len, "forward walk overran len");
        }
        assert_eq!(forward.len(), self.len, "forward count");
        assert_eq!(forward.last().copied(), self.tail, "forward walk ends at tail");

        let mut backward = Vec::new();
        let mut at = self.tail;
        while let Some(id) = at {
            backward.push(id);
            at = self.node(id).prev;
            assert!(backward.len() <= self.len, "backward walk overran len");
        }
        backward.reverse();
        assert_eq!(backward, forward, "backward walk mirrors forward walk");

        if let Some(cursor) = self.cursor {
            assert!(forward.contains(&cursor), "cursor is reachable");
        }

        let live = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(live, self.len, "live slots");
    }
}
