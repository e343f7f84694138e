//! Circular doubly linked recency ring stored in a slot arena.
//!
//! Entries live in a `Vec` of slots and link to each other through
//! [`SlotId`] handles instead of pointers. The ring has no sentinel nodes:
//! the *anchor* is the most recently used entry and `anchor.prev` is the
//! least recently used one. A lone entry links to itself in both directions.
//!
//! ```text
//!            anchor (MRU)
//!               │
//!               ▼
//!   ┌──────▶ [ a ] ──next──▶ [ b ] ──next──▶ [ c ] ──┐
//!   │          ▲                               (LRU) │
//!   └──────────┴───────────── next ──────────────────┘
//! ```
//!
//! Slots freed by [`Ring::remove`] are recycled by later inserts, so a cache
//! that stays at capacity never grows the arena.

extern crate alloc;

use crate::error::InvariantError;
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

/// Stable handle to an entry in the ring's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

impl SlotId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

struct Node<T> {
    value: T,
    prev: SlotId,
    next: SlotId,
}

/// Recency-ordered ring of values with O(1) relinking.
pub(crate) struct Ring<T> {
    slots: Vec<Option<Node<T>>>,
    free_list: Vec<usize>,
    anchor: Option<SlotId>,
    len: usize,
}

impl<T> Ring<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Ring {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            anchor: None,
            len: 0,
        }
    }

    /// Number of entries currently linked into the ring.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of slots the arena can hold without reallocating.
    #[cfg(test)]
    pub(crate) fn reserved(&self) -> usize {
        self.slots.capacity()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }

    /// Most recently used entry.
    #[inline]
    pub(crate) fn anchor(&self) -> Option<SlotId> {
        self.anchor
    }

    /// Least recently used entry, i.e. the one immediately before the anchor.
    #[inline]
    pub(crate) fn tail(&self) -> Option<SlotId> {
        let anchor = self.anchor?;
        self.node(anchor).map(|node| node.prev)
    }

    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Allocates a slot for `value` and links it in as the new anchor.
    pub(crate) fn push_front(&mut self, value: T) -> SlotId {
        let id = self.allocate(value);
        self.insert_front(id);
        id
    }

    /// Makes `id` the anchor while keeping the relative order of every other
    /// entry. Returns `None` if `id` does not name a live slot.
    pub(crate) fn move_to_front(&mut self, id: SlotId) -> Option<()> {
        if self.anchor == Some(id) {
            return Some(());
        }
        self.detach(id)?;
        self.insert_front(id);
        Some(())
    }

    /// Unlinks `id` and releases its slot.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        Some(node.value)
    }

    /// Removes the least recently used entry.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail()?;
        self.remove(tail)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.anchor = None;
        self.len = 0;
    }

    /// Walks the ring from the anchor (MRU) to the tail (LRU).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            cursor: self.anchor,
            remaining: self.len,
        }
    }

    /// Verifies that the ring is a single cycle over exactly the live slots,
    /// walking it in both directions.
    pub(crate) fn validate(&self) -> Result<(), InvariantError> {
        let Some(live) = self.slots.len().checked_sub(self.free_list.len()) else {
            return Err(InvariantError::new(format!(
                "free list holds {} slots but the arena only has {}",
                self.free_list.len(),
                self.slots.len()
            )));
        };
        if live != self.len {
            return Err(InvariantError::new(format!(
                "ring links {} entries but {} slots are occupied",
                self.len, live
            )));
        }

        let Some(anchor) = self.anchor else {
            if self.len != 0 {
                return Err(InvariantError::new(format!(
                    "ring has no anchor but a length of {}",
                    self.len
                )));
            }
            return Ok(());
        };
        if self.len == 0 {
            return Err(InvariantError::new("ring has an anchor but a length of 0"));
        }

        self.validate_walk(anchor, |node| node.next, |node| node.prev, "next")?;
        self.validate_walk(anchor, |node| node.prev, |node| node.next, "prev")
    }

    fn validate_walk(
        &self,
        anchor: SlotId,
        step: impl Fn(&Node<T>) -> SlotId,
        back: impl Fn(&Node<T>) -> SlotId,
        direction: &str,
    ) -> Result<(), InvariantError> {
        let mut seen = vec![false; self.slots.len()];
        let mut current = anchor;
        for _ in 0..self.len {
            let node = self.node(current).ok_or_else(|| {
                InvariantError::new(format!(
                    "{direction} walk reached empty slot {}",
                    current.index()
                ))
            })?;
            if core::mem::replace(&mut seen[current.0], true) {
                return Err(InvariantError::new(format!(
                    "{direction} walk visited slot {} twice",
                    current.index()
                )));
            }
            let following = step(node);
            if self.node(following).map(&back) != Some(current) {
                return Err(InvariantError::new(format!(
                    "slot {} is not linked back from its {direction} neighbour",
                    current.index()
                )));
            }
            current = following;
        }
        if current != anchor {
            return Err(InvariantError::new(format!(
                "{direction} walk of {} steps did not return to the anchor",
                self.len
            )));
        }
        Ok(())
    }

    fn allocate(&mut self, value: T) -> SlotId {
        // Self-loop until linked.
        let make = |id: SlotId| Node {
            value,
            prev: id,
            next: id,
        };
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(make(SlotId(idx)));
            SlotId(idx)
        } else {
            let idx = self.slots.len();
            self.slots.push(Some(make(SlotId(idx))));
            SlotId(idx)
        }
    }

    /// Links an unlinked, allocated slot in front of the current anchor.
    fn insert_front(&mut self, id: SlotId) {
        match self.anchor {
            None => {
                if let Some(node) = self.node_mut(id) {
                    node.prev = id;
                    node.next = id;
                }
            }
            Some(old_anchor) => {
                let old_tail = self.node(old_anchor).map_or(old_anchor, |node| node.prev);
                if let Some(node) = self.node_mut(id) {
                    node.next = old_anchor;
                    node.prev = old_tail;
                }
                if let Some(node) = self.node_mut(old_tail) {
                    node.next = id;
                }
                if let Some(node) = self.node_mut(old_anchor) {
                    node.prev = id;
                }
            }
        }
        self.anchor = Some(id);
        self.len += 1;
    }

    /// Unlinks `id` without freeing its slot. Its own links are stale until
    /// it is inserted again.
    fn detach(&mut self, id: SlotId) -> Option<()> {
        if self.anchor.is_none() {
            return None;
        }
        let (prev, next) = {
            let node = self.node(id)?;
            (node.prev, node.next)
        };

        if next == id {
            self.anchor = None;
        } else {
            self.node_mut(prev)?.next = next;
            self.node_mut(next)?.prev = prev;
            if self.anchor == Some(id) {
                self.anchor = Some(next);
            }
        }
        self.len -= 1;
        Some(())
    }

    #[inline]
    fn node(&self, id: SlotId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    #[inline]
    fn node_mut(&mut self, id: SlotId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }
}

/// Iterator over ring entries from most to least recently used.
pub(crate) struct Iter<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let node = self.ring.node(id)?;
        self.cursor = Some(node.next);
        self.remaining -= 1;
        Some((id, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}
