//! DoublyLinkedList: ordered sequence over an arena of generationally keyed nodes.
//!
//! Nodes live in a per-list `SlotMap`; links are `Option<NodeId>`. The
//! structural invariants are:
//! - `head.is_none() == tail.is_none() == (len() == 0)`;
//! - following `next` from `head` exactly `len() - 1` times reaches `tail`;
//! - for adjacent nodes `a.next == Some(b)` iff `b.prev == Some(a)`.
//!
//! Every removal (`pop`, `slice`, cursor removal) goes through
//! `DoublyLinkedList::unlink`, which applies an `Unlink` plan.

use crate::disposal::Disposal;
use crate::list_iterator::ListIterator;
use crate::unlink::Unlink;
use core::cmp::Ordering;
use core::fmt;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Identity of a node, valid only for the list that allocated it.
    pub struct NodeId;
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    payload: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ListError {
    #[error("list is empty")]
    Empty,
}

/// Requested order for [`DoublyLinkedList::sort`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

pub struct DoublyLinkedList<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert at the head.
    pub fn push(&mut self, payload: T) {
        let old_head = self.head;
        let id = self.nodes.insert(Node {
            payload,
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(h) => self.nodes[h].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Remove and return the head payload.
    pub fn pop(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::Empty)?;
        Ok(self.unlink(head).0)
    }

    /// Insert at the tail.
    pub fn append(&mut self, payload: T) {
        let old_tail = self.tail;
        let id = self.nodes.insert(Node {
            payload,
            prev: old_tail,
            next: None,
        });
        match old_tail {
            Some(t) => self.nodes[t].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Remove and return the tail payload.
    pub fn slice(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::Empty)?;
        Ok(self.unlink(tail).0)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].payload)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|t| &self.nodes[t].payload)
    }

    /// Exchange sort over payloads. Nodes keep their positions; only payloads
    /// move. Adjacent pairs swap only when `cmp` puts them strictly out of
    /// `order`, so equal payloads never trade places.
    pub fn sort<F>(&mut self, order: SortOrder, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len() < 2 {
            return;
        }
        loop {
            let mut swapped = false;
            let mut cur = self.head;
            while let Some(a) = cur {
                let Some(b) = self.nodes[a].next else { break };
                let ord = cmp(&self.nodes[a].payload, &self.nodes[b].payload);
                let out_of_order = match order {
                    SortOrder::Ascending => ord == Ordering::Greater,
                    SortOrder::Descending => ord == Ordering::Less,
                };
                if out_of_order {
                    if let Some([x, y]) = self.nodes.get_disjoint_mut([a, b]) {
                        core::mem::swap(&mut x.payload, &mut y.payload);
                        swapped = true;
                    }
                }
                cur = Some(b);
            }
            if !swapped {
                break;
            }
        }
    }

    /// Tear the list down, disposing of every remaining payload head-first.
    pub fn free(mut self, mut disposal: Disposal<'_, T>) {
        while let Ok(payload) = self.pop() {
            disposal.dispose(payload);
        }
    }

    /// Cursor positioned at the head.
    pub fn cursor(&mut self) -> ListIterator<'_, T> {
        ListIterator::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.next)
    }

    pub(crate) fn payload(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.payload)
    }

    pub(crate) fn payload_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|n| &mut n.payload)
    }

    /// Detach `id` from the list and return its payload with the plan that was applied.
    ///
    /// Links are read and rewired before the node leaves the arena.
    pub(crate) fn unlink(&mut self, id: NodeId) -> (T, Unlink) {
        let (prev, next) = {
            let node = &self.nodes[id];
            (node.prev, node.next)
        };
        let plan = Unlink::plan(prev, next);
        match plan {
            Unlink::Emptied => {
                debug_assert!(self.head == Some(id) && self.tail == Some(id));
            }
            Unlink::Head { successor } => {
                debug_assert_eq!(self.head, Some(id));
                self.nodes[successor].prev = None;
            }
            Unlink::Tail { predecessor } => {
                debug_assert_eq!(self.tail, Some(id));
                self.nodes[predecessor].next = None;
            }
            Unlink::Interior {
                predecessor,
                successor,
            } => {
                self.nodes[predecessor].next = Some(successor);
                self.nodes[successor].prev = Some(predecessor);
            }
        }
        (self.head, self.tail) = plan.ends(self.head, self.tail);
        match self.nodes.remove(id) {
            Some(node) => (node.payload, plan),
            None => unreachable!("node {id:?} vanished while unlinking"),
        }
    }

    /// Walk head to tail and assert every structural invariant.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        assert_eq!(self.head.is_none(), self.is_empty());
        let mut forward = Vec::new();
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            assert_eq!(node.prev, prev, "back-link mismatch at {id:?}");
            forward.push(id);
            prev = Some(id);
            cur = node.next;
        }
        assert_eq!(forward.len(), self.len());
        assert_eq!(forward.last().copied(), self.tail);
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for payload in iter {
            self.append(payload);
        }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over payloads.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.payload)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
