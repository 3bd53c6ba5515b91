//! ListIterator: a mutable cursor over a `DoublyLinkedList`.
//!
//! The cursor holds the list's exclusive borrow, so the list cannot be
//! changed except through the cursor while it is alive.

use crate::linked_list::{DoublyLinkedList, NodeId};
use crate::unlink::Unlink;

pub struct ListIterator<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    node: Option<NodeId>,
}

impl<'a, T> ListIterator<'a, T> {
    /// Cursor at the head, or terminal if the list is empty.
    pub fn new(list: &'a mut DoublyLinkedList<T>) -> Self {
        let node = list.head_id();
        Self { list, node }
    }

    /// Re-attach to `list` at a position previously read with `position`.
    pub(crate) fn resume(list: &'a mut DoublyLinkedList<T>, node: Option<NodeId>) -> Self {
        Self { list, node }
    }

    pub(crate) fn position(&self) -> Option<NodeId> {
        self.node
    }

    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// Step to the next node. Returns false when that runs off the tail,
    /// leaving the cursor terminal; a terminal cursor stays terminal.
    pub fn advance(&mut self) -> bool {
        let Some(id) = self.node else {
            return false;
        };
        self.node = self.list.next_of(id);
        self.node.is_some()
    }

    /// Payload under the cursor.
    ///
    /// # Panics
    /// If the cursor is terminal.
    pub fn get(&self) -> &T {
        match self.node.and_then(|id| self.list.payload(id)) {
            Some(p) => p,
            None => panic!("ListIterator::get on a terminal cursor"),
        }
    }

    /// # Panics
    /// If the cursor is terminal.
    pub fn get_mut(&mut self) -> &mut T {
        match self.node {
            Some(id) => match self.list.payload_mut(id) {
                Some(p) => p,
                None => panic!("ListIterator cursor {id:?} is not in its list"),
            },
            None => panic!("ListIterator::get_mut on a terminal cursor"),
        }
    }

    /// Consume the cursor, keeping the borrow of the payload it points at.
    pub fn into_mut(self) -> Option<&'a mut T> {
        let id = self.node?;
        let list = self.list;
        list.payload_mut(id)
    }

    /// Unlink the node under the cursor and hand back its payload.
    ///
    /// The cursor moves to the removed node's successor, or goes terminal if
    /// there was none. The flag is false only when the list is now empty.
    ///
    /// # Panics
    /// If the cursor is terminal.
    pub fn take(&mut self) -> (T, bool) {
        let Some(id) = self.node else {
            panic!("ListIterator::remove on a terminal cursor");
        };
        let (payload, plan) = self.list.unlink(id);
        self.node = plan.cursor_after();
        (payload, plan != Unlink::Emptied)
    }

    /// Like `take`, passing the payload to `dispose` once the list is consistent again.
    pub fn remove<F>(&mut self, dispose: F) -> bool
    where
        F: FnOnce(T),
    {
        let (payload, remaining) = self.take();
        dispose(payload);
        remaining
    }

    /// Move back to the head without touching any payload.
    pub fn rewind(&mut self) {
        self.node = self.list.head_id();
    }

    pub fn list(&self) -> &DoublyLinkedList<T> {
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(n: i32) -> DoublyLinkedList<i32> {
        (0..n).collect()
    }

    fn contents(l: &DoublyLinkedList<i32>) -> Vec<i32> {
        l.iter().copied().collect()
    }

    /// Invariant: a cursor over an empty list starts terminal and cannot advance.
    #[test]
    fn empty_list_cursor_is_terminal() {
        let mut l: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut it = l.cursor();
        assert!(!it.is_valid());
        assert!(!it.advance());
        assert!(it.into_mut().is_none());
    }

    /// Invariant: advancing visits every node in order, then reports the end exactly once.
    #[test]
    fn advance_walks_head_to_tail() {
        let mut l = list_of(3);
        let mut it = l.cursor();
        let mut seen = vec![*it.get()];
        while it.advance() {
            seen.push(*it.get());
        }
        assert_eq!(seen, vec![0, 1, 2]);
        assert!(!it.is_valid());
        it.rewind();
        assert_eq!(*it.get(), 0);
    }

    #[test]
    #[should_panic(expected = "terminal cursor")]
    fn get_on_terminal_panics() {
        let mut l = list_of(1);
        let mut it = l.cursor();
        assert!(!it.advance());
        let _ = it.get();
    }

    /// Invariant: removing the only element empties the list and leaves the cursor terminal.
    #[test]
    fn remove_only_element() {
        let mut l = list_of(1);
        let mut disposed = Vec::new();
        {
            let mut it = l.cursor();
            assert!(!it.remove(|v| disposed.push(v)));
            assert!(!it.is_valid());
        }
        l.check_links();
        assert!(l.is_empty());
        assert_eq!(l.front(), None);
        assert_eq!(l.back(), None);
        assert_eq!(disposed, vec![0]);
    }

    /// Invariant: removing the head promotes the successor and the cursor lands on it.
    #[test]
    fn remove_head() {
        let mut l = list_of(3);
        {
            let mut it = l.cursor();
            assert!(it.remove(drop));
            assert_eq!(*it.get(), 1);
        }
        l.check_links();
        assert_eq!(contents(&l), vec![1, 2]);
    }

    /// Invariant: removing the tail demotes the predecessor and the cursor goes terminal.
    #[test]
    fn remove_tail() {
        let mut l = list_of(3);
        {
            let mut it = l.cursor();
            it.advance();
            it.advance();
            assert_eq!(*it.get(), 2);
            let (v, remaining) = it.take();
            assert_eq!(v, 2);
            assert!(remaining);
            assert!(!it.is_valid());
        }
        l.check_links();
        assert_eq!(contents(&l), vec![0, 1]);
        assert_eq!(l.back(), Some(&1));
    }

    /// Invariant: interior removal splices the neighbours together and moves to the successor.
    #[test]
    fn remove_interior() {
        let mut l = list_of(4);
        {
            let mut it = l.cursor();
            it.advance();
            assert!(it.remove(drop));
            assert_eq!(*it.get(), 2);
            assert!(it.remove(drop));
            assert_eq!(*it.get(), 3);
        }
        l.check_links();
        assert_eq!(contents(&l), vec![0, 3]);
    }

    /// Invariant: draining from the head through the cursor removes everything in order.
    #[test]
    fn drain_through_cursor() {
        let mut l = list_of(5);
        let mut drained = Vec::new();
        {
            let mut it = l.cursor();
            while it.is_valid() {
                let (v, _) = it.take();
                drained.push(v);
                it.list().check_links();
            }
        }
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(l.is_empty());
    }

    /// Invariant: `get_mut` writes through to the list.
    #[test]
    fn get_mut_updates_payload() {
        let mut l = list_of(2);
        {
            let mut it = l.cursor();
            it.advance();
            *it.get_mut() += 10;
        }
        assert_eq!(contents(&l), vec![0, 11]);
    }
}
