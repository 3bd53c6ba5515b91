// DoublyLinkedList and ListIterator integration suite.
//
// Invariants exercised through the public API only:
// - End symmetry: push/pop and append/slice are LIFO at their own end.
// - Traversal agreement: forward and reverse iteration agree with len().
// - Cursor removal: each of the four splice shapes leaves a list whose
//   front/back/iteration match the expected sequence.
// - Disposal: Release sees each remaining payload once; Transfer accepts
//   only an already-emptied list.
use chain_table::{Disposal, DoublyLinkedList, ListError, ListIterator, SortOrder};
use std::cell::Cell;
use std::rc::Rc;

fn forward<T: Clone>(l: &DoublyLinkedList<T>) -> Vec<T> {
    l.iter().cloned().collect()
}

fn assert_consistent<T: Clone + PartialEq + std::fmt::Debug>(l: &DoublyLinkedList<T>) {
    let fwd = forward(l);
    let mut rev: Vec<T> = l.iter().rev().cloned().collect();
    rev.reverse();
    assert_eq!(fwd, rev, "forward and reverse traversal disagree");
    assert_eq!(fwd.len(), l.len());
    assert_eq!(l.front(), fwd.first());
    assert_eq!(l.back(), fwd.last());
    assert_eq!(l.is_empty(), fwd.is_empty());
}

// Test: pop and slice on an empty list are recoverable errors.
#[test]
fn empty_pop_and_slice_report_empty() {
    let mut l: DoublyLinkedList<u32> = DoublyLinkedList::default();
    assert_eq!(l.pop(), Err(ListError::Empty));
    assert_eq!(l.slice(), Err(ListError::Empty));
    assert_eq!(ListError::Empty.to_string(), "list is empty");
    // Still usable afterwards.
    l.push(1);
    assert_consistent(&l);
}

// Test: interleaved operations at both ends behave like a deque.
#[test]
fn interleaved_ends_behave_like_deque() {
    let mut l = DoublyLinkedList::new();
    let mut model = std::collections::VecDeque::new();
    for i in 0..20 {
        match i % 4 {
            0 => {
                l.push(i);
                model.push_front(i);
            }
            1 | 2 => {
                l.append(i);
                model.push_back(i);
            }
            _ => {
                assert_eq!(l.pop().ok(), model.pop_front());
            }
        }
        assert_consistent(&l);
        assert_eq!(forward(&l), model.iter().copied().collect::<Vec<_>>());
    }
    while let Ok(v) = l.slice() {
        assert_eq!(Some(v), model.pop_back());
    }
    assert!(model.is_empty());
}

// Test: cursor removal across all four splice shapes in one list.
// Verifies: head, interior, tail, then sole-node removal.
#[test]
fn cursor_removal_covers_every_shape() {
    let mut l: DoublyLinkedList<char> = "abcde".chars().collect();

    let mut it = ListIterator::new(&mut l);
    // Head.
    assert!(it.remove(drop));
    assert_eq!(*it.get(), 'b');
    // Interior: skip to 'c'.
    assert!(it.advance());
    assert!(it.remove(drop));
    assert_eq!(*it.get(), 'd');
    // Tail: skip to 'e'.
    assert!(it.advance());
    let (tail, more) = it.take();
    assert_eq!(tail, 'e');
    assert!(more);
    assert!(!it.is_valid());
    assert_eq!(forward(it.list()), vec!['b', 'd']);

    it.rewind();
    assert_eq!(*it.get(), 'b');
    assert!(it.remove(drop));
    assert_eq!(*it.get(), 'd');
    // Sole node.
    assert!(!it.remove(drop));
    assert!(!it.is_valid());
    drop(it);

    assert_consistent(&l);
    assert!(l.is_empty());
}

// Test: the disposal closure runs exactly once per removed payload.
#[test]
fn cursor_remove_invokes_disposal_once() {
    let drops = Rc::new(Cell::new(0));
    struct Tracked(Rc<Cell<usize>>);
    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let mut l = DoublyLinkedList::new();
    for _ in 0..3 {
        l.append(Tracked(drops.clone()));
    }
    let calls = Cell::new(0);
    {
        let mut it = l.cursor();
        it.advance();
        it.remove(|t| {
            calls.set(calls.get() + 1);
            drop(t);
        });
    }
    assert_eq!(calls.get(), 1);
    assert_eq!(drops.get(), 1);
    assert_eq!(l.len(), 2);

    let mut released = 0;
    l.free(Disposal::Release(&mut |t: Tracked| {
        released += 1;
        drop(t);
    }));
    assert_eq!(released, 2);
    assert_eq!(drops.get(), 3);
}

// Test: sorting by a derived key in both directions.
#[test]
fn sort_with_custom_comparator() {
    let mut l: DoublyLinkedList<&str> = ["pear", "fig", "banana", "kiwi"].into_iter().collect();
    l.sort(SortOrder::Ascending, |a, b| a.len().cmp(&b.len()));
    let lens: Vec<usize> = l.iter().map(|s| s.len()).collect();
    assert!(lens.windows(2).all(|w| w[0] <= w[1]));
    // Equal lengths keep their original relative order.
    assert_eq!(forward(&l), vec!["fig", "pear", "kiwi", "banana"]);

    l.sort(SortOrder::Descending, |a, b| a.cmp(b));
    assert_eq!(forward(&l), vec!["pear", "kiwi", "fig", "banana"]);
    assert_consistent(&l);
}

// Test: transfer-mode teardown rejects a list that still owns payloads.
#[test]
#[should_panic(expected = "ownership-transfer")]
fn transfer_free_of_populated_list_panics() {
    let l: DoublyLinkedList<i32> = (0..2).collect();
    l.free(Disposal::Transfer);
}

#[test]
fn extend_and_into_iter() {
    let mut l: DoublyLinkedList<i32> = DoublyLinkedList::new();
    l.extend([1, 2]);
    l.extend(vec![3]);
    let mut sum = 0;
    for v in &l {
        sum += v;
    }
    assert_eq!(sum, 6);
    assert_eq!(l.iter().len(), 3);
}
