//! Link planning for removing a single node from a doubly-linked list.
//!
//! Removal only depends on the neighbours of the removed node, so the four
//! structural cases are decided here from `(prev, next)` alone. The list
//! applies the returned plan; nothing in this module touches node storage.

use crate::linked_list::NodeId;

/// Link updates required to drop one node out of a list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Unlink {
    /// The node was the only one; head and tail both become absent.
    Emptied,
    /// The node was the head; `successor` becomes head and loses its back-link.
    Head { successor: NodeId },
    /// The node was the tail; `predecessor` becomes tail and loses its forward-link.
    Tail { predecessor: NodeId },
    /// Interior node; its neighbours are linked to each other.
    Interior {
        predecessor: NodeId,
        successor: NodeId,
    },
}

impl Unlink {
    /// Decide the relinking for a node whose neighbours are `prev` and `next`.
    #[inline]
    pub(crate) fn plan(prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        match (prev, next) {
            (None, None) => Unlink::Emptied,
            (None, Some(successor)) => Unlink::Head { successor },
            (Some(predecessor), None) => Unlink::Tail { predecessor },
            (Some(predecessor), Some(successor)) => Unlink::Interior {
                predecessor,
                successor,
            },
        }
    }

    /// Where a cursor sitting on the removed node lands afterwards.
    ///
    /// Removing the tail leaves nothing after the cursor, so it goes terminal.
    #[inline]
    pub(crate) fn cursor_after(&self) -> Option<NodeId> {
        match *self {
            Unlink::Emptied | Unlink::Tail { .. } => None,
            Unlink::Head { successor } | Unlink::Interior { successor, .. } => Some(successor),
        }
    }

    /// New `(head, tail)` given the list's current ends.
    #[inline]
    pub(crate) fn ends(
        &self,
        head: Option<NodeId>,
        tail: Option<NodeId>,
    ) -> (Option<NodeId>, Option<NodeId>) {
        match *self {
            Unlink::Emptied => (None, None),
            Unlink::Head { successor } => (Some(successor), tail),
            Unlink::Tail { predecessor } => (head, Some(predecessor)),
            Unlink::Interior { .. } => (head, tail),
        }
    }
}
