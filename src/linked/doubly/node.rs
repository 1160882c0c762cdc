use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box rather than raw alloc calls, because moving a value out
// of a reconstituted Box is the cleanest way to move it off the heap.
//
// A NodePtr is a copyable handle, not an owner: the list owns the chain through its head and
// every handle held elsewhere (tail, prev links, iterator cursors) is a back-reference. Exactly
// one call to take_node consumes each allocation.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns null.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::into_raw in from_node, and handles are consumed at
        // most once per allocation.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointed-to node is live for as long as the owning list holds it; callers
        // only hold handles while that is the case.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value; the mutable receiver keeps handle use exclusive.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value; link rewiring happens under the list's mutable borrow.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value; link rewiring happens under the list's mutable borrow.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
