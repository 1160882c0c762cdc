pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Each node is owned by its predecessor's link (or the list itself for the first node), so the
// chain needs no manual memory management: moving a Box out of a link moves the value off the
// heap, and dropping a link frees the rest of the chain.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
