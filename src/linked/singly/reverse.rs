use super::{Link, SinglyLinkedList};

/// Reverses the list in place by inverting every successor link, so the old tail becomes the
/// head. Runs in `O(len)` time and `O(1)` extra space; this is the form to reach for.
///
/// A free function rather than a method: reversal needs no state beyond the chain itself, and
/// keeping it out of the type means the list's inherent API stays purely structural.
///
/// # Examples
/// ```
/// # use linear_collections::linked::SinglyLinkedList;
/// # use linear_collections::linked::singly::reverse;
/// let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
/// reverse(&mut list);
/// assert_eq!(list, [3, 2, 1].into_iter().collect());
/// ```
pub fn reverse<T>(list: &mut SinglyLinkedList<T>) {
    let mut previous: Link<T> = None;
    let mut current = list.head.take();

    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }

    list.head = previous;
}

/// The recursive formulation of [`reverse`]: link inversion carried through the call stack
/// instead of a loop. Produces exactly the same order, but costs `O(len)` stack depth, so
/// [`reverse`] is the production path and this one exists as the equivalent alternative.
pub fn reverse_recursive<T>(list: &mut SinglyLinkedList<T>) {
    fn invert<T>(current: Link<T>, previous: Link<T>) -> Link<T> {
        match current {
            None => previous,
            Some(mut node) => {
                let next = node.next.take();
                node.next = previous;
                invert(next, Some(node))
            },
        }
    }

    list.head = invert(list.head.take(), None);
}
