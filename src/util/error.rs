use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced when an operation is given an index outside its valid range. The offending
/// index and the length of the collection at the time are both recorded.
///
/// Operations that take an index check it before touching the collection, so receiving this error
/// means nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The error produced when a removal or peek is attempted on a container with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot take an element from an empty container!")
    }
}

impl Error for EmptyContainer {}

/// A union of the two container errors, for callers mixing fallible operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyContainer(EmptyContainer),
}
