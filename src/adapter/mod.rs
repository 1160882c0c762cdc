//! Adapters that impose an access discipline over a backing sequence: [`Stack`] for LIFO and
//! [`TwoStackQueue`] for FIFO, along with the [`reverse_queue`] operation.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
