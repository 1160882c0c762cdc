use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a debug list, allowing collection contents to
/// appear as a single field inside a `debug_struct` block.
pub(crate) struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
