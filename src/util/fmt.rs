use std::fmt::{self, Debug, Formatter};

/// Formats the items produced by a cloneable iterator as a list, so that collections can nest
/// their contents inside a [`debug_struct`](Formatter::debug_struct).
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
