//! The operations every tree variant offers, whatever rule it uses to place elements.

use crate::error::{Result, TreeError};
use crate::node::NodeId;

/// A container of `T`s. Each tree variant implements this with its own placement rule.
pub trait Collection<T> {
    /// Insert `element`, returning the handle of the node created for it.
    fn insert(&mut self, element: T) -> NodeId;

    /// Remove one occurrence of `element` and return it. If the collection doesn't contain
    /// `element`, nothing happens and `None` is returned.
    fn delete(&mut self, element: &T) -> Option<T>;

    /// Whether the collection contains `element`.
    fn contains(&self, element: &T) -> bool;

    /// The number of elements in the collection.
    fn len(&self) -> usize;

    /// Whether the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every element.
    fn clear(&mut self);

    /// Insert an element that may be absent, e.g. one read from a nullable source.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidElement`] if `element` is `None`; the collection is unchanged.
    fn try_insert(&mut self, element: Option<T>) -> Result<NodeId> {
        let element = element.ok_or(TreeError::InvalidElement)?;
        Ok(self.insert(element))
    }
}
