//! Errors returned by tree accessors.

use thiserror::Error;

use crate::node::Link;

/// Everything that can go wrong when asking a tree for something it doesn't have.
///
/// Deleting a missing element or rotating around a node without the needed child are not
/// errors; those are silent no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The root was requested from a tree with no elements.
    #[error("the tree is empty")]
    EmptyTree,

    /// A child or the parent was requested from a node that doesn't have one.
    #[error("the node has no {0} link")]
    NoSuchLink(Link),

    /// An absent element was offered for insertion.
    #[error("cannot insert an absent element")]
    InvalidElement,

    /// The handle doesn't name a live node of this tree, e.g. the node was deleted.
    #[error("the node handle is stale or belongs to another tree")]
    StaleNode,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
