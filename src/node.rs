//! The linked unit every tree variant is built from.

use std::fmt;

use generational_arena::Index;

/// A handle to a node living inside a tree.
///
/// Handles are generational: once the node is deleted the handle goes stale and will never
/// name a node inserted later, even one reusing the same arena slot. They also remember which
/// tree issued them, so another tree rejects them. A clone of a tree shares its tag, since
/// every node of the clone mirrors the node with the same handle in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) tree: u64,
    pub(crate) index: Index,
}

/// The three links a node can be asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// The left child.
    Left,
    /// The right child.
    Right,
    /// The (non-owning) parent.
    Parent,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Parent => "parent",
        };
        f.write_str(name)
    }
}

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl From<Side> for Link {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Link::Left,
            Side::Right => Link::Right,
        }
    }
}

/// A node stored in a tree's arena. The arena owns every node; `left` and `right` are owning
/// in the sense that a node is reachable only through its parent's slot, while `parent` is a
/// plain back-reference used for upward navigation.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn link(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Left => self.left,
            Link::Right => self.right,
            Link::Parent => self.parent,
        }
    }

    /// Which slot holds `child`, if any.
    pub(crate) fn side_of(&self, child: NodeId) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub(crate) fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
