//! Read-only views of single nodes.

use std::fmt;

use crate::base::BinaryTree;
use crate::error::{Result, TreeError};
use crate::node::{Link, Node, NodeId};

/// A borrowed view of one node of a tree. It can walk to its neighbours but never changes
/// the tree; mutation goes through the owning tree using the vertex's [`id`][Vertex::id].
pub struct Vertex<'a, T> {
    tree: &'a BinaryTree<T>,
    id: NodeId,
    node: &'a Node<T>,
}

/// Manual implementations of `Clone` and `Copy` so that a vertex can be copied no matter what
/// `T` is; it's only a pair of references.
impl<T> Clone for Vertex<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Vertex<'_, T> {}

impl<'a, T> Vertex<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>, id: NodeId, node: &'a Node<T>) -> Self {
        Self { tree, id, node }
    }

    /// The handle of this node, usable with the owning tree's mutating operations.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The element stored in this node.
    pub fn get(&self) -> &'a T {
        &self.node.element
    }

    /// Whether this node has a left child.
    pub fn has_left(&self) -> bool {
        self.node.left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right(&self) -> bool {
        self.node.right.is_some()
    }

    /// Whether this node has a parent, i.e. isn't the root.
    pub fn has_parent(&self) -> bool {
        self.node.parent.is_some()
    }

    /// The left child.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoSuchLink`] if there is no left child.
    pub fn left(&self) -> Result<Vertex<'a, T>> {
        self.follow(Link::Left)
    }

    /// The right child.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoSuchLink`] if there is no right child.
    pub fn right(&self) -> Result<Vertex<'a, T>> {
        self.follow(Link::Right)
    }

    /// The parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoSuchLink`] if this is the root.
    pub fn parent(&self) -> Result<Vertex<'a, T>> {
        self.follow(Link::Parent)
    }

    /// The height of the subtree rooted here. A leaf has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.id, 0)];
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = self.tree.expect_node(id);
            stack.extend(node.left.map(|left| (left, level + 1)));
            stack.extend(node.right.map(|right| (right, level + 1)));
        }
        height
    }

    /// How many edges separate this node from the root. The root has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.tree.expect_node(parent).parent;
        }
        depth
    }

    fn follow(&self, link: Link) -> Result<Vertex<'a, T>> {
        let id = self.node.link(link).ok_or(TreeError::NoSuchLink(link))?;
        Ok(self.tree.vertex_unchecked(id))
    }
}

impl<T> fmt::Debug for Vertex<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("element", &self.node.element)
            .finish()
    }
}

impl<T> fmt::Display for Vertex<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node.element, f)
    }
}
