//! An ordered binary tree, i.e. a Binary Search Tree without any self-balancing.
//!
//! For every node, all elements in its left subtree are less than or equal to its own element
//! and all elements in its right subtree are greater than or equal to it. An element equal to
//! one already in the tree goes left of it, so searching always meets the older copy first.
//!
//! Rotations are exposed for a balancing policy built on top of this tree; the tree itself
//! never rotates.
//!
//! # Examples
//!
//! ```
//! use bintree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.root().unwrap().get(), &7);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument, trace};

use crate::base::BinaryTree;
use crate::collection::Collection;
use crate::error::Result;
use crate::node::{NodeId, Side};
use crate::traversal::{Elements, InOrder};
use crate::vertex::Vertex;

/// A binary tree kept in search order. Traversals and the other queries shared by every
/// variant live on the underlying [`BinaryTree`], reached through [`as_tree`][Self::as_tree].
#[derive(Clone)]
pub struct OrderedTree<T> {
    tree: BinaryTree<T>,
    /// The node holding the most recently inserted element. Forgotten once that element is
    /// deleted and on `clear`.
    last_inserted: Option<NodeId>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<BinaryTree<T>> for OrderedTree<T> {
    fn as_ref(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
            last_inserted: None,
        }
    }

    /// The underlying tree, for traversals and the other shape queries.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The root of the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`][crate::TreeError::EmptyTree] if the tree has no elements.
    pub fn root(&self) -> Result<Vertex<'_, T>> {
        self.tree.root()
    }

    /// The node named by `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`][crate::TreeError::StaleNode] if the node has been deleted or
    /// `id` came from another tree.
    pub fn vertex(&self, id: NodeId) -> Result<Vertex<'_, T>> {
        self.tree.vertex(id)
    }

    /// The height of the tree, or -1 when empty. Takes a walk over every node.
    pub fn height(&self) -> isize {
        self.tree.height()
    }

    /// The node holding the element most recently inserted, until that element is deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let one = tree.last_inserted().unwrap();
    /// assert_eq!(one.get(), &1);
    /// assert_eq!(one.parent().unwrap().get(), &2);
    /// ```
    pub fn last_inserted(&self) -> Option<Vertex<'_, T>> {
        self.last_inserted
            .map(|id| self.tree.vertex_unchecked(id))
    }

    /// The elements in non-decreasing order.
    pub fn iter(&self) -> Elements<InOrder<'_, T>> {
        Elements(self.tree.in_order())
    }

    /// The smallest element.
    pub fn min(&self) -> Option<&T> {
        let root = self.tree.root_id()?;
        Some(&self.tree.expect_node(self.outermost(root, Side::Left)).element)
    }

    /// The largest element.
    pub fn max(&self) -> Option<&T> {
        let root = self.tree.root_id()?;
        Some(&self.tree.expect_node(self.outermost(root, Side::Right)).element)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.last_inserted = None;
    }

    /// Follow `side` links from `id` as far as they go.
    fn outermost(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.tree.expect_node(id).child(side) {
            id = next;
        }
        id
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Inserts `element` below the first node it can hang from without breaking search order
    /// and returns the new node's handle. Elements strictly greater than a node go right of
    /// it, everything else goes left.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// let root = tree.insert(2);
    /// let right = tree.insert(3);
    ///
    /// assert_eq!(tree.root().unwrap().id(), root);
    /// assert_eq!(tree.root().unwrap().right().unwrap().id(), right);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, element: T) -> NodeId {
        let mut slot = None;
        let mut current = self.tree.root_id();
        while let Some(id) = current {
            let node = self.tree.expect_node(id);
            let side = if element > node.element {
                Side::Right
            } else {
                Side::Left
            };
            slot = Some((id, side));
            current = node.child(side);
        }

        let id = self.tree.attach(slot, element);
        self.last_inserted = Some(id);
        self.debug_check_order(id);
        trace!(len = self.tree.len(), "inserted");
        id
    }

    /// Finds a node holding an element equal to `element`, visiting at most `height + 1`
    /// nodes. With duplicates this is the one closest to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&3).unwrap().parent().unwrap().get(), &2);
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, element: &T) -> Option<Vertex<'_, T>> {
        self.search_id(element)
            .map(|id| self.tree.vertex_unchecked(id))
    }

    /// Whether the tree holds an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.search_id(element).is_some()
    }

    /// Deletes the node [`search`][Self::search] finds for `element` and returns its element.
    /// If the tree does not contain `element`, nothing happens.
    ///
    /// A node with two children keeps its place: its in-order successor (the leftmost node of
    /// its right subtree) is unlinked and the successor's element moves into it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.root().unwrap().get(), &3);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, element: &T) -> Option<T> {
        let Some(target) = self.search_id(element) else {
            trace!("nothing to delete");
            return None;
        };
        if self.last_inserted == Some(target) {
            self.last_inserted = None;
        }

        let node = self.tree.expect_node(target);
        let removed = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                debug!(children = 2, "deleting node, promoting its successor");
                // The successor has no left child, so it can be unlinked like a leaf or a
                // single-child node. Only once it is out of the tree does its element move.
                let successor = self.outermost(right, Side::Left);
                if self.last_inserted == Some(successor) {
                    self.last_inserted = Some(target);
                }
                let promoted = self.tree.detach(successor);
                std::mem::replace(self.tree.element_mut(target), promoted)
            }
            _ => {
                debug!(children = node.child_count(), "deleting node");
                self.tree.detach(target)
            }
        };

        trace!(len = self.tree.len(), "deleted");
        Some(removed)
    }

    /// Rotates right around `id`: its left child takes its place and `id` becomes that
    /// child's right child. Returns the handle of the node now in `id`'s old position, or
    /// `None` (changing nothing) if `id` has no left child or is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1].into_iter().collect();
    /// let two = tree.root().unwrap().id();
    ///
    /// let one = tree.rotate_right(two).unwrap();
    /// assert_eq!(tree.root().unwrap().id(), one);
    /// assert_eq!(tree.root().unwrap().right().unwrap().get(), &2);
    ///
    /// // `1` has no left child to lift.
    /// assert_eq!(tree.rotate_right(one), None);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn rotate_right(&mut self, id: NodeId) -> Option<NodeId> {
        self.rotate(id, Side::Left)
    }

    /// Rotates left around `id`: its right child takes its place and `id` becomes that
    /// child's left child. Returns the handle of the node now in `id`'s old position, or
    /// `None` (changing nothing) if `id` has no right child or is stale.
    #[instrument(level = "trace", skip_all)]
    pub fn rotate_left(&mut self, id: NodeId) -> Option<NodeId> {
        self.rotate(id, Side::Right)
    }

    fn rotate(&mut self, id: NodeId, pivot_side: Side) -> Option<NodeId> {
        let Some(pivot) = self.tree.rotate(id, pivot_side) else {
            trace!("no child to rotate up");
            return None;
        };
        debug!(?pivot_side, "rotated");
        self.debug_check_order(id);
        self.debug_check_order(pivot);
        Some(pivot)
    }

    fn search_id(&self, element: &T) -> Option<NodeId> {
        let mut current = self.tree.root_id();
        while let Some(id) = current {
            let node = self.tree.expect_node(id);
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// In debug builds, assert that `id` is ordered with respect to its parent and children.
    fn debug_check_order(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            let node = self.tree.expect_node(id);
            if let Some(left) = node.left {
                assert!(self.tree.expect_node(left).element <= node.element);
            }
            if let Some(right) = node.right {
                assert!(self.tree.expect_node(right).element >= node.element);
            }
            if let Some(parent) = node.parent {
                let parent = self.tree.expect_node(parent);
                match parent.side_of(id) {
                    Some(Side::Left) => assert!(node.element <= parent.element),
                    Some(Side::Right) => assert!(node.element >= parent.element),
                    None => unreachable!("a node's parent links back to it"),
                }
            }
        }
    }
}

impl<T> Collection<T> for OrderedTree<T>
where
    T: Ord,
{
    fn insert(&mut self, element: T) -> NodeId {
        OrderedTree::insert(self, element)
    }

    fn delete(&mut self, element: &T) -> Option<T> {
        OrderedTree::delete(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        OrderedTree::contains(self, element)
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn clear(&mut self) {
        OrderedTree::clear(self);
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Elements<InOrder<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for OrderedTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T> Eq for OrderedTree<T> where T: Eq {}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("tree", &self.tree)
            .field("last_inserted", &self.last_inserted)
            .finish()
    }
}

impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
