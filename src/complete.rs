//! A complete binary tree: every level is full except possibly the last, which fills from the
//! left.
//!
//! Numbering the nodes level by level from 0, a tree of `len` elements occupies exactly the
//! slots `0..len`. Insertion fills slot `len`; deletion moves the element in slot `len - 1`
//! into the hole and drops that last slot, so the level-order sequence behaves like a `Vec`
//! with `push` and `swap_remove`.
//!
//! # Examples
//!
//! ```
//! use bintree::CompleteTree;
//!
//! let mut tree: CompleteTree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 2);
//!
//! // The last element in level order takes the deleted element's place.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.root().unwrap().get(), &7);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [7, 2, 3, 4, 5, 6]);
//! ```

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::base::BinaryTree;
use crate::collection::Collection;
use crate::error::Result;
use crate::node::{NodeId, Side};
use crate::traversal::{Elements, LevelOrder};
use crate::util::{floor_log2, level_order_path};
use crate::vertex::Vertex;

/// A binary tree that is always as close to full as possible. Traversals and the other
/// queries shared by every variant live on the underlying [`BinaryTree`], reached through
/// [`as_tree`][Self::as_tree].
#[derive(Clone)]
pub struct CompleteTree<T> {
    tree: BinaryTree<T>,
}

impl<T> Default for CompleteTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<BinaryTree<T>> for CompleteTree<T> {
    fn as_ref(&self) -> &BinaryTree<T> {
        &self.tree
    }
}

impl<T> CompleteTree<T> {
    /// Generate a new, empty `CompleteTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
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

    /// Adds `element` in the first free level-order slot: to the right of the last level, or
    /// on the left of a new level when the last one is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::CompleteTree;
    ///
    /// let mut tree = CompleteTree::new();
    /// tree.insert('a');
    /// tree.insert('b');
    /// let c = tree.insert('c');
    ///
    /// assert_eq!(tree.root().unwrap().right().unwrap().id(), c);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, element: T) -> NodeId {
        let len = self.tree.len();
        let slot = if len == 0 {
            None
        } else {
            // Slot `i` hangs from slot `(i - 1) / 2`, on the left when `i` is odd.
            let side = if len % 2 == 1 { Side::Left } else { Side::Right };
            Some((self.node_at((len - 1) / 2), side))
        };

        let id = self.tree.attach(slot, element);
        trace!(len = self.tree.len(), "inserted");
        id
    }

    /// The height of the tree, `⌊log2 len⌋`, or -1 when empty. Unlike
    /// [`BinaryTree::height`] this doesn't need to walk the tree.
    pub fn height(&self) -> isize {
        match self.tree.len() {
            0 => -1,
            len => floor_log2(len) as isize,
        }
    }

    /// The elements in level order.
    pub fn iter(&self) -> Elements<LevelOrder<'_, T>> {
        Elements(self.tree.level_order())
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The node in level-order slot `index`, which must be below `len`.
    fn node_at(&self, index: usize) -> NodeId {
        debug_assert!(index < self.tree.len());
        let mut id = self.tree.root_id().expect("a non-empty tree has a root");
        for side in level_order_path(index) {
            id = self
                .tree
                .expect_node(id)
                .child(side)
                .expect("every slot below len is occupied");
        }
        id
    }
}

impl<T> CompleteTree<T>
where
    T: PartialEq,
{
    /// Deletes the first element equal to `element` in level order and returns it. The
    /// element in the last slot moves into the vacated node and the last node is dropped. If
    /// the tree does not contain `element`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::CompleteTree;
    ///
    /// let mut tree: CompleteTree<_> = (1..=3).collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.root().unwrap().left().unwrap().get(), &3);
    /// assert!(!tree.root().unwrap().has_right());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, element: &T) -> Option<T> {
        let Some(target) = self
            .tree
            .level_order()
            .find(|vertex| vertex.get() == element)
            .map(|vertex| vertex.id())
        else {
            trace!("nothing to delete");
            return None;
        };

        let last = self.node_at(self.tree.len() - 1);
        if target != last {
            debug!("moving the last element into the deleted slot");
            self.tree.swap_elements(target, last);
        }
        debug_assert_eq!(self.tree.expect_node(last).child_count(), 0);
        let removed = self.tree.detach(last);

        trace!(len = self.tree.len(), "deleted");
        Some(removed)
    }

    /// Whether any element equals `element`. This looks at every node.
    pub fn contains(&self, element: &T) -> bool {
        self.tree.contains(element)
    }
}

impl<T> Collection<T> for CompleteTree<T>
where
    T: PartialEq,
{
    fn insert(&mut self, element: T) -> NodeId {
        CompleteTree::insert(self, element)
    }

    fn delete(&mut self, element: &T) -> Option<T> {
        CompleteTree::delete(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        CompleteTree::contains(self, element)
    }

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn clear(&mut self) {
        CompleteTree::clear(self);
    }
}

impl<T> Extend<T> for CompleteTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for CompleteTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a CompleteTree<T> {
    type Item = &'a T;
    type IntoIter = Elements<LevelOrder<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for CompleteTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T> Eq for CompleteTree<T> where T: Eq {}

impl<T> fmt::Debug for CompleteTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompleteTree")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<T> fmt::Display for CompleteTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

/// Whether the nodes of `tree` fill a prefix of the level-order slots.
#[cfg(test)]
pub(crate) fn is_complete<T>(tree: &CompleteTree<T>) -> bool {
    let mut gap_seen = false;
    for vertex in tree.tree.level_order() {
        for present in [vertex.has_left(), vertex.has_right()] {
            if present && gap_seen {
                return false;
            }
            gap_seen |= !present;
        }
    }
    true
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// The level-order sequence of a complete tree behaves like a `Vec` with `push` and
    /// `swap_remove`, so that's the reference model.
    fn do_ops(ops: &[Op<i8>], tree: &mut CompleteTree<i8>, model: &mut Vec<i8>) {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(*x);
                    model.push(*x);
                }
                Op::Delete(x) => {
                    let expected = model
                        .iter()
                        .position(|y| y == x)
                        .map(|at| model.swap_remove(at));
                    assert_eq!(tree.delete(x), expected);
                }
                // Complete trees can't rotate.
                Op::Rotate(..) => {}
            }
        }
    }

    quickcheck::quickcheck! {
        fn matches_vec_model(ops: Vec<Op<i8>>) -> bool {
            let mut tree = CompleteTree::new();
            let mut model = Vec::new();

            do_ops(&ops, &mut tree, &mut model);
            tree.iter().copied().eq(model.iter().copied())
                && tree.len() == model.len()
                && is_complete(&tree)
                && tree.height() == tree.tree.height()
        }
    }
}
