//! The node layout shared by every tree variant, along with the queries that don't care how
//! the nodes were arranged.
//!
//! A [`BinaryTree`] owns its nodes in a generational arena. Children are reached through
//! their parent's `left`/`right` slot and every node keeps a non-owning `parent` index for
//! walking back up. Variants ([`OrderedTree`][crate::OrderedTree],
//! [`CompleteTree`][crate::CompleteTree]) decide where nodes go and hand out read-only access
//! to this layout; nothing outside the crate can relink nodes directly.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::Arena;

use crate::error::{Result, TreeError};
use crate::node::{Node, NodeId, Side};
use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::vertex::Vertex;

/// Source of the tags telling trees' handles apart.
static NEXT_TAG: AtomicU64 = AtomicU64::new(0);

/// An unordered binary tree.
///
/// The number of elements is the number of live arena entries. Every live entry is reachable
/// from the root, so this is also the number of nodes any full traversal visits.
///
/// Only the tree variants create these; get at one through
/// [`OrderedTree::as_tree`][crate::OrderedTree::as_tree] or
/// [`CompleteTree::as_tree`][crate::CompleteTree::as_tree].
#[derive(Clone)]
pub struct BinaryTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    /// Stamped on every handle this tree issues. Clones keep it.
    tag: u64,
}

impl<T> BinaryTree<T> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root of the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no elements.
    pub fn root(&self) -> Result<Vertex<'_, T>> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        Ok(self.vertex_unchecked(root))
    }

    /// The node named by `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::StaleNode`] if the node has been deleted or `id` came from another tree.
    pub fn vertex(&self, id: NodeId) -> Result<Vertex<'_, T>> {
        let node = self.node(id).ok_or(TreeError::StaleNode)?;
        Ok(Vertex::new(self, id, node))
    }

    /// The height of the tree: the number of edges on the longest root-to-leaf path. A single
    /// node has height 0 and an empty tree has height -1.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, |root| root.height() as isize)
    }

    /// Whether any node holds an element equal to `element`. This looks at every node; ordered
    /// trees have a faster [`search`][crate::OrderedTree::search].
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(element).is_some()
    }

    /// The first node in pre-order holding an element equal to `element`.
    pub fn find(&self, element: &T) -> Option<Vertex<'_, T>>
    where
        T: PartialEq,
    {
        self.find_by(|candidate| candidate == element)
    }

    /// The first node in pre-order whose element satisfies `predicate`.
    pub fn find_by<P>(&self, mut predicate: P) -> Option<Vertex<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.pre_order().find(|vertex| predicate(vertex.get()))
    }

    /// Iterate over the nodes, each before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    /// Iterate over the nodes, each between its left and right subtrees.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }

    /// Iterate over the nodes, each after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self)
    }

    /// Iterate over the nodes level by level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self)
    }

    /// Call `visit` on every node in pre-order.
    pub fn dfs_pre_order<F>(&self, visit: F)
    where
        F: FnMut(Vertex<'_, T>),
    {
        self.pre_order().for_each(visit);
    }

    /// Call `visit` on every node in in-order.
    pub fn dfs_in_order<F>(&self, visit: F)
    where
        F: FnMut(Vertex<'_, T>),
    {
        self.in_order().for_each(visit);
    }

    /// Call `visit` on every node in post-order.
    pub fn dfs_post_order<F>(&self, visit: F)
    where
        F: FnMut(Vertex<'_, T>),
    {
        self.post_order().for_each(visit);
    }

    /// Call `visit` on every node in level order.
    pub fn bfs<F>(&self, visit: F)
    where
        F: FnMut(Vertex<'_, T>),
    {
        self.level_order().for_each(visit);
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a handle from outside the tree, which may be stale or foreign.
    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        if id.tree != self.tag {
            return None;
        }
        self.nodes.get(id.index)
    }

    /// Look up a node reached through a link. Links only ever name live nodes, so a miss
    /// means the tree is corrupt.
    pub(crate) fn expect_node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id.index).expect("linked node is live")
    }

    fn expect_node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(id.index).expect("linked node is live")
    }

    pub(crate) fn vertex_unchecked(&self, id: NodeId) -> Vertex<'_, T> {
        Vertex::new(self, id, self.expect_node(id))
    }

    pub(crate) fn element_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.expect_node_mut(id).element
    }

    /// Exchange the elements of two nodes, leaving every link alone.
    pub(crate) fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        match self.nodes.get2_mut(a.index, b.index) {
            (Some(a), Some(b)) => std::mem::swap(&mut a.element, &mut b.element),
            _ => unreachable!("swapping elements of a stale node"),
        }
    }

    /// Create a node for `element`. With no `slot` the node becomes the root of an empty tree;
    /// otherwise it fills the given, currently empty, child slot.
    pub(crate) fn attach(&mut self, slot: Option<(NodeId, Side)>, element: T) -> NodeId {
        let mut node = Node::new(element);
        node.parent = slot.map(|(parent, _)| parent);
        let id = NodeId {
            tree: self.tag,
            index: self.nodes.insert(node),
        };

        match slot {
            Some((parent, side)) => {
                let child = self.expect_node_mut(parent).child_mut(side);
                debug_assert!(child.is_none(), "attaching over an occupied slot");
                *child = Some(id);
            }
            None => {
                debug_assert!(self.root.is_none(), "attaching a second root");
                self.root = Some(id);
            }
        }

        self.debug_check_links(id);
        id
    }

    /// Remove a node with at most one child, splicing that child (if any) into the node's
    /// place. Returns the node's element.
    pub(crate) fn detach(&mut self, id: NodeId) -> T {
        let node = self.expect_node(id);
        debug_assert!(node.child_count() <= 1, "detaching a node with two children");
        let child = node.left.or(node.right);

        self.replace_in_parent(id, child);
        let node = self.nodes.remove(id.index).expect("linked node is live");

        if let Some(child) = child {
            self.debug_check_links(child);
        }
        node.element
    }

    /// Rotate around `id`, lifting its child on `pivot_side` into its place, and return that
    /// child. Returns `None` (and changes nothing) when there is no such child or `id` is
    /// stale or foreign.
    ///
    /// For `pivot_side == Side::Left` this is a right rotation:
    ///
    /// ```text
    ///     Option<parent>            Option<parent>
    ///       /                         /
    ///      v                         p
    ///     / \                       / \
    ///    p   c    rotate ->        a   v
    ///   / \                           / \
    ///  a   b                         b   c
    /// ```
    pub(crate) fn rotate(&mut self, id: NodeId, pivot_side: Side) -> Option<NodeId> {
        let pivot = self.node(id)?.child(pivot_side)?;
        let inner = self.expect_node(pivot).child(pivot_side.opposite());

        // `b` moves across from the pivot to `v`.
        *self.expect_node_mut(id).child_mut(pivot_side) = inner;
        if let Some(inner) = inner {
            self.expect_node_mut(inner).parent = Some(id);
        }

        // The pivot takes `v`'s place under the old parent (or as root)...
        self.replace_in_parent(id, Some(pivot));

        // ...and `v` hangs below the pivot.
        *self.expect_node_mut(pivot).child_mut(pivot_side.opposite()) = Some(id);
        self.expect_node_mut(id).parent = Some(pivot);

        self.debug_check_links(id);
        self.debug_check_links(pivot);
        Some(pivot)
    }

    /// Point whatever referred to `old` (its parent's slot, or the root) at `new`, and give
    /// `new` `old`'s parent. `old`'s own links are left as they were.
    fn replace_in_parent(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.expect_node(old).parent;
        match parent {
            Some(parent) => {
                let parent_node = self.expect_node_mut(parent);
                let side = parent_node
                    .side_of(old)
                    .expect("a node's parent links back to it");
                *parent_node.child_mut(side) = new;
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.expect_node_mut(new).parent = parent;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// In debug builds, assert that `id` and its neighbours agree about their links.
    fn debug_check_links(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            let node = self.expect_node(id);
            match node.parent {
                Some(parent) => assert!(self.expect_node(parent).side_of(id).is_some()),
                None => assert_eq!(self.root, Some(id)),
            }
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.expect_node(child).parent, Some(id));
            }
        }
    }
}

/// Two trees are equal when they have the same shape and equal elements in corresponding
/// positions.
impl<T> PartialEq for BinaryTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (a, b) = (self.expect_node(a), other.expect_node(b));
                    if a.element != b.element {
                        return false;
                    }
                    stack.push((a.left, b.left));
                    stack.push((a.right, b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T> Eq for BinaryTree<T> where T: Eq {}

impl<T> fmt::Debug for BinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("len", &self.len())
            .field(
                "level_order",
                &self.level_order().map(|v| v.get()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Draws the tree sideways, one node per line. Left children hang from `├─›` (or `└─›` when
/// there is no right sibling) and right children from `└─»`.
///
/// ```text
/// 5
/// ├─›3
/// │  └─»4
/// └─»8
/// ```
impl<T> fmt::Display for BinaryTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return Ok(());
        };
        writeln!(f, "{}", self.expect_node(root).element)?;

        // One prefix buffer for the whole drawing. Each pending line remembers how much of it
        // belongs to its parent, and anything longer was left behind by a finished subtree.
        let mut prefix = String::new();
        let mut stack = Vec::new();
        push_children(&mut stack, self.expect_node(root), 0);
        while let Some((id, parent_prefix, connector, last)) = stack.pop() {
            let node = self.expect_node(id);
            prefix.truncate(parent_prefix);
            f.write_str(&prefix)?;
            f.write_str(connector)?;
            writeln!(f, "{}", node.element)?;
            prefix.push_str(if last { "   " } else { "│  " });
            push_children(&mut stack, node, prefix.len());
        }
        Ok(())
    }
}

/// A line still to draw: the node, the length of its parent's prefix, its connector and
/// whether it is the last child.
type PendingLine = (NodeId, usize, &'static str, bool);

fn push_children<T>(stack: &mut Vec<PendingLine>, node: &Node<T>, prefix: usize) {
    // Right is pushed first so the left child is drawn first.
    if let Some(right) = node.right {
        stack.push((right, prefix, "└─»", true));
    }
    if let Some(left) = node.left {
        let (connector, last) = if node.right.is_some() {
            ("├─›", false)
        } else {
            ("└─›", true)
        };
        stack.push((left, prefix, connector, last));
    }
}
