//! Lazy traversals. Each iterator keeps its own explicit stack or queue so deep, degenerate
//! trees don't overflow the call stack.

use std::collections::VecDeque;

use crate::base::BinaryTree;
use crate::node::NodeId;
use crate::vertex::Vertex;

/// Depth-first, node before its children.
pub struct PreOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root_id().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = Vertex<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.expect_node(id);
        // Right first so the left subtree pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(Vertex::new(self.tree, id, node))
    }
}

/// Depth-first, left subtree, then the node, then the right subtree. On an ordered tree this
/// yields the elements in non-decreasing order.
pub struct InOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeId>,
    next_subtree: Option<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            next_subtree: tree.root_id(),
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = Vertex<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.next_subtree {
            self.stack.push(id);
            self.next_subtree = self.tree.expect_node(id).left;
        }
        let id = self.stack.pop()?;
        let node = self.tree.expect_node(id);
        self.next_subtree = node.right;
        Some(Vertex::new(self.tree, id, node))
    }
}

/// Depth-first, both subtrees before the node.
pub struct PostOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root_id().map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = Vertex<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, children_visited)) = self.stack.pop() {
            let node = self.tree.expect_node(id);
            if children_visited {
                return Some(Vertex::new(self.tree, id, node));
            }
            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }
}

/// Breadth-first, level by level and left to right within a level.
pub struct LevelOrder<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a BinaryTree<T>) -> Self {
        Self {
            tree,
            queue: tree.root_id().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = Vertex<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.expect_node(id);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(Vertex::new(self.tree, id, node))
    }
}

/// Adapts a traversal to yield elements instead of vertices.
pub struct Elements<I>(pub(crate) I);

impl<'a, T, I> Iterator for Elements<I>
where
    T: 'a,
    I: Iterator<Item = Vertex<'a, T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|vertex| vertex.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
