//! This crate exposes a small family of binary trees built on one shared node layout.
//!
//! ## Binary Trees
//!
//! A binary tree is made of `Node`s. Each `Node` stores an element and has at most two
//! children, a left one and a right one, plus a link back up to its parent. The tree owns
//! every node and knows which one is the root.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The variants differ only in where they put new elements:
//!
//! 1. An [`OrderedTree`] keeps the Binary Search Tree invariant. For every `Node`, the elements
//!    in its left subtree are less than or equal to its own and those in its right subtree are
//!    greater than or equal to it. Searching takes `O(height)` and an in-order walk visits the
//!    elements sorted. The tree never rebalances itself but exposes the left and right
//!    rotations a balancing scheme would use.
//! 2. A [`CompleteTree`] fills the tree level by level, left to right, so its height is always
//!    `⌊log2 n⌋`. Deleting moves the last element into the hole to keep it that way.
//!
//! Both share the read-only queries of [`BinaryTree`] (root, height, traversals, structural
//! equality, ...) and implement [`Collection`].
//!
//! Nodes live in an arena and are named by generational [`NodeId`]s, so the parent links
//! can't dangle: once a node is deleted, every handle to it reports
//! [`TreeError::StaleNode`].
//!
//! # Examples
//!
//! ```
//! use bintree::{Collection, CompleteTree, OrderedTree, TreeError};
//!
//! fn fill<C: Collection<i32>>(mut collection: C) -> C {
//!     for x in [4, 2, 6] {
//!         collection.insert(x);
//!     }
//!     collection
//! }
//!
//! let ordered = fill(OrderedTree::new());
//! let complete = fill(CompleteTree::new());
//!
//! assert_eq!(ordered.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
//! assert_eq!(complete.iter().copied().collect::<Vec<_>>(), [4, 2, 6]);
//!
//! let root = ordered.root()?;
//! assert_eq!(root.left()?.get(), &2);
//! assert!(root.left()?.left().is_err());
//! # Ok::<(), TreeError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod base;
mod collection;
mod complete;
mod error;
mod node;
mod ordered;
mod traversal;
mod util;
mod vertex;


pub use base::BinaryTree;
pub use collection::Collection;
pub use complete::CompleteTree;
pub use error::{Result, TreeError};
pub use node::{Link, NodeId};
pub use ordered::OrderedTree;
pub use traversal::{Elements, InOrder, LevelOrder, PostOrder, PreOrder};
pub use vertex::Vertex;
