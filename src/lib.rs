//! This crate exposes a simple, unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! number of edges on the longest path from the root `Node` to a leaf `Node`).
//! [`BinaryTree`] does nothing to keep its height down, so adding already
//! sorted values produces a tree that is as tall as it is large.
//!
//! ## Typed and untyped input
//!
//! [`BinaryTree`] is generic over any [`Ord`] value type. Values whose shape is
//! only known at runtime can be passed as a [`Value`]; those are checked against
//! the tree's [`Key`] type before they are used and rejected with
//! [`Error::InvalidArgument`] otherwise.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod tree;
pub mod value;

pub use error::{Error, Result};
pub use node::Node;
pub use tree::BinaryTree;
pub use value::{Key, Value};
