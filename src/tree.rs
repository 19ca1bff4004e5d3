//! An unbalanced, mutable BST. Every node exclusively owns its children so the whole tree is a
//! plain hierarchy of boxes with no parent pointers.
//!
//! # Examples
//!
//! ```
//! use binarytree::{BinaryTree, Node};
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//! assert_eq!(tree.get_height(), None);
//!
//! tree.add(Node::new(2));
//! tree.add(Node::new(1));
//! tree.add(Node::new(3));
//! assert_eq!(tree.find(&1).map(Node::value), Some(&1));
//! assert_eq!(tree.get_height(), Some(1));
//!
//! // Adding a value that is already present does nothing.
//! assert!(!tree.add(Node::new(3)));
//!
//! // Removing a node hands it back.
//! let removed = tree.remove(&2);
//! assert_eq!(removed.map(Node::into_value), Some(2));
//! assert!(tree.find(&2).is_none());
//!
//! tree.get_dfs();
//! assert_eq!(tree.dfs_nodes(), &[3, 1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace, warn};

use crate::node::{pre_order, Link};
use crate::{Error, Key, Node, Result, Value};

/// A Binary Search Tree that does not rebalance itself. Values are kept unique: adding a value
/// that is already present is ignored.
///
/// All operations walk the tree with explicit loops, so a degenerate tree (e.g. one built from
/// sorted input) can be as deep as it likes.
#[derive(Clone)]
pub struct BinaryTree<K> {
    root: Link<K>,
    /// Set when the tree was built from an initial value outside the key domain. Such a tree is
    /// empty but remembers that it was given a root.
    placeholder: bool,
    len: usize,
    /// Values visited by the most recent `get_dfs`.
    dfs_nodes: Vec<K>,
}

impl<K> Default for BinaryTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows the stored values in pre-order rather than the nested nodes.
impl<K: fmt::Debug> fmt::Debug for BinaryTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&K> = pre_order(self.root()).into_iter().map(Node::value).collect();
        f.debug_struct("BinaryTree")
            .field("len", &self.len)
            .field("placeholder", &self.placeholder)
            .field("values", &values)
            .field("dfs_nodes", &self.dfs_nodes)
            .finish()
    }
}

impl<K> BinaryTree<K> {
    /// Generate a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            root: Link::default(),
            placeholder: false,
            len: 0,
            dfs_nodes: Vec::new(),
        }
    }

    /// Generate a `BinaryTree` whose root holds `value`.
    ///
    /// ```
    /// use binarytree::BinaryTree;
    ///
    /// let tree = BinaryTree::with_root(5);
    /// assert_eq!(tree.get_height(), Some(0));
    /// ```
    pub fn with_root(value: K) -> Self {
        let mut tree = Self::new();
        tree.root = Link(Some(Box::new(Node::new(value))));
        tree.len = 1;
        tree
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.0.as_deref()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no nodes. A tree built around a placeholder root is empty.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Adds the value held by `node` to the tree. Returns `false`, leaving the tree untouched, if
    /// the value is already present.
    ///
    /// Only the node's value is inserted; it is attached as a new leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::with_root(4);
    /// for value in [3, 1, 2, 6, 7, 5] {
    ///     tree.add(Node::new(value));
    /// }
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &4);
    /// assert_eq!(root.left().map(Node::value), Some(&3));
    /// assert_eq!(root.right().map(Node::value), Some(&6));
    /// ```
    pub fn add(&mut self, node: Node<K>) -> bool
    where
        K: Ord,
    {
        let value = node.into_value();

        let slot = slot_of(&mut self.root.0, &value);
        if slot.is_some() {
            trace!("value already present, ignoring");
            return false;
        }
        *slot = Some(Box::new(Node::new(value)));

        if self.len == 0 {
            debug!(placeholder = self.placeholder, "created root");
            self.placeholder = false;
        }
        self.len += 1;
        true
    }

    /// Potentially finds the node holding `key`. If no node has the corresponding value, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.add(Node::new(10));
    ///
    /// assert_eq!(tree.find(&10), Some(&Node::new(10)));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right(),
            }
        }

        trace!("find missed");
        None
    }

    /// Removes the node holding `key` from the tree and returns it. If the tree does not
    /// contain `key`, nothing happens and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest value in its
    /// right subtree). The returned node is always a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.add(Node::new(1));
    ///
    /// assert_eq!(tree.remove(&1), Some(Node::new(1)));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<Node<K>>
    where
        K: Ord,
    {
        let slot = slot_of(&mut self.root.0, key);
        let mut target = match slot.take() {
            Some(target) => target,
            None => {
                trace!("remove missed");
                return None;
            }
        };

        if target.left.0.is_some() {
            if let Some(successor) = take_min(&mut target.right.0) {
                let removed = mem::replace(&mut target.value, successor);
                *slot = Some(target);
                debug!("removed node with two children");
                self.len -= 1;
                return Some(Node::new(removed));
            }
        }

        *slot = target.left.take().or_else(|| target.right.take());
        debug!(leaf = slot.is_none(), "removed node");
        self.len -= 1;
        Some(Node::new(target.value))
    }

    /// The number of edges on the longest path from the root to a leaf. An empty tree has no
    /// height.
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.get_height(), None);
    ///
    /// tree.add(Node::new(1));
    /// assert_eq!(tree.get_height(), Some(0));
    ///
    /// tree.add(Node::new(2));
    /// assert_eq!(tree.get_height(), Some(1));
    /// ```
    pub fn get_height(&self) -> Option<usize> {
        let mut height = 0;
        let mut stack = vec![(self.root()?, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        Some(height)
    }

    /// Walks the tree depth first (the node, then its left subtree, then its right subtree) and
    /// records the visited values, replacing those of any previous walk. Read them back with
    /// [`dfs_nodes`][Self::dfs_nodes].
    ///
    /// # Examples
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::new();
    /// for value in [6, 5, 11, 12, 2, 7] {
    ///     tree.add(Node::new(value));
    /// }
    ///
    /// tree.get_dfs();
    /// assert_eq!(tree.dfs_nodes(), &[6, 5, 2, 11, 7, 12]);
    /// ```
    pub fn get_dfs(&mut self)
    where
        K: Clone,
    {
        self.dfs_nodes = pre_order(self.root.0.as_deref())
            .into_iter()
            .map(|node| node.value.clone())
            .collect();
    }

    /// The values recorded by the most recent [`get_dfs`][Self::get_dfs].
    pub fn dfs_nodes(&self) -> &[K] {
        &self.dfs_nodes
    }
}

/// Operations on values of unknown shape. Anything other than a [`Value::Node`] wrapping a key
/// is rejected by [`try_add`][Self::try_add] and simply not found by the lookups.
impl<K: Key> BinaryTree<K> {
    /// Generate a `BinaryTree` whose root holds `value`. If `value` is not a key the tree gets a
    /// placeholder root: it is empty, has no height, and the first added node replaces it.
    ///
    /// ```
    /// use binarytree::{BinaryTree, Node};
    ///
    /// let mut tree = BinaryTree::<i64>::from_value("non-integer".into());
    /// assert_eq!(tree.get_height(), None);
    ///
    /// tree.add(Node::new(3));
    /// assert_eq!(tree.get_height(), Some(0));
    /// ```
    pub fn from_value(value: Value) -> Self {
        match K::from_value(&value) {
            Some(key) => Self::with_root(key),
            None => {
                debug!(kind = %value.kind(), "root value is not a key, using a placeholder");
                let mut tree = Self::new();
                tree.placeholder = true;
                tree
            }
        }
    }

    /// Whether the tree was built with an initial value that is not a key and nothing has been
    /// added since.
    pub fn has_placeholder_root(&self) -> bool {
        self.placeholder
    }

    /// Adds a node given as a [`Value`]. Fails with [`Error::InvalidArgument`] if `value` is not
    /// a node wrapping a key, in which case the tree is left untouched.
    ///
    /// ```
    /// use binarytree::{BinaryTree, Error, Value};
    ///
    /// let mut tree = BinaryTree::<i64>::with_root(4);
    ///
    /// assert_eq!(tree.try_add(Value::node(3)), Ok(true));
    /// assert_eq!(
    ///     tree.try_add(10.44465),
    ///     Err(Error::InvalidArgument { kind: "float".to_string() })
    /// );
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn try_add(&mut self, value: impl Into<Value>) -> Result<bool> {
        let value = value.into();
        match value.as_node_key() {
            Some(key) => Ok(self.add(Node::new(key))),
            None => {
                let kind = value.kind();
                warn!(%kind, "rejecting value that is not a node holding a key");
                Err(Error::InvalidArgument {
                    kind: kind.into_owned(),
                })
            }
        }
    }

    /// Like [`find`][Self::find] but for a [`Value`]. Values that are not a node wrapping a key
    /// are never found.
    pub fn find_value(&self, query: &Value) -> Option<&Node<K>> {
        self.find(&query.as_node_key()?)
    }

    /// Like [`remove`][Self::remove] but for a [`Value`]. Values that are not a node wrapping a
    /// key are never removed.
    pub fn remove_value(&mut self, query: &Value) -> Option<Node<K>> {
        self.remove(&query.as_node_key()?)
    }
}

/// Descends from `slot` towards `key` and returns the slot that holds it, or the empty slot
/// where it would be attached.
fn slot_of<'a, K: Ord>(
    mut slot: &'a mut Option<Box<Node<K>>>,
    key: &K,
) -> &'a mut Option<Box<Node<K>>> {
    loop {
        let go_left = match slot.as_deref() {
            Some(node) if *key < node.value => true,
            Some(node) if *key > node.value => false,
            _ => return slot,
        };
        let node = slot.as_mut().expect("slot checked non-empty above");
        slot = if go_left { &mut node.left.0 } else { &mut node.right.0 };
    }
}

/// Unlinks the smallest node of the subtree in `slot`, splicing its right child into its place,
/// and returns its value. An empty subtree has no smallest node.
fn take_min<K>(mut slot: &mut Option<Box<Node<K>>>) -> Option<K> {
    while slot.as_ref().is_some_and(|node| node.left.0.is_some()) {
        slot = &mut slot.as_mut().expect("slot checked non-empty above").left.0;
    }

    let min = slot.take()?;
    let Node { value, mut right, .. } = *min;
    *slot = right.take();
    Some(value)
}
