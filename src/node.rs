use std::fmt;

/// A `Node` stores a single value that is used for searching/sorting and owns up to two
/// children. A `Node` with no children is a "leaf node".
///
/// `Node`s are handed to [`BinaryTree::add`][crate::BinaryTree::add] and are what
/// [`find`][crate::BinaryTree::find] and [`remove`][crate::BinaryTree::remove] give back.
/// Children can only be attached by a tree, so a `Node` built by hand is always a leaf.
///
/// # Examples
///
/// ```
/// use binarytree::Node;
///
/// let node = Node::new(4);
///
/// assert_eq!(node.value(), &4);
/// assert!(node.is_leaf());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) value: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: K) -> Self {
        Self {
            value,
            left: Link::default(),
            right: Link::default(),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of the subtree holding values smaller than this node's, if any.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.0.as_deref()
    }

    /// The root of the subtree holding values greater than this node's, if any.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.0.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// Consumes the node, returning its value. Any children are dropped.
    pub fn into_value(self) -> K {
        self.value
    }
}

impl<K> From<K> for Node<K> {
    fn from(value: K) -> Self {
        Self::new(value)
    }
}

/// Only the values of the children are shown so formatting a deep subtree stays shallow.
impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// An owned, possibly empty subtree.
///
/// Dropping, cloning and comparing a `Link` walk the subtree with an explicit stack, so a chain of
/// any length is handled without recursing once per level.
pub(crate) struct Link<K>(pub(crate) Option<Box<Node<K>>>);

impl<K> Link<K> {
    pub(crate) fn take(&mut self) -> Option<Box<Node<K>>> {
        self.0.take()
    }
}

impl<K> Default for Link<K> {
    fn default() -> Self {
        Self(None)
    }
}

impl<K> Drop for Link<K> {
    fn drop(&mut self) {
        // Unlink children before each node is dropped so dropping never recurses.
        let mut stack: Vec<Box<Node<K>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Link<K> {
    fn clone(&self) -> Self {
        // Walking the pre-order backwards finishes both subtrees of a node before the node
        // itself, with the left subtree on top of the right one.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        for node in pre_order(self.0.as_deref()).into_iter().rev() {
            let left = if node.left.0.is_some() { built.pop() } else { None };
            let right = if node.right.0.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left: Link(left),
                right: Link(right),
            }));
        }

        Link(built.pop())
    }
}

impl<K: PartialEq> PartialEq for Link<K> {
    fn eq(&self, other: &Self) -> bool {
        // A pre-order walk together with which children each node has pins down the shape.
        let (ours, theirs) = (pre_order(self.0.as_deref()), pre_order(other.0.as_deref()));
        ours.len() == theirs.len()
            && ours.iter().zip(&theirs).all(|(a, b)| {
                a.value == b.value
                    && a.left.0.is_some() == b.left.0.is_some()
                    && a.right.0.is_some() == b.right.0.is_some()
            })
    }
}

impl<K: Eq> Eq for Link<K> {}

/// Collects the nodes of the subtree rooted at `root`: the node, then its left subtree, then its
/// right subtree.
pub(crate) fn pre_order<K>(root: Option<&Node<K>>) -> Vec<&Node<K>> {
    let mut visited = Vec::new();
    let mut stack: Vec<&Node<K>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visited.push(node);
        // Right first so the left subtree is popped first.
        stack.extend(node.right());
        stack.extend(node.left());
    }

    visited
}
