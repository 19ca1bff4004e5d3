//! Loosely typed input for a [`BinaryTree`][crate::BinaryTree].
//!
//! Callers that already hold a key type use the typed API (`add`, `find`, `remove`). Callers
//! forwarding values of unknown shape go through [`Value`] instead, and the [`Key`] trait decides
//! whether such a value may take part in the tree's ordering.
//!
//! ```
//! use binarytree::{BinaryTree, Value};
//!
//! let mut tree = BinaryTree::<i64>::new();
//!
//! assert!(tree.try_add(Value::node(3)).is_ok());
//! assert!(tree.try_add(Value::node("three")).is_err());
//!
//! // A bare integer is not a node.
//! assert!(tree.try_add(3).is_err());
//! ```

use std::borrow::Cow;

use crate::Node;

/// A dynamically typed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean. Never accepted as a key even though it looks like a small integer.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// The absence of a value.
    Null,
    /// A sequence of values.
    List(Vec<Value>),
    /// A mapping, kept as key/value pairs in insertion order.
    Map(Vec<(Value, Value)>),
    /// A [`Node`] wrapping the contained value.
    Node(Box<Value>),
}

impl Value {
    /// Wraps `value` in a node.
    pub fn node(value: impl Into<Value>) -> Self {
        Self::Node(Box::new(value.into()))
    }

    /// A short name for the kind of this value, e.g. `"float"` or `"node(string)"`.
    pub fn kind(&self) -> Cow<'static, str> {
        match self {
            Self::Bool(_) => "bool".into(),
            Self::Int(_) => "integer".into(),
            Self::Float(_) => "float".into(),
            Self::Str(_) => "string".into(),
            Self::Null => "null".into(),
            Self::List(_) => "list".into(),
            Self::Map(_) => "map".into(),
            Self::Node(inner) => format!("node({})", inner.kind()).into(),
        }
    }

    /// The key held by this value if it is a node wrapping a member of `K`'s domain.
    pub(crate) fn as_node_key<K: Key>(&self) -> Option<K> {
        match self {
            Self::Node(inner) => K::from_value(inner),
            _ => None,
        }
    }
}

/// A strictly ordered type that can be recovered from a [`Value`].
///
/// Only [`Value::Int`] converts, and only when it fits in the target type. Floats, booleans,
/// strings and composite values are all outside the key domain.
pub trait Key: Ord + Sized {
    /// Converts `value` into a key, or `None` if it is not part of the key domain.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(i) => <$t>::try_from(*i).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<Value>> From<Node<K>> for Value {
    fn from(node: Node<K>) -> Self {
        Self::node(node.into_value())
    }
}
