use std::fmt;
use std::rc::Rc;

use ibig::IBig;

use crate::error;

/// An element of a sequence.
///
/// Sequences are agnostic about what they hold; an item is an opaque
/// value that can be compared and hashed. Combinatorial sequences produce
/// tuples of the items in their pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// An arbitrary precision integer.
    Integer(IBig),
    /// A boolean.
    Boolean(bool),
    /// A string.
    String(Rc<str>),
    /// An ordered group of items.
    Tuple(Rc<[Item]>),
}

impl Item {
    /// Try to get the integer value of the item.
    pub fn to_integer(&self) -> error::Result<IBig> {
        match self {
            Item::Integer(i) => Ok(i.clone()),
            _ => Err(error::Error::InvalidIndexType {
                found: self.type_name(),
            }),
        }
    }

    /// Try to get the items of a tuple.
    pub fn to_tuple(&self) -> Option<&[Item]> {
        match self {
            Item::Tuple(items) => Some(items.as_ref()),
            _ => None,
        }
    }

    /// A short name for the kind of value this is.
    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Integer(_) => "integer",
            Item::Boolean(_) => "boolean",
            Item::String(_) => "string",
            Item::Tuple(_) => "tuple",
        }
    }
}

impl From<IBig> for Item {
    fn from(i: IBig) -> Self {
        Item::Integer(i)
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Item::Integer(i.into())
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Item::Integer(i.into())
    }
}

impl From<u64> for Item {
    fn from(i: u64) -> Self {
        Item::Integer(i.into())
    }
}

impl From<usize> for Item {
    fn from(i: usize) -> Self {
        Item::Integer(i.into())
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Item::Boolean(b)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::String(s.into())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::String(s.into())
    }
}

impl From<Vec<Item>> for Item {
    fn from(items: Vec<Item>) -> Self {
        Item::Tuple(items.into())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(i) => write!(f, "{}", i),
            Item::Boolean(b) => write!(f, "{}", b),
            Item::String(s) => write!(f, "{:?}", s),
            Item::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                // a one-tuple gets a trailing comma, so it doesn't read as
                // a parenthesized value
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}
