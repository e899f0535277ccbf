//! Lazy sequences with random access.
//!
//! A [`Sequence`] knows its length up front, which may be infinite, and
//! computes the element at any index on demand. Sequences compose: they
//! can be chained, sliced, cycled and multiplied out, and the
//! permutations and combinations of a pool are decoded directly from
//! their index.
//!
//! ```
//! use seqgen::{Fibonacci, Item, Sequence};
//!
//! let pool = Sequence::wrap(0..5);
//! let pairs = Sequence::combinations(&pool, 2).unwrap();
//! assert_eq!(pairs.length(), 10usize);
//! assert_eq!(pairs.get(9).unwrap().to_string(), "(3, 4)");
//! let fibonacci = Sequence::fibonacci(Fibonacci::default_config());
//! assert_eq!(fibonacci.get(90).unwrap(), Item::from(2880067194370816120i64));
//! ```

pub mod cache;
pub mod error;
pub mod item;
pub mod length;
pub mod numeric;
pub mod sequence;

pub use cache::CacheConfig;
pub use error::{Error, Result};
pub use item::Item;
pub use length::Length;
pub use sequence::{Arities, CloneMemo, Fibonacci, Sequence, SequenceIter, SequenceKind};
