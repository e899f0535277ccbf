/// A sequence is a lazily evaluated list of items that can be indexed
/// at random. Elements are only computed when asked for.
///
/// Composite sequences are built out of other sequences, and the
/// combinatorial ones decode an index straight into the group it stands
/// for, without enumerating what comes before.
mod clone;
mod creation;
mod iter;
mod kind;
mod sequence_core;
mod traits;
mod variant;

pub use clone::CloneMemo;
pub use iter::SequenceIter;
pub use kind::SequenceKind;
pub use sequence_core::Sequence;
pub use variant::{Arities, Fibonacci};
