use ibig::UBig;

use crate::error;
use crate::item::Item;
use crate::length::Length;

use super::clone::CloneMemo;
use super::SequenceKind;

/// The core sequence interface: every variant implements this.
///
/// The `Sequence` handle takes care of index validation, negative index
/// resolution and caching, so a variant only has to decode an index it
/// knows to be inside `[0, length)`.
pub(crate) trait SequenceCore {
    /// The kind of sequence
    fn kind(&self) -> SequenceKind;

    /// The length, computed when the sequence was constructed
    fn length(&self) -> Length;

    /// Produce the element at `index`, which lies in `[0, length)`.
    fn get_unchecked(&self, index: &UBig) -> error::Result<Item>;

    /// Copy this variant, cloning children through `memo` so shared
    /// children stay shared in the copy.
    fn deep_clone(&self, memo: &mut CloneMemo) -> Self
    where
        Self: Sized;

    /// Find the first index of `item`.
    ///
    /// Most variants cannot do this without enumerating, so by default
    /// this is unsupported.
    fn index_of(&self, _item: &Item) -> error::Result<UBig> {
        Err(error::Error::UnsupportedOperation {
            kind: self.kind(),
            operation: "index_of",
        })
    }
}
