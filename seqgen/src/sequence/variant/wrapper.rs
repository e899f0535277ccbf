use std::rc::Rc;

use ibig::UBig;

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::SequenceKind;

/// A finite, materialized sequence of items.
///
/// This is how host collections enter the library: anything with a known
/// finite number of items can be wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Wrapper {
    items: Rc<[Item]>,
}

impl Wrapper {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Wrapper {
            items: items.into(),
        }
    }
}

impl SequenceCore for Wrapper {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Wrapper
    }

    fn length(&self) -> Length {
        self.items.len().into()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index))
            .cloned()
            .ok_or_else(|| error::Error::IndexOutOfBounds {
                kind: self.kind(),
                index: index.clone().into(),
                length: self.items.len().into(),
            })
    }

    fn deep_clone(&self, _memo: &mut CloneMemo) -> Self {
        Wrapper {
            items: self.items.iter().cloned().collect(),
        }
    }

    fn index_of(&self, item: &Item) -> error::Result<UBig> {
        self.items
            .iter()
            .position(|candidate| candidate == item)
            .map(UBig::from)
            .ok_or(error::Error::NotFound { kind: self.kind() })
    }
}
