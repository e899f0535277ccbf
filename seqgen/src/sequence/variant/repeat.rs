use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::SequenceKind;

/// The same item, `times` times or forever.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeat {
    item: Item,
    times: Length,
}

impl Repeat {
    pub(crate) fn new(item: Item, times: Option<UBig>) -> Self {
        Repeat {
            item,
            times: times.map(Length::Finite).unwrap_or(Length::Infinite),
        }
    }
}

impl SequenceCore for Repeat {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Repeat
    }

    fn length(&self) -> Length {
        self.times.clone()
    }

    fn get_unchecked(&self, _index: &UBig) -> error::Result<Item> {
        Ok(self.item.clone())
    }

    fn deep_clone(&self, _memo: &mut CloneMemo) -> Self {
        self.clone()
    }

    fn index_of(&self, item: &Item) -> error::Result<UBig> {
        if *item == self.item && !self.times.is_empty() {
            Ok(ubig!(0))
        } else {
            Err(error::Error::NotFound { kind: self.kind() })
        }
    }
}
