use ibig::{IBig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::SequenceKind;

use super::range::progression_position;

/// An infinite arithmetic progression `start, start + step, ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    start: IBig,
    step: IBig,
}

impl Count {
    pub(crate) fn new(start: IBig, step: IBig) -> Self {
        Count { start, step }
    }
}

impl SequenceCore for Count {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Count
    }

    fn length(&self) -> Length {
        Length::Infinite
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let value = &self.start + &self.step * IBig::from(index.clone());
        Ok(value.into())
    }

    fn deep_clone(&self, _memo: &mut CloneMemo) -> Self {
        self.clone()
    }

    fn index_of(&self, item: &Item) -> error::Result<UBig> {
        let Item::Integer(value) = item else {
            return Err(error::Error::NotFound { kind: self.kind() });
        };
        progression_position(value, &self.start, &self.step, &Length::Infinite)
            .ok_or(error::Error::NotFound { kind: self.kind() })
    }
}
