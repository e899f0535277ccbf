use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// Repeats a finite sequence forever.
#[derive(Debug, Clone)]
pub struct Cycle {
    sequence: Sequence,
    period: UBig,
}

impl Cycle {
    pub(crate) fn new(sequence: Sequence) -> error::Result<Self> {
        let period = sequence
            .length()
            .require_finite(SequenceKind::Cycle)?
            .clone();
        // an empty cycle would claim to be infinite without having a single
        // element to show for it
        if period == ubig!(0) {
            return Err(error::Error::invalid_argument(
                SequenceKind::Cycle,
                "cannot cycle an empty sequence",
            ));
        }
        Ok(Cycle { sequence, period })
    }
}

impl SequenceCore for Cycle {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Cycle
    }

    fn length(&self) -> Length {
        Length::Infinite
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        self.sequence.fetch(&(index % &self.period))
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Cycle {
            sequence: self.sequence.deep_clone_with(memo),
            period: self.period.clone(),
        }
    }
}
