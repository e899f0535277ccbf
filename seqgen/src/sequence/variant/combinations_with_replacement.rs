use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::numeric::n_c_r_r;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// All `r`-multisets of a finite pool, as non-decreasing position tuples.
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement {
    pool: Sequence,
    n: UBig,
    r: usize,
    length: Length,
}

impl CombinationsWithReplacement {
    pub(crate) fn new(pool: Sequence, r: usize) -> error::Result<Self> {
        let n = pool
            .length()
            .require_finite(SequenceKind::CombinationsWithReplacement)?
            .clone();
        let length = Length::Finite(n_c_r_r(&n, r));
        Ok(CombinationsWithReplacement {
            pool,
            n,
            r,
            length,
        })
    }
}

impl SequenceCore for CombinationsWithReplacement {
    fn kind(&self) -> SequenceKind {
        SequenceKind::CombinationsWithReplacement
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let mut k = index.clone();
        let mut r = self.r;
        let mut position = ubig!(0);
        let mut remaining = self.n.clone();
        let mut items = Vec::with_capacity(self.r);
        while r > 0 {
            if remaining == ubig!(0) {
                return Err(error::Error::IndexOutOfBounds {
                    kind: self.kind(),
                    index: index.clone().into(),
                    length: self.length.finite().cloned().unwrap_or_else(|| ubig!(0)),
                });
            }
            // the number of multisets that take the first item once more
            let again = n_c_r_r(&remaining, r - 1);
            if k < again {
                items.push(self.pool.fetch(&position)?);
                r -= 1;
            } else {
                // drop the first item for good
                k -= again;
                position += ubig!(1);
                remaining -= ubig!(1);
            }
        }
        Ok(items.into())
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        CombinationsWithReplacement {
            pool: self.pool.deep_clone_with(memo),
            n: self.n.clone(),
            r: self.r,
            length: self.length.clone(),
        }
    }
}
