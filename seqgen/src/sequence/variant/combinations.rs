use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::numeric::n_c_r;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// All `r`-subsets of a finite pool, in lexicographic order of positions.
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: Sequence,
    n: UBig,
    r: usize,
    length: Length,
}

impl Combinations {
    pub(crate) fn new(pool: Sequence, r: usize) -> error::Result<Self> {
        let n = pool
            .length()
            .require_finite(SequenceKind::Combinations)?
            .clone();
        let length = Length::Finite(n_c_r(&n, r));
        Ok(Combinations {
            pool,
            n,
            r,
            length,
        })
    }
}

impl SequenceCore for Combinations {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Combinations
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let mut k = index.clone();
        let mut r = self.r;
        // the pool still to choose from is position..n
        let mut position = ubig!(0);
        let mut remaining = self.n.clone();
        let mut items = Vec::with_capacity(self.r);
        while r > 0 {
            if remaining == UBig::from(r) {
                // every remaining item has to be taken
                for offset in 0..r {
                    items.push(self.pool.fetch(&(&position + UBig::from(offset)))?);
                }
                break;
            }
            // the number of subsets that include the first remaining item
            let including = n_c_r(&(&remaining - ubig!(1)), r - 1);
            if k < including {
                items.push(self.pool.fetch(&position)?);
                r -= 1;
            } else {
                k -= including;
            }
            position += ubig!(1);
            remaining -= ubig!(1);
        }
        Ok(items.into())
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Combinations {
            pool: self.pool.deep_clone_with(memo),
            n: self.n.clone(),
            r: self.r,
            length: self.length.clone(),
        }
    }
}
