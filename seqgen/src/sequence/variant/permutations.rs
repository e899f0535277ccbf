use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::numeric::n_p_r;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// All ordered selections of `r` items from a finite pool.
///
/// There are `nPr(n, r)` of them. The k-th selection is decoded directly
/// from `k`: the first item is chosen by which block of `nPr(n - 1, r - 1)`
/// selections `k` falls into, and the rest is decoded the same way from
/// the remaining pool.
#[derive(Debug, Clone)]
pub struct Permutations {
    pool: Sequence,
    n: UBig,
    r: usize,
    length: Length,
}

/// The pool size as an arity, for when no arity is given.
pub(crate) fn pool_arity(n: &UBig, kind: SequenceKind) -> error::Result<usize> {
    usize::try_from(n)
        .map_err(|_| error::Error::invalid_argument(kind, "pool is too large to use as arity"))
}

impl Permutations {
    pub(crate) fn new(pool: Sequence, r: Option<usize>) -> error::Result<Self> {
        let n = pool
            .length()
            .require_finite(SequenceKind::Permutations)?
            .clone();
        let r = match r {
            Some(r) => r,
            None => pool_arity(&n, SequenceKind::Permutations)?,
        };
        let length = Length::Finite(n_p_r(&n, r));
        Ok(Permutations {
            pool,
            n,
            r,
            length,
        })
    }
}

/// The pool position of the `slot`-th item not yet taken.
///
/// `taken` is sorted.
fn nth_remaining(slot: UBig, taken: &[UBig]) -> UBig {
    let mut position = slot;
    for t in taken {
        if *t <= position {
            position += ubig!(1);
        } else {
            break;
        }
    }
    position
}

impl SequenceCore for Permutations {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Permutations
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let mut k = index.clone();
        let mut remaining = self.n.clone();
        let mut taken: Vec<UBig> = Vec::with_capacity(self.r);
        let mut items = Vec::with_capacity(self.r);
        for depth in 0..self.r {
            remaining -= ubig!(1);
            let block = n_p_r(&remaining, self.r - depth - 1);
            // the first slot whose block reaches beyond k
            let slot = &k / &block;
            k -= &slot * &block;
            let position = nth_remaining(slot, &taken);
            tracing::trace!(depth, %position, "permutation step");
            items.push(self.pool.fetch(&position)?);
            let at = taken.partition_point(|t| *t < position);
            taken.insert(at, position);
        }
        Ok(items.into())
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Permutations {
            pool: self.pool.deep_clone_with(memo),
            n: self.n.clone(),
            r: self.r,
            length: self.length.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_remaining() {
        let taken = vec![ubig!(1), ubig!(2), ubig!(5)];
        assert_eq!(nth_remaining(ubig!(0), &taken), ubig!(0));
        assert_eq!(nth_remaining(ubig!(1), &taken), ubig!(3));
        assert_eq!(nth_remaining(ubig!(2), &taken), ubig!(4));
        assert_eq!(nth_remaining(ubig!(3), &taken), ubig!(6));
    }

    #[test]
    fn test_arity_larger_than_pool() {
        let permutations = Permutations::new(Sequence::wrap(0..3), Some(4)).unwrap();
        assert!(permutations.length().is_empty());
    }

    #[test]
    fn test_default_arity() {
        let permutations = Permutations::new(Sequence::wrap(0..4), None).unwrap();
        assert_eq!(permutations.r, 4);
        assert_eq!(permutations.length(), Length::from(24usize));
    }

    #[test]
    fn test_last_permutation() {
        let permutations = Permutations::new(Sequence::wrap(0..4), None).unwrap();
        let last = permutations.get_unchecked(&ubig!(23)).unwrap();
        assert_eq!(last.to_string(), "(3, 2, 1, 0)");
    }
}
