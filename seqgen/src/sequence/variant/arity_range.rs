use std::ops::{RangeFrom, RangeInclusive};

use ibig::UBig;

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

use super::permutations::pool_arity;
use super::{Chain, Combinations, Permutations};

/// The arities a range-sweep sequence enumerates: `start..stop` by `step`.
///
/// Without a stop, the sweep runs up to and including the pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arities {
    start: usize,
    stop: Option<usize>,
    step: usize,
}

impl Arities {
    /// Every arity from 0 up to the pool size.
    pub fn all() -> Self {
        Arities {
            start: 0,
            stop: None,
            step: 1,
        }
    }

    pub fn new(start: usize, stop: Option<usize>, step: usize) -> Self {
        Arities { start, stop, step }
    }
}

impl Default for Arities {
    fn default() -> Self {
        Self::all()
    }
}

impl From<std::ops::Range<usize>> for Arities {
    fn from(range: std::ops::Range<usize>) -> Self {
        Arities::new(range.start, Some(range.end), 1)
    }
}

impl From<RangeInclusive<usize>> for Arities {
    fn from(range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        Arities::new(start, end.checked_add(1), 1)
    }
}

impl From<RangeFrom<usize>> for Arities {
    fn from(range: RangeFrom<usize>) -> Self {
        Arities::new(range.start, None, 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Permutations,
    Combinations,
}

/// Permutations or combinations of a pool for a range of arities, one
/// arity after the other in increasing order.
#[derive(Debug, Clone)]
pub struct ArityRange {
    family: Family,
    pool: Sequence,
    chain: Sequence,
}

impl ArityRange {
    pub(crate) fn new(family: Family, pool: Sequence, arities: Arities) -> error::Result<Self> {
        let kind = family.kind();
        let n = pool.length().require_finite(kind)?.clone();
        if arities.step == 0 {
            return Err(error::Error::invalid_argument(kind, "arity step must not be zero"));
        }
        let stop = match arities.stop {
            Some(stop) => stop,
            // a pool larger than usize::MAX would fail below anyway
            None => pool_arity(&n, kind)?.saturating_add(1),
        };
        let members = (arities.start..stop)
            .step_by(arities.step)
            .map(|r| family.member(&pool, r))
            .collect::<error::Result<Vec<_>>>()?;
        let chain = Sequence::from_variant(Chain::new(members)?);
        Ok(ArityRange {
            family,
            pool,
            chain,
        })
    }
}

impl Family {
    fn kind(self) -> SequenceKind {
        match self {
            Family::Permutations => SequenceKind::PermutationRange,
            Family::Combinations => SequenceKind::CombinationRange,
        }
    }

    fn member(self, pool: &Sequence, r: usize) -> error::Result<Sequence> {
        Ok(match self {
            Family::Permutations => {
                Sequence::from_variant(Permutations::new(pool.clone(), Some(r))?)
            }
            Family::Combinations => Sequence::from_variant(Combinations::new(pool.clone(), r)?),
        })
    }
}

impl SequenceCore for ArityRange {
    fn kind(&self) -> SequenceKind {
        self.family.kind()
    }

    fn length(&self) -> Length {
        self.chain.length()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        self.chain.fetch(index)
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        // the pool goes first so the members pick up the same copy
        let pool = self.pool.deep_clone_with(memo);
        ArityRange {
            family: self.family,
            pool,
            chain: self.chain.deep_clone_with(memo),
        }
    }
}
