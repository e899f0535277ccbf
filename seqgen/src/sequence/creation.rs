use std::ops::Add;

use ibig::{IBig, UBig};

use crate::cache::CacheConfig;
use crate::error;
use crate::item::Item;

use super::{
    sequence_core::Sequence,
    variant::{
        Arities, ArityRange, Chain, Combinations, CombinationsWithReplacement, Count, Cycle,
        Family, Fibonacci, Permutations, Product, Range, Repeat, Slice, Wrapper,
    },
    SequenceKind,
};

fn logged<T>(kind: SequenceKind, result: error::Result<T>) -> error::Result<T> {
    result.inspect_err(|e| tracing::debug!(%kind, error = %e, "sequence construction failed"))
}

impl Sequence {
    /// Wrap a collection with a known number of items.
    pub fn wrap<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
        I::Item: Into<Item>,
    {
        let items = items.into_iter();
        let mut collected = Vec::with_capacity(items.len());
        collected.extend(items.map(Into::into));
        Self::from_variant(Wrapper::new(collected))
    }

    /// Wrap any iterable that reports an exact size.
    ///
    /// Iterables that can't say up front how many items they have are
    /// rejected, so this never tries to drain an endless iterator.
    pub fn try_wrap<I>(items: I) -> error::Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items = items.into_iter();
        match items.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                Ok(Self::from_variant(Wrapper::new(items.map(Into::into).collect())))
            }
            _ => logged(
                SequenceKind::Wrapper,
                Err(error::Error::invalid_argument(
                    SequenceKind::Wrapper,
                    "only collections with a known length can be wrapped",
                )),
            ),
        }
    }

    /// The integers from `start` up to (not including) `stop`, by `step`.
    pub fn range(
        start: impl Into<IBig>,
        stop: impl Into<IBig>,
        step: impl Into<IBig>,
    ) -> error::Result<Self> {
        let range = Range::new(start.into(), Some(stop.into()), step.into());
        logged(SequenceKind::Range, range).map(Self::from_variant)
    }

    /// The integers from `start` upwards by `step`, without end.
    pub fn range_open(start: impl Into<IBig>, step: impl Into<IBig>) -> error::Result<Self> {
        let range = Range::new(start.into(), None, step.into());
        logged(SequenceKind::Range, range).map(Self::from_variant)
    }

    /// A range from items, which must all be integers.
    ///
    /// A missing `stop` makes the range open-ended.
    pub fn range_from_items(start: &Item, stop: Option<&Item>, step: &Item) -> error::Result<Self> {
        let integer = |item: &Item| {
            item.to_integer().map_err(|_| {
                error::Error::invalid_argument(
                    SequenceKind::Range,
                    format!("bounds must be integers, not {}", item.type_name()),
                )
            })
        };
        let bounds = integer(start).and_then(|start| {
            let stop = stop.map(integer).transpose()?;
            Ok((start, stop, integer(step)?))
        });
        let (start, stop, step) = logged(SequenceKind::Range, bounds)?;
        let range = Range::new(start, stop, step);
        logged(SequenceKind::Range, range).map(Self::from_variant)
    }

    /// `start, start + step, start + 2 * step, ...` without end.
    pub fn count(start: impl Into<IBig>, step: impl Into<IBig>) -> Self {
        Self::from_variant(Count::new(start.into(), step.into()))
    }

    /// `item`, `times` times over.
    pub fn repeat(item: impl Into<Item>, times: impl Into<UBig>) -> Self {
        Self::from_variant(Repeat::new(item.into(), Some(times.into())))
    }

    /// `item`, forever.
    pub fn repeat_forever(item: impl Into<Item>) -> Self {
        Self::from_variant(Repeat::new(item.into(), None))
    }

    /// A finite, non-empty sequence over and over again.
    pub fn cycle(sequence: impl Into<Sequence>) -> error::Result<Self> {
        let cycle = Cycle::new(sequence.into());
        logged(SequenceKind::Cycle, cycle).map(Self::from_variant)
    }

    /// Sequences one after the other. Only the last may be infinite.
    pub fn chain(sequences: impl IntoIterator<Item = Sequence>) -> error::Result<Self> {
        let chain = Chain::new(sequences);
        logged(SequenceKind::Chain, chain).map(Self::from_variant)
    }

    /// This sequence followed by `other`.
    pub fn concat(&self, other: &Sequence) -> error::Result<Self> {
        Self::chain([self.clone(), other.clone()])
    }

    /// The Cartesian product of finite sequences.
    pub fn product(factors: impl IntoIterator<Item = Sequence>) -> error::Result<Self> {
        Self::product_repeat(factors, 1)
    }

    /// The Cartesian product of the factors, repeated `repeat` times.
    ///
    /// `product_repeat([a, b], 2)` is the product of `a, b, a, b`.
    pub fn product_repeat(
        factors: impl IntoIterator<Item = Sequence>,
        repeat: usize,
    ) -> error::Result<Self> {
        let product = Product::new(factors.into_iter().collect(), repeat);
        logged(SequenceKind::Product, product).map(Self::from_variant)
    }

    /// A view onto part of this sequence, with host slice semantics.
    pub fn slice(
        &self,
        start: Option<IBig>,
        stop: Option<IBig>,
        step: Option<IBig>,
    ) -> error::Result<Self> {
        let slice = Slice::new(self.clone(), start, stop, step);
        logged(SequenceKind::Slice, slice).map(Self::from_variant)
    }

    /// The `r`-permutations of a finite pool; all of the pool without `r`.
    pub fn permutations(pool: impl Into<Sequence>, r: Option<usize>) -> error::Result<Self> {
        let permutations = Permutations::new(pool.into(), r);
        logged(SequenceKind::Permutations, permutations).map(Self::from_variant)
    }

    /// The `r`-combinations of a finite pool.
    pub fn combinations(pool: impl Into<Sequence>, r: usize) -> error::Result<Self> {
        let combinations = Combinations::new(pool.into(), r);
        logged(SequenceKind::Combinations, combinations).map(Self::from_variant)
    }

    /// The `r`-combinations of a finite pool, with items taken more than
    /// once.
    pub fn combinations_with_replacement(
        pool: impl Into<Sequence>,
        r: usize,
    ) -> error::Result<Self> {
        let combinations = CombinationsWithReplacement::new(pool.into(), r);
        logged(SequenceKind::CombinationsWithReplacement, combinations).map(Self::from_variant)
    }

    /// The permutations of a finite pool for every arity in `arities`.
    pub fn permutation_range(
        pool: impl Into<Sequence>,
        arities: impl Into<Arities>,
    ) -> error::Result<Self> {
        let sweep = ArityRange::new(Family::Permutations, pool.into(), arities.into());
        logged(SequenceKind::PermutationRange, sweep).map(Self::from_variant)
    }

    /// The combinations of a finite pool for every arity in `arities`.
    pub fn combination_range(
        pool: impl Into<Sequence>,
        arities: impl Into<Arities>,
    ) -> error::Result<Self> {
        let sweep = ArityRange::new(Family::Combinations, pool.into(), arities.into());
        logged(SequenceKind::CombinationRange, sweep).map(Self::from_variant)
    }

    /// The Fibonacci numbers.
    ///
    /// `config` bounds the table of numbers remembered between lookups;
    /// [`Fibonacci::default_config`] is a reasonable choice.
    pub fn fibonacci(config: impl Into<CacheConfig>) -> Self {
        Self::from_variant(Fibonacci::new(config.into()))
    }
}

impl<T: Into<Item>> From<Vec<T>> for Sequence {
    fn from(items: Vec<T>) -> Self {
        Self::wrap(items)
    }
}

impl From<std::ops::Range<i64>> for Sequence {
    fn from(range: std::ops::Range<i64>) -> Self {
        Self::from_variant(Range::ascending(range.start.into(), range.end.into()))
    }
}

impl Add for Sequence {
    type Output = error::Result<Sequence>;

    fn add(self, other: Sequence) -> Self::Output {
        Sequence::chain([self, other])
    }
}

impl Add for &Sequence {
    type Output = error::Result<Sequence>;

    fn add(self, other: &Sequence) -> Self::Output {
        self.concat(other)
    }
}

#[cfg(test)]
mod tests {
    use ibig::ibig;

    use super::*;

    #[test]
    fn test_try_wrap_rejects_unknown_length() {
        let filtered = (0..10).filter(|i| i % 2 == 0);
        assert!(matches!(
            Sequence::try_wrap(filtered),
            Err(error::Error::InvalidConstructorArgument {
                kind: SequenceKind::Wrapper,
                ..
            })
        ));
        let sequence = Sequence::try_wrap(vec!["a", "b"]).unwrap();
        assert_eq!(sequence.get(1).unwrap(), Item::from("b"));
    }

    #[test]
    fn test_range_from_items() {
        let range =
            Sequence::range_from_items(&Item::from(1), Some(&Item::from(7)), &Item::from(3))
                .unwrap();
        assert_eq!(range.length(), 2usize);
        let result = Sequence::range_from_items(&Item::from("1"), None, &Item::from(1));
        assert!(matches!(
            result,
            Err(error::Error::InvalidConstructorArgument {
                kind: SequenceKind::Range,
                ..
            })
        ));
    }

    #[test]
    fn test_from_host_range() {
        let range = Sequence::from(-2..3i64);
        assert_eq!(range.kind(), SequenceKind::Range);
        assert_eq!(range.get(0).unwrap(), Item::from(-2));
        assert_eq!(range.get(-1).unwrap(), Item::from(2));
    }

    #[test]
    fn test_add_chains() {
        let a = Sequence::wrap(vec![1, 2]);
        let b = Sequence::wrap(vec![3]);
        let chained = (&a + &b).unwrap();
        assert_eq!(chained.kind(), SequenceKind::Chain);
        assert_eq!(chained.get(2).unwrap(), Item::from(3));
        let infinite = (Sequence::count(0, 1) + a).unwrap_err();
        assert_eq!(
            infinite,
            error::Error::InfiniteNotSupported {
                kind: SequenceKind::Chain
            }
        );
    }

    #[test]
    fn test_slice_of_slice() {
        let sequence = Sequence::wrap(0..20);
        let evens = sequence.slice(None, None, Some(ibig!(2))).unwrap();
        let middle = evens.slice(Some(ibig!(2)), Some(ibig!(-2)), None).unwrap();
        assert_eq!(middle.length(), 6usize);
        assert_eq!(middle.get(0).unwrap(), Item::from(4));
        assert_eq!(middle.get(-1).unwrap(), Item::from(14));
    }
}
