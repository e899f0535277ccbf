// Every variant is wired up by hand here, with an explicit match per
// method. It's verbose, but it keeps the dispatch static all the way down
// to the outer handle, and it's obvious what happens for each variant.

use std::cell::RefCell;
use std::rc::Rc;

use ibig::{ubig, IBig, UBig};

use crate::cache::{CacheConfig, FreezingCache};
use crate::error;
use crate::item::Item;
use crate::length::{self, Length};

use super::clone::CloneMemo;
use super::iter::SequenceIter;
use super::traits::SequenceCore;
use super::variant::{
    ArityRange, Chain, Combinations, CombinationsWithReplacement, Count, Cycle, Fibonacci,
    Permutations, Product, Range, Repeat, Slice, Wrapper,
};
use super::SequenceKind;

/// A lazily evaluated, randomly indexable sequence.
///
/// This is a cheap handle: cloning it with `Clone` shares the underlying
/// sequence. Use [`Sequence::deep_clone`] for a structural copy.
///
/// Composite sequences hold handles to their children. Decoding recurses
/// through the children, so the depth of composition is bounded only by
/// the caller; unranking itself never recurses deeper than the arity.
#[derive(Debug, Clone)]
pub struct Sequence {
    node: Rc<Node>,
}

#[derive(Debug)]
pub(crate) struct Node {
    variant: Variant,
    length: Length,
    cache: RefCell<FreezingCache<UBig, Item>>,
}

#[derive(Debug, Clone)]
pub(crate) enum Variant {
    Wrapper(Wrapper),
    Range(Range),
    Count(Count),
    Repeat(Repeat),
    Cycle(Cycle),
    Chain(Chain),
    Product(Product),
    Slice(Slice),
    Permutations(Permutations),
    Combinations(Combinations),
    CombinationsWithReplacement(CombinationsWithReplacement),
    ArityRange(ArityRange),
    Fibonacci(Fibonacci),
}

macro_rules! variant_from {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Variant {
                fn from(inner: $name) -> Self {
                    Variant::$name(inner)
                }
            }
        )*
    };
}

variant_from!(
    Wrapper,
    Range,
    Count,
    Repeat,
    Cycle,
    Chain,
    Product,
    Slice,
    Permutations,
    Combinations,
    CombinationsWithReplacement,
    ArityRange,
    Fibonacci
);

impl Variant {
    fn reconfigured(&self, config: CacheConfig) -> Variant {
        match self {
            Variant::Fibonacci(_) => Fibonacci::new(config).into(),
            other => other.clone(),
        }
    }
}

impl SequenceCore for Variant {
    fn kind(&self) -> SequenceKind {
        match self {
            Variant::Wrapper(inner) => inner.kind(),
            Variant::Range(inner) => inner.kind(),
            Variant::Count(inner) => inner.kind(),
            Variant::Repeat(inner) => inner.kind(),
            Variant::Cycle(inner) => inner.kind(),
            Variant::Chain(inner) => inner.kind(),
            Variant::Product(inner) => inner.kind(),
            Variant::Slice(inner) => inner.kind(),
            Variant::Permutations(inner) => inner.kind(),
            Variant::Combinations(inner) => inner.kind(),
            Variant::CombinationsWithReplacement(inner) => inner.kind(),
            Variant::ArityRange(inner) => inner.kind(),
            Variant::Fibonacci(inner) => inner.kind(),
        }
    }

    fn length(&self) -> Length {
        match self {
            Variant::Wrapper(inner) => inner.length(),
            Variant::Range(inner) => inner.length(),
            Variant::Count(inner) => inner.length(),
            Variant::Repeat(inner) => inner.length(),
            Variant::Cycle(inner) => inner.length(),
            Variant::Chain(inner) => inner.length(),
            Variant::Product(inner) => inner.length(),
            Variant::Slice(inner) => inner.length(),
            Variant::Permutations(inner) => inner.length(),
            Variant::Combinations(inner) => inner.length(),
            Variant::CombinationsWithReplacement(inner) => inner.length(),
            Variant::ArityRange(inner) => inner.length(),
            Variant::Fibonacci(inner) => inner.length(),
        }
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        match self {
            Variant::Wrapper(inner) => inner.get_unchecked(index),
            Variant::Range(inner) => inner.get_unchecked(index),
            Variant::Count(inner) => inner.get_unchecked(index),
            Variant::Repeat(inner) => inner.get_unchecked(index),
            Variant::Cycle(inner) => inner.get_unchecked(index),
            Variant::Chain(inner) => inner.get_unchecked(index),
            Variant::Product(inner) => inner.get_unchecked(index),
            Variant::Slice(inner) => inner.get_unchecked(index),
            Variant::Permutations(inner) => inner.get_unchecked(index),
            Variant::Combinations(inner) => inner.get_unchecked(index),
            Variant::CombinationsWithReplacement(inner) => inner.get_unchecked(index),
            Variant::ArityRange(inner) => inner.get_unchecked(index),
            Variant::Fibonacci(inner) => inner.get_unchecked(index),
        }
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        match self {
            Variant::Wrapper(inner) => inner.deep_clone(memo).into(),
            Variant::Range(inner) => inner.deep_clone(memo).into(),
            Variant::Count(inner) => inner.deep_clone(memo).into(),
            Variant::Repeat(inner) => inner.deep_clone(memo).into(),
            Variant::Cycle(inner) => inner.deep_clone(memo).into(),
            Variant::Chain(inner) => inner.deep_clone(memo).into(),
            Variant::Product(inner) => inner.deep_clone(memo).into(),
            Variant::Slice(inner) => inner.deep_clone(memo).into(),
            Variant::Permutations(inner) => inner.deep_clone(memo).into(),
            Variant::Combinations(inner) => inner.deep_clone(memo).into(),
            Variant::CombinationsWithReplacement(inner) => inner.deep_clone(memo).into(),
            Variant::ArityRange(inner) => inner.deep_clone(memo).into(),
            Variant::Fibonacci(inner) => inner.deep_clone(memo).into(),
        }
    }

    fn index_of(&self, item: &Item) -> error::Result<UBig> {
        match self {
            Variant::Wrapper(inner) => inner.index_of(item),
            Variant::Range(inner) => inner.index_of(item),
            Variant::Count(inner) => inner.index_of(item),
            Variant::Repeat(inner) => inner.index_of(item),
            Variant::Cycle(inner) => inner.index_of(item),
            Variant::Chain(inner) => inner.index_of(item),
            Variant::Product(inner) => inner.index_of(item),
            Variant::Slice(inner) => inner.index_of(item),
            Variant::Permutations(inner) => inner.index_of(item),
            Variant::Combinations(inner) => inner.index_of(item),
            Variant::CombinationsWithReplacement(inner) => inner.index_of(item),
            Variant::ArityRange(inner) => inner.index_of(item),
            Variant::Fibonacci(inner) => inner.index_of(item),
        }
    }
}

impl Sequence {
    pub(crate) fn from_variant(variant: impl Into<Variant>) -> Self {
        Self::with_config(variant.into(), CacheConfig::disabled())
    }

    fn with_config(variant: Variant, config: CacheConfig) -> Self {
        let length = variant.length();
        tracing::debug!(
            kind = %variant.kind(),
            length = %length,
            cache = ?config.capacity(),
            "constructed sequence"
        );
        Sequence {
            node: Rc::new(Node {
                variant,
                length,
                cache: RefCell::new(FreezingCache::new(config)),
            }),
        }
    }

    /// The kind of sequence.
    pub fn kind(&self) -> SequenceKind {
        self.node.variant.kind()
    }

    /// The length of the sequence, which may be infinite.
    pub fn length(&self) -> Length {
        self.node.length.clone()
    }

    /// True if the sequence has a finite length of zero.
    pub fn is_empty(&self) -> bool {
        self.node.length.is_empty()
    }

    /// True if the sequence is infinite.
    pub fn is_infinite(&self) -> bool {
        self.node.length.is_infinite()
    }

    /// Get the element at `index`.
    ///
    /// Negative indices count from the end of a finite sequence. Infinite
    /// sequences accept any non-negative index.
    pub fn get(&self, index: impl Into<IBig>) -> error::Result<Item> {
        let index = index.into();
        let position = length::resolve_index(&index, &self.node.length, self.kind())?;
        self.fetch(&position)
    }

    /// Get the element using an item as the index.
    ///
    /// The item has to be an integer.
    pub fn get_item(&self, index: &Item) -> error::Result<Item> {
        self.get(index.to_integer()?)
    }

    /// Get the element at a non-negative position, consulting the cache.
    pub(crate) fn fetch(&self, position: &UBig) -> error::Result<Item> {
        if !self.node.length.covers(position) {
            return Err(error::Error::IndexOutOfBounds {
                kind: self.kind(),
                index: IBig::from(position.clone()),
                length: self.node.length.finite().cloned().unwrap_or_else(|| ubig!(0)),
            });
        }
        if let Some(item) = self.node.cache.borrow().get(position) {
            tracing::trace!(kind = %self.kind(), %position, "cache hit");
            return Ok(item.clone());
        }
        let item = self.node.variant.get_unchecked(position)?;
        let mut cache = self.node.cache.borrow_mut();
        if cache.is_accepting() {
            cache.insert(position.clone(), item.clone());
        }
        Ok(item)
    }

    /// Find the first index at which `item` occurs.
    ///
    /// Only some sequences support this; others return
    /// [`error::Error::UnsupportedOperation`].
    pub fn index_of(&self, item: &Item) -> error::Result<UBig> {
        self.node.variant.index_of(item)
    }

    /// Check whether `item` occurs in the sequence.
    ///
    /// A sequence that cannot look up items reports `false`.
    pub fn contains(&self, item: &Item) -> error::Result<bool> {
        match self.index_of(item) {
            Ok(_) => Ok(true),
            Err(error::Error::UnsupportedOperation { .. }) | Err(error::Error::NotFound { .. }) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Iterate over the sequence from the start.
    ///
    /// Every call starts a new cursor at position 0. Iteration over an
    /// infinite sequence never ends, so it has to be bounded by the caller.
    pub fn iter(&self) -> SequenceIter {
        SequenceIter::new(self.clone())
    }

    /// A new instance of this sequence with its own cache.
    ///
    /// Children are shared with this sequence, not copied. A Fibonacci
    /// sequence also sizes its table of doubling steps by `config`.
    pub fn with_cache(&self, config: CacheConfig) -> Sequence {
        Self::with_config(self.node.variant.reconfigured(config), config)
    }

    /// The cache configuration of this instance.
    pub fn cache_config(&self) -> CacheConfig {
        self.node.cache.borrow().config()
    }

    /// The number of elements currently cached by this instance.
    pub fn cached_len(&self) -> usize {
        self.node.cache.borrow().len()
    }

    /// A structural copy of the sequence.
    ///
    /// Children shared within the sequence stay shared in the copy. The
    /// copy starts out with an empty cache.
    pub fn deep_clone(&self) -> Sequence {
        self.deep_clone_with(&mut CloneMemo::new())
    }

    /// A structural copy of the sequence, using `memo` to keep track of
    /// nodes already cloned.
    ///
    /// Use the same memo to clone several sequences that share children.
    pub fn deep_clone_with(&self, memo: &mut CloneMemo) -> Sequence {
        if let Some(clone) = memo.get(&self.node) {
            tracing::debug!(kind = %self.kind(), "reusing clone of shared sequence");
            return clone.clone();
        }
        let variant = self.node.variant.deep_clone(memo);
        let clone = Self::with_config(variant, self.cache_config());
        memo.insert(&self.node, clone.clone());
        clone
    }

    /// Whether two handles refer to the same sequence instance.
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl From<&Sequence> for Sequence {
    fn from(sequence: &Sequence) -> Self {
        sequence.clone()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = error::Result<Item>;
    type IntoIter = SequenceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
