use std::cell::RefCell;

use ibig::{ubig, IBig, UBig};

use crate::cache::{CacheConfig, FreezingCache};
use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::SequenceKind;

const SEED: [u8; 11] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];

/// The Fibonacci numbers, `F(0) = 0, F(1) = 1, F(k) = F(k-1) + F(k-2)`.
///
/// `F(k)` is computed by fast doubling along the bits of `k`. Every
/// number met on the way is remembered in a freeze-on-fill cache, so
/// nearby indices get cheaper. The first few numbers are always known.
#[derive(Debug)]
pub struct Fibonacci {
    cache: RefCell<FreezingCache<UBig, UBig>>,
}

impl Fibonacci {
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// The cache configuration used when none is given.
    pub fn default_config() -> CacheConfig {
        CacheConfig::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub(crate) fn new(config: CacheConfig) -> Self {
        let seed = SEED
            .iter()
            .enumerate()
            .map(|(index, value)| (UBig::from(index), UBig::from(*value)));
        Fibonacci {
            cache: RefCell::new(FreezingCache::seeded(config, seed)),
        }
    }

    fn remember(&self, index: &UBig, value: &UBig) {
        let mut cache = self.cache.borrow_mut();
        if cache.is_accepting() {
            cache.insert(index.clone(), value.clone());
        }
    }

    fn recall(&self, index: &UBig) -> Option<UBig> {
        self.cache.borrow().get(index).cloned()
    }

    pub(crate) fn value(&self, index: &UBig) -> UBig {
        if let Some(value) = self.recall(index) {
            return value;
        }
        // (F(m-1), F(m), F(m+1)), starting at m = 1, the top bit of index
        let (mut prev, mut cur, mut next) = (ubig!(0), ubig!(1), ubig!(1));
        let mut m = ubig!(1);
        for bit in (0..index.bit_len().saturating_sub(1)).rev() {
            let odd = index.bit(bit);
            m <<= 1;
            if odd {
                m += ubig!(1);
            }
            // numbers already on record are taken as they are
            let (new_prev, new_cur, new_next) = if odd {
                // 2m -> 2m + 1
                let new_prev = self
                    .recall(&(&m - ubig!(1)))
                    .unwrap_or_else(|| &cur * (&next + &prev));
                let new_cur = self
                    .recall(&m)
                    .unwrap_or_else(|| &next * &next + &cur * &cur);
                let new_next = self
                    .recall(&(&m + ubig!(1)))
                    .unwrap_or_else(|| &new_prev + &new_cur);
                (new_prev, new_cur, new_next)
            } else {
                // m -> 2m
                let new_prev = self
                    .recall(&(&m - ubig!(1)))
                    .unwrap_or_else(|| &cur * &cur + &prev * &prev);
                let new_cur = self
                    .recall(&m)
                    .unwrap_or_else(|| &cur * (&next + &prev));
                let new_next = self
                    .recall(&(&m + ubig!(1)))
                    .unwrap_or_else(|| &next * &next + &cur * &cur);
                (new_prev, new_cur, new_next)
            };
            prev = new_prev;
            cur = new_cur;
            next = new_next;
            tracing::trace!(%m, "fibonacci doubling step");
            self.remember(&(&m - ubig!(1)), &prev);
            self.remember(&m, &cur);
            self.remember(&(&m + ubig!(1)), &next);
        }
        cur
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl Clone for Fibonacci {
    // a clone starts over with just the seed
    fn clone(&self) -> Self {
        Fibonacci::new(self.cache.borrow().config())
    }
}

impl SequenceCore for Fibonacci {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Fibonacci
    }

    fn length(&self) -> Length {
        Length::Infinite
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        Ok(Item::Integer(IBig::from(self.value(index))))
    }

    fn deep_clone(&self, _memo: &mut CloneMemo) -> Self {
        self.clone()
    }
}
