use ibig::UBig;

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// The Cartesian product of finite sequences.
///
/// Elements are tuples with one item per factor. The rightmost factor
/// varies fastest.
#[derive(Debug, Clone)]
pub struct Product {
    factors: Vec<Sequence>,
    radices: Vec<UBig>,
    length: Length,
}

impl Product {
    /// The product of `factors`, with the list of factors repeated
    /// `repeat` times.
    pub(crate) fn new(factors: Vec<Sequence>, repeat: usize) -> error::Result<Self> {
        let too_many =
            || error::Error::invalid_argument(SequenceKind::Product, "too many factors to repeat");
        let dimension = factors.len().checked_mul(repeat).ok_or_else(too_many)?;
        let mut expanded = Vec::new();
        expanded
            .try_reserve_exact(dimension)
            .map_err(|_| too_many())?;
        expanded.extend(factors.iter().cycle().take(dimension).cloned());
        let radices = expanded
            .iter()
            .map(|factor| {
                factor
                    .length()
                    .require_finite(SequenceKind::Product)
                    .cloned()
            })
            .collect::<error::Result<Vec<_>>>()?;
        let length = radices.iter().cloned().map(Length::Finite).product();
        Ok(Product {
            factors: expanded,
            radices,
            length,
        })
    }
}

impl SequenceCore for Product {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Product
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        // mixed radix decoding, starting with the last factor
        let mut rest = index.clone();
        let mut items = Vec::with_capacity(self.factors.len());
        for (factor, radix) in self.factors.iter().zip(&self.radices).rev() {
            items.push(factor.fetch(&(&rest % radix))?);
            rest = rest / radix;
        }
        items.reverse();
        Ok(items.into())
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Product {
            factors: self
                .factors
                .iter()
                .map(|factor| factor.deep_clone_with(memo))
                .collect(),
            radices: self.radices.clone(),
            length: self.length.clone(),
        }
    }
}
