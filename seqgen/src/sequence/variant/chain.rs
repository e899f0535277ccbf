use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// Sequences one after the other.
///
/// Empty members are dropped at construction. Only the last member may
/// be infinite.
#[derive(Debug, Clone)]
pub struct Chain {
    sequences: Vec<Sequence>,
    // ends[i] is the (exclusive) end offset of the i-th finite member
    ends: Vec<UBig>,
    length: Length,
}

impl Chain {
    pub(crate) fn new(sequences: impl IntoIterator<Item = Sequence>) -> error::Result<Self> {
        let sequences: Vec<Sequence> = sequences
            .into_iter()
            .filter(|sequence| !sequence.is_empty())
            .collect();
        let mut ends = Vec::with_capacity(sequences.len());
        let mut total = ubig!(0);
        for (i, sequence) in sequences.iter().enumerate() {
            match sequence.length() {
                Length::Finite(length) => {
                    total += length;
                    ends.push(total.clone());
                }
                Length::Infinite if i + 1 == sequences.len() => {}
                Length::Infinite => {
                    return Err(error::Error::InfiniteNotSupported {
                        kind: SequenceKind::Chain,
                    })
                }
            }
        }
        let length = if ends.len() < sequences.len() {
            Length::Infinite
        } else {
            Length::Finite(total)
        };
        Ok(Chain {
            sequences,
            ends,
            length,
        })
    }
}

impl SequenceCore for Chain {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Chain
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        // the first member that ends after index holds it
        let member = self.ends.partition_point(|end| end <= index);
        let sequence = self
            .sequences
            .get(member)
            .ok_or_else(|| error::Error::IndexOutOfBounds {
                kind: self.kind(),
                index: index.clone().into(),
                length: self.ends.last().cloned().unwrap_or_else(|| ubig!(0)),
            })?;
        let offset = if member == 0 {
            ubig!(0)
        } else {
            self.ends[member - 1].clone()
        };
        sequence.fetch(&(index - offset))
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Chain {
            sequences: self
                .sequences
                .iter()
                .map(|sequence| sequence.deep_clone_with(memo))
                .collect(),
            ends: self.ends.clone(),
            length: self.length.clone(),
        }
    }
}
