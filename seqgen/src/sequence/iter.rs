use ibig::{ubig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;

use super::Sequence;

/// A pull-based cursor over a sequence.
///
/// Each step fetches the element at the current position and advances.
/// Over an infinite sequence this never returns `None`.
#[derive(Debug, Clone)]
pub struct SequenceIter {
    sequence: Sequence,
    length: Length,
    position: UBig,
}

impl SequenceIter {
    pub(crate) fn new(sequence: Sequence) -> Self {
        let length = sequence.length();
        Self {
            sequence,
            length,
            position: ubig!(0),
        }
    }

    /// Move the cursor back to the start.
    pub fn reset(&mut self) {
        self.position = ubig!(0);
    }

    /// The position of the next element.
    pub fn position(&self) -> &UBig {
        &self.position
    }
}

impl Iterator for SequenceIter {
    type Item = error::Result<Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.length.covers(&self.position) {
            return None;
        }
        let item = self.sequence.fetch(&self.position);
        self.position += ubig!(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.length {
            Length::Finite(length) => {
                let remaining = if self.position < *length {
                    length - &self.position
                } else {
                    ubig!(0)
                };
                match usize::try_from(&remaining) {
                    Ok(remaining) => (remaining, Some(remaining)),
                    Err(_) => (usize::MAX, None),
                }
            }
            Length::Infinite => (usize::MAX, None),
        }
    }
}
