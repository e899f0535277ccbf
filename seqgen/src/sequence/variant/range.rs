use ibig::{ibig, IBig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::numeric::progression_length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::SequenceKind;

/// An arithmetic progression `start, start + step, ...` up to `stop`.
///
/// `stop` is exclusive. Without a stop the progression is open-ended and
/// infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    start: IBig,
    stop: Option<IBig>,
    step: IBig,
    length: Length,
}

impl Range {
    pub(crate) fn new(start: IBig, stop: Option<IBig>, step: IBig) -> error::Result<Self> {
        if step == ibig!(0) {
            return Err(error::Error::invalid_argument(
                SequenceKind::Range,
                "step must not be zero",
            ));
        }
        let length = match &stop {
            Some(stop) => Length::Finite(progression_length(&start, stop, &step)),
            None => {
                // an open range can only go up, towards infinity
                if step < ibig!(0) {
                    return Err(error::Error::invalid_argument(
                        SequenceKind::Range,
                        "an open-ended range needs a positive step",
                    ));
                }
                Length::Infinite
            }
        };
        Ok(Range {
            start,
            stop,
            step,
            length,
        })
    }

    /// `start..stop` by one, which can't fail.
    pub(crate) fn ascending(start: IBig, stop: IBig) -> Self {
        let step = ibig!(1);
        let length = Length::Finite(progression_length(&start, &stop, &step));
        Range {
            start,
            stop: Some(stop),
            step,
            length,
        }
    }
}

/// Position of `value` in the progression `start + step * i`, if any.
pub(crate) fn progression_position(
    value: &IBig,
    start: &IBig,
    step: &IBig,
    length: &Length,
) -> Option<UBig> {
    let distance = value - start;
    let position = if *step == ibig!(0) {
        if distance == ibig!(0) {
            ibig!(0)
        } else {
            return None;
        }
    } else {
        if &distance % step != ibig!(0) {
            return None;
        }
        distance / step
    };
    let position = UBig::try_from(position).ok()?;
    length.covers(&position).then_some(position)
}

impl SequenceCore for Range {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Range
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let value = &self.start + &self.step * IBig::from(index.clone());
        Ok(value.into())
    }

    fn deep_clone(&self, _memo: &mut CloneMemo) -> Self {
        self.clone()
    }

    fn index_of(&self, item: &Item) -> error::Result<UBig> {
        let Item::Integer(value) = item else {
            return Err(error::Error::NotFound { kind: self.kind() });
        };
        progression_position(value, &self.start, &self.step, &self.length)
            .ok_or(error::Error::NotFound { kind: self.kind() })
    }
}
