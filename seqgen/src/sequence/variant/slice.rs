use ibig::{ibig, ubig, IBig, UBig};

use crate::error;
use crate::item::Item;
use crate::length::Length;
use crate::numeric::progression_length;
use crate::sequence::clone::CloneMemo;
use crate::sequence::traits::SequenceCore;
use crate::sequence::{Sequence, SequenceKind};

/// A strided window onto another sequence.
///
/// Bounds follow host slice conventions. Over a finite sequence negative
/// bounds count from the end and out of range bounds are clamped; once
/// constructed, every position the slice produces is a valid index into
/// the underlying sequence.
#[derive(Debug, Clone)]
pub struct Slice {
    sequence: Sequence,
    start: IBig,
    // `None` only for an open-ended slice over an infinite sequence
    stop: Option<IBig>,
    step: IBig,
    length: Length,
}

fn invalid(reason: &str) -> error::Error {
    error::Error::invalid_argument(SequenceKind::Slice, reason)
}

/// Clamp a possibly negative bound against a finite length.
fn adjust(bound: IBig, length: &IBig, lower: &IBig, upper: &IBig) -> IBig {
    let bound = if bound < ibig!(0) { bound + length } else { bound };
    if bound < *lower {
        lower.clone()
    } else if bound > *upper {
        upper.clone()
    } else {
        bound
    }
}

impl Slice {
    pub(crate) fn new(
        sequence: Sequence,
        start: Option<IBig>,
        stop: Option<IBig>,
        step: Option<IBig>,
    ) -> error::Result<Self> {
        let step = step.unwrap_or(ibig!(1));
        if step == ibig!(0) {
            return Err(invalid("step must not be zero"));
        }
        let forward = step > ibig!(0);
        let (start, stop, length) = match sequence.length() {
            Length::Finite(n) => {
                let n = IBig::from(n);
                let (lower, upper) = if forward {
                    (ibig!(0), n.clone())
                } else {
                    (ibig!(-1), &n - ibig!(1))
                };
                let start = match start {
                    Some(start) => adjust(start, &n, &lower, &upper),
                    None if forward => lower.clone(),
                    None => upper.clone(),
                };
                let stop = match stop {
                    Some(stop) => adjust(stop, &n, &lower, &upper),
                    None if forward => upper,
                    None => lower,
                };
                let length = Length::Finite(progression_length(&start, &stop, &step));
                (start, Some(stop), length)
            }
            Length::Infinite => {
                if start.as_ref().is_some_and(|start| *start < ibig!(0))
                    || stop.as_ref().is_some_and(|stop| *stop < ibig!(0))
                {
                    return Err(invalid("an infinite sequence has no end to count back from"));
                }
                if forward {
                    let start = start.unwrap_or(ibig!(0));
                    match stop {
                        Some(stop) => {
                            let length = Length::Finite(progression_length(&start, &stop, &step));
                            (start, Some(stop), length)
                        }
                        None => (start, None, Length::Infinite),
                    }
                } else {
                    let start = start.ok_or_else(|| {
                        invalid("a reversed slice of an infinite sequence needs a start")
                    })?;
                    let stop = stop.unwrap_or(ibig!(-1));
                    let length = Length::Finite(progression_length(&start, &stop, &step));
                    (start, Some(stop), length)
                }
            }
        };
        Ok(Slice {
            sequence,
            start,
            stop,
            step,
            length,
        })
    }
}

impl SequenceCore for Slice {
    fn kind(&self) -> SequenceKind {
        SequenceKind::Slice
    }

    fn length(&self) -> Length {
        self.length.clone()
    }

    fn get_unchecked(&self, index: &UBig) -> error::Result<Item> {
        let value = &self.start + &self.step * IBig::from(index.clone());
        let in_window = match &self.stop {
            Some(stop) => {
                if self.step > ibig!(0) {
                    value < *stop
                } else {
                    value > *stop
                }
            }
            None => true,
        };
        let position = UBig::try_from(value).ok().filter(|_| in_window);
        match position {
            Some(position) => self.sequence.fetch(&position),
            None => Err(error::Error::IndexOutOfBounds {
                kind: self.kind(),
                index: index.clone().into(),
                length: self.length.finite().cloned().unwrap_or_else(|| ubig!(0)),
            }),
        }
    }

    fn deep_clone(&self, memo: &mut CloneMemo) -> Self {
        Slice {
            sequence: self.sequence.deep_clone_with(memo),
            start: self.start.clone(),
            stop: self.stop.clone(),
            step: self.step.clone(),
            length: self.length.clone(),
        }
    }
}
