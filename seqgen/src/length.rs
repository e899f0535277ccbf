use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use ibig::{ubig, IBig, UBig};

use crate::error;
use crate::sequence::SequenceKind;

/// The length of a sequence: a non-negative integer or infinity.
///
/// Infinity absorbs addition, and multiplication by anything but zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Length {
    Finite(UBig),
    Infinite,
}

impl Length {
    pub fn zero() -> Self {
        Length::Finite(ubig!(0))
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Length::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Length::Infinite)
    }

    /// True if this is a finite length of zero.
    pub fn is_empty(&self) -> bool {
        match self {
            Length::Finite(n) => *n == ubig!(0),
            Length::Infinite => false,
        }
    }

    /// The finite length, if there is one.
    pub fn finite(&self) -> Option<&UBig> {
        match self {
            Length::Finite(n) => Some(n),
            Length::Infinite => None,
        }
    }

    /// The finite length, or `InfiniteNotSupported` on behalf of `kind`.
    pub(crate) fn require_finite(&self, kind: SequenceKind) -> error::Result<&UBig> {
        self.finite()
            .ok_or(error::Error::InfiniteNotSupported { kind })
    }

    /// Whether a non-negative index falls inside `[0, length)`.
    pub fn covers(&self, index: &UBig) -> bool {
        match self {
            Length::Finite(n) => index < n,
            Length::Infinite => true,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::zero()
    }
}

impl From<UBig> for Length {
    fn from(n: UBig) -> Self {
        Length::Finite(n)
    }
}

impl From<usize> for Length {
    fn from(n: usize) -> Self {
        Length::Finite(UBig::from(n))
    }
}

impl From<u64> for Length {
    fn from(n: u64) -> Self {
        Length::Finite(UBig::from(n))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Finite(n) => write!(f, "{}", n),
            Length::Infinite => write!(f, "inf"),
        }
    }
}

impl Ord for Length {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Length::Finite(a), Length::Finite(b)) => a.cmp(b),
            (Length::Finite(_), Length::Infinite) => Ordering::Less,
            (Length::Infinite, Length::Finite(_)) => Ordering::Greater,
            (Length::Infinite, Length::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<UBig> for Length {
    fn eq(&self, other: &UBig) -> bool {
        match self {
            Length::Finite(n) => n == other,
            Length::Infinite => false,
        }
    }
}

impl PartialEq<usize> for Length {
    fn eq(&self, other: &usize) -> bool {
        *self == UBig::from(*other)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, other: Length) -> Length {
        match (self, other) {
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a + b),
            _ => Length::Infinite,
        }
    }
}

impl<'a> Add<&'a Length> for &'a Length {
    type Output = Length;

    fn add(self, other: &Length) -> Length {
        match (self, other) {
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a + b),
            _ => Length::Infinite,
        }
    }
}

impl Mul for Length {
    type Output = Length;

    fn mul(self, other: Length) -> Length {
        match (self, other) {
            (Length::Finite(a), Length::Finite(b)) => Length::Finite(a * b),
            // zero times anything is still nothing
            (Length::Finite(a), Length::Infinite) | (Length::Infinite, Length::Finite(a))
                if a == ubig!(0) =>
            {
                Length::zero()
            }
            _ => Length::Infinite,
        }
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Length>>(iter: I) -> Self {
        iter.fold(Length::zero(), |acc, l| acc + l)
    }
}

impl Product for Length {
    fn product<I: Iterator<Item = Length>>(iter: I) -> Self {
        iter.fold(Length::Finite(ubig!(1)), |acc, l| acc * l)
    }
}

/// Resolve a signed index against a length.
///
/// Negative indices count from the end of a finite length. The result is
/// guaranteed to lie inside `[0, length)`.
pub(crate) fn resolve_index(
    index: &IBig,
    length: &Length,
    kind: SequenceKind,
) -> error::Result<UBig> {
    let resolved = if *index < IBig::from(0u8) {
        match length {
            Length::Finite(n) => IBig::from(n.clone()) + index,
            Length::Infinite => {
                return Err(error::Error::NegativeIndexOnInfinite {
                    kind,
                    index: index.clone(),
                })
            }
        }
    } else {
        index.clone()
    };
    let out_of_bounds = || error::Error::IndexOutOfBounds {
        kind,
        index: index.clone(),
        length: length.finite().cloned().unwrap_or_else(|| ubig!(0)),
    };
    let resolved = UBig::try_from(resolved).map_err(|_| out_of_bounds())?;
    if length.covers(&resolved) {
        Ok(resolved)
    } else {
        Err(out_of_bounds())
    }
}
