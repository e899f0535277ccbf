use strum_macros::Display;

/// The concrete kind of a sequence.
///
/// Used in errors and log events to say which sequence was involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SequenceKind {
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
    PermutationRange,
    CombinationRange,
    Fibonacci,
}

