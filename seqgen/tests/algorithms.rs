use std::collections::HashSet;

use ibig::UBig;
use insta::assert_snapshot;
use rstest::rstest;

use seqgen::{Arities, CacheConfig, Error, Fibonacci, Item, Sequence, SequenceKind};

mod common;

use common::{
    group, groups, integer, naive_fibonacci, reference_combinations,
    reference_combinations_with_replacement, reference_permutations, render,
};

#[test]
fn test_permutations_of_three() {
    let permutations = Sequence::permutations(Sequence::wrap(0..3), None).unwrap();
    assert_eq!(permutations.length(), 6usize);
    assert_snapshot!(
        render(&permutations),
        @"(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)"
    );
}

#[rstest]
fn test_permutations_match_reference(
    #[values(0, 1, 2, 3, 4, 5)] n: i64,
    #[values(0, 1, 2, 3, 6)] r: usize,
) {
    let permutations = Sequence::permutations(Sequence::range(0, n, 1).unwrap(), Some(r)).unwrap();
    let expected = reference_permutations(n, r);
    assert_eq!(permutations.length(), expected.len());
    let decoded = groups(&permutations);
    let distinct: HashSet<&Vec<i64>> = decoded.iter().collect();
    assert_eq!(distinct.len(), decoded.len());
    assert_eq!(decoded, expected);
}

#[test]
fn test_permutations_of_items() {
    let pool = Sequence::wrap(vec!["a", "b", "c"]);
    let permutations = Sequence::permutations(&pool, Some(2)).unwrap();
    assert_eq!(permutations.get(3).unwrap().to_string(), r#"("b", "c")"#);
    assert_eq!(permutations.get(-1).unwrap().to_string(), r#"("c", "b")"#);
}

#[test]
fn test_permutations_of_large_pool() {
    let pool = Sequence::range(0, 30, 1).unwrap();
    let permutations = Sequence::permutations(&pool, None).unwrap();
    // 30!
    assert_eq!(
        permutations.length().to_string(),
        "265252859812191058636308480000000"
    );
    let last = permutations.get(-1).unwrap();
    assert_eq!(group(&last), (0..30).rev().collect::<Vec<i64>>());
}

#[test]
fn test_combinations_of_five() {
    let combinations = Sequence::combinations(Sequence::wrap(0..5), 2).unwrap();
    assert_eq!(combinations.length(), 10usize);
    assert_eq!(combinations.get(0).unwrap().to_string(), "(0, 1)");
    assert_eq!(combinations.get(9).unwrap().to_string(), "(3, 4)");
    assert_snapshot!(
        render(&combinations),
        @"(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)"
    );
}

#[rstest]
fn test_combinations_match_reference(
    #[values(0, 1, 2, 4, 6)] n: i64,
    #[values(0, 1, 2, 3, 6, 7)] r: usize,
) {
    let combinations = Sequence::combinations(Sequence::range(0, n, 1).unwrap(), r).unwrap();
    let expected = reference_combinations(n, r);
    assert_eq!(combinations.length(), expected.len());
    assert_eq!(groups(&combinations), expected);
}

#[rstest]
fn test_combinations_with_replacement_match_reference(
    #[values(0, 1, 2, 4)] n: i64,
    #[values(0, 1, 2, 3)] r: usize,
) {
    let combinations =
        Sequence::combinations_with_replacement(Sequence::range(0, n, 1).unwrap(), r).unwrap();
    let expected = reference_combinations_with_replacement(n, r);
    assert_eq!(combinations.length(), expected.len());
    let decoded = groups(&combinations);
    for group in &decoded {
        assert!(group.windows(2).all(|pair| pair[0] <= pair[1]));
    }
    assert_eq!(decoded, expected);
}

#[test]
fn test_combinations_with_replacement_length() {
    let combinations =
        Sequence::combinations_with_replacement(Sequence::wrap(0..10), 4).unwrap();
    // C(13, 4)
    assert_eq!(combinations.length(), 715usize);
    assert_eq!(combinations.get(-1).unwrap().to_string(), "(9, 9, 9, 9)");
}

#[test]
fn test_combinatorics_reject_infinite_pool() {
    let count = Sequence::count(0, 1);
    assert_eq!(
        Sequence::permutations(&count, Some(2)).unwrap_err(),
        Error::InfiniteNotSupported {
            kind: SequenceKind::Permutations
        }
    );
    assert_eq!(
        Sequence::combinations(&count, 2).unwrap_err(),
        Error::InfiniteNotSupported {
            kind: SequenceKind::Combinations
        }
    );
    assert_eq!(
        Sequence::combinations_with_replacement(&count, 2).unwrap_err(),
        Error::InfiniteNotSupported {
            kind: SequenceKind::CombinationsWithReplacement
        }
    );
    assert_eq!(
        Sequence::permutation_range(&count, Arities::all()).unwrap_err(),
        Error::InfiniteNotSupported {
            kind: SequenceKind::PermutationRange
        }
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(5)]
fn test_permutation_range_matches_reference(#[case] n: i64) {
    let sweep =
        Sequence::permutation_range(Sequence::range(0, n, 1).unwrap(), Arities::all()).unwrap();
    let expected: Vec<Vec<i64>> = (0..=n as usize)
        .flat_map(|r| reference_permutations(n, r))
        .collect();
    assert_eq!(sweep.kind(), SequenceKind::PermutationRange);
    assert_eq!(sweep.length(), expected.len());
    assert_eq!(groups(&sweep), expected);
}

#[rstest]
#[case(0..5, vec![0, 1, 2, 3, 4])]
#[case(1..3, vec![1, 2])]
#[case(3..10, vec![3, 4])]
fn test_combination_range_matches_reference(
    #[case] arities: std::ops::Range<usize>,
    #[case] expected_arities: Vec<usize>,
) {
    let sweep = Sequence::combination_range(Sequence::wrap(0..4), arities).unwrap();
    let expected: Vec<Vec<i64>> = expected_arities
        .into_iter()
        .flat_map(|r| reference_combinations(4, r))
        .collect();
    assert_eq!(sweep.length(), expected.len());
    assert_eq!(groups(&sweep), expected);
}

#[test]
fn test_combination_range_order() {
    let sweep = Sequence::combination_range(Sequence::wrap(0..3), 0..=3usize).unwrap();
    assert_snapshot!(
        render(&sweep),
        @"(), (0,), (1,), (2,), (0, 1), (0, 2), (1, 2), (0, 1, 2)"
    );
}

#[test]
fn test_fibonacci_matches_naive() {
    let cached = Sequence::fibonacci(Fibonacci::default_config());
    let uncached = Sequence::fibonacci(CacheConfig::disabled());
    for k in 0..=30u32 {
        let expected = naive_fibonacci(k);
        assert_eq!(integer(&cached.get(k).unwrap()), expected, "F({})", k);
        assert_eq!(integer(&uncached.get(k).unwrap()), expected, "F({})", k);
    }
}

#[test]
fn test_fibonacci_out_of_order() {
    let fibonacci = Sequence::fibonacci(CacheConfig::with_capacity(20));
    let order = [30u32, 2, 17, 29, 11, 30, 0, 25, 12, 1, 17, 28, 30, 19];
    for _ in 0..2 {
        for k in order {
            assert_eq!(integer(&fibonacci.get(k).unwrap()), naive_fibonacci(k));
        }
    }
}

#[test]
fn test_fibonacci_large() {
    let fibonacci = Sequence::fibonacci(Fibonacci::default_config());
    assert!(fibonacci.is_infinite());
    let value = fibonacci.get(1000).unwrap().to_integer().unwrap();
    let value = UBig::try_from(value).unwrap();
    // F(1000) has 209 digits
    assert_eq!(value.to_string().len(), 209);
    let previous = UBig::try_from(fibonacci.get(999).unwrap().to_integer().unwrap()).unwrap();
    let before = UBig::try_from(fibonacci.get(998).unwrap().to_integer().unwrap()).unwrap();
    assert_eq!(value, previous + before);
    assert!(matches!(
        fibonacci.get(-1),
        Err(Error::NegativeIndexOnInfinite {
            kind: SequenceKind::Fibonacci,
            ..
        })
    ));
}

#[test]
fn test_fibonacci_clone_is_independent() {
    let fibonacci = Sequence::fibonacci(Fibonacci::default_config());
    let clone = fibonacci.deep_clone();
    assert_eq!(clone.get(50).unwrap(), fibonacci.get(50).unwrap());
    assert_eq!(clone.get(50).unwrap(), Item::from(12586269025i64));
}
