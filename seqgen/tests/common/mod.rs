// not every test file uses every helper
#![allow(dead_code)]

use seqgen::{Item, Sequence};

/// All elements of a finite sequence, comma separated.
pub(crate) fn render(sequence: &Sequence) -> String {
    sequence
        .iter()
        .map(|item| item.unwrap().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The first `n` elements of a (possibly infinite) sequence.
pub(crate) fn render_first(sequence: &Sequence, n: usize) -> String {
    sequence
        .iter()
        .take(n)
        .map(|item| item.unwrap().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn integer(item: &Item) -> i64 {
    i64::try_from(item.to_integer().unwrap()).unwrap()
}

pub(crate) fn integers(sequence: &Sequence) -> Vec<i64> {
    sequence.iter().map(|item| integer(&item.unwrap())).collect()
}

/// A decoded group of integers as a vector.
pub(crate) fn group(item: &Item) -> Vec<i64> {
    item.to_tuple().unwrap().iter().map(integer).collect()
}

pub(crate) fn groups(sequence: &Sequence) -> Vec<Vec<i64>> {
    sequence.iter().map(|item| group(&item.unwrap())).collect()
}

fn extend_permutations(n: i64, r: usize, current: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
    if current.len() == r {
        out.push(current.clone());
        return;
    }
    for i in 0..n {
        if !current.contains(&i) {
            current.push(i);
            extend_permutations(n, r, current, out);
            current.pop();
        }
    }
}

/// `r`-permutations of `0..n` in the order the usual generators produce.
pub(crate) fn reference_permutations(n: i64, r: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    if r as i64 <= n {
        extend_permutations(n, r, &mut Vec::new(), &mut out);
    }
    out
}

fn extend_combinations(
    from: i64,
    n: i64,
    r: usize,
    repeat: bool,
    current: &mut Vec<i64>,
    out: &mut Vec<Vec<i64>>,
) {
    if current.len() == r {
        out.push(current.clone());
        return;
    }
    for i in from..n {
        current.push(i);
        let next = if repeat { i } else { i + 1 };
        extend_combinations(next, n, r, repeat, current, out);
        current.pop();
    }
}

/// `r`-combinations of `0..n` in lexicographic order.
pub(crate) fn reference_combinations(n: i64, r: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    extend_combinations(0, n, r, false, &mut Vec::new(), &mut out);
    out
}

/// `r`-multisets of `0..n` in lexicographic order.
pub(crate) fn reference_combinations_with_replacement(n: i64, r: usize) -> Vec<Vec<i64>> {
    let mut out = Vec::new();
    extend_combinations(0, n, r, true, &mut Vec::new(), &mut out);
    out
}

/// The Cartesian product of `0..radix` for each radix, last varying fastest.
pub(crate) fn reference_product(radices: &[i64]) -> Vec<Vec<i64>> {
    let mut out = vec![Vec::new()];
    for radix in radices {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..*radix).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
    }
    out
}

/// The arithmetic progression from `start` towards `stop`.
pub(crate) fn reference_range(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();
    let mut value = start;
    while (step > 0 && value < stop) || (step < 0 && value > stop) {
        out.push(value);
        value += step;
    }
    out
}

pub(crate) fn naive_fibonacci(k: u32) -> i64 {
    if k < 2 {
        k as i64
    } else {
        naive_fibonacci(k - 1) + naive_fibonacci(k - 2)
    }
}
