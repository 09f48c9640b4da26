//! Toy numeric kernels, each written twice: once imperatively or by direct
//! recursion, once in iterator/fold style. The `bench` module compares the
//! two renditions on the same inputs.

use cached::proc_macro::cached;
use itertools::Itertools;

use crate::error::Error;

/// Naive doubly recursive Fibonacci. Exponential time, kept as the baseline.
pub fn fib_naive(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_naive(n - 1) + fib_naive(n - 2)
    }
}

/// Fold over the index range, carrying the last two values with checked
/// addition. `fib(93)` is the largest value that fits in a u64.
pub fn fib_fold(n: u64) -> Result<u64, Error> {
    if n == 0 {
        return Ok(0);
    }
    (1..n)
        .try_fold((0u64, 1u64), |(a, b), _| {
            a.checked_add(b)
                .map(|next| (b, next))
                .ok_or_else(|| Error::overflow(format!("fib({})", n)))
        })
        .map(|(_, b)| b)
}

/// Recursive Fibonacci with every intermediate result memoized for the
/// lifetime of the process.
#[cached]
pub fn fib_cached(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_cached(n - 1) + fib_cached(n - 2)
    }
}

/// Direct recursion. Below 2 the argument is returned as-is, so
/// `factorial_rec(0) == 0`.
pub fn factorial_rec(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        n * factorial_rec(n - 1)
    }
}

/// Reduction of `n, n-1, .., 1` by checked multiplication. An empty range
/// (`n == 0`) leaves nothing to reduce and is rejected.
pub fn factorial_fold(n: u64) -> Result<u64, Error> {
    (1..=n)
        .rev()
        .try_fold(None, |acc: Option<u64>, k| match acc {
            None => Ok(Some(k)),
            Some(acc) => acc
                .checked_mul(k)
                .map(Some)
                .ok_or_else(|| Error::overflow(format!("{}!", n))),
        })?
        .ok_or_else(|| Error::invalid_input("factorial_fold needs n >= 1"))
}

/// Maps squaring over a slice.
pub fn squares(xs: &[u64]) -> Vec<u64> {
    xs.iter().map(|x| x * x).collect_vec()
}

/// Maps cubing over a slice.
pub fn cubes(xs: &[u64]) -> Vec<u64> {
    xs.iter().map(|x| x * x * x).collect_vec()
}

/// Left fold by addition. Plain u64 arithmetic: overflow panics in debug
/// builds and wraps in release.
pub fn sum(xs: &[u64]) -> u64 {
    xs.iter().fold(0, |acc, x| acc + x)
}

/// Left fold by multiplication. Plain u64 arithmetic: overflow panics in
/// debug builds and wraps in release.
pub fn product(xs: &[u64]) -> u64 {
    xs.iter().fold(1, |acc, x| acc * x)
}

/// Year-by-year accumulation loop.
pub fn compound_interest_loop(principal: f64, rate: f64, years: u32) -> f64 {
    let mut principal = principal;
    for _ in 0..years {
        let gained = principal * (1.0 + rate) - principal;
        principal += gained;
    }
    principal
}

/// Product of the yearly growth factors. Zero years means an empty product,
/// i.e. no growth, which agrees with the loop rendition.
pub fn compound_interest_fold(principal: f64, rate: f64, years: u32) -> f64 {
    (0..years).map(|_| 1.0 + rate).product::<f64>() * principal
}
