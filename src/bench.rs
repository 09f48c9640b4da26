//! Benchmark comparisons between the imperative and functional kernels.
//!
//! Each runner returns a report struct carrying the computed values and the
//! measured durations, so callers can inspect them instead of parsing text.
//! The `Display` impls produce the console lines.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;

use crate::error::Error;
use crate::memoizer::Memoizer;
use crate::numerics;
use crate::tracer::Tracer;

fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

pub struct FactorialReport {
    pub value_rec: u64,
    pub value_fold: u64,
    pub elapsed_rec: Duration,
    pub elapsed_fold: Duration,
}

/// Times the recursive and the fold factorial on the same input.
///
/// Requires `n >= 1`: the fold rendition rejects 0, and the recursive one
/// disagrees with it there anyway (`factorial_rec(0) == 0`).
pub fn bench_factorial(n: u64) -> Result<FactorialReport, Error> {
    // checked rendition first: it rejects inputs the unchecked recursion
    // would overflow on
    let (value_fold, elapsed_fold) = timed(|| numerics::factorial_fold(n));
    let value_fold = value_fold?;
    let (value_rec, elapsed_rec) = timed(|| numerics::factorial_rec(n));

    info!("Test original: {}", elapsed_rec.as_secs_f64());
    info!("Test functional: {}", elapsed_fold.as_secs_f64());

    Ok(FactorialReport {
        value_rec,
        value_fold,
        elapsed_rec,
        elapsed_fold,
    })
}

impl fmt::Display for FactorialReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "factorial: {} (recursive) / {} (fold)",
            self.value_rec, self.value_fold
        )?;
        writeln!(f, "Test original: {}", self.elapsed_rec.as_secs_f64())?;
        writeln!(f, "Test functional: {}", self.elapsed_fold.as_secs_f64())
    }
}

pub struct FibReport {
    pub value_naive: u64,
    pub value_fold: u64,
    pub value_memoized: u64,
    pub elapsed_naive: Duration,
    pub elapsed_fold: Duration,
    pub elapsed_memoized: Duration,
}

/// Times three Fibonacci renditions on the same input: naive recursion, fold,
/// and naive recursion behind a freshly built [`Memoizer`].
///
/// The memoized timing includes building the cache and caches the top-level
/// call only; recursion below it still runs naively. As in
/// [`bench_factorial`], the checked fold runs first and rejects inputs the
/// unchecked recursions would overflow on (`n > 93`).
pub fn bench_fib(n: u64) -> Result<FibReport, Error> {
    let (value_fold, elapsed_fold) = timed(|| numerics::fib_fold(n));
    let value_fold = value_fold?;
    let (value_naive, elapsed_naive) = timed(|| numerics::fib_naive(n));
    let (value_memoized, elapsed_memoized) = timed(|| {
        let mut memo = Memoizer::new(|k: &u64| numerics::fib_naive(*k));
        memo.get(n)
    });

    info!("Regular fib: {}", elapsed_naive.as_secs_f64());
    info!("Fold fib: {}", elapsed_fold.as_secs_f64());
    info!("Memoized fib: {}", elapsed_memoized.as_secs_f64());

    Ok(FibReport {
        value_naive,
        value_fold,
        value_memoized,
        elapsed_naive,
        elapsed_fold,
        elapsed_memoized,
    })
}

impl fmt::Display for FibReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "fib: {} (naive) / {} (fold) / {} (memoized)",
            self.value_naive, self.value_fold, self.value_memoized
        )?;
        writeln!(f, "Regular fib: {}", self.elapsed_naive.as_secs_f64())?;
        writeln!(f, "Fold fib: {}", self.elapsed_fold.as_secs_f64())?;
        writeln!(f, "Memoized fib: {}", self.elapsed_memoized.as_secs_f64())
    }
}

pub struct InterestReport {
    pub value_loop: f64,
    pub value_fold: f64,
    pub elapsed_loop: Duration,
    pub elapsed_fold: Duration,
}

/// Times the two compound interest renditions through [`Tracer`].
pub fn bench_interest(principal: f64, rate: f64, years: u32) -> InterestReport {
    let looped = Tracer::new("interest-loop", numerics::compound_interest_loop);
    let folded = Tracer::new("interest-fold", numerics::compound_interest_fold);

    let (value_loop, elapsed_loop) = looped.measure(principal, rate, years);
    let (value_fold, elapsed_fold) = folded.measure(principal, rate, years);

    info!("Test original: {}", elapsed_loop.as_secs_f64());
    info!("Test functional: {}", elapsed_fold.as_secs_f64());

    InterestReport {
        value_loop,
        value_fold,
        elapsed_loop,
        elapsed_fold,
    }
}

impl fmt::Display for InterestReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "interest: {:.2} (loop) / {:.2} (fold)",
            self.value_loop, self.value_fold
        )?;
        writeln!(f, "Test original: {}", self.elapsed_loop.as_secs_f64())?;
        writeln!(f, "Test functional: {}", self.elapsed_fold.as_secs_f64())
    }
}
