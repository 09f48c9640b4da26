use std::cell::Cell;
use std::thread;
use std::time::Duration;

use memotrace::bench;
use memotrace::error::Error;
use memotrace::memoizer::{Memoizer, TryMemoizer};
use memotrace::numerics;
use memotrace::tracer::Tracer;

#[test]
fn memoize_square_scenario() {
    let calls = Cell::new(0u32);
    let mut square = Memoizer::new(|x: &u64| {
        calls.set(calls.get() + 1);
        x * x
    });

    assert_eq!(square.get(4), 16);
    assert_eq!(square.get(4), 16);
    assert_eq!(calls.get(), 1);
}

#[test]
fn memoized_wrapper_is_functionally_equivalent() {
    let mut fib = Memoizer::new(|n: &u64| numerics::fib_naive(*n));
    for n in 0..15 {
        assert_eq!(fib.get(n), numerics::fib_naive(n));
    }
    // all hits now, still equivalent
    for n in 0..15 {
        assert_eq!(fib.get(n), numerics::fib_naive(n));
    }
    assert_eq!(fib.len(), 15);
}

#[test]
fn fib_scenario() {
    assert_eq!(numerics::fib_naive(10), 55);
    assert_eq!(numerics::fib_fold(10), Ok(55));
    assert_eq!(numerics::fib_cached(10), 55);
    let mut memoized = Memoizer::new(|n: &u64| numerics::fib_naive(*n));
    assert_eq!(memoized.get(10), 55);
}

#[test]
fn factorial_scenario() {
    assert_eq!(numerics::factorial_rec(5), 120);
    assert_eq!(numerics::factorial_fold(5), Ok(120));
}

#[test]
fn failed_computations_are_recomputed() {
    let calls = Cell::new(0u32);
    let mut flaky = TryMemoizer::new(|n: &u64| {
        calls.set(calls.get() + 1);
        if calls.get() == 1 {
            Err(Error::invalid_input("first call always fails"))
        } else {
            Ok(n + 1)
        }
    });

    assert!(flaky.get(3).is_err());
    assert_eq!(flaky.get(3), Ok(4));
    assert_eq!(flaky.get(3), Ok(4));
    assert_eq!(calls.get(), 2);
}

#[test]
fn tracer_preserves_the_wrapped_result() {
    let traced = Tracer::new("interest", numerics::compound_interest_loop);
    let plain = numerics::compound_interest_loop(1000.0, 0.05, 30);
    assert_eq!(traced.call(1000.0, 0.05, 30), plain);
}

#[test]
fn tracer_measures_an_injected_delay() {
    let sleepy = Tracer::new("sleepy", |ms: u64, x: u64, y: u64| {
        thread::sleep(Duration::from_millis(ms));
        x * y
    });
    let (product, elapsed) = sleepy.measure(25, 6, 7);
    assert_eq!(product, 42);
    assert!(elapsed >= Duration::from_millis(25));
}

#[test]
fn benchmark_reports_print_the_comparison_lines() {
    let factorial = bench::bench_factorial(10).unwrap();
    assert_eq!(factorial.value_rec, factorial.value_fold);
    let text = factorial.to_string();
    assert!(text.contains("Test original: "));
    assert!(text.contains("Test functional: "));

    let fib = bench::bench_fib(15).unwrap();
    assert_eq!(fib.value_naive, 610);
    assert_eq!(fib.value_fold, 610);
    assert_eq!(fib.value_memoized, 610);
    let text = fib.to_string();
    assert!(text.contains("Regular fib: "));
    assert!(text.contains("Memoized fib: "));

    let interest = bench::bench_interest(1000.0, 0.05, 30);
    assert!((interest.value_loop - interest.value_fold).abs() < 1e-6);
}

#[test]
fn factorial_benchmark_propagates_kernel_errors() {
    assert!(matches!(
        bench::bench_factorial(0),
        Err(Error::InvalidInput { .. })
    ));
    assert!(matches!(
        bench::bench_factorial(25),
        Err(Error::Overflow { .. })
    ));
}

#[test]
fn fib_benchmark_propagates_kernel_errors() {
    assert_eq!(numerics::fib_fold(93), Ok(12200160415121876738));
    assert!(matches!(numerics::fib_fold(94), Err(Error::Overflow { .. })));
    assert!(matches!(bench::bench_fib(94), Err(Error::Overflow { .. })));
}
