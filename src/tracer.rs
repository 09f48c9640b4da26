use std::time::{Duration, Instant};

use log::info;

/// Wraps a three-argument function and reports its wall-clock running time.
///
/// The wrapped function's result is returned unchanged; the only added
/// behavior is the measurement. The clock stops before the result is looked
/// at, so a function returning `Err` is timed like any other call. Panics are
/// not caught and produce no timing line.
pub struct Tracer<F> {
    label: &'static str,
    inner: F,
}

impl<F> Tracer<F> {
    pub fn new(label: &'static str, inner: F) -> Self {
        Self { label, inner }
    }

    /// Invokes the wrapped function and returns its result together with the
    /// elapsed wall-clock time.
    pub fn measure<A, B, C, R>(&self, a: A, b: B, c: C) -> (R, Duration)
    where
        F: Fn(A, B, C) -> R,
    {
        let start = Instant::now();
        let result = (self.inner)(a, b, c);
        let elapsed = start.elapsed();
        (result, elapsed)
    }

    /// Like [`measure`](Tracer::measure), but logs the duration and returns
    /// only the result.
    pub fn call<A, B, C, R>(&self, a: A, b: B, c: C) -> R
    where
        F: Fn(A, B, C) -> R,
    {
        let (result, elapsed) = self.measure(a, b, c);
        info!("[{}] Timing: {}", self.label, elapsed.as_secs_f64());
        result
    }
}
