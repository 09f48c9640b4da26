pub mod bench;
pub mod error;
pub mod memoizer;
pub mod numerics;
pub mod tracer;
