//! Command line interface of the benchmark driver.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Benchmark {
    Fact,
    Fib,
    Interest,
    All,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(value_enum, help = "Which comparison to run")]
    pub benchmark: Benchmark,

    #[arg(
        value_name = "N",
        default_value_t = 20,
        help = "Input for the factorial and Fibonacci kernels"
    )]
    pub n: u64,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity level"
    )]
    pub verbosity: u8,

    #[arg(
        long,
        short = 'l',
        value_name = "LOG_FILE",
        help = "Optional path to the log file. Defaults to stderr if not specified."
    )]
    pub log_output: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "REPORT_FILE",
        help = "Where to write the report; defaults to stdout."
    )]
    pub output_path: Option<PathBuf>,

    #[arg(
        long,
        default_value_t = 1000.0,
        help = "Principal for the interest benchmark"
    )]
    pub principal: f64,

    #[arg(
        long,
        default_value_t = 0.05,
        help = "Yearly rate for the interest benchmark"
    )]
    pub rate: f64,

    #[arg(long, default_value_t = 30, help = "Years for the interest benchmark")]
    pub years: u32,
}
