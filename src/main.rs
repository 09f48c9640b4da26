use std::fs::File;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::error;

use memotrace::bench;

mod cli;
mod logging;

use cli::Benchmark;

fn main() {
    // parse CLI arguments
    let args = cli::Args::parse();

    // set up logging
    logging::setup_logger(args.verbosity, args.log_output.clone());

    // create a writer for the report
    let mut out_writer = match &args.output_path {
        Some(path) => {
            let file = match File::create(path) {
                Ok(file) => file,
                Err(why) => {
                    error!("couldn't create {}: {}", path.display(), why);
                    process::exit(1);
                }
            };
            Box::new(file) as Box<dyn Write>
        }
        None => Box::new(io::stdout()) as Box<dyn Write>,
    };

    if let Err(why) = run(&args, &mut out_writer) {
        error!("{}", why);
        process::exit(1);
    }
}

fn run(args: &cli::Args, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    match args.benchmark {
        Benchmark::Fact => {
            write!(out, "{}", bench::bench_factorial(args.n)?)?;
        }
        Benchmark::Fib => {
            write!(out, "{}", bench::bench_fib(args.n)?)?;
        }
        Benchmark::Interest => {
            write!(
                out,
                "{}",
                bench::bench_interest(args.principal, args.rate, args.years)
            )?;
        }
        Benchmark::All => {
            write!(out, "{}", bench::bench_factorial(args.n)?)?;
            write!(out, "{}", bench::bench_fib(args.n)?)?;
            write!(
                out,
                "{}",
                bench::bench_interest(args.principal, args.rate, args.years)
            )?;
        }
    }
    Ok(())
}
