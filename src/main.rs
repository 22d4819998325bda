use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
};

use clap::Parser;
use linterp::interpreter::{
    engine::{
        config::{DEFAULT_MAX_LINES, DEFAULT_MAX_STACK, EngineConfig},
        core::Interpreter,
    },
    evaluator::core::DEFAULT_MAX_DEPTH,
    function::core::register_library,
    symbols::DEFAULT_SYMBOL_CAPACITY,
};
use tracing_subscriber::{EnvFilter, fmt};

/// linterp runs line-oriented scripts: each line calls a function, blocks are
/// closed with `end`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    file: PathBuf,

    /// Number of symbol-table slots, natives included.
    #[arg(long, default_value_t = DEFAULT_SYMBOL_CAPACITY)]
    max_symbols: usize,

    /// Number of cells shared by the argument and call stacks.
    #[arg(long, default_value_t = DEFAULT_MAX_STACK)]
    max_stack: usize,

    /// Number of lines the program can hold.
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Deepest nesting of parentheses inside one expression.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Seed for `rand`, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> EngineConfig {
        EngineConfig { max_symbols:    self.max_symbols,
                       max_lines:      self.max_lines,
                       max_stack:      self.max_stack,
                       max_expr_depth: self.max_depth,
                       seed:           self.seed, }
    }
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls the log level; warnings and up by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let file = File::open(&args.file).unwrap_or_else(|_| {
                                         eprintln!("Could not open file '{}'. Perhaps this file does not exist?",
                                                   args.file.display());
                                         std::process::exit(1);
                                     });

    let mut interp = Interpreter::new(args.config()).unwrap_or_else(|e| {
                                                        eprintln!("{e}");
                                                        std::process::exit(1);
                                                    });
    if let Err(e) = register_library(&mut interp) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let fed = interp.feed_reader(BufReader::new(file), |e| eprintln!("Error: {} ({e})", e.code()));
    if let Err(e) = fed {
        eprintln!("Failed to read '{}': {e}", args.file.display());
        std::process::exit(1);
    }
}
