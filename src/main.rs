//! arenalog binary entry point. All logic lives in the library.

use clap::Parser;

use arenalog::cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = arenalog_core::logging::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    if let Err(e) = arenalog::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
