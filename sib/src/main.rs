// src/main.rs
use anyhow::Result;
use clap::Parser;

use sib::{Args, init_tracing, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    run(args)
}
