// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use mcp_shared_memory::cli::Args;
use mcp_shared_memory::{ApplicationIdentity, logging, presentation};
use mcp_shared_memory_shared_kernel::{ErrorContext, Result};

fn run() -> Result<()> {
    let identity = ApplicationIdentity::current();
    log::debug!("starting {}", presentation::banner(&identity));

    let stdout = io::stdout();
    presentation::write_identity(&mut stdout.lock(), &identity).context("printing identity")
}

fn main() -> ExitCode {
    logging::init();
    let _args = Args::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
