// src/cli/args.rs
use clap::Parser;

use crate::version::{CLI_NAME, VERSION};

/// Command line surface. Only clap's built-in `--help` and `--version` are accepted.
#[derive(Parser, Debug)]
#[command(
    name = CLI_NAME,
    bin_name = CLI_NAME,
    version = VERSION,
    about = "Print the identity of the mcp-shared-memory server as JSON"
)]
pub struct Args {}
