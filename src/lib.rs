// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logging;
pub mod presentation;
pub mod version;

pub use mcp_shared_memory_shared_kernel::{ApplicationIdentity, SharedMemoryError};
pub use version::{CLI_NAME, PACKAGE_NAME, VERSION};
