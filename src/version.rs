// src/version.rs
//! Identity constants of the application.
//!
//! The values are defined once in the shared kernel; this module only
//! re-exports them so the binary and its library agree by construction.

pub use mcp_shared_memory_shared_kernel::constants::{CLI_NAME, PACKAGE_NAME, VERSION};
