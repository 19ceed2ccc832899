// crates/shared-kernel/src/constants.rs
//! Identity values of the application.
//!
//! Every other crate in the workspace re-exports these items instead of
//! declaring its own copies.

/// Release version, taken from `[workspace.package]` in the root manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Distribution name of the package.
pub const PACKAGE_NAME: &str = "mcp-shared-memory";

/// Name of the installed command.
pub const CLI_NAME: &str = "mcp-shared-memory";

const _: () = {
    assert!(!VERSION.is_empty());
    assert!(!PACKAGE_NAME.is_empty());
    assert!(!CLI_NAME.is_empty());
};
