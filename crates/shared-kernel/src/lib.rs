// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use constants::{CLI_NAME, PACKAGE_NAME, VERSION};
pub use error::{ErrorContext, PresentationError, PresentationResult, Result, SharedMemoryError};
pub use identity::ApplicationIdentity;

pub mod constants;
pub mod error;
pub mod identity;
