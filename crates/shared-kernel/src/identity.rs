// crates/shared-kernel/src/identity.rs
use std::fmt;

use serde::Serialize;

use crate::constants::{CLI_NAME, PACKAGE_NAME, VERSION};

/// Name and version under which the application presents itself.
///
/// Serializes as `{"version": .., "packageName": .., "cliName": ..}`, the
/// shape expected by handshake payloads that identify a client or server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationIdentity {
    version: &'static str,
    package_name: &'static str,
    cli_name: &'static str,
}

impl ApplicationIdentity {
    pub const CURRENT: Self = Self {
        version: VERSION,
        package_name: PACKAGE_NAME,
        cli_name: CLI_NAME,
    };

    #[inline]
    pub const fn current() -> Self {
        Self::CURRENT
    }

    #[inline]
    pub const fn version(&self) -> &'static str {
        self.version
    }

    #[inline]
    pub const fn package_name(&self) -> &'static str {
        self.package_name
    }

    #[inline]
    pub const fn cli_name(&self) -> &'static str {
        self.cli_name
    }
}

impl Default for ApplicationIdentity {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// Matches the `--version` line printed by the binary.
impl fmt::Display for ApplicationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cli_name, self.version)
    }
}
