//! Caller identity for privilege checks.

use serde::{Deserialize, Serialize};

/// The party invoking a library operation.
///
/// Authentication happens outside this crate; all the library needs to know
/// is whether the caller may mutate the catalogue.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Caller {
    privileged: bool,
}

impl Caller {
    /// A caller allowed to scan and edit the library.
    pub fn privileged() -> Self {
        Self { privileged: true }
    }

    /// A read-only caller.
    pub fn anonymous() -> Self {
        Self { privileged: false }
    }

    /// Whether the caller may run mutating operations.
    pub fn is_privileged(&self) -> bool {
        self.privileged
    }
}
