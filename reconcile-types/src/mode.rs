use serde::{Deserialize, Serialize};

/// How much an observed record is trusted during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Standalone read-refresh: the remote system is the sole source of
    /// truth, and attributes it reports as empty are allowed to go empty.
    Authoritative,
    /// Read following a write: the observed record only echoes what was
    /// requested, so user-declared attributes the server stays silent about
    /// (write-only or redacted ones) are kept from state.
    Echo,
}

impl MergeMode {
    /// Returns true for [`MergeMode::Authoritative`].
    #[must_use]
    pub const fn is_authoritative(self) -> bool {
        matches!(self, Self::Authoritative)
    }
}

impl From<bool> for MergeMode {
    fn from(observed_is_authoritative: bool) -> Self {
        if observed_is_authoritative {
            Self::Authoritative
        } else {
            Self::Echo
        }
    }
}
