//! Locator configuration.

use serde::{Deserialize, Serialize};

/// How candidate and target values are compared before matching.
///
/// Wire formats are loosely typed, so an identifier may come back as the
/// number `7` when it was declared as the string `"7"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Exact JSON equality; `"7"` does not match `7`.
    Strict,
    /// Both sides rendered to their string form; `"7"` matches `7` but
    /// `"007"` does not.
    #[default]
    StringForm,
    /// Numeric equality when both sides parse as numbers (`"007"` matches
    /// `7`), string form otherwise.
    Numeric,
}

/// Settings for [`Locator`](crate::Locator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    pub normalization: Normalization,
    /// Joins a nested record's key to its member keys when flattening.
    pub separator: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::default(),
            separator: ".".to_string(),
        }
    }
}
