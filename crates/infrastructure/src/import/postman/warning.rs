//! Import notes.
//!
//! The importer never fails on missing or odd fields; it applies a default and
//! records what it did here so the host can tell the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How much of the input an import note affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    /// A default was applied; nothing was lost.
    Info,
    /// Input was dropped or replaced.
    Warning,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
        })
    }
}

/// A note about how one part of the input was normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWarning {
    /// Location in the input, e.g. `item[2]` or `item[0].item[1]`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Whether anything was lost.
    pub severity: WarningSeverity,
}

impl ImportWarning {
    /// A default was applied at `path`.
    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: WarningSeverity::Info,
        }
    }

    /// Input at `path` was dropped or replaced.
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: WarningSeverity::Warning,
            ..Self::info(path, message)
        }
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.path, self.message)
    }
}

/// Counts of warnings per severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WarningStats {
    /// Defaults applied.
    pub info_count: usize,
    /// Inputs dropped or replaced.
    pub warning_count: usize,
}

impl WarningStats {
    /// Tallies `warnings` by severity.
    #[must_use]
    pub fn from_warnings(warnings: &[ImportWarning]) -> Self {
        let mut stats = Self::default();
        for warning in warnings {
            match warning.severity {
                WarningSeverity::Info => stats.info_count += 1,
                WarningSeverity::Warning => stats.warning_count += 1,
            }
        }
        stats
    }

    /// Number of notes of either severity.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info_count + self.warning_count
    }

    /// Whether any input was dropped or replaced.
    #[must_use]
    pub const fn has_losses(&self) -> bool {
        self.warning_count > 0
    }
}
