//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for the final workflow report
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// JSON output
    Json,
}
