//! Inputs describing one release bundle

use crate::layout;

/// Lower bound of every generated skip range
const SKIP_RANGE_FLOOR: &str = "0.0.1";

/// Version-specific values written into a new bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// New bundle version
    pub version: String,
    /// Version the new bundle replaces, if any
    pub prev_version: Option<String>,
    /// Release channel, also used as CSV maturity
    pub channel: String,
    /// Suggested install namespace
    pub namespace: String,
}

impl Release {
    pub fn new(
        version: impl Into<String>,
        prev_version: &str,
        channel: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            prev_version: normalize_prev_version(prev_version),
            channel: channel.into(),
            namespace: namespace.into(),
        }
    }

    /// `metadata.name` of the new CSV
    pub fn csv_name(&self) -> String {
        layout::csv_name(&self.version)
    }

    /// `olm.skipRange` annotation of the new CSV
    pub fn skip_range(&self) -> String {
        format!(">={SKIP_RANGE_FLOOR} <{}", self.version)
    }

    /// `spec.replaces` of the new CSV, `None` leaves the template value alone
    pub fn replaces(&self) -> Option<String> {
        self.prev_version.as_deref().map(layout::csv_name)
    }
}

/// Empty input and the exact literal `null` both mean "no previous version".
fn normalize_prev_version(prev_version: &str) -> Option<String> {
    if prev_version.is_empty() || prev_version == "null" {
        None
    } else {
        Some(prev_version.to_string())
    }
}
