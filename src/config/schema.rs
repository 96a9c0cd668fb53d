use serde::Deserialize;

/// Reprint settings, usually read from a TOML file.
///
/// Both checks are off by default: the splicer then trusts the caller to
/// hand it non-overlapping directives that lie inside the source.
///
/// ```toml
/// reject_overlapping = true
/// reject_out_of_bounds = true
/// ```
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReprintConfig {
    /// Fail when a directive overlaps the previous one.
    pub reject_overlapping: bool,
    /// Fail when a directive bound names a line or column the source lacks.
    pub reject_out_of_bounds: bool,
}

impl ReprintConfig {
    /// Configuration with every check enabled.
    pub fn strict() -> Self {
        Self {
            reject_overlapping: true,
            reject_out_of_bounds: true,
        }
    }
}
