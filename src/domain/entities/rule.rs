//! Redirect rule entities and validation.

use serde::Deserialize;

/// Errors produced when a raw rule record fails validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("unsupported redirect status code {0} (expected 301 or 302)")]
    UnsupportedStatus(i32),
    #[error("path `{0}` must start with '/'")]
    InvalidPath(String),
}

/// Raw rule record as produced by a rule source.
///
/// Required fields are optional here so that a record with a missing
/// field is representable and can be skipped individually during a
/// refresh instead of failing the whole fetch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleRecord {
    pub source_path: Option<String>,
    pub target_path: Option<String>,
    pub status_code: Option<i32>,
    /// When true, the rule matches by path prefix and carries the
    /// unmatched remainder over to the target.
    #[serde(default)]
    pub prefix_relative: bool,
}

/// HTTP status used when a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    /// 301 Moved Permanently
    Permanent,
    /// 302 Found
    Temporary,
}

impl RedirectStatus {
    /// Maps a numeric status code to a redirect status.
    ///
    /// Only 301 and 302 are supported; anything else is `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            301 => Some(Self::Permanent),
            302 => Some(Self::Temporary),
            _ => None,
        }
    }

    /// The numeric status code for the HTTP response.
    pub fn as_u16(self) -> u16 {
        match self {
            Self::Permanent => 301,
            Self::Temporary => 302,
        }
    }
}

/// A validated, immutable redirect rule.
///
/// Produced from a [`RuleRecord`] via `TryFrom` during a cache refresh,
/// so invalid records never enter a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub source_path: String,
    pub target_path: String,
    pub status: RedirectStatus,
    pub prefix_relative: bool,
}

impl TryFrom<RuleRecord> for RedirectRule {
    type Error = RuleError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        let source_path = record
            .source_path
            .ok_or(RuleError::MissingField("source_path"))?;
        let target_path = record
            .target_path
            .ok_or(RuleError::MissingField("target_path"))?;
        let code = record
            .status_code
            .ok_or(RuleError::MissingField("status_code"))?;

        let status = RedirectStatus::from_code(code).ok_or(RuleError::UnsupportedStatus(code))?;

        if !source_path.starts_with('/') {
            return Err(RuleError::InvalidPath(source_path));
        }
        if !target_path.starts_with('/') {
            return Err(RuleError::InvalidPath(target_path));
        }

        Ok(Self {
            source_path,
            target_path,
            status,
            prefix_relative: record.prefix_relative,
        })
    }
}
