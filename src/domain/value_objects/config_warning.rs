//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// What a [`ConfigWarning`] is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Key not recognised by the config schema
    UnknownKey { key: String },
    /// The same CIDR was listed more than once
    DuplicateCidr { cidr: String },
    /// The coordinator UI is reachable from anywhere without authentication
    OpenIngressWithoutAuth,
}

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Warnings never block derivation; they are reported next to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub kind: WarningKind,
    /// The file where the warning occurred, when it came from a file
    pub file: Option<PathBuf>,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    pub fn unknown_key(key: impl Into<String>, file: PathBuf) -> Self {
        Self {
            kind: WarningKind::UnknownKey { key: key.into() },
            file: Some(file),
            line: None,
            suggestion: None,
        }
    }

    pub fn duplicate_cidr(cidr: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DuplicateCidr { cidr: cidr.into() },
            file: None,
            line: None,
            suggestion: None,
        }
    }

    pub fn open_ingress_without_auth() -> Self {
        Self {
            kind: WarningKind::OpenIngressWithoutAuth,
            file: None,
            line: None,
            suggestion: Some("set web_username and web_password, or narrow allowed_cidrs".into()),
        }
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::UnknownKey { key } => write!(f, "unknown config key '{}'", key)?,
            WarningKind::DuplicateCidr { cidr } => {
                write!(f, "CIDR '{}' listed more than once", cidr)?
            }
            WarningKind::OpenIngressWithoutAuth => write!(
                f,
                "coordinator UI is open to 0.0.0.0/0 without web authentication"
            )?,
        }
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " in {}:{}", file.display(), line)?,
            (Some(file), None) => write!(f, " in {}", file.display())?,
            _ => {}
        }
        Ok(())
    }
}
