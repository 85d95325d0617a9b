//! Permission path and rule value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The absorbing wildcard segment token.
pub const WILDCARD: &str = "*";

/// A `/`-separated permission path, e.g. `user/edit`.
///
/// Splitting preserves empty segments: `"user/"` has the segments
/// `["user", ""]` and is distinct from `"user"`. An empty segment behaves as
/// an ordinary literal during matching. Two paths are equal iff their
/// segment sequences are equal.
///
/// # Examples
///
/// ```
/// use rolegate::PermissionPath;
///
/// let path = PermissionPath::new("user/edit/self");
/// assert_eq!(path.segments(), &["user", "edit", "self"]);
/// assert_eq!(path.as_str(), "user/edit/self");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PermissionPath {
    raw: String,
    segments: Vec<String>,
}

impl PermissionPath {
    pub fn new(path: impl Into<String>) -> Self {
        let raw = path.into();
        let segments = raw.split('/').map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Returns the raw path string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for PermissionPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PermissionPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<PermissionPath> for String {
    fn from(path: PermissionPath) -> Self {
        path.raw
    }
}

impl fmt::Display for PermissionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for PermissionPath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// A permission-path-shaped pattern that may contain the wildcard `*`.
///
/// Conventionally only the last segment is a wildcard; the matcher does not
/// enforce this. A `*` is only special once it is reached positionally; see
/// [`matches`](crate::matches) for the exact rules.
///
/// # Examples
///
/// ```
/// use rolegate::Rule;
///
/// let rule = Rule::new("users/*");
/// assert_eq!(rule.segments(), &["users", "*"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Rule {
    raw: String,
    segments: Vec<String>,
}

impl Rule {
    pub fn new(pattern: impl Into<String>) -> Self {
        let raw = pattern.into();
        let segments = raw.split('/').map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Returns the raw pattern string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the pattern segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for Rule {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for Rule {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.raw
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for Rule {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
