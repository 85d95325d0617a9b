//! Role registry: the source of truth for valid role names and their rules.
//!
//! The canonical source format is a mapping from role-name string to an
//! ordered list of rule strings, each using `/` as the segment separator and
//! `*` as the sole wildcard token. [`RoleRegistry`] deserializes that format
//! directly; how the mapping is loaded (file, environment, database) is the
//! host's concern. The registry is treated as read-only during any single
//! decision and may be swapped out between decisions.

mod validator;

pub use validator::validate_roles;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::permission::Rule;

/// Ordered mapping from role name to its permission rules.
///
/// # Examples
///
/// ```
/// use rolegate::RoleRegistry;
///
/// let mut registry = RoleRegistry::new();
/// registry.insert("admin", ["user/*", "article/create"]);
///
/// assert!(registry.contains("admin"));
/// assert_eq!(registry.rules("admin").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleRegistry {
    roles: IndexMap<String, Vec<Rule>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a role with its rule patterns, replacing any previous entry.
    pub fn insert<N, I, R>(&mut self, name: N, rules: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        self.roles
            .insert(name.into(), rules.into_iter().map(Into::into).collect());
    }

    /// True when the role name is a key of the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// The rule list of the named role, if registered.
    pub fn rules(&self, name: &str) -> Option<&[Rule]> {
        self.roles.get(name).map(Vec::as_slice)
    }

    /// All registered role names, in insertion order.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
