//! Decoding, encoding and read-modify-write of the persisted role set

use indexmap::IndexSet;

use crate::error::Result;
use crate::registry::{validate_roles, RoleRegistry};

use super::Subject;

/// Configuration for the role store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the subject attribute holding the serialized role set.
    pub role_attribute: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            role_attribute: "role".to_string(),
        }
    }
}

/// Reads and writes a subject's role assignment.
///
/// The assignment is persisted as a JSON array of role-name strings in a
/// single string attribute. Reads never fail: a missing or malformed value
/// decodes to the empty role set. Writes go through
/// [`Subject::set_attribute`] and commit immediately, so `assign`/`detach`
/// are a read-then-write that is not atomic at this layer. Hosts that
/// mutate one subject concurrently must supply their own transaction or
/// lock.
#[derive(Debug, Clone, Default)]
pub struct RoleStore {
    config: StoreConfig,
}

impl RoleStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Role names currently held by the subject, in persisted order.
    ///
    /// Names persisted under an older registry are returned as-is; stale
    /// names only drop out when rules are resolved.
    pub fn roles(&self, subject: &dyn Subject) -> Vec<String> {
        let raw = match subject.attribute(&self.config.role_attribute) {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(roles) => roles,
            Err(error) => {
                tracing::warn!(
                    "malformed role set in attribute '{}', treating as empty: {}",
                    self.config.role_attribute,
                    error
                );
                Vec::new()
            }
        }
    }

    /// Serializes the roles and writes them back through the subject.
    pub fn set_roles(&self, subject: &mut dyn Subject, roles: &[String]) -> Result<()> {
        let encoded = serde_json::to_string(roles).map_err(anyhow::Error::from)?;
        subject.set_attribute(&self.config.role_attribute, encoded)?;
        Ok(())
    }

    /// Assigns roles to the subject.
    ///
    /// Every requested name is validated against the registry before the
    /// subject is touched; on failure nothing has been written. The merged
    /// assignment puts the newly requested names first, then the already
    /// held ones, duplicates collapsed to their first occurrence.
    pub fn assign(
        &self,
        subject: &mut dyn Subject,
        names: &[String],
        registry: &RoleRegistry,
    ) -> Result<()> {
        let requested: IndexSet<String> = names.iter().cloned().collect();
        validate_roles(requested.iter(), registry)?;

        let mut merged = requested;
        merged.extend(self.roles(subject));

        let merged: Vec<String> = merged.into_iter().collect();
        self.set_roles(subject, &merged)
    }

    /// Removes the requested roles from the subject.
    ///
    /// Validation runs against the registry, not the current assignment: a
    /// registered-but-unassigned name is a no-op, while an unknown name
    /// fails the whole call.
    pub fn detach(
        &self,
        subject: &mut dyn Subject,
        names: &[String],
        registry: &RoleRegistry,
    ) -> Result<()> {
        let requested: IndexSet<String> = names.iter().cloned().collect();
        validate_roles(requested.iter(), registry)?;

        let remaining: Vec<String> = self
            .roles(subject)
            .into_iter()
            .filter(|role| !requested.contains(role))
            .collect();
        self.set_roles(subject, &remaining)
    }

    /// True when the subject holds at least one of the requested roles.
    ///
    /// The requested names are validated against the registry even though
    /// this is a read path.
    pub fn has_role(
        &self,
        subject: &dyn Subject,
        names: &[String],
        registry: &RoleRegistry,
    ) -> Result<bool> {
        let requested: IndexSet<String> = names.iter().cloned().collect();
        validate_roles(requested.iter(), registry)?;

        let held = self.roles(subject);
        Ok(held.iter().any(|role| requested.contains(role)))
    }
}
