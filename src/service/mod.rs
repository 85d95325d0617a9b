//! Authorization façade over the registry, role store and matcher

mod resolver;

pub use resolver::effective_permissions;

use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::permission::{match_any, PermissionPath, Rule};
use crate::registry::RoleRegistry;
use crate::subject::{RoleStore, StoreConfig, Subject};

/// Entry point for role and permission decisions.
///
/// The registry sits behind a read/write lock and every decision snapshots
/// it exactly once, so a concurrent [`reload`](Self::reload) never changes
/// the rules mid-decision. The service itself is synchronous; `assign_role`
/// and `detach_role` are a read-then-write on the subject that is not atomic
/// at this layer.
///
/// # Examples
///
/// ```
/// use rolegate::{AuthorizationService, MemorySubject, RoleRegistry};
///
/// # fn example() -> rolegate::Result<()> {
/// let mut registry = RoleRegistry::new();
/// registry.insert("admin", ["user/*"]);
///
/// let service = AuthorizationService::new(registry);
/// let mut subject = MemorySubject::new();
///
/// service.assign_role(&mut subject, ["admin"])?;
/// assert!(service.has_role(&subject, ["admin"])?);
/// assert!(service.has_permission_to(&subject, ["user/edit/self"]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AuthorizationService {
    registry: RwLock<Arc<RoleRegistry>>,
    store: RoleStore,
}

impl AuthorizationService {
    /// Creates a service over the given registry with the default store
    /// configuration (role attribute named `role`).
    pub fn new(registry: RoleRegistry) -> Self {
        Self::with_config(registry, StoreConfig::default())
    }

    pub fn with_config(registry: RoleRegistry, config: StoreConfig) -> Self {
        Self {
            registry: RwLock::new(Arc::new(registry)),
            store: RoleStore::new(config),
        }
    }

    /// Swaps in a freshly loaded registry.
    ///
    /// Decisions already in flight keep the snapshot they started with.
    /// Role names persisted under the old registry keep decoding and simply
    /// stop contributing rules until registered again.
    pub fn reload(&self, registry: RoleRegistry) {
        let mut current = self.registry.write().expect("registry lock poisoned");
        *current = Arc::new(registry);
        tracing::debug!("role registry reloaded with {} roles", current.len());
    }

    /// Registry snapshot used for a single decision.
    pub fn registry(&self) -> Arc<RoleRegistry> {
        self.registry.read().expect("registry lock poisoned").clone()
    }

    /// Assigns the given roles to the subject.
    ///
    /// All-or-nothing: any unknown role name fails the call before the
    /// subject is touched. Newly assigned roles precede the already held
    /// ones; duplicates collapse to their first occurrence.
    pub fn assign_role<I, S>(&self, subject: &mut dyn Subject, roles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = roles.into_iter().map(Into::into).collect();
        self.store.assign(subject, &names, &self.registry())
    }

    /// Detaches the given roles from the subject.
    ///
    /// Names are validated against the registry, not the current
    /// assignment: a registered-but-unassigned role is a no-op, an unknown
    /// name fails the whole call.
    pub fn detach_role<I, S>(&self, subject: &mut dyn Subject, roles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = roles.into_iter().map(Into::into).collect();
        self.store.detach(subject, &names, &self.registry())
    }

    /// True when the subject holds at least one of the given roles (ANY
    /// semantics). The requested names are validated against the registry
    /// even though this is a read path.
    pub fn has_role<I, S>(&self, subject: &dyn Subject, roles: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = roles.into_iter().map(Into::into).collect();
        self.store.has_role(subject, &names, &self.registry())
    }

    /// Alias for [`has_role`](Self::has_role); the underlying check already
    /// uses ANY semantics.
    pub fn has_any_role<I, S>(&self, subject: &dyn Subject, roles: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.has_role(subject, roles)
    }

    /// Role names currently assigned to the subject. Never fails; stale or
    /// malformed persisted data decodes to an empty list.
    pub fn roles(&self, subject: &dyn Subject) -> Vec<String> {
        self.store.roles(subject)
    }

    /// The subject's effective, deduplicated permission rules.
    pub fn permissions(&self, subject: &dyn Subject) -> Vec<Rule> {
        effective_permissions(&self.store, subject, &self.registry())
    }

    /// True when every given permission path matches the subject's rules
    /// (ALL semantics). Vacuously true for an empty list. Never fails:
    /// unknown paths and stale roles evaluate to an unmatched path, not an
    /// error.
    pub fn has_permission_to<I, S>(&self, subject: &dyn Subject, permissions: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<PermissionPath>,
    {
        let registry = self.registry();
        let rules = effective_permissions(&self.store, subject, &registry);

        permissions
            .into_iter()
            .map(Into::into)
            .all(|permission| match_any(&rules, &permission))
    }

    /// True when at least one given permission path matches the subject's
    /// rules (ANY semantics). Vacuously false for an empty list.
    pub fn has_any_permission<I, S>(&self, subject: &dyn Subject, permissions: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<PermissionPath>,
    {
        let registry = self.registry();
        let rules = effective_permissions(&self.store, subject, &registry);

        permissions
            .into_iter()
            .map(Into::into)
            .any(|permission| match_any(&rules, &permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::subject::MemorySubject;

    fn registry() -> RoleRegistry {
        let mut registry = RoleRegistry::new();
        registry.insert("admin", ["user/*", "article/create"]);
        registry.insert("user", ["user/edit"]);
        registry
    }

    #[test]
    fn zero_paths_are_vacuous() {
        let service = AuthorizationService::new(registry());
        let subject = MemorySubject::new();

        let none: [&str; 0] = [];
        assert!(service.has_permission_to(&subject, none));
        assert!(!service.has_any_permission(&subject, none));
    }

    #[test]
    fn has_any_role_delegates_to_has_role() {
        let service = AuthorizationService::new(registry());
        let mut subject = MemorySubject::new();

        service.assign_role(&mut subject, ["user"]).unwrap();

        assert!(service.has_any_role(&subject, ["user", "admin"]).unwrap());
        assert!(!service.has_any_role(&subject, ["admin"]).unwrap());
        assert!(matches!(
            service.has_any_role(&subject, ["ghost"]),
            Err(AuthError::UnknownRoles { .. })
        ));
    }

    #[test]
    fn reload_swaps_the_registry() {
        let service = AuthorizationService::new(registry());
        let mut subject = MemorySubject::new();
        service.assign_role(&mut subject, ["admin"]).unwrap();

        let mut next = RoleRegistry::new();
        next.insert("viewer", ["report/view"]);
        service.reload(next);

        assert!(!service.registry().contains("admin"));
        assert!(matches!(
            service.assign_role(&mut subject, ["admin"]),
            Err(AuthError::UnknownRoles { .. })
        ));
    }
}
