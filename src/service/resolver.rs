//! Expansion of a subject's roles into its effective permission rules

use indexmap::IndexSet;

use crate::permission::Rule;
use crate::registry::RoleRegistry;
use crate::subject::{RoleStore, Subject};

/// Collects the rules of every role the subject holds, deduplicated by
/// structural equality.
///
/// A role name missing from the registry (after a reload, say) contributes
/// nothing rather than failing. Rule order carries no meaning.
pub fn effective_permissions(
    store: &RoleStore,
    subject: &dyn Subject,
    registry: &RoleRegistry,
) -> Vec<Rule> {
    let mut rules: IndexSet<Rule> = IndexSet::new();

    for role in store.roles(subject) {
        if let Some(role_rules) = registry.rules(&role) {
            rules.extend(role_rules.iter().cloned());
        }
    }

    rules.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::MemorySubject;

    fn rule_set(rules: &[Rule]) -> IndexSet<&str> {
        rules.iter().map(|r| r.as_str()).collect()
    }

    #[test]
    fn no_roles_yields_no_rules() {
        let store = RoleStore::default();
        let subject = MemorySubject::new();
        let registry = RoleRegistry::new();

        assert!(effective_permissions(&store, &subject, &registry).is_empty());
    }

    #[test]
    fn concatenates_rules_across_roles() {
        let mut registry = RoleRegistry::new();
        registry.insert("admin", ["user/*", "article/create"]);
        registry.insert("user", ["user/edit"]);

        let store = RoleStore::default();
        let mut subject = MemorySubject::new();
        store
            .assign(
                &mut subject,
                &["admin".to_string(), "user".to_string()],
                &registry,
            )
            .unwrap();

        let rules = effective_permissions(&store, &subject, &registry);
        assert_eq!(
            rule_set(&rules),
            IndexSet::from(["user/*", "article/create", "user/edit"])
        );
    }

    #[test]
    fn deduplicates_shared_rules() {
        let mut registry = RoleRegistry::new();
        registry.insert("admin", ["user/*", "report/view"]);
        registry.insert("auditor", ["report/view"]);

        let store = RoleStore::default();
        let mut subject = MemorySubject::new();
        store
            .assign(
                &mut subject,
                &["admin".to_string(), "auditor".to_string()],
                &registry,
            )
            .unwrap();

        let rules = effective_permissions(&store, &subject, &registry);
        assert_eq!(rules.len(), 2);
        assert_eq!(rule_set(&rules), IndexSet::from(["user/*", "report/view"]));
    }

    #[test]
    fn stale_role_contributes_nothing() {
        let mut registry = RoleRegistry::new();
        registry.insert("admin", ["user/*"]);
        registry.insert("legacy", ["old/thing"]);

        let store = RoleStore::default();
        let mut subject = MemorySubject::new();
        store
            .assign(
                &mut subject,
                &["admin".to_string(), "legacy".to_string()],
                &registry,
            )
            .unwrap();

        let mut reloaded = RoleRegistry::new();
        reloaded.insert("admin", ["user/*"]);

        let rules = effective_permissions(&store, &subject, &reloaded);
        assert_eq!(rule_set(&rules), IndexSet::from(["user/*"]));
    }
}
