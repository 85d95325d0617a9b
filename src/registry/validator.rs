//! All-or-nothing validation of role names against the registry

use crate::error::{AuthError, Result};

use super::RoleRegistry;

/// Checks that every requested role name is a key of the registry.
///
/// The full set difference is computed before failing, so the error lists
/// every unknown name at once rather than stopping at the first. Shared by
/// the mutating operations and by the `has_role` read path.
pub fn validate_roles<'a, I>(names: I, registry: &RoleRegistry) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let unknown: Vec<String> = names
        .into_iter()
        .filter(|name| !registry.contains(name.as_str()))
        .cloned()
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(AuthError::UnknownRoles { roles: unknown })
    }
}
