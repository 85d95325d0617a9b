//! Error types for role and permission operations

use thiserror::Error;

/// Result type alias for role and permission operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors surfaced by validating role operations
#[derive(Error, Debug)]
pub enum AuthError {
    /// One or more requested role names are absent from the registry.
    ///
    /// Every unknown name is collected before the call fails, and the
    /// subject has not been mutated.
    #[error("unknown role names: {}", .roles.join(", "))]
    UnknownRoles { roles: Vec<String> },

    /// The subject failed to persist its role attribute.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}
