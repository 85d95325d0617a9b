//! # rolegate
//!
//! Static role assignment and hierarchical path-based permission matching.
//!
//! Role definitions live in an externally supplied [`RoleRegistry`] mapping
//! each role name to a list of permission rules: `/`-separated paths where
//! `*` is an absorbing wildcard (`users/*` covers `users/42/field/extra`).
//! A subject's assigned roles are persisted as a JSON array of role names in
//! a single string attribute reached through the [`Subject`] trait, so any
//! record type can carry an assignment.
//!
//! The [`AuthorizationService`] façade ties the pieces together: it
//! validates role names against the registry before every mutation (and
//! before `has_role`, which deliberately shares the same gate), resolves a
//! subject's roles into its effective rule set, and answers permission
//! checks with ALL (`has_permission_to`) or ANY (`has_any_permission`)
//! semantics. The registry can be hot-swapped between decisions with
//! [`AuthorizationService::reload`]; roles persisted under an older registry
//! keep decoding and simply stop contributing rules.
//!
//! ## Example
//!
//! ```rust
//! use rolegate::{AuthorizationService, MemorySubject, RoleRegistry};
//!
//! # fn example() -> rolegate::Result<()> {
//! let mut registry = RoleRegistry::new();
//! registry.insert("admin", ["user/*", "article/create"]);
//! registry.insert("user", ["user/edit"]);
//!
//! let service = AuthorizationService::new(registry);
//! let mut subject = MemorySubject::new();
//!
//! service.assign_role(&mut subject, ["admin"])?;
//!
//! assert!(service.has_permission_to(&subject, ["user/edit"]));
//! assert!(!service.has_permission_to(&subject, ["article/edit"]));
//! assert!(service.has_any_permission(&subject, ["article/edit", "article/create"]));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod permission;
pub mod registry;
pub mod service;
pub mod subject;

pub use error::{AuthError, Result};
pub use permission::{match_any, matches, PermissionPath, Rule};
pub use registry::RoleRegistry;
pub use service::AuthorizationService;
pub use subject::{MemorySubject, RoleStore, StoreConfig, Subject};
