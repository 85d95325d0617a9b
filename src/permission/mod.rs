//! Permission paths, rules and the segment-wise matching algorithm.
//!
//! Permissions are `/`-separated paths (`user/edit`). Rules are path-shaped
//! patterns where `*` is an absorbing wildcard: once a `*` is reached while
//! permission segments remain, it matches every one of them regardless of
//! count. A single trailing `*` additionally matches the rule's own parent
//! path (`user/edit/*` matches `user/edit`). Everywhere else segments
//! compare literally and lengths must agree exactly.

mod matcher;
mod path;

pub use matcher::{match_any, matches};
pub use path::{PermissionPath, Rule, WILDCARD};
