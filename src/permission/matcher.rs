//! Segment-wise rule-to-permission matching

use super::path::{PermissionPath, Rule, WILDCARD};

/// Checks whether a single rule matches a permission path.
///
/// Segments are compared position by position. A `*` rule segment reached
/// while permission segments remain absorbs all of them, however many
/// (`users/*` matches `users/42/field/extra`). A rule exactly one segment
/// longer than the permission whose last segment is `*` matches as well, so
/// `user/edit/*` covers `user/edit` itself. In every other case the segments
/// must match literally and the lengths must agree exactly.
///
/// Matching never fails: an unmatched or unknown path simply evaluates to
/// `false`.
///
/// # Examples
///
/// ```
/// use rolegate::{matches, PermissionPath, Rule};
///
/// assert!(matches(&Rule::new("user/edit"), &PermissionPath::new("user/edit")));
/// assert!(matches(&Rule::new("user/*"), &PermissionPath::new("user/edit/self")));
/// assert!(matches(&Rule::new("user/edit/*"), &PermissionPath::new("user/edit")));
/// assert!(!matches(&Rule::new("user"), &PermissionPath::new("user/edit")));
/// assert!(!matches(&Rule::new("user/edit/self"), &PermissionPath::new("user/edit")));
/// ```
pub fn matches(rule: &Rule, permission: &PermissionPath) -> bool {
    let rule = rule.segments();
    let permission = permission.segments();

    for (i, segment) in permission.iter().enumerate() {
        match rule.get(i) {
            // permission is longer than the rule and no wildcard was seen
            None => return false,
            // everything that follows is absorbed
            Some(pattern) if pattern == WILDCARD => return true,
            Some(pattern) if pattern != segment => return false,
            Some(_) => {}
        }
    }

    // a single trailing wildcard matches its own parent path
    if rule.len() == permission.len() + 1 && rule[rule.len() - 1] == WILDCARD {
        return true;
    }

    rule.len() == permission.len()
}

/// True if any rule in the set matches the permission.
///
/// The result is independent of rule order.
pub fn match_any<'a, I>(rules: I, permission: &PermissionPath) -> bool
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules.into_iter().any(|rule| matches(rule, permission))
}
