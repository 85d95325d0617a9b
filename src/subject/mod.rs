//! The subject seam: entities that roles are assigned to.
//!
//! Role behavior attaches to a host entity through the [`Subject`] trait
//! rather than by mixing it into the record type itself: the store only
//! needs to read and write one named string attribute, with the write
//! durably committing the subject.

mod store;

pub use store::{RoleStore, StoreConfig};

use std::collections::HashMap;

/// Read/write access to a subject's persisted string attributes.
pub trait Subject {
    /// Raw value of the named attribute, or `None` when it was never written.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes the attribute and durably commits the subject.
    ///
    /// Implementations backed by a database persist before returning; any
    /// failure propagates out of the mutating role operations as
    /// [`AuthError::Persistence`](crate::AuthError::Persistence).
    fn set_attribute(&mut self, name: &str, value: String) -> anyhow::Result<()>;
}

/// HashMap-backed [`Subject`] for tests, examples and hosts without a
/// dedicated record store.
///
/// # Examples
///
/// ```
/// use rolegate::{MemorySubject, Subject};
///
/// let mut subject = MemorySubject::new();
/// assert!(subject.attribute("role").is_none());
///
/// subject.set_attribute("role", r#"["admin"]"#.to_string()).unwrap();
/// assert_eq!(subject.attribute("role").as_deref(), Some(r#"["admin"]"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySubject {
    attributes: HashMap<String, String>,
}

impl MemorySubject {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Subject for MemorySubject {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: String) -> anyhow::Result<()> {
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }
}
