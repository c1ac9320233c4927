//! The capability oracle seam and an in-memory implementation.
//!
//! The gateway never inspects roles or permission data itself; it asks an
//! [`AccessPolicy`] whether a principal may perform an action against a
//! resource reference and treats the answer as opaque. Production systems
//! plug in their real policy engine; tests and small deployments can use
//! [`GrantTable`].

use std::collections::HashSet;

use crate::request::{Action, Principal};
use crate::resource::ResourceRef;

/// Boolean-valued capability oracle.
///
/// Implementations decide whether `principal` may perform `action` against
/// `resource`. The gateway fails closed: any `false`, and the request is
/// denied.
pub trait AccessPolicy {
    /// Returns whether the principal holds the capability.
    fn can(&self, principal: &Principal, action: &Action, resource: &ResourceRef) -> bool;
}

/// In-memory capability table with explicit grants, deny-by-default.
///
/// A grant is a (principal id, action, resource label) triple. Principals
/// registered as superusers pass every check; everyone else needs an exact
/// grant. Missing data always denies.
///
/// # Examples
///
/// ```
/// use admin_gate::{AccessPolicy, Action, GrantTable, Principal, ResourceRef};
///
/// let mut policy = GrantTable::new();
/// policy.allow("user-1", "admin", "Order");
/// policy.allow("user-1", "update", "Order");
///
/// let alice = Principal { id: "user-1".to_string(), name: "Alice".to_string() };
/// let orders = ResourceRef::Class("Order");
///
/// assert!(policy.can(&alice, &Action::new("update"), &orders));
/// assert!(!policy.can(&alice, &Action::new("destroy"), &orders));
/// ```
#[derive(Debug, Default)]
pub struct GrantTable {
    grants: HashSet<(String, String, String)>,
    superusers: HashSet<String>,
}

impl GrantTable {
    /// Creates an empty table; every check denies until grants are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `principal_id` the capability for `action` on `resource`.
    pub fn allow(&mut self, principal_id: &str, action: &str, resource: &str) {
        self.grants.insert((
            principal_id.to_string(),
            action.to_string(),
            resource.to_string(),
        ));
    }

    /// Marks `principal_id` as a superuser passing every capability check.
    pub fn allow_all(&mut self, principal_id: &str) {
        self.superusers.insert(principal_id.to_string());
    }
}

impl AccessPolicy for GrantTable {
    fn can(&self, principal: &Principal, action: &Action, resource: &ResourceRef) -> bool {
        if self.superusers.contains(&principal.id) {
            return true;
        }
        self.grants.contains(&(
            principal.id.clone(),
            action.as_str().to_string(),
            resource.label().to_string(),
        ))
    }
}
