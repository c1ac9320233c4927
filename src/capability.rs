//! The capability resolver: the pure decision function behind the gateway.
//!
//! Two checks run per request, and both must pass: the principal may act as
//! an administrator against the resource reference in general, and the
//! principal may perform the specific action against it. The resolver has
//! no side effects; logging happens at the gateway.

use crate::error::{Denial, DenialKind};
use crate::policy::AccessPolicy;
use crate::request::{Action, Principal};
use crate::resource::ResourceRef;

/// Decides whether `principal` may perform `action` against `resource`.
///
/// Fails closed: a missing principal is [`DenialKind::Unauthenticated`],
/// and either failed capability check is [`DenialKind::Unauthorized`]. The
/// general `admin` check runs first, so a denial for it reports the
/// `admin` action rather than the request's own.
///
/// # Errors
///
/// Returns a [`Denial`] when the principal is absent or either check fails.
///
/// # Examples
///
/// ```
/// use admin_gate::{authorize, Action, GrantTable, Principal, ResourceRef};
///
/// let mut policy = GrantTable::new();
/// policy.allow("user-1", "admin", "Order");
/// policy.allow("user-1", "update", "Order");
///
/// let alice = Principal { id: "user-1".to_string(), name: "Alice".to_string() };
/// let orders = ResourceRef::Class("Order");
///
/// assert!(authorize(&policy, Some(&alice), &Action::new("update"), &orders).is_ok());
/// assert!(authorize(&policy, Some(&alice), &Action::new("destroy"), &orders).is_err());
/// ```
pub fn authorize(
    policy: &impl AccessPolicy,
    principal: Option<&Principal>,
    action: &Action,
    resource: &ResourceRef,
) -> Result<(), Denial> {
    let principal = principal.ok_or_else(|| {
        Denial::new(
            DenialKind::Unauthenticated,
            "Authentication required: no principal for admin request",
        )
    })?;

    let admin = Action::admin();
    if !policy.can(principal, &admin, resource) {
        return Err(Denial::new(
            DenialKind::Unauthorized {
                action: admin,
                resource: resource.label().to_string(),
            },
            format!(
                "Principal '{}' may not administer '{}'",
                principal.id, resource
            ),
        ));
    }

    if !policy.can(principal, action, resource) {
        return Err(Denial::new(
            DenialKind::Unauthorized {
                action: action.clone(),
                resource: resource.label().to_string(),
            },
            format!(
                "Principal '{}' may not '{}' on '{}'",
                principal.id, action, resource
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::GrantTable;

    fn alice() -> Principal {
        Principal {
            id: "user-1".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn missing_principal_is_unauthenticated() {
        let policy = GrantTable::new();
        let err = authorize(
            &policy,
            None,
            &Action::new("update"),
            &ResourceRef::Class("Order"),
        )
        .unwrap_err();
        assert_eq!(err.kind, DenialKind::Unauthenticated);
    }

    #[test]
    fn general_admin_check_runs_first() {
        // Action-specific grant alone is not enough.
        let mut policy = GrantTable::new();
        policy.allow("user-1", "update", "Order");

        let err = authorize(
            &policy,
            Some(&alice()),
            &Action::new("update"),
            &ResourceRef::Class("Order"),
        )
        .unwrap_err();
        assert_eq!(
            err.kind,
            DenialKind::Unauthorized {
                action: Action::admin(),
                resource: "Order".to_string(),
            }
        );
    }

    #[test]
    fn action_check_runs_second() {
        let mut policy = GrantTable::new();
        policy.allow("user-1", "admin", "Order");

        let err = authorize(
            &policy,
            Some(&alice()),
            &Action::new("destroy"),
            &ResourceRef::Class("Order"),
        )
        .unwrap_err();
        assert_eq!(
            err.kind,
            DenialKind::Unauthorized {
                action: Action::new("destroy"),
                resource: "Order".to_string(),
            }
        );
    }

    #[test]
    fn both_checks_passing_authorizes() {
        let mut policy = GrantTable::new();
        policy.allow("user-1", "admin", "Order");
        policy.allow("user-1", "update", "Order");

        assert!(authorize(
            &policy,
            Some(&alice()),
            &Action::new("update"),
            &ResourceRef::Class("Order"),
        )
        .is_ok());
    }

    #[test]
    fn name_reference_is_checked_like_a_class() {
        let mut policy = GrantTable::new();
        policy.allow("user-1", "admin", "dashboard");
        policy.allow("user-1", "index", "dashboard");

        assert!(authorize(
            &policy,
            Some(&alice()),
            &Action::new("index"),
            &ResourceRef::Name("dashboard".to_string()),
        )
        .is_ok());
    }
}
