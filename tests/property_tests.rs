//! Integration property tests for admin-gate.
//!
//! These tests validate cross-module invariants (deny-by-default
//! authorization, lock release, breadcrumb ordering) using property-based
//! testing.

use std::cell::Cell;

use admin_gate::{
    Action, AdminGate, BreadcrumbTrail, GrantTable, LockManager, Principal, ProductCrumb,
    RequestMeta, ResourceIdentity, ResourceRef,
};
use proptest::prelude::*;

// Strategy: Generate arbitrary principal
fn arb_principal() -> impl Strategy<Value = Principal> {
    (
        prop::string::string_regex("[a-z0-9-]{3,10}").unwrap(),
        prop::string::string_regex("[A-Za-z ]{3,15}").unwrap(),
    )
        .prop_map(|(id, name)| Principal { id, name })
}

// Strategy: Generate routing action names. Excludes the distinguished
// "admin" action, which the gateway checks on its own.
fn arb_action_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("index"),
        Just("show"),
        Just("new"),
        Just("create"),
        Just("edit"),
        Just("update"),
        Just("destroy"),
    ]
}

// Strategy: Generate an optional handler-bound resource class
fn arb_resource_class() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("Order")),
        Just(Some("Product")),
        Just(Some("User")),
    ]
}

proptest! {
    /// Property: the gateway denies unless both checks are granted, and a
    /// denied request never executes its handler body.
    #[test]
    fn proptest_gateway_denies_by_default(
        request_id in prop::string::string_regex("[a-z0-9-]{5,20}").unwrap(),
        principal in prop::option::of(arb_principal()),
        action in arb_action_name(),
        class in arb_resource_class(),
        handler_name in prop::string::string_regex("[a-z_]{3,12}").unwrap(),
        grant_admin in any::<bool>(),
        grant_action in any::<bool>(),
    ) {
        let mut policy = GrantTable::new();
        let resource_label = match class {
            Some(c) => c.to_string(),
            None => handler_name.clone(),
        };
        if let Some(p) = &principal {
            if grant_admin {
                policy.allow(&p.id, "admin", &resource_label);
            }
            if grant_action {
                policy.allow(&p.id, action, &resource_label);
            }
        }

        let mut meta = RequestMeta::new(request_id, Action::new(action), handler_name);
        if let Some(p) = principal.clone() {
            meta = meta.with_principal(p);
        }
        if let Some(c) = class {
            meta = meta.with_resource_class(c);
        }

        let handler_ran = Cell::new(false);
        let result = AdminGate::new(meta).run(&policy, |_ctx| handler_ran.set(true));

        let should_authorize = principal.is_some() && grant_admin && grant_action;
        prop_assert_eq!(result.is_ok(), should_authorize);
        prop_assert_eq!(handler_ran.get(), should_authorize);
    }

    /// Property: sequential with_lock calls on one identity always succeed
    /// and never leak the lock across calls.
    #[test]
    fn proptest_lock_never_held_across_calls(
        kind in prop::string::string_regex("[a-z]{3,8}").unwrap(),
        id in 1u32..100_000,
        rounds in 1usize..8,
    ) {
        let locks = LockManager::in_memory();
        let identity = ResourceIdentity::new(&kind, id);

        for round in 0..rounds {
            let outcome = locks.with_lock(&identity, || round);
            prop_assert_eq!(outcome.ok(), Some(round));
        }
    }

    /// Property: the lock is released even when the unit of work reports
    /// its own failure, and the next acquisition succeeds.
    #[test]
    fn proptest_lock_released_on_work_failure(
        id in 1u32..100_000,
        fails in any::<bool>(),
    ) {
        let locks = LockManager::in_memory();
        let identity = ResourceIdentity::new("order", id);

        let first: Result<Result<(), &str>, _> = locks.with_lock(&identity, || {
            if fails { Err("work failed") } else { Ok(()) }
        });
        prop_assert!(first.is_ok());

        let second = locks.with_lock(&identity, || ());
        prop_assert!(second.is_ok());
    }

    /// Property: collection entry always precedes the instance entry, and
    /// unsaved instances contribute no entry at all.
    #[test]
    fn proptest_breadcrumb_ordering(
        name in prop::string::string_regex("[A-Za-z ]{1,20}").unwrap(),
        persisted in any::<bool>(),
        with_instance in any::<bool>(),
    ) {
        let product = ProductCrumb {
            name: name.clone(),
            detail_path: "/admin/products/p".to_string(),
            persisted,
        };

        let mut trail = BreadcrumbTrail::new();
        trail.product_trail(
            "/admin/products",
            with_instance.then_some(&product),
        );

        prop_assert_eq!(trail.entries()[0].label.as_str(), "Products");
        if with_instance && persisted {
            prop_assert_eq!(trail.len(), 2);
            prop_assert_eq!(trail.entries()[1].label.as_str(), name.as_str());
        } else {
            prop_assert_eq!(trail.len(), 1);
        }
    }

    /// Property: resource-reference resolution prefers the class and only
    /// falls back to the handler name when no class resolves.
    #[test]
    fn proptest_resource_resolution_precedence(
        class in arb_resource_class(),
        handler_name in prop::string::string_regex("[a-z_]{3,12}").unwrap(),
    ) {
        let resolved = ResourceRef::resolve(class, &handler_name);
        match class {
            Some(c) => prop_assert_eq!(resolved, ResourceRef::Class(c)),
            None => prop_assert_eq!(resolved, ResourceRef::Name(handler_name)),
        }
    }
}
