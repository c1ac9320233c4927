//! Base layer for back-office admin request handlers.
//!
//! This crate centralizes what every admin handler needs before its body
//! runs:
//! - **Authorization gateway**: per-action capability checks against a
//!   pluggable policy oracle, fail-closed
//! - **Resource locking**: keyed, non-blocking mutual exclusion around
//!   mutations of one resource instance, with contention surfaced as a
//!   recoverable value
//! - **Breadcrumb trails**: request-scoped navigation accumulation for the
//!   presentation layer
//!
//! Routing, rendering, and persistence stay outside; this crate talks to
//! them through small traits ([`AccessPolicy`], [`LockRegistry`],
//! [`CredentialIssuer`]) and plain data.
//!
//! # Core Types
//!
//! - [`AdminGate`]: runs both capability checks before any handler logic
//! - [`AdminCtx`]: validated context a handler receives, carrying the
//!   unforgeable [`AdminCap`] proof
//! - [`LockManager`]: `with_lock` serializes conflicting edits per
//!   [`ResourceIdentity`]
//! - [`LockRecovery`]: user-visible message + redirect for contention
//! - [`BreadcrumbTrail`]: append-only trail for one request
//!
//! # Examples
//!
//! ```
//! use admin_gate::{
//!     Action, AdminGate, GrantTable, LockManager, Principal, RequestMeta, ResourceIdentity,
//! };
//!
//! let mut policy = GrantTable::new();
//! policy.allow("user-1", "admin", "Order");
//! policy.allow("user-1", "update", "Order");
//!
//! let meta = RequestMeta::new("req-123", Action::new("update"), "orders")
//!     .with_principal(Principal {
//!         id: "user-1".to_string(),
//!         name: "Alice".to_string(),
//!     })
//!     .with_resource_class("Order");
//!
//! let ctx = AdminGate::new(meta).authorize(&policy).expect("authorized");
//!
//! let locks = LockManager::in_memory();
//! let order = ResourceIdentity::new("order", 1001);
//! let outcome = locks.with_lock(&order, || "order updated");
//! assert_eq!(outcome.unwrap(), "order updated");
//! # let _ = ctx;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod breadcrumb;
mod capability;
mod credential;
mod error;
mod flash;
mod gate;
mod locale;
mod lock;
mod policy;
mod request;
mod resource;

pub use breadcrumb::{Breadcrumb, BreadcrumbTrail, OrderCrumb, ProductCrumb, UserCrumb};
pub use capability::authorize;
pub use credential::{CredentialIssuer, MemoryCredentials};
pub use error::{Denial, DenialKind, Error, LockFailed};
pub use flash::{flash_message, ResourceEvent};
pub use gate::{AdminCap, AdminCtx, AdminGate};
pub use locale::{resolve_locale, ADMIN_LOCALE_KEY};
pub use lock::{
    LockManager, LockRecovery, LockRegistry, MemoryLockRegistry, CONTENTION_MESSAGE,
};
pub use policy::{AccessPolicy, GrantTable};
pub use request::{Action, Principal, RequestMeta};
pub use resource::{ResourceIdentity, ResourceRef};
