//! Keyed mutual exclusion for resource instances.
//!
//! Concurrent admin edits to the same mutable resource (one specific
//! order, say) must be serialized. The [`LockManager`] acquires an
//! exclusive lock keyed by [`ResourceIdentity`], runs a unit of work, and
//! releases the lock on every exit path. Acquisition is non-blocking:
//! contention comes back immediately as a typed [`LockFailed`] value, an
//! expected condition the caller turns into a user-visible message plus a
//! redirect via [`LockRecovery`].
//!
//! The registry behind the manager is an injected abstraction: the
//! in-memory implementation covers a single process and tests; a
//! distributed lock service can stand in for clustered deployments.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::error::LockFailed;
use crate::resource::ResourceIdentity;

/// Default user-facing message for lock contention on a resource.
pub const CONTENTION_MESSAGE: &str =
    "Another user or process is editing this resource. Please allow them to finish and try again.";

/// Shared registry of held resource-instance locks.
///
/// Only the [`LockManager`] mutates the registry. Keys are scoped per
/// resource instance identity, never per type: two different orders never
/// contend with each other.
pub trait LockRegistry: Send + Sync {
    /// Attempts to acquire the lock for `key` without blocking.
    ///
    /// Returns `true` when this caller now holds the lock, `false` when
    /// another operation already holds it.
    fn try_acquire(&self, key: &ResourceIdentity) -> bool;

    /// Releases the lock for `key`.
    fn release(&self, key: &ResourceIdentity);
}

/// Process-wide in-memory lock registry.
///
/// # Examples
///
/// ```
/// use admin_gate::{LockRegistry, MemoryLockRegistry, ResourceIdentity};
///
/// let registry = MemoryLockRegistry::new();
/// let key = ResourceIdentity::new("order", 1001);
///
/// assert!(registry.try_acquire(&key));
/// assert!(!registry.try_acquire(&key));
/// registry.release(&key);
/// assert!(registry.try_acquire(&key));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLockRegistry {
    held: Mutex<HashSet<String>>,
}

impl MemoryLockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the lock for `key` is currently held.
    pub fn is_held(&self, key: &ResourceIdentity) -> bool {
        self.held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key.as_str())
    }
}

impl LockRegistry for MemoryLockRegistry {
    fn try_acquire(&self, key: &ResourceIdentity) -> bool {
        self.held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.as_str().to_string())
    }

    fn release(&self, key: &ResourceIdentity) {
        self.held
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key.as_str());
    }
}

/// Releases the lock when dropped, so release happens on every exit path
/// of the unit of work, including panics.
struct ReleaseGuard<'a> {
    registry: &'a dyn LockRegistry,
    key: &'a ResourceIdentity,
}

impl Drop for ReleaseGuard<'_> {
    fn drop(&mut self) {
        self.registry.release(self.key);
        tracing::debug!(key = %self.key, "resource lock released");
    }
}

/// Keyed mutual-exclusion service over an injected [`LockRegistry`].
///
/// Cloning is cheap and shares the registry, so one manager can be handed
/// to every request handler.
///
/// # Examples
///
/// ```
/// use admin_gate::{LockManager, ResourceIdentity};
///
/// let locks = LockManager::in_memory();
/// let order = ResourceIdentity::new("order", 1001);
///
/// let total = locks.with_lock(&order, || 42).expect("uncontended");
/// assert_eq!(total, 42);
///
/// // The lock is not held across calls.
/// assert!(locks.with_lock(&order, || ()).is_ok());
/// ```
#[derive(Clone)]
pub struct LockManager {
    registry: Arc<dyn LockRegistry>,
}

impl LockManager {
    /// Creates a manager over the given registry.
    pub fn new(registry: Arc<dyn LockRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a manager over a fresh process-wide in-memory registry.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryLockRegistry::new()))
    }

    /// Runs `work` under the exclusive lock for `identity`.
    ///
    /// Acquisition never blocks: if another operation holds the lock the
    /// call returns [`LockFailed`] immediately, with no retry. On
    /// acquisition the unit of work runs to completion and the lock is
    /// released unconditionally, whether `work` succeeds, returns its own
    /// error, or panics.
    ///
    /// No ordering is guaranteed among contending callers beyond mutual
    /// exclusion: exactly one acquires, the rest each observe
    /// [`LockFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`LockFailed`] when the lock is already held. Failures
    /// inside `work` are the work's own concern; wrap them in its return
    /// type.
    pub fn with_lock<T>(
        &self,
        identity: &ResourceIdentity,
        work: impl FnOnce() -> T,
    ) -> Result<T, LockFailed> {
        if !self.registry.try_acquire(identity) {
            tracing::warn!(key = %identity, "resource lock contended");
            return Err(LockFailed {
                identity: identity.clone(),
            });
        }
        tracing::debug!(key = %identity, "resource lock acquired");

        let _guard = ReleaseGuard {
            registry: self.registry.as_ref(),
            key: identity,
        };
        Ok(work())
    }
}

impl std::fmt::Debug for LockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockManager").finish_non_exhaustive()
    }
}

/// Graceful user-facing outcome for a contended lock.
///
/// The redirect target is chosen by the caller: the convention for edit
/// flows is the resource's edit view, but actions like `destroy` may
/// prefer the listing instead.
///
/// # Examples
///
/// ```
/// use admin_gate::{LockFailed, LockRecovery, ResourceIdentity};
///
/// let failure = LockFailed { identity: ResourceIdentity::new("order", 1001) };
/// let recovery = LockRecovery::new(&failure, "/admin/orders/1001/edit");
///
/// assert_eq!(recovery.redirect, "/admin/orders/1001/edit");
/// assert!(!recovery.message.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockRecovery {
    /// Informational, non-fatal message for the user
    pub message: String,
    /// Safe view of the resource to send the user back to
    pub redirect: String,
}

impl LockRecovery {
    /// Builds a recovery with the default contention message.
    pub fn new(_failure: &LockFailed, redirect: impl Into<String>) -> Self {
        Self {
            message: CONTENTION_MESSAGE.to_string(),
            redirect: redirect.into(),
        }
    }

    /// Builds a recovery with a custom message.
    pub fn with_message(redirect: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            redirect: redirect.into(),
        }
    }
}
