use crate::{
    capability::authorize,
    credential::CredentialIssuer,
    error::Denial,
    policy::AccessPolicy,
    request::{Action, Principal, RequestMeta},
    resource::ResourceRef,
};

/// Proof that a request passed the authorization gateway.
///
/// This is a zero-sized type that cannot be constructed outside this
/// crate, so a handler that demands an `AdminCap` can only be reached
/// through [`AdminGate`].
#[derive(Debug, Clone, Copy)]
pub struct AdminCap {
    // Private field prevents construction outside the crate
    _private: (),
}

impl AdminCap {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Validated request context handed to an authorized handler.
///
/// Only the gateway can create one; possession implies both capability
/// checks passed for this request's action and resource reference.
#[derive(Debug, Clone)]
pub struct AdminCtx {
    request_id: String,
    principal: Principal,
    action: Action,
    resource: ResourceRef,
    cap: AdminCap,
}

impl AdminCtx {
    /// Returns the request ID for this context.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the authenticated principal.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns the authorized action.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Returns the resolved resource reference the checks ran against.
    pub fn resource(&self) -> &ResourceRef {
        &self.resource
    }

    /// Returns the authorization proof.
    pub fn admin_cap(&self) -> AdminCap {
        self.cap
    }
}

/// The authorization gateway in front of every admin handler.
///
/// Per request the gate moves through `Unchecked -> Authorized` or
/// `Unchecked -> Denied`, encoded in types: an unconsumed `AdminGate` is
/// the unchecked state, [`authorize`](AdminGate::authorize) consumes it,
/// and the terminal states are `Ok(AdminCtx)` and `Err(Denial)`. Handler
/// logic must only run behind an `Ok`.
///
/// # Examples
///
/// ```
/// use admin_gate::{Action, AdminGate, GrantTable, Principal, RequestMeta};
///
/// let mut policy = GrantTable::new();
/// policy.allow("user-1", "admin", "Order");
/// policy.allow("user-1", "update", "Order");
///
/// let meta = RequestMeta::new("req-123", Action::new("update"), "orders")
///     .with_principal(Principal {
///         id: "user-1".to_string(),
///         name: "Alice".to_string(),
///     })
///     .with_resource_class("Order");
///
/// let ctx = AdminGate::new(meta).authorize(&policy).expect("authorized");
/// assert_eq!(ctx.request_id(), "req-123");
/// ```
pub struct AdminGate {
    meta: RequestMeta,
}

impl AdminGate {
    /// Creates an unchecked gate for the given request metadata.
    pub fn new(meta: RequestMeta) -> Self {
        Self { meta }
    }

    /// Runs both capability checks and transitions the gate.
    ///
    /// Resolves the resource reference (handler class if present, handler
    /// name otherwise), then requires the general `admin` capability and
    /// the action-specific capability. Fails closed on a missing principal
    /// or either failed check.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] that halted the pipeline.
    pub fn authorize(self, policy: &impl AccessPolicy) -> Result<AdminCtx, Denial> {
        let resource = self.meta.resource_ref();

        match authorize(
            policy,
            self.meta.principal.as_ref(),
            &self.meta.action,
            &resource,
        ) {
            Ok(()) => {
                tracing::debug!(
                    request_id = %self.meta.request_id,
                    action = %self.meta.action,
                    resource = %resource,
                    "admin request authorized"
                );
                // authorize() verified the principal is present
                let principal = self.meta.principal.ok_or_else(|| {
                    Denial::new(
                        crate::error::DenialKind::Unauthenticated,
                        "principal missing after authorization",
                    )
                })?;
                Ok(AdminCtx {
                    request_id: self.meta.request_id,
                    principal,
                    action: self.meta.action,
                    resource,
                    cap: AdminCap::new(),
                })
            }
            Err(denial) => {
                tracing::warn!(
                    request_id = %self.meta.request_id,
                    action = %self.meta.action,
                    resource = %resource,
                    %denial,
                    "admin request denied"
                );
                Err(denial)
            }
        }
    }

    /// Authorizes and ensures the principal holds an access credential.
    ///
    /// Some downstream operations authenticate against the platform API;
    /// after a successful authorization this issues a credential through
    /// the external issuer if the principal has none yet. At most one
    /// issuance per principal per need; already-present credentials are
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] that halted the pipeline. Credential
    /// issuance only happens on the authorized path.
    pub fn authorize_with_credentials(
        self,
        policy: &impl AccessPolicy,
        issuer: &impl CredentialIssuer,
    ) -> Result<AdminCtx, Denial> {
        let ctx = self.authorize(policy)?;
        if !issuer.has_credential(ctx.principal()) {
            issuer.issue_credential(ctx.principal());
            tracing::info!(
                request_id = %ctx.request_id,
                principal = %ctx.principal.id,
                "issued access credential"
            );
        }
        Ok(ctx)
    }

    /// Authorizes and runs `handler` only on the authorized path.
    ///
    /// Convenience for pipelines that want the short-circuit in one call:
    /// on denial the handler never executes.
    ///
    /// # Errors
    ///
    /// Returns the [`Denial`] that halted the pipeline.
    pub fn run<T>(
        self,
        policy: &impl AccessPolicy,
        handler: impl FnOnce(&AdminCtx) -> T,
    ) -> Result<T, Denial> {
        let ctx = self.authorize(policy)?;
        Ok(handler(&ctx))
    }
}
