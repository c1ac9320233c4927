use std::fmt;

use crate::resource::ResourceRef;

/// Symbolic name of the operation a request is attempting.
///
/// Derived from the routing decision (e.g. `create`, `update`, `destroy`)
/// and fixed for the request's duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action(String);

impl Action {
    /// Creates an action from its symbolic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The distinguished general-administration action.
    ///
    /// Every admin request must pass this check in addition to the
    /// action-specific one.
    pub fn admin() -> Self {
        Self("admin".to_string())
    }

    /// Returns the action's symbolic name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Action::new(name)
    }
}

/// An authenticated actor performing a request.
///
/// Lives for one request and is owned by the request context. The
/// capabilities a principal holds are resolved externally through an
/// [`AccessPolicy`](crate::AccessPolicy); this type only carries identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Unique identifier for this principal
    pub id: String,
    /// Display name
    pub name: String,
}

/// Metadata about an incoming admin request.
///
/// Built by the routing collaborator and handed to the
/// [`AdminGate`](crate::AdminGate). Contains simple, owned data so it stays
/// decoupled from any specific web framework's request types.
///
/// # Examples
///
/// ```
/// use admin_gate::{Action, Principal, RequestMeta, ResourceRef};
///
/// let meta = RequestMeta::new("req-42", Action::new("update"), "orders")
///     .with_principal(Principal {
///         id: "user-1".to_string(),
///         name: "Alice".to_string(),
///     })
///     .with_resource_class("Order");
///
/// assert_eq!(meta.resource_ref(), ResourceRef::Class("Order"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// The action being attempted, from the routing decision
    pub action: Action,
    /// The handler's symbolic name, used when no resource class resolves
    pub handler_name: String,
    /// Authenticated principal, if any
    pub principal: Option<Principal>,
    /// Target resource class, when the concrete handler exposes one
    pub resource_class: Option<&'static str>,
}

impl RequestMeta {
    /// Creates request metadata with no principal and no resource class.
    pub fn new(
        request_id: impl Into<String>,
        action: Action,
        handler_name: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            action,
            handler_name: handler_name.into(),
            principal: None,
            resource_class: None,
        }
    }

    /// Sets the authenticated principal.
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Sets the handler's target resource class.
    pub fn with_resource_class(mut self, class: &'static str) -> Self {
        self.resource_class = Some(class);
        self
    }

    /// Resolves the resource reference for this request.
    ///
    /// The handler's class takes precedence; otherwise the handler name is
    /// used. See [`ResourceRef::resolve`].
    pub fn resource_ref(&self) -> ResourceRef {
        ResourceRef::resolve(self.resource_class, &self.handler_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_carries_symbolic_name() {
        let action = Action::new("destroy");
        assert_eq!(action.as_str(), "destroy");
        assert_eq!(format!("{}", action), "destroy");
    }

    #[test]
    fn admin_action_is_distinguished() {
        assert_eq!(Action::admin().as_str(), "admin");
        assert_ne!(Action::admin(), Action::new("update"));
    }

    #[test]
    fn meta_resolves_class_when_present() {
        let meta =
            RequestMeta::new("req-1", Action::new("update"), "orders").with_resource_class("Order");
        assert_eq!(meta.resource_ref(), ResourceRef::Class("Order"));
    }

    #[test]
    fn meta_falls_back_to_handler_name() {
        let meta = RequestMeta::new("req-2", Action::new("index"), "dashboard");
        assert_eq!(
            meta.resource_ref(),
            ResourceRef::Name("dashboard".to_string())
        );
    }
}
