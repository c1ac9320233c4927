use std::fmt;

/// Reference to the kind of thing an action targets, used for capability checks.
///
/// Admin handlers are usually bound to one resource class (orders, products,
/// users). When a handler exposes its class, capability checks run against
/// it. Handlers not tied to a single class (dashboards, reports) fall back
/// to their own symbolic name.
///
/// Exactly one variant is selected per request; `resolve` encodes the
/// precedence.
///
/// # Examples
///
/// ```
/// use admin_gate::ResourceRef;
///
/// // Handler bound to a class: the class wins.
/// let r = ResourceRef::resolve(Some("Order"), "orders");
/// assert_eq!(r, ResourceRef::Class("Order"));
///
/// // No class resolvable: fall back to the handler's name.
/// let r = ResourceRef::resolve(None, "dashboard");
/// assert_eq!(r, ResourceRef::Name("dashboard".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceRef {
    /// A resource class (type-level check, e.g. "can administer Orders").
    Class(&'static str),
    /// A symbolic handler name used when no class is resolvable.
    Name(String),
}

impl ResourceRef {
    /// Resolves the resource reference for a request.
    ///
    /// The handler's target class takes precedence when present; otherwise
    /// the handler's own symbolic name is used. Resolution happens once per
    /// request, before authorization.
    pub fn resolve(class: Option<&'static str>, handler_name: &str) -> Self {
        match class {
            Some(c) => ResourceRef::Class(c),
            None => ResourceRef::Name(handler_name.to_string()),
        }
    }

    /// Returns the label used for policy lookups and log fields.
    pub fn label(&self) -> &str {
        match self {
            ResourceRef::Class(c) => c,
            ResourceRef::Name(n) => n,
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of one resource *instance*, used as a lock key.
///
/// Distinct from [`ResourceRef`], which is type/category-level: two
/// different order instances get two different identities and never contend
/// with each other.
///
/// # Examples
///
/// ```
/// use admin_gate::ResourceIdentity;
///
/// let id = ResourceIdentity::new("order", "1001");
/// assert_eq!(id.as_str(), "order:1001");
/// assert_ne!(id, ResourceIdentity::new("order", "1002"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentity(String);

impl ResourceIdentity {
    /// Creates an identity from a resource kind and an instance id.
    pub fn new(kind: &str, id: impl fmt::Display) -> Self {
        Self(format!("{}:{}", kind, id))
    }

    /// Returns the identity as a string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_takes_precedence_over_handler_name() {
        let r = ResourceRef::resolve(Some("Product"), "products");
        assert_eq!(r, ResourceRef::Class("Product"));
        assert_eq!(r.label(), "Product");
    }

    #[test]
    fn falls_back_to_handler_name() {
        let r = ResourceRef::resolve(None, "reports");
        assert_eq!(r, ResourceRef::Name("reports".to_string()));
        assert_eq!(r.label(), "reports");
    }

    #[test]
    fn identity_is_scoped_per_instance() {
        let a = ResourceIdentity::new("order", 1001);
        let b = ResourceIdentity::new("order", 1002);
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "order:1001");
    }

    #[test]
    fn identity_display_matches_key() {
        let id = ResourceIdentity::new("product", "widget-7");
        assert_eq!(format!("{}", id), "product:widget-7");
    }
}
