//! Request-scoped breadcrumb trail builder.
//!
//! The trail is an append-only accumulator handed along the handling
//! pipeline and surrendered to the presentation collaborator at the end of
//! the request. Entries are never reordered or deduplicated.

/// One navigation hint: a display label and an optional navigable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Display label
    pub label: String,
    /// Navigable path, when the entry links anywhere
    pub path: Option<String>,
}

/// Summary of a user for breadcrumb composition.
#[derive(Debug, Clone)]
pub struct UserCrumb {
    /// The user's email, used as the instance label
    pub email: String,
    /// Path to the user's edit view
    pub edit_path: String,
    /// Whether the user is persisted (unsaved records get no instance entry)
    pub persisted: bool,
}

/// Summary of an order for breadcrumb composition.
#[derive(Debug, Clone)]
pub struct OrderCrumb {
    /// The order number; the instance label is rendered as `#<number>`
    pub number: String,
    /// Path to the order's edit view
    pub edit_path: String,
    /// Whether the order is persisted
    pub persisted: bool,
}

/// Summary of a product for breadcrumb composition.
#[derive(Debug, Clone)]
pub struct ProductCrumb {
    /// The product name, used as the instance label
    pub name: String,
    /// Path to the product's detail view
    pub detail_path: String,
    /// Whether the product is persisted
    pub persisted: bool,
}

/// Ordered, append-only breadcrumb trail for one request.
///
/// The per-resource compositions follow a fixed policy: the collection
/// entry is always appended first; the current-instance entry follows only
/// when the instance is persisted.
///
/// # Examples
///
/// ```
/// use admin_gate::{BreadcrumbTrail, ProductCrumb};
///
/// let mut trail = BreadcrumbTrail::new();
/// trail.product_trail(
///     "/admin/products",
///     Some(&ProductCrumb {
///         name: "Widget".to_string(),
///         detail_path: "/admin/products/widget".to_string(),
///         persisted: true,
///     }),
/// );
///
/// assert_eq!(trail.entries().len(), 2);
/// assert_eq!(trail.entries()[0].label, "Products");
/// assert_eq!(trail.entries()[1].label, "Widget");
/// ```
#[derive(Debug, Default)]
pub struct BreadcrumbTrail {
    entries: Vec<Breadcrumb>,
}

impl BreadcrumbTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry. Always succeeds; entries keep call order.
    pub fn add(&mut self, label: impl Into<String>, path: Option<String>) {
        self.entries.push(Breadcrumb {
            label: label.into(),
            path,
        });
    }

    /// Returns the entries in append order.
    pub fn entries(&self) -> &[Breadcrumb] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the trail for hand-off to the presentation collaborator.
    pub fn into_entries(self) -> Vec<Breadcrumb> {
        self.entries
    }

    /// Appends the users collection entry, then the current user when persisted.
    pub fn user_trail(&mut self, users_path: impl Into<String>, user: Option<&UserCrumb>) {
        self.add("Users", Some(users_path.into()));
        if let Some(user) = user {
            if user.persisted {
                self.add(user.email.clone(), Some(user.edit_path.clone()));
            }
        }
    }

    /// Appends the orders collection entry, then the current order when persisted.
    pub fn order_trail(&mut self, orders_path: impl Into<String>, order: Option<&OrderCrumb>) {
        self.add("Orders", Some(orders_path.into()));
        if let Some(order) = order {
            if order.persisted {
                self.add(format!("#{}", order.number), Some(order.edit_path.clone()));
            }
        }
    }

    /// Appends the products collection entry, then the current product when persisted.
    pub fn product_trail(
        &mut self,
        products_path: impl Into<String>,
        product: Option<&ProductCrumb>,
    ) {
        self.add("Products", Some(products_path.into()));
        if let Some(product) = product {
            if product.persisted {
                self.add(product.name.clone(), Some(product.detail_path.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_append_order() {
        let mut trail = BreadcrumbTrail::new();
        trail.add("Orders", Some("/admin/orders".to_string()));
        trail.add("#R1234", None);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.entries()[0].label, "Orders");
        assert_eq!(trail.entries()[1].label, "#R1234");
        assert_eq!(trail.entries()[1].path, None);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let mut trail = BreadcrumbTrail::new();
        trail.add("Orders", None);
        trail.add("Orders", None);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn new_order_gets_collection_entry_only() {
        let mut trail = BreadcrumbTrail::new();
        trail.order_trail(
            "/admin/orders",
            Some(&OrderCrumb {
                number: "R1234".to_string(),
                edit_path: "/admin/orders/R1234/edit".to_string(),
                persisted: false,
            }),
        );

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.entries()[0].label, "Orders");
    }

    #[test]
    fn persisted_order_gets_instance_entry_after_collection() {
        let mut trail = BreadcrumbTrail::new();
        trail.order_trail(
            "/admin/orders",
            Some(&OrderCrumb {
                number: "R1234".to_string(),
                edit_path: "/admin/orders/R1234/edit".to_string(),
                persisted: true,
            }),
        );

        assert_eq!(trail.len(), 2);
        assert_eq!(trail.entries()[1].label, "#R1234");
        assert_eq!(
            trail.entries()[1].path.as_deref(),
            Some("/admin/orders/R1234/edit")
        );
    }

    #[test]
    fn absent_instance_gets_collection_entry_only() {
        let mut trail = BreadcrumbTrail::new();
        trail.user_trail("/admin/users", None);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.entries()[0].label, "Users");
    }

    #[test]
    fn persisted_user_labelled_by_email() {
        let mut trail = BreadcrumbTrail::new();
        trail.user_trail(
            "/admin/users",
            Some(&UserCrumb {
                email: "alice@example.com".to_string(),
                edit_path: "/admin/users/1/edit".to_string(),
                persisted: true,
            }),
        );
        assert_eq!(trail.entries()[1].label, "alice@example.com");
    }
}
