//! Resource event messages for the presentation collaborator.
//!
//! English defaults; localized catalogs are the presentation layer's
//! concern.

use std::fmt;

/// Lifecycle event a flash message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceEvent {
    /// Resource was created
    Created,
    /// Resource was updated
    Updated,
    /// Resource was removed
    Removed,
}

impl fmt::Display for ResourceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceEvent::Created => write!(f, "created"),
            ResourceEvent::Updated => write!(f, "updated"),
            ResourceEvent::Removed => write!(f, "removed"),
        }
    }
}

/// Builds the flash message for a resource lifecycle event.
///
/// The instance name, when present and non-empty, is quoted after the
/// resource label.
///
/// # Examples
///
/// ```
/// use admin_gate::{flash_message, ResourceEvent};
///
/// assert_eq!(
///     flash_message("Product", Some("Widget"), ResourceEvent::Updated),
///     "Product \"Widget\" has been successfully updated!"
/// );
/// assert_eq!(
///     flash_message("Order", None, ResourceEvent::Created),
///     "Order has been successfully created!"
/// );
/// ```
pub fn flash_message(resource: &str, name: Option<&str>, event: ResourceEvent) -> String {
    let desc = match name {
        Some(n) if !n.is_empty() => format!("{} \"{}\"", resource, n),
        _ => resource.to_string(),
    };
    format!("{} has been successfully {}!", desc, event)
}
