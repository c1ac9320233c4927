//! Admin locale selection.
//!
//! The back office keeps its locale choice under its own session key so an
//! administrator can browse the storefront and the admin in different
//! languages.

/// Session key for the admin's locale selection.
pub const ADMIN_LOCALE_KEY: &str = "admin_locale";

/// Resolves the locale for an admin request.
///
/// A non-empty session selection wins; otherwise the back-office
/// configuration default applies.
///
/// # Examples
///
/// ```
/// use admin_gate::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("de"), "en"), "de");
/// assert_eq!(resolve_locale(None, "en"), "en");
/// assert_eq!(resolve_locale(Some(""), "en"), "en");
/// ```
pub fn resolve_locale(session_value: Option<&str>, config_default: &str) -> String {
    match session_value {
        Some(locale) if !locale.is_empty() => locale.to_string(),
        _ => config_default.to_string(),
    }
}
