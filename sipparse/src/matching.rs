//! Template matching for parsed values.
//!
//! A template is a value of the same type where unset parts act as
//! wildcards: `None`, empty strings and empty lists match anything.

use std::sync::Arc;

/// Compare a parsed value against a template.
///
/// # Examples
///
/// ```
/// use sipparse::matching::Matches;
///
/// let uri = sipparse::parse_uri("sip:alice@atlanta.com;transport=tcp").unwrap();
/// let template = sipparse::parse_uri("sip:atlanta.com").unwrap();
///
/// assert!(uri.matches(&template));
/// ```
pub trait Matches {
    /// Returns `true` if every part set in `template` is equal in `self`.
    fn matches(&self, template: &Self) -> bool;
}

impl Matches for Arc<str> {
    fn matches(&self, template: &Self) -> bool {
        template.is_empty() || self == template
    }
}

impl Matches for str {
    fn matches(&self, template: &Self) -> bool {
        template.is_empty() || self == template
    }
}

impl Matches for u32 {
    fn matches(&self, template: &Self) -> bool {
        self == template
    }
}

impl Matches for u16 {
    fn matches(&self, template: &Self) -> bool {
        self == template
    }
}

impl<T: Matches> Matches for Option<T> {
    fn matches(&self, template: &Self) -> bool {
        match (self, template) {
            (_, None) => true,
            (Some(value), Some(template)) => value.matches(template),
            (None, Some(_)) => false,
        }
    }
}

/// Every element of the template must match some element of `self`.
impl<T: Matches> Matches for Vec<T> {
    fn matches(&self, template: &Self) -> bool {
        template
            .iter()
            .all(|t| self.iter().any(|value| value.matches(t)))
    }
}

/// Compare two strings ignoring ASCII case, empty template matches all.
pub(crate) fn matches_ignore_case(value: &str, template: &str) -> bool {
    template.is_empty() || value.eq_ignore_ascii_case(template)
}
