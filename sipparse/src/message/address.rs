use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::matching::Matches;
use crate::message::{Parameters, Uri};
use crate::parser::is_token;
use crate::{Error, Result};

const TAG_PARAM: &str = "tag";

/// An address as found in `From`, `To`, `Contact`, `Route` and similar
/// headers.
///
/// ```text
/// name-addr / addr-spec followed by *( SEMI generic-param )
/// ```
///
/// `"Bob" <sip:bob@biloxi.com>;tag=a6c85cf` and `sip:bob@biloxi.com;tag=a6c85cf`
/// parse to the same shape: the parameters after the URI always belong to
/// the address.
///
/// # Examples
///
/// ```
/// use sipparse::message::Address;
///
/// let addr: Address = "\"M. Ranganathan\"   <sip:mranga@nist.gov>".parse().unwrap();
///
/// assert_eq!(addr.display(), Some("M. Ranganathan"));
/// assert_eq!(addr.uri().to_string(), "sip:mranga@nist.gov");
/// assert_eq!(addr.to_string(), "M. Ranganathan <sip:mranga@nist.gov>");
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Address {
    pub(crate) display: Option<Arc<str>>,
    pub(crate) uri: Uri,
    pub(crate) params: Parameters,
}

impl Address {
    /// Creates an address without display name and parameters.
    pub fn new(uri: Uri) -> Self {
        Self {
            display: None,
            uri,
            params: Parameters::new(),
        }
    }

    /// Sets the display name.
    pub fn with_display(mut self, display: &str) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Sets the address parameters.
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// The display name, unquoted and unescaped.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Parameters that follow the URI, in wire order.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the `tag` parameter.
    pub fn tag(&self) -> Option<&str> {
        self.params.get_named(TAG_PARAM)
    }

    /// Returns the named address parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get_named(name)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_address(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display {
            Some(display) => {
                write_display_name(f, display)?;
                write!(f, " <{}>", self.uri)?;
            }
            None if self.uri.needs_brackets() || !self.params.is_empty() => write!(f, "<{}>", self.uri)?,
            None => write!(f, "{}", self.uri)?,
        }
        write!(f, "{}", self.params)
    }
}

fn write_display_name(f: &mut fmt::Formatter<'_>, display: &str) -> fmt::Result {
    let plain = !display.is_empty()
        && display.split(' ').all(|word| !word.is_empty() && word.bytes().all(is_token));

    if plain {
        return f.write_str(display);
    }

    f.write_str("\"")?;
    for c in display.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

impl Matches for Address {
    fn matches(&self, template: &Self) -> bool {
        self.display.matches(&template.display)
            && self.uri.matches(&template.uri)
            && self.params.matches(&template.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Host, HostPort, Scheme, SipUri, UserInfo};

    fn bob() -> Uri {
        Uri::Sip(SipUri::new(
            Scheme::Sip,
            Some(UserInfo::new("bob", None)),
            HostPort::new(Host::DomainName("biloxi.com".into()), None),
        ))
    }

    #[test]
    fn test_display_quoting() {
        let addr = Address::new(bob()).with_display("Bob");
        assert_eq!(addr.to_string(), "Bob <sip:bob@biloxi.com>");

        let addr = Address::new(bob()).with_display("Bob \"The\" Builder");
        assert_eq!(addr.to_string(), "\"Bob \\\"The\\\" Builder\" <sip:bob@biloxi.com>");

        let addr = Address::new(bob()).with_display("Doe, John");
        assert_eq!(addr.to_string(), "\"Doe, John\" <sip:bob@biloxi.com>");
    }

    #[test]
    fn test_bare_uri_display() {
        let addr = Address::new(bob());
        assert_eq!(addr.to_string(), "sip:bob@biloxi.com");

        let addr = Address::new(bob()).with_params(Parameters::from([("tag", "a6c85cf")]));
        assert_eq!(addr.to_string(), "<sip:bob@biloxi.com>;tag=a6c85cf");
        assert_eq!(addr.tag(), Some("a6c85cf"));
    }
}
