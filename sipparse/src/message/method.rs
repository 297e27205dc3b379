use std::fmt;
use std::sync::Arc;

use crate::matching::Matches;

/// An SIP Method.
///
/// This enum declares SIP methods as described by RFC3261 and extensions.
/// Methods are case-sensitive, `"invite"` is an extension method and not
/// [`SipMethod::Invite`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SipMethod {
    /// SIP INVITE Method.
    Invite,
    /// SIP ACK Method.
    Ack,
    /// SIP BYE Method.
    Bye,
    /// SIP CANCEL Method.
    Cancel,
    /// SIP REGISTER Method.
    Register,
    /// SIP OPTIONS Method.
    Options,
    /// SIP INFO Method.
    Info,
    /// SIP NOTIFY Method.
    Notify,
    /// SIP SUBSCRIBE Method.
    Subscribe,
    /// SIP UPDATE Method.
    Update,
    /// SIP REFER Method.
    Refer,
    /// SIP PRACK Method.
    Prack,
    /// SIP MESSAGE Method.
    Message,
    /// SIP PUBLISH Method.
    Publish,
    /// An extension method, kept as written.
    Other(Arc<str>),
}

impl SipMethod {
    /// Returns the string representation of a method.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        match self {
            SipMethod::Invite => "INVITE",
            SipMethod::Ack => "ACK",
            SipMethod::Bye => "BYE",
            SipMethod::Cancel => "CANCEL",
            SipMethod::Register => "REGISTER",
            SipMethod::Options => "OPTIONS",
            SipMethod::Info => "INFO",
            SipMethod::Notify => "NOTIFY",
            SipMethod::Subscribe => "SUBSCRIBE",
            SipMethod::Update => "UPDATE",
            SipMethod::Refer => "REFER",
            SipMethod::Prack => "PRACK",
            SipMethod::Message => "MESSAGE",
            SipMethod::Publish => "PUBLISH",
            SipMethod::Other(method) => method,
        }
    }

    pub fn is_invite(&self) -> bool {
        matches!(self, Self::Invite)
    }

    pub fn is_ack(&self) -> bool {
        matches!(self, Self::Ack)
    }

    /// Returns `true` if this is not one of the RFC3261 and well known
    /// extension methods.
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<&str> for SipMethod {
    fn from(value: &str) -> Self {
        match value {
            "INVITE" => SipMethod::Invite,
            "CANCEL" => SipMethod::Cancel,
            "ACK" => SipMethod::Ack,
            "BYE" => SipMethod::Bye,
            "REGISTER" => SipMethod::Register,
            "OPTIONS" => SipMethod::Options,
            "INFO" => SipMethod::Info,
            "NOTIFY" => SipMethod::Notify,
            "SUBSCRIBE" => SipMethod::Subscribe,
            "UPDATE" => SipMethod::Update,
            "REFER" => SipMethod::Refer,
            "PRACK" => SipMethod::Prack,
            "MESSAGE" => SipMethod::Message,
            "PUBLISH" => SipMethod::Publish,
            other => SipMethod::Other(other.into()),
        }
    }
}

impl fmt::Display for SipMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Matches for SipMethod {
    fn matches(&self, template: &Self) -> bool {
        match template {
            SipMethod::Other(m) if m.is_empty() => true,
            _ => self == template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_is_case_sensitive() {
        assert_eq!(SipMethod::from("INVITE"), SipMethod::Invite);
        assert_eq!(SipMethod::from("invite"), SipMethod::Other("invite".into()));
        assert_eq!(SipMethod::from("invite").to_string(), "invite");
    }

    #[test]
    fn test_extension_method() {
        let method = SipMethod::from("FOO");

        assert!(method.is_extension());
        assert_eq!(method.as_str(), "FOO");
    }
}
