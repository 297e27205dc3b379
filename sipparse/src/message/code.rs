use std::fmt;

use crate::matching::Matches;

macro_rules! status_codes {
    ($( $(#[$doc:meta])* ($num:literal, $konst:ident, $phrase:literal); )+) => {
        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $konst: StatusCode = StatusCode($num);
            )+

            /// Returns the reason phrase RFC3261 and its extensions
            /// register for this code, if any.
            pub fn canonical_reason(&self) -> Option<&'static str> {
                match self.0 {
                    $( $num => Some($phrase), )+
                    _ => None,
                }
            }
        }
    };
}

/// Classifies SIP status codes into categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeClass {
    /// Provisional responses (1xx)
    Provisional,
    /// Successful responses (2xx)
    Success,
    /// Redirection responses (3xx)
    Redirection,
    /// Client failure responses (4xx)
    ClientError,
    /// Server failure responses (5xx)
    ServerError,
    /// Global failure responses (6xx)
    GlobalFailure,
}

/// A SIP status code, always three digits from `100` to `699`.
///
/// # Examples
///
/// ```
/// use sipparse::message::{CodeClass, StatusCode};
///
/// let code = StatusCode::try_from(486).unwrap();
///
/// assert_eq!(code, StatusCode::BUSY_HERE);
/// assert_eq!(code.class(), CodeClass::ClientError);
/// assert_eq!(code.canonical_reason(), Some("Busy Here"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

status_codes! {
    // 1xx – Provisional Responses
    /// `Trying` status code.
    (100, TRYING, "Trying");
    /// `Ringing` status code.
    (180, RINGING, "Ringing");
    (181, CALL_IS_BEING_FORWARDED, "Call Is Being Forwarded");
    (182, QUEUED, "Queued");
    (183, SESSION_PROGRESS, "Session Progress");
    (199, EARLY_DIALOG_TERMINATED, "Early Dialog Terminated");
    // 2xx – Successful Responses
    /// `OK` status code.
    (200, OK, "OK");
    (202, ACCEPTED, "Accepted");
    (204, NO_NOTIFICATION, "No Notification");
    // 3xx – Redirection Responses
    (300, MULTIPLE_CHOICES, "Multiple Choices");
    (301, MOVED_PERMANENTLY, "Moved Permanently");
    (302, MOVED_TEMPORARILY, "Moved Temporarily");
    (305, USE_PROXY, "Use Proxy");
    (380, ALTERNATIVE_SERVICE, "Alternative Service");
    // 4xx – Client Failure Responses
    /// `Bad Request` status code.
    (400, BAD_REQUEST, "Bad Request");
    (401, UNAUTHORIZED, "Unauthorized");
    (402, PAYMENT_REQUIRED, "Payment Required");
    (403, FORBIDDEN, "Forbidden");
    (404, NOT_FOUND, "Not Found");
    (405, METHOD_NOT_ALLOWED, "Method Not Allowed");
    (406, NOT_ACCEPTABLE, "Not Acceptable");
    (407, PROXY_AUTHENTICATION_REQUIRED, "Proxy Authentication Required");
    (408, REQUEST_TIMEOUT, "Request Timeout");
    (409, CONFLICT, "Conflict");
    (410, GONE, "Gone");
    (411, LENGTH_REQUIRED, "Length Required");
    (412, CONDITIONAL_REQUEST_FAILED, "Conditional Request Failed");
    (413, REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large");
    (414, REQUEST_URI_TOO_LONG, "Request-URI Too Long");
    (415, UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type");
    (416, UNSUPPORTED_URI_SCHEME, "Unsupported URI Scheme");
    (417, UNKNOWN_RESOURCE_PRIORITY, "Unknown Resource-Priority");
    (420, BAD_EXTENSION, "Bad Extension");
    (421, EXTENSION_REQUIRED, "Extension Required");
    (422, SESSION_INTERVAL_TOO_SMALL, "Session Interval Too Small");
    (423, INTERVAL_TOO_BRIEF, "Interval Too Brief");
    (428, USE_IDENTITY_HEADER, "Use Identity Header");
    (429, PROVIDE_REFERRER_IDENTITY, "Provide Referrer Identity");
    (430, FLOW_FAILED, "Flow Failed");
    (433, ANONYMITY_DISALLOWED, "Anonymity Disallowed");
    (436, BAD_IDENTITY_INFO, "Bad Identity-Info");
    (437, UNSUPPORTED_CERTIFICATE, "Unsupported Certificate");
    (438, INVALID_IDENTITY_HEADER, "Invalid Identity Header");
    (439, FIRST_HOP_LACKS_OUTBOUND_SUPPORT, "First Hop Lacks Outbound Support");
    (440, MAX_BREADTH_EXCEEDED, "Max-Breadth Exceeded");
    (469, BAD_INFO_PACKAGE, "Bad Info Package");
    (470, CONSENT_NEEDED, "Consent Needed");
    (480, TEMPORARILY_UNAVAILABLE, "Temporarily Unavailable");
    (481, CALL_OR_TRANSACTION_DOES_NOT_EXIST, "Call/Transaction Does Not Exist");
    (482, LOOP_DETECTED, "Loop Detected");
    (483, TOO_MANY_HOPS, "Too Many Hops");
    (484, ADDRESS_INCOMPLETE, "Address Incomplete");
    (485, AMBIGUOUS, "Ambiguous");
    /// `Busy Here` status code.
    (486, BUSY_HERE, "Busy Here");
    (487, REQUEST_TERMINATED, "Request Terminated");
    (488, NOT_ACCEPTABLE_HERE, "Not Acceptable Here");
    (489, BAD_EVENT, "Bad Event");
    (491, REQUEST_PENDING, "Request Pending");
    (493, UNDECIPHERABLE, "Undecipherable");
    (494, SECURITY_AGREEMENT_REQUIRED, "Security Agreement Required");
    // 5xx – Server Failure Responses
    (500, SERVER_INTERNAL_ERROR, "Server Internal Error");
    (501, NOT_IMPLEMENTED, "Not Implemented");
    (502, BAD_GATEWAY, "Bad Gateway");
    (503, SERVICE_UNAVAILABLE, "Service Unavailable");
    (504, SERVER_TIMEOUT, "Server Time-out");
    (505, VERSION_NOT_SUPPORTED, "Version Not Supported");
    (513, MESSAGE_TOO_LARGE, "Message Too Large");
    (555, PUSH_NOTIFICATION_SERVICE_NOT_SUPPORTED, "Push Notification Service Not Supported");
    (580, PRECONDITION_FAILURE, "Precondition Failure");
    // 6xx – Global Failure Responses
    (600, BUSY_EVERYWHERE, "Busy Everywhere");
    (603, DECLINE, "Decline");
    (604, DOES_NOT_EXIST_ANYWHERE, "Does Not Exist Anywhere");
    (606, NOT_ACCEPTABLE_ANYWHERE, "Not Acceptable");
    (607, UNWANTED, "Unwanted");
    (608, REJECTED, "Rejected");
}

impl StatusCode {
    /// Converts a `StatusCode` into its numeric code.
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    ///  Returns the class of the status code.
    pub fn class(&self) -> CodeClass {
        match self.0 {
            100..=199 => CodeClass::Provisional,
            200..=299 => CodeClass::Success,
            300..=399 => CodeClass::Redirection,
            400..=499 => CodeClass::ClientError,
            500..=599 => CodeClass::ServerError,
            _ => CodeClass::GlobalFailure,
        }
    }

    /// Returns [`true`] if its status code is provisional (from `100` to
    /// `199`), and [`false`] otherwise.
    #[inline]
    pub fn is_provisional(&self) -> bool {
        matches!(self.class(), CodeClass::Provisional)
    }

    /// Returns [`true`]  if its status code is final (from `200` to `699` ),
    /// and [`false`] otherwise.
    #[inline]
    pub fn is_final(&self) -> bool {
        !self.is_provisional()
    }
}

/// The code is not in the `100..=699` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStatusCode;

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        if (100..=699).contains(&code) {
            Ok(StatusCode(code))
        } else {
            Err(InvalidStatusCode)
        }
    }
}

impl TryFrom<&[u8]> for StatusCode {
    type Error = InvalidStatusCode;

    /// Accepts exactly three ASCII digits.
    fn try_from(code: &[u8]) -> Result<Self, Self::Error> {
        let [a, b, c] = code else {
            return Err(InvalidStatusCode);
        };
        if !(a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit()) {
            return Err(InvalidStatusCode);
        }
        let num = (a - b'0') as u16 * 100 + (b - b'0') as u16 * 10 + (c - b'0') as u16;

        StatusCode::try_from(num)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Matches for StatusCode {
    fn matches(&self, template: &Self) -> bool {
        self == template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_bytes() {
        assert_eq!(StatusCode::try_from(&b"200"[..]), Ok(StatusCode::OK));
        assert_eq!(StatusCode::try_from(&b"299"[..]).map(StatusCode::as_u16), Ok(299));
        assert_eq!(StatusCode::try_from(&b"20"[..]), Err(InvalidStatusCode));
        assert_eq!(StatusCode::try_from(&b"2000"[..]), Err(InvalidStatusCode));
        assert_eq!(StatusCode::try_from(&b"099"[..]), Err(InvalidStatusCode));
        assert_eq!(StatusCode::try_from(&b"7a0"[..]), Err(InvalidStatusCode));
    }

    #[test]
    fn test_class() {
        assert!(StatusCode::TRYING.is_provisional());
        assert!(StatusCode::OK.is_final());
        assert_eq!(StatusCode::DECLINE.class(), CodeClass::GlobalFailure);
        assert_eq!(StatusCode::SERVER_TIMEOUT.class(), CodeClass::ServerError);
    }

    #[test]
    fn test_canonical_reason() {
        assert_eq!(StatusCode::OK.canonical_reason(), Some("OK"));
        assert_eq!(StatusCode::try_from(299).unwrap().canonical_reason(), None);
    }
}
