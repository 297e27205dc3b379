use crate::macros::text_header;

// Call-ID  =  ( "Call-ID" / "i" ) HCOLON callid
// callid   =  word [ "@" word ]
//
// Kept as an opaque identifier up to the end of the line.
text_header! {
    /// The `Call-ID` SIP header.
    ///
    /// Uniquely identifies a particular invitation or all registrations of
    /// a particular client.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::CallId;
    /// let cid = CallId::new("f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com");
    ///
    /// assert_eq!(
    ///     cid.to_string(),
    ///     "Call-ID: f81d4fae-7dec-11d0-a765-00a0c91e6bf6@foo.bar.com"
    /// );
    /// ```
    CallId {
        name: "Call-ID",
        short: Some("i"),
        allow_empty: false,
    }
}

impl CallId {
    /// Returns the call id.
    pub fn id(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;
    use crate::parser::ParseCtx;

    #[test]
    fn test_parse() {
        let src = b"bs9ki9iqbee8k5kal8mpqb   \r\n";
        let mut parser = ParseCtx::new(src);
        let cid = CallId::parse(&mut parser).unwrap();

        assert_eq!(parser.remaining(), b"\r\n");
        assert_eq!(cid.id(), "bs9ki9iqbee8k5kal8mpqb");
    }

    #[test]
    fn test_parse_empty() {
        assert!(CallId::from_bytes(b"").is_err());
    }
}
