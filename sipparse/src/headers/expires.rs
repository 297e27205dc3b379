use crate::macros::numeric_header;

// Expires  =  "Expires" HCOLON delta-seconds
numeric_header! {
    /// The `Expires` SIP header.
    ///
    /// Gives the relative time after which the message (or content)
    /// expires.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Expires;
    /// let expires = Expires::new(5);
    ///
    /// assert_eq!(expires.to_string(), "Expires: 5");
    /// ```
    Expires {
        name: "Expires",
        short: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;
    use crate::Error;

    #[test]
    fn test_parse() {
        assert_eq!(Expires::from_bytes(b"1000").unwrap(), Expires::new(1000));
        assert_eq!(Expires::from_bytes(b"0").unwrap().value(), 0);
    }

    #[test]
    fn test_parse_beyond_u32() {
        assert_eq!(Expires::from_bytes(b"4294967296").unwrap().value(), 4_294_967_296);
        assert_matches!(Expires::from_bytes(b"18446744073709551616"), Err(Error::Scan(_)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_matches!(Expires::from_bytes(b"-1"), Err(Error::Scan(_)));
        assert!(Expires::from_bytes(b"abc").is_err());
        assert!(Expires::from_bytes(b"").is_err());
    }
}
