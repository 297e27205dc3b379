use crate::macros::numeric_header;

// Min-Expires  =  "Min-Expires" HCOLON delta-seconds
numeric_header! {
    /// The `Min-Expires` SIP header.
    ///
    /// The minimum refresh interval supported for soft-state elements
    /// managed by that server.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::MinExpires;
    /// let min = MinExpires::new(60);
    ///
    /// assert_eq!(min.to_string(), "Min-Expires: 60");
    /// ```
    MinExpires {
        name: "Min-Expires",
        short: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        assert_eq!(MinExpires::from_bytes(b"60").unwrap().value(), 60);
        assert!(MinExpires::from_bytes(b"sixty").is_err());
    }
}
