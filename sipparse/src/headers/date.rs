use crate::macros::text_header;

// Date  =  "Date" HCOLON SIP-date
text_header! {
    /// The `Date` SIP header.
    ///
    /// The date is kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Date;
    /// let date = Date::new("Sat, 13 Nov 2010 23:29:00 GMT");
    ///
    /// assert_eq!(date.to_string(), "Date: Sat, 13 Nov 2010 23:29:00 GMT");
    /// ```
    Date {
        name: "Date",
        short: None,
        allow_empty: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        let date = Date::from_bytes(b"Sat, 13 Nov 2010 23:29:00 GMT").unwrap();

        assert_eq!(date.as_str(), "Sat, 13 Nov 2010 23:29:00 GMT");
    }
}
