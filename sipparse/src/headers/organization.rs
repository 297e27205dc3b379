use crate::macros::text_header;

// Organization  =  "Organization" HCOLON [TEXT-UTF8-TRIM]
text_header! {
    /// The `Organization` SIP header.
    ///
    /// The name of the organization to which the entity issuing the request
    /// or response belongs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Organization;
    /// let org = Organization::new("Boxes by Bob");
    ///
    /// assert_eq!(org.to_string(), "Organization: Boxes by Bob");
    /// ```
    Organization {
        name: "Organization",
        short: None,
        allow_empty: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        assert_eq!(Organization::from_bytes(b"Boxes by Bob").unwrap().as_str(), "Boxes by Bob");
        assert_eq!(Organization::from_bytes(b"").unwrap().as_str(), "");
    }
}
