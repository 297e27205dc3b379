use crate::macros::token_list_header;

// Unsupported  =  "Unsupported" HCOLON option-tag *(COMMA option-tag)
token_list_header! {
    /// The `Unsupported` SIP header.
    ///
    /// Lists the features not supported by the UAS.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Unsupported;
    /// let unsupported = Unsupported::new(["foo"]);
    ///
    /// assert_eq!(unsupported.to_string(), "Unsupported: foo");
    /// ```
    Unsupported {
        name: "Unsupported",
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
        let unsupported = Unsupported::from_bytes(b"foo, bar").unwrap();

        assert_eq!(unsupported.iter().collect::<Vec<_>>(), ["foo", "bar"]);
    }
}
