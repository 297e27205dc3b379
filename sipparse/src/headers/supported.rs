use crate::macros::token_list_header;

// Supported  =  ( "Supported" / "k" ) HCOLON
//               [option-tag *(COMMA option-tag)]
token_list_header! {
    /// The `Supported` SIP header.
    ///
    /// Enumerates all the extensions supported by the UAC or UAS. The list
    /// may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Supported;
    /// let supported = Supported::new(["100rel", "timer"]);
    ///
    /// assert_eq!(supported.to_string(), "Supported: 100rel, timer");
    /// ```
    Supported {
        name: "Supported",
        short: Some("k"),
        allow_empty: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        let supported = Supported::from_bytes(b"100rel,  timer").unwrap();

        assert!(supported.contains("timer"));
        assert_eq!(supported.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        let supported = Supported::from_bytes(b"  ").unwrap();

        assert!(supported.is_empty());
        assert_eq!(supported.to_string(), "Supported: ");
    }
}
