use crate::macros::token_list_header;

// Content-Encoding  =  ( "Content-Encoding" / "e" ) HCOLON
//                      content-coding *(COMMA content-coding)
token_list_header! {
    /// The `Content-Encoding` SIP header.
    ///
    /// Indicates what additional content codings have been applied to the
    /// message body.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::ContentEncoding;
    /// let encoding = ContentEncoding::new(["gzip"]);
    ///
    /// assert_eq!(encoding.to_string(), "Content-Encoding: gzip");
    /// ```
    ContentEncoding {
        name: "Content-Encoding",
        short: Some("e"),
        allow_empty: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        let encoding = ContentEncoding::from_bytes(b"gzip, tar").unwrap();

        assert!(encoding.contains("GZIP"));
        assert_eq!(encoding.len(), 2);
    }
}
