use crate::macros::text_header;

// Subject  =  ( "Subject" / "s" ) HCOLON [TEXT-UTF8-TRIM]
text_header! {
    /// The `Subject` SIP header.
    ///
    /// A summary or the nature of the call.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::Subject;
    /// let subject = Subject::new("Need more boxes");
    ///
    /// assert_eq!(subject.to_string(), "Subject: Need more boxes");
    /// ```
    Subject {
        name: "Subject",
        short: Some("s"),
        allow_empty: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        let subject = Subject::from_bytes("Tech Support ☎".as_bytes()).unwrap();

        assert_eq!(subject.as_str(), "Tech Support ☎");
    }
}
