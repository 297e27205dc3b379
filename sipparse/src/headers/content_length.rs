use crate::macros::numeric_header;

// Content-Length  =  ( "Content-Length" / "l" ) HCOLON 1*DIGIT
numeric_header! {
    /// The `Content-Length` SIP header.
    ///
    /// Indicates the size of the message body, in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::ContentLength;
    /// let c_len = ContentLength::new(349);
    ///
    /// assert_eq!(c_len.to_string(), "Content-Length: 349");
    /// ```
    ContentLength {
        name: "Content-Length",
        short: Some("l"),
    }
}
