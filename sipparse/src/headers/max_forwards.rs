use crate::macros::numeric_header;

// Max-Forwards  =  "Max-Forwards" HCOLON 1*DIGIT
numeric_header! {
    /// The `Max-Forwards` SIP header.
    ///
    /// Limits the number of proxies or gateways that can forward the
    /// request.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sipparse::headers::MaxForwards;
    /// let max = MaxForwards::new(70);
    ///
    /// assert_eq!(max.to_string(), "Max-Forwards: 70");
    /// ```
    MaxForwards {
        name: "Max-Forwards",
        short: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::SipHeaderParse;

    #[test]
    fn test_parse() {
        let max = MaxForwards::from_bytes(b"6 ").unwrap();

        assert_eq!(max.value(), 6);
    }
}
