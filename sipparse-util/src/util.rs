//! Byte classes shared by the scanner and the grammar.

#[inline(always)]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

#[inline(always)]
pub fn is_newline(c: u8) -> bool {
    matches!(c, b'\r' | b'\n')
}

#[inline(always)]
pub fn is_not_newline(c: u8) -> bool {
    !is_newline(c)
}

#[inline(always)]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline(always)]
pub fn is_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Port zero is never a valid destination.
#[inline]
pub fn is_valid_port(port: u16) -> bool {
    port != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_space(b'\t'));
        assert!(!is_space(b'\n'));
        assert!(is_newline(b'\r'));
        assert!(is_not_newline(b'a'));
        assert!(!is_valid_port(0));
        assert!(is_valid_port(5060));
    }
}
