#[macro_export]
macro_rules! digits {
    ($reader:expr) => {{
        $reader.read_while($crate::util::is_digit)
    }};
}

#[macro_export]
macro_rules! until_newline {
    ($reader:expr) => {{
        $reader.read_while($crate::util::is_not_newline)
    }};
}

pub use digits;
pub use until_newline;

#[cfg(test)]
mod tests {
    use crate::Scanner;

    #[test]
    fn test_macros() {
        let mut scanner = Scanner::new(b"42 INVITE\r\n");

        assert_eq!(digits!(scanner), b"42");
        assert_eq!(until_newline!(scanner), b" INVITE");
    }
}
