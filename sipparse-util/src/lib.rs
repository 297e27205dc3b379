use std::fmt;

pub mod macros;
pub mod util;

use crate::util::is_digit;

pub type Result<T> = std::result::Result<T, Error>;

/// Line and column of the scanner cursor, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Current line.
    line: usize,
    /// Current column.
    col: usize,
}

impl Position {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// A saved cursor state that can be restored with [`Scanner::restore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    idx: usize,
    pos: Position,
}

impl Mark {
    /// Byte offset where the mark was taken.
    pub fn offset(&self) -> usize {
        self.idx
    }
}

/// Reading byte slice while keep the line and column.
#[derive(Debug)]
pub struct Scanner<'a> {
    /// The input bytes slice to be read.
    src: &'a [u8],
    /// Current position
    pos: Position,
    /// Current index.
    idx: usize,
}

impl<'a> Scanner<'a> {
    /// Create a `Scanner` from a byte slice.
    ///
    /// The `line` and `col` will always start from 1.
    pub const fn new(src: &'a [u8]) -> Self {
        Scanner {
            src,
            pos: Position { line: 1, col: 1 },
            idx: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Byte offset of the cursor from the start of the input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.idx
    }

    /// The whole input, including what was already read.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.src
    }

    /// Returns `true` if all bytes where read
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.idx >= self.src.len()
    }

    /// Get next byte without advance
    #[inline]
    pub fn peek(&self) -> Option<&u8> {
        self.src.get(self.idx)
    }

    /// Same as [Scanner::peek] but will return an `Result`
    /// instead a `Option`.
    #[inline]
    pub fn lookahead(&self) -> Result<&u8> {
        match self.src.get(self.idx) {
            Some(b) => Ok(b),
            None => self.error(ErrorKind::Eof),
        }
    }

    /// Get `n` bytes without advance.
    pub fn peek_n(&self, n: usize) -> Option<&'a [u8]> {
        self.remaining().get(..n)
    }

    #[inline]
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.remaining().starts_with(pat)
    }

    /// Same as [Scanner::starts_with] ignoring ASCII case.
    pub fn starts_with_ignore_case(&self, pat: &[u8]) -> bool {
        self.peek_n(pat.len()).is_some_and(|s| s.eq_ignore_ascii_case(pat))
    }

    /// Save the current cursor.
    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            idx: self.idx,
            pos: self.pos,
        }
    }

    /// Move the cursor back to a previously saved [`Mark`].
    #[inline]
    pub fn restore(&mut self, mark: Mark) {
        self.idx = mark.idx;
        self.pos = mark.pos;
    }

    /// Moves to the next character n times
    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.next().is_none() {
                break;
            }
        }
    }

    /// Read a `u32` number from the slice.
    ///
    /// Only ASCII digits are accepted, a leading sign is an error.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_num()
    }

    /// Read a `u64` number from the slice.
    ///
    /// Only ASCII digits are accepted, a leading sign is an error.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_num()
    }

    /// Read a `u16` number from the slice.
    ///
    /// Only ASCII digits are accepted, a leading sign is an error.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_num()
    }

    /// `read_while()` will call the `func` closure for
    /// each element in the slice and advance
    /// while the closure returns `true`.
    ///
    /// # Returns
    ///
    /// A slice of bytes from the starting position to the position
    /// where the closure `func` returns `false` or the end of the slice
    /// is reached.
    #[inline(always)]
    pub fn read_while<F>(&mut self, func: F) -> &'a [u8]
    where
        F: Fn(u8) -> bool,
    {
        let start = self.idx;
        let src = self.src;

        while self.idx < src.len() && func(src[self.idx]) {
            self.bump(src[self.idx]);
        }

        &src[start..self.idx]
    }

    pub fn peek_while<F>(&self, func: F) -> (&'a [u8], Option<u8>)
    where
        F: Fn(u8) -> bool,
    {
        let src = &self.src[self.idx..];

        let n = src.iter().position(|&b| !func(b)).unwrap_or(src.len());
        let next_byte = src.get(n).copied();

        (&src[..n], next_byte)
    }

    /// Read until `byte` is found, the byte itself is not consumed.
    pub fn read_until(&mut self, byte: u8) -> &'a [u8] {
        self.read_while(|b| b != byte)
    }

    /// Checks whether the current characters match the specified slice
    /// and consume them.
    pub fn must_read_bytes(&mut self, tag: &[u8]) -> Result<()> {
        if self.starts_with(tag) {
            self.bump_n(tag.len());
            Ok(())
        } else {
            self.error(ErrorKind::Tag)
        }
    }

    /// Read next byte if equals to `b`.
    ///
    /// # Errors
    ///
    /// This method will return an error if the byte is not
    /// equal to `b`.
    ///
    /// If the slice reached the end, then an error will
    /// also be returned.
    pub fn must_read(&mut self, b: u8) -> Result<()> {
        let Some(&n) = self.peek() else {
            return self.error(ErrorKind::Eof);
        };
        if b != n {
            return self.error(ErrorKind::Char { expected: b, found: n });
        }
        self.bump(n);
        Ok(())
    }

    /// Read number in the slice.
    ///
    /// This method read until an invalid digit is found.
    pub fn read_num<N>(&mut self) -> Result<N>
    where
        N: lexical_core::FromLexical,
    {
        if !self.peek().is_some_and(|&b| is_digit(b)) {
            return self.error(ErrorKind::Num);
        }
        match lexical_core::parse_partial::<N>(self.remaining()) {
            Ok((value, read)) if read > 0 => {
                self.bump_n(read);
                Ok(value)
            }
            _ => self.error(ErrorKind::Num),
        }
    }

    /// Read digits with an optional fraction, e.g. `"54.6"`.
    pub fn scan_number_str(&mut self) -> &'a [u8] {
        let start = self.idx;
        self.read_while(is_digit);

        if self.consume_if(|b| b == b'.').is_some() {
            self.read_while(is_digit);
        }

        &self.src[start..self.idx]
    }

    /// Call the `func` closure for next byte and read it if
    /// the closure returns `true`.
    ///
    /// # Returns
    ///
    /// The byte readed.
    #[inline(always)]
    pub fn consume_if<F>(&mut self, func: F) -> Option<u8>
    where
        F: FnOnce(u8) -> bool,
    {
        match self.peek() {
            Some(&matched) if func(matched) => {
                self.bump(matched);
                Some(matched)
            }
            _ => None,
        }
    }

    #[inline(always)]
    fn bump(&mut self, byte: u8) {
        if byte == b'\n' {
            self.pos.col = 1;
            self.pos.line += 1;
        } else {
            self.pos.col += 1;
        }
        self.idx += 1;
    }

    /// The bytes not read yet.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.src.get(self.idx..).unwrap_or_default()
    }

    /// Build an error of `kind` at the current cursor.
    pub fn error<T>(&self, kind: ErrorKind) -> Result<T> {
        Err(Error {
            kind,
            offset: self.idx,
            line: self.pos.line,
            col: self.pos.col,
        })
    }
}

/// Errors that can occur while reading the src.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// End of file reached.
    Eof,
    Char {
        expected: u8,
        found: u8,
    },
    Num,
    Tag,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Eof => f.write_str("unexpected end of input"),
            ErrorKind::Char { expected, found } => write!(
                f,
                "expected '{}' but found '{}'",
                expected.escape_ascii(),
                found.escape_ascii()
            ),
            ErrorKind::Num => f.write_str("invalid number"),
            ErrorKind::Tag => f.write_str("unexpected token"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Error {
    pub kind: ErrorKind,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line:{} column:{}", self.kind, self.line, self.col)
    }
}

impl std::error::Error for Error {}

impl AsRef<[u8]> for Scanner<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.remaining()
    }
}

impl Iterator for Scanner<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.src.get(self.idx).copied().inspect(|&byte| self.bump(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_num() {
        let mut reader = Scanner::new("12345".as_bytes());
        assert_eq!(reader.read_num(), Ok(12345u32));

        let mut reader = Scanner::new("NaN".as_bytes());
        assert!(reader.read_num::<u32>().is_err());
        assert_eq!(reader.as_ref(), b"NaN");

        let mut reader = Scanner::new("9123Test".as_bytes());
        assert_eq!(reader.read_num(), Ok(9123u32));
        assert_eq!(reader.as_ref(), b"Test");
    }

    #[test]
    fn test_read_num_rejects_sign() {
        let mut reader = Scanner::new("-1".as_bytes());
        let err = reader.read_u32().unwrap_err();

        assert_eq!(err.kind, ErrorKind::Num);
        assert_eq!(err.offset, 0);
        assert_eq!(reader.remaining(), b"-1");
    }

    #[test]
    fn test_read_num_overflow() {
        let mut reader = Scanner::new("70000".as_bytes());
        assert!(reader.read_u16().is_err());
    }

    #[test]
    fn test_lookahead() {
        let mut reader = Scanner::new("Hello".as_bytes());

        assert_eq!(reader.lookahead(), Ok(&b'H'));
        reader.next();
        assert_eq!(reader.lookahead(), Ok(&b'e'));
        reader.next();
        assert_eq!(reader.lookahead(), Ok(&b'l'));

        reader.read_while(|_| true);

        assert_eq!(reader.lookahead().unwrap_err().kind, ErrorKind::Eof);
    }

    #[test]
    fn test_mark_and_restore() {
        let mut reader = Scanner::new(b"sip:alice\nbob");
        reader.read_until(b':');
        let mark = reader.mark();

        reader.read_while(|_| true);
        assert!(reader.is_eof());
        assert_eq!(reader.position().line(), 2);

        reader.restore(mark);
        assert_eq!(reader.offset(), 3);
        assert_eq!(reader.position().line(), 1);
        assert_eq!(reader.remaining(), b":alice\nbob");
    }

    #[test]
    fn test_peek_n() {
        let reader = Scanner::new(b"SIP/2.0");

        assert_eq!(reader.peek_n(3), Some(&b"SIP"[..]));
        assert_eq!(reader.peek_n(7), Some(&b"SIP/2.0"[..]));
        assert_eq!(reader.peek_n(8), None);
        assert!(reader.starts_with_ignore_case(b"sip/"));
    }

    #[test]
    fn test_must_read() {
        let mut reader = Scanner::new(b"<sip");

        assert!(reader.must_read(b'<').is_ok());
        assert_eq!(
            reader.must_read(b'>').unwrap_err().kind,
            ErrorKind::Char {
                expected: b'>',
                found: b's'
            }
        );
        assert!(reader.must_read_bytes(b"sip").is_ok());
        assert!(reader.is_eof());
    }

    #[test]
    fn test_scan_number_str() {
        let mut reader = Scanner::new(b"54.6 1.2.3");

        assert_eq!(reader.scan_number_str(), b"54.6");
        assert_eq!(reader.remaining(), b" 1.2.3");

        reader.bump_n(1);
        assert_eq!(reader.scan_number_str(), b"1.2");
        assert_eq!(reader.remaining(), b".3");
    }

    #[test]
    fn test_read_u64() {
        let mut reader = Scanner::new(b"4294967296;");

        assert_eq!(reader.read_u64().unwrap(), 4_294_967_296);
        assert_eq!(reader.remaining(), b";");
        assert!(Scanner::new(b"18446744073709551616").read_u64().is_err());
    }
}
