//! Line unfolding.
//!
//! Splits the raw message at the first empty line and merges folded header
//! lines (lines starting with a space or a tab) into their logical line.
//! The fold point collapses to a single space:
//!
//! ```text
//! "Subject: I know\r\n you\r\n\r\n"  ->  "Subject: I know you"
//! ```

use crate::error::{Error, Result};

/// Header text of one message after unfolding.
#[derive(Debug, PartialEq, Eq)]
pub struct Unfolded<'a> {
    /// Logical lines joined by `\n`, the start line first.
    pub headers: String,
    /// Raw bytes after the empty line.
    pub body: &'a [u8],
    /// Offset of `body` in the original input.
    pub body_offset: usize,
}

impl Unfolded<'_> {
    /// Iterate the logical lines, start line included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.headers.split('\n')
    }
}

#[inline]
fn is_leading_junk(b: u8) -> bool {
    matches!(b, b'\r' | b'\n' | b'\0' | b' ' | b'\t')
}

#[inline]
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r'))
}

fn trim_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b' ' | b'\t' | b'\r'] = line {
        line = rest;
    }
    line
}

fn trim_start(mut line: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = line {
        line = rest;
    }
    line
}

/// Append `line` to `out`, joining it to the previous logical line when it
/// is a continuation.
fn push_line(out: &mut Vec<u8>, line: &[u8]) {
    let continuation = matches!(line.first(), Some(b' ' | b'\t')) && !out.is_empty();

    if continuation {
        let kept = trim_end(out).len();
        out.truncate(kept);
        out.push(b' ');
        out.extend_from_slice(trim_end(trim_start(line)));
    } else {
        if !out.is_empty() {
            out.push(b'\n');
        }
        out.extend_from_slice(trim_end(line));
    }
}

/// Unfold the headers of a raw message.
///
/// Returns `Ok(None)` when the input holds only line breaks, NULs or
/// whitespace (a keep-alive). Fails with [`Error::MalformedMessage`] when
/// there is no empty line ending the headers.
pub fn unfold_message(src: &[u8]) -> Result<Option<Unfolded<'_>>> {
    let Some(start) = src.iter().position(|&b| !is_leading_junk(b)) else {
        return Ok(None);
    };

    let mut out = Vec::with_capacity(src.len() - start);
    let mut pos = start;

    loop {
        let Some(nl) = src[pos..].iter().position(|&b| b == b'\n') else {
            return Err(Error::MalformedMessage("missing empty line after headers".into()));
        };
        let line = &src[pos..pos + nl];
        pos += nl + 1;

        if is_blank(line) {
            break;
        }
        push_line(&mut out, line);
    }

    Ok(Some(Unfolded {
        headers: String::from_utf8_lossy(&out).into_owned(),
        body: &src[pos..],
        body_offset: pos,
    }))
}

/// Unfold a single header, which needs no terminating empty line.
///
/// Trailing line breaks are dropped.
pub fn unfold_header(text: &str) -> String {
    let mut out = Vec::with_capacity(text.len());

    for line in trim_end(text.trim_end_matches(['\r', '\n']).as_bytes()).split(|&b| b == b'\n') {
        push_line(&mut out, line);
    }

    String::from_utf8_lossy(&out).into_owned()
}
