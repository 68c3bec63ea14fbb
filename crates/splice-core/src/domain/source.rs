//! Lightweight lexical view of a C-family / ES module source file.
//!
//! The patcher never parses the target into a syntax tree. It only needs to
//! know whether a byte offset is live code or sits inside something inert: a
//! comment, a string, or a template literal. [`SourceScan`] records those
//! inert regions in one pass so that an `import` inside a block comment, or an
//! `app.listen(` inside a string, is never mistaken for an anchor.
//!
//! A `/` starts a regular-expression literal when the previous significant
//! code byte is an operator or opening punctuation, so `/`/` cannot open a
//! template literal. Known blind spots: a regex directly after a keyword
//! (`return /x/`) reads as division, and `${...}` interpolations are treated
//! as part of their template literal.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Quoted(u8),
    Regex { in_class: bool },
}

/// Bytes after which a `/` opens a regex literal rather than dividing.
fn regex_may_follow(b: u8) -> bool {
    matches!(
        b,
        b'(' | b',' | b'=' | b':' | b'[' | b'!' | b'&' | b'|' | b'?' | b'{' | b'}' | b';'
            | b'+' | b'-' | b'*' | b'%' | b'<' | b'>' | b'~' | b'^' | b'/'
    )
}

/// Inert regions of a source text, sorted and non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceScan {
    inert: Vec<Range<usize>>,
}

impl SourceScan {
    pub fn scan(source: &str) -> Self {
        // Every delimiter is ASCII, so byte offsets always land on char
        // boundaries.
        let bytes = source.as_bytes();
        let mut inert = Vec::new();
        let mut state = State::Code;
        let mut start = 0;
        let mut regex_allowed = true;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            let next = bytes.get(i + 1).copied();

            match state {
                State::Code => match (b, next) {
                    (b'/', Some(b'/')) => {
                        state = State::LineComment;
                        start = i;
                        i += 1;
                    }
                    (b'/', Some(b'*')) => {
                        state = State::BlockComment;
                        start = i;
                        i += 1;
                    }
                    (b'"' | b'\'' | b'`', _) => {
                        state = State::Quoted(b);
                        start = i;
                    }
                    (b'/', _) if regex_allowed => {
                        state = State::Regex { in_class: false };
                        start = i;
                    }
                    _ if b.is_ascii_whitespace() => {}
                    _ => regex_allowed = regex_may_follow(b),
                },
                State::LineComment => {
                    if b == b'\n' {
                        inert.push(start..i);
                        state = State::Code;
                    }
                }
                State::BlockComment => {
                    if b == b'*' && next == Some(b'/') {
                        inert.push(start..i + 2);
                        state = State::Code;
                        i += 1;
                    }
                }
                State::Quoted(quote) => {
                    if b == b'\\' {
                        i += 1;
                    } else if b == quote {
                        inert.push(start..i + 1);
                        state = State::Code;
                        regex_allowed = false;
                    } else if b == b'\n' && quote != b'`' {
                        // Plain strings cannot span lines; an unterminated one
                        // must not swallow the rest of the file.
                        inert.push(start..i);
                        state = State::Code;
                    }
                }
                State::Regex { in_class } => match b {
                    b'\\' => i += 1,
                    b'[' => state = State::Regex { in_class: true },
                    b']' => state = State::Regex { in_class: false },
                    b'/' if !in_class => {
                        inert.push(start..i + 1);
                        state = State::Code;
                        regex_allowed = false;
                    }
                    b'\n' => {
                        inert.push(start..i);
                        state = State::Code;
                    }
                    _ => {}
                },
            }
            i += 1;
        }

        if state != State::Code {
            inert.push(start..bytes.len());
        }

        Self { inert }
    }

    /// `true` if `offset` is live code rather than comment or literal text.
    pub fn is_code(&self, offset: usize) -> bool {
        let idx = self.inert.partition_point(|r| r.end <= offset);
        self.inert
            .get(idx)
            .is_none_or(|r| !r.contains(&offset))
    }

    pub fn inert_regions(&self) -> &[Range<usize>] {
        &self.inert
    }
}
