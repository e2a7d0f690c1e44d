//! Whitespace tokenizer over a buffered reader.
//!
//! Tokens may be split across lines arbitrarily; a matrix reader and its row
//! readers share one `Tokens` so that rows pick up exactly where the previous
//! row stopped.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::{Result, TmError};

pub struct Tokens<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: String::new(), pos: 0 }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let start = self.pos + (rest.len() - rest.trim_start().len());
            if start < self.line.len() {
                let tail = &self.line[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                self.pos = start + len;
                return Ok(Some(tail[..len].to_owned()));
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Parse the next token as `T`. `expected`/`read` describe the caller's
    /// progress and are reported on a premature end of input.
    pub fn next_parsed<T: FromStr>(&mut self, expected: usize, read: usize) -> Result<T> {
        match self.next_token()? {
            Some(token) => token.parse().map_err(|_| TmError::Parse { token }),
            None => Err(TmError::UnexpectedEof { expected, read }),
        }
    }
}
