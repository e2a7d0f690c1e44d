//! Text I/O for `DynamicVector`: whitespace-separated tokens, no length prefix.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::DynamicVector;
use crate::core::traits::Element;
use crate::error::Result;
use crate::utils::Tokens;

impl<T: fmt::Display> DynamicVector<T> {
    /// Write every element followed by a single space.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.ensure_valid()?;
        for x in self.iter() {
            write!(w, "{} ", x)?;
        }
        Ok(())
    }
}

/// A moved-from shell formats as an empty string; use `write_to` to have it
/// reported as `UseAfterMove`.
impl<T: fmt::Display> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl<T: FromStr> DynamicVector<T> {
    /// Overwrite all `size` elements with tokens parsed from `reader`.
    ///
    /// Elements read before a failure keep their new values.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let expected = self.size();
        self.read_tokens(&mut Tokens::new(reader), expected, 0)
    }

    /// `expected` and `done` are the caller's totals, so a matrix reports
    /// progress over all of its entries rather than the current row.
    pub(crate) fn read_tokens<R: BufRead>(
        &mut self,
        tokens: &mut Tokens<R>,
        expected: usize,
        done: usize,
    ) -> Result<()> {
        self.ensure_valid()?;
        for (read, slot) in self.iter_mut().enumerate() {
            *slot = tokens.next_parsed(expected, done + read)?;
        }
        Ok(())
    }
}

impl<T: Element + FromStr> DynamicVector<T> {
    /// Allocate `size` elements and fill them from `reader`.
    pub fn read_sized<R: BufRead>(size: usize, reader: R) -> Result<Self> {
        let mut v = Self::new(size)?;
        v.read_from(reader)?;
        Ok(v)
    }
}
