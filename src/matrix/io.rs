//! Text I/O for `DynamicMatrix`: one row per line, delegating to the row format.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::DynamicMatrix;
use crate::core::traits::Element;
use crate::error::Result;
use crate::utils::Tokens;

impl<T: fmt::Display> DynamicMatrix<T> {
    /// Write each row in vector format followed by a newline.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.ensure_valid()?;
        for row in self.rows() {
            row.write_to(w)?;
            writeln!(w)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: FromStr> DynamicMatrix<T> {
    /// Overwrite all rows with `size` × `size` tokens parsed from `reader`.
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.ensure_valid()?;
        let mut tokens = Tokens::new(reader);
        let n = self.size();
        for (i, row) in self.rows_mut().enumerate() {
            row.read_tokens(&mut tokens, n * n, i * n)?;
        }
        Ok(())
    }
}

impl<T: Element + FromStr> DynamicMatrix<T> {
    /// Allocate a `size` × `size` matrix and fill it from `reader`.
    pub fn read_sized<R: BufRead>(size: usize, reader: R) -> Result<Self> {
        let mut m = Self::new(size)?;
        m.read_from(reader)?;
        Ok(m)
    }
}
