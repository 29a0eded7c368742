//! Tab-delimited persistence of the index tables.
//!
//! One line per suffix-array position, in position order:
//! position, suffix-array entry, LCP, up, down, nextl, each followed by a
//! tab, with `-` standing in for an undefined entry. The format is stable
//! across runs on the same sequence.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::SuffixArray;
use crate::error::Result;
use crate::sequence::Element;

/// Write the tables of `index` to `path`, replacing any existing file.
pub(crate) fn save_tables<E: Element>(index: &SuffixArray<'_, E>, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_tables(index, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write one line per position to `out`.
pub(crate) fn write_tables<E: Element, W: Write>(
    index: &SuffixArray<'_, E>,
    out: &mut W,
) -> io::Result<()> {
    for i in 0..index.sa.len() {
        write!(out, "{}\t{}\t", i, index.sa[i])?;
        write_column(out, index.tabs.get_lcp(i))?;
        write_column(out, index.tabs.get_up(i))?;
        write_column(out, index.tabs.get_down(i))?;
        write_column(out, index.tabs.get_nextl(i))?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_column<W: Write>(out: &mut W, value: Option<usize>) -> io::Result<()> {
    match value {
        Some(value) => write!(out, "{}\t", value),
        None => write!(out, "-\t"),
    }
}
