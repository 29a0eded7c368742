//! Loading persisted index tables.
//!
//! The caller supplies the same sequence the index was built on; only the
//! tables are read back. Blank lines are skipped, anything else that does
//! not parse is reported as corrupt with its line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::child_table::ChildTable;
use super::{Position, SuffixArray};
use crate::error::{Error, Result};
use crate::sequence::Element;

/// Read tables for `text` from `path`.
pub(crate) fn load_tables<'s, E: Element>(path: &Path, text: &'s [E]) -> Result<SuffixArray<'s, E>> {
    let file = File::open(path)?;
    read_tables(BufReader::new(file), text)
}

/// Read tables for `text` from any buffered source.
pub(crate) fn read_tables<'s, E: Element, R: BufRead>(
    input: R,
    text: &'s [E],
) -> Result<SuffixArray<'s, E>> {
    let mut sa: Vec<Position> = vec![0; text.len()];
    let mut tabs = ChildTable::new(text.len());
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        apply_line(&line, index + 1, &mut sa, &mut tabs)?;
    }
    Ok(SuffixArray { text, sa, tabs })
}

/// Apply one persisted line: position and suffix entry, then the four
/// optional table columns in LCP, up, down, nextl order.
fn apply_line(
    line: &str,
    line_no: usize,
    sa: &mut [Position],
    tabs: &mut ChildTable,
) -> Result<()> {
    let mut columns = line.split('\t');
    let pos: usize = columns
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| corrupt(line_no, "bad position column"))?;
    if pos >= sa.len() {
        return Err(corrupt(line_no, "position out of range"));
    }
    if let Some(value) = parse_column(columns.next(), line_no, "suffix")? {
        sa[pos] = value;
    }
    if let Some(value) = parse_column(columns.next(), line_no, "lcp")? {
        tabs.set_lcp(pos, value);
    }
    if let Some(value) = parse_column(columns.next(), line_no, "up")? {
        tabs.set_up(pos, value);
    }
    if let Some(value) = parse_column(columns.next(), line_no, "down")? {
        tabs.set_down(pos, value);
    }
    if let Some(value) = parse_column(columns.next(), line_no, "nextl")? {
        tabs.set_nextl(pos, value);
    }
    Ok(())
}

/// A column is a decimal integer or the `-` placeholder for undefined.
fn parse_column(column: Option<&str>, line_no: usize, name: &str) -> Result<Option<usize>> {
    let column = column.ok_or_else(|| corrupt(line_no, format!("missing {} column", name)))?;
    if column == "-" {
        return Ok(None);
    }
    column
        .parse()
        .map(Some)
        .map_err(|_| corrupt(line_no, format!("bad {} column", name)))
}

fn corrupt(line: usize, reason: impl Into<String>) -> Error {
    Error::CorruptState {
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::writer::write_tables;

    #[test]
    fn test_roundtrips_tables() {
        let text = b"banana~";
        let built = SuffixArray::build(&text[..]).unwrap();
        let mut buf = Vec::new();
        write_tables(&built, &mut buf).unwrap();

        let loaded = read_tables(buf.as_slice(), &text[..]).unwrap();
        assert_eq!(loaded.sa, built.sa);
        for i in 0..text.len() {
            assert_eq!(loaded.tabs.get_lcp(i), built.tabs.get_lcp(i));
            assert_eq!(loaded.tabs.get_up(i), built.tabs.get_up(i));
            assert_eq!(loaded.tabs.get_down(i), built.tabs.get_down(i));
            assert_eq!(loaded.tabs.get_nextl(i), built.tabs.get_nextl(i));
        }
    }

    #[test]
    fn test_skips_blank_lines() {
        let text = b"a~";
        let data = "0\t1\t0\t-\t-\t-\t\n\n1\t0\t0\t-\t-\t-\t\n";
        let loaded = read_tables(data.as_bytes(), &text[..]).unwrap();
        assert_eq!(loaded.sa, vec![1, 0]);
    }

    #[test]
    fn test_reports_short_line() {
        let text = b"a~";
        let err = read_tables("0\t1\n".as_bytes(), &text[..]).unwrap_err();
        assert!(matches!(err, Error::CorruptState { line: 1, .. }));
    }

    #[test]
    fn test_reports_bad_number() {
        let text = b"a~";
        let err = read_tables("0\t1\tx\t-\t-\t-\t\n".as_bytes(), &text[..]).unwrap_err();
        assert!(matches!(err, Error::CorruptState { line: 1, .. }));
    }

    #[test]
    fn test_reports_out_of_range_position() {
        let text = b"a~";
        let err = read_tables("9\t0\t0\t-\t-\t-\t\n".as_bytes(), &text[..]).unwrap_err();
        assert!(matches!(err, Error::CorruptState { line: 1, .. }));
    }
}
