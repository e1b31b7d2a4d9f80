//! CSV Export functionality
//!
//! The export contract spreadsheet users rely on: a header row of column
//! labels, then one row per record with every value wrapped in double quotes
//! (numbers included) and embedded quotes doubled. Absent optional values are
//! written as `""`. Rows come out in exactly the order they go in.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::LineEnding;
use crate::error::PortalResult;

/// One output column: a header label and how to pull its value from a record
pub struct Column<'a, R> {
    pub header: &'static str,
    value: Box<dyn Fn(&R) -> String + 'a>,
}

impl<'a, R> Column<'a, R> {
    pub fn new(header: &'static str, value: impl Fn(&R) -> String + 'a) -> Self {
        Self {
            header,
            value: Box::new(value),
        }
    }

    /// Extract this column's value from a record
    pub fn value(&self, record: &R) -> String {
        (self.value)(record)
    }
}

fn terminator(line_ending: LineEnding) -> Terminator {
    match line_ending {
        LineEnding::Lf => Terminator::Any(b'\n'),
        LineEnding::Crlf => Terminator::CRLF,
    }
}

/// Write the header row and one fully-quoted row per record
pub fn export_csv<'r, W, R, I>(
    writer: &mut W,
    columns: &[Column<'_, R>],
    rows: I,
    line_ending: LineEnding,
) -> PortalResult<()>
where
    W: Write,
    R: 'r,
    I: IntoIterator<Item = &'r R>,
{
    // Header labels are only quoted when they need it
    {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(terminator(line_ending))
            .from_writer(&mut *writer);
        header.write_record(columns.iter().map(|c| c.header))?;
        header.flush()?;
    }

    let mut body = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(terminator(line_ending))
        .from_writer(&mut *writer);
    for row in rows {
        body.write_record(columns.iter().map(|c| c.value(row)))?;
    }
    body.flush()?;

    Ok(())
}

/// Render the export into a string
pub fn to_csv_string<'r, R, I>(
    columns: &[Column<'_, R>],
    rows: I,
    line_ending: LineEnding,
) -> PortalResult<String>
where
    R: 'r,
    I: IntoIterator<Item = &'r R>,
{
    let mut buf = Vec::new();
    export_csv(&mut buf, columns, rows, line_ending)?;
    String::from_utf8(buf).map_err(|e| crate::error::PortalError::Export(e.to_string()))
}
