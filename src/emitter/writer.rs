use super::records::OutputRecord;
use crate::parser::LineKind;
use serde::Serialize;
use std::io::{self, Write};

/// Counts gathered while emitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranscodeSummary {
    pub lines: usize,
    pub orders_opened: usize,
    pub orders_closed: usize,
    pub items: usize,
}

/// Writes output records for classified lines to an arbitrary sink.
pub struct RecordWriter<W: Write> {
    out: W,
    summary: TranscodeSummary,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            summary: TranscodeSummary::default(),
        }
    }

    /// Emit the records for one line: an open or an item, then a close if
    /// the line is the terminator.
    pub fn emit_line(&mut self, kind: &LineKind<'_>) -> io::Result<()> {
        self.summary.lines += 1;

        match kind {
            LineKind::Header(header) => {
                self.write_record(&OutputRecord::ArrayOpen {
                    order: header.order,
                })?;
                self.summary.orders_opened += 1;
            }
            LineKind::Item { text, terminates } => {
                self.write_record(&OutputRecord::QuotedItem { text: *text })?;
                self.summary.items += 1;

                if *terminates {
                    self.write_record(&OutputRecord::ArrayClose)?;
                    self.summary.orders_closed += 1;
                }
            }
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &OutputRecord<'_>) -> io::Result<()> {
        write!(self.out, "{}", record)
    }

    pub fn summary(&self) -> TranscodeSummary {
        self.summary
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
