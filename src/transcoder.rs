use crate::emitter::{RecordWriter, TranscodeSummary};
use crate::error::TranscodeError;
use crate::logging::{EventLog, LogEvent};
use crate::parser::{classify_line, split_lines, LineKind, StructureScanner, StructureWarning};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Reads an order file and writes one array declaration per order.
pub struct OrderTranscoder<W: Write> {
    writer: RecordWriter<W>,
    scanner: StructureScanner,
    warnings: Vec<StructureWarning>,
    log: EventLog,
}

impl<W: Write> OrderTranscoder<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: RecordWriter::new(out),
            scanner: StructureScanner::new(),
            warnings: Vec::new(),
            log: EventLog::disabled(),
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Structural warnings collected so far.
    pub fn warnings(&self) -> &[StructureWarning] {
        &self.warnings
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn transcode_file(&mut self, path: &Path) -> Result<TranscodeSummary, TranscodeError> {
        let input = path.display().to_string();
        self.log.record(&LogEvent::Started { input: &input });

        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(source) => {
                return Err(self.fail(TranscodeError::Io {
                    path: path.to_path_buf(),
                    source,
                }))
            }
        };

        self.transcode_str(&contents)
    }

    /// Transcode in-memory file contents. On a malformed line everything
    /// before it has already been written and flushed; nothing for that
    /// line or later is emitted.
    pub fn transcode_str(&mut self, contents: &str) -> Result<TranscodeSummary, TranscodeError> {
        for line in split_lines(contents) {
            let kind = match classify_line(&line) {
                Ok(kind) => kind,
                Err(err) => {
                    // The line error wins; a flush failure is only logged
                    if let Err(flush_err) = self.writer.flush() {
                        self.log.record(&LogEvent::Failed {
                            message: TranscodeError::from(flush_err).to_string(),
                        });
                    }
                    return Err(self.fail(err));
                }
            };

            for warning in self.scanner.observe(line.number, &kind) {
                self.warn(warning);
            }

            if let Err(err) = self.writer.emit_line(&kind) {
                return Err(self.fail(err.into()));
            }
            self.log_line(line.number, &kind);
        }

        if let Some(warning) = self.scanner.finish() {
            self.warn(warning);
        }

        self.writer.flush()?;

        let summary = self.writer.summary();
        self.log.record(&LogEvent::Finished { summary });
        Ok(summary)
    }

    fn log_line(&mut self, number: usize, kind: &LineKind<'_>) {
        if !self.log.is_enabled() {
            return;
        }
        match kind {
            LineKind::Header(header) => self.log.record(&LogEvent::OrderOpened {
                order: header.order,
                line: number,
            }),
            LineKind::Item {
                terminates: true, ..
            } => self.log.record(&LogEvent::OrderClosed { line: number }),
            LineKind::Item { .. } => {}
        }
    }

    fn warn(&mut self, warning: StructureWarning) {
        self.log.record(&LogEvent::Warning {
            message: warning.to_string(),
        });
        self.warnings.push(warning);
    }

    fn fail(&mut self, err: TranscodeError) -> TranscodeError {
        // Unclosed orders up to the fault are still worth reporting
        if let Some(warning) = self.scanner.finish() {
            self.warn(warning);
        }
        self.log.record(&LogEvent::Failed {
            message: err.to_string(),
        });
        err
    }
}

/// Transcode a whole file into a string.
pub fn transcode_file_to_string(path: &Path) -> Result<String, TranscodeError> {
    let mut transcoder = OrderTranscoder::new(Vec::new());
    transcoder.transcode_file(path)?;
    Ok(String::from_utf8_lossy(&transcoder.into_inner()).into_owned())
}
