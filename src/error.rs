use std::io;
use std::path::PathBuf;

/// Everything that can stop a transcoding run.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("line {line}: empty line")]
    EmptyLine { line: usize },

    #[error("line {line}: order header has no digit before ':'")]
    MissingOrderDigit { line: usize },

    #[error("line {line}: invalid order digit {found:?} before ':'")]
    InvalidOrderDigit { line: usize, found: char },
}
