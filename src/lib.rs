//! Turns an order file into C array declarations, one `const char*` array
//! per order.

pub mod emitter;
pub mod error;
pub mod logging;
pub mod parser;
pub mod transcoder;

pub use error::TranscodeError;
pub use transcoder::{transcode_file_to_string, OrderTranscoder};
