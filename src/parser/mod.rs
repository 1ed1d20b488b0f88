mod classify;
mod digits;
mod orders;
mod types;

pub use classify::{classify_line, is_terminator, split_lines, END_OF_ORDER};
pub use orders::{scan_structure, StructureScanner, StructureWarning};
pub use types::{InputLine, LineKind, OrderHeader};
