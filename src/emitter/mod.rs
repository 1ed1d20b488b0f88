mod records;
mod writer;

pub use records::{OutputRecord, CONTAINER_PREFIX, ELEMENT_TYPE};
pub use writer::{RecordWriter, TranscodeSummary};
