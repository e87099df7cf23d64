pub mod episode;
pub mod record;

pub use episode::{Episode, ServerSource};
pub use record::{RawRecord, RecordFile};
