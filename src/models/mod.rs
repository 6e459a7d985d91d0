pub mod record;
pub mod sort_key;

pub use record::{ChargingRecord, RecordDraft, RecordPatch};
pub use sort_key::SortKey;
