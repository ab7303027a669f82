pub mod json_files;
pub mod snapshot;

pub use json_files::JsonFileRecordSource;
pub use snapshot::SnapshotRecordSource;
