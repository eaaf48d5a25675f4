mod json_file;
mod snapshot;

pub use json_file::{JsonFileStore, DEFAULT_FILE_NAME};
pub use snapshot::SNAPSHOT_VERSION;
