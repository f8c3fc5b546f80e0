pub mod json_file;
pub mod memory;
pub mod trait_def;

pub use json_file::JsonFileSource;
pub use memory::MemorySource;
pub use trait_def::{clicks_or_empty, visits_or_empty, AnalyticsSource, SourceError, SourceResult};
