// Adapters layer: concrete data sources and storage backends.

pub mod catalog;
pub mod file_source;
pub mod storage;
