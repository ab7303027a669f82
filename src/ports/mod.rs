// src/ports/mod.rs

pub use record_source::RecordSource;

pub mod record_source;
