//! Rendering and export of parsed records

pub mod exporter;
pub mod formatter;

pub use exporter::Exporter;
pub use formatter::{ConsoleFormatter, CsvFormatter, JsonFormatter, RecordFormatter};
