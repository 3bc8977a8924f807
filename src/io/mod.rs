//! I/O module
//!
//! Handles script parsing and summary output.
//!
//! # Components
//!
//! - `script_format` - CSV format handling (row conversion, summary serialization)
//! - `script_reader` - Streaming script reader with iterator interface

pub mod script_format;
pub mod script_reader;

pub use script_format::{convert_script_record, write_summary_csv};
pub use script_reader::ScriptReader;
