//! Sheet and document ingestion.
//!
//! The boundary between files on disk and the in-memory model: CSV sheets
//! in and out, source-folder discovery, order-document text, and roster
//! columns.

pub mod discovery;
pub mod document;
pub mod error;
pub mod roster;
pub mod sheet;

pub use discovery::{discover_sheets, file_stem};
pub use document::read_document;
pub use error::{IngestError, Result};
pub use roster::roster_from_column;
pub use sheet::{read_sheet, write_sheet};
