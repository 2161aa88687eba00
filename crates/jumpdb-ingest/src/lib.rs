//! CSV ingestion for the jump database builder.
//!
//! # Features
//!
//! - **Discovery**: dataset folders under an input root and the CSV files in each
//! - **Header Resolution**: messy column labels mapped to canonical fields
//! - **Field Cleanup**: lenient integer parsing and description reflow
//! - **Record Parsing**: one file in, validated records out
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use jumpdb_ingest::{RecordParser, list_csv_files};
//! use jumpdb_model::PipelineConfig;
//!
//! let parser = RecordParser::new(&PipelineConfig::default());
//! for path in list_csv_files(Path::new("input/DemoPack"))? {
//!     let parsed = parser.parse_file(&path)?;
//!     println!("{}: {} records", path.display(), parsed.records.len());
//! }
//! ```

mod chapter;
mod discovery;
mod error;
mod header;
mod reader;
mod transform;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{list_csv_files, list_group_dirs};

// === Record Parsing ===
pub use chapter::{file_stem, infer_chapter};
pub use header::HeaderResolver;
pub use reader::{ParsedFile, RecordParser, read_rows};
pub use transform::{FieldTransformer, clean_description, parse_integer};
