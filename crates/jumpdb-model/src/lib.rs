//! Data model for the jump database builder.
//!
//! Records are the normalized rows produced by ingestion; documents group
//! them for persistence. [`PipelineConfig`] carries every lookup table the
//! pipeline consults so callers can construct it once and pass it down.

pub mod config;
pub mod error;
pub mod field;
pub mod record;

pub use config::{PipelineConfig, Transform, normalize_label};
pub use error::{ConfigError, Result};
pub use field::Field;
pub use record::{FieldValue, GroupDocument, Record, SplitDocument};
