//! Output stage: chapter splitting, document naming and persistence.

pub mod error;
pub mod slug;
pub mod split;
pub mod writer;

pub use error::{OutputError, Result};
pub use slug::slugify;
pub use split::{ChapterSplit, split_chapters};
pub use writer::{DOCUMENT_EXTENSION, document_path, write_document};
