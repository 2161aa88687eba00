//! Library side of the `jumpdb` binary: the database builder and logging.

pub mod builder;
pub mod logging;
pub mod types;
