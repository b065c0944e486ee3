//! Item index
//!
//! - **filter**: field comparisons compiled to SQL, textual query parser
//! - **database**: SQLite storage
//! - **index**: persistence trait used by ingestion and recipe scans
//! - **db_index**: Database implementation of ItemIndex
//! - **progress**: progress reporting for bulk writes

mod database;
mod db_index;
mod filter;
mod index;
mod progress;

pub use database::Database;
pub use filter::{CmpOp, Field, FilterParseError, FilterValue, ItemFilter};
pub use index::ItemIndex;
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};

// Bump when the items table layout or payload encoding changes
pub const SCHEMA_VERSION: &str = "1";
