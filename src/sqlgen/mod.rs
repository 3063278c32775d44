//! Batch SQL-generation engine.
//!
//! The engine turns an ordered pool of normalized records into one
//! self-contained T-SQL script per (batch, variant) pair: staging-table
//! bulk load, set-based move into the variant's real product table, and
//! an identity-range fan-out of dependent image and tag-link rows.

pub mod batch;
pub mod emitter;
pub mod literal;
pub mod variant;

// Re-export key types
pub use batch::{split_batches, Batch, DEFAULT_BATCH_SIZE};
pub use emitter::{write_batch_script, DEFAULT_CHUNK_SIZE, STAGING_TABLE};
pub use variant::{SchemaVariant, ALL_VARIANTS, AUCTION, BORROW, BUY};
