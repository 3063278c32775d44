//! # Marketseed: Catalog-to-SQL Seed Script Generation
//!
//! Marketseed converts heterogeneous product catalogs into batches of SQL
//! seed scripts for the three marketplace listing schemas (outright-sale,
//! rental, auction), each with dependent image and tag-link rows.
//!
//! ## Pipeline
//!
//! - **Catalog loading**: parse the weapon-skin catalog and the optional
//!   generic item catalog from JSON, preserving file order.
//! - **Normalization**: map every raw item into one fully-populated
//!   [`ProductRecord`], synthesizing prices, stock, categories, and tags
//!   from an injected random source.
//! - **Batching**: split the shuffled record pool into size-bounded,
//!   order-preserving batches.
//! - **Emission**: per (batch, variant), write one self-contained T-SQL
//!   script that bulk-loads a staging table, moves the rows into the real
//!   product table, and fans out image/tag rows over the contiguous
//!   identity range of the bulk insert.
//!
//! ## Example
//!
//! ```no_run
//! use marketseed::{load_skin_catalog, normalize_skins, split_batches};
//! use marketseed::{write_batch_script, ALL_VARIANTS, DEFAULT_CHUNK_SIZE};
//! use rand::SeedableRng;
//!
//! let catalog = load_skin_catalog("skins.json").unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let records = normalize_skins(&catalog, &mut rng);
//!
//! for variant in ALL_VARIANTS {
//!     for batch in split_batches(&records, 5000) {
//!         let mut script = Vec::new();
//!         write_batch_script(&mut script, &batch, variant, DEFAULT_CHUNK_SIZE).unwrap();
//!     }
//! }
//! ```

// Source catalog loading and normalization
pub mod catalog;

// Batch SQL-generation engine
pub mod sqlgen;

// Re-export key types
pub use catalog::{
    load_item_catalog, load_skin_catalog, normalize_items, normalize_skins, ItemEntry,
    ProductRecord, SkinEntry, SourceTag,
};
pub use sqlgen::{
    split_batches, write_batch_script, Batch, SchemaVariant, ALL_VARIANTS, DEFAULT_BATCH_SIZE,
    DEFAULT_CHUNK_SIZE,
};
