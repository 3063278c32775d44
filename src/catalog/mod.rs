//! Source catalog loading and record normalization.
//!
//! Two source shapes are supported: the ranked weapon-skin catalog (keyed
//! by item name, with exterior/rarity attributes that drive condition and
//! price synthesis) and the unranked generic item catalog (array or keyed,
//! with name/description/image attributes). Both normalize into the same
//! [`ProductRecord`] shape consumed by the SQL generation engine.

pub mod loader;
pub mod normalize;
pub mod types;

// Re-export key types
pub use loader::{load_item_catalog, load_skin_catalog};
pub use normalize::{normalize_items, normalize_skins};
pub use types::{ItemEntry, ProductRecord, SkinEntry, SourceTag};
