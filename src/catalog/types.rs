//! Type definitions for the source catalogs and the normalized record.
//!
//! The raw entry types mirror the catalog JSON attribute-for-attribute;
//! every field is optional because real catalog exports routinely omit
//! attributes. Defaulting happens during normalization, never here.

use serde::Deserialize;

/// Raw entry in the ranked weapon-skin catalog.
///
/// The catalog is a JSON object mapping item name to one of these; the
/// key doubles as the title fallback when `full-name` is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkinEntry {
    #[serde(default, rename = "full-name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub exterior: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
    #[serde(default, rename = "finish-style")]
    pub finish_style: Option<String>,
}

/// Raw entry in the unranked generic item catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "stackSize")]
    pub stack_size: Option<u32>,
}

/// Provenance of a normalized record, selecting which defaulting and
/// sampling rules applied during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    /// Weapon-skin catalog: condition from exterior, price from rarity band.
    Ranked,
    /// Generic item catalog: condition and price sampled from flat ranges.
    Unranked,
}

impl SourceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Ranked => "ranked",
            SourceTag::Unranked => "unranked",
        }
    }
}

/// One fully-normalized product, ready for SQL emission.
///
/// Every field is populated by the normalizer; the emitter never sees a
/// partial record. Text fields hold raw (unescaped) values; escaping is
/// the emitter's concern.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    /// May be empty; an empty URL suppresses the image fan-out row.
    pub image_url: String,
    pub condition_id: u32,
    /// Strictly positive, rounded to 2 decimals.
    pub price: f64,
    /// In [1, 20].
    pub stock: u32,
    /// In [1, 14].
    pub category_id: u32,
    /// 2 or 3 distinct values in [1, 25].
    pub tag_ids: Vec<u32>,
    pub source: SourceTag,
}
