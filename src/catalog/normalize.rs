//! Record normalization: raw catalog entries to [`ProductRecord`]s.
//!
//! Normalization never fails on a missing attribute; every absent value
//! gets a documented default so one imperfect item can't sink a run. All
//! sampling goes through the caller's [`Rng`] handle, which is what makes
//! the outputs reproducible under a fixed seed.

use crate::catalog::types::{ItemEntry, ProductRecord, SkinEntry, SourceTag};
use indexmap::IndexMap;
use rand::Rng;

/// Condition assigned to souvenir items regardless of exterior.
pub const CONDITION_SOUVENIR: u32 = 15;
/// Condition assigned when the exterior descriptor is unknown or absent.
pub const CONDITION_DEFAULT: u32 = 9;
/// Upper bound of the valid condition range (unranked items sample [1, this]).
pub const CONDITION_MAX: u32 = 15;

/// Flat price band for unranked items, which carry no rarity/exterior.
const UNRANKED_PRICE_BAND: (f64, f64) = (5.0, 500.0);

/// Map an exterior descriptor and item type to a condition id.
///
/// The souvenir item type always wins over the exterior-derived value;
/// unknown or absent exteriors fall back to the generic "Used" condition.
pub fn condition_id(exterior: Option<&str>, item_type: Option<&str>) -> u32 {
    if item_type == Some("Souvenir") {
        return CONDITION_SOUVENIR;
    }

    match exterior {
        Some("Factory New") => 1,
        Some("Minimal Wear") => 11,
        Some("Field-Tested") => 12,
        Some("Well-Worn") => 13,
        Some("Battle-Scarred") => 14,
        Some("Souvenir") => CONDITION_SOUVENIR,
        _ => CONDITION_DEFAULT,
    }
}

/// (min, max) price band for a rarity tier. An absent rarity counts as
/// Consumer Grade; an unrecognized one gets the fallback band.
fn rarity_band(rarity: Option<&str>) -> (f64, f64) {
    match rarity.unwrap_or("Consumer Grade") {
        "Consumer Grade" => (5.0, 25.0),
        "Industrial Grade" => (10.0, 50.0),
        "Mil-Spec" => (25.0, 100.0),
        "Restricted" => (50.0, 300.0),
        "Classified" => (100.0, 800.0),
        "Covert" => (500.0, 5000.0),
        "Contraband" => (2000.0, 15000.0),
        _ => (10.0, 100.0),
    }
}

/// Wear multiplier applied on top of the rarity band.
fn exterior_multiplier(exterior: Option<&str>) -> f64 {
    match exterior {
        Some("Factory New") => 1.0,
        Some("Minimal Wear") => 0.85,
        Some("Field-Tested") => 0.7,
        Some("Well-Worn") => 0.5,
        Some("Battle-Scarred") => 0.3,
        _ => 0.7,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sample a ranked-source price: uniform within the rarity band, scaled
/// by the exterior multiplier, rounded to 2 decimals.
pub fn skin_price<R: Rng>(rng: &mut R, rarity: Option<&str>, exterior: Option<&str>) -> f64 {
    let (min_price, max_price) = rarity_band(rarity);
    let base = rng.gen_range(min_price..=max_price);
    round2(base * exterior_multiplier(exterior))
}

/// Sample an unranked-source price from the flat band, ignoring any
/// rarity/exterior attributes the entry may carry.
pub fn item_price<R: Rng>(rng: &mut R) -> f64 {
    let (min_price, max_price) = UNRANKED_PRICE_BAND;
    round2(rng.gen_range(min_price..=max_price))
}

fn sample_stock<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=20)
}

fn sample_category<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=14)
}

/// Choose 2 or 3 distinct tag ids from [1, 25].
pub fn sample_tags<R: Rng>(rng: &mut R) -> Vec<u32> {
    let count = rng.gen_range(2..=3);
    let mut tags: Vec<u32> = Vec::with_capacity(count);
    while tags.len() < count {
        let tag = rng.gen_range(1..=25);
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Compose a one-sentence description from whatever skin attributes are
/// present. Tolerates any combination of missing attributes.
pub fn skin_description(entry: &SkinEntry) -> String {
    let mut parts: Vec<String> = Vec::new();

    if entry.item_type.as_deref() == Some("Souvenir") {
        parts.push("Rare souvenir".to_string());
    }

    parts.push(format!("{} skin", entry.weapon.as_deref().unwrap_or("")));

    if let Some(finish) = entry.finish.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("with {} finish", finish));
    }

    if let Some(style) = entry.finish_style.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("featuring {}", style.to_lowercase()));
    }

    if let Some(exterior) = entry.exterior.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("in {} condition", exterior.to_lowercase()));
    }

    if let Some(rarity) = entry.rarity.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("({} rarity)", rarity));
    }

    parts.push("Perfect for CS:GO collectors and players.".to_string());

    parts.join(" ").replace("  ", " ").trim().to_string()
}

/// Description for a generic item: its own description when present,
/// otherwise composed from the name, otherwise a fixed generic sentence.
pub fn item_description(entry: &ItemEntry) -> String {
    if let Some(description) = entry.description.as_deref().filter(|s| !s.is_empty()) {
        return description.to_string();
    }
    if let Some(name) = entry.name.as_deref().filter(|s| !s.is_empty()) {
        return format!("{} in good condition, sourced from a verified seller.", name);
    }
    "Quality marketplace item from a verified seller.".to_string()
}

/// Normalize every entry of the ranked weapon-skin catalog.
pub fn normalize_skins<R: Rng>(
    catalog: &IndexMap<String, SkinEntry>,
    rng: &mut R,
) -> Vec<ProductRecord> {
    catalog
        .iter()
        .map(|(name, entry)| {
            let title = entry
                .full_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(name)
                .to_string();

            ProductRecord {
                title,
                description: skin_description(entry),
                image_url: entry.image.clone().unwrap_or_default(),
                condition_id: condition_id(entry.exterior.as_deref(), entry.item_type.as_deref()),
                price: skin_price(rng, entry.rarity.as_deref(), entry.exterior.as_deref()),
                stock: sample_stock(rng),
                category_id: sample_category(rng),
                tag_ids: sample_tags(rng),
                source: SourceTag::Ranked,
            }
        })
        .collect()
}

/// Normalize every entry of the unranked generic item catalog.
///
/// Condition ids are drawn uniformly from the full valid range rather
/// than from the exterior mapping; this per-source divergence is
/// intentional and matched by the flat price band.
pub fn normalize_items<R: Rng>(items: &[ItemEntry], rng: &mut R) -> Vec<ProductRecord> {
    items
        .iter()
        .map(|entry| {
            let title = entry
                .name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("Unnamed Item")
                .to_string();

            ProductRecord {
                title,
                description: item_description(entry),
                image_url: entry.image.clone().unwrap_or_default(),
                condition_id: rng.gen_range(1..=CONDITION_MAX),
                price: item_price(rng),
                stock: sample_stock(rng),
                category_id: sample_category(rng),
                tag_ids: sample_tags(rng),
                source: SourceTag::Unranked,
            }
        })
        .collect()
}
