//! JSON catalog loaders.
//!
//! Both loaders return human-readable `Err(String)` messages; a malformed
//! top-level document is fatal for that file, while an empty collection
//! simply yields zero entries.

use crate::catalog::types::{ItemEntry, SkinEntry};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Load the ranked weapon-skin catalog.
///
/// The file must be a JSON object mapping item name to attributes; key
/// order is preserved so normalization walks the catalog in file order.
///
/// # Arguments
///
/// * `path` - Path to the skin catalog JSON file
///
/// # Returns
///
/// Ordered map of item name to raw entry
pub fn load_skin_catalog<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, SkinEntry>, String> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid skin catalog {}: {}", path.display(), e))
}

/// Load the unranked generic item catalog.
///
/// The catalog appears in the wild in two shapes: a JSON array of item
/// objects, or a JSON object keyed by item name. The array form is tried
/// first, then the keyed form; for keyed entries the key fills in a
/// missing `name` attribute.
///
/// # Arguments
///
/// * `path` - Path to the item catalog JSON file
///
/// # Returns
///
/// Vector of raw item entries in file order
pub fn load_item_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ItemEntry>, String> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;

    if let Ok(items) = serde_json::from_str::<Vec<ItemEntry>>(&content) {
        return Ok(items);
    }

    let keyed: IndexMap<String, ItemEntry> = serde_json::from_str(&content).map_err(|e| {
        format!(
            "Invalid item catalog {} (tried both array and keyed formats): {}",
            path.display(),
            e
        )
    })?;

    Ok(keyed
        .into_iter()
        .map(|(key, mut item)| {
            item.name.get_or_insert(key);
            item
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_skin_catalog_preserves_order() {
        let file = write_temp(
            r#"{
                "Zeta | Last": {"exterior": "Factory New"},
                "Alpha | First": {"rarity": "Covert"}
            }"#,
        );

        let catalog = load_skin_catalog(file.path()).unwrap();
        let names: Vec<&String> = catalog.keys().collect();
        assert_eq!(names, vec!["Zeta | Last", "Alpha | First"]);
        assert_eq!(
            catalog["Zeta | Last"].exterior.as_deref(),
            Some("Factory New")
        );
    }

    #[test]
    fn test_load_skin_catalog_empty_object() {
        let file = write_temp("{}");
        assert!(load_skin_catalog(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_skin_catalog_malformed() {
        let file = write_temp("[1, 2, 3");
        let err = load_skin_catalog(file.path()).unwrap_err();
        assert!(err.contains("Invalid skin catalog"));
    }

    #[test]
    fn test_load_skin_catalog_missing_file() {
        let err = load_skin_catalog("/nonexistent/skins.json").unwrap_err();
        assert!(err.contains("Failed to read catalog"));
    }

    #[test]
    fn test_load_item_catalog_array_form() {
        let file = write_temp(r#"[{"name": "Oak Plank", "stackSize": 64}, {"name": "Torch"}]"#);

        let items = load_item_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("Oak Plank"));
        assert_eq!(items[0].stack_size, Some(64));
    }

    #[test]
    fn test_load_item_catalog_keyed_form_fills_name() {
        let file = write_temp(r#"{"torch": {"description": "Lights up."}, "lantern": {"name": "Sea Lantern"}}"#);

        let items = load_item_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("torch"));
        // An explicit name wins over the key
        assert_eq!(items[1].name.as_deref(), Some("Sea Lantern"));
    }

    #[test]
    fn test_load_item_catalog_malformed() {
        let file = write_temp(r#""just a string""#);
        let err = load_item_catalog(file.path()).unwrap_err();
        assert!(err.contains("tried both array and keyed formats"));
    }
}
