use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::BasketParams;

/// Load saved parameters from a JSON file.
///
/// Returns `Ok(None)` when the file does not exist. Fields missing from the
/// file fall back to their defaults.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<Option<BasketParams>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no saved parameters");
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let params: BasketParams = serde_json::from_str(&content)?;
    Ok(Some(params))
}

/// Save parameters as pretty-printed JSON, creating the parent directory.
pub fn save_params<P: AsRef<Path>>(path: P, params: &BasketParams) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(params)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved parameters");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Selection;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loaded = load_params(dir.path().join("params.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("params.json");

        let params = BasketParams {
            budget: 55.5,
            max_items: 8,
            include_categories: Selection::from_values(["Produce", "Dairy"]),
            allow_multiples: true,
            max_qty_per_item: 4,
            fat_max: 70.0,
            ..BasketParams::default()
        };
        save_params(&path, &params).unwrap();

        let reloaded = load_params(&path).unwrap().unwrap();
        assert_eq!(reloaded, params);
    }

    #[test]
    fn test_reads_original_field_names() {
        let json = r#"{
            "budget": 40.0,
            "max_items": 15,
            "include_categories": null,
            "include_classes": ["Vegetable"],
            "wP": 1.5, "wFi": 0.3, "wC": 0.1, "wF": 0.2,
            "tProtein": 120, "tFiber": 30, "tFatMax": 999, "tCarbMax": 250,
            "allow_multiples": true,
            "max_qty_per_item": 10
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let params = load_params(file.path()).unwrap().unwrap();
        assert_eq!(params.w_protein, 1.5);
        assert_eq!(params.protein_target, 120.0);
        assert_eq!(params.carb_max, 250.0);
        assert!(params.include_categories.is_any());
        assert!(params.include_classes.allows("Vegetable"));
        assert_eq!(params.unit_cap(), 10);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_params(file.path()).is_err());
    }
}
