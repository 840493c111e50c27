//! File-backed catalog loading and saving.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::catalog::{Creature, CreatureCatalog};

pub type LoadResult<T> = anyhow::Result<T>;

/// Reads and writes creature catalogs as JSON arrays of creature records.
/// Unknown fields in the file are ignored; missing fields take their
/// record defaults, so catalogs written by older versions still load.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: impl AsRef<Path>) -> LoadResult<CreatureCatalog> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading creature catalog from {}", path.display()))?;
        let creatures: Vec<Creature> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing creature catalog at {}", path.display()))?;
        Ok(CreatureCatalog::from_creatures(creatures))
    }

    pub fn save(catalog: &CreatureCatalog, path: impl AsRef<Path>) -> LoadResult<()> {
        let path = path.as_ref();
        let creatures: Vec<&Creature> = catalog.iter().collect();
        let raw = serde_json::to_string_pretty(&creatures)?;
        fs::write(path, raw)
            .with_context(|| format!("writing creature catalog to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    #[test]
    fn save_then_load_preserves_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("creatures.json");

        let catalog = default_catalog();
        CatalogLoader::save(&catalog, &path).unwrap();
        let reloaded = CatalogLoader::load(&path).unwrap();

        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn partial_records_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.json");
        fs::write(&path, r#"[{"id": "mystery", "name": "Mystery Beast"}]"#).unwrap();

        let catalog = CatalogLoader::load(&path).unwrap();
        let beast = catalog.get("mystery").unwrap();
        assert_eq!(beast.ac, 10);
        assert_eq!(beast.hp, 10);
        assert_eq!(beast.cr, "1");
        assert_eq!(beast.source, "Custom");
    }

    #[test]
    fn malformed_files_surface_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(CatalogLoader::load(&path).is_err());
    }
}
