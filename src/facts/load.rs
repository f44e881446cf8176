use super::catalog::TypeCatalog;
use super::types::TypeDescription;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of a type catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub types: Vec<TypeDescription>,
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

impl TypeCatalog {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<TypeCatalog> {
        let doc: CatalogDocument =
            serde_yaml::from_str(content).context("failed to parse YAML type catalog")?;
        Ok(TypeCatalog::from_descriptions(doc.types))
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<TypeCatalog> {
        let doc: CatalogDocument =
            serde_json::from_str(content).context("failed to parse JSON type catalog")?;
        Ok(TypeCatalog::from_descriptions(doc.types))
    }
}

/// Load a type catalog from a YAML (`.yaml`/`.yml`) or JSON file.
///
/// The returned catalog is not validated; call [`TypeCatalog::validate`] to
/// check it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a catalog.
pub fn load_catalog(path: &Path) -> anyhow::Result<TypeCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read type catalog {}", path.display()))?;
    let catalog = if is_yaml(path) {
        TypeCatalog::from_yaml_str(&content)
    } else {
        TypeCatalog::from_json_str(&content)
    }
    .with_context(|| format!("invalid type catalog {}", path.display()))?;
    tracing::debug!(path = %path.display(), types = catalog.len(), "loaded type catalog");
    Ok(catalog)
}
