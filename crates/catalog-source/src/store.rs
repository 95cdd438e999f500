//! CSV-backed product catalog store.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::error::CatalogError;

/// One product record from a catalog export.
///
/// `category_code` and `brand` are nullable in the source data; empty CSV
/// fields deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub category_id: i64,
    pub category_code: Option<String>,
    pub brand: Option<String>,
    pub price: Decimal,
}

/// Resolve a catalog identifier (e.g. "2019-Nov") to its CSV path.
pub fn catalog_path(dir: impl AsRef<Path>, dataset_id: &str) -> PathBuf {
    dir.as_ref().join(format!("{dataset_id}.csv"))
}

/// Load all product records from a headered CSV file.
///
/// The catalog is read once before the pipeline starts and is never
/// mutated afterwards.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut products = Vec::new();
    for record in reader.deserialize() {
        let product: Product = record?;
        products.push(product);
    }

    info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_catalog_path() {
        let path = catalog_path("/data/catalogs", "2019-Nov");
        assert_eq!(path, PathBuf::from("/data/catalogs/2019-Nov.csv"));
    }

    #[test]
    fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "products.csv",
            "product_id,category_id,category_code,brand,price\n\
             1004856,2053013555631882655,electronics.smartphone,samsung,130.76\n\
             5100816,2053013553375346967,,xiaomi,29.95\n",
        );

        let products = load_catalog(&path).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_id, 1004856);
        assert_eq!(products[0].category_id, 2053013555631882655);
        assert_eq!(
            products[0].category_code.as_deref(),
            Some("electronics.smartphone")
        );
        assert_eq!(products[0].brand.as_deref(), Some("samsung"));
        assert_eq!(products[0].price, Decimal::new(13076, 2));
    }

    #[test]
    fn test_nullable_fields_deserialize_to_none() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "products.csv",
            "product_id,category_id,category_code,brand,price\n\
             17300353,2053013553853497655,,,31.90\n",
        );

        let products = load_catalog(&path).unwrap();

        assert_eq!(products[0].category_code, None);
        assert_eq!(products[0].brand, None);
    }

    #[test]
    fn test_empty_catalog_file_yields_no_products() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "products.csv",
            "product_id,category_id,category_code,brand,price\n",
        );

        let products = load_catalog(&path).unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = load_catalog(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(CatalogError::Open { .. })));
    }

    #[test]
    fn test_malformed_row_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            "products.csv",
            "product_id,category_id,category_code,brand,price\n\
             not_a_number,1,,,10.00\n",
        );

        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Csv(_))));
    }
}
