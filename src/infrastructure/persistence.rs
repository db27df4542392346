use crate::domain::Product;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk shape of the product store: one flat list plus the id counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductStore {
    next_id: u32,
    products: Vec<Product>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: Vec::new(),
        }
    }
}

/// Flat JSON-file store for products, keyed by an integer primary key.
///
/// The store auto-creates on first use: reading a missing file yields an
/// empty store, and the file appears on the first write. Every operation
/// reads and writes the whole file; the data set is a demo-sized list.
pub struct ProductRepository {
    path: String,
}

impl ProductRepository {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> String {
        "products.json".to_string()
    }

    fn load_store(&self) -> Result<ProductStore, String> {
        if !Path::new(&self.path).exists() {
            return Ok(ProductStore::default());
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str::<ProductStore>(&content)
                .map_err(|e| format!("Invalid store format - {}", e)),
            Err(e) => Err(e.to_string()),
        }
    }

    fn save_store(&self, store: &ProductStore) -> Result<(), String> {
        match serde_json::to_string_pretty(store) {
            Ok(json) => fs::write(&self.path, &json).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn get_all(&self) -> Result<Vec<Product>, String> {
        Ok(self.load_store()?.products)
    }

    pub fn get_by_id(&self, id: u32) -> Result<Option<Product>, String> {
        Ok(self
            .load_store()?
            .products
            .into_iter()
            .find(|p| p.id == id))
    }

    /// Stores a new product, assigning the next integer key. Returns the
    /// stored product with its id filled in.
    pub fn add(&self, mut product: Product) -> Result<Product, String> {
        let mut store = self.load_store()?;

        product.id = store.next_id;
        store.next_id += 1;
        store.products.push(product.clone());

        self.save_store(&store)?;
        Ok(product)
    }

    /// Replaces the stored product with the same id. Returns whether a
    /// matching product existed.
    pub fn update(&self, product: &Product) -> Result<bool, String> {
        let mut store = self.load_store()?;

        match store.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product.clone();
                self.save_store(&store)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the product with the given key. Returns whether it existed.
    pub fn delete_by_id(&self, id: u32) -> Result<bool, String> {
        let mut store = self.load_store()?;
        let before = store.products.len();

        store.products.retain(|p| p.id != id);

        if store.products.len() == before {
            return Ok(false);
        }

        self.save_store(&store)?;
        Ok(true)
    }

    pub fn get_filtered<F>(&self, predicate: F) -> Result<Vec<Product>, String>
    where
        F: Fn(&Product) -> bool,
    {
        Ok(self
            .load_store()?
            .products
            .into_iter()
            .filter(|p| predicate(p))
            .collect())
    }
}

pub struct CsvExporter;

impl CsvExporter {
    /// Writes the product list to a CSV file with an id/name/price header.
    pub fn export_products(products: &[Product], filename: &str) -> Result<String, String> {
        let mut writer = csv::Writer::from_path(filename).map_err(|e| e.to_string())?;

        writer
            .write_record(["id", "name", "price"])
            .map_err(|e| e.to_string())?;

        for product in products {
            writer
                .write_record([
                    product.id.to_string(),
                    product.name.clone(),
                    product.price.to_string(),
                ])
                .map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())?;
        Ok(filename.to_string())
    }
}
