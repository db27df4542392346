use serde::{Deserialize, Serialize};
use super::errors::{DomainError, DomainResult};

/// A product in the inventory store.
///
/// The id is assigned by the repository when the product is first added;
/// a zero id means "not yet stored".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: i64,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            price: 0,
        }
    }
}

impl Product {
    /// Checks the invariants a product must satisfy before it is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use scitui::domain::Product;
    ///
    /// let p = Product { id: 0, name: "Widget".to_string(), price: 5 };
    /// assert!(p.validate().is_ok());
    ///
    /// let bad = Product { id: 0, name: "".to_string(), price: 5 };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        if self.price <= 0 {
            return Err(DomainError::Validation(
                "Price should be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Static catalog entry for the planet browser.
///
/// Accent colors are hex strings ("#rrggbb"); the presentation layer turns
/// them into terminal colors. Image entries are display-only URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub subtitle: String,
    pub hero_image: String,
    pub description: String,
    pub accent_start: String,
    pub accent_end: String,
    pub images: Vec<String>,
}
