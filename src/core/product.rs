//! Product record as stored in the catalog

use crate::core::text::to_title_case;
use serde::{Deserialize, Serialize};

/// A skincare product record
///
/// Every text field may be absent. The query engine reads them through the
/// `*_text` accessors, which treat an absent field as the empty string, so no
/// predicate or comparator ever has to special-case `None`.
///
/// Serialized in camelCase (`ingredientsList`, `productType`, ...) to stay
/// wire-compatible with existing clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier assigned by the store; `None` until stored
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    /// Comma-separated ingredient tokens
    #[serde(default)]
    pub ingredients_list: Option<String>,

    /// Highlighted ingredients; display only, never filtered on
    #[serde(default)]
    pub star_ingredients: Option<String>,

    /// Category label (e.g. "Serum", "Moisturizer")
    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub price: Option<i64>,
}

impl Product {
    /// Create a product with the fields the engine looks at
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        ingredients_list: impl Into<String>,
        product_type: impl Into<String>,
        price: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            brand: Some(brand.into()),
            ingredients_list: Some(ingredients_list.into()),
            star_ingredients: None,
            product_type: Some(product_type.into()),
            price,
        }
    }

    /// Builder-style id assignment, mostly for fixtures
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn brand_text(&self) -> &str {
        self.brand.as_deref().unwrap_or_default()
    }

    pub fn ingredients_text(&self) -> &str {
        self.ingredients_list.as_deref().unwrap_or_default()
    }

    pub fn product_type_text(&self) -> &str {
        self.product_type.as_deref().unwrap_or_default()
    }

    /// Price used for ordering; absent sorts as 0
    pub fn price_or_zero(&self) -> i64 {
        self.price.unwrap_or(0)
    }

    /// Normalize the ingredient fields to title case before storage
    pub fn title_cased(mut self) -> Self {
        self.ingredients_list = self.ingredients_list.as_deref().map(to_title_case);
        self.star_ingredients = self.star_ingredients.as_deref().map(to_title_case);
        self
    }
}
