//! Record filter
//!
//! Applies the brand, search, product type and tag predicates in that order.
//! A filter whose value is absent or blank is skipped. The output keeps the
//! input order; sorting is a separate stage.

use crate::core::product::Product;
use crate::core::text::eq_ignore_case;
use crate::engine::tags::matches_tags;

/// Normalized filter values
///
/// Values are trimmed on construction and blank values become `None`, so the
/// predicates below only ever see meaningful input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub brand: Option<String>,
    /// Already lowercased
    pub search: Option<String>,
    pub product_type: Option<String>,
    pub tags: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl FilterCriteria {
    pub fn new(
        brand: Option<&str>,
        search: Option<&str>,
        product_type: Option<&str>,
        tags: Option<&str>,
    ) -> Self {
        Self {
            brand: non_blank(brand),
            search: non_blank(search).map(|s| s.to_lowercase()),
            product_type: non_blank(product_type),
            tags: non_blank(tags),
        }
    }

    /// True when no filter is active
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.search.is_none()
            && self.product_type.is_none()
            && self.tags.is_none()
    }

    /// Check a single record against every active filter
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(brand) = &self.brand
            && !eq_ignore_case(product.brand_text(), brand)
        {
            return false;
        }

        if let Some(search) = &self.search {
            let found = [
                product.name_text(),
                product.brand_text(),
                product.ingredients_text(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(search.as_str()));

            if !found {
                return false;
            }
        }

        if let Some(product_type) = &self.product_type
            && !eq_ignore_case(product.product_type_text(), product_type)
        {
            return false;
        }

        matches_tags(product, self.tags.as_deref())
    }
}

/// Keep the records matching `criteria`, in input order
pub fn filter_products<'a>(records: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    if criteria.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|p| criteria.matches(p)).collect()
}
