//! Sort key selection

use crate::core::product::Product;
use crate::core::text::cmp_ignore_case;
use std::cmp::Ordering;

/// Supported orderings
///
/// Parsing is infallible: blank or unknown keys fall back to [`SortKey::Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    NameDesc,
    Price,
    PriceDesc,
    Brand,
    /// Creation order, approximated by ascending id
    Date,
}

impl SortKey {
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        match value.trim().to_lowercase().as_str() {
            "name" => Self::Name,
            "name-desc" => Self::NameDesc,
            "price" => Self::Price,
            "price-desc" => Self::PriceDesc,
            "brand" => Self::Brand,
            "date" => Self::Date,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameDesc => "name-desc",
            Self::Price => "price",
            Self::PriceDesc => "price-desc",
            Self::Brand => "brand",
            Self::Date => "date",
        }
    }

    /// Comparator implementing this ordering
    pub fn comparator(self) -> fn(&Product, &Product) -> Ordering {
        match self {
            Self::Name => |a: &Product, b: &Product| cmp_ignore_case(a.name_text(), b.name_text()),
            Self::NameDesc => {
                |a: &Product, b: &Product| cmp_ignore_case(b.name_text(), a.name_text())
            }
            Self::Price => |a: &Product, b: &Product| a.price_or_zero().cmp(&b.price_or_zero()),
            Self::PriceDesc => {
                |a: &Product, b: &Product| b.price_or_zero().cmp(&a.price_or_zero())
            }
            Self::Brand => {
                |a: &Product, b: &Product| cmp_ignore_case(a.brand_text(), b.brand_text())
            }
            Self::Date => cmp_by_id,
        }
    }
}

/// Ascending id; records without an id are equal to each other and sort last
fn cmp_by_id(a: &Product, b: &Product) -> Ordering {
    match (a.id, b.id) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort; ties keep their relative order
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    let cmp = key.comparator();
    products.sort_by(|a, b| cmp(a, b));
}
