//! Tag matching
//!
//! A tag is a derived product property ("oil-free", "fragrance-free", ...)
//! computed from the ingredient list and sometimes the name. Known tags are
//! resolved through [`TAG_RULES`]; any other tag is looked up literally in the
//! ingredient list.

use crate::core::product::Product;
use crate::engine::classifier::{
    contains_bad_alcohol, contains_fragrance, contains_oil, contains_sensitive_skin_irritant,
    name_contains_oil,
};

/// Predicate deciding whether a product carries a tag
pub type TagPredicate = fn(&Product) -> bool;

/// Known tag keys (lowercase) and their predicates
pub const TAG_RULES: &[(&str, TagPredicate)] = &[
    ("alcohol-free", is_alcohol_free),
    ("fragrance-free", is_fragrance_free),
    ("oil-free", is_oil_free),
    ("sensitive skin friendly", is_sensitive_skin_friendly),
];

pub fn is_alcohol_free(product: &Product) -> bool {
    !contains_bad_alcohol(product.ingredients_text())
}

pub fn is_fragrance_free(product: &Product) -> bool {
    !contains_fragrance(product.ingredients_text())
}

pub fn is_oil_free(product: &Product) -> bool {
    !contains_oil(product.ingredients_text()) && !name_contains_oil(product.name_text())
}

pub fn is_sensitive_skin_friendly(product: &Product) -> bool {
    !contains_sensitive_skin_irritant(product.ingredients_text()) && is_oil_free(product)
}

/// Look up the predicate for a lowercase tag key
pub fn rule_for(tag: &str) -> Option<TagPredicate> {
    TAG_RULES
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, predicate)| *predicate)
}

/// Check a single tag against a product
///
/// `tag` is trimmed and lowercased before dispatch. Unknown tags fall back to
/// a case-insensitive substring search in the ingredient list.
pub fn matches_tag(product: &Product, tag: &str) -> bool {
    let key = tag.trim().to_lowercase();
    let matched = match rule_for(&key) {
        Some(predicate) => predicate(product),
        None => product.ingredients_text().to_lowercase().contains(&key),
    };

    tracing::debug!(
        product = product.name_text(),
        tag = %key,
        matched,
        "tag check"
    );
    matched
}

/// Check a comma-separated tag list against a product
///
/// Every tag must match. An absent or empty list matches everything.
/// Evaluation stops at the first tag that does not match.
pub fn matches_tags(product: &Product, tags: Option<&str>) -> bool {
    match tags {
        None | Some("") => true,
        Some(tags) => tags.split(',').all(|tag| matches_tag(product, tag)),
    }
}
