//! Rule-based ingredient classification
//!
//! Each check is a case-insensitive substring search against one of the word
//! lists below. The lists are plain constants so they can be inspected and
//! extended without touching the control flow. Empty input never matches.
//!
//! The checks are heuristics, not chemistry. In particular
//! [`contains_bad_alcohol`] flags any ingredient preceded by `" alcohol"`,
//! which includes fatty alcohols such as cetearyl alcohol.

use crate::core::text::contains_any;

/// Drying alcohols matched anywhere in an ingredient list
pub const BAD_ALCOHOLS: &[&str] = &[
    "alcohol denat",
    "ethanol",
    "ethyl alcohol",
    "isopropyl alcohol",
    "denatured alcohol",
    "sd alcohol",
    "alcohol denatured",
];

/// Standalone "alcohol" as it appears after a separator
pub const STANDALONE_ALCOHOL: &[&str] = &[" alcohol", ",alcohol"];

pub const FRAGRANCES: &[&str] = &["fragrance", "parfum", "perfume", "aroma", "essential oil"];

pub const OILS: &[&str] = &[
    "argan",
    "marula",
    "rosehip",
    "borage",
    "chia",
    "sea-buckthorn",
    "squalane",
    "jojoba",
    "coconut",
    "olive",
    "almond",
    "sunflower",
    "grapeseed",
    "castor",
    "mineral oil",
    "paraffin oil",
    "petroleum",
];

/// Standalone "oil" as it appears after a separator in an ingredient list
pub const STANDALONE_OIL: &[&str] = &[" oil", ",oil"];

/// Product names carry no list punctuation, so the bare word is enough
pub const NAME_OIL: &str = "oil";

pub const SENSITIVE_SKIN_IRRITANTS: &[&str] = &[
    "menthol",
    "peppermint",
    "eucalyptus",
    "camphor",
    "sodium lauryl sulfate",
    "sls",
    "sodium laureth sulfate",
    "sles",
    "alcohol",
    "witch hazel",
];

pub fn contains_bad_alcohol(ingredients: &str) -> bool {
    if ingredients.is_empty() {
        return false;
    }
    let lower = ingredients.to_lowercase();
    contains_any(&lower, BAD_ALCOHOLS) || contains_any(&lower, STANDALONE_ALCOHOL)
}

pub fn contains_fragrance(ingredients: &str) -> bool {
    if ingredients.is_empty() {
        return false;
    }
    contains_any(&ingredients.to_lowercase(), FRAGRANCES)
}

pub fn contains_oil(ingredients: &str) -> bool {
    if ingredients.is_empty() {
        return false;
    }
    let lower = ingredients.to_lowercase();
    contains_any(&lower, OILS) || contains_any(&lower, STANDALONE_OIL)
}

/// Oil check against a product name rather than an ingredient list
pub fn name_contains_oil(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let lower = name.to_lowercase();
    let found = lower.contains(NAME_OIL) || contains_any(&lower, OILS);
    tracing::trace!(name, found, "checked product name for oil");
    found
}

pub fn contains_sensitive_skin_irritant(ingredients: &str) -> bool {
    if ingredients.is_empty() {
        return false;
    }
    contains_any(&ingredients.to_lowercase(), SENSITIVE_SKIN_IRRITANTS)
}
