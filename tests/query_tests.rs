//! Behavioral tests for the catalog query engine
//!
//! These tests verify that:
//! - Page content and pagination metadata stay consistent
//! - Tag filters classify products as expected
//! - Sorting and filtering compose in the documented order

use catalog::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

fn product(
    id: i64,
    name: &str,
    brand: &str,
    ingredients: &str,
    kind: &str,
    price: Option<i64>,
) -> Product {
    Product::new(name, brand, ingredients, kind, price).with_id(id)
}

fn catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Hydrating Facial Cleanser",
            "CeraVe",
            "Water, Glycerin, Ceramide NP",
            "Cleanser",
            Some(15),
        ),
        product(
            2,
            "Niacinamide 10% + Zinc 1%",
            "The Ordinary",
            "Aqua, Niacinamide, Zinc PCA",
            "Serum",
            Some(6),
        ),
        product(
            3,
            "Soft Moisturizing Cream",
            "Nivea",
            "Water, Mineral Oil, Parfum",
            "Moisturizer",
            Some(8),
        ),
        product(
            4,
            "Argan Glow Serum",
            "nivea",
            "Water, Glycerin",
            "Serum",
            Some(20),
        ),
        product(
            5,
            "Clarifying Toner",
            "Thayers",
            "Water, Witch Hazel, Alcohol Denat.",
            "Toner",
            Some(11),
        ),
        product(
            6,
            "Squalane Cleanser",
            "The Ordinary",
            "Squalane, Aqua, Coco-Caprylate",
            "Cleanser",
            None,
        ),
        product(
            7,
            "Calming Gel",
            "Avene",
            "Water, Glycerin, Allantoin",
            "Moisturizer",
            Some(25),
        ),
        product(
            8,
            "Peppermint Scrub",
            "Frank",
            "Coffee, Peppermint, Coconut Oil",
            "Exfoliant",
            Some(18),
        ),
    ]
}

fn params() -> QueryParams {
    QueryParams::default()
}

fn ids(result: &QueryResult) -> Vec<i64> {
    result.items.iter().filter_map(|p| p.id).collect()
}

// =============================================================================
// Pagination invariants
// =============================================================================

mod pagination_tests {
    use super::*;

    #[test]
    fn test_page_never_exceeds_limit_or_total() {
        let records = catalog();
        for limit in 1..=10 {
            for page in 1..=10 {
                let result = query(
                    &records,
                    &QueryParams {
                        page,
                        limit,
                        ..params()
                    },
                );
                assert!(result.items.len() <= result.limit);
                assert!(result.items.len() <= result.total);
                assert_eq!(result.total_pages, result.total.div_ceil(result.limit));
            }
        }
    }

    #[test]
    fn test_pages_are_contiguous_slices_of_the_sorted_result() {
        let records = catalog();
        let everything = query(
            &records,
            &QueryParams {
                limit: 100,
                ..params()
            },
        );

        let mut stitched = Vec::new();
        for page in 1..=3 {
            let result = query(
                &records,
                &QueryParams {
                    page,
                    limit: 3,
                    ..params()
                },
            );
            stitched.extend(ids(&result));
        }

        assert_eq!(stitched, ids(&everything));
    }

    #[test]
    fn test_page_beyond_last_is_empty_but_counts_remain() {
        let records: Vec<Product> = catalog().into_iter().take(5).collect();
        let result = query(
            &records,
            &QueryParams {
                page: 99,
                limit: 10,
                ..params()
            },
        );

        assert!(result.items.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 99);
    }

    #[test]
    fn test_no_matches_gives_zero_pages() {
        let result = query(
            &catalog(),
            &QueryParams {
                brand: Some("Unknown Brand".to_string()),
                ..params()
            },
        );

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_invalid_page_and_limit_are_normalized() {
        let result = query(
            &catalog(),
            &QueryParams {
                page: -3,
                limit: 500,
                ..params()
            },
        );

        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 10);
        assert_eq!(result.items.len(), 8);
    }
}

// =============================================================================
// Tag classification
// =============================================================================

mod tag_tests {
    use super::*;

    #[test]
    fn test_alcohol_free_examples() {
        let with_ethanol = Product::new("Toner", "A", "Water, Ethanol, Glycerin", "Toner", None);
        let without = Product::new("Toner", "A", "Water, Glycerin", "Toner", None);

        assert!(!matches_tags(&with_ethanol, Some("alcohol-free")));
        assert!(matches_tags(&without, Some("alcohol-free")));
    }

    #[test]
    fn test_oil_free_uses_product_name() {
        let argan = Product::new("Argan Glow Serum", "A", "Water, Glycerin", "Serum", None);
        let plain = Product::new("Hydrating Serum", "A", "Water, Glycerin", "Serum", None);

        assert!(!matches_tags(&argan, Some("oil-free")));
        assert!(matches_tags(&plain, Some("oil-free")));
    }

    #[test]
    fn test_empty_tags_match_every_record() {
        for record in catalog() {
            assert!(matches_tags(&record, None));
            assert!(matches_tags(&record, Some("")));
        }
    }

    #[test]
    fn test_unknown_tag_searches_ingredients() {
        let result = query(
            &catalog(),
            &QueryParams {
                tags: Some("allantoin".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&result), vec![7]);
    }

    #[test]
    fn test_sensitive_skin_friendly_filter() {
        let result = query(
            &catalog(),
            &QueryParams {
                tags: Some("Sensitive Skin Friendly".to_string()),
                ..params()
            },
        );
        // Only products free of irritants, oils and oil-named titles remain
        assert_eq!(ids(&result), vec![7, 1, 2]);
    }

    #[test]
    fn test_multiple_tags_must_all_match() {
        let result = query(
            &catalog(),
            &QueryParams {
                tags: Some("alcohol-free, fragrance-free, oil-free".to_string()),
                sort_by: Some("date".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&result), vec![1, 2, 7]);
    }
}

// =============================================================================
// Filtering and sorting
// =============================================================================

mod filter_sort_tests {
    use super::*;

    #[test]
    fn test_default_sort_is_name() {
        let result = query(&catalog(), &params());
        let names: Vec<_> = result
            .items
            .iter()
            .map(|p| p.name_text().to_string())
            .collect();
        let mut expected = names.clone();
        expected.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, expected);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_name() {
        let by_default = query(&catalog(), &params());
        let by_unknown = query(
            &catalog(),
            &QueryParams {
                sort_by: Some("popularity".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&by_default), ids(&by_unknown));
    }

    #[test]
    fn test_price_desc_with_missing_price() {
        let records = vec![
            product(1, "Ten", "A", "", "Serum", Some(10)),
            product(2, "Missing", "A", "", "Serum", None),
            product(3, "Thirty", "A", "", "Serum", Some(30)),
        ];
        let result = query(
            &records,
            &QueryParams {
                sort_by: Some("price-desc".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&result), vec![3, 1, 2]);
    }

    #[test]
    fn test_brand_filter_is_case_insensitive() {
        let result = query(
            &catalog(),
            &QueryParams {
                brand: Some("NIVEA".to_string()),
                sort_by: Some("date".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&result), vec![3, 4]);
    }

    #[test]
    fn test_search_and_type_combine() {
        let result = query(
            &catalog(),
            &QueryParams {
                search: Some("ordinary".to_string()),
                product_type: Some("cleanser".to_string()),
                ..params()
            },
        );
        assert_eq!(ids(&result), vec![6]);
    }

    #[test]
    fn test_total_counts_matches_not_page() {
        let result = query(
            &catalog(),
            &QueryParams {
                search: Some("water".to_string()),
                limit: 2,
                ..params()
            },
        );
        assert_eq!(result.total, 5);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let criteria = FilterCriteria::new(None, Some("water"), None, Some("alcohol-free"));
        let records = catalog();

        let once: Vec<Product> = filter_products(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Product> = filter_products(&once, &criteria)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }
}

// =============================================================================
// Brand enumeration
// =============================================================================

mod brand_tests {
    use super::*;

    #[test]
    fn test_unique_brands_case_sensitive_and_sorted() {
        let records = vec![
            product(1, "a", "Nivea", "", "", None),
            product(2, "b", "nivea", "", "", None),
            product(3, "c", "CeraVe", "", "", None),
        ];
        let brands = unique_brands(&records);

        assert_eq!(brands.len(), 3);
        assert_eq!(brands, vec!["CeraVe", "Nivea", "nivea"]);
    }

    #[test]
    fn test_unique_brands_over_catalog() {
        let brands = unique_brands(&catalog());
        assert_eq!(
            brands,
            vec!["Avene", "CeraVe", "Frank", "Nivea", "Thayers", "The Ordinary", "nivea"]
        );
    }
}
