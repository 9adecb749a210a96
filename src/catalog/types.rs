//! Product record model
//!
//! The catalog endpoint is decoded leniently (`RawProduct`, all fields the
//! aggregation depends on are optional) and then validated at the boundary
//! into `ProductRecord`, so a missing field surfaces as one typed
//! `MalformedRecordError` instead of a serde error deep inside aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{MalformedRecordError, RecordRef};

/// Rating block of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    pub count: Option<u64>,
}

/// One element of the catalog response array, as served
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub rating: Option<Rating>,
}

/// A validated catalog record, the only form downstream stages see
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: Option<u64>,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub rate: f64,
    pub count: u64,
}

/// Validate decoded products, converting missing required fields into
/// `MalformedRecordError` naming the offending record.
pub fn validate_products(
    raw: Vec<RawProduct>,
) -> Result<Vec<ProductRecord>, MalformedRecordError> {
    let mut records = Vec::with_capacity(raw.len());

    for (ordinal, product) in raw.into_iter().enumerate() {
        let record_ref = RecordRef {
            id: product.id,
            ordinal,
        };

        let category = product
            .category
            .filter(|c| !c.is_empty())
            .ok_or(MalformedRecordError::MissingCategory { record: record_ref })?;

        let rating = product
            .rating
            .ok_or(MalformedRecordError::MissingRatingCount { record: record_ref })?;
        let count = rating
            .count
            .ok_or(MalformedRecordError::MissingRatingCount { record: record_ref })?;

        records.push(ProductRecord {
            id: product.id,
            category,
            price: product.price,
            rate: rating.rate,
            count,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(id: Option<u64>, category: Option<&str>, price: Decimal, count: Option<u64>) -> RawProduct {
        RawProduct {
            id,
            title: Some("widget".to_string()),
            category: category.map(String::from),
            price,
            rating: Some(Rating { rate: 4.2, count }),
        }
    }

    #[test]
    fn test_valid_products_pass_through() {
        let records = validate_products(vec![
            raw(Some(1), Some("electronics"), dec!(109.95), Some(120)),
            raw(Some(2), Some("jewelery"), dec!(695.0), Some(400)),
        ])
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "electronics");
        assert_eq!(records[0].count, 120);
        assert_eq!(records[1].price, dec!(695.0));
    }

    #[test]
    fn test_missing_rating_count_names_id() {
        let err = validate_products(vec![
            raw(Some(1), Some("electronics"), dec!(10), Some(2)),
            raw(Some(7), Some("electronics"), dec!(10), None),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            MalformedRecordError::MissingRatingCount { .. }
        ));
        assert!(err.to_string().contains("id 7"));
    }

    #[test]
    fn test_missing_rating_block_is_malformed() {
        let mut product = raw(Some(3), Some("electronics"), dec!(10), Some(2));
        product.rating = None;

        let err = validate_products(vec![product]).unwrap_err();
        assert!(matches!(
            err,
            MalformedRecordError::MissingRatingCount { .. }
        ));
    }

    #[test]
    fn test_missing_count_without_id_names_ordinal() {
        let err = validate_products(vec![
            raw(Some(1), Some("a"), dec!(1), Some(1)),
            raw(None, Some("a"), dec!(1), None),
        ])
        .unwrap_err();

        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn test_missing_category_is_malformed() {
        let err = validate_products(vec![raw(Some(5), None, dec!(1), Some(1))]).unwrap_err();

        assert!(matches!(err, MalformedRecordError::MissingCategory { .. }));
        assert!(err.to_string().contains("id 5"));
    }

    #[test]
    fn test_decodes_catalog_response_shape() {
        let body = r#"[
            {
                "id": 1,
                "title": "Backpack",
                "price": 109.95,
                "description": "Fits 15in laptops",
                "category": "men's clothing",
                "image": "https://example.com/1.jpg",
                "rating": { "rate": 3.9, "count": 120 }
            }
        ]"#;

        let raw: Vec<RawProduct> = serde_json::from_str(body).unwrap();
        let records = validate_products(raw).unwrap();

        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[0].category, "men's clothing");
        assert_eq!(records[0].price, dec!(109.95));
        assert_eq!(records[0].count, 120);
    }
}
