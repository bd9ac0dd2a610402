// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written base with several fields.

use schema_family::{SchemaFamily, Validate};

#[derive(
    Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, validator::Validate, SchemaFamily,
)]
#[family(id = "int", table = "products")]
pub struct ProductBase {
    /// Display title.
    #[validate(length(max = 120))]
    pub title: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub price_cents: u64,
}

fn main() {
    let mut product = Product::with_id(
        1,
        ProductCreate {
            title: "Lamp".to_string(),
            description: None,
            price_cents: 1999,
        },
    );

    product.apply(ProductUpdate {
        title: "Desk lamp".to_string(),
        description: Some("Warm light".to_string()),
        price_cents: 2499,
    });

    assert_eq!(product.id, 1);
    assert_eq!(product.title, "Desk lamp");
    assert!(product.validate().is_ok());
    assert!(ProductRead::from(&product).validate().is_ok());

    let base = ProductBase::from(product);
    assert_eq!(base.price_cents, 2499);
    assert!(base.validate().is_ok());
}
