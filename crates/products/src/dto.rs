//! Presentation boundary: raw product submissions in, display projections out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use catalog_core::{DomainResult, Entity};

use crate::category::CategoryId;
use crate::product::{Product, ProductFields};

/// A product as submitted by, or shown to, a client.
///
/// Text fields may be missing or `null`; they reach the product rules as empty
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: i32,
}

impl ProductDto {
    fn split(self) -> (Option<i32>, ProductFields, CategoryId) {
        let fields = ProductFields::new(
            self.name,
            self.description,
            self.price,
            self.stock,
            self.image,
        );
        (self.id, fields, CategoryId::new(self.category_id))
    }

    /// Builds a new product from the submission.
    pub fn into_product(self) -> DomainResult<Product> {
        let (id, fields, category_id) = self.split();

        let created = match id {
            Some(id) => Product::create_with_id(id, fields),
            None => Product::create(fields),
        };

        match created {
            Ok(mut product) => {
                product.assign_category_id(category_id);
                Ok(product)
            }
            Err(err) => {
                debug!(id = ?id, rule = %err, "rejected product submission");
                Err(err)
            }
        }
    }

    /// Applies the submission to an existing product. The submitted `id` is
    /// ignored; identity never changes on edit.
    pub fn apply_to(self, product: &mut Product) -> DomainResult<()> {
        let (_, fields, category_id) = self.split();

        product.update(fields, category_id).inspect_err(|err| {
            debug!(id = %product.id(), rule = %err, "rejected product edit");
        })
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        let text = |s: &str| (!s.is_empty()).then(|| s.to_owned());

        Self {
            id: Some(product.id().get()),
            name: text(product.name()),
            description: text(product.description()),
            price: product.price(),
            stock: product.stock(),
            image: text(product.image()),
            category_id: product.category_id().get(),
        }
    }
}
