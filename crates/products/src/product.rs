use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainResult, Entity, EntityId, Text};

use crate::category::{Category, CategoryId};
use crate::rules::{DESCRIPTION_MIN_LEN, IMAGE_MAX_LEN, NAME_MIN_LEN, ProductRule};

/// Candidate attribute values for a product, as supplied by a caller.
///
/// Shared by [`Product::create`], [`Product::create_with_id`] and
/// [`Product::update`]. Nothing here is trusted until [`ProductFields::validate`]
/// has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: Text,
    pub description: Text,
    pub price: Decimal,
    pub stock: i32,
    pub image: Text,
}

impl ProductFields {
    pub fn new(
        name: impl Into<Text>,
        description: impl Into<Text>,
        price: Decimal,
        stock: i32,
        image: impl Into<Text>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
            image: image.into(),
        }
    }

    /// Checks every field rule in order and reports the first one broken.
    pub fn validate(&self) -> DomainResult<()> {
        ProductRule::NameRequired.check(self.name.is_empty())?;
        ProductRule::NameTooShort.check(self.name.char_len() < NAME_MIN_LEN)?;

        ProductRule::DescriptionRequired.check(self.description.is_empty())?;
        ProductRule::DescriptionTooShort.check(self.description.char_len() < DESCRIPTION_MIN_LEN)?;

        ProductRule::NegativePrice.check(self.price < Decimal::ZERO)?;
        ProductRule::NegativeStock.check(self.stock < 0)?;

        ProductRule::ImageTooLong.check(self.image.char_len() > IMAGE_MAX_LEN)?;

        Ok(())
    }
}

/// Catalog item.
///
/// Only reachable through validating constructors, so every `Product` in hand
/// satisfies the product rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: EntityId,
    name: Text,
    description: Text,
    price: Decimal,
    stock: i32,
    image: Text,
    category_id: CategoryId,
    category: Option<Category>,
}

impl Product {
    /// Creates a product that has not been given an identity yet.
    pub fn create(fields: ProductFields) -> DomainResult<Self> {
        Self::build(EntityId::UNASSIGNED, fields)
    }

    /// Creates a product with a known identity.
    ///
    /// A negative `id` fails before any field rule is looked at.
    pub fn create_with_id(id: i32, fields: ProductFields) -> DomainResult<Self> {
        let id = EntityId::new(id).map_err(|_| ProductRule::InvalidId)?;
        Self::build(id, fields)
    }

    fn build(id: EntityId, fields: ProductFields) -> DomainResult<Self> {
        fields.validate()?;

        let ProductFields {
            name,
            description,
            price,
            stock,
            image,
        } = fields;

        Ok(Self {
            id,
            name,
            description,
            price,
            stock,
            image,
            category_id: CategoryId::default(),
            category: None,
        })
    }

    /// Replaces every attribute except the identity.
    ///
    /// On error the product is left exactly as it was.
    pub fn update(&mut self, fields: ProductFields, category_id: CategoryId) -> DomainResult<()> {
        fields.validate()?;

        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.stock = fields.stock;
        self.image = fields.image;
        self.assign_category_id(category_id);
        Ok(())
    }

    /// Points the product at another category. Any attached category reference is
    /// dropped since it no longer matches.
    pub fn assign_category_id(&mut self, category_id: CategoryId) {
        if self.category_id != category_id {
            self.category = None;
        }
        self.category_id = category_id;
    }

    /// Attaches the category loaded for this product by its owner.
    pub fn attach_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    /// Image reference; empty when the product has none.
    pub fn image(&self) -> &str {
        self.image.as_str()
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Current attribute values, e.g. as the starting point for an edit.
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
            image: self.image.clone(),
        }
    }
}

impl Entity for Product {
    type Id = EntityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
