//! Products domain module.
//!
//! Business rules for catalog products, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod category;
pub mod dto;
pub mod product;
pub mod rules;

pub use category::{Category, CategoryId};
pub use dto::ProductDto;
pub use product::{Product, ProductFields};
pub use rules::{DESCRIPTION_MIN_LEN, IMAGE_MAX_LEN, NAME_MIN_LEN, ProductRule};
