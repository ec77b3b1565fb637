//! End-to-end product scenarios through the public API.

use catalog_core::{DomainError, Entity};
use catalog_products::{CategoryId, Product, ProductDto, ProductFields, ProductRule};
use rust_decimal::Decimal;

fn fields(name: &str) -> ProductFields {
    ProductFields::new(
        name,
        "Product Description",
        Decimal::new(999, 2),
        99,
        "Product Image",
    )
}

#[test]
fn valid_product_is_created() {
    let product = Product::create_with_id(1, fields("Product Name")).unwrap();

    assert_eq!(product.id().get(), 1);
    assert_eq!(product.name(), "Product Name");
    assert_eq!(product.description(), "Product Description");
    assert_eq!(product.price(), Decimal::new(999, 2));
    assert_eq!(product.stock(), 99);
    assert_eq!(product.image(), "Product Image");
}

#[test]
fn negative_id_is_invalid() {
    let err = Product::create_with_id(-1, fields("Product Name")).unwrap_err();
    assert_eq!(err, DomainError::Validation("Invalid Id value.".to_string()));
}

#[test]
fn two_character_name_is_too_short() {
    let err = Product::create_with_id(1, fields("PN")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid name. Too short, minimum 3 characters!");
}

#[test]
fn overlong_image_is_rejected() {
    let image = "Product Image Is Too Long ".repeat(12);
    let submitted = ProductFields::new(
        "ProductName",
        "Product Description",
        Decimal::new(999, 2),
        99,
        image,
    );

    let err = Product::create_with_id(1, submitted).unwrap_err();
    assert_eq!(err.message(), ProductRule::ImageTooLong.message());
}

#[test]
fn edit_then_read_back() {
    let mut product = Product::create_with_id(3, fields("Product Name")).unwrap();

    let mut edit = product.fields();
    edit.stock = 120;
    product.update(edit, CategoryId::new(2)).unwrap();
    assert_eq!(product.stock(), 120);

    let mut bad = product.fields();
    bad.description = "Too few".into();
    let err = product.update(bad, CategoryId::new(6)).unwrap_err();

    assert_eq!(err.message(), ProductRule::DescriptionTooShort.message());
    assert_eq!(product.stock(), 120);
    assert_eq!(product.description(), "Product Description");
    assert_eq!(product.category_id(), CategoryId::new(2));
}

#[test]
fn form_submission_with_null_fields() {
    catalog_observability::init();

    let json = r#"{
        "id": 5,
        "name": "Desk Lamp",
        "description": "Warm white LED lamp",
        "price": "24.50",
        "stock": 10,
        "image": null,
        "category_id": 1
    }"#;

    let dto: ProductDto = serde_json::from_str(json).unwrap();
    let product = dto.into_product().unwrap();

    assert_eq!(product.id().get(), 5);
    assert_eq!(product.price(), Decimal::new(2450, 2));
    assert!(!product.has_image());
    assert_eq!(product.category_id(), CategoryId::new(1));
}

#[test]
fn form_submission_missing_description() {
    catalog_observability::init();

    let json = r#"{ "name": "Desk Lamp", "price": "24.50", "stock": 10 }"#;

    let dto: ProductDto = serde_json::from_str(json).unwrap();
    let err = dto.into_product().unwrap_err();

    assert_eq!(
        err.message(),
        "Invalid description. Product description is required!"
    );
}
