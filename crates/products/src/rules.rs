//! Product validation rules, in evaluation order.

use catalog_core::DomainError;

/// Minimum number of characters in a product name.
pub const NAME_MIN_LEN: usize = 3;
/// Minimum number of characters in a product description.
pub const DESCRIPTION_MIN_LEN: usize = 8;
/// Maximum number of characters in an image reference.
pub const IMAGE_MAX_LEN: usize = 250;

/// A rule a product can break.
///
/// Variants are declared in the order they are evaluated; only the first broken
/// rule is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductRule {
    InvalidId,
    NameRequired,
    NameTooShort,
    DescriptionRequired,
    DescriptionTooShort,
    NegativePrice,
    NegativeStock,
    ImageTooLong,
}

impl ProductRule {
    pub fn message(self) -> &'static str {
        match self {
            ProductRule::InvalidId => "Invalid Id value.",
            ProductRule::NameRequired => "Invalid name. Product name is required!",
            ProductRule::NameTooShort => "Invalid name. Too short, minimum 3 characters!",
            ProductRule::DescriptionRequired => {
                "Invalid description. Product description is required!"
            }
            ProductRule::DescriptionTooShort => {
                "Invalid description. Too short, minimum 8 characters!"
            }
            ProductRule::NegativePrice => "Invalid price value!",
            ProductRule::NegativeStock => "Invalid stock value!",
            ProductRule::ImageTooLong => "Invalid image name, too long, maximum 250 characters!",
        }
    }

    /// Fails with this rule's error when `violated` holds.
    pub(crate) fn check(self, violated: bool) -> Result<(), DomainError> {
        if violated { Err(self.into()) } else { Ok(()) }
    }
}

impl core::fmt::Display for ProductRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<ProductRule> for DomainError {
    fn from(rule: ProductRule) -> Self {
        DomainError::validation(rule.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_their_limits() {
        assert!(ProductRule::NameTooShort.message().contains("minimum 3"));
        assert!(ProductRule::DescriptionTooShort.message().contains("minimum 8"));
        assert!(ProductRule::ImageTooLong.message().contains("maximum 250 characters"));
    }

    #[test]
    fn converts_into_validation_error() {
        let err: DomainError = ProductRule::NegativeStock.into();
        assert_eq!(err, DomainError::Validation("Invalid stock value!".to_string()));
    }

    #[test]
    fn check_only_fails_when_violated() {
        assert!(ProductRule::NegativePrice.check(false).is_ok());
        assert_eq!(
            ProductRule::NegativePrice.check(true).unwrap_err().message(),
            "Invalid price value!"
        );
    }
}
