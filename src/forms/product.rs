//! Add/edit product form used by the admin product table.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{CategoryName, ImageUrl, Price, ProductName, Stock, is_image_link};
use crate::forms::FormError;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";
pub const PRICE_MESSAGE: &str = "Price must be a non-negative number.";
pub const STOCK_MESSAGE: &str = "Stock must be a non-negative number.";
pub const IMAGE_MESSAGE: &str = "Image URL must be a valid image link (jpg, png, webp, gif).";

/// Error codes in the order their messages take precedence.
const RULES: [(&str, &str); 4] = [
    ("blank", REQUIRED_MESSAGE),
    ("negative_price", PRICE_MESSAGE),
    ("negative_stock", STOCK_MESSAGE),
    ("image_link", IMAGE_MESSAGE),
];

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn image_link(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !is_image_link(value.trim()) {
        return Err(ValidationError::new("image_link"));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a product.
pub struct ProductForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(min = 0.0, code = "negative_price"))]
    pub price: f64,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(range(min = 0, code = "negative_stock"))]
    pub stock: i64,
    #[validate(custom(function = "image_link"))]
    pub image: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
}

/// Picks the single message shown to the admin for a failed validation.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let codes: Vec<&str> = field_errors
        .values()
        .flat_map(|errors| errors.iter())
        .map(|error| &*error.code)
        .collect();

    RULES
        .iter()
        .find(|(code, _)| codes.contains(code))
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| errors.to_string())
}

impl ProductForm {
    /// Runs the form rules returning the first user-facing message on failure.
    pub fn check(&self) -> Result<(), FormError> {
        self.validate()
            .map_err(|errors| FormError::Rejected(first_message(&errors)))
    }
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.check()?;

        let name = ProductName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let category = CategoryName::new(form.category).map_err(|_| FormError::InvalidCategory)?;
        let price = Price::new(form.price).map_err(|_| FormError::InvalidPrice)?;
        let stock = Stock::new(form.stock).map_err(|_| FormError::InvalidStock)?;
        let image = ImageUrl::new(form.image).map_err(|_| FormError::InvalidImageUrl)?;
        let description = ammonia::clean(form.description.trim());

        Ok(NewProduct {
            name,
            price,
            category,
            stock,
            image,
            description,
        })
    }
}

impl TryFrom<ProductForm> for UpdateProduct {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        NewProduct::try_from(form).map(UpdateProduct::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Phone X".to_string(),
            price: 699.0,
            category: "Mobile".to_string(),
            stock: 5,
            image: "https://cdn.example.com/phone.png".to_string(),
            description: "Flagship phone".to_string(),
        }
    }

    fn rejection(form: ProductForm) -> String {
        match form.check() {
            Err(FormError::Rejected(message)) => message,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn valid_form_converts_to_new_product() {
        let product = NewProduct::try_from(valid_form()).unwrap();
        assert_eq!(product.name.as_str(), "Phone X");
        assert_eq!(product.stock.get(), 5);
        assert_eq!(product.image.as_str(), "https://cdn.example.com/phone.png");
    }

    #[test]
    fn blank_fields_are_required() {
        let form = ProductForm {
            description: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(rejection(form), REQUIRED_MESSAGE);
    }

    #[test]
    fn required_message_wins_over_other_rules() {
        let form = ProductForm {
            name: String::new(),
            price: -1.0,
            ..valid_form()
        };
        assert_eq!(rejection(form), REQUIRED_MESSAGE);
    }

    #[test]
    fn negative_price_and_stock_are_rejected() {
        let form = ProductForm {
            price: -0.5,
            ..valid_form()
        };
        assert_eq!(rejection(form), PRICE_MESSAGE);

        let form = ProductForm {
            stock: -2,
            ..valid_form()
        };
        assert_eq!(rejection(form), STOCK_MESSAGE);
    }

    #[test]
    fn image_must_be_an_image_link() {
        let form = ProductForm {
            image: "https://cdn.example.com/phone.pdf".to_string(),
            ..valid_form()
        };
        assert_eq!(rejection(form), IMAGE_MESSAGE);
    }

    #[test]
    fn labels_are_stored_as_plain_text() {
        let form = ProductForm {
            name: "  Tom & Jerry Mug ".to_string(),
            category: "Home & Kitchen".to_string(),
            ..valid_form()
        };
        let product = NewProduct::try_from(form).unwrap();
        assert_eq!(product.name.as_str(), "Tom & Jerry Mug");
        assert_eq!(product.category.as_str(), "Home & Kitchen");
    }

    #[test]
    fn description_is_sanitized() {
        let form = ProductForm {
            description: "Nice <script>alert('x')</script>phone".to_string(),
            ..valid_form()
        };
        let product = UpdateProduct::try_from(form).unwrap();
        assert_eq!(product.description, "Nice phone");
    }
}
