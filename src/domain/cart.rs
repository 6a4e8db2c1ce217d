use crate::domain::errors::CartError;

// Minimal unit submitted to the cart backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Builds an item from loosely typed input such as form fields or CLI
    /// arguments. Only numeric coercion happens here; zero or negative
    /// quantities are passed through for the backend to judge.
    pub fn coerce(product_id: &str, quantity: &str) -> Result<Self, CartError> {
        Ok(Self {
            product_id: coerce_integer("product_id", product_id)?,
            quantity: coerce_integer("quantity", quantity)?,
        })
    }
}

fn coerce_integer(field: &'static str, raw: &str) -> Result<i64, CartError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CartError::InvalidItem {
            field,
            value: raw.to_string(),
        })
}
