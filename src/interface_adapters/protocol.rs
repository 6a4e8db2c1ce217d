use serde::Serialize;

use crate::domain::CartItem;

// JSON body for `POST /add_to_cart`.
#[derive(Debug, Serialize)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i64,
}

impl From<&CartItem> for AddToCartRequest {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}
