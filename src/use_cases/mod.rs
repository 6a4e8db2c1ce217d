// Use cases layer: application workflows for the cart client.

pub mod add_to_cart;


pub use add_to_cart::{AddToCartOutcome, AddToCartUseCase, RedirectReason};
