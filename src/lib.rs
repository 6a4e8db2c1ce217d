pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{BearerToken, CartError, CartItem};
pub use frameworks::runner::run;
pub use use_cases::add_to_cart::{AddToCartOutcome, AddToCartUseCase, RedirectReason};
