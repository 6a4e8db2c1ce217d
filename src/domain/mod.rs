mod cart;
mod errors;
mod ports;
mod token;

// Re-export the domain boundary types and ports.
pub use cart::CartItem;
pub use errors::{CartError, GatewayError};
pub use ports::{CartGateway, CartResponse, CredentialProvider, Navigator, Notifier};
pub use token::{ACCESS_TOKEN_COOKIE, BearerToken, read_access_token};
