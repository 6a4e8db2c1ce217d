use async_trait::async_trait;

use crate::domain::cart::CartItem;
use crate::domain::errors::GatewayError;
use crate::domain::token::BearerToken;

// A completed HTTP exchange with the cart backend, whatever its status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartResponse {
    pub status: u16,
    pub body: String,
}

// Port for obtaining the current bearer token.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<BearerToken>;
}

// Port for sending the user somewhere else (the login page).
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}

// Port for showing a message to the user and waiting for them to see it.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

// The use case depends on this trait, not the concrete reqwest client.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn add_to_cart(
        &self,
        token: &BearerToken,
        item: &CartItem,
    ) -> Result<CartResponse, GatewayError>;
}
