use crate::domain::{BearerToken, CartGateway, CartItem, CartResponse, GatewayError};
use crate::interface_adapters::protocol::AddToCartRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

// The clients defined here are for reqwest clients to communicate with external services.
// Thin wrapper around reqwest for cart service calls.
#[derive(Clone)]
pub struct CartClient {
    http: Client,
    pub base_url: String,
}

impl CartClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }
}

#[async_trait]
impl CartGateway for CartClient {
    async fn add_to_cart(
        &self,
        token: &BearerToken,
        item: &CartItem,
    ) -> Result<CartResponse, GatewayError> {
        // Compose the cart URL and POST the item with the bearer token.
        let url = format!("{}/add_to_cart", self.base_url);
        let res = self
            .http
            .post(url)
            .bearer_auth(token.as_str())
            .json(&AddToCartRequest::from(item))
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        let status = res.status().as_u16();

        // Every completed exchange is handed back; status policy lives in the use case.
        let body = res
            .text()
            .await
            .map_err(|err| GatewayError::Body(err.to_string()))?;

        tracing::debug!(status, body_len = body.len(), "cart responded.");
        Ok(CartResponse { status, body })
    }
}
