use crate::domain::{CartError, CartGateway, CartItem, CredentialProvider, Navigator, Notifier};

// Why the user was sent to the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    MissingToken,
    // 400 and 401 are treated alike.
    Rejected { status: u16 },
}

// How an add-to-cart attempt ended when the backend could be reached (or
// did not need to be).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddToCartOutcome {
    RedirectedToLogin { url: String, reason: RedirectReason },
    Alerted { status: u16, message: String },
}

// Add-to-cart use case with injected dependencies.
pub struct AddToCartUseCase<P, G, N, A> {
    pub credentials: P,
    pub gateway: G,
    pub navigator: N,
    pub notifier: A,
    pub login_url: String,
}

impl<P, G, N, A> AddToCartUseCase<P, G, N, A>
where
    P: CredentialProvider,
    G: CartGateway,
    N: Navigator,
    A: Notifier,
{
    #[tracing::instrument(
        name = "add_to_cart",
        skip_all,
        fields(product_id = item.product_id, quantity = item.quantity)
    )]
    pub async fn execute(&self, item: CartItem) -> Result<AddToCartOutcome, CartError> {
        // Without a token there is nothing to send; leave before any request.
        let Some(token) = self.credentials.token() else {
            tracing::info!("no access token, redirecting to login.");
            return Ok(self.redirect(RedirectReason::MissingToken));
        };

        let response = self
            .gateway
            .add_to_cart(&token, &item)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, "add to cart request failed.");
            })?;

        if matches!(response.status, 400 | 401) {
            tracing::info!(
                status = response.status,
                "cart rejected the request, redirecting to login."
            );
            return Ok(self.redirect(RedirectReason::Rejected {
                status: response.status,
            }));
        }

        tracing::debug!(status = response.status, "showing cart response.");
        self.notifier.alert(&response.body);

        Ok(AddToCartOutcome::Alerted {
            status: response.status,
            message: response.body,
        })
    }

    fn redirect(&self, reason: RedirectReason) -> AddToCartOutcome {
        self.navigator.redirect(&self.login_url);
        AddToCartOutcome::RedirectedToLogin {
            url: self.login_url.clone(),
            reason,
        }
    }
}
