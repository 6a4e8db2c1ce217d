// Shared stub cart backend and recording ports for integration tests.
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use cart_client::domain::{Navigator, Notifier};
use serde::Deserialize;

// The only session the stub knows about.
pub const GOOD_TOKEN: &str = "good-token";
// Product whose cart row the stub fails to write.
pub const BROKEN_PRODUCT: i64 = 13;

// Quantities per (session token, product), like the backend's cart_items table.
type Carts = Arc<Mutex<HashMap<(String, i64), i64>>>;

#[derive(Deserialize)]
struct CartItemBody {
    product_id: i64,
    quantity: i64,
}

// Global base URL used by all tests after the server publishes its bound address.
static SERVER_URL: OnceLock<String> = OnceLock::new();

// Ensure the stub backend is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let (tx, rx) = std::sync::mpsc::channel();
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Bind to an ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                tx.send(format!("http://{addr}")).expect("publish url");
                axum::serve(listener, stub_app())
                    .await
                    .expect("stub server failed");
            });
        });
        // The listener is bound before the URL is published, so connects will queue.
        rx.recv_timeout(Duration::from_secs(5))
            .expect("stub server did not start in time")
    })
}

// Address of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

fn stub_app() -> Router {
    Router::new()
        .route("/add_to_cart", post(add_to_cart))
        .with_state(Carts::default())
}

// A missing or unparseable `Authorization: Bearer` header never reaches the
// body: the `TypedHeader` extractor answers 400 first. Unknown sessions get 401.
async fn add_to_cart(
    State(carts): State<Carts>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Json(item): Json<CartItemBody>,
) -> Result<String, (StatusCode, String)> {
    if authorization.token() != GOOD_TOKEN {
        return Err((
            StatusCode::UNAUTHORIZED,
            "A user was not found for the given session token. Please login again".to_owned(),
        ));
    }

    if item.product_id == BROKEN_PRODUCT {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error".to_owned(),
        ));
    }

    let mut carts = carts.lock().expect("carts mutex poisoned");
    let key = (authorization.token().to_owned(), item.product_id);
    match carts.get_mut(&key) {
        Some(quantity) => {
            *quantity += item.quantity;
            Ok("Cart item updated successfully".to_owned())
        }
        None => {
            carts.insert(key, item.quantity);
            Ok("Cart item added successfully".to_owned())
        }
    }
}

#[derive(Clone, Default)]
pub struct Recorder {
    pub redirects: Arc<Mutex<Vec<String>>>,
    pub alerts: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("redirects mutex poisoned").clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts mutex poisoned").clone()
    }
}

impl Navigator for Recorder {
    fn redirect(&self, url: &str) {
        self.redirects
            .lock()
            .expect("redirects mutex poisoned")
            .push(url.to_string());
    }
}

impl Notifier for Recorder {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts mutex poisoned")
            .push(message.to_string());
    }
}
