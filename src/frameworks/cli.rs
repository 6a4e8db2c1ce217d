use std::path::PathBuf;

use crate::frameworks::config::{DEFAULT_LOGIN_PATH, DEFAULT_SERVICE_URL};

/// Add a product to the cart of the signed-in user.
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "cart_client", version)]
pub struct Args {
    /// Product identifier (whole number)
    #[arg(allow_hyphen_values = true)]
    pub product_id: String,

    /// Quantity to add (whole number)
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,

    /// Base URL of the cart service
    #[arg(long, env = "CART_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Login page, relative to the service URL or absolute
    #[arg(long, env = "CART_LOGIN_PATH", default_value = DEFAULT_LOGIN_PATH)]
    pub login_path: String,

    /// Raw cookie string, e.g. "access_token=[abc]; theme=dark"
    #[arg(long, env = "CART_COOKIE", conflicts_with = "cookie_file")]
    pub cookie: Option<String>,

    /// File holding the cookie string, re-read on every request
    #[arg(long, env = "CART_COOKIE_FILE")]
    pub cookie_file: Option<PathBuf>,

    /// Request timeout in milliseconds (no timeout when unset)
    #[arg(long = "timeout-ms", env = "CART_REQUEST_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
impl Args {
    // Positionals only, with defaults applied and no CART_* variables consulted.
    pub(crate) fn bare(product_id: &str, quantity: &str) -> Self {
        Self {
            product_id: product_id.to_string(),
            quantity: quantity.to_string(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            cookie: None,
            cookie_file: None,
            timeout_ms: None,
        }
    }
}
