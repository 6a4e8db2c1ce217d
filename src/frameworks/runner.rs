// Framework bootstrap for the cart client binary.

use crate::domain::{CartError, CartItem};
use crate::frameworks::cli::Args;
use crate::frameworks::config::{ConfigError, CookieSetting, Settings};
use crate::interface_adapters::clients::CartClient;
use crate::interface_adapters::cookies::{
    CookieCredentials, CookieSource, FileCookies, NoCookies, StaticCookies,
};
use crate::interface_adapters::terminal::{TerminalNavigator, TerminalNotifier};
use crate::use_cases::{AddToCartOutcome, AddToCartUseCase};

use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Cart(#[from] CartError),
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries only what the user is shown.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> ExitCode {
    // Load .env locally before clap reads env fallbacks; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_tracing();

    let result = execute(args).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "add to cart failed");
    }

    ExitCode::from(exit_code(&result))
}

// Build the real adapters from the arguments and submit one item.
pub async fn execute(args: Args) -> Result<AddToCartOutcome, RunError> {
    let item = CartItem::coerce(&args.product_id, &args.quantity)?;
    let settings = Settings::from_args(&args)?;

    let gateway = CartClient::new(settings.service_url.as_str(), settings.request_timeout)
        .map_err(ConfigError::from)?;
    tracing::debug!(
        service_url = %gateway.base_url,
        login_url = %settings.login_url,
        timeout_ms = settings.request_timeout.map(|t| t.as_millis() as u64),
        "cart client configured."
    );

    let use_case = AddToCartUseCase {
        credentials: CookieCredentials {
            source: cookie_source(settings.cookies),
        },
        gateway,
        navigator: TerminalNavigator::stdout(),
        notifier: TerminalNotifier::stdout(),
        login_url: settings.login_url.to_string(),
    };

    Ok(use_case.execute(item).await?)
}

fn cookie_source(setting: CookieSetting) -> Box<dyn CookieSource> {
    match setting {
        CookieSetting::Inline(cookie) => Box::new(StaticCookies(cookie)),
        CookieSetting::File(path) => Box::new(FileCookies(path)),
        CookieSetting::Unset => Box::new(NoCookies),
    }
}

// Process exit status for each way a run can end.
pub fn exit_code(result: &Result<AddToCartOutcome, RunError>) -> u8 {
    match result {
        Ok(AddToCartOutcome::Alerted { status, .. }) if (200..300).contains(status) => 0,
        Ok(AddToCartOutcome::Alerted { .. }) => 1,
        Ok(AddToCartOutcome::RedirectedToLogin { .. }) => 2,
        Err(RunError::Cart(CartError::Transport(_))) => 3,
        Err(RunError::Cart(CartError::InvalidItem { .. }) | RunError::Config(_)) => 64,
    }
}
