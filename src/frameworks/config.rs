use std::{path::PathBuf, time::Duration};

use thiserror::Error;
use url::Url;

use crate::frameworks::cli::Args;

// Runtime defaults; each one can be overridden by flag or environment.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LOGIN_PATH: &str = "/login.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid cart service url {url:?}: {source}")]
    InvalidServiceUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("invalid login path {path:?}: {source}")]
    InvalidLoginPath {
        path: String,
        source: url::ParseError,
    },
    #[error("failed to initialize cart client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

// Where the cookie string is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CookieSetting {
    Inline(String),
    File(PathBuf),
    Unset,
}

// Validated runtime settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub service_url: Url,
    pub login_url: Url,
    pub request_timeout: Option<Duration>,
    pub cookies: CookieSetting,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let service_url =
            Url::parse(&args.service_url).map_err(|source| ConfigError::InvalidServiceUrl {
                url: args.service_url.clone(),
                source,
            })?;
        let login_url = resolve_login_url(&service_url, &args.login_path)?;

        let cookies = match (&args.cookie, &args.cookie_file) {
            (Some(cookie), _) => CookieSetting::Inline(cookie.clone()),
            (None, Some(path)) => CookieSetting::File(path.clone()),
            (None, None) => CookieSetting::Unset,
        };

        Ok(Self {
            service_url,
            login_url,
            request_timeout: args.timeout_ms.map(Duration::from_millis),
            cookies,
        })
    }
}

// Resolve the login page the way a browser resolves a link on a page served
// by the cart service: relative paths join onto it, absolute URLs win.
pub fn resolve_login_url(service_url: &Url, login_path: &str) -> Result<Url, ConfigError> {
    service_url
        .join(login_path)
        .map_err(|source| ConfigError::InvalidLoginPath {
            path: login_path.to_string(),
            source,
        })
}
