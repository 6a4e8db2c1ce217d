use crate::domain::{BearerToken, CredentialProvider, read_access_token};
use std::path::PathBuf;

// Where the raw `name=value; name=value` cookie string comes from.
pub trait CookieSource: Send + Sync {
    fn read_cookie(&self) -> Option<String>;
}

// Cookie string fixed at startup (command line or environment).
#[derive(Clone, Debug)]
pub struct StaticCookies(pub String);

impl CookieSource for StaticCookies {
    fn read_cookie(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

// Cookie string kept in a file that the login flow rewrites.
// Read on every call so a fresh login is picked up without a restart.
#[derive(Clone, Debug)]
pub struct FileCookies(pub PathBuf);

impl CookieSource for FileCookies {
    fn read_cookie(&self) -> Option<String> {
        match std::fs::read_to_string(&self.0) {
            Ok(contents) => Some(contents),
            Err(e) => {
                tracing::warn!(path = %self.0.display(), error = %e, "failed to read cookie file.");
                None
            }
        }
    }
}

// No cookie store configured at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCookies;

impl CookieSource for NoCookies {
    fn read_cookie(&self) -> Option<String> {
        None
    }
}

// Adapts any cookie source into the credential port.
pub struct CookieCredentials<S> {
    pub source: S,
}

impl<S> CredentialProvider for CookieCredentials<S>
where
    S: CookieSource,
{
    fn token(&self) -> Option<BearerToken> {
        let cookie = self.source.read_cookie()?;
        read_access_token(&cookie)
    }
}

// Lets the runner pick a source at startup without making the use case generic over it.
impl CookieSource for Box<dyn CookieSource> {
    fn read_cookie(&self) -> Option<String> {
        (**self).read_cookie()
    }
}
