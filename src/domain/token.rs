use std::fmt;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

// Opaque credential sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens end up in tracing fields through `?`; never print the secret.
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// Extracts the `access_token` value from a `Cookie`-style string
/// (`name=value; name=value`).
///
/// The login flow writes the token wrapped in one pair of brackets, so a
/// single leading `[` and trailing `]` are removed. Returns `None` when the
/// cookie is absent, set more than once, or its value is empty.
pub fn read_access_token(cookie: &str) -> Option<BearerToken> {
    let mut values = cookie.split(';').filter_map(|segment| {
        let (name, value) = segment.split_once('=')?;
        (name.trim() == ACCESS_TOKEN_COOKIE).then_some(value.trim())
    });

    // Two cookies with the same name leave no way to tell which one is current.
    let value = values.next()?;
    if values.next().is_some() {
        return None;
    }

    let value = value.strip_prefix('[').unwrap_or(value);
    let value = value.strip_suffix(']').unwrap_or(value);

    if value.is_empty() {
        return None;
    }

    Some(BearerToken::new(value))
}
