use secrecy::SecretString;

/// Login provider used for token auth when none is configured.
pub const DEFAULT_LOGIN_PROVIDER: &str = "tmos";

/// Which authentication strategy a set of credentials drives.
///
/// Marker enum (no data) -- the secrets live in [`Credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// HTTP basic auth on every request.
    Basic,
    /// `X-F5-Auth-Token` obtained from `/mgmt/shared/authn/login`.
    Token,
}

/// Credentials for authenticating with a BIG-IP management interface.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Username/password sent as HTTP basic auth with each request.
    Basic {
        username: String,
        password: SecretString,
    },

    /// Username/password exchanged for a session token at login.
    /// Required for remote (LDAP/RADIUS/TACACS) accounts, which cannot
    /// use basic auth.
    Token {
        username: String,
        password: SecretString,
        login_provider: String,
    },
}

impl Credentials {
    /// Basic-auth credentials.
    pub fn basic(username: impl Into<String>, password: SecretString) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    /// Token-auth credentials against the local `tmos` provider.
    pub fn token(username: impl Into<String>, password: SecretString) -> Self {
        Self::Token {
            username: username.into(),
            password,
            login_provider: DEFAULT_LOGIN_PROVIDER.into(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Self::Basic { username, .. } | Self::Token { username, .. } => username,
        }
    }

    pub fn strategy(&self) -> AuthStrategy {
        match self {
            Self::Basic { .. } => AuthStrategy::Basic,
            Self::Token { .. } => AuthStrategy::Token,
        }
    }
}
