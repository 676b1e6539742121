// iControl REST HTTP client
//
// Wraps `reqwest::Client` with `/mgmt/...` URL construction, auth header
// injection and error-envelope handling. Request and response bodies for
// typed resources go through `WireCodec`, so a body that cannot be
// encoded never reaches the device.

use std::sync::RwLock;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::{AuthStrategy, Credentials};
use crate::codec::{CodecError, WireCodec, from_wire_bytes, from_wire_value, to_wire_bytes};
use crate::error::Error;
use crate::models::common::{ApiErrorBody, Collection};
use crate::transport::TransportConfig;

/// Header carrying the session token after a token login.
pub(crate) const AUTH_TOKEN_HEADER: &str = "X-F5-Auth-Token";

/// Everything needed to construct a [`BigIpClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Management interface root, e.g. `https://10.0.0.10`.
    pub url: Url,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

/// HTTP client for a BIG-IP's iControl REST API.
///
/// Safe to share across tasks; the only mutable state is the session
/// token used with [`Credentials::Token`].
pub struct BigIpClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    token: RwLock<Option<SecretString>>,
}

/// Encode a resource name or full path for use as a URL segment.
///
/// iControl REST addresses `/Common/app/web` as `~Common~app~web`.
/// Bare names pass through unchanged.
pub fn resource_id(name: &str) -> String {
    name.replace('/', "~")
}

impl BigIpClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Ok(Self::with_client(http, config.url, config.credentials))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            token: RwLock::new(None),
        }
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Token state ──────────────────────────────────────────────────

    pub fn has_token(&self) -> bool {
        self.token.read().expect("auth token lock poisoned").is_some()
    }

    pub(crate) fn set_token(&self, token: SecretString) {
        trace!("storing auth token");
        *self.token.write().expect("auth token lock poisoned") = Some(token);
    }

    pub(crate) fn take_token(&self) -> Option<SecretString> {
        self.token.write().expect("auth token lock poisoned").take()
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().expect("auth token lock poisoned");
        if let Some(token) = guard.as_ref() {
            return builder.header(AUTH_TOKEN_HEADER, token.expose_secret());
        }
        match &self.credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Credentials::Token { .. } => builder,
        }
    }

    async fn ensure_session(&self) -> Result<(), Error> {
        if self.credentials.strategy() == AuthStrategy::Token && !self.has_token() {
            self.login().await?;
        }
        Ok(())
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/mgmt/{path}` -- used for `shared/` endpoints (auth, tokens).
    pub(crate) fn mgmt_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/mgmt/{path}"))?)
    }

    /// `{base}/mgmt/tm/{path}` -- the configuration tree.
    pub(crate) fn tm_url(&self, path: &str) -> Result<Url, Error> {
        self.mgmt_url(&format!("tm/{path}"))
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a request and return the body of a 2xx response.
    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<String, Error> {
        self.ensure_session().await?;
        debug!("{} {}", method, url);

        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = self.apply_auth(builder).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status.is_success() {
            trace!(status = status.as_u16(), bytes = text.len(), "response received");
            Ok(text)
        } else {
            Err(error_from_response(status, &text))
        }
    }

    /// GET a single resource and decode it through its codec.
    pub(crate) async fn get_resource<T: WireCodec>(&self, url: Url) -> Result<T, Error> {
        let body = self.execute(Method::GET, url, None).await?;
        Ok(from_wire_bytes(body.as_bytes())?)
    }

    /// GET a collection and decode every item through its codec.
    pub(crate) async fn list_resources<T: WireCodec>(&self, url: Url) -> Result<Vec<T>, Error> {
        let body = self.execute(Method::GET, url, None).await?;
        // Only the envelope is parsed here; items go through the codec so a
        // bad item reports the same error as a single GET would.
        let collection: Collection<serde_json::Value> = parse_json(&body)?;
        let items = collection
            .items
            .into_iter()
            .map(from_wire_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(items)
    }

    /// Encode `value`, send it with `method`, and decode the device's echo.
    pub(crate) async fn send_resource<T: WireCodec>(
        &self,
        method: Method,
        url: Url,
        value: &T,
    ) -> Result<T, Error> {
        let payload = to_wire_bytes(value)?;
        let body = self.execute(method, url, Some(payload)).await?;
        Ok(from_wire_bytes(body.as_bytes())?)
    }

    /// DELETE a resource; the device answers with an empty body.
    pub(crate) async fn delete_resource(&self, url: Url) -> Result<(), Error> {
        self.execute(Method::DELETE, url, None).await?;
        Ok(())
    }

    /// POST an untyped command body (e.g. `{"command": "publish"}`).
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let payload = serde_json::to_vec(body).map_err(CodecError::Serialization)?;
        let text = self.execute(Method::POST, url, Some(payload)).await?;
        parse_json(&text)
    }
}

/// Map a non-2xx response to an error, preferring the device's message.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| preview(body));

    if status == StatusCode::UNAUTHORIZED {
        Error::Authentication { message }
    } else {
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization {
        message: format!("{e} (body preview: {:?})", preview(body)),
        body: body.to_owned(),
    })
}

pub(crate) fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
