// Token authentication
//
// `POST /mgmt/shared/authn/login` exchanges username/password for a token
// that is then sent as `X-F5-Auth-Token`. Basic-auth clients skip all of
// this; their credentials ride on every request instead.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::auth::Credentials;
use crate::error::Error;
use crate::tm::client::{AUTH_TOKEN_HEADER, BigIpClient, error_from_response, parse_json, preview};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    login_provider_name: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: IssuedToken,
}

#[derive(Deserialize)]
struct IssuedToken {
    token: String,
    #[serde(default)]
    timeout: Option<u64>,
}

impl BigIpClient {
    /// Obtain a session token.
    ///
    /// A no-op for [`Credentials::Basic`]. Requests made with token
    /// credentials log in on first use, so calling this up front only
    /// surfaces credential errors earlier.
    pub async fn login(&self) -> Result<(), Error> {
        let Credentials::Token {
            username,
            password,
            login_provider,
        } = self.credentials()
        else {
            debug!("basic auth configured, skipping token login");
            return Ok(());
        };

        let url = self.mgmt_url("shared/authn/login")?;
        debug!(username = %username, provider = %login_provider, "logging in at {}", url);

        let body = LoginRequest {
            username,
            password: password.expose_secret(),
            login_provider_name: login_provider,
        };

        let resp = self.http().post(url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {}", preview(&text)),
            });
        }

        let issued: LoginResponse = parse_json(&text)?;
        trace!(timeout_secs = ?issued.token.timeout, "auth token issued");
        self.set_token(SecretString::from(issued.token.token));

        debug!("login successful");
        Ok(())
    }

    /// Revoke the current session token, if any.
    ///
    /// `DELETE /mgmt/shared/authz/tokens/{token}`
    pub async fn logout(&self) -> Result<(), Error> {
        let Some(token) = self.take_token() else {
            return Ok(());
        };

        let url = self.mgmt_url(&format!("shared/authz/tokens/{}", token.expose_secret()))?;
        debug!("revoking auth token");

        let resp = self
            .http()
            .delete(url)
            .header(AUTH_TOKEN_HEADER, token.expose_secret())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_response(status, &text));
        }

        debug!("logout complete");
        Ok(())
    }
}
