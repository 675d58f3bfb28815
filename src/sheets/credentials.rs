//! Google credential files and OAuth access tokens.

use std::{
    fs,
    path::Path,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::{DowserError, Result};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Read access to spreadsheets and the drive they live in.
pub const SCOPES: &str = "https://www.googleapis.com/auth/spreadsheets.readonly \
                          https://www.googleapis.com/auth/drive.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime accepted by Google's token endpoint (maximum one hour).
const ASSERTION_LIFETIME_SECS: u64 = 3600;

/// Tokens this close to expiry are treated as expired.
const EXPIRY_SKEW: Duration = Duration::from_secs(60);

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Contents of an `api-key-file`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUser),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizedUser {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DowserError::Config(format!(
                "cannot read api-key-file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| {
            DowserError::Auth(format!(
                "{} is not a usable credentials file: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn token_uri(&self) -> &str {
        match self {
            Credentials::ServiceAccount(key) => &key.token_uri,
            Credentials::AuthorizedUser(user) => &user.token_uri,
        }
    }

    /// Form body for the token endpoint.
    pub fn grant_form(&self, now: SystemTime) -> Result<Vec<(&'static str, String)>> {
        match self {
            Credentials::ServiceAccount(key) => {
                let iat = unix_seconds(now);
                let claims = Claims {
                    iss: &key.client_email,
                    scope: SCOPES,
                    aud: &key.token_uri,
                    iat,
                    exp: iat + ASSERTION_LIFETIME_SECS,
                };
                let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
                    .map_err(|e| DowserError::Auth(format!("invalid service account key: {}", e)))?;
                let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
                    .map_err(|e| DowserError::Auth(format!("cannot sign assertion: {}", e)))?;

                Ok(vec![
                    ("grant_type", JWT_BEARER_GRANT.to_string()),
                    ("assertion", assertion),
                ])
            }
            Credentials::AuthorizedUser(user) => Ok(vec![
                ("grant_type", "refresh_token".to_string()),
                ("client_id", user.client_id.clone()),
                ("client_secret", user.client_secret.clone()),
                ("refresh_token", user.refresh_token.clone()),
            ]),
        }
    }
}

/// Successful token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: SystemTime,
}

impl AccessToken {
    /// A lifetime too large to represent falls back to the default one hour.
    pub fn from_response(response: TokenResponse, issued_at: SystemTime) -> Self {
        let expires_at = issued_at
            .checked_add(Duration::from_secs(response.expires_in))
            .or_else(|| issued_at.checked_add(Duration::from_secs(default_expires_in())))
            .unwrap_or(issued_at);
        Self {
            value: response.access_token,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: SystemTime) -> bool {
        now.checked_add(EXPIRY_SKEW)
            .is_none_or(|deadline| deadline >= self.expires_at)
    }
}

fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
