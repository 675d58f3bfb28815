//! Google Sheets implementation of [`SheetProvider`].
//!
//! Reads one column of one worksheet through the Sheets v4 REST API using a
//! blocking `reqwest` client with a bounded timeout. The OAuth access token is
//! cached and refreshed when it expires.

mod credentials;

use std::{
    path::Path,
    time::{Duration, SystemTime},
};

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Response},
};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

pub use credentials::{AccessToken, Credentials, TokenResponse};

use crate::{
    core::{SheetProvider, SheetRequest},
    error::{DowserError, Result},
};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

pub struct GoogleSheetsProvider {
    client: Client,
    credentials: Credentials,
    api_base: Url,
    token: Option<AccessToken>,
}

impl GoogleSheetsProvider {
    /// Load credentials from `key_file` and build a client whose requests
    /// give up after `timeout`.
    pub fn new(key_file: &Path, timeout: Duration) -> Result<Self> {
        let credentials = Credentials::load(key_file)?;
        Self::with_credentials(credentials, timeout, SHEETS_API)
    }

    /// Build a provider that talks to the Sheets API rooted at `api_base`.
    pub fn with_credentials(
        credentials: Credentials,
        timeout: Duration,
        api_base: &str,
    ) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| DowserError::Config(format!("bad API URL {}: {}", api_base, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            credentials,
            api_base,
            token: None,
        })
    }

    fn access_token(&mut self) -> Result<String> {
        if let Some(token) = &self.token {
            if !token.is_expired(SystemTime::now()) {
                return Ok(token.value.clone());
            }
            debug!("access token expired, refreshing");
        }

        let token = self.fetch_token()?;
        let value = token.value.clone();
        self.token = Some(token);
        Ok(value)
    }

    fn fetch_token(&self) -> Result<AccessToken> {
        let issued_at = SystemTime::now();
        let form = self.credentials.grant_form(issued_at)?;

        let response = self
            .client
            .post(self.credentials.token_uri())
            .form(&form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DowserError::Auth(format!(
                "token request rejected ({}): {}",
                status,
                error_message(&body)
            )));
        }

        let token: TokenResponse = response.json()?;
        Ok(AccessToken::from_response(token, issued_at))
    }

    fn get_json<T: DeserializeOwned>(&mut self, url: Url) -> Result<T> {
        let token = self.access_token()?;
        let response = self.client.get(url).bearer_auth(token).send()?;
        Ok(check_status(response)?.json()?)
    }
}

impl SheetProvider for GoogleSheetsProvider {
    fn column_values(&mut self, request: &SheetRequest) -> Result<Vec<String>> {
        let id = spreadsheet_id(&request.url)?;

        let metadata: SpreadsheetMetadata = self.get_json(metadata_url(&self.api_base, &id)?)?;
        let title = metadata
            .sheets
            .get(request.worksheet_index)
            .map(|sheet| sheet.properties.title.clone())
            .ok_or_else(|| {
                DowserError::SheetNotFound(format!(
                    "worksheet index {} out of range (spreadsheet has {})",
                    request.worksheet_index,
                    metadata.sheets.len()
                ))
            })?;

        let range = column_range(&title, request.column_index);
        debug!("reading range {} of spreadsheet {}", range, id);

        let values: ValueRange = self.get_json(values_url(&self.api_base, &id, &range)?)?;
        Ok(values.values.into_iter().next().unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<Worksheet>,
}

#[derive(Debug, Deserialize)]
struct Worksheet {
    properties: WorksheetProperties,
}

#[derive(Debug, Deserialize)]
struct WorksheetProperties {
    title: String,
}

/// `values.get` response with `majorDimension=COLUMNS`. Empty ranges omit
/// `values` entirely.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let message = error_message(&body);
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DowserError::Auth(message),
        StatusCode::NOT_FOUND => DowserError::SheetNotFound(message),
        _ => DowserError::SheetApi {
            status: status.as_u16(),
            message,
        },
    })
}

/// Pull a human-readable message out of a Google error body.
///
/// Handles both the API shape `{"error": {"message": ..}}` and the OAuth shape
/// `{"error": "..", "error_description": ".."}`; anything else is returned as is.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(message) = value["error"]["message"].as_str() {
        return message.to_string();
    }
    match (value["error"].as_str(), value["error_description"].as_str()) {
        (Some(error), Some(description)) => format!("{}: {}", error, description),
        (Some(error), None) => error.to_string(),
        _ => body.trim().to_string(),
    }
}

/// Extract the spreadsheet id from a `.../spreadsheets/d/<id>/...` URL or a
/// legacy `?key=<id>` URL.
pub fn spreadsheet_id(sheet_url: &str) -> Result<String> {
    let invalid = || {
        DowserError::Config(format!(
            "'strings-sheet-url' is not a spreadsheet URL: {}",
            sheet_url
        ))
    };

    let url = Url::parse(sheet_url).map_err(|_| invalid())?;

    if let Some(mut segments) = url.path_segments() {
        while let Some(segment) = segments.next() {
            if segment == "d" {
                return segments
                    .next()
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .ok_or_else(invalid);
            }
        }
    }

    url.query_pairs()
        .find(|(name, _)| name == "key")
        .map(|(_, id)| id.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)
}

/// A1 column letters for a 0-based column index: 0 → `A`, 25 → `Z`, 26 → `AA`.
pub fn column_letter(column_index: usize) -> String {
    let mut n = column_index.saturating_add(1);
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Whole-column A1 range on a named worksheet, e.g. `'Strings'!C:C`.
pub fn column_range(sheet_title: &str, column_index: usize) -> String {
    let column = column_letter(column_index);
    format!("'{}'!{}:{}", sheet_title.replace('\'', "''"), column, column)
}

fn api_url(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DowserError::Config(format!("bad API URL: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn metadata_url(base: &Url, id: &str) -> Result<Url> {
    let mut url = api_url(base, &[id])?;
    url.query_pairs_mut()
        .append_pair("fields", "sheets.properties.title");
    Ok(url)
}

fn values_url(base: &Url, id: &str, range: &str) -> Result<Url> {
    let mut url = api_url(base, &[id, "values", range])?;
    url.query_pairs_mut()
        .append_pair("majorDimension", "COLUMNS");
    Ok(url)
}
