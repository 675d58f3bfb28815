use std::path::PathBuf;

use super::ResolveStrings;
use crate::error::Result;

/// Identifies one spreadsheet column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub url: String,
    /// 0-based worksheet position.
    pub worksheet_index: usize,
    /// 0-based column position; providers convert to their own indexing.
    pub column_index: usize,
    /// Credentials file used to authenticate with the provider.
    pub api_key_file: PathBuf,
}

/// A remote tabular source able to return the values of a single column.
///
/// Implementations refresh expired credentials themselves; callers never see
/// an expiry unless the refresh fails.
pub trait SheetProvider {
    fn column_values(&mut self, request: &SheetRequest) -> Result<Vec<String>>;
}

pub struct SheetSource {
    request: SheetRequest,
    provider: Box<dyn SheetProvider>,
}

impl SheetSource {
    pub fn new(request: SheetRequest, provider: Box<dyn SheetProvider>) -> Self {
        Self { request, provider }
    }

    pub fn request(&self) -> &SheetRequest {
        &self.request
    }
}

impl ResolveStrings for SheetSource {
    fn resolve(&mut self) -> Result<Vec<String>> {
        self.provider.column_values(&self.request)
    }
}
