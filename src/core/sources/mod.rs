//! Target string sources.
//!
//! Two interchangeable sources share the [`ResolveStrings`] contract:
//! a remote spreadsheet column and a local manifest file. Which one is used is
//! decided once, from configuration, in [`StringSource::from_settings`].

mod manifest;
mod sheet;

use enum_dispatch::enum_dispatch;
use tracing::debug;

pub use manifest::{ManifestSource, split_lines};
pub use sheet::{SheetProvider, SheetRequest, SheetSource};

use super::settings::SourceSettings;
use crate::{error::Result, sheets::GoogleSheetsProvider};

/// Produce the ordered list of target strings.
#[enum_dispatch]
pub trait ResolveStrings {
    fn resolve(&mut self) -> Result<Vec<String>>;
}

#[enum_dispatch(ResolveStrings)]
pub enum StringSource {
    Sheet(SheetSource),
    Manifest(ManifestSource),
}

impl StringSource {
    /// Build the source selected by configuration.
    ///
    /// The spreadsheet source uses [`GoogleSheetsProvider`]. Its credentials
    /// file is read here; the network is not touched until
    /// [`ResolveStrings::resolve`] is called.
    pub fn from_settings(settings: &SourceSettings) -> Result<Self> {
        match settings {
            SourceSettings::Sheet { request, timeout } => {
                debug!("reading target strings from spreadsheet {}", request.url);
                let provider = GoogleSheetsProvider::new(&request.api_key_file, *timeout)?;
                Ok(SheetSource::new(request.clone(), Box::new(provider)).into())
            }
            SourceSettings::Manifest { path } => {
                debug!("reading target strings from {}", path.display());
                Ok(ManifestSource::new(path.clone()).into())
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StringSource::Sheet(sheet) => format!("spreadsheet {}", sheet.request().url),
            StringSource::Manifest(manifest) => manifest.path().display().to_string(),
        }
    }
}
