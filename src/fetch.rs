// src/fetch.rs
//! Remote sheet access. One GET per report selection. The session turns
//! any failure into an empty table, so nothing from here ever reaches
//! the shell as an error dialog.

use std::time::Duration;

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::SitelogError;

/// Fetch seam. The session depends on this; tests stub it.
pub trait SheetFetcher {
    fn fetch_csv(&self, url: &str) -> Result<String, SitelogError>;
}

/// Plain blocking client. Published sheets need no auth and bounce
/// through a redirect or two before the CSV body; reqwest follows those
/// on its own.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, SitelogError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl SheetFetcher for HttpFetcher {
    fn fetch_csv(&self, url: &str) -> Result<String, SitelogError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SitelogError::Status {
                code: status.as_u16(),
                url: s!(url),
            });
        }
        Ok(response.text()?)
    }
}
