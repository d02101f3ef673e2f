use anyhow::{anyhow, Result};
use log::debug;
use url::Url;

use crate::infrastructure::exchange::thalex::models::{BookResponse, BookResult};

const BOOK_PATH: &str = "/api/v2/public/book";

/// REST client for the Thalex public order book endpoint.
pub struct ThalexRestClient {
    http: reqwest::Client,
    book_url: Url,
    instrument: String,
}

impl ThalexRestClient {
    pub fn new(base_url: &str, instrument: &str) -> Result<Self> {
        let book_url = Url::parse(base_url)
            .and_then(|base| base.join(BOOK_PATH))
            .map_err(|e| anyhow!("Invalid Thalex base URL '{}': {}", base_url, e))?;

        Ok(Self {
            http: reqwest::Client::new(),
            book_url,
            instrument: instrument.to_string(),
        })
    }

    /// Fetch one book snapshot for the configured instrument.
    pub async fn fetch_book(&self) -> Result<BookResult> {
        debug!("Fetching book for {} from {}", self.instrument, self.book_url);

        let response = self
            .http
            .get(self.book_url.clone())
            .query(&[("instrument_name", self.instrument.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let parsed: BookResponse = response.json().await?;
        parsed
            .result
            .ok_or_else(|| anyhow!("No result in book response for {}", self.instrument))
    }
}
