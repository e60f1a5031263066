//! Company endpoints: enrichment, cleaning, search.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};
use crate::search::Search;

/// A handle for the `/company/*` endpoints.
///
/// Created with [`PdlClient::company`].
#[derive(Clone, Debug)]
pub struct Company {
    client: PdlClient,
    timeout: Option<Duration>,
}

impl Company {
    pub(crate) fn new(client: &PdlClient) -> Self {
        Self {
            client: client.clone(),
            timeout: None,
        }
    }

    /// Sets a per-call timeout for all subsequent requests made through this
    /// handle, overriding the client-wide default.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Enriches a company record. GET `/company/enrich` with `params` as-is.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn enrich(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/company/enrich", &params, self.timeout).await
    }

    /// Cleans raw company input into a canonical record. GET
    /// `/company/clean`.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn clean(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/company/clean", &params, self.timeout).await
    }

    /// Returns a [`Search`] handle targeting `/company/search`.
    #[must_use]
    pub fn search(&self) -> Search {
        Search::new(&self.client, "company").with_timeout(self.timeout)
    }
}
