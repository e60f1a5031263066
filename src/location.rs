//! Location cleaner endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};

/// A handle for the `/location/clean` endpoint. Created with
/// [`PdlClient::location`].
#[derive(Clone, Debug)]
pub struct Location {
    client: PdlClient,
    timeout: Option<Duration>,
}

impl Location {
    pub(crate) fn new(client: &PdlClient) -> Self {
        Self {
            client: client.clone(),
            timeout: None,
        }
    }

    /// Sets a per-call timeout, overriding the client-wide default.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Cleans a raw location string into a canonical record. GET
    /// `/location/clean`.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn clean(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/location/clean", &params, self.timeout).await
    }
}
