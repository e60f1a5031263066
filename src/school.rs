//! School cleaner endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};

/// A handle for the `/school/clean` endpoint. Created with
/// [`PdlClient::school`].
#[derive(Clone, Debug)]
pub struct School {
    client: PdlClient,
    timeout: Option<Duration>,
}

impl School {
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

    /// Cleans raw school input into a canonical record. GET `/school/clean`.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn clean(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/school/clean", &params, self.timeout).await
    }
}
