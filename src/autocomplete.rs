//! Field-value autocomplete endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};

/// A handle for the `/autocomplete` endpoint. Created with
/// [`PdlClient::autocomplete`].
#[derive(Clone, Debug)]
pub struct Autocomplete {
    client: PdlClient,
    timeout: Option<Duration>,
}

impl Autocomplete {
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

    /// Suggests completions for a partial value of `field` (e.g. `skill`,
    /// `title`, `company`). GET `/autocomplete` after merging `params` over
    /// the defaults `{field: null, text: "", size: 10, pretty: "false"}`.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn fetch(&self, params: Params) -> Result<Value, PdlError> {
        let defaults = Params::new()
            .set("field", Value::Null)
            .set("text", "")
            .set("size", 10)
            .set("pretty", "false");

        let merged = params.merged_over(defaults);
        self.client.get("/autocomplete", &merged, self.timeout).await
    }
}
