//! Person endpoints: enrichment, identification, retrieval, bulk, search.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};
use crate::search::Search;

/// A handle for the `/person/*` endpoints.
///
/// Created with [`PdlClient::person`]. Each operation is a single stateless
/// request; concurrent calls only share the immutable client configuration.
///
/// # Example
///
/// ```no_run
/// # use pdl_rs::{Params, PdlClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), pdl_rs::PdlError> {
/// let client = PdlClient::builder().api_key("your-api-key").build()?;
/// let person = client.person();
///
/// let enriched = person
///     .enrich(Params::new().set("profile", "linkedin.com/in/seanthorne"))
///     .await?;
/// println!("{}", enriched["likelihood"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Person {
    client: PdlClient,
    timeout: Option<Duration>,
}

impl Person {
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

    /// Enriches a person record. GET `/person/enrich` with `params` as-is.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn enrich(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/person/enrich", &params, self.timeout).await
    }

    /// Identifies candidate person records. GET `/person/identify`.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn identify(&self, params: Params) -> Result<Value, PdlError> {
        self.client.get("/person/identify", &params, self.timeout).await
    }

    /// Retrieves a person record by its ID. GET `/person/retrieve/<id>` with
    /// no parameters.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn retrieve(&self, person_id: &str) -> Result<Value, PdlError> {
        self.client
            .get(&format!("/person/retrieve/{person_id}"), &Params::new(), self.timeout)
            .await
    }

    /// Enriches up to 100 person records in one call. POST `/person/bulk`
    /// with `records` as the JSON body; the response is one element per
    /// request in the payload.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not a JSON array.
    pub async fn bulk<B>(&self, records: &B) -> Result<Vec<Value>, PdlError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post("/person/bulk", records, self.timeout).await
    }

    /// Returns a [`Search`] handle targeting `/person/search`.
    #[must_use]
    pub fn search(&self) -> Search {
        Search::new(&self.client, "person").with_timeout(self.timeout)
    }
}
