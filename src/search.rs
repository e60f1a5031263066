//! Person/company search in the `elastic` and `sql` query styles.

use std::time::Duration;

use serde_json::Value;

use crate::core::{Params, PdlClient, PdlError};

/// The key callers use to pass their query; it is moved into the
/// variant-named field before dispatch.
const SEARCH_QUERY_KEY: &str = "searchQuery";

/// A handle for the `/person/search` and `/company/search` endpoints,
/// bound to its owning category by [`crate::Person::search`] or
/// [`crate::Company::search`].
///
/// Both query styles take the query under the `searchQuery` key and merge
/// the remaining parameters over the search defaults (`dataset: "all"`,
/// `size: 10`, `titlecase: false`, `pretty: false`, no scroll token).
///
/// # Example
///
/// ```no_run
/// # use pdl_rs::{Params, PdlClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), pdl_rs::PdlError> {
/// let client = PdlClient::builder().api_key("your-api-key").build()?;
///
/// let hits = client
///     .person()
///     .search()
///     .sql(Params::new()
///         .set("searchQuery", "SELECT * FROM person WHERE job_title_role='health';")
///         .set("size", 25))
///     .await?;
/// println!("{}", hits["total"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Search {
    client: PdlClient,
    category: &'static str,
    timeout: Option<Duration>,
}

impl Search {
    pub(crate) fn new(client: &PdlClient, category: &'static str) -> Self {
        Self {
            client: client.clone(),
            category,
            timeout: None,
        }
    }

    pub(crate) fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a per-call timeout, overriding the client-wide default.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Runs an Elasticsearch-style structured search.
    ///
    /// The caller's `searchQuery` value (a query object) becomes the
    /// `elastic` field of the request body. If `searchQuery` is absent an
    /// explicit `"elastic": null` is sent.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn elastic(&self, params: Params) -> Result<Value, PdlError> {
        self.dispatch("elastic", params).await
    }

    /// Runs a SQL-style text search.
    ///
    /// The caller's `searchQuery` value (a SQL string) becomes the `sql`
    /// field of the request body. If `searchQuery` is absent an explicit
    /// `"sql": null` is sent.
    ///
    /// # Errors
    ///
    /// Returns `PdlError` if the request fails, the API returns a non-2xx
    /// status, or the response body is not valid JSON.
    pub async fn sql(&self, params: Params) -> Result<Value, PdlError> {
        self.dispatch("sql", params).await
    }

    /// Builds the default map for `variant`, merges the caller's params over
    /// it, and POSTs to `/<category>/search`.
    async fn dispatch(&self, variant: &'static str, mut params: Params) -> Result<Value, PdlError> {
        let query = params.remove(SEARCH_QUERY_KEY).unwrap_or(Value::Null);

        let defaults = Params::new()
            .set("titlecase", false)
            .set("dataset", "all")
            .set("scroll_token", Value::Null)
            .set("size", 10)
            .set(variant, query)
            .set("pretty", false);

        let body = params.merged_over(defaults);
        self.client
            .post(&format!("/{}/search", self.category), &body, self.timeout)
            .await
    }
}
