//! Public client surface + builder.
//! Endpoint paths and default hosts live in `constants`.

mod constants;

use std::time::Duration;

use constants::{API_KEY_HEADER, API_KEY_PARAM, DEFAULT_API_ROOT, DEFAULT_VERSION, USER_AGENT};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::autocomplete::Autocomplete;
use crate::company::Company;
use crate::core::{Params, PdlError, net};
use crate::location::Location;
use crate::person::Person;
use crate::school::School;

/// HTTP client for the People Data Labs API.
///
/// Holds the API key, the base URL, and a shared `reqwest::Client`.
/// Immutable after construction and cheap to clone; endpoint handles like
/// [`PdlClient::person`] each carry their own clone.
///
/// GET requests place the API key in the `api_key` query parameter; POST
/// requests place it in the `X-Api-Key` header. All requests advertise
/// `Accept-Encoding: gzip` (and responses are transparently decompressed).
#[derive(Clone, Debug)]
pub struct PdlClient {
    http: Client,
    api_key: String,
    base: Url,
}

impl PdlClient {
    /// Create a new builder.
    pub fn builder() -> PdlClientBuilder {
        PdlClientBuilder::default()
    }

    /// The base URL all endpoint paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Returns a handle for the person endpoints.
    #[must_use]
    pub fn person(&self) -> Person {
        Person::new(self)
    }

    /// Returns a handle for the company endpoints.
    #[must_use]
    pub fn company(&self) -> Company {
        Company::new(self)
    }

    /// Returns a handle for the school cleaner endpoint.
    #[must_use]
    pub fn school(&self) -> School {
        School::new(self)
    }

    /// Returns a handle for the location cleaner endpoint.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self)
    }

    /// Returns a handle for the autocomplete endpoint.
    #[must_use]
    pub fn autocomplete(&self) -> Autocomplete {
        Autocomplete::new(self)
    }

    /* -------- internal dispatch used by the endpoint modules -------- */

    fn endpoint_url(&self, path: &str) -> Result<Url, PdlError> {
        // A bare-authority base renders with a trailing slash; trim it so the
        // endpoint path never doubles up.
        let base = self.base.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// GET `base + path` with `params` as the query string and the API key
    /// appended as `api_key`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, params, timeout), err, fields(path = %path))
    )]
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
        timeout: Option<Duration>,
    ) -> Result<T, PdlError> {
        let mut url = self.endpoint_url(path)?;
        params.append_to_query(&mut url);
        url.query_pairs_mut().append_pair(API_KEY_PARAM, &self.api_key);

        let mut req = self.http.get(url);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        net::decode_json(req.send().await?).await
    }

    /// POST `base + path` with `body` as JSON and the API key in the
    /// `X-Api-Key` header.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, body, timeout), err, fields(path = %path))
    )]
    pub(crate) async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, PdlError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path)?;

        let mut req = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body);
        if let Some(t) = timeout {
            req = req.timeout(t);
        }

        net::decode_json(req.send().await?).await
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`PdlClient`].
#[derive(Default)]
pub struct PdlClientBuilder {
    api_key: Option<String>,
    version: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PdlClientBuilder {
    /// Set the API key. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API version segment (default `v5`). Ignored when a full base
    /// URL is given.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Override the full base URL (e.g. a mock server in tests). Wins over
    /// [`PdlClientBuilder::version`].
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`PdlError::MissingApiKey`] if no API key was set, or
    /// [`PdlError::Http`] if the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<PdlClient, PdlError> {
        let api_key = self.api_key.ok_or(PdlError::MissingApiKey)?;

        let base = match self.base_url {
            Some(url) => url,
            None => {
                let version = self.version.as_deref().unwrap_or(DEFAULT_VERSION);
                Url::parse(&format!("{DEFAULT_API_ROOT}/{version}"))?
            }
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PdlClient { http, api_key, base })
    }
}
