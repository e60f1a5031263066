//! Centralized constants for default endpoints, auth placement, and UA.

/// Default UA identifying the crate.
pub(crate) const USER_AGENT: &str = concat!("pdl-rs/", env!("CARGO_PKG_VERSION"));

/// API root; the version segment is appended to form the default base.
pub(crate) const DEFAULT_API_ROOT: &str = "https://api.peopledatalabs.com";

/// API version segment used when the builder is given neither a version nor
/// a full base URL.
pub(crate) const DEFAULT_VERSION: &str = "v5";

/// Header carrying the API key on POST requests.
pub(crate) const API_KEY_HEADER: &str = "X-Api-Key";

/// Query parameter carrying the API key on GET requests.
pub(crate) const API_KEY_PARAM: &str = "api_key";
