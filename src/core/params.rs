use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

/// A string-keyed request-parameter map.
///
/// Every endpoint operation takes its caller-supplied parameters as a
/// `Params` and merges them over a fixed per-operation default map with
/// [`Params::merged_over`]: defaults are laid down first, caller entries are
/// applied afterward, and the caller wins on any key collision.
///
/// Values are [`serde_json::Value`], so scalars, arrays, and nested objects
/// (e.g. an Elasticsearch query) all fit in the same map.
///
/// # Example
///
/// ```
/// use pdl_rs::Params;
///
/// let params = Params::new().set("website", "peopledatalabs.com").set("pretty", true);
/// assert_eq!(params.get("pretty"), Some(&true.into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, consuming and returning `self` for chaining.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a parameter in place, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a parameter, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the entries of the map.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Merges `self` over `defaults`: every default entry is kept unless
    /// `self` carries the same key, in which case the caller's value wins.
    #[must_use]
    pub fn merged_over(self, defaults: Params) -> Params {
        let mut out = defaults.0;
        for (k, v) in self.0 {
            out.insert(k, v);
        }
        Params(out)
    }

    /// Appends the parameters to a URL's query string.
    ///
    /// Strings go verbatim; numbers and booleans use their JSON form; `null`
    /// entries are skipped; arrays and objects are sent as compact JSON text.
    pub(crate) fn append_to_query(&self, url: &mut Url) {
        let mut qp = url.query_pairs_mut();
        for (k, v) in &self.0 {
            match v {
                Value::Null => {}
                Value::String(s) => {
                    qp.append_pair(k, s);
                }
                other => {
                    qp.append_pair(k, &other.to_string());
                }
            }
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map)
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Params(iter.into_iter().collect())
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = <Map<String, Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
