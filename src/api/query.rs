use crate::config::Endpoint;
use crate::error::ExplorerError;
use std::fmt;
use url::Url;

/// A query parameter value: either free text or an unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(u64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

/// Extra query parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.0.push((name.to_string(), value.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Build `base?module=..&action=..&<params>&apikey=..`.
///
/// Values are form-urlencoded, so anything containing `&`, `=` or spaces
/// survives intact. Query pairs already on the base URL are kept in front.
pub fn build_url(
    endpoint: &Endpoint,
    module: &str,
    action: &str,
    params: &QueryParams,
) -> Result<Url, ExplorerError> {
    if module.trim().is_empty() || action.trim().is_empty() {
        return Err(ExplorerError::Configuration(format!(
            "module and action must be non-empty (got {module:?}/{action:?})"
        )));
    }

    let mut url = endpoint.base_url().clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("module", module);
        query.append_pair("action", action);
        for (name, value) in params.iter() {
            query.append_pair(name, &value.to_string());
        }
        query.append_pair("apikey", endpoint.api_key());
    }

    Ok(url)
}
