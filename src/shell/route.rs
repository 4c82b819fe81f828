use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::DecodeError;

/// Query parameter that carries the encoded entry to the detail screen.
pub const DATA_PARAM: &str = "data";

/// Query parameters as received by a screen: values are still escaped.
pub type NavigationParams = BTreeMap<String, String>;

/// The two pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Catalog,
    Detail,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Catalog => "/pages/index",
            Route::Detail => "/pages/detail",
        }
    }

    /// Resolves a page path. `/pages/logs` is the detail page's legacy path.
    pub fn parse(path: &str) -> Result<Self, DecodeError> {
        match path.trim_end_matches('/') {
            "/pages/index" | "" => Ok(Route::Catalog),
            "/pages/detail" | "/pages/logs" => Ok(Route::Detail),
            other => Err(DecodeError::Route(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A route plus its parameters, i.e. the `path?key=value` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub route: Route,
    pub params: NavigationParams,
}

impl NavigationRequest {
    pub fn new(route: Route, params: NavigationParams) -> Self {
        Self { route, params }
    }

    /// Renders `path?key=value&...`. Values are written as-is, so they must
    /// already be escaped.
    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            return self.route.path().to_string();
        }

        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.route.path(), query)
    }

    /// Splits a navigation URL into route and still-escaped parameters.
    ///
    /// A key without `=` gets an empty value; repeated keys keep the last.
    pub fn parse(url: &str) -> Result<Self, DecodeError> {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let route = Route::parse(path)?;

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_string(), value.to_string())
            })
            .collect();

        Ok(Self { route, params })
    }
}
