// Filter state held by a list view

use std::collections::BTreeMap;

/// Free-text query plus exact-match filters for one list view
///
/// An exact entry with an empty value places no restriction on its field,
/// mirroring an "All statuses" style select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against the search fields
    pub query: String,
    /// Field name -> required value (case-sensitive equality)
    pub exact: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder: add an exact filter
    pub fn with_exact(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.exact.insert(field.into(), value.into());
        self
    }

    /// Exact filters that actually restrict results
    pub fn active_exact(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exact
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// True when the query or any exact filter is set
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.active_exact().next().is_some()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.exact.clear();
    }
}

/// Parse a `field=value` pair as given on the command line
pub fn parse_exact(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid filter '{}': expected field=value", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("invalid filter '{}': field name is empty", s));
    }
    Ok((field.to_string(), value.to_string()))
}
