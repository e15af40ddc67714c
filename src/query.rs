// In-memory query engine: free-text search plus exact filters

use crate::filter::FilterState;
use crate::record::Record;
use tracing::debug;

/// Matches records against a [`FilterState`]
///
/// `search_fields` are the fields the free-text query looks at; a record
/// matches the query if any of them contains it, ignoring case.
/// `filter_fields` are the fields exact filters may restrict; exact entries
/// naming any other field are ignored.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    search_fields: Vec<String>,
    filter_fields: Vec<String>,
}

impl QueryEngine {
    pub fn new<S, F>(search_fields: S, filter_fields: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            filter_fields: filter_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    pub fn filter_fields(&self) -> &[String] {
        &self.filter_fields
    }

    /// Return the matching records, in input order
    pub fn filter<'a, R, I>(&self, records: I, state: &FilterState) -> Vec<&'a R>
    where
        R: Record + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let needle = state.query.to_lowercase();
        let result: Vec<&'a R> = records
            .into_iter()
            .filter(|record| self.matches_query(*record, &needle) && self.matches_exact(*record, state))
            .collect();

        debug!(
            collection = R::collection_name(),
            query = %state.query,
            matched = result.len(),
            "filter: done"
        );
        result
    }

    /// Check a single record
    pub fn matches<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        self.matches_query(record, &state.query.to_lowercase()) && self.matches_exact(record, state)
    }

    /// `needle` must already be lowercased
    fn matches_query<R: Record>(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let fields = record.fields();
        self.search_fields.iter().any(|name| {
            fields
                .get(name)
                .is_some_and(|value| value.to_string().to_lowercase().contains(needle))
        })
    }

    fn matches_exact<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        let mut active = state
            .active_exact()
            .filter(|(field, _)| self.filter_fields.iter().any(|f| f.as_str() == *field))
            .peekable();

        if active.peek().is_none() {
            return true;
        }

        let fields = record.fields();
        active.all(|(field, wanted)| fields.get(field).is_some_and(|value| value.to_string() == wanted))
    }
}
