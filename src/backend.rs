//! search backends: the trait the controller talks to, and the fixture
//! implementation used for demos and tests.
//!
//! The HTTP implementation lives in `fetch`.

use std::time::Duration;
use tracing::debug;

use crate::data::{PatentRecord, SearchRequest};
use crate::error::Error;
use crate::fixture::mock_patents;
use crate::util::QueryMatcher;

pub trait SearchBackend {
    /// Runs one search. Errors are transport failures; an empty list is a
    /// successful search with no matches.
    fn search(&self, req: &SearchRequest) -> Result<Vec<PatentRecord>, Error>;
}

impl<T: SearchBackend + ?Sized> SearchBackend for &T {
    fn search(&self, req: &SearchRequest) -> Result<Vec<PatentRecord>, Error> {
        (**self).search(req)
    }
}

impl<T: SearchBackend + ?Sized> SearchBackend for Box<T> {
    fn search(&self, req: &SearchRequest) -> Result<Vec<PatentRecord>, Error> {
        (**self).search(req)
    }
}

/// Filters the static fixture by substring match.
///
/// Filters in the request are accepted but not applied.
#[derive(Debug, Clone, Default)]
pub struct FixtureBackend {
    delay: Duration,
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// artificial latency before answering, to mimic a network round trip
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SearchBackend for FixtureBackend {
    fn search(&self, req: &SearchRequest) -> Result<Vec<PatentRecord>, Error> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        Ok(filter_fixture(req.query()))
    }
}

pub fn filter_fixture(query: &str) -> Vec<PatentRecord> {
    let matcher = QueryMatcher::new(query);
    let hits: Vec<PatentRecord> = mock_patents()
        .iter()
        .filter(|p| matcher.is_match(p))
        .cloned()
        .collect();

    debug!(query, hits = hits.len(), "fixture search");
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SearchForm;

    fn ids(list: &[PatentRecord]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn machine_learning_hits_title_and_abstract() {
        // record 3 mentions "classical machine learning" in its abstract
        let req = SearchForm::new("machine learning").submit().unwrap();
        let hits = FixtureBackend::new().search(&req).unwrap();
        assert_eq!(ids(&hits), vec!["1", "3"]);
    }

    #[test]
    fn claims_only_match_counts() {
        let hits = filter_fixture("qubit representations");
        assert_eq!(ids(&hits), vec!["3"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let req = SearchForm::new("zzz-no-match").submit().unwrap();
        assert!(FixtureBackend::new().search(&req).unwrap().is_empty());
    }

    #[test]
    fn filters_are_ignored() {
        let mut form = SearchForm::new("patent");
        form.assignee = "Nobody Ltd".into();
        form.from_date = "2030-01-01".into();
        let hits = FixtureBackend::new().search(&form.submit().unwrap()).unwrap();
        assert_eq!(ids(&hits), vec!["2"]);
    }

    #[test]
    fn boxed_backend_delegates() {
        let backend: Box<dyn SearchBackend> = Box::new(FixtureBackend::new());
        let req = SearchForm::new("quantum").submit().unwrap();
        assert_eq!(ids(&backend.search(&req).unwrap()), vec!["3"]);
    }
}
