//! search form draft and its validation
//!
//! The form never talks to the controller itself; `submit` only produces a
//! `SearchRequest` that the caller hands over, once per submit.

use snafu::ensure;

use crate::data::{SearchFilters, SearchRequest};
use crate::error::{Error, ValidationSnafu};

pub const EMPTY_QUERY_MSG: &str = "Please enter a search query";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub assignee: String,
    pub inventor: String,
    pub from_date: String,
    pub to_date: String,
}

impl SearchForm {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// only the query is checked; the filters are free text.
    pub fn validate(&self) -> Result<(), Error> {
        ensure!(
            !self.query.is_empty(),
            ValidationSnafu { field: "query", msg: EMPTY_QUERY_MSG }
        );
        Ok(())
    }

    /// inline message to show under the query field, if any
    pub fn field_error(&self) -> Option<&'static str> {
        match self.validate() {
            Ok(()) => None,
            Err(_) => Some(EMPTY_QUERY_MSG),
        }
    }

    pub fn submit(&self) -> Result<SearchRequest, Error> {
        self.validate()?;

        Ok(SearchRequest {
            query: self.query.clone(),
            filters: SearchFilters {
                assignee: non_empty(&self.assignee),
                inventor: non_empty(&self.inventor),
                from_date: non_empty(&self.from_date),
                to_date: non_empty(&self.to_date),
            },
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// only "" means unset; anything else goes out as typed
fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}
