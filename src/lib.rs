pub mod account;
pub mod backend;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod fetch;
pub mod fixture;
pub mod form;
pub mod overlay;
pub mod present;
pub mod serialize;
pub mod util;

pub use crate::backend::{FixtureBackend, SearchBackend};
pub use crate::config::Config;
pub use crate::controller::{EmptyResults, Resolution, SearchController, Selection, ViewState};
pub use crate::data::{PatentRecord, SearchFilters, SearchRequest, Section};
pub use crate::error::Error;
pub use crate::fetch::HttpBackend;
pub use crate::form::SearchForm;
