//! data struct definitions for search requests and patent records

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One searchable patent document, as returned by a search backend.
///
/// Identity is `id`; records are never modified after they're received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub claims: String,
    pub description: String,
    pub assignee: String,
    pub inventor: String,
    /// ISO date, e.g. "2024-03-15"
    pub application_date: String,
}

impl PatentRecord {
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Abstract => &self.abstract_text,
            Section::Claims => &self.claims,
            Section::Description => &self.description,
        }
    }
}

/// Optional structured filters.
///
/// On the wire every key is always present; an unset filter goes out as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(serialize_with = "ser_blank", deserialize_with = "de_blank", default)]
    pub assignee: Option<String>,
    #[serde(serialize_with = "ser_blank", deserialize_with = "de_blank", default)]
    pub inventor: Option<String>,
    #[serde(serialize_with = "ser_blank", deserialize_with = "de_blank", default)]
    pub from_date: Option<String>,
    #[serde(serialize_with = "ser_blank", deserialize_with = "de_blank", default)]
    pub to_date: Option<String>,
}

/// A validated search. Only built by `SearchForm::submit`, so `query` is
/// never empty. It is serialized for the wire but never read back in:
///
/// ```compile_fail
/// let _: patent_search::SearchRequest =
///     serde_json::from_str(r#"{"query":"","filters":{}}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub(crate) query: String,
    pub(crate) filters: SearchFilters,
}

impl SearchRequest {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }
}

/// The three text sections of a patent shown behind tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Abstract,
    Claims,
    Description,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Abstract, Section::Claims, Section::Description];

    pub fn label(self) -> &'static str {
        match self {
            Section::Abstract => "Abstract",
            Section::Claims => "Claims",
            Section::Description => "Description",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Abstract
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abstract" => Ok(Section::Abstract),
            "claims" => Ok(Section::Claims),
            "description" => Ok(Section::Description),
            other => Err(format!("unknown section {:?}, expected abstract, claims or description", other)),
        }
    }
}

fn ser_blank<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(value.as_deref().unwrap_or(""))
}

fn de_blank<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value: Option<String> = Option::deserialize(d)?;
    Ok(value.filter(|v| !v.is_empty()))
}
