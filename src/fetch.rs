use reqwest::blocking::Client;
use snafu::ResultExt;
use tracing::{debug, warn};

use crate::backend::SearchBackend;
use crate::data::{PatentRecord, SearchRequest};
use crate::error::Error;
use crate::error::{DecodeSnafu, FetchSnafu, StatusSnafu};

pub const SEARCH_PATH: &str = "/patent-search";

/// Search backend reached over HTTP.
///
/// `POST {base_url}/patent-search` with the request as json; a json array of
/// patent records comes back on success. No timeout beyond the client's
/// defaults, no retry.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

impl SearchBackend for HttpBackend {
    fn search(&self, req: &SearchRequest) -> Result<Vec<PatentRecord>, Error> {
        let url = self.endpoint();
        debug!(%url, query = req.query(), "posting search");

        let resp = self.client
            .post(&url)
            .json(req)
            .send()
            .context(FetchSnafu { url: url.clone() })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "search backend refused request");
            return StatusSnafu { status: status.as_u16(), url }.fail();
        }

        resp.json::<Vec<PatentRecord>>()
            .context(DecodeSnafu { url })
    }
}
