use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Form input rejected before any request is issued.
    #[snafu(display("{}", msg))]
    Validation { field: &'static str, msg: String },

    #[snafu(display("Error sending search request to {}: {}", url, source))]
    Fetch { source: reqwest::Error, url: String },
    #[snafu(display("Search backend at {} answered with status {}", url, status))]
    Status { status: u16, url: String },
    #[snafu(display("Error decoding search response from {}: {}", url, source))]
    Decode { source: reqwest::Error, url: String },

    #[snafu(display("Invalid value for {}: {}", var, msg))]
    Config { var: &'static str, msg: String },

    #[snafu(display("Error writing csv output: {}", source))]
    WriteCsv { source: csv::Error },
    #[snafu(display("Error writing json output: {}", source))]
    WriteJson { source: serde_json::Error },
}

impl Error {
    /// true for every failure of the transport call to the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Status { .. } | Error::Decode { .. })
    }

    /// field name and inline message, if this is a form validation error.
    pub fn field_message(&self) -> Option<(&'static str, &str)> {
        match self {
            Error::Validation { field, msg } => Some((*field, msg.as_str())),
            _ => None,
        }
    }
}
