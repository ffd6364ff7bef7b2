use serde::Serialize;
use snafu::ResultExt;
use std::io::Write;

use crate::data::PatentRecord;
use crate::error::{Error, WriteCsvSnafu, WriteJsonSnafu};
use crate::util::format_date;

/// Flat export row for a displayed result
///
/// Long text sections are left out; they belong to the detail view.
#[derive(Debug, Serialize)]
pub struct PatentOutput {
    id: String,
    title: String,
    assignee: String,
    inventor: String,
    application_date: String,
}

impl From<&PatentRecord> for PatentOutput {
    fn from(p: &PatentRecord) -> Self {
        PatentOutput {
            id: p.id.clone(),
            title: p.title.clone(),
            assignee: p.assignee.clone(),
            inventor: p.inventor.clone(),
            application_date: format_date(&p.application_date, "%Y-%m-%d"),
        }
    }
}

pub fn write_csv<W: Write>(records: &[PatentRecord], w: W) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(w);
    for p in records {
        wtr.serialize(PatentOutput::from(p)).context(WriteCsvSnafu)?;
    }
    wtr.flush().map_err(csv::Error::from).context(WriteCsvSnafu)
}

/// full records, in the same json shape the http backend returns
pub fn write_json<W: Write>(records: &[PatentRecord], w: W) -> Result<(), Error> {
    serde_json::to_writer_pretty(w, records).context(WriteJsonSnafu)
}
