use snafu::{OptionExt, ResultExt, Snafu};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use patent_search::overlay::DetailOverlay;
use patent_search::present::{render_text, ResultCards};
use patent_search::serialize::{write_csv, write_json};
use patent_search::{
    Config, EmptyResults, FixtureBackend, HttpBackend, SearchBackend, SearchController, SearchForm, Section,
};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("patent_search=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    match run(opt) {
        Ok(_) => (),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        },
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "patent-search", about = "Search patents and inspect the results")]
struct Opt {
    /// free text, matched against title, abstract and claims
    #[structopt(default_value = "")]
    query: String,

    #[structopt(long)]
    assignee: Option<String>,
    #[structopt(long)]
    inventor: Option<String>,
    /// ISO date, e.g. 2024-01-31
    #[structopt(long)]
    from_date: Option<String>,
    #[structopt(long)]
    to_date: Option<String>,

    /// search the http backend instead of the built-in fixture
    #[structopt(long)]
    http: bool,
    /// overrides PATENT_SEARCH_API_URL
    #[structopt(long)]
    base_url: Option<String>,
    /// fixture latency in milliseconds, overrides PATENT_SEARCH_FIXTURE_DELAY_MS
    #[structopt(long)]
    delay_ms: Option<u64>,
    /// show an empty list instead of every fixture record when nothing matches
    #[structopt(long)]
    show_empty: bool,

    /// text, csv or json
    #[structopt(long, default_value = "text")]
    format: Format,
    /// tab shown on every result card
    #[structopt(long, default_value = "abstract")]
    tab: Section,
    /// show full card text instead of a preview
    #[structopt(long)]
    expand: bool,

    /// open the detail view for this result id
    #[structopt(long)]
    details: Option<String>,
    /// section shown in the detail view
    #[structopt(long, default_value = "abstract")]
    section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Csv,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Format::Text),
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format {:?}, expected text, csv or json", other)),
        }
    }
}

/// flag combinations structopt can't rule out on its own
fn check_opts(opt: &Opt) -> Result<(), Error> {
    // the detail view is plain text; it would corrupt a csv/json stream
    if opt.details.is_some() && opt.format != Format::Text {
        return DetailsNeedTextSnafu.fail();
    }
    Ok(())
}

fn run(opt: Opt) -> Result<(), Error> {
    check_opts(&opt)?;

    let mut config = Config::from_env().context(LoadConfigSnafu)?;
    if let Some(url) = opt.base_url.clone() {
        config.base_url = url;
    }
    if let Some(ms) = opt.delay_ms {
        config.fixture_delay = Duration::from_millis(ms);
    }
    if opt.show_empty {
        config.empty_results = EmptyResults::ShowEmpty;
    }

    let form = SearchForm {
        query: opt.query.clone(),
        assignee: opt.assignee.clone().unwrap_or_default(),
        inventor: opt.inventor.clone().unwrap_or_default(),
        from_date: opt.from_date.clone().unwrap_or_default(),
        to_date: opt.to_date.clone().unwrap_or_default(),
    };
    // a rejected form never reaches the backend
    let request = form.submit().context(InvalidSnafu)?;

    let backend: Box<dyn SearchBackend> = if opt.http {
        info!(base_url = %config.base_url, "using http backend");
        Box::new(HttpBackend::new(&config.base_url))
    } else {
        Box::new(FixtureBackend::with_delay(config.fixture_delay))
    };

    let mut controller = SearchController::with_config(&config);
    controller.search(&backend, request);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match opt.format {
        Format::Text => {
            let mut cards = ResultCards::new();
            cards.sync(&controller);
            let ids: Vec<String> = controller.results().iter().map(|p| p.id.clone()).collect();
            for id in &ids {
                cards.set_tab(id, opt.tab);
                if opt.expand {
                    cards.toggle_expanded(id);
                }
            }
            write!(out, "{}", render_text(&controller, &cards)).context(StdoutSnafu)?;
        },
        Format::Csv => write_csv(controller.results(), &mut out).context(OutputSnafu)?,
        Format::Json => write_json(controller.results(), &mut out).context(OutputSnafu)?,
    }

    if let Some(id) = opt.details {
        controller.select(id.as_str());
        let mut overlay = DetailOverlay::new();
        overlay.show(opt.section);

        let view = overlay.view(&controller).context(NoSuchResultSnafu { id })?;
        writeln!(out, "\n{}", view).context(StdoutSnafu)?;
        overlay.close(&mut controller);
    }

    if let Some(msg) = controller.error() {
        return SearchFailedSnafu { msg }.fail();
    }

    Ok(())
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("Config Error: {}", source))]
    LoadConfig { source: patent_search::Error },
    #[snafu(display("{}", source))]
    Invalid { source: patent_search::Error },
    #[snafu(display("Output Error: {}", source))]
    Output { source: patent_search::Error },
    #[snafu(display("Output Error: {}", source))]
    Stdout { source: std::io::Error },
    #[snafu(display("No displayed result with id {}", id))]
    NoSuchResult { id: String },
    #[snafu(display("--details only works with --format text"))]
    DetailsNeedText,
    #[snafu(display("{}", msg))]
    SearchFailed { msg: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(args: &[&str]) -> Opt {
        Opt::from_iter(std::iter::once("patent-search").chain(args.iter().copied()))
    }

    #[test]
    fn details_rejected_with_machine_formats() {
        for format in &["csv", "json"] {
            let err = check_opts(&opt(&["quantum", "--format", *format, "--details", "3"])).unwrap_err();
            assert!(matches!(err, Error::DetailsNeedText));
        }
    }

    #[test]
    fn details_allowed_with_text() {
        assert!(check_opts(&opt(&["quantum", "--details", "3"])).is_ok());
        assert!(check_opts(&opt(&["quantum", "--format", "csv"])).is_ok());
    }
}
