//! Result list rendering.
//!
//! Everything here is a function of the controller's state plus the small
//! per-card UI toggles kept in `ResultCards`.

use std::collections::HashMap;
use std::fmt;

use crate::controller::{SearchController, ViewState};
use crate::data::{PatentRecord, Section};
use crate::util::{format_date, truncate_chars, CARD_DATE_FMT};

/// characters of a section shown on a collapsed card
pub const PREVIEW_CHARS: usize = 300;
/// placeholder cards while a search is in flight
pub const SKELETON_CARDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// nothing searched yet
    StartSearch,
    NoResults,
}

impl EmptyState {
    pub fn heading(self) -> &'static str {
        match self {
            EmptyState::StartSearch => "Start your search",
            EmptyState::NoResults => "No patents found",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EmptyState::StartSearch => "Enter keywords, title, abstract, or claims above to discover patents from global databases.",
            EmptyState::NoResults => "Try adjusting your query or filters to find what you're looking for.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsArea<'a> {
    Loading { placeholders: usize },
    List { heading: String, records: &'a [PatentRecord] },
    Empty(EmptyState),
}

pub fn results_area(controller: &SearchController) -> ResultsArea<'_> {
    match controller.state() {
        ViewState::Loading => ResultsArea::Loading { placeholders: SKELETON_CARDS },
        ViewState::Results(list) if !list.is_empty() => ResultsArea::List {
            heading: results_heading(list.len()),
            records: list,
        },
        ViewState::Idle | ViewState::Results(_) | ViewState::Failed(_) => {
            if controller.has_searched() {
                ResultsArea::Empty(EmptyState::NoResults)
            } else {
                ResultsArea::Empty(EmptyState::StartSearch)
            }
        },
    }
}

pub fn results_heading(n: usize) -> String {
    format!("{} patent{} found", n, if n == 1 { "" } else { "s" })
}

/// banner shown above the results area after a failed search
pub fn error_banner(controller: &SearchController) -> Option<&str> {
    controller.error()
}

/// Per-card toggles. Defaults to the abstract tab, collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    tab: Section,
    expanded: bool,
}

impl CardState {
    pub fn tab(&self) -> Section {
        self.tab
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// switching tabs always collapses the card
    pub fn set_tab(&mut self, tab: Section) {
        self.tab = tab;
        self.expanded = false;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub inventor: String,
    pub date: String,
    pub tab: Section,
    pub content: String,
    /// section is longer than the preview
    pub can_expand: bool,
    pub expanded: bool,
}

impl CardView {
    pub fn render(record: &PatentRecord, state: &CardState) -> Self {
        let full = record.section(state.tab);
        let (preview, can_expand) = truncate_chars(full, PREVIEW_CHARS);

        let content = if state.expanded || !can_expand {
            full.to_owned()
        } else {
            format!("{}...", preview)
        };

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            assignee: record.assignee.clone(),
            inventor: record.inventor.clone(),
            date: format_date(&record.application_date, CARD_DATE_FMT),
            tab: state.tab,
            content,
            can_expand,
            expanded: state.expanded,
        }
    }

    pub fn toggle_label(&self) -> Option<&'static str> {
        match (self.can_expand, self.expanded) {
            (false, _) => None,
            (true, false) => Some("Show more"),
            (true, true) => Some("Show less"),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.title)?;
        writeln!(f, "    {} | {} | {}", self.assignee, self.inventor, self.date)?;

        let tabs: Vec<String> = Section::ALL
            .iter()
            .map(|s| if *s == self.tab { format!("[{}]", s) } else { s.to_string() })
            .collect();
        writeln!(f, "    {}", tabs.join("  "))?;
        writeln!(f, "    {}", self.content)?;

        if let Some(label) = self.toggle_label() {
            writeln!(f, "    ({})", label)?;
        }
        Ok(())
    }
}

/// Card toggles for the currently displayed list.
///
/// Toggles belong to one result list; they're dropped as soon as the
/// controller starts another search.
#[derive(Debug, Default)]
pub struct ResultCards {
    states: HashMap<String, CardState>,
    seq: u64,
}

impl ResultCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// forget toggles from an earlier search
    pub fn sync(&mut self, controller: &SearchController) {
        if controller.latest_seq() != self.seq {
            self.states.clear();
            self.seq = controller.latest_seq();
        }
    }

    pub fn state(&self, id: &str) -> CardState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn set_tab(&mut self, id: &str, tab: Section) {
        self.states.entry(id.to_owned()).or_default().set_tab(tab);
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        self.states.entry(id.to_owned()).or_default().toggle_expanded();
    }

    /// title click: open the record in the detail overlay
    pub fn activate(&self, controller: &mut SearchController, id: &str) {
        controller.select(id);
    }

    pub fn cards(&self, records: &[PatentRecord]) -> Vec<CardView> {
        records
            .iter()
            .map(|r| CardView::render(r, &self.state(&r.id)))
            .collect()
    }
}

/// Terminal rendering of the error banner and the results area.
pub fn render_text(controller: &SearchController, cards: &ResultCards) -> String {
    let mut out = String::new();

    if let Some(msg) = error_banner(controller) {
        out.push_str(&format!("! {}\n\n", msg));
    }

    match results_area(controller) {
        ResultsArea::Loading { placeholders } => {
            for _ in 0..placeholders {
                out.push_str("[ ........ ]\n");
            }
        },
        ResultsArea::List { heading, records } => {
            out.push_str(&heading);
            out.push_str("\n\n");
            for card in cards.cards(records) {
                out.push_str(&card.to_string());
                out.push('\n');
            }
        },
        ResultsArea::Empty(empty) => {
            out.push_str(empty.heading());
            out.push('\n');
            out.push_str(empty.message());
            out.push('\n');
        },
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FixtureBackend;
    use crate::controller::EmptyResults;
    use crate::form::SearchForm;

    fn long_record() -> PatentRecord {
        PatentRecord {
            id: "L".into(),
            title: "Long".into(),
            abstract_text: "a".repeat(350),
            claims: "short claims".into(),
            description: "d".repeat(300),
            assignee: "Acme".into(),
            inventor: "Jo".into(),
            application_date: "2024-03-15".into(),
        }
    }

    #[test]
    fn area_follows_controller_state() {
        let mut c = SearchController::new(EmptyResults::ShowEmpty);
        assert_eq!(results_area(&c), ResultsArea::Empty(EmptyState::StartSearch));

        c.begin(SearchForm::new("x").submit().unwrap());
        assert_eq!(results_area(&c), ResultsArea::Loading { placeholders: SKELETON_CARDS });

        c.search(&FixtureBackend::new(), SearchForm::new("zzz").submit().unwrap());
        assert_eq!(results_area(&c), ResultsArea::Empty(EmptyState::NoResults));

        c.search(&FixtureBackend::new(), SearchForm::new("quantum").submit().unwrap());
        match results_area(&c) {
            ResultsArea::List { heading, records } => {
                assert_eq!(heading, "1 patent found");
                assert_eq!(records.len(), 1);
            },
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn heading_pluralizes() {
        assert_eq!(results_heading(3), "3 patents found");
        assert_eq!(results_heading(1), "1 patent found");
    }

    #[test]
    fn collapsed_card_truncates_at_300_chars() {
        let rec = long_record();
        let card = CardView::render(&rec, &CardState::default());

        assert_eq!(card.tab, Section::Abstract);
        assert_eq!(card.content, format!("{}...", "a".repeat(300)));
        assert_eq!(card.toggle_label(), Some("Show more"));
        assert_eq!(card.date, "15 Mar 2024");
    }

    #[test]
    fn exactly_300_chars_is_not_truncated() {
        let rec = long_record();
        let mut state = CardState::default();
        state.set_tab(Section::Description);
        let card = CardView::render(&rec, &state);

        assert_eq!(card.content.len(), 300);
        assert!(!card.can_expand);
        assert_eq!(card.toggle_label(), None);
    }

    #[test]
    fn expanding_shows_everything_and_tab_switch_collapses() {
        let rec = long_record();
        let mut state = CardState::default();
        state.toggle_expanded();

        let card = CardView::render(&rec, &state);
        assert_eq!(card.content, rec.abstract_text);
        assert_eq!(card.toggle_label(), Some("Show less"));

        state.set_tab(Section::Claims);
        assert!(!state.is_expanded());
        assert_eq!(CardView::render(&rec, &state).content, "short claims");
    }

    #[test]
    fn toggles_reset_on_next_search() {
        let mut c = SearchController::default();
        let mut cards = ResultCards::new();

        c.search(&FixtureBackend::new(), SearchForm::new("quantum").submit().unwrap());
        cards.sync(&c);
        cards.set_tab("3", Section::Claims);
        assert_eq!(cards.state("3").tab(), Section::Claims);

        c.search(&FixtureBackend::new(), SearchForm::new("quantum").submit().unwrap());
        cards.sync(&c);
        assert_eq!(cards.state("3"), CardState::default());
    }

    #[test]
    fn title_click_selects_record() {
        let mut c = SearchController::default();
        c.search(&FixtureBackend::new(), SearchForm::new("patent").submit().unwrap());
        ResultCards::new().activate(&mut c, "2");
        assert_eq!(c.selected_record().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn failed_search_renders_banner_and_no_results_copy() {
        let mut c = SearchController::default();
        let t = c.begin(SearchForm::new("x").submit().unwrap());
        c.resolve(t.seq, Err(crate::Error::Status { status: 500, url: "u".into() }));

        let text = render_text(&c, &ResultCards::new());
        assert!(text.starts_with("! Failed to fetch patents. Please try again."));
        assert!(text.contains("No patents found"));
    }
}
