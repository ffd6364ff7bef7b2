//! detail overlay for the selected record

use std::fmt;

use crate::controller::SearchController;
use crate::data::Section;
use crate::util::{format_date, DETAIL_DATE_FMT};

/// Section toggle of the overlay. Opens on the abstract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOverlay {
    section: Section,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub inventor: String,
    pub date: String,
    pub section: Section,
    /// full text of the active section, never truncated
    pub content: String,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn show(&mut self, section: Section) {
        self.section = section;
    }

    /// `None` while nothing is selected, or the selection isn't among the
    /// displayed results.
    pub fn view(&self, controller: &SearchController) -> Option<DetailView> {
        let record = controller.selected_record()?;

        Some(DetailView {
            id: record.id.clone(),
            title: record.title.clone(),
            assignee: record.assignee.clone(),
            inventor: record.inventor.clone(),
            date: format_date(&record.application_date, DETAIL_DATE_FMT),
            section: self.section,
            content: record.section(self.section).to_owned(),
        })
    }

    /// close button or backdrop click
    pub fn close(&mut self, controller: &mut SearchController) {
        controller.close_overlay();
        self.section = Section::default();
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{} | {} | {}", self.assignee, self.inventor, self.date)?;
        writeln!(f)?;
        for s in Section::ALL.iter() {
            let marker = if *s == self.section { '*' } else { ' ' };
            write!(f, "{}{} ", marker, s.label())?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.section.label())?;
        writeln!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FixtureBackend;
    use crate::fixture::mock_patents;
    use crate::form::SearchForm;

    fn searched(q: &str) -> SearchController {
        let mut c = SearchController::default();
        c.search(&FixtureBackend::new(), SearchForm::new(q).submit().unwrap());
        c
    }

    #[test]
    fn nothing_selected_renders_nothing() {
        let c = searched("patent");
        assert_eq!(DetailOverlay::new().view(&c), None);
    }

    #[test]
    fn claims_section_is_full_text() {
        let mut c = searched("zzz-no-match");
        c.select("2");

        let mut overlay = DetailOverlay::new();
        assert_eq!(overlay.view(&c).unwrap().section, Section::Abstract);

        overlay.show(Section::Claims);
        let view = overlay.view(&c).unwrap();
        assert_eq!(view.content, mock_patents()[1].claims);
        assert_eq!(view.date, "22 January 2024");
    }

    #[test]
    fn close_clears_selection_and_resets_section() {
        let mut c = searched("quantum");
        c.select("3");
        let mut overlay = DetailOverlay::new();
        overlay.show(Section::Description);

        overlay.close(&mut c);
        assert_eq!(overlay.section(), Section::Abstract);
        assert_eq!(overlay.view(&c), None);
        assert_eq!(c.results().len(), 1);
    }
}
