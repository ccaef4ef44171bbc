//! Which dashboard sections are shown.
//!
//! The page has three sections and one selection at a time. Choosing a
//! section shows only that section, "View All" shows all three. The
//! browser script does not decide anything itself; it looks up
//! [`visibility_table`] rendered into the page.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Students,
    Violations,
    ViolationsHistory,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Students,
        Section::Violations,
        Section::ViolationsHistory,
    ];

    /// Value carried by the section's menu button.
    pub fn key(self) -> &'static str {
        match self {
            Section::Students => "students",
            Section::Violations => "violations",
            Section::ViolationsHistory => "violations-history",
        }
    }

    /// DOM id of the section's container.
    pub fn container_id(self) -> &'static str {
        match self {
            Section::Students => "students-section",
            Section::Violations => "violations-section",
            Section::ViolationsHistory => "violations-history-section",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Section::Students => "Students",
            Section::Violations => "Violations",
            Section::ViolationsHistory => "Violations History",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    Only(Section),
    #[default]
    All,
}

/// A click on one of the menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Show(Section),
    ViewAll,
}

impl Selection {
    pub const ALL_KEY: &'static str = "all";

    /// Every selection. Previous state never matters, so this is the whole
    /// state space.
    pub fn all_states() -> [Selection; 4] {
        [
            Selection::Only(Section::Students),
            Selection::Only(Section::Violations),
            Selection::Only(Section::ViolationsHistory),
            Selection::All,
        ]
    }

    pub fn after(self, control: Control) -> Selection {
        match control {
            Control::Show(section) => Selection::Only(section),
            Control::ViewAll => Selection::All,
        }
    }

    pub fn is_visible(self, section: Section) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(active) => active == section,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Selection::All => Self::ALL_KEY,
            Selection::Only(section) => section.key(),
        }
    }
}

/// Selection key → container id → visible.
pub fn visibility_table() -> BTreeMap<&'static str, BTreeMap<&'static str, bool>> {
    Selection::all_states()
        .into_iter()
        .map(|selection| {
            let sections = Section::ALL
                .into_iter()
                .map(|section| (section.container_id(), selection.is_visible(section)))
                .collect();
            (selection.key(), sections)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(selection: Selection) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| selection.is_visible(*s))
            .collect()
    }

    #[test]
    fn test_initial_selection_shows_everything() {
        assert_eq!(Selection::default(), Selection::All);
        assert_eq!(visible(Selection::default()), Section::ALL.to_vec());
    }

    #[test]
    fn test_show_then_view_all() {
        let state = Selection::default().after(Control::Show(Section::Violations));
        assert_eq!(visible(state), vec![Section::Violations]);

        let state = state.after(Control::ViewAll);
        assert_eq!(visible(state), Section::ALL.to_vec());
    }

    #[test]
    fn test_show_replaces_previous_section() {
        let state = Selection::All
            .after(Control::Show(Section::Students))
            .after(Control::Show(Section::ViolationsHistory));
        assert_eq!(visible(state), vec![Section::ViolationsHistory]);
    }

    #[test]
    fn test_visibility_table_matches_model() {
        let table = visibility_table();
        assert_eq!(table.len(), 4);
        for selection in Selection::all_states() {
            let row = &table[selection.key()];
            for section in Section::ALL {
                assert_eq!(row[section.container_id()], selection.is_visible(section));
            }
        }
        assert!(table[Selection::ALL_KEY].values().all(|v| *v));
    }
}
