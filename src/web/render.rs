//! HTML rendering of a [`DashboardView`].
//!
//! Records are flattened to text cells here and handed to the Tera
//! template, which escapes every value on output.

use chrono::NaiveDateTime;
use serde::Serialize;
use tera::{Context, Tera};

use crate::db::models::{LotOccupancy, UserRecord, ViolationHistoryRecord, ViolationRecord};
use crate::version::VERSION;
use crate::web::section::{visibility_table, Section, Selection};
use crate::web::view_model::DashboardView;

const DASHBOARD_TEMPLATE: &str = "dashboard.html";
const ERROR_TEMPLATE: &str = "error.html";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A record that renders as one table body row.
pub trait TableRecord {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn timestamp(value: &Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

const FINE_HEADERS: &[&str] = &["Fine ID", "Car ID", "Timestamp", "Fine"];

impl TableRecord for UserRecord {
    const HEADERS: &'static [&'static str] = &[
        "User ID",
        "Name",
        "Email",
        "Car ID",
        "RFID Tag",
        "Building",
        "Parking In",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.user_id.to_string(),
            optional(&self.name),
            optional(&self.email),
            optional(&self.car_id),
            optional(&self.rfid_tag),
            optional(&self.building),
            optional(&self.parking_in),
        ]
    }
}

impl TableRecord for ViolationRecord {
    const HEADERS: &'static [&'static str] = FINE_HEADERS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.fine_id.to_string(),
            optional(&self.car_id),
            timestamp(&self.timestamp),
            optional(&self.fine),
        ]
    }
}

impl TableRecord for ViolationHistoryRecord {
    const HEADERS: &'static [&'static str] = FINE_HEADERS;

    fn cells(&self) -> Vec<String> {
        vec![
            self.fine_id.to_string(),
            optional(&self.car_id),
            timestamp(&self.timestamp),
            optional(&self.fine),
        ]
    }
}

#[derive(Serialize)]
struct MenuButton {
    key: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct TableSection {
    container_id: &'static str,
    container_class: &'static str,
    table_class: &'static str,
    title: &'static str,
    visible: bool,
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl TableSection {
    fn build<R: TableRecord>(section: Section, selection: Selection, records: &[R]) -> Self {
        let (container_class, table_class, title) = match section {
            Section::Students => ("Students-container", "Students", "Students Information"),
            Section::Violations => ("Violations-container", "Violations", "Violations"),
            Section::ViolationsHistory => (
                "ViolationsHistory-container",
                "ViolationsHistory",
                "Violations History",
            ),
        };
        Self {
            container_id: section.container_id(),
            container_class,
            table_class,
            title,
            visible: selection.is_visible(section),
            headers: R::HEADERS,
            rows: records.iter().map(R::cells).collect(),
        }
    }
}

#[derive(Serialize)]
struct LotLine {
    name: &'static str,
    count: i64,
}

impl From<&LotOccupancy> for LotLine {
    fn from(occupancy: &LotOccupancy) -> Self {
        Self {
            name: occupancy.lot.as_str(),
            count: occupancy.count,
        }
    }
}

#[derive(Serialize)]
struct DashboardPage {
    stylesheet_href: String,
    buttons: Vec<MenuButton>,
    view_all_key: &'static str,
    sections: Vec<TableSection>,
    lots: Vec<LotLine>,
    initial_selection: &'static str,
    visibility_json: String,
}

pub struct DashboardRenderer {
    tera: Tera,
    stylesheet_href: String,
}

impl DashboardRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // Names end in `.html`, so Tera autoescapes every expression.
        tera.add_raw_templates(vec![
            (
                DASHBOARD_TEMPLATE,
                include_str!("../../templates/dashboard.html"),
            ),
            (ERROR_TEMPLATE, include_str!("../../templates/error.html")),
        ])?;
        Ok(Self {
            tera,
            stylesheet_href: format!("/static/dashboard.css?v={VERSION}"),
        })
    }

    pub fn render(&self, view: &DashboardView) -> Result<String, tera::Error> {
        let selection = Selection::default();
        let page = DashboardPage {
            stylesheet_href: self.stylesheet_href.clone(),
            buttons: Section::ALL
                .into_iter()
                .map(|section| MenuButton {
                    key: section.key(),
                    label: section.button_label(),
                })
                .collect(),
            view_all_key: Selection::ALL_KEY,
            sections: vec![
                TableSection::build(Section::Students, selection, &view.users),
                TableSection::build(Section::Violations, selection, &view.violations),
                TableSection::build(
                    Section::ViolationsHistory,
                    selection,
                    &view.violation_history,
                ),
            ],
            lots: view.lot_occupancy.iter().map(LotLine::from).collect(),
            initial_selection: selection.key(),
            visibility_json: serde_json::to_string(&visibility_table())
                .map_err(|e| tera::Error::msg(e.to_string()))?,
        };
        let context = Context::from_serialize(&page)?;
        self.tera.render(DASHBOARD_TEMPLATE, &context)
    }

    pub fn render_error(&self, heading: &str, message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("stylesheet_href", &self.stylesheet_href);
        context.insert("heading", heading);
        context.insert("message", message);
        self.tera.render(ERROR_TEMPLATE, &context)
    }
}
