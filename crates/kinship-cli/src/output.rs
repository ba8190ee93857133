//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::{Person, PersonId};
use kinship_graph::{DataReport, Fragment, HouseView, LineageBridge, PeopleById};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the people visible in a scope.
    pub fn format_scope(&self, scope: &BTreeSet<PersonId>, people: &PeopleById<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = scope.iter().map(|id| person_json(id, people)).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if scope.is_empty() {
                    return Ok(self.colorize("No visible people.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "House", "Born"]);
                for id in scope {
                    builder.push_record(person_cells(id, people));
                }
                Ok(render(builder))
            }
            OutputFormat::Quiet => Ok(join_ids(scope.iter())),
        }
    }

    /// Format connected fragments.
    pub fn format_fragments(&self, fragments: &[Fragment]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = fragments.iter().enumerate().map(fragment_json).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => Ok(self.fragments_table(fragments)),
            OutputFormat::Quiet => Ok(fragments
                .iter()
                .map(|fragment| {
                    let ids: Vec<&str> = fragment.members.iter().map(PersonId::as_str).collect();
                    ids.join(" ")
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format lineage-gap bridges.
    pub fn format_bridges(&self, bridges: &[LineageBridge]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = bridges.iter().map(bridge_json).collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => Ok(self.bridges_table(bridges)),
            OutputFormat::Quiet => Ok(bridges
                .iter()
                .map(|bridge| format!("{} {}", bridge.descendant, bridge.ancestor))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the selected root.
    pub fn format_root(&self, root: Option<&PersonId>, people: &PeopleById<'_>) -> Result<String> {
        match (self.format, root) {
            (OutputFormat::Json, Some(id)) => Ok(serde_json::to_string_pretty(&person_json(id, people))?),
            (OutputFormat::Json, None) => Ok("null".to_string()),
            (OutputFormat::Quiet, Some(id)) => Ok(id.to_string()),
            (OutputFormat::Quiet, None) => Ok(String::new()),
            (OutputFormat::Table, Some(id)) => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "House", "Born"]);
                builder.push_record(person_cells(id, people));
                Ok(render(builder))
            }
            (OutputFormat::Table, None) => Ok(self.colorize("No visible people.", "yellow")),
        }
    }

    /// Format a complete house view.
    pub fn format_view(&self, view: &HouseView, people: &PeopleById<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "house": view.house.as_ref().map(|house| house.as_str()),
                    "root": view.root.as_ref().map(PersonId::as_str),
                    "scope": view.scope.iter().map(PersonId::as_str).collect::<Vec<_>>(),
                    "fragments": view.fragments.iter().enumerate().map(fragment_json).collect::<Vec<_>>(),
                    "bridges": view.bridges.iter().map(bridge_json).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(view.root.as_ref().map(PersonId::to_string).unwrap_or_default()),
            OutputFormat::Table => {
                let house = view
                    .house
                    .as_ref()
                    .map(|house| house.to_string())
                    .unwrap_or_else(|| "(all people)".to_string());
                let root = view
                    .root
                    .as_ref()
                    .map(|id| display_name(id, people))
                    .unwrap_or_else(|| "-".to_string());
                let header = format!(
                    "House {}: {} visible, {} fragment(s), root {}",
                    house,
                    view.visible_count(),
                    view.fragments.len(),
                    root
                );
                Ok([
                    self.colorize(&header, "cyan"),
                    self.fragments_table(&view.fragments),
                    self.bridges_table(&view.bridges),
                ]
                .join("\n"))
            }
        }
    }

    /// Format a diagnostics report.
    pub fn format_report(&self, report: &DataReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = report
                    .issues
                    .iter()
                    .map(|issue| json!({ "kind": issue.kind(), "message": issue.to_string() }))
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(report
                .issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if report.is_clean() {
                    return Ok(self.success("No data issues found"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Kind", "Issue"]);
                for issue in &report.issues {
                    builder.push_record([issue.kind().to_string(), issue.to_string()]);
                }
                Ok([
                    self.warning(&format!("{} data issue(s) found", report.len())),
                    render(builder),
                ]
                .join("\n"))
            }
        }
    }

    fn fragments_table(&self, fragments: &[Fragment]) -> String {
        if fragments.is_empty() {
            return self.colorize("No fragments.", "yellow");
        }
        let mut builder = Builder::default();
        builder.push_record(["#", "Root", "Born", "Members"]);
        for (position, fragment) in fragments.iter().enumerate() {
            let born = fragment
                .root_person()
                .map(|person| person.date_of_birth.to_string())
                .unwrap_or_default();
            builder.push_record([
                position.to_string(),
                fragment.root.to_string(),
                born,
                fragment.member_count.to_string(),
            ]);
        }
        render(builder)
    }

    fn bridges_table(&self, bridges: &[LineageBridge]) -> String {
        if bridges.is_empty() {
            return self.colorize("No lineage gaps.", "yellow");
        }
        let mut builder = Builder::default();
        builder.push_record(["Descendant", "Fragment", "Ancestor", "Fragment"]);
        for bridge in bridges {
            builder.push_record([
                bridge.descendant.to_string(),
                bridge.descendant_fragment.to_string(),
                bridge.ancestor.to_string(),
                bridge.ancestor_fragment.to_string(),
            ]);
        }
        render(builder)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a PersonId>) -> String {
    ids.map(PersonId::as_str).collect::<Vec<_>>().join("\n")
}

fn display_name(id: &PersonId, people: &PeopleById<'_>) -> String {
    people
        .get(id)
        .map(|person| person.display_name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn person_cells(id: &PersonId, people: &PeopleById<'_>) -> [String; 4] {
    match people.get(id) {
        Some(person) => [
            id.to_string(),
            person.name.clone().unwrap_or_default(),
            person.house_id.as_ref().map(ToString::to_string).unwrap_or_default(),
            person.date_of_birth.to_string(),
        ],
        // referenced by a relationship but never recorded
        None => [id.to_string(), "(no record)".to_string(), String::new(), String::new()],
    }
}

fn person_json(id: &PersonId, people: &PeopleById<'_>) -> Value {
    let person: Option<&Person> = people.get(id).copied();
    json!({
        "id": id.as_str(),
        "name": person.and_then(|p| p.name.as_deref()),
        "houseId": person.and_then(|p| p.house_id.as_ref()).map(|house| house.as_str()),
        "dateOfBirth": person.map(|p| p.date_of_birth.to_string()),
        "recorded": person.is_some(),
    })
}

fn fragment_json((position, fragment): (usize, &Fragment)) -> Value {
    json!({
        "index": position,
        "root": fragment.root.as_str(),
        "memberCount": fragment.member_count,
        "members": fragment.members.iter().map(PersonId::as_str).collect::<Vec<_>>(),
    })
}

fn bridge_json(bridge: &LineageBridge) -> Value {
    json!({
        "descendant": bridge.descendant.as_str(),
        "ancestor": bridge.ancestor.as_str(),
        "descendantFragment": bridge.descendant_fragment,
        "ancestorFragment": bridge.ancestor_fragment,
    })
}
