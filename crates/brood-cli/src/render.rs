//! Rendering of results for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use brood_model::{CanonicalIdentifier, DecisionPolicy, DecisionResult, LineageRecord, SetLabel};

/// One row of `brood normalize` output.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NormalizedRow {
    pub input: String,
    pub core: Option<String>,
    pub full_id: Option<String>,
    pub has_date: bool,
    pub error: Option<String>,
}

/// Plain-text summary of a coding result, one line per fact.
pub fn render_plain(result: &DecisionResult, mother: Option<&LineageRecord>) -> String {
    let mut lines = vec![
        format!("Mother: {} (core {})", result.mother_id, result.mother),
        format!("Suggested child: {}", result.suggested_full_id()),
        format!("Discard: {}", yes_no(result.discard())),
    ];
    if let Some(record) = mother {
        lines.push(format!(
            "Assignee: {}",
            record.assigned_person.as_deref().unwrap_or("unknown")
        ));
    }
    for reason in &result.decision.reasons {
        lines.push(format!("Reason: {reason}"));
    }
    for note in &result.decision.notes {
        lines.push(format!("Note: {note}"));
    }
    for warning in &result.decision.warnings {
        lines.push(format!("Warning: {warning}"));
    }
    lines.push(format!(
        "Existing children: {}",
        join_ids(&result.existing_children)
    ));
    lines.join("\n")
}

/// Table view of a coding result.
pub fn render_table(result: &DecisionResult, mother: Option<&LineageRecord>) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);

    let assignee = mother
        .and_then(|record| record.assigned_person.as_deref())
        .unwrap_or("unknown");
    table.add_row(vec![Cell::new("Mother"), Cell::new(&result.mother_id)]);
    table.add_row(vec![
        Cell::new("Set"),
        Cell::new(result.mother.set_label()),
    ]);
    table.add_row(vec![Cell::new("Assignee"), Cell::new(assignee)]);
    table.add_row(vec![
        Cell::new("Suggested child"),
        Cell::new(result.suggested_full_id())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    let discard = if result.discard() {
        Cell::new("Yes").fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new("No")
    };
    table.add_row(vec![Cell::new("Discard?"), discard]);

    for reason in &result.decision.reasons {
        table.add_row(vec![Cell::new("Reason"), Cell::new(reason)]);
    }
    for note in &result.decision.notes {
        table.add_row(vec![Cell::new("Note"), Cell::new(note).fg(Color::Cyan)]);
    }
    for warning in &result.decision.warnings {
        table.add_row(vec![
            Cell::new("Warning").fg(Color::Yellow),
            Cell::new(warning).fg(Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Existing children"),
        Cell::new(join_ids(&result.existing_children)),
    ]);
    table
}

/// Table view of `brood normalize` output.
pub fn render_normalized(rows: &[NormalizedRow]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Core"),
        header_cell("Full ID"),
        header_cell("Date"),
    ]);
    for row in rows {
        match &row.error {
            Some(error) => table.add_row(vec![
                Cell::new(&row.input),
                Cell::new(error).fg(Color::Red),
                dim_cell("-"),
                dim_cell("-"),
            ]),
            None => table.add_row(vec![
                Cell::new(&row.input),
                Cell::new(row.core.as_deref().unwrap_or_default()),
                Cell::new(row.full_id.as_deref().unwrap_or_default()),
                Cell::new(yes_no(row.has_date)),
            ]),
        };
    }
    table
}

/// Alive counts per set next to each set's threshold.
pub fn render_population(
    counts: &[(SetLabel, usize)],
    policy: &DecisionPolicy,
    known_sets: &[SetLabel],
) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Set"),
        header_cell("Alive"),
        header_cell("Limit"),
        header_cell("Status"),
    ]);
    for (set_label, alive) in counts {
        let limit = policy.population_limit(*set_label);
        let status = if *alive > limit {
            Cell::new("over threshold").fg(Color::Red)
        } else if !set_label.is_known(known_sets) {
            Cell::new("unknown set").fg(Color::Yellow)
        } else {
            Cell::new("ok").fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(set_label),
            Cell::new(alive).set_alignment(CellAlignment::Right),
            Cell::new(limit).set_alignment(CellAlignment::Right),
            status,
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn join_ids(ids: &[CanonicalIdentifier]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter()
        .map(CanonicalIdentifier::full_id)
        .collect::<Vec<_>>()
        .join(", ")
}
