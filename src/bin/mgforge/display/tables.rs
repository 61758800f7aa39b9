use std::io::{self, Write};

use molgraph_forge::{FeatureConfig, GraphRecord, Summary, schema};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// Number of element one-hot columns at the start of every node row.
const ELEMENT_SLOTS: usize = 11;

pub fn print_batch_summary(summary: &Summary, config: Option<&FeatureConfig>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Graphs", summary.graph_count.to_string()),
        ("Nodes", summary.nodes.to_string()),
        ("Directed Edges", summary.edges.to_string()),
    ];

    if summary.graph_count > 0 {
        let mean = summary.nodes as f64 / summary.graph_count as f64;
        rows.push(("Nodes / Graph", format!("{:.1}", mean)));
    }

    if let Some(config) = config {
        rows.push(("Atom Features", config.atom_feature_len().to_string()));
        rows.push(("Bond Features", config.bond_feature_len().to_string()));
    }

    print_kv_table(&mut out, "Batch Summary", &rows);
}

/// Tallies the element slot of every node row.
///
/// Rows shorter than the element block are skipped, which only happens for
/// batches written by another tool.
pub fn print_element_distribution(graphs: &[GraphRecord]) {
    let labels: Vec<String> = schema::atom_columns(&Default::default())
        .into_iter()
        .take(ELEMENT_SLOTS)
        .map(|name| name.trim_start_matches("element=").to_owned())
        .collect();

    let mut counts = vec![0usize; ELEMENT_SLOTS];
    for row in graphs.iter().flat_map(|g| g.node_features()) {
        let Some(block) = row.get(..ELEMENT_SLOTS) else {
            continue;
        };
        if let Some(slot) = block.iter().position(|&v| v == 1.0) {
            counts[slot] += 1;
        }
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return;
    }

    let mut sorted: Vec<(String, usize)> = labels
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let stderr = io::stderr();
    let mut out = stderr.lock();
    print_distribution_table(&mut out, "Element Distribution", &sorted, total);
}

pub fn print_feature_layout(config: &FeatureConfig) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = [
        ("Atom Columns", config.atom_feature_len().to_string()),
        ("Bond Columns", config.bond_feature_len().to_string()),
        ("Atom Stereo", on_off(config.atom.include_stereo)),
        ("Implicit H", on_off(config.atom.include_implicit_hydrogens)),
        ("Bond Stereo", on_off(config.bond.include_stereo)),
        ("Explicit H", on_off(config.perception.explicit_hydrogens)),
        ("Aromaticity", on_off(config.perception.perceive_aromaticity)),
    ];

    print_kv_table(&mut out, "Feature Layout", &rows);
}

fn on_off(value: bool) -> String {
    let text = if value { "on" } else { "off" };
    text.to_owned()
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{name_line}┬{count_line}┬{dist_line}┐",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Nodes", "Distribution",
    );
    let _ = writeln!(
        out,
        "{}├{name_line}┼{count_line}┼{dist_line}┤",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );

    for (name, count) in data {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(
        out,
        "{}└{name_line}┴{count_line}┴{dist_line}┘",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        dist_line = "─".repeat(dist_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
