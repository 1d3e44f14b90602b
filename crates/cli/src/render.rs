//! Table and JSON renderings of a comparison.

use colored::{ColoredString, Colorize};
use linecompare_core::{ComparisonOutcome, DiffStatistics, LineDiff, LineRecord, LineStatus, StyleTag, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    pub color: bool,
    pub only_changes: bool,
}

/// Render the verdict followed by one row per record:
/// `<numA> <marker> <numB> | <lineA> | <lineB>`.
pub fn table(outcome: &ComparisonOutcome, diff: &LineDiff, options: TableOptions) -> String {
    let mut output = String::new();

    if outcome.verdict == Verdict::Empty {
        return output;
    }

    output.push_str(&paint_verdict(outcome, options.color));
    output.push('\n');

    let width = number_width(&diff.records);
    for record in diff
        .records
        .iter()
        .filter(|r| !options.only_changes || r.status != LineStatus::Equal)
    {
        let row = format!(
            "{:>width$} {} {:>width$} | {} | {}",
            record.line_num_a.map(|n| n.to_string()).unwrap_or_default(),
            record.status.marker(),
            record.line_num_b.map(|n| n.to_string()).unwrap_or_default(),
            record.line_a,
            record.line_b,
        );
        output.push_str(&paint_row(row, record.status, options.color));
        output.push('\n');
    }

    output.push_str(&diff.summary());
    output.push('\n');
    output
}

#[derive(Serialize)]
struct Report<'a> {
    verdict: Verdict,
    style: StyleTag,
    message: &'a str,
    statistics: &'a DiffStatistics,
    records: &'a [LineRecord],
}

/// Render the outcome, statistics and records as pretty-printed JSON
pub fn json(outcome: &ComparisonOutcome, diff: &LineDiff) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        verdict: outcome.verdict,
        style: outcome.style(),
        message: outcome.message(),
        statistics: &diff.statistics,
        records: &diff.records,
    })
}

fn number_width(records: &[LineRecord]) -> usize {
    records
        .iter()
        .flat_map(|r| [r.line_num_a, r.line_num_b])
        .flatten()
        .max()
        .map_or(1, |n| n.to_string().len())
}

fn paint_verdict(outcome: &ComparisonOutcome, color: bool) -> String {
    let message = outcome.message();
    if !color {
        return message.to_string();
    }
    match outcome.style() {
        StyleTag::Match => message.green().bold().to_string(),
        StyleTag::Mismatch => message.red().bold().to_string(),
        StyleTag::None => message.to_string(),
    }
}

fn paint_row(row: String, status: LineStatus, color: bool) -> String {
    if !color {
        return row;
    }
    let painted: ColoredString = match status {
        LineStatus::Equal => row.normal(),
        LineStatus::AOnly => row.red(),
        LineStatus::BOnly => row.green(),
        LineStatus::Modified => row.yellow(),
    };
    painted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linecompare_core::{DiffEngine, LineDiff};

    fn run(original: &str, changed: &str) -> (ComparisonOutcome, LineDiff) {
        let engine = DiffEngine::default();
        (
            engine.compare(Some(original), Some(changed)),
            engine.diff(Some(original), Some(changed)),
        )
    }

    #[test]
    fn renders_plain_table() {
        let (outcome, diff) = run("Line one\nLine two", "Line one\nLine three");
        let rendered = table(&outcome, &diff, TableOptions::default());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Files are DIFFERENT.");
        assert_eq!(lines[1], "1 = 1 | Line one | Line one");
        assert_eq!(lines[2], "2 ~ 2 | Line two | Line three");
        assert!(lines[3].starts_with("Line Diff Summary: 1 equal"));
    }

    #[test]
    fn pads_line_numbers_and_blanks_absent_sides() {
        let original = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let changed = (1..=9).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let (outcome, diff) = run(&original, &changed);

        let rendered = table(&outcome, &diff, TableOptions::default());
        assert!(rendered.contains(" 1 =  1 | 1 | 1\n"));
        assert!(rendered.contains("10 -    | 10 | \n"));
    }

    #[test]
    fn hides_equal_rows_on_request() {
        let (outcome, diff) = run("a\nb", "a\nc");
        let options = TableOptions {
            color: false,
            only_changes: true,
        };

        let rendered = table(&outcome, &diff, options);
        assert!(!rendered.contains("1 = 1"));
        assert!(rendered.contains("2 ~ 2 | b | c"));
    }

    #[test]
    fn empty_outcome_renders_nothing() {
        let (outcome, diff) = run("", " ");
        assert_eq!(table(&outcome, &diff, TableOptions::default()), "");
    }

    #[test]
    fn renders_json_report() {
        let (outcome, diff) = run("a", "a\nb");
        let value: serde_json::Value = serde_json::from_str(&json(&outcome, &diff).unwrap()).unwrap();

        assert_eq!(value["verdict"], "DIFFERENT");
        assert_eq!(value["style"], "mismatch");
        assert_eq!(value["message"], "Files are DIFFERENT.");
        assert_eq!(value["statistics"]["b_only"], 1);
        assert_eq!(value["records"][1]["status"], "B_ONLY");
        assert_eq!(value["records"][1]["lineNumA"], serde_json::Value::Null);
        assert_eq!(value["records"][1]["lineNumB"], 2);
    }
}
