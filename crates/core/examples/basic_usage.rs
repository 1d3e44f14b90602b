//! Basic usage example of the linecompare library

use linecompare_core::{compute_diff, AlignmentStrategy, DiffConfig, DiffEngine, LineStatus};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Line Compare Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Ignoring whitespace
    example_ignore_whitespace();

    // Example 3: Comparing the two alignment strategies
    example_strategies();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "fn main() {\n    greet();\n}";
    let changed = "fn main() {\n    setup();\n    greet();\n}";

    let result = compute_diff(Some(original), Some(changed), None);

    println!("{}", result.summary());
    println!("\nRecords:");
    for record in &result.records {
        println!(
            "  {:>2} {} {:<2} {}",
            record.line_num_a.map(|n| n.to_string()).unwrap_or_default(),
            record.status.marker(),
            record.line_num_b.map(|n| n.to_string()).unwrap_or_default(),
            record.description()
        );
    }
    println!("\n");
}

fn example_ignore_whitespace() {
    println!("Example 2: Ignoring Whitespace");
    println!("{}", LINE);

    let original = "if ready {\n\tlaunch();\n}";
    let changed = "if ready {\n    launch();\n}";

    for config in [DiffConfig::strict(), DiffConfig::lenient()] {
        let engine = DiffEngine::new(config);
        let outcome = engine.compare(Some(original), Some(changed));
        let diff = engine.diff(Some(original), Some(changed));
        println!(
            "  ignore_whitespace={:<5} -> {} ({} modified)",
            engine.config().ignore_whitespace,
            outcome.message(),
            diff.statistics.modified
        );
    }
    println!("\n");
}

fn example_strategies() {
    println!("Example 3: Alignment Strategies");
    println!("{}", LINE);

    let original = "alpha\nbeta\ngamma";
    let changed = "new\nalpha\nbeta\ngamma";

    for strategy in [AlignmentStrategy::Lookahead, AlignmentStrategy::Positional] {
        let diff = DiffEngine::new(DiffConfig::new().with_strategy(strategy))
            .diff(Some(original), Some(changed));
        let equal = diff
            .records
            .iter()
            .filter(|r| r.status == LineStatus::Equal)
            .count();
        println!(
            "  {:<10} -> {} records, {} equal",
            strategy.as_str(),
            diff.records.len(),
            equal
        );
    }
}
