//! Text rendering of search results.

use crate::solver::{SearchNode, SearchOutcome, SearchStatus};
use std::time::Duration;

const SEPARATOR: &str = "------------------------------------------";

/// Renders a solution history, one annotated board per step.
///
/// Each step prints `Action: <label> / Cost: <cost>`, the grid with the player
/// marked, and a blank line. A dashed separator closes the listing.
pub fn render_history(history: &[SearchNode], ansi: bool) -> String {
    let mut output = String::from("\n");
    for node in history {
        output.push_str(&format!("Action: {} / Cost: {}\n", node.action, node.cost));
        output.push_str(&node.grid.to_string_with_player(Some(node.player), ansi));
        output.push_str("\n\n");
    }
    output.push_str(SEPARATOR);
    output
}

/// Renders the final report: best cost, the history, search statistics and elapsed time.
pub fn render_summary(outcome: &SearchOutcome, elapsed: Duration, ansi: bool) -> String {
    let mut output = String::new();
    for _ in 0..3 {
        output.push_str(SEPARATOR);
        output.push('\n');
    }
    output.push('\n');

    match &outcome.best {
        Some(solution) => {
            output.push_str(&format!("Best Cost: {}\n", solution.cost));
            output.push_str(&render_history(&solution.history, ansi));
            output.push('\n');
        }
        None => output.push_str("No solution found\n"),
    }

    if outcome.status == SearchStatus::BudgetExhausted {
        output.push_str("Search budget exhausted; result may not be optimal\n");
    }
    let stats = &outcome.stats;
    output.push_str(&format!(
        "Nodes: {}, bails: {}, duplicates: {}, improvements: {}\n",
        stats.nodes_expanded, stats.bails, stats.duplicates, stats.solutions_found
    ));
    output.push_str(&format!("Time elapsed: {:.3}s", elapsed.as_secs_f64()));
    output
}
