//! Branch-and-bound depth-first search for the cheapest way to clear a dungeon.
//!
//! Each recursive step:
//! 1. stops at a solved grid and records it if it beats the best known cost,
//! 2. drops the branch if its cost plus [`minimum_extra_cost`] cannot beat the best,
//! 3. otherwise tries every triggered attack from every reachable tile.
//!
//! Children already seen with the same grid and the same cumulative cost are
//! skipped. The same grid reached at a different cost is explored again.

use crate::engine::{Direction, Dungeon, Grid, Position};
use crate::heuristics::{minimum_extra_cost, remaining_health};
use crate::weapons::{resolve_attack, triggered_attacks, Weapon};
use crate::Solution;
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Default number of pruned branches between two [`SearchEvent::Bails`] reports.
pub const DEFAULT_BAIL_REPORT_INTERVAL: u64 = 10_000;

/// Budgets and reporting settings for one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many recursive calls.
    pub max_nodes: Option<u64>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
    /// Only accept solutions strictly cheaper than this.
    pub cost_ceiling: Option<u32>,
    /// Emit a [`SearchEvent::Bails`] every this many pruned branches. `0` disables it.
    pub bail_report_interval: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_nodes: None,
            time_limit: None,
            cost_ceiling: None,
            bail_report_interval: DEFAULT_BAIL_REPORT_INTERVAL,
        }
    }
}

/// What happened to get from the previous node to this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Attack { weapon: Weapon, direction: Direction },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Start => f.write_str("Start"),
            Action::Attack { weapon, direction } => write!(f, "{} {}", weapon, direction),
        }
    }
}

/// One step of a candidate solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Grid after the action.
    pub grid: Grid,
    pub action: Action,
    /// Cumulative cost including this action.
    pub cost: u32,
    /// Where the player stood for the action (the start tile for `Action::Start`).
    pub player: Position,
}

/// Progress notifications emitted while searching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// A strictly cheaper complete solution was found.
    NewBest { cost: u32, steps: usize },
    /// The number of pruned branches crossed another reporting interval.
    Bails { count: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The pruned search space was fully explored; `best` is optimal.
    Complete,
    /// A node or time budget ran out; `best` is the cheapest solution seen so far.
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls made, including the root.
    pub nodes_expanded: u64,
    /// Branches dropped by the lower bound.
    pub bails: u64,
    /// Children dropped because their (grid, cost) pair was already explored.
    pub duplicates: u64,
    /// Times the best solution improved.
    pub solutions_found: u64,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub best: Option<Solution>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

/// Searches for the cheapest sequence of attacks that kills every monster.
///
/// Returns an outcome whose `best` is `None` when no solution exists (for
/// example a monster nobody can reach) or none was found within the limits.
///
/// # Examples
/// ```
/// use dungeon_solver::solver::{solve_dfs, SearchLimits, SearchStatus};
/// use dungeon_solver::utils::dungeon_from_str_array;
///
/// let dungeon = dungeon_from_str_array(&["WWWWW", "WWBWW", "WWSWW", "WWWWW"]).unwrap();
/// let outcome = solve_dfs(&dungeon, &SearchLimits::default());
/// assert_eq!(outcome.status, SearchStatus::Complete);
/// assert_eq!(outcome.best.unwrap().cost, 50);
/// ```
pub fn solve_dfs(dungeon: &Dungeon, limits: &SearchLimits) -> SearchOutcome {
    solve_dfs_with_progress(dungeon, limits, |_| {})
}

/// Like [`solve_dfs`], reporting progress through `on_event`.
pub fn solve_dfs_with_progress<F>(dungeon: &Dungeon, limits: &SearchLimits, mut on_event: F) -> SearchOutcome
where
    F: FnMut(&SearchEvent),
{
    let mut context = SearchContext {
        limits,
        started: Instant::now(),
        best_cost: limits.cost_ceiling,
        best_history: None,
        visited: HashSet::new(),
        stats: SearchStats::default(),
        exhausted: false,
        on_event: &mut on_event,
    };

    let mut history = vec![SearchNode {
        grid: dungeon.grid.clone(),
        action: Action::Start,
        cost: 0,
        player: dungeon.start,
    }];
    context.explore(&mut history);

    let status = if context.exhausted {
        SearchStatus::BudgetExhausted
    } else {
        SearchStatus::Complete
    };
    let best = match (context.best_history, context.best_cost) {
        (Some(history), Some(cost)) => Some(Solution { history, cost }),
        _ => None,
    };

    SearchOutcome {
        best,
        status,
        stats: context.stats,
    }
}

/// Mutable state shared by every branch of one search.
struct SearchContext<'a> {
    limits: &'a SearchLimits,
    started: Instant,
    best_cost: Option<u32>,
    best_history: Option<Vec<SearchNode>>,
    visited: HashSet<(Grid, u32)>,
    stats: SearchStats,
    exhausted: bool,
    on_event: &'a mut dyn FnMut(&SearchEvent),
}

impl SearchContext<'_> {
    fn budget_exhausted(&self) -> bool {
        if let Some(max_nodes) = self.limits.max_nodes {
            if self.stats.nodes_expanded >= max_nodes {
                return true;
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.started.elapsed() >= time_limit {
                return true;
            }
        }
        false
    }

    /// Explores the branch ending at the last node of `history`.
    ///
    /// `history` is extended for each child and restored before returning, so
    /// every branch sees exactly its own path.
    fn explore(&mut self, history: &mut Vec<SearchNode>) {
        if self.exhausted || self.budget_exhausted() {
            self.exhausted = true;
            return;
        }
        self.stats.nodes_expanded += 1;

        let Some(node) = history.last() else {
            return;
        };
        let cost = node.cost;

        let health_left = remaining_health(&node.grid);
        if health_left == 0 {
            if self.best_cost.map_or(true, |best| cost < best) {
                self.best_cost = Some(cost);
                self.best_history = Some(history.clone());
                self.stats.solutions_found += 1;
                (self.on_event)(&SearchEvent::NewBest {
                    cost,
                    steps: history.len() - 1,
                });
            }
            return;
        }

        if let Some(best) = self.best_cost {
            if cost + minimum_extra_cost(health_left) >= best {
                self.stats.bails += 1;
                let interval = self.limits.bail_report_interval;
                if interval > 0 && self.stats.bails % interval == 0 {
                    (self.on_event)(&SearchEvent::Bails {
                        count: self.stats.bails,
                    });
                }
                return;
            }
        }

        let grid = node.grid.clone();
        let origins = grid.reachable_from(node.player);

        for attack in triggered_attacks(&grid, &origins) {
            if self.exhausted {
                return;
            }
            let child = resolve_attack(&grid, &attack);
            let child_cost = cost + attack.weapon.cost();
            if !self.visited.insert((child.clone(), child_cost)) {
                self.stats.duplicates += 1;
                continue;
            }

            history.push(SearchNode {
                grid: child,
                action: Action::Attack {
                    weapon: attack.weapon,
                    direction: attack.direction,
                },
                cost: child_cost,
                player: attack.origin,
            });
            self.explore(history);
            history.pop();
        }
    }
}
