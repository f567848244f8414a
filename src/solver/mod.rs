//! Assignment search engine.
//!
//! Minimizes the number of trucks used to carry all groups, subject to
//! weight, volume, and pallet capacity on every truck and to group
//! atomicity. The underlying problem is three-dimensional vector bin
//! packing, so the engine runs an exact branch-and-bound for moderate
//! instances and falls back to first-fit-decreasing beyond
//! [`SolverConfig::exact_group_limit`]; [`SolveResult`] always reports
//! which mode produced it.
//!
//! - [`solve`] — One synchronous optimization run over an immutable instance
//! - [`first_fit_decreasing`] — The deterministic construction heuristic
//! - [`SolverConfig`] — Node, time, and instance-size budgets
//! - [`SolveResult`] — Tagged outcome: optimal, feasible, infeasible, unknown

mod branch_bound;
mod first_fit;

pub use first_fit::first_fit_decreasing;

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::evaluation::verify_assignment;
use crate::models::{Assignment, Instance};
use crate::{PlanError, Result};

use branch_bound::branch_and_bound;

/// Search budget and mode selection for one optimization run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_truckload::solver::SolverConfig;
///
/// let config = SolverConfig::new()
///     .with_node_limit(100_000)
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(config.node_limit(), 100_000);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    node_limit: u64,
    time_limit: Option<Duration>,
    exact_group_limit: usize,
}

impl SolverConfig {
    /// Default budget: one million nodes, no wall-clock limit, exact
    /// search up to 24 groups.
    pub fn new() -> Self {
        Self {
            node_limit: 1_000_000,
            time_limit: None,
            exact_group_limit: 24,
        }
    }

    /// Sets the maximum number of search nodes to explore.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = limit;
        self
    }

    /// Sets a wall-clock limit for the search.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the group count above which the engine skips exact search
    /// and uses the first-fit-decreasing heuristic.
    pub fn with_exact_group_limit(mut self, limit: usize) -> Self {
        self.exact_group_limit = limit;
        self
    }

    /// Maximum number of search nodes.
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }

    /// Wall-clock limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Group count above which the heuristic is used.
    pub fn exact_group_limit(&self) -> usize {
        self.exact_group_limit
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What one optimization run established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The assignment uses the proven minimal number of trucks.
    Optimal,
    /// A capacity-respecting assignment, not proven minimal (budget
    /// exhausted, or heuristic mode).
    Feasible,
    /// Proven: no assignment satisfies all constraints.
    Infeasible,
    /// The budget ran out before any feasible assignment was found.
    /// Not a proof of infeasibility.
    Unknown,
}

/// Which search produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Branch-and-bound over the full search space.
    Exact,
    /// First-fit-decreasing construction.
    Heuristic,
}

/// Outcome of one optimization run.
///
/// Carries the status/mode tags, the assignment when one was found,
/// and, for instances rejected before search, the ids of groups that
/// fit no truck on their own.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    status: SolveStatus,
    mode: SolveMode,
    assignment: Option<Assignment>,
    unplaceable: Vec<String>,
    nodes_explored: u64,
}

impl SolveResult {
    /// What the run established.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Which search produced this result.
    pub fn mode(&self) -> SolveMode {
        self.mode
    }

    /// The assignment, present iff the status is `Optimal` or `Feasible`.
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Groups whose totals exceed every truck's capacity on some
    /// dimension. Non-empty only with status `Infeasible`.
    pub fn unplaceable(&self) -> &[String] {
        &self.unplaceable
    }

    /// Search nodes explored (zero in heuristic mode).
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Returns `true` if the truck count is proven minimal.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Number of distinct trucks used (zero when no assignment exists).
    pub fn trucks_used(&self) -> usize {
        self.assignment
            .as_ref()
            .map_or(0, Assignment::num_trucks_used)
    }
}

/// Runs one optimization over an immutable instance.
///
/// Synchronous: returns once the search completes or the budget runs
/// out, never hangs, and never mutates the instance. Repeated runs on
/// an unchanged instance return the identical assignment (group and
/// truck orderings are canonical).
///
/// Hard instances are not errors: infeasibility and budget exhaustion
/// come back as [`SolveStatus`] values. `Err` is reserved for internal
/// engine faults.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_truckload::models::{Group, Instance, Load, Truck, TruckCapacity};
/// use u_truckload::solver::{solve, SolveStatus, SolverConfig};
///
/// let mut order_totals = BTreeMap::new();
/// order_totals.insert("SO1".to_string(), Load::new(400.0, 3.0, 2).unwrap());
/// order_totals.insert("SO2".to_string(), Load::new(300.0, 2.0, 1).unwrap());
/// order_totals.insert("SO3".to_string(), Load::new(350.0, 4.0, 2).unwrap());
///
/// let instance = Instance::new(
///     vec![
///         Group::new("PO1", ["SO1"]).unwrap(),
///         Group::new("PO2", ["SO2"]).unwrap(),
///         Group::new("PO3", ["SO3"]).unwrap(),
///     ],
///     &order_totals,
///     Truck::uniform_fleet(
///         ["T1", "T2", "T3", "T4", "T5"],
///         TruckCapacity::new(1000.0, 10.0, 6).unwrap(),
///     ),
/// )
/// .unwrap();
///
/// let result = solve(&instance, &SolverConfig::new()).unwrap();
/// assert_eq!(result.status(), SolveStatus::Optimal);
/// // Combined weight 1050 exceeds one truck; two are provably enough.
/// assert_eq!(result.trucks_used(), 2);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveResult> {
    let n = instance.num_groups();
    if n == 0 {
        return Ok(SolveResult {
            status: SolveStatus::Optimal,
            mode: SolveMode::Exact,
            assignment: Some(Assignment::new()),
            unplaceable: Vec::new(),
            nodes_explored: 0,
        });
    }

    // A group no truck can carry alone can never be placed.
    let unplaceable: Vec<String> = instance
        .group_totals()
        .iter()
        .filter(|(_, total)| {
            !instance
                .trucks()
                .iter()
                .any(|t| total.fits_within(&t.capacity().as_load()))
        })
        .map(|(group_id, _)| group_id.clone())
        .collect();
    if !unplaceable.is_empty() {
        debug!(
            "instance infeasible: {} of {} groups fit no truck",
            unplaceable.len(),
            n
        );
        return Ok(SolveResult {
            status: SolveStatus::Infeasible,
            mode: SolveMode::Exact,
            assignment: None,
            unplaceable,
            nodes_explored: 0,
        });
    }

    let ffd = first_fit_decreasing(instance);

    if n > config.exact_group_limit() {
        debug!(
            "{n} groups exceed the exact limit of {}; using first-fit-decreasing",
            config.exact_group_limit()
        );
        let result = match ffd {
            Some(assignment) => SolveResult {
                status: SolveStatus::Feasible,
                mode: SolveMode::Heuristic,
                assignment: Some(assignment),
                unplaceable: Vec::new(),
                nodes_explored: 0,
            },
            None => SolveResult {
                status: SolveStatus::Unknown,
                mode: SolveMode::Heuristic,
                assignment: None,
                unplaceable: Vec::new(),
                nodes_explored: 0,
            },
        };
        return checked(instance, result);
    }

    let incumbent = ffd.as_ref().map(Assignment::num_trucks_used);
    let outcome = branch_and_bound(instance, config, incumbent);
    debug!(
        "branch-and-bound explored {} nodes (complete: {})",
        outcome.nodes, outcome.proven
    );

    let (status, assignment) = match (outcome.best, ffd) {
        (Some(by_group), _) => {
            let mut assignment = Assignment::new();
            for (gi, &ti) in by_group.iter().enumerate() {
                assignment.assign(instance.groups()[gi].id(), instance.trucks()[ti].id());
            }
            let status = if outcome.proven {
                SolveStatus::Optimal
            } else {
                SolveStatus::Feasible
            };
            (status, Some(assignment))
        }
        // Nothing beat the incumbent: a completed search proves the
        // heuristic solution minimal.
        (None, Some(assignment)) => {
            let status = if outcome.proven {
                SolveStatus::Optimal
            } else {
                SolveStatus::Feasible
            };
            (status, Some(assignment))
        }
        (None, None) => {
            let status = if outcome.proven {
                SolveStatus::Infeasible
            } else {
                SolveStatus::Unknown
            };
            (status, None)
        }
    };

    checked(
        instance,
        SolveResult {
            status,
            mode: SolveMode::Exact,
            assignment,
            unplaceable: Vec::new(),
            nodes_explored: outcome.nodes,
        },
    )
}

/// Cross-checks a result's assignment before handing it to the caller;
/// a violation here is an engine fault, never reported as infeasibility.
fn checked(instance: &Instance, result: SolveResult) -> Result<SolveResult> {
    if let Some(assignment) = &result.assignment {
        let violations = verify_assignment(instance, assignment);
        if !violations.is_empty() {
            return Err(PlanError::Solver(format!(
                "produced an assignment with {} constraint violations",
                violations.len()
            )));
        }
    }
    Ok(result)
}
