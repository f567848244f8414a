//! Exact branch-and-bound search over group→truck assignments.
//!
//! Groups are ordered by decreasing dominant share and assigned
//! depth-first; among currently-empty trucks only the first of each
//! distinct capacity is branched on, so identical spare trucks do not
//! multiply the search space. A per-dimension packing bound prunes
//! partial assignments that cannot beat the incumbent.

use std::time::Instant;

use crate::models::{Dimension, Instance, Load};

use super::SolverConfig;

/// Raw outcome of one branch-and-bound run.
pub(crate) struct BnbOutcome {
    /// Truck index per group (in instance group order), if any complete
    /// assignment strictly better than the incumbent was found.
    pub(crate) best: Option<Vec<usize>>,
    /// `true` if the search ran to completion: the returned solution is
    /// minimal, or, with `best` absent and no incumbent, the instance
    /// is infeasible.
    pub(crate) proven: bool,
    /// Nodes explored before completion or budget exhaustion.
    pub(crate) nodes: u64,
}

/// Runs branch-and-bound, trying to beat `incumbent_trucks` (the truck
/// count of the best known solution, if any).
pub(crate) fn branch_and_bound(
    instance: &Instance,
    config: &SolverConfig,
    incumbent_trucks: Option<usize>,
) -> BnbOutcome {
    let n = instance.num_groups();
    let m = instance.num_trucks();
    if m == 0 {
        return BnbOutcome {
            best: None,
            proven: true,
            nodes: 0,
        };
    }
    let fleet_max = instance
        .fleet_max_capacity()
        .expect("fleet is non-empty here");

    let totals: Vec<Load> = instance
        .groups()
        .iter()
        .map(|g| {
            instance
                .group_total(g.id())
                .expect("instance totals cover every group")
        })
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        totals[b]
            .dominant_share(&fleet_max)
            .total_cmp(&totals[a].dominant_share(&fleet_max))
            .then_with(|| instance.groups()[a].id().cmp(instance.groups()[b].id()))
    });
    let loads: Vec<Load> = order.iter().map(|&gi| totals[gi]).collect();

    let mut suffix = vec![Load::zero(); n + 1];
    for pos in (0..n).rev() {
        suffix[pos] = suffix[pos + 1] + loads[pos];
    }

    let caps: Vec<Load> = instance
        .trucks()
        .iter()
        .map(|t| t.capacity().as_load())
        .collect();

    let mut search = Search {
        loads: &loads,
        suffix: &suffix,
        caps: &caps,
        fleet_max,
        assign: vec![0; n],
        truck_load: vec![Load::zero(); m],
        truck_groups: vec![0; m],
        used: 0,
        best: None,
        best_count: incumbent_trucks.unwrap_or(m + 1),
        nodes: 0,
        node_limit: config.node_limit(),
        deadline: config.time_limit().map(|d| Instant::now() + d),
        aborted: false,
    };
    search.dfs(0);

    // Map the winning positions back to instance group order.
    let best = search.best.map(|assign| {
        let mut by_group = vec![0; n];
        for (pos, &gi) in order.iter().enumerate() {
            by_group[gi] = assign[pos];
        }
        by_group
    });

    BnbOutcome {
        best,
        proven: !search.aborted,
        nodes: search.nodes,
    }
}

struct Search<'a> {
    loads: &'a [Load],
    suffix: &'a [Load],
    caps: &'a [Load],
    fleet_max: Load,
    assign: Vec<usize>,
    truck_load: Vec<Load>,
    truck_groups: Vec<usize>,
    used: usize,
    best: Option<Vec<usize>>,
    best_count: usize,
    nodes: u64,
    node_limit: u64,
    deadline: Option<Instant>,
    aborted: bool,
}

impl Search<'_> {
    fn dfs(&mut self, pos: usize) {
        self.nodes += 1;
        if self.nodes >= self.node_limit {
            self.aborted = true;
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.aborted = true;
                return;
            }
        }

        if pos == self.loads.len() {
            if self.used < self.best_count {
                self.best_count = self.used;
                self.best = Some(self.assign.clone());
            }
            return;
        }
        if self.used + self.lower_bound(pos) >= self.best_count {
            return;
        }

        let group = self.loads[pos];
        let mut seen_empty: Vec<Load> = Vec::new();
        for t in 0..self.caps.len() {
            let empty = self.truck_groups[t] == 0;
            if empty {
                // Identical empty trucks are interchangeable; branch on
                // the first of each distinct capacity only.
                if seen_empty.contains(&self.caps[t]) {
                    continue;
                }
                seen_empty.push(self.caps[t]);
            }

            let next = self.truck_load[t] + group;
            if !next.fits_within(&self.caps[t]) {
                continue;
            }

            let saved = self.truck_load[t];
            self.truck_load[t] = next;
            self.truck_groups[t] += 1;
            if empty {
                self.used += 1;
            }
            self.assign[pos] = t;

            self.dfs(pos + 1);

            self.truck_load[t] = saved;
            self.truck_groups[t] -= 1;
            if empty {
                self.used -= 1;
            }

            if self.aborted {
                return;
            }
        }
    }

    /// Lower bound on the trucks still to be opened: per dimension, the
    /// remaining total beyond the free capacity of already-used trucks,
    /// divided by the largest truck capacity, rounded up.
    fn lower_bound(&self, pos: usize) -> usize {
        let remaining = self.suffix[pos];
        let mut free = Load::zero();
        for t in 0..self.caps.len() {
            if self.truck_groups[t] > 0 {
                free += self.caps[t] - self.truck_load[t];
            }
        }

        let mut bound = 0usize;
        for dimension in Dimension::ALL {
            let need = remaining.get(dimension) - free.get(dimension);
            if need <= 0.0 {
                continue;
            }
            // Rounding slack keeps the bound admissible under f64
            // accumulation error.
            let extra = (need / self.fleet_max.get(dimension) - 1e-9).ceil() as usize;
            bound = bound.max(extra);
        }
        bound
    }
}
