//! First-fit-decreasing construction heuristic.
//!
//! Sorts groups by decreasing dominant share of the largest truck
//! capacity (the group's tightest dimension), then places each into the
//! first truck with room on all three dimensions. Deterministic, fast,
//! and the fallback for instances too large for exact search; solution
//! quality is not guaranteed to be minimal.

use crate::evaluation::TruckState;
use crate::models::{Assignment, Instance, Load};

/// Builds an assignment with the first-fit-decreasing heuristic.
///
/// Returns `None` if some group could not be placed on any truck. That
/// is not a proof of infeasibility; exact search may still succeed.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_truckload::models::{Group, Instance, Load, Truck, TruckCapacity};
/// use u_truckload::solver::first_fit_decreasing;
///
/// let mut order_totals = BTreeMap::new();
/// order_totals.insert("SO1".to_string(), Load::new(400.0, 3.0, 2).unwrap());
/// order_totals.insert("SO2".to_string(), Load::new(300.0, 2.0, 1).unwrap());
///
/// let instance = Instance::new(
///     vec![
///         Group::new("PO1", ["SO1"]).unwrap(),
///         Group::new("PO2", ["SO2"]).unwrap(),
///     ],
///     &order_totals,
///     Truck::uniform_fleet(["T1", "T2"], TruckCapacity::new(1000.0, 10.0, 6).unwrap()),
/// )
/// .unwrap();
///
/// let assignment = first_fit_decreasing(&instance).unwrap();
/// assert_eq!(assignment.num_trucks_used(), 1);
/// ```
pub fn first_fit_decreasing(instance: &Instance) -> Option<Assignment> {
    if instance.num_groups() == 0 {
        return Some(Assignment::new());
    }
    let fleet_max = instance.fleet_max_capacity()?;

    let totals: Vec<Load> = instance
        .groups()
        .iter()
        .map(|g| {
            instance
                .group_total(g.id())
                .expect("instance totals cover every group")
        })
        .collect();

    let mut order: Vec<usize> = (0..instance.num_groups()).collect();
    order.sort_by(|&a, &b| {
        totals[b]
            .dominant_share(&fleet_max)
            .total_cmp(&totals[a].dominant_share(&fleet_max))
            .then_with(|| instance.groups()[a].id().cmp(instance.groups()[b].id()))
    });

    let mut states: Vec<TruckState> = instance.trucks().iter().map(TruckState::for_truck).collect();
    let mut assignment = Assignment::new();
    for &gi in &order {
        let total = totals[gi];
        let slot = states.iter().position(|s| s.can_accept(&total))?;
        states[slot].place(&total);
        assignment.assign(instance.groups()[gi].id(), instance.trucks()[slot].id());
    }
    Some(assignment)
}
