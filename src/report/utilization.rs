//! Utilization percentages per truck and summary statistics.

use serde::Serialize;

use crate::models::{Assignment, Dimension, Instance, Load, TruckCapacity};

/// One used truck's aggregate load and utilization.
#[derive(Debug, Clone, Serialize)]
pub struct TruckUtilization {
    truck_id: String,
    load: Load,
    capacity: TruckCapacity,
}

impl TruckUtilization {
    /// The truck's id.
    pub fn truck_id(&self) -> &str {
        &self.truck_id
    }

    /// Aggregate load across the groups on this truck.
    pub fn load(&self) -> Load {
        self.load
    }

    /// The truck's capacity limits.
    pub fn capacity(&self) -> TruckCapacity {
        self.capacity
    }

    /// Utilization on one dimension, as a percentage of this truck's
    /// capacity.
    pub fn percent(&self, dimension: Dimension) -> f64 {
        100.0 * self.load.get(dimension) / self.capacity.as_load().get(dimension)
    }

    /// Weight utilization percentage.
    pub fn weight_percent(&self) -> f64 {
        self.percent(Dimension::Weight)
    }

    /// Volume utilization percentage.
    pub fn volume_percent(&self) -> f64 {
        self.percent(Dimension::Volume)
    }

    /// Pallet utilization percentage.
    pub fn pallets_percent(&self) -> f64 {
        self.percent(Dimension::Pallets)
    }
}

/// Utilization percentages on all three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtilizationStats {
    /// Weight percentage.
    pub weight_percent: f64,
    /// Volume percentage.
    pub volume_percent: f64,
    /// Pallet percentage.
    pub pallets_percent: f64,
}

/// Per-truck utilization for the used trucks of an assignment.
///
/// Unused trucks carry no load and are excluded, both from the listing
/// and from the aggregate statistics.
#[derive(Debug, Clone, Serialize)]
pub struct UtilizationReport {
    trucks: Vec<TruckUtilization>,
}

impl UtilizationReport {
    /// Per-truck utilization, in inventory order.
    pub fn trucks(&self) -> &[TruckUtilization] {
        &self.trucks
    }

    /// Number of used trucks.
    pub fn num_trucks_used(&self) -> usize {
        self.trucks.len()
    }

    /// Mean utilization per dimension across used trucks.
    ///
    /// `None` when no truck is used.
    pub fn mean(&self) -> Option<UtilizationStats> {
        if self.trucks.is_empty() {
            return None;
        }
        let n = self.trucks.len() as f64;
        Some(UtilizationStats {
            weight_percent: self.trucks.iter().map(TruckUtilization::weight_percent).sum::<f64>() / n,
            volume_percent: self.trucks.iter().map(TruckUtilization::volume_percent).sum::<f64>() / n,
            pallets_percent: self.trucks.iter().map(TruckUtilization::pallets_percent).sum::<f64>()
                / n,
        })
    }

    /// Maximum utilization per dimension across used trucks.
    ///
    /// `None` when no truck is used.
    pub fn max(&self) -> Option<UtilizationStats> {
        if self.trucks.is_empty() {
            return None;
        }
        let fold = |f: fn(&TruckUtilization) -> f64| {
            self.trucks.iter().map(f).fold(f64::MIN, f64::max)
        };
        Some(UtilizationStats {
            weight_percent: fold(TruckUtilization::weight_percent),
            volume_percent: fold(TruckUtilization::volume_percent),
            pallets_percent: fold(TruckUtilization::pallets_percent),
        })
    }
}

/// Computes per-truck utilization for an assignment.
///
/// Works on any assignment over the instance, the engine's output or an
/// externally-supplied initial allocation alike, so callers can compare
/// utilization before and after optimization.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_truckload::models::{Assignment, Group, Instance, Load, Truck, TruckCapacity};
/// use u_truckload::report::utilization_report;
///
/// let mut order_totals = BTreeMap::new();
/// order_totals.insert("SO1".to_string(), Load::new(700.0, 5.0, 3).unwrap());
///
/// let instance = Instance::new(
///     vec![Group::new("PO1", ["SO1"]).unwrap()],
///     &order_totals,
///     Truck::uniform_fleet(["T1", "T2"], TruckCapacity::new(1000.0, 10.0, 6).unwrap()),
/// )
/// .unwrap();
///
/// let mut assignment = Assignment::new();
/// assignment.assign("PO1", "T1");
///
/// let report = utilization_report(&instance, &assignment);
/// assert_eq!(report.num_trucks_used(), 1);
/// assert!((report.trucks()[0].weight_percent() - 70.0).abs() < 1e-10);
/// assert!((report.trucks()[0].volume_percent() - 50.0).abs() < 1e-10);
/// assert!((report.trucks()[0].pallets_percent() - 50.0).abs() < 1e-10);
/// ```
pub fn utilization_report(instance: &Instance, assignment: &Assignment) -> UtilizationReport {
    let trucks = instance
        .trucks()
        .iter()
        .filter_map(|truck| {
            let groups_on = assignment.groups_on(truck.id());
            if groups_on.is_empty() {
                return None;
            }
            let load: Load = groups_on
                .iter()
                .filter_map(|group_id| instance.group_total(group_id))
                .sum();
            Some(TruckUtilization {
                truck_id: truck.id().to_string(),
                load,
                capacity: *truck.capacity(),
            })
        })
        .collect();
    UtilizationReport { trucks }
}
