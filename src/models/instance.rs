//! Validated problem instance.

use std::collections::{BTreeMap, BTreeSet};

use crate::aggregate;
use crate::{PlanError, Result};

use super::{Group, Load, Truck};

/// The immutable snapshot one optimization run operates on: the groups,
/// their aggregated totals, and the truck inventory.
///
/// Construction performs the precondition checks: duplicate group ids
/// and orders referenced without item data are rejected before any
/// search begins. The solver never mutates an instance; concurrent runs
/// on separate instances cannot interfere.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_truckload::models::{Group, Instance, Load, Truck, TruckCapacity};
///
/// let mut order_totals = BTreeMap::new();
/// order_totals.insert("SO1".to_string(), Load::new(400.0, 3.0, 2).unwrap());
/// order_totals.insert("SO2".to_string(), Load::new(300.0, 2.0, 1).unwrap());
///
/// let groups = vec![Group::new("PO1", ["SO1", "SO2"]).unwrap()];
/// let cap = TruckCapacity::new(1000.0, 10.0, 6).unwrap();
/// let trucks = Truck::uniform_fleet(["T1"], cap);
///
/// let instance = Instance::new(groups, &order_totals, trucks).unwrap();
/// assert_eq!(instance.num_groups(), 1);
/// assert_eq!(instance.group_total("PO1").unwrap().weight(), 700.0);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    groups: Vec<Group>,
    group_totals: BTreeMap<String, Load>,
    trucks: Vec<Truck>,
}

impl Instance {
    /// Builds an instance from groups, per-order totals, and trucks.
    ///
    /// Fails with [`PlanError::DuplicateGroup`] if two groups share an
    /// id, or [`PlanError::MissingOrderData`] if a group references an
    /// order absent from `order_totals`.
    pub fn new(
        groups: Vec<Group>,
        order_totals: &BTreeMap<String, Load>,
        trucks: Vec<Truck>,
    ) -> Result<Self> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for group in &groups {
            if !seen.insert(group.id()) {
                return Err(PlanError::DuplicateGroup(group.id().to_string()));
            }
        }

        let group_totals = aggregate::group_totals(&groups, order_totals)?;
        Ok(Self {
            groups,
            group_totals,
            trucks,
        })
    }

    /// The groups, in supplied order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The truck inventory, in supplied order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Number of groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Number of candidate trucks.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Aggregated totals per group id.
    pub fn group_totals(&self) -> &BTreeMap<String, Load> {
        &self.group_totals
    }

    /// The aggregated total of one group.
    pub fn group_total(&self, group_id: &str) -> Option<Load> {
        self.group_totals.get(group_id).copied()
    }

    /// Looks up a truck by id.
    pub fn truck(&self, truck_id: &str) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id() == truck_id)
    }

    /// Per-dimension maximum capacity across the fleet.
    ///
    /// `None` when the inventory is empty.
    pub fn fleet_max_capacity(&self) -> Option<Load> {
        self.trucks
            .iter()
            .map(|t| t.capacity().as_load())
            .reduce(|a, b| a.max(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TruckCapacity;

    fn totals(entries: &[(&str, f64, f64, u32)]) -> BTreeMap<String, Load> {
        entries
            .iter()
            .map(|&(id, w, v, p)| (id.to_string(), Load::new(w, v, p).expect("valid")))
            .collect()
    }

    #[test]
    fn test_instance_totals() {
        let order_totals = totals(&[("SO1", 400.0, 3.0, 2), ("SO2", 300.0, 2.0, 1)]);
        let groups = vec![
            Group::new("PO1", ["SO1"]).expect("valid"),
            Group::new("PO2", ["SO2"]).expect("valid"),
        ];
        let cap = TruckCapacity::new(1000.0, 10.0, 6).expect("valid");
        let trucks = Truck::uniform_fleet(["T1", "T2"], cap);

        let instance = Instance::new(groups, &order_totals, trucks).expect("valid");
        assert_eq!(instance.num_groups(), 2);
        assert_eq!(instance.num_trucks(), 2);
        assert_eq!(instance.group_total("PO2").expect("present").weight(), 300.0);
        assert!(instance.group_total("PO9").is_none());
    }

    #[test]
    fn test_instance_duplicate_group() {
        let order_totals = totals(&[("SO1", 1.0, 1.0, 1)]);
        let groups = vec![
            Group::new("PO1", ["SO1"]).expect("valid"),
            Group::new("PO1", ["SO1"]).expect("valid"),
        ];
        let err = Instance::new(groups, &order_totals, Vec::new()).expect_err("duplicate");
        assert_eq!(err, PlanError::DuplicateGroup("PO1".to_string()));
    }

    #[test]
    fn test_instance_missing_order() {
        let order_totals = totals(&[("SO1", 1.0, 1.0, 1)]);
        let groups = vec![Group::new("PO1", ["SO1", "SO9"]).expect("valid")];
        let err = Instance::new(groups, &order_totals, Vec::new()).expect_err("missing");
        assert_eq!(
            err,
            PlanError::MissingOrderData {
                group_id: "PO1".to_string(),
                order_id: "SO9".to_string(),
            }
        );
    }

    #[test]
    fn test_truck_lookup() {
        let cap = TruckCapacity::new(100.0, 1.0, 1).expect("valid");
        let instance = Instance::new(
            Vec::new(),
            &BTreeMap::new(),
            Truck::uniform_fleet(["T1", "T2"], cap),
        )
        .expect("valid");
        assert!(instance.truck("T2").is_some());
        assert!(instance.truck("T9").is_none());
    }

    #[test]
    fn test_fleet_max_capacity_mixed() {
        let small = TruckCapacity::new(100.0, 20.0, 2).expect("valid");
        let big = TruckCapacity::new(500.0, 5.0, 8).expect("valid");
        let trucks = vec![Truck::new("T1", small), Truck::new("T2", big)];
        let instance = Instance::new(Vec::new(), &BTreeMap::new(), trucks).expect("valid");

        let max = instance.fleet_max_capacity().expect("non-empty fleet");
        assert_eq!(max.weight(), 500.0);
        assert_eq!(max.volume(), 20.0);
        assert_eq!(max.pallets(), 8);
    }

    #[test]
    fn test_fleet_max_capacity_empty() {
        let instance = Instance::new(Vec::new(), &BTreeMap::new(), Vec::new()).expect("valid");
        assert!(instance.fleet_max_capacity().is_none());
    }
}
