//! Post-hoc assignment verification.

use std::collections::BTreeMap;

use crate::models::{Assignment, Dimension, Instance, Load, Violation, ViolationType};

/// Checks a complete assignment against an instance.
///
/// Verifies totality (every group assigned), reference integrity (no
/// unknown groups or trucks), and per-truck capacity respect on each of
/// the three dimensions. A valid assignment yields an empty list.
///
/// The solver runs this on its own output before returning; tests use
/// it to assert the capacity-respect and totality properties.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use u_truckload::evaluation::verify_assignment;
/// use u_truckload::models::{Assignment, Group, Instance, Load, Truck, TruckCapacity};
///
/// let mut order_totals = BTreeMap::new();
/// order_totals.insert("SO1".to_string(), Load::new(400.0, 3.0, 2).unwrap());
///
/// let instance = Instance::new(
///     vec![Group::new("PO1", ["SO1"]).unwrap()],
///     &order_totals,
///     Truck::uniform_fleet(["T1"], TruckCapacity::new(1000.0, 10.0, 6).unwrap()),
/// )
/// .unwrap();
///
/// let mut assignment = Assignment::new();
/// assignment.assign("PO1", "T1");
/// assert!(verify_assignment(&instance, &assignment).is_empty());
/// ```
pub fn verify_assignment(instance: &Instance, assignment: &Assignment) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Totality over the instance's groups.
    for group in instance.groups() {
        if assignment.truck_of(group.id()).is_none() {
            violations.push(Violation::new(ViolationType::GroupUnassigned {
                group_id: group.id().to_string(),
            }));
        }
    }

    // Reference integrity, accumulating per-truck loads as we go.
    let mut truck_loads: BTreeMap<&str, Load> = BTreeMap::new();
    for (group_id, truck_id) in assignment.by_group() {
        let Some(total) = instance.group_total(group_id) else {
            violations.push(Violation::new(ViolationType::UnknownGroup {
                group_id: group_id.clone(),
            }));
            continue;
        };
        if instance.truck(truck_id).is_none() {
            violations.push(Violation::new(ViolationType::UnknownTruck {
                group_id: group_id.clone(),
                truck_id: truck_id.clone(),
            }));
            continue;
        }
        let entry = truck_loads
            .entry(truck_id.as_str())
            .or_insert_with(Load::zero);
        *entry += total;
    }

    // Capacity respect, per used truck and dimension.
    for truck in instance.trucks() {
        let Some(load) = truck_loads.get(truck.id()) else {
            continue;
        };
        let capacity = truck.capacity().as_load();
        for dimension in Dimension::ALL {
            if load.get(dimension) > capacity.get(dimension) {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    truck_id: truck.id().to_string(),
                    dimension,
                    load: load.get(dimension),
                    capacity: capacity.get(dimension),
                }));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, Truck, TruckCapacity};

    fn setup() -> Instance {
        let order_totals: BTreeMap<String, Load> = [
            ("SO1", Load::new(400.0, 3.0, 2)),
            ("SO2", Load::new(300.0, 2.0, 1)),
            ("SO3", Load::new(350.0, 4.0, 2)),
        ]
        .into_iter()
        .map(|(id, l)| (id.to_string(), l.expect("valid")))
        .collect();

        let groups = vec![
            Group::new("PO1", ["SO1"]).expect("valid"),
            Group::new("PO2", ["SO2"]).expect("valid"),
            Group::new("PO3", ["SO3"]).expect("valid"),
        ];
        let cap = TruckCapacity::new(1000.0, 10.0, 6).expect("valid");
        Instance::new(groups, &order_totals, Truck::uniform_fleet(["T1", "T2"], cap))
            .expect("valid")
    }

    #[test]
    fn test_valid_assignment() {
        let instance = setup();
        let mut a = Assignment::new();
        a.assign("PO1", "T1");
        a.assign("PO2", "T1");
        a.assign("PO3", "T2");
        assert!(verify_assignment(&instance, &a).is_empty());
    }

    #[test]
    fn test_unassigned_group() {
        let instance = setup();
        let mut a = Assignment::new();
        a.assign("PO1", "T1");
        a.assign("PO2", "T1");
        let violations = verify_assignment(&instance, &a);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::GroupUnassigned { group_id } if group_id == "PO3"
        ));
    }

    #[test]
    fn test_capacity_exceeded_on_weight_only() {
        let instance = setup();
        // All three groups on one truck: weight 1050 > 1000, volume 9 and
        // pallets 5 are fine.
        let mut a = Assignment::new();
        a.assign("PO1", "T1");
        a.assign("PO2", "T1");
        a.assign("PO3", "T1");
        let violations = verify_assignment(&instance, &a);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::CapacityExceeded {
                truck_id,
                dimension: Dimension::Weight,
                load,
                capacity,
            } if truck_id == "T1" && *load == 1050.0 && *capacity == 1000.0
        ));
    }

    #[test]
    fn test_unknown_truck() {
        let instance = setup();
        let mut a = Assignment::new();
        a.assign("PO1", "T9");
        a.assign("PO2", "T1");
        a.assign("PO3", "T2");
        let violations = verify_assignment(&instance, &a);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::UnknownTruck { group_id, truck_id }
                if group_id == "PO1" && truck_id == "T9"
        ));
    }

    #[test]
    fn test_unknown_group() {
        let instance = setup();
        let mut a = Assignment::new();
        a.assign("PO1", "T1");
        a.assign("PO2", "T1");
        a.assign("PO3", "T2");
        a.assign("PO9", "T2");
        let violations = verify_assignment(&instance, &a);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::UnknownGroup { group_id } if group_id == "PO9"
        ));
    }

    #[test]
    fn test_exact_fill_is_valid() {
        let order_totals: BTreeMap<String, Load> =
            [("SO1".to_string(), Load::new(1000.0, 10.0, 6).expect("valid"))]
                .into_iter()
                .collect();
        let instance = Instance::new(
            vec![Group::new("PO1", ["SO1"]).expect("valid")],
            &order_totals,
            Truck::uniform_fleet(["T1"], TruckCapacity::new(1000.0, 10.0, 6).expect("valid")),
        )
        .expect("valid");

        let mut a = Assignment::new();
        a.assign("PO1", "T1");
        assert!(verify_assignment(&instance, &a).is_empty());
    }
}
