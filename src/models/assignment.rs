//! Assignment and violation types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{Dimension, Group};

/// A type of constraint violation in an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A truck's accumulated load exceeds its capacity on one dimension.
    CapacityExceeded {
        /// Truck whose capacity is exceeded.
        truck_id: String,
        /// Dimension on which the capacity is exceeded.
        dimension: Dimension,
        /// Accumulated load on that dimension.
        load: f64,
        /// The truck's capacity on that dimension.
        capacity: f64,
    },
    /// A group from the instance is missing from the assignment.
    GroupUnassigned {
        /// The unassigned group.
        group_id: String,
    },
    /// A group is assigned to a truck that is not in the inventory.
    UnknownTruck {
        /// The assigned group.
        group_id: String,
        /// The dangling truck id.
        truck_id: String,
    },
    /// The assignment mentions a group the instance does not contain.
    UnknownGroup {
        /// The dangling group id.
        group_id: String,
    },
}

/// A constraint violation found when verifying an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A total mapping from group id to truck id.
///
/// Produced by the solver; every group of the instance appears exactly
/// once. A truck is *used* iff at least one group maps to it.
///
/// # Examples
///
/// ```
/// use u_truckload::models::Assignment;
///
/// let mut a = Assignment::new();
/// a.assign("PO1", "T1");
/// a.assign("PO2", "T1");
/// a.assign("PO3", "T2");
/// assert_eq!(a.num_groups(), 3);
/// assert_eq!(a.num_trucks_used(), 2);
/// assert_eq!(a.truck_of("PO2"), Some("T1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    by_group: BTreeMap<String, String>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assignment from an existing group→truck mapping.
    pub fn from_map(by_group: BTreeMap<String, String>) -> Self {
        Self { by_group }
    }

    /// Maps a group onto a truck, replacing any previous mapping.
    pub fn assign(&mut self, group_id: impl Into<String>, truck_id: impl Into<String>) {
        let _ = self.by_group.insert(group_id.into(), truck_id.into());
    }

    /// The truck a group is assigned to, if any.
    pub fn truck_of(&self, group_id: &str) -> Option<&str> {
        self.by_group.get(group_id).map(String::as_str)
    }

    /// The full group→truck mapping, ordered by group id.
    pub fn by_group(&self) -> &BTreeMap<String, String> {
        &self.by_group
    }

    /// Number of assigned groups.
    pub fn num_groups(&self) -> usize {
        self.by_group.len()
    }

    /// Returns `true` if no group is assigned.
    pub fn is_empty(&self) -> bool {
        self.by_group.is_empty()
    }

    /// Ids of the trucks that received at least one group.
    pub fn trucks_used(&self) -> BTreeSet<&str> {
        self.by_group.values().map(String::as_str).collect()
    }

    /// Number of distinct trucks used — the objective value.
    pub fn num_trucks_used(&self) -> usize {
        self.trucks_used().len()
    }

    /// The groups assigned to the given truck, ordered by group id.
    pub fn groups_on(&self, truck_id: &str) -> Vec<&str> {
        self.by_group
            .iter()
            .filter(|(_, t)| t.as_str() == truck_id)
            .map(|(g, _)| g.as_str())
            .collect()
    }

    /// Expands the group-level mapping to an order→truck mapping.
    ///
    /// Every order of a group lands on the group's truck, so the
    /// order-level view is atomic by construction. This is also the
    /// table external reporting exports.
    pub fn order_assignments(&self, groups: &[Group]) -> BTreeMap<String, String> {
        let mut by_order = BTreeMap::new();
        for group in groups {
            if let Some(truck_id) = self.truck_of(group.id()) {
                for order_id in group.orders() {
                    let _ = by_order.insert(order_id.clone(), truck_id.to_string());
                }
            }
        }
        by_order
    }
}
