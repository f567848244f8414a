//! Per-truck load state and admissibility.

use crate::models::{Load, Truck};

/// One truck's capacity and accumulated load during packing.
///
/// The admissibility test is simultaneous on all three dimensions:
/// a group fits iff weight, volume, and pallets each stay within the
/// truck's limits. Comparisons are exact; there is no epsilon slack.
///
/// # Examples
///
/// ```
/// use u_truckload::evaluation::TruckState;
/// use u_truckload::models::Load;
///
/// let mut state = TruckState::new(Load::new(1000.0, 10.0, 6).unwrap());
/// let group = Load::new(700.0, 5.0, 3).unwrap();
/// assert!(state.can_accept(&group));
/// state.place(&group);
///
/// // Weight would reach 1050 — rejected even though volume and
/// // pallets still fit.
/// assert!(!state.can_accept(&Load::new(350.0, 4.0, 2).unwrap()));
/// assert_eq!(state.remaining().weight(), 300.0);
/// ```
#[derive(Debug, Clone)]
pub struct TruckState {
    capacity: Load,
    load: Load,
    placed: usize,
}

impl TruckState {
    /// Creates an empty state with the given capacity limit.
    pub fn new(capacity: Load) -> Self {
        Self {
            capacity,
            load: Load::zero(),
            placed: 0,
        }
    }

    /// Creates an empty state for a truck.
    pub fn for_truck(truck: &Truck) -> Self {
        Self::new(truck.capacity().as_load())
    }

    /// The truck's capacity limit.
    pub fn capacity(&self) -> Load {
        self.capacity
    }

    /// The accumulated load.
    pub fn load(&self) -> Load {
        self.load
    }

    /// Remaining capacity on each dimension.
    pub fn remaining(&self) -> Load {
        self.capacity - self.load
    }

    /// Number of groups placed so far.
    pub fn num_placed(&self) -> usize {
        self.placed
    }

    /// Returns `true` if at least one group has been placed.
    pub fn is_used(&self) -> bool {
        self.placed > 0
    }

    /// Returns `true` if adding `group_total` keeps the truck within
    /// capacity on all three dimensions.
    pub fn can_accept(&self, group_total: &Load) -> bool {
        (self.load + *group_total).fits_within(&self.capacity)
    }

    /// Adds a group's totals to the accumulated load.
    pub fn place(&mut self, group_total: &Load) {
        self.load += *group_total;
        self.placed += 1;
    }
}
