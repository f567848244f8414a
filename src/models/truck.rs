//! Truck type.

use serde::{Deserialize, Serialize};

use super::TruckCapacity;

/// A candidate truck: an id plus its capacity limits.
///
/// Fleets are typically uniform (one constraint set for every truck),
/// but capacities are carried per truck, so mixed fleets work too.
///
/// # Examples
///
/// ```
/// use u_truckload::models::{Truck, TruckCapacity};
///
/// let cap = TruckCapacity::new(1000.0, 10.0, 6).unwrap();
/// let fleet = Truck::uniform_fleet(["T1", "T2", "T3"], cap);
/// assert_eq!(fleet.len(), 3);
/// assert_eq!(fleet[0].id(), "T1");
/// assert_eq!(fleet[2].capacity().max_pallets(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    id: String,
    capacity: TruckCapacity,
}

impl Truck {
    /// Creates a truck with the given capacity.
    pub fn new(id: impl Into<String>, capacity: TruckCapacity) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Truck id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Capacity limits of this truck.
    pub fn capacity(&self) -> &TruckCapacity {
        &self.capacity
    }

    /// Builds a fleet of identical trucks from a list of ids.
    pub fn uniform_fleet(
        ids: impl IntoIterator<Item = impl Into<String>>,
        capacity: TruckCapacity,
    ) -> Vec<Truck> {
        ids.into_iter().map(|id| Truck::new(id, capacity)).collect()
    }
}
