//! Truck capacity constraint set.

use serde::{Deserialize, Serialize};

use super::Load;

/// The constraint triple applied to a truck: maximum weight, volume,
/// and pallet count.
///
/// All three maxima are required and must be positive; a partial or
/// non-positive constraint set cannot be constructed. Callers gathering
/// constraints incrementally (e.g. from user input) hold `Option`s until
/// all three are known.
///
/// # Examples
///
/// ```
/// use u_truckload::models::TruckCapacity;
///
/// let cap = TruckCapacity::new(1000.0, 10.0, 6).unwrap();
/// assert_eq!(cap.max_weight(), 1000.0);
///
/// assert!(TruckCapacity::new(0.0, 10.0, 6).is_none());
/// assert!(TruckCapacity::new(1000.0, 10.0, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckCapacity {
    max_weight: f64,
    max_volume: f64,
    max_pallets: u32,
}

impl TruckCapacity {
    /// Creates a constraint set.
    ///
    /// Returns `None` if any maximum is non-positive or non-finite.
    pub fn new(max_weight: f64, max_volume: f64, max_pallets: u32) -> Option<Self> {
        if !max_weight.is_finite() || !max_volume.is_finite() {
            return None;
        }
        if max_weight <= 0.0 || max_volume <= 0.0 || max_pallets == 0 {
            return None;
        }
        Some(Self {
            max_weight,
            max_volume,
            max_pallets,
        })
    }

    /// Maximum gross weight.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Maximum volume.
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Maximum pallet count.
    pub fn max_pallets(&self) -> u32 {
        self.max_pallets
    }

    /// The capacity as a [`Load`] limit.
    pub fn as_load(&self) -> Load {
        Load::new(self.max_weight, self.max_volume, self.max_pallets)
            .expect("capacity dimensions are positive and finite")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_valid() {
        let cap = TruckCapacity::new(1000.0, 10.0, 6).expect("valid");
        assert_eq!(cap.max_weight(), 1000.0);
        assert_eq!(cap.max_volume(), 10.0);
        assert_eq!(cap.max_pallets(), 6);
    }

    #[test]
    fn test_capacity_rejects_non_positive() {
        assert!(TruckCapacity::new(0.0, 10.0, 6).is_none());
        assert!(TruckCapacity::new(-5.0, 10.0, 6).is_none());
        assert!(TruckCapacity::new(1000.0, 0.0, 6).is_none());
        assert!(TruckCapacity::new(1000.0, 10.0, 0).is_none());
    }

    #[test]
    fn test_capacity_rejects_non_finite() {
        assert!(TruckCapacity::new(f64::NAN, 10.0, 6).is_none());
        assert!(TruckCapacity::new(1000.0, f64::INFINITY, 6).is_none());
    }

    #[test]
    fn test_as_load() {
        let cap = TruckCapacity::new(1000.0, 10.0, 6).expect("valid");
        let limit = cap.as_load();
        assert_eq!(limit.weight(), 1000.0);
        assert_eq!(limit.volume(), 10.0);
        assert_eq!(limit.pallets(), 6);
    }
}
