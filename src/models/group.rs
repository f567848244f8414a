//! Order groups.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An atomic bundle of orders that must travel on the same truck.
///
/// Membership is fixed at construction and never relaxed: the solver
/// places whole groups, never individual orders.
///
/// # Examples
///
/// ```
/// use u_truckload::models::Group;
///
/// let g = Group::new("PO2000", ["SO1000", "SO1001"]).unwrap();
/// assert_eq!(g.id(), "PO2000");
/// assert_eq!(g.num_orders(), 2);
/// assert!(g.contains("SO1000"));
///
/// // A group with no orders is rejected.
/// assert!(Group::new("PO2001", Vec::<String>::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: String,
    orders: BTreeSet<String>,
}

impl Group {
    /// Creates a group over the given order ids.
    ///
    /// Returns `None` if the order set is empty. Duplicate ids collapse.
    pub fn new(
        id: impl Into<String>,
        orders: impl IntoIterator<Item = impl Into<String>>,
    ) -> Option<Self> {
        let orders: BTreeSet<String> = orders.into_iter().map(Into::into).collect();
        if orders.is_empty() {
            return None;
        }
        Some(Self {
            id: id.into(),
            orders,
        })
    }

    /// Group id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Member order ids, in sorted order.
    pub fn orders(&self) -> &BTreeSet<String> {
        &self.orders
    }

    /// Number of member orders (always at least one).
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// Returns `true` if the order belongs to this group.
    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.contains(order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_new() {
        let g = Group::new("PO1", ["SO1", "SO2"]).expect("valid");
        assert_eq!(g.id(), "PO1");
        assert_eq!(g.num_orders(), 2);
        assert!(g.contains("SO1"));
        assert!(!g.contains("SO3"));
    }

    #[test]
    fn test_group_empty_rejected() {
        assert!(Group::new("PO1", Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_group_duplicates_collapse() {
        let g = Group::new("PO1", ["SO1", "SO1", "SO2"]).expect("valid");
        assert_eq!(g.num_orders(), 2);
    }

    #[test]
    fn test_group_orders_sorted() {
        let g = Group::new("PO1", ["SO2", "SO1"]).expect("valid");
        let ids: Vec<&str> = g.orders().iter().map(String::as_str).collect();
        assert_eq!(ids, vec!["SO1", "SO2"]);
    }
}
