//! Order and group total aggregation.

use std::collections::BTreeMap;

use crate::models::{Group, LineItem, Load};
use crate::{PlanError, Result};

/// Sums line items into per-order totals.
///
/// Orders appear in the result iff at least one line item references
/// them; an order's total is the sum of all its lines.
///
/// # Examples
///
/// ```
/// use u_truckload::aggregate::order_totals;
/// use u_truckload::models::{LineItem, Load};
///
/// let items = vec![
///     LineItem::new("SO1", Load::new(100.0, 1.0, 1).unwrap()),
///     LineItem::new("SO1", Load::new(50.0, 0.5, 1).unwrap()),
///     LineItem::new("SO2", Load::new(200.0, 2.0, 2).unwrap()),
/// ];
/// let totals = order_totals(&items);
/// assert_eq!(totals.len(), 2);
/// assert_eq!(totals["SO1"].weight(), 150.0);
/// assert_eq!(totals["SO1"].pallets(), 2);
/// ```
pub fn order_totals(items: &[LineItem]) -> BTreeMap<String, Load> {
    let mut totals: BTreeMap<String, Load> = BTreeMap::new();
    for item in items {
        let entry = totals
            .entry(item.order_id().to_string())
            .or_insert_with(Load::zero);
        *entry += item.load();
    }
    totals
}

/// Sums per-order totals into per-group totals.
///
/// Fails with [`PlanError::MissingOrderData`] if a group references an
/// order that has no entry in `order_totals`.
pub fn group_totals(
    groups: &[Group],
    order_totals: &BTreeMap<String, Load>,
) -> Result<BTreeMap<String, Load>> {
    let mut totals = BTreeMap::new();
    for group in groups {
        let mut total = Load::zero();
        for order_id in group.orders() {
            let order_total =
                order_totals
                    .get(order_id)
                    .ok_or_else(|| PlanError::MissingOrderData {
                        group_id: group.id().to_string(),
                        order_id: order_id.clone(),
                    })?;
            total += *order_total;
        }
        let _ = totals.insert(group.id().to_string(), total);
    }
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(order_id: &str, w: f64, v: f64, p: u32) -> LineItem {
        LineItem::new(order_id, Load::new(w, v, p).expect("valid"))
    }

    #[test]
    fn test_order_totals_empty() {
        assert!(order_totals(&[]).is_empty());
    }

    #[test]
    fn test_order_totals_sums_lines() {
        let items = vec![
            item("SO1", 100.0, 1.0, 1),
            item("SO2", 200.0, 2.0, 2),
            item("SO1", 50.0, 0.5, 1),
        ];
        let totals = order_totals(&items);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["SO1"].weight(), 150.0);
        assert_eq!(totals["SO1"].volume(), 1.5);
        assert_eq!(totals["SO1"].pallets(), 2);
        assert_eq!(totals["SO2"].weight(), 200.0);
    }

    #[test]
    fn test_group_totals_sums_orders() {
        let items = vec![
            item("SO1", 100.0, 1.0, 1),
            item("SO2", 200.0, 2.0, 2),
            item("SO3", 50.0, 4.0, 1),
        ];
        let order_totals = order_totals(&items);
        let groups = vec![
            Group::new("PO1", ["SO1", "SO2"]).expect("valid"),
            Group::new("PO2", ["SO3"]).expect("valid"),
        ];

        let totals = group_totals(&groups, &order_totals).expect("complete data");
        assert_eq!(totals["PO1"].weight(), 300.0);
        assert_eq!(totals["PO1"].volume(), 3.0);
        assert_eq!(totals["PO1"].pallets(), 3);
        assert_eq!(totals["PO2"].weight(), 50.0);
    }

    #[test]
    fn test_group_totals_missing_order_is_fatal() {
        let order_totals = order_totals(&[item("SO1", 100.0, 1.0, 1)]);
        let groups = vec![Group::new("PO1", ["SO1", "SO2"]).expect("valid")];

        let err = group_totals(&groups, &order_totals).expect_err("SO2 has no data");
        assert_eq!(
            err,
            PlanError::MissingOrderData {
                group_id: "PO1".to_string(),
                order_id: "SO2".to_string(),
            }
        );
    }
}
