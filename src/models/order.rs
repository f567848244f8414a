//! Order line items.

use serde::{Deserialize, Serialize};

use super::Load;

/// One line of an order: the owning order id and the line's quantities.
///
/// Line items are the raw records the [`aggregate`](crate::aggregate)
/// module reduces into per-order totals.
///
/// # Examples
///
/// ```
/// use u_truckload::models::{LineItem, Load};
///
/// let item = LineItem::new("SO1000", Load::new(120.0, 1.5, 1).unwrap());
/// assert_eq!(item.order_id(), "SO1000");
/// assert_eq!(item.load().weight(), 120.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    order_id: String,
    load: Load,
}

impl LineItem {
    /// Creates a line item for the given order.
    pub fn new(order_id: impl Into<String>, load: Load) -> Self {
        Self {
            order_id: order_id.into(),
            load,
        }
    }

    /// The owning order's id.
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// The line's weight/volume/pallet quantities.
    pub fn load(&self) -> Load {
        self.load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item() {
        let item = LineItem::new("SO1000", Load::new(50.0, 0.5, 2).expect("valid"));
        assert_eq!(item.order_id(), "SO1000");
        assert_eq!(item.load().pallets(), 2);
    }
}
