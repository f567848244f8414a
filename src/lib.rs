//! # u-truckload
//!
//! Truckload assignment optimization library. Packs pre-formed, atomic
//! order groups onto a minimal number of trucks, subject to independent
//! weight, volume, and pallet capacity limits on every truck.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Load, Group, Truck, Instance, Assignment)
//! - [`aggregate`] — Reduction of order line items into order and group totals
//! - [`evaluation`] — Feasibility checking and assignment verification
//! - [`solver`] — Assignment search engine (exact branch-and-bound with a
//!   first-fit-decreasing fallback)
//! - [`report`] — Per-truck utilization percentages and summary statistics

pub mod aggregate;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod solver;

/// Errors raised by aggregation, instance construction, or the solver.
///
/// Infeasibility and budget exhaustion are *not* errors; they are
/// reported through [`solver::SolveStatus`](crate::solver::SolveStatus).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A group references an order with no line-item data.
    #[error("group {group_id} references order {order_id} with no item data")]
    MissingOrderData {
        /// Group holding the dangling reference.
        group_id: String,
        /// Order id that has no aggregated totals.
        order_id: String,
    },

    /// Two groups in the same instance share an id.
    #[error("duplicate group id {0}")]
    DuplicateGroup(String),

    /// Internal solver failure. Never used for a merely hard instance.
    #[error("solver failure: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
