//! Feasibility checking and assignment verification.
//!
//! - [`TruckState`] — One truck's capacity and accumulated load; answers
//!   whether a further group fits on all three dimensions at once
//! - [`verify_assignment`] — Post-hoc verification of a complete
//!   assignment (totality, references, per-dimension capacity respect)

mod feasibility;
mod verify;

pub use feasibility::TruckState;
pub use verify::verify_assignment;
