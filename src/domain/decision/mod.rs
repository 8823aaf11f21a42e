//! Decision module - the journaled record and its lifecycle.
//!
//! A decision is framed, optionally sealed, and optionally retrospected.
//! Its `status` always reflects the highest stage implied by its dates.

mod outcome;
mod record;
mod status;

pub use outcome::OutcomeType;
pub use record::{validate_all, Decision};
pub use status::DecisionStatus;
