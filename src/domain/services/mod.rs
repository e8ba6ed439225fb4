//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod alignment;
mod comparator;

pub use alignment::Shift;
pub use comparator::{ComparisonReport, OpenerComparator, DEFAULT_MAX_SHIFT, SUCCESS_MESSAGE};
