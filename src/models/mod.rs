pub mod dates;
pub mod units;

pub use dates::{DateRange, DateRequest};
pub use units::{BookableUnit, UnitKind};
