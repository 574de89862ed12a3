pub mod identity;
pub mod rows;
pub mod scoring;

pub use identity::{parse_event_date, parse_event_name, EventIdentity};
pub use rows::{parse_results_csv, RawRow, ValidRow};
pub use scoring::points_for;
