pub mod gare;
pub mod station;
pub mod view;

pub use gare::{GareColumn, GareRecord, GareRow, GeoPoint};
pub use station::StationRecord;
pub use view::{AggregatedView, ViewEntry};
