pub mod filters;
pub mod map_writer;
pub mod page_writer;

pub use map_writer::MapWriter;
pub use page_writer::{DashboardPage, Dropdown, PageWriter};
