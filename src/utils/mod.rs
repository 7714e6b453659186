pub mod constants;
pub mod coordinates;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use coordinates::split_geo_point;
pub use logging::init_logging;
pub use progress::ProgressReporter;
