pub mod delimited;
pub mod gare_reader;
pub mod traffic_reader;

pub use delimited::DelimitedReader;
pub use gare_reader::GareReader;
pub use traffic_reader::TrafficReader;
