pub mod aggregator;
pub mod dataset_summary;

pub use aggregator::{
    count_by_category, distinct_values, lines_by_mode, top_cities_by_traffic,
    top_stations_by_traffic, top_stations_for_network,
};
pub use dataset_summary::{DatasetAnalyzer, DatasetSummary};
