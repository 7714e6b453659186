//! Views derived from the two datasets.
//!
//! Every function here is a pure function of its inputs: the same table
//! in the same order always yields the same view.

use crate::models::{AggregatedView, GareColumn, GareRecord, StationRecord};
use std::collections::{BTreeMap, HashMap};

pub const TRAFFIC_LABEL: &str = "Trafic";
pub const STATION_COUNT_LABEL: &str = "Nombre de stations";

/// The `n` busiest stations. Ties keep their input order.
pub fn top_stations_by_traffic(stations: &[StationRecord], n: usize) -> AggregatedView {
    AggregatedView::from_pairs(
        "Station",
        TRAFFIC_LABEL,
        stations.iter().map(|s| (s.station.clone(), s.traffic)),
    )
    .sorted_desc()
    .top(n)
}

/// Traffic summed per city, the `n` busiest cities first
pub fn top_cities_by_traffic(stations: &[StationRecord], n: usize) -> AggregatedView {
    let mut per_city: BTreeMap<&str, u64> = BTreeMap::new();
    for station in stations {
        *per_city.entry(station.city.as_str()).or_default() += station.traffic;
    }

    AggregatedView::from_pairs(
        "Ville",
        TRAFFIC_LABEL,
        per_city.into_iter().map(|(city, traffic)| (city.to_string(), traffic)),
    )
    .sorted_desc()
    .top(n)
}

/// Traffic summed per station on one network, the `n` busiest first.
///
/// An unknown network gives an empty view.
pub fn top_stations_for_network(
    stations: &[StationRecord],
    network: &str,
    n: usize,
) -> AggregatedView {
    let mut per_station: BTreeMap<&str, u64> = BTreeMap::new();
    for station in stations.iter().filter(|s| s.is_on_network(network)) {
        *per_station.entry(station.station.as_str()).or_default() += station.traffic;
    }

    AggregatedView::from_pairs(
        "Station",
        TRAFFIC_LABEL,
        per_station
            .into_iter()
            .map(|(name, traffic)| (name.to_string(), traffic)),
    )
    .sorted_desc()
    .top(n)
}

/// Number of rows per distinct value of `column`, in first-seen order
pub fn count_by_category(gares: &[GareRecord], column: GareColumn) -> AggregatedView {
    AggregatedView::from_pairs(
        column.label(),
        STATION_COUNT_LABEL,
        count_by(gares.iter(), |g| g.field(column)),
    )
}

/// Stations per line for one transport mode, most served line first.
///
/// An unknown mode gives an empty view.
pub fn lines_by_mode(gares: &[GareRecord], mode: &str) -> AggregatedView {
    AggregatedView::from_pairs(
        GareColumn::Line.label(),
        "Nombre de gares",
        count_by(gares.iter().filter(|g| g.mode == mode), |g| g.line.as_str()),
    )
    .sorted_desc()
}

/// Distinct values of `key` in first-seen order
pub fn distinct_values<'a, T, I, F>(rows: I, key: F) -> Vec<String>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    count_by(rows, key).into_iter().map(|(value, _)| value).collect()
}

/// Count rows per key, keeping keys in first-seen order
fn count_by<'a, T, I, F>(rows: I, key: F) -> Vec<(String, u64)>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for row in rows {
        let value = key(row);
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts
}
