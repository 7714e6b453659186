use crate::analyzers::aggregator::{
    count_by_category, distinct_values, top_cities_by_traffic, top_stations_by_traffic,
};
use crate::models::{AggregatedView, GareColumn, GareRecord, StationRecord};

#[derive(Debug)]
pub struct DatasetSummary {
    pub traffic: TrafficStats,
    pub gares: GareStats,
    pub top_stations: AggregatedView,
    pub top_cities: AggregatedView,
}

#[derive(Debug)]
pub struct TrafficStats {
    pub stations: usize,
    pub total_traffic: u64,
    pub networks: Vec<String>,
    pub cities: usize,
}

#[derive(Debug)]
pub struct GareStats {
    pub gares: usize,
    pub mapped: usize,
    pub unmapped: usize,
    pub operators: usize,
    pub lines: usize,
    pub modes: Vec<String>,
}

pub struct DatasetAnalyzer {
    top_stations: usize,
    top_cities: usize,
}

impl DatasetAnalyzer {
    pub fn new(top_stations: usize, top_cities: usize) -> Self {
        Self {
            top_stations,
            top_cities,
        }
    }

    pub fn analyze(&self, stations: &[StationRecord], gares: &[GareRecord]) -> DatasetSummary {
        let traffic = TrafficStats {
            stations: stations.len(),
            total_traffic: stations.iter().map(|s| s.traffic).sum(),
            networks: distinct_values(stations, |s| s.network.as_str()),
            cities: distinct_values(stations, |s| s.city.as_str()).len(),
        };

        let mapped = gares.iter().filter(|g| g.has_position()).count();

        let gare_stats = GareStats {
            gares: gares.len(),
            mapped,
            unmapped: gares.len() - mapped,
            operators: count_by_category(gares, GareColumn::Operator).len(),
            lines: count_by_category(gares, GareColumn::Line).len(),
            modes: count_by_category(gares, GareColumn::Mode)
                .keys()
                .map(str::to_string)
                .collect(),
        };

        DatasetSummary {
            traffic,
            gares: gare_stats,
            top_stations: top_stations_by_traffic(stations, self.top_stations),
            top_cities: top_cities_by_traffic(stations, self.top_cities),
        }
    }
}

impl Default for DatasetAnalyzer {
    fn default() -> Self {
        Self::new(
            crate::utils::constants::TOP_STATIONS,
            crate::utils::constants::TOP_CITIES,
        )
    }
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        format!(
            "Traffic dataset:\n\
            - Stations: {}\n\
            - Total annual traffic: {}\n\
            - Networks: {}\n\
            - Cities: {}\n\n\
            Station location dataset:\n\
            - Stations: {} ({} mapped, {} without a valid geo point)\n\
            - Operators: {}\n\
            - Lines: {}\n\
            - Modes: {}",
            self.traffic.stations,
            self.traffic.total_traffic,
            self.traffic.networks.join(", "),
            self.traffic.cities,
            self.gares.gares,
            self.gares.mapped,
            self.gares.unmapped,
            self.gares.operators,
            self.gares.lines,
            self.gares.modes.join(", "),
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.summary(),
            format_view("Top stations by traffic", &self.top_stations),
            format_view("Top cities by traffic", &self.top_cities),
        )
    }
}

fn format_view(title: &str, view: &AggregatedView) -> String {
    let mut out = format!("{}:", title);
    if view.is_empty() {
        out.push_str("\n  (none)");
    }
    for (i, entry) in view.entries.iter().enumerate() {
        out.push_str(&format!("\n  {:>2}. {:<40} {:>12}", i + 1, entry.key, entry.value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze() {
        let stations = vec![
            StationRecord::new("A".into(), "Paris".into(), "Métro".into(), 10),
            StationRecord::new("B".into(), "Paris".into(), "RER".into(), 30),
            StationRecord::new("C".into(), "Pantin".into(), "Métro".into(), 20),
        ];
        let gares = vec![
            GareRecord::new(
                "RATP".into(),
                "A".into(),
                "RER".into(),
                "Marne-la-Vallée Chessy".into(),
                "48.8697, 2.7828".into(),
            ),
            GareRecord::new(
                "RATP".into(),
                "1".into(),
                "METRO".into(),
                "Châtelet".into(),
                "48.8584, 2.3470".into(),
            ),
            GareRecord::new(
                "SNCF".into(),
                "P".into(),
                "TRAIN".into(),
                "Inconnue".into(),
                "".into(),
            ),
        ];

        let summary = DatasetAnalyzer::new(2, 1).analyze(&stations, &gares);

        assert_eq!(summary.traffic.stations, 3);
        assert_eq!(summary.traffic.total_traffic, 60);
        assert_eq!(summary.traffic.networks, vec!["Métro", "RER"]);
        assert_eq!(summary.traffic.cities, 2);
        assert_eq!(summary.gares.mapped, 2);
        assert_eq!(summary.gares.unmapped, 1);
        assert_eq!(summary.gares.operators, 2);
        assert_eq!(summary.gares.lines, 3);
        assert_eq!(summary.gares.modes, vec!["RER", "METRO", "TRAIN"]);
        assert_eq!(summary.top_stations.keys().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(summary.top_cities.entries[0].value, 40);

        let text = summary.detailed_summary();
        assert!(text.contains("Total annual traffic: 60"));
        assert!(text.contains("Top cities by traffic"));
    }

    #[test]
    fn test_empty_datasets() {
        let summary = DatasetAnalyzer::default().analyze(&[], &[]);
        assert_eq!(summary.gares.mapped, 0);
        assert!(summary.detailed_summary().contains("(none)"));
    }
}
