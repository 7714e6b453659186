use serde::{Deserialize, Serialize};

/// Annual entering traffic of one station of the RATP rail network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub station: String,

    #[serde(rename = "Ville")]
    pub city: String,

    #[serde(rename = "Réseau")]
    pub network: String,

    #[serde(rename = "Trafic")]
    pub traffic: u64,
}

impl StationRecord {
    pub fn new(station: String, city: String, network: String, traffic: u64) -> Self {
        Self {
            station,
            city,
            network,
            traffic,
        }
    }

    pub fn is_on_network(&self, network: &str) -> bool {
        self.network == network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_network_filter() {
        let station = StationRecord::new(
            "GARE DU NORD".to_string(),
            "Paris".to_string(),
            "Métro".to_string(),
            34_503_097,
        );

        assert!(station.is_on_network("Métro"));
        assert!(!station.is_on_network("RER"));
        assert!(!station.is_on_network("metro"));
    }
}
