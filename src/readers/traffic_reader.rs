use crate::error::Result;
use crate::models::StationRecord;
use crate::readers::DelimitedReader;
use crate::utils::constants::{COL_CITY, COL_NETWORK, COL_STATION, COL_TRAFFIC};
use std::path::Path;
use tracing::info;

const REQUIRED_COLUMNS: [&str; 4] = [COL_TRAFFIC, COL_NETWORK, COL_STATION, COL_CITY];

pub struct TrafficReader {
    reader: DelimitedReader,
}

impl TrafficReader {
    pub fn new() -> Self {
        Self {
            reader: DelimitedReader::default(),
        }
    }

    pub fn with_reader(reader: DelimitedReader) -> Self {
        Self { reader }
    }

    /// Read the annual traffic per station file
    pub fn read_stations(&self, path: &Path) -> Result<Vec<StationRecord>> {
        let stations: Vec<StationRecord> = self.reader.read_records(path, &REQUIRED_COLUMNS)?;
        info!(path = %path.display(), stations = stations.len(), "loaded traffic dataset");
        Ok(stations)
    }
}

impl Default for TrafficReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_traffic_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            "Rang;Réseau;Station;Trafic;Correspondance_1;Ville;Arrondissement pour Paris"
        )?;
        writeln!(temp_file, "1;Ferré;GARE DU NORD;34503097;4;Paris;10")?;
        writeln!(temp_file, "2;Métro;SAINT-LAZARE;27481506;3;Paris;8")?;
        writeln!(temp_file, "3;RER;LA DEFENSE-GRANDE ARCHE;13926580;1;Puteaux;")?;

        let stations = TrafficReader::new().read_stations(temp_file.path())?;

        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].station, "GARE DU NORD");
        assert_eq!(stations[0].traffic, 34_503_097);
        assert_eq!(stations[1].network, "Métro");
        assert_eq!(stations[2].city, "Puteaux");

        Ok(())
    }

    #[test]
    fn test_non_numeric_traffic_fails() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Réseau;Station;Trafic;Ville")?;
        writeln!(temp_file, "Métro;CHATELET;lots;Paris")?;

        let result = TrafficReader::new().read_stations(temp_file.path());
        assert!(matches!(result, Err(DashboardError::DataLoad { .. })));

        Ok(())
    }

    #[test]
    fn test_read_real_traffic_file() -> Result<()> {
        let path = Path::new(crate::utils::constants::TRAFFIC_FILE);
        if !path.exists() {
            // Skip test if data file doesn't exist
            return Ok(());
        }

        let stations = TrafficReader::new().read_stations(path)?;
        assert!(!stations.is_empty(), "Should find at least one station");

        Ok(())
    }
}
